//! TOML configuration for formatting conventions and shaping defaults.
//!
//! ```toml
//! [format]
//! negative-sign = "-"
//! line-ending = "lf"
//!
//! [indent]
//! unit = "    "
//!
//! [compact]
//! ellipsis = "..."
//! ```
//!
//! Every section and key is optional. Unknown keys are rejected.

use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
  sync::Arc,
};

use quill_core::FormatContext;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use toml::{
  Table,
  Value,
};

use crate::{
  Text,
  error::RenderError,
  shape::{
    CompactOptions,
    Fields,
    IndentOptions,
    ScopeOptions,
    SplitOptions,
  },
};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("invalid configuration: {0}")]
  Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub format:  FormatContext,
  pub indent:  IndentOptions,
  pub scope:   ScopeOptions,
  pub compact: CompactOptions,
  pub split:   SplitOptions,
}

impl Config {
  pub fn from_toml(source: &str) -> Result<Config> {
    Ok(toml::from_str(source)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config = Config::from_toml(&read(path)?)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
  }

  /// Loads `global`, then overrides it key by key with `local`. Missing
  /// files are skipped; with neither present the defaults apply.
  pub fn load_layered(global: impl AsRef<Path>, local: impl AsRef<Path>) -> Result<Config> {
    let mut merged = Table::new();
    for path in [global.as_ref(), local.as_ref()] {
      let source = match read(path) {
        Ok(source) => source,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
          tracing::debug!(path = %path.display(), "config not found, skipping");
          continue;
        },
        Err(err) => return Err(err),
      };
      let layer: Table = toml::from_str(&source)?;
      merge_tables(&mut merged, layer);
      tracing::debug!(path = %path.display(), "merged config layer");
    }
    Ok(Value::Table(merged).try_into()?)
  }

  /// Makes `format` the ambient context, returning the previous one.
  pub fn install(&self) -> Arc<FormatContext> {
    FormatContext::set_current(self.format.clone())
  }

  pub fn indent(&self, text: &Text) -> Text {
    text.indent_with(self.indent.clone())
  }

  pub fn indent_scope(&self, text: &Text) -> Text {
    text.indent_scope_with(self.scope.clone())
  }

  pub fn compact(&self, text: &Text, max_len: usize) -> Text {
    text.compact_with(max_len, self.compact.clone())
  }

  pub fn split(
    &self,
    text: &Text,
    separator: impl Into<Text>,
  ) -> std::result::Result<Fields, RenderError> {
    text.split(separator, self.split)
  }
}

fn read(path: &Path) -> Result<String> {
  fs::read_to_string(path).map_err(|source| ConfigError::Io {
    path: path.to_path_buf(),
    source,
  })
}

/// Tables merge recursively; any other value in `right` replaces the one
/// in `left`.
fn merge_tables(left: &mut Table, right: Table) {
  for (key, value) in right {
    if let Value::Table(right) = value {
      if let Some(Value::Table(left)) = left.get_mut(&key) {
        merge_tables(left, right);
        continue;
      }
      left.insert(key, Value::Table(right));
    } else {
      left.insert(key, value);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use quill_core::LineEnding;

  use super::*;

  #[test]
  fn empty_source_is_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
  }

  #[test]
  fn parse_sections() {
    let config = Config::from_toml(
      r#"
        [format]
        negative-sign = "~"
        line-ending = "crlf"

        [indent]
        unit = "\t"
        retain-level = true

        [scope]
        start = "("
        end = ")"

        [compact]
        ellipsis = "..."

        [split]
        keep-empty = false
        max-fields = 3
      "#,
    )
    .unwrap();

    assert_eq!(config.format.negative_sign.as_str(), "~");
    assert_eq!(config.format.line_ending, LineEnding::Crlf);
    assert_eq!(config.indent.unit.as_str(), "\t");
    assert_eq!(config.indent.level, 1);
    assert!(config.indent.retain_level);
    assert_eq!(config.scope.start.as_str(), "(");
    assert_eq!(config.compact.ellipsis.as_str(), "...");
    assert_eq!(config.split, SplitOptions {
      keep_empty: false,
      max_fields: Some(3),
    });
  }

  #[test]
  fn unknown_keys_rejected() {
    assert!(matches!(
      Config::from_toml("[indent]\nwidth = 4"),
      Err(ConfigError::Toml(_))
    ));
    assert!(Config::from_toml("[colors]").is_err());
  }

  #[test]
  fn applies_options() {
    let config = Config::from_toml(
      "[indent]\nunit = \"-\"\nlevel = 2\n[format]\nline-ending = \"lf\"",
    )
    .unwrap();
    let text = config.indent(&Text::of("a\nb"));
    assert_eq!(text.render_with_context(&config.format).unwrap(), "--a\n--b");

    let fields = config.split(&Text::of("a b"), ' ').unwrap().count();
    assert_eq!(fields, 2);
  }

  #[test]
  fn layered_files() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "[indent]\nunit = \"\\t\"\nlevel = 2\n[compact]\nellipsis = \"~\"").unwrap();
    fs::write(&local, "[indent]\nlevel = 3").unwrap();

    let config = Config::load_layered(&global, &local).unwrap();
    assert_eq!(config.indent.unit.as_str(), "\t");
    assert_eq!(config.indent.level, 3);
    assert_eq!(config.compact.ellipsis.as_str(), "~");

    let only_global = Config::load_layered(&global, dir.path().join("missing.toml")).unwrap();
    assert_eq!(only_global.indent.level, 2);
  }

  #[test]
  fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
  }
}
