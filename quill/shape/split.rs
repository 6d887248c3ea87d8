use std::iter::FusedIterator;

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Text,
  error::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SplitOptions {
  pub keep_empty: bool,
  /// Upper bound on the number of fields. The last field holds the rest of
  /// the text, separators included.
  pub max_fields: Option<usize>,
}

impl Default for SplitOptions {
  fn default() -> Self {
    Self {
      keep_empty: true,
      max_fields: None,
    }
  }
}

impl SplitOptions {
  pub fn dropping_empty() -> Self {
    Self {
      keep_empty: false,
      ..Self::default()
    }
  }

  pub fn with_max_fields(mut self, max_fields: usize) -> Self {
    self.max_fields = Some(max_fields);
    self
  }
}

/// Fields of a split text, each a leaf [`Text`].
///
/// The source is rendered once, when [`Text::split`] is called; fields are
/// cut from that string as the iterator advances.
#[derive(Debug, Clone)]
pub struct Fields {
  source:     String,
  separator:  String,
  pos:        Option<usize>,
  keep_empty: bool,
  remaining:  usize,
}

impl Fields {
  fn new(source: String, separator: String, options: SplitOptions) -> Self {
    Self {
      source,
      separator,
      pos: Some(0),
      keep_empty: options.keep_empty,
      remaining: options.max_fields.unwrap_or(usize::MAX),
    }
  }

  fn next_field(&mut self) -> Option<(usize, usize)> {
    loop {
      let start = self.pos?;
      if self.remaining == 0 {
        self.pos = None;
        return None;
      }
      let rest = &self.source[start..];

      if self.separator.is_empty() || self.remaining == 1 {
        self.pos = None;
        let mut offset = 0;
        if !self.keep_empty && !self.separator.is_empty() {
          while rest[offset..].starts_with(self.separator.as_str()) {
            offset += self.separator.len();
          }
        }
        if !self.keep_empty && offset == rest.len() {
          return None;
        }
        self.remaining -= 1;
        return Some((start + offset, self.source.len()));
      }

      let end = match rest.find(self.separator.as_str()) {
        Some(idx) => {
          self.pos = Some(start + idx + self.separator.len());
          start + idx
        },
        None => {
          self.pos = None;
          self.source.len()
        },
      };
      if !self.keep_empty && end == start {
        continue;
      }
      self.remaining -= 1;
      return Some((start, end));
    }
  }
}

impl Iterator for Fields {
  type Item = Text;

  fn next(&mut self) -> Option<Text> {
    let (start, end) = self.next_field()?;
    Some(Text::of(&self.source[start..end]))
  }
}

impl FusedIterator for Fields {}

impl Text {
  /// Renders the text with the ambient context and splits it on the
  /// rendered `separator`.
  ///
  /// An empty separator yields the whole text as one field.
  pub fn split(&self, separator: impl Into<Text>, options: SplitOptions) -> Result<Fields> {
    let source = self.render()?;
    let separator = separator.into().render()?;
    tracing::trace!(
      len = source.len(),
      separator = %separator.escape_debug(),
      "splitting rendered text"
    );
    Ok(Fields::new(source, separator, options))
  }

  pub fn split_spaces(&self, options: SplitOptions) -> Result<Fields> {
    self.split(' ', options)
  }

  pub fn split_commas(&self, options: SplitOptions) -> Result<Fields> {
    self.split(',', options)
  }

  /// Splits on the ambient context's line terminator.
  pub fn split_lines(&self, options: SplitOptions) -> Result<Fields> {
    self.split(Text::newline(), options)
  }
}
