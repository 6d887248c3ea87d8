use quill_core::line_ending::split_lines;
use serde::{
  Deserialize,
  Serialize,
};

use super::render_nested;
use crate::{
  Tendril,
  Text,
  error::Result,
  writer::Writer,
};

pub const TAB_INDENT: &str = "\t";
pub const TWO_SPACE_INDENT: &str = "  ";
pub const FOUR_SPACE_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct IndentOptions {
  /// One level of indentation.
  pub unit:         Tendril,
  pub level:        usize,
  /// Add the levels a line already has to `level` instead of replacing
  /// them.
  pub retain_level: bool,
}

impl Default for IndentOptions {
  fn default() -> Self {
    Self {
      unit:         TWO_SPACE_INDENT.into(),
      level:        1,
      retain_level: false,
    }
  }
}

impl IndentOptions {
  pub fn tabs() -> Self {
    Self {
      unit: TAB_INDENT.into(),
      ..Self::default()
    }
  }

  pub fn spaces(width: usize) -> Self {
    Self {
      unit: " ".repeat(width).into(),
      ..Self::default()
    }
  }

  pub fn with_level(mut self, level: usize) -> Self {
    self.level = level;
    self
  }

  pub fn retaining_level(mut self, retain_level: bool) -> Self {
    self.retain_level = retain_level;
    self
  }
}

/// A block: start token, indented body, end token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ScopeOptions {
  pub start:        Tendril,
  pub end:          Tendril,
  pub unit:         Tendril,
  /// Base level. The body sits one level deeper.
  pub level:        usize,
  pub retain_level: bool,
}

impl Default for ScopeOptions {
  fn default() -> Self {
    Self {
      start:        "{".into(),
      end:          "}".into(),
      unit:         TWO_SPACE_INDENT.into(),
      level:        0,
      retain_level: false,
    }
  }
}

impl ScopeOptions {
  pub fn tokens(start: &str, end: &str) -> Self {
    Self {
      start: start.into(),
      end: end.into(),
      ..Self::default()
    }
  }

  pub fn with_unit(mut self, unit: &str) -> Self {
    self.unit = unit.into();
    self
  }

  pub fn with_level(mut self, level: usize) -> Self {
    self.level = level;
    self
  }

  pub fn retaining_level(mut self, retain_level: bool) -> Self {
    self.retain_level = retain_level;
    self
  }

  fn body(&self) -> IndentOptions {
    IndentOptions {
      unit:         self.unit.clone(),
      level:        self.level + 1,
      retain_level: self.retain_level,
    }
  }
}

/// Strips leading `unit`s from `line`, returning the rest and how many
/// were removed. An empty unit strips nothing.
fn strip_units<'a>(line: &'a str, unit: &str) -> (&'a str, usize) {
  if unit.is_empty() {
    return (line, 0);
  }
  let mut rest = line;
  let mut level = 0;
  while let Some(stripped) = rest.strip_prefix(unit) {
    rest = stripped;
    level += 1;
  }
  (rest, level)
}

fn write_indented(writer: &mut Writer<'_>, source: &str, options: &IndentOptions) -> Result<()> {
  for (idx, line) in split_lines(source).enumerate() {
    if idx > 0 {
      writer.write_line()?;
    }
    let (rest, line_level) = strip_units(line, &options.unit);
    let level = if options.retain_level {
      options.level + line_level
    } else {
      options.level
    };
    for _ in 0..level {
      writer.write_str(&options.unit)?;
    }
    writer.write_str(rest)?;
  }
  Ok(())
}

impl Text {
  /// Indents every line one level with two spaces.
  pub fn indent(&self) -> Text {
    self.indent_with(IndentOptions::default())
  }

  /// Re-indents every line of the rendered text.
  ///
  /// Lines are joined with the context's terminator and the last line gets
  /// none, whatever the input ended with.
  pub fn indent_with(&self, options: IndentOptions) -> Text {
    let text = self.clone();
    Text::write(move |writer| {
      let source = render_nested(&text, writer)?;
      write_indented(writer, &source, &options)
    })
  }

  pub fn indent_with_tabs(&self, level: usize, retain_level: bool) -> Text {
    self.indent_with(
      IndentOptions::tabs()
        .with_level(level)
        .retaining_level(retain_level),
    )
  }

  pub fn indent_with_spaces(&self, width: usize, level: usize, retain_level: bool) -> Text {
    self.indent_with(
      IndentOptions::spaces(width)
        .with_level(level)
        .retaining_level(retain_level),
    )
  }

  /// Wraps the text in a `{ .. }` block.
  pub fn indent_scope(&self) -> Text {
    self.indent_scope_with(ScopeOptions::default())
  }

  pub fn indent_scope_with(&self, options: ScopeOptions) -> Text {
    let text = self.clone();
    let body = options.body();
    Text::write(move |writer| {
      writer.write_str(&options.start)?;
      writer.write_line()?;
      let source = render_nested(&text, writer)?;
      write_indented(writer, &source, &body)?;
      writer.write_line()?;
      writer.write_str(&options.end)
    })
  }

  pub fn append_indented(&self, body: impl Into<Text>, options: IndentOptions) -> Text {
    self.append(body.into().indent_with(options))
  }

  pub fn append_indented_scope(&self, body: impl Into<Text>, options: ScopeOptions) -> Text {
    self.append(body.into().indent_scope_with(options))
  }
}
