//! The sink side of rendering.
//!
//! A [`Writer`] pairs any [`fmt::Write`] with the [`FormatContext`] in force
//! for one render. Steps only ever see a `Writer`, so the same [`Text`]
//! renders into a `String`, a formatter, a rope or an io stream.
//!
//! [`Text`]: crate::Text

use std::{
  fmt,
  io,
};

use quill_core::{
  FormatContext,
  grapheme::str_width,
  template::{
    self,
    Segment,
    TemplateError,
  },
};

use crate::{
  Step,
  error::{
    RenderError,
    Result,
  },
  render::Render,
};

pub struct Writer<'a> {
  out:    &'a mut dyn fmt::Write,
  format: &'a FormatContext,
}

impl<'a> Writer<'a> {
  pub fn new(out: &'a mut dyn fmt::Write, format: &'a FormatContext) -> Self {
    Self { out, format }
  }

  /// Formatting conventions for this render.
  #[inline]
  pub fn format(&self) -> &'a FormatContext {
    self.format
  }

  #[inline]
  pub(crate) fn sink(&mut self) -> &mut dyn fmt::Write {
    &mut *self.out
  }

  #[inline]
  pub fn write_str(&mut self, s: &str) -> Result<()> {
    self.out.write_str(s)?;
    Ok(())
  }

  #[inline]
  pub fn write_char(&mut self, ch: char) -> Result<()> {
    self.out.write_char(ch)?;
    Ok(())
  }

  pub fn write<V: Render + ?Sized>(&mut self, value: &V) -> Result<()> {
    value.write_to(self)
  }

  /// Writes the line terminator of the current context.
  pub fn write_line(&mut self) -> Result<()> {
    self.write_str(self.format.newline())
  }

  pub fn write_line_of<V: Render + ?Sized>(&mut self, value: &V) -> Result<()> {
    value.write_to(self)?;
    self.write_line()
  }

  pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
    self.out.write_fmt(args)?;
    Ok(())
  }

  /// Writes `template` with its placeholders replaced by `args`.
  ///
  /// The template is checked against `args` before anything is written, so
  /// a malformed template leaves the sink untouched.
  pub fn write_template(&mut self, template: &str, args: &[Step]) -> Result<()> {
    template::validate(template, args.len())?;

    for segment in template::parse(template) {
      match segment? {
        Segment::Literal(literal) => self.write_str(literal)?,
        Segment::Argument { index, alignment } => {
          let arg = args.get(index).ok_or(TemplateError::IndexOutOfRange {
            index,
            count: args.len(),
          })?;
          if alignment == 0 {
            arg.write_to(self)?;
          } else {
            self.write_aligned(arg, alignment)?;
          }
        },
      }
    }
    Ok(())
  }

  fn write_aligned(&mut self, arg: &Step, alignment: i32) -> Result<()> {
    let mut rendered = String::new();
    arg.write_to(&mut Writer::new(&mut rendered, self.format))?;

    let width = alignment.unsigned_abs() as usize;
    let padding = width.saturating_sub(str_width(&rendered));
    if alignment > 0 {
      self.write_padding(padding)?;
      self.write_str(&rendered)
    } else {
      self.write_str(&rendered)?;
      self.write_padding(padding)
    }
  }

  fn write_padding(&mut self, count: usize) -> Result<()> {
    for _ in 0..count {
      self.write_char(' ')?;
    }
    Ok(())
  }
}

/// Adapts an [`io::Write`] to [`fmt::Write`], keeping the io error that
/// `fmt::Error` cannot carry.
pub(crate) struct IoSink<W> {
  inner: W,
  error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
  pub(crate) fn new(inner: W) -> Self {
    Self { inner, error: None }
  }

  /// Turns a sink failure back into the io error that caused it.
  pub(crate) fn finish(mut self, result: Result<()>) -> Result<()> {
    match (result, self.error.take()) {
      (Err(RenderError::Sink(_)), Some(err)) => Err(RenderError::Io(err)),
      (Ok(()), _) => self.inner.flush().map_err(RenderError::Io),
      (result, _) => result,
    }
  }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.inner.write_all(s.as_bytes()).map_err(|err| {
      self.error = Some(err);
      fmt::Error
    })
  }
}
