//! Leaf constructors.
//!
//! Each adapter wraps one source into a single-step [`Text`]. None of them
//! does any work up front: a line source is not read, a template is not
//! parsed and a callback is not run until the text is rendered.

use std::{
  fmt,
  io::{
    self,
    BufRead,
  },
  sync::Arc,
};

use parking_lot::Mutex;
use quill_core::line_ending::trim_line_ending;

use crate::{
  Step,
  Tendril,
  Text,
  error::{
    RenderError,
    Result,
  },
  render::Render,
  step::FormatArgs,
  writer::Writer,
};

/// Something that hands out lines until it runs dry.
pub trait LineSource {
  /// The next line without its terminator, or `None` at end of input.
  fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
  fn read_line(&mut self) -> io::Result<Option<String>> {
    let mut line = String::new();
    if BufRead::read_line(self, &mut line)? == 0 {
      return Ok(None);
    }
    let len = trim_line_ending(&line).len();
    line.truncate(len);
    Ok(Some(line))
  }
}

/// A [`LineSource`] over an iterator of already split lines.
#[derive(Debug, Clone)]
pub struct IterLines<I>(pub I);

impl<I, S> LineSource for IterLines<I>
where
  I: Iterator<Item = S>,
  S: Into<String>,
{
  fn read_line(&mut self) -> io::Result<Option<String>> {
    Ok(self.0.next().map(Into::into))
  }
}

struct Displayed<T>(T);

impl<T: fmt::Display> Render for Displayed<T> {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    write!(writer, "{}", self.0)
  }
}

fn line_break() -> Step {
  Step::write(|writer| writer.write_line())
}

impl Text {
  /// A single-step text. An absent value (`None`) gives the empty text, as
  /// `Text::from` does.
  pub fn of(value: impl Into<Step>) -> Text {
    let step = value.into();
    if step.is_absent() {
      Text::empty()
    } else {
      Text::empty().append(step)
    }
  }

  /// A text rendering `value` through its [`Display`](fmt::Display) impl.
  pub fn display<T>(value: T) -> Text
  where
    T: fmt::Display + Send + Sync + 'static,
  {
    Text::of(Step::value(Displayed(value)))
  }

  /// A text running `f` against the sink on every render.
  pub fn write<F>(f: F) -> Text
  where
    F: Fn(&mut Writer<'_>) -> Result<()> + Send + Sync + 'static,
  {
    Text::of(Step::write(f))
  }

  /// Drains `source` when rendered, writing each line followed by the
  /// context's line terminator.
  ///
  /// The source is consumed by the first render. Later renders find it
  /// exhausted and write only what it still yields.
  pub fn read<R>(source: R) -> Text
  where
    R: LineSource + Send + 'static,
  {
    let source = Arc::new(Mutex::new(source));
    Text::write(move |writer| {
      let mut source = source.lock();
      let mut lines = 0usize;
      while let Some(line) = source.read_line().map_err(RenderError::Read)? {
        writer.write_str(&line)?;
        writer.write_line()?;
        lines += 1;
      }
      tracing::trace!(lines, "drained line source");
      Ok(())
    })
  }

  /// A positional template such as `"{0} of {1}"`.
  ///
  /// The template is parsed at render time; a malformed one or a missing
  /// argument fails the render with [`RenderError::Template`].
  pub fn format(template: impl Into<Tendril>, args: impl FormatArgs) -> Text {
    let template = template.into();
    let args = args.into_steps();
    Text::write(move |writer| writer.write_template(&template, &args))
  }

  pub fn type_name<T: ?Sized>() -> Text {
    Text::of(std::any::type_name::<T>())
  }

  pub fn type_name_of<T: ?Sized>(_: &T) -> Text {
    Text::type_name::<T>()
  }

  /// Just the line terminator.
  pub fn newline() -> Text {
    Text::of(line_break())
  }

  pub fn line(value: impl Into<Step>) -> Text {
    Text::of(value).append(line_break())
  }

  pub fn line_format(template: impl Into<Tendril>, args: impl FormatArgs) -> Text {
    Text::format(template, args).append(line_break())
  }

  pub fn append_newline(&self) -> Text {
    self.append(line_break())
  }

  pub fn append_line(&self, value: impl Into<Step>) -> Text {
    self.append(value).append(line_break())
  }

  pub fn append_display<T>(&self, value: T) -> Text
  where
    T: fmt::Display + Send + Sync + 'static,
  {
    self.append(Text::display(value))
  }

  pub fn append_format(&self, template: impl Into<Tendril>, args: impl FormatArgs) -> Text {
    self.append(Text::format(template, args))
  }

  pub fn append_line_format(&self, template: impl Into<Tendril>, args: impl FormatArgs) -> Text {
    self.append(Text::line_format(template, args))
  }

  pub fn append_type_name<T: ?Sized>(&self) -> Text {
    self.append(std::any::type_name::<T>())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use quill_core::{
    FormatContext,
    LineEnding,
    template::TemplateError,
  };

  use super::*;

  fn lf() -> FormatContext {
    FormatContext::default().with_line_ending(LineEnding::LF)
  }

  #[test]
  fn display_values() {
    #[derive(Clone)]
    struct Point(i32, i32);
    impl fmt::Display for Point {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
      }
    }
    assert_eq!(Text::display(Point(1, -2)).render().unwrap(), "(1, -2)");
  }

  #[test]
  fn read_is_deferred_and_drains_once() {
    let text = Text::read(Cursor::new("one\r\ntwo\nthree"));
    assert_eq!(text.render_with_context(&lf()).unwrap(), "one\ntwo\nthree\n");
    assert_eq!(text.render_with_context(&lf()).unwrap(), "");
  }

  #[test]
  fn read_iterator_lines() {
    let text = Text::of("> ") + Text::read(IterLines(vec!["a", "b"].into_iter()));
    assert_eq!(text.render_with_context(&lf()).unwrap(), "> a\nb\n");
  }

  #[test]
  fn read_errors_propagate() {
    struct Failing;
    impl LineSource for Failing {
      fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::other("gone"))
      }
    }
    let err = Text::read(Failing).render().unwrap_err();
    assert!(matches!(err, RenderError::Read(_)));
  }

  #[test]
  fn format_positional() {
    let text = Text::format("{1} {0}s, {{{2}}}", ("apple", 3, Text::of('x')));
    assert_eq!(text.render().unwrap(), "3 apples, {x}");
    assert_eq!(
      Text::format("{0,-5}|", ["ab"]).render().unwrap(),
      "ab   |"
    );
  }

  #[test]
  fn format_errors_surface_at_render() {
    let text = Text::format("{0} {1}", ("only",));
    assert!(matches!(
      text.render(),
      Err(RenderError::Template(TemplateError::IndexOutOfRange { index: 1, count: 1 }))
    ));
  }

  #[test]
  fn lines_and_type_names() {
    let text = Text::line("a") + Text::line_format("{0}", (2,)) + Text::newline();
    assert_eq!(text.render_with_context(&lf()).unwrap(), "a\n2\n\n");
    assert_eq!(Text::type_name::<u8>().render().unwrap(), "u8");
    assert_eq!(Text::type_name_of(&1i64).render().unwrap(), "i64");
  }

  #[test]
  fn chained_appends() {
    let text = Text::of("fn ")
      .append_type_name::<bool>()
      .append_format("({0})", ["x"])
      .append_line(';');
    assert_eq!(text.render_with_context(&lf()).unwrap(), "fn bool(x);\n");
  }
}
