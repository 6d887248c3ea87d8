//! Sequence combinators.
//!
//! A sequence is folded either into one fused [`Text`] (`join*`, `lines*`)
//! or into a lazy [`Items`] iterator of fragments. Both skip absent entries
//! (`None`) without advancing the position handed to projections, and write
//! the separator only between two present entries.
//!
//! Fused texts keep the source and iterate a clone of it on every render,
//! so the source should be cheap to clone: a borrowed slice of `'static`
//! data, a range, or a small vector.

use crate::{
  Step,
  Text,
  error::Result,
  render::Render,
  writer::Writer,
};

/// A sequence item that may be absent.
///
/// Every [`Render`] value is present. `Option` is absent when `None`. Types
/// that are neither can be passed through `.map(Some)`.
pub trait Entry {
  type Item;

  fn present(self) -> Option<Self::Item>;
}

impl<T: Render> Entry for T {
  type Item = T;

  #[inline]
  fn present(self) -> Option<T> {
    Some(self)
  }
}

impl<T> Entry for Option<T> {
  type Item = T;

  #[inline]
  fn present(self) -> Option<T> {
    self
  }
}

impl<'a, T> Entry for &'a Option<T> {
  type Item = &'a T;

  #[inline]
  fn present(self) -> Option<&'a T> {
    self.as_ref()
  }
}

pub type Present<I> = <<I as IntoIterator>::Item as Entry>::Item;

impl Text {
  /// Joins the present items of `source` with `separator` between them.
  pub fn join<I>(source: I, separator: impl Into<Text>) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    Present<I>: Render,
  {
    Text::join_write(source, separator, |writer, item, _| item.write_to(writer))
  }

  /// Like [`join`](Text::join), rendering `project(item, index)` for each
  /// item. `index` counts present items only.
  pub fn join_with<I, F, R>(source: I, separator: impl Into<Text>, project: F) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    F: Fn(Present<I>, usize) -> R + Send + Sync + 'static,
    R: Into<Step>,
  {
    Text::join_write(source, separator, move |writer, item, index| {
      let step: Step = project(item, index).into();
      step.write_to(writer)
    })
  }

  /// The general form: `write_item` writes each present item directly.
  pub fn join_write<I, F>(source: I, separator: impl Into<Text>, write_item: F) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    F: Fn(&mut Writer<'_>, Present<I>, usize) -> Result<()> + Send + Sync + 'static,
  {
    let separator = separator.into();
    Text::write(move |writer| {
      let items = source.clone().into_iter().filter_map(Entry::present);
      for (index, item) in items.enumerate() {
        if index > 0 {
          separator.write_to(writer)?;
        }
        write_item(writer, item, index)?;
      }
      Ok(())
    })
  }

  /// Present items as separate fragments, with `separator` yielded between
  /// them.
  pub fn items<I>(source: I, separator: impl Into<Text>) -> Items<I::IntoIter, fn(Present<I>, usize) -> Text>
  where
    I: IntoIterator,
    I::Item: Entry,
    Present<I>: Into<Step>,
  {
    let project: fn(Present<I>, usize) -> Text = |item, _| Text::of(item);
    Text::items_with(source, separator, project)
  }

  pub fn items_with<I, F, R>(source: I, separator: impl Into<Text>, project: F) -> Items<I::IntoIter, F>
  where
    I: IntoIterator,
    I::Item: Entry,
    F: FnMut(Present<I>, usize) -> R,
    R: Into<Text>,
  {
    Items {
      source: source.into_iter(),
      project,
      separator: separator.into(),
      index: 0,
      pending: None,
    }
  }

  /// Present items, one per line. No terminator follows the last line.
  pub fn lines<I>(source: I) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    Present<I>: Render,
  {
    Text::join(source, Text::newline())
  }

  pub fn lines_with<I, F, R>(source: I, project: F) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    F: Fn(Present<I>, usize) -> R + Send + Sync + 'static,
    R: Into<Step>,
  {
    Text::join_with(source, Text::newline(), project)
  }

  /// Exactly `count` line terminators.
  pub fn blank_lines(count: usize) -> Text {
    Text::write(move |writer| {
      for _ in 0..count {
        writer.write_line()?;
      }
      Ok(())
    })
  }

  pub fn append_join<I>(&self, source: I, separator: impl Into<Text>) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    Present<I>: Render,
  {
    self.append(Text::join(source, separator))
  }

  pub fn append_lines<I>(&self, source: I) -> Text
  where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Entry,
    Present<I>: Render,
  {
    self.append(Text::lines(source))
  }
}

/// Lazy fragments of a sequence. See [`Text::items`].
///
/// `Items` is as restartable as its source: cloning it before iterating
/// replays the same fragments when the source iterator is `Clone`.
#[derive(Clone)]
pub struct Items<I, F> {
  source:    I,
  project:   F,
  separator: Text,
  index:     usize,
  pending:   Option<Text>,
}

impl<I, F, R> Iterator for Items<I, F>
where
  I: Iterator,
  I::Item: Entry,
  F: FnMut(<I::Item as Entry>::Item, usize) -> R,
  R: Into<Text>,
{
  type Item = Text;

  fn next(&mut self) -> Option<Text> {
    if let Some(fragment) = self.pending.take() {
      return Some(fragment);
    }
    let item = self.source.by_ref().find_map(Entry::present)?;
    let fragment = (self.project)(item, self.index).into();
    self.index += 1;
    if self.index == 1 {
      Some(fragment)
    } else {
      self.pending = Some(fragment);
      Some(self.separator.clone())
    }
  }
}

/// `to_text` and friends on anything iterable.
pub trait ToText: IntoIterator + Sized {
  fn to_text(self, separator: impl Into<Text>) -> Text
  where
    Self: Clone + Send + Sync + 'static,
    Self::Item: Entry,
    Present<Self>: Render,
  {
    Text::join(self, separator)
  }

  fn to_text_with<F, R>(self, separator: impl Into<Text>, project: F) -> Text
  where
    Self: Clone + Send + Sync + 'static,
    Self::Item: Entry,
    F: Fn(Present<Self>, usize) -> R + Send + Sync + 'static,
    R: Into<Step>,
  {
    Text::join_with(self, separator, project)
  }

  fn to_text_items(
    self,
    separator: impl Into<Text>,
  ) -> Items<Self::IntoIter, fn(Present<Self>, usize) -> Text>
  where
    Self::Item: Entry,
    Present<Self>: Into<Step>,
  {
    Text::items(self, separator)
  }

  fn to_text_items_with<F, R>(self, separator: impl Into<Text>, project: F) -> Items<Self::IntoIter, F>
  where
    Self::Item: Entry,
    F: FnMut(Present<Self>, usize) -> R,
    R: Into<Text>,
  {
    Text::items_with(self, separator, project)
  }
}

impl<I: IntoIterator> ToText for I {}

#[cfg(test)]
mod tests {
  use quill_core::{
    FormatContext,
    LineEnding,
  };

  use super::*;

  fn render(text: &Text) -> String {
    text
      .render_with_context(&FormatContext::default().with_line_ending(LineEnding::LF))
      .unwrap()
  }

  #[test]
  fn join_with_separator() {
    assert_eq!(render(&Text::join(["A", "B", "C"], ", ")), "A, B, C");
    assert_eq!(render(&Text::join(Vec::<&str>::new(), ", ")), "");
    assert_eq!(render(&Text::join([1, 2, 3], Text::empty())), "123");
  }

  #[test]
  fn absent_items_do_not_advance_index() {
    let source = [Some("A"), None, Some("C")];
    assert_eq!(render(&Text::join(source, ", ")), "A, C");

    let indexed = Text::join_with(source, ", ", |item, index| Text::format("{0}{1}", (item, index)));
    assert_eq!(render(&indexed), "A0, C1");
  }

  #[test]
  fn join_write_gets_writer() {
    let text = Text::join_write(1..=3, '|', |w, item, index| {
      write!(w, "{}:{}", index, item * 10)
    });
    assert_eq!(render(&text), "0:10|1:20|2:30");
  }

  #[test]
  fn join_renders_repeatedly() {
    let text = Text::join(["x", "y"], "-");
    assert_eq!(render(&text), "x-y");
    assert_eq!(render(&text), "x-y");
  }

  #[test]
  fn items_interleave_separators() {
    let fragments: Vec<String> = Text::items([Some("a"), None, Some("b"), Some("c")], ",")
      .map(|fragment| render(&fragment))
      .collect();
    assert_eq!(fragments, vec!["a", ",", "b", ",", "c"]);
  }

  #[test]
  fn items_restart_from_clone() {
    let items = Text::items_with(["p", "q"], Text::empty(), |item, index| {
      Text::of(item).append(index)
    });
    let first: Vec<String> = items.clone().map(|t| render(&t)).collect();
    let second: Vec<String> = items.map(|t| render(&t)).collect();
    assert_eq!(first, vec!["p0", "", "q1"]);
    assert_eq!(first, second);
  }

  #[test]
  fn lines_and_blank_lines() {
    assert_eq!(render(&Text::lines(["a", "b"])), "a\nb");
    assert_eq!(
      render(&Text::lines_with(["a", "b"], |item, index| Text::of(index) + ' ' + item)),
      "0 a\n1 b"
    );
    assert_eq!(render(&Text::blank_lines(3)), "\n\n\n");
    assert_eq!(render(&Text::blank_lines(0)), "");
  }

  #[test]
  fn texts_as_items() {
    let parts = vec![Text::of("x") + 1, Text::empty(), Text::of('y')];
    assert_eq!(render(&parts.to_text(" ")), "x1  y");
  }

  #[test]
  fn extension_forms() {
    assert_eq!(render(&["a", "b"].to_text_with("+", |s, i| Text::of(s).append(i))), "a0+b1");
    let count = ["a", "b", "c"].to_text_items(";").count();
    assert_eq!(count, 5);
    assert_eq!(render(&Text::of("list: ").append_join([1, 2], ", ")), "list: 1, 2");
  }

  quickcheck::quickcheck! {
    fn join_matches_std_join(parts: Vec<String>) -> bool {
      render(&Text::join(parts.clone(), ", ")) == parts.join(", ")
    }

    fn skipped_entries_match_flatten(parts: Vec<Option<String>>) -> bool {
      let expected = parts.iter().flatten().cloned().collect::<Vec<_>>().join("/");
      render(&Text::join(parts, "/")) == expected
    }
  }
}
