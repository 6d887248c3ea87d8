//! Truncation with an ellipsis.
//!
//! Lengths count grapheme clusters. With a single-cluster ellipsis, which
//! the default `…` is, a truncated result is at most `max_len` clusters
//! long: exactly `max_len` for the single-sided forms and for an even
//! midpoint, one fewer for an odd midpoint.

use quill_core::grapheme::{
  grapheme_count,
  last_graphemes,
  take_graphemes,
};
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

pub const ELLIPSIS: &str = "…";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CompactOptions {
  pub ellipsis: Tendril,
}

impl Default for CompactOptions {
  fn default() -> Self {
    Self {
      ellipsis: ELLIPSIS.into(),
    }
  }
}

impl CompactOptions {
  pub fn with_ellipsis(ellipsis: &str) -> Self {
    Self {
      ellipsis: ellipsis.into(),
    }
  }
}

/// Texts shorter than this are never halved.
const MIN_HALVING_LEN: usize = 3;

#[derive(Clone, Copy)]
enum Side {
  Middle,
  Left,
  Right,
}

/// Head and tail kept when cutting `source` down to `max_len`, or `None`
/// if it already fits.
fn cut(source: &str, max_len: usize, side: Side) -> Option<(&str, &str)> {
  if grapheme_count(source) <= max_len {
    return None;
  }
  // One cluster goes to the ellipsis.
  let kept = max_len.saturating_sub(1);
  Some(match side {
    // The tail is one shorter than the head, so an odd `max_len` loses one
    // more cluster.
    Side::Middle => {
      let head = max_len / 2;
      (
        take_graphemes(source, head),
        last_graphemes(source, head.saturating_sub(1)),
      )
    },
    Side::Left => ("", last_graphemes(source, kept)),
    Side::Right => (take_graphemes(source, kept), ""),
  })
}

impl Text {
  /// Halves the rendered text around an ellipsis. Texts under three
  /// clusters are left alone.
  pub fn compact_half(&self) -> Text {
    self.compact_half_with(CompactOptions::default())
  }

  pub fn compact_half_with(&self, options: CompactOptions) -> Text {
    let text = self.clone();
    Text::write(move |writer| {
      let source = render_nested(&text, writer)?;
      let len = grapheme_count(&source);
      if len < MIN_HALVING_LEN {
        return writer.write_str(&source);
      }
      write_cut(writer, &source, len / 2, Side::Middle, &options)
    })
  }

  /// Keeps the start and end, replacing the middle with an ellipsis.
  pub fn compact(&self, max_len: usize) -> Text {
    self.compact_with(max_len, CompactOptions::default())
  }

  pub fn compact_with(&self, max_len: usize, options: CompactOptions) -> Text {
    self.compact_on(max_len, Side::Middle, options)
  }

  /// Keeps the end, with the ellipsis in front.
  pub fn compact_left(&self, max_len: usize) -> Text {
    self.compact_left_with(max_len, CompactOptions::default())
  }

  pub fn compact_left_with(&self, max_len: usize, options: CompactOptions) -> Text {
    self.compact_on(max_len, Side::Left, options)
  }

  /// Keeps the start, with the ellipsis after it.
  pub fn compact_right(&self, max_len: usize) -> Text {
    self.compact_right_with(max_len, CompactOptions::default())
  }

  pub fn compact_right_with(&self, max_len: usize, options: CompactOptions) -> Text {
    self.compact_on(max_len, Side::Right, options)
  }

  fn compact_on(&self, max_len: usize, side: Side, options: CompactOptions) -> Text {
    let text = self.clone();
    Text::write(move |writer| {
      let source = render_nested(&text, writer)?;
      write_cut(writer, &source, max_len, side, &options)
    })
  }

  pub fn append_compacted(&self, value: impl Into<Text>, max_len: usize) -> Text {
    self.append(value.into().compact(max_len))
  }

  pub fn append_compacted_left(&self, value: impl Into<Text>, max_len: usize) -> Text {
    self.append(value.into().compact_left(max_len))
  }

  pub fn append_compacted_right(&self, value: impl Into<Text>, max_len: usize) -> Text {
    self.append(value.into().compact_right(max_len))
  }
}

fn write_cut(
  writer: &mut Writer<'_>,
  source: &str,
  max_len: usize,
  side: Side,
  options: &CompactOptions,
) -> Result<()> {
  match cut(source, max_len, side) {
    None => writer.write_str(source),
    Some((head, tail)) => {
      writer.write_str(head)?;
      writer.write_str(&options.ellipsis)?;
      writer.write_str(tail)
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(text: &Text) -> String {
    text.render().unwrap()
  }

  #[test]
  fn midpoint() {
    let text = Text::of("abcdefghij");
    assert_eq!(render(&text.compact(6)), "abc…ij");
    assert_eq!(render(&text.compact(7)), "abc…ij");
    assert_eq!(render(&text.compact(5)), "ab…i");
    assert_eq!(render(&text.compact(2)), "a…");
    assert_eq!(render(&text.compact(10)), "abcdefghij");
    assert_eq!(render(&text.compact(20)), "abcdefghij");
    assert_eq!(render(&text.compact(1)), "…");
    assert_eq!(render(&text.compact(0)), "…");
  }

  #[test]
  fn halving() {
    assert_eq!(render(&Text::of("abcdefghij").compact_half()), "ab…j");
    assert_eq!(render(&Text::of("abcdefghijkl").compact_half()), "abc…kl");
    assert_eq!(render(&Text::of("ab").compact_half()), "ab");
    assert_eq!(render(&Text::of("abc").compact_half()), "…");
  }

  #[test]
  fn single_sided() {
    let text = Text::of("abcdefghij");
    assert_eq!(render(&text.compact_left(4)), "…hij");
    assert_eq!(render(&text.compact_right(4)), "abc…");
    assert_eq!(render(&text.compact_left(10)), "abcdefghij");
  }

  #[test]
  fn custom_ellipsis_and_clusters() {
    let text = Text::of("abcdefghij");
    assert_eq!(
      render(&text.compact_right_with(5, CompactOptions::with_ellipsis("..."))),
      "abcd..."
    );
    // Each "e\u{301}" is one cluster and is never split.
    let accented = Text::of("e\u{301}".repeat(6));
    assert_eq!(render(&accented.compact(4)), "e\u{301}e\u{301}…e\u{301}");
  }

  #[test]
  fn chained() {
    let text = Text::of("path: ").append_compacted_left("/very/long/path", 6);
    assert_eq!(render(&text), "path: …/path");
  }

  quickcheck::quickcheck! {
    fn compacted_length_is_bounded(source: String, max_len: usize) -> bool {
      let max_len = max_len % 64 + 1;
      let rendered = render(&Text::of(source.as_str()).compact(max_len));
      grapheme_count(&rendered) <= max_len.max(grapheme_count(ELLIPSIS))
        || grapheme_count(&source) <= max_len
    }
  }
}
