//! Grapheme-aware measuring and slicing of `str`s.
//!
//! Lengths used for truncation count extended grapheme clusters, so a cut
//! never lands inside a combined character. Widths used for alignment count
//! terminal columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
  if text.is_ascii() {
    // Every ASCII byte is its own cluster except CRLF, which forms one.
    return text.len() - text.matches("\r\n").count();
  }
  text.graphemes(true).count()
}

/// The first `n` grapheme clusters of `text`.
#[must_use]
pub fn take_graphemes(text: &str, n: usize) -> &str {
  match text.grapheme_indices(true).nth(n) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

/// The last `n` grapheme clusters of `text`.
#[must_use]
pub fn last_graphemes(text: &str, n: usize) -> &str {
  if n == 0 {
    return "";
  }
  match text.grapheme_indices(true).nth_back(n - 1) {
    Some((idx, _)) => &text[idx..],
    None => text,
  }
}

/// Visual width of a single grapheme.
#[must_use]
pub fn grapheme_width(g: &str) -> usize {
  if g.is_ascii() {
    g.len()
  } else {
    // Ensure a minimum width of 1 for ill-formed clusters.
    UnicodeWidthStr::width(g).max(1)
  }
}

/// Visual width of `text` in terminal columns.
#[must_use]
pub fn str_width(text: &str) -> usize {
  if text.is_ascii() {
    return text.len();
  }
  text.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn count_ascii_and_clusters() {
    assert_eq!(grapheme_count(""), 0);
    assert_eq!(grapheme_count("abc"), 3);
    assert_eq!(grapheme_count("a\r\nb"), 3);
    // e + combining acute accent
    assert_eq!(grapheme_count("e\u{0301}x"), 2);
    assert_eq!(grapheme_count("…"), 1);
  }

  #[test]
  fn take_and_last() {
    assert_eq!(take_graphemes("abcdef", 3), "abc");
    assert_eq!(take_graphemes("abc", 10), "abc");
    assert_eq!(take_graphemes("abc", 0), "");
    assert_eq!(last_graphemes("abcdef", 2), "ef");
    assert_eq!(last_graphemes("abc", 10), "abc");
    assert_eq!(last_graphemes("abc", 0), "");
    assert_eq!(take_graphemes("e\u{0301}e\u{0301}", 1), "e\u{0301}");
    assert_eq!(last_graphemes("ae\u{0301}", 1), "e\u{0301}");
  }

  #[test]
  fn widths() {
    assert_eq!(str_width("abc"), 3);
    assert_eq!(str_width("漢字"), 4);
    assert_eq!(grapheme_width("\u{0301}"), 1);
  }

  quickcheck::quickcheck! {
    fn take_then_last_covers_text(text: String, n: usize) -> bool {
      let count = grapheme_count(&text);
      let n = if count == 0 { 0 } else { n % (count + 1) };
      let head = take_graphemes(&text, n);
      let tail = last_graphemes(&text, count - n);
      format!("{head}{tail}") == text
    }
  }
}
