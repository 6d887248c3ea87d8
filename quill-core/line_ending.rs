//! Line terminators and line splitting over plain `str`s.
//!
//! Only LF and CRLF break lines by default. The `unicode-lines` feature adds
//! the remaining Unicode mandatory breaks.

use serde::{
  Deserialize,
  Serialize,
};

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Crlf;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::LF;

#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  Crlf,
  LF,
  #[cfg(feature = "unicode-lines")]
  VT,
  #[cfg(feature = "unicode-lines")]
  FF,
  #[cfg(feature = "unicode-lines")]
  CR,
  #[cfg(feature = "unicode-lines")]
  Nel,
  #[cfg(feature = "unicode-lines")]
  LS,
  #[cfg(feature = "unicode-lines")]
  PS,
}

/// Every recognized terminator with its text. CRLF comes first so that it
/// wins over a lone CR.
const TERMINATORS: &[(LineEnding, &str)] = &[
  (LineEnding::Crlf, "\r\n"),
  (LineEnding::LF, "\n"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::VT, "\u{000B}"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::FF, "\u{000C}"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::CR, "\r"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::Nel, "\u{0085}"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::LS, "\u{2028}"),
  #[cfg(feature = "unicode-lines")]
  (LineEnding::PS, "\u{2029}"),
];

impl Default for LineEnding {
  fn default() -> Self {
    NATIVE_LINE_ENDING
  }
}

impl LineEnding {
  #[inline]
  pub fn as_str(&self) -> &'static str {
    TERMINATORS
      .iter()
      .find_map(|(ending, text)| (ending == self).then_some(*text))
      .unwrap_or("\n")
  }

  /// The terminator `text` consists of, if it is exactly one.
  pub fn parse(text: &str) -> Option<LineEnding> {
    TERMINATORS
      .iter()
      .find_map(|(ending, terminator)| (*terminator == text).then_some(*ending))
  }

  /// The terminator `text` starts with, if any.
  fn prefix_of(text: &str) -> Option<LineEnding> {
    TERMINATORS
      .iter()
      .find_map(|(ending, terminator)| text.starts_with(*terminator).then_some(*ending))
  }
}

/// The terminator `line` ends with, if any.
pub fn line_ending_of(line: &str) -> Option<LineEnding> {
  TERMINATORS
    .iter()
    .find_map(|(ending, terminator)| line.ends_with(*terminator).then_some(*ending))
}

/// Returns `line` without its trailing line ending.
pub fn trim_line_ending(line: &str) -> &str {
  match line_ending_of(line) {
    Some(ending) => &line[..line.len() - ending.as_str().len()],
    None => line,
  }
}

/// Byte range of the first line break in `text`.
fn find_line_break(text: &str) -> Option<(usize, usize)> {
  text.char_indices().find_map(|(idx, _)| {
    LineEnding::prefix_of(&text[idx..]).map(|ending| (idx, idx + ending.as_str().len()))
  })
}

/// Splits `text` on line boundaries.
///
/// Empty lines are kept, including the one after a trailing line ending, so
/// `"a\n"` yields `"a"` and `""`, and the empty string yields a single empty
/// line. Joining the lines back with the original endings reproduces `text`.
pub fn split_lines(text: &str) -> Lines<'_> {
  Lines { rest: Some(text) }
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
  rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let rest = self.rest?;
    match find_line_break(rest) {
      Some((start, end)) => {
        self.rest = Some(&rest[end..]);
        Some(&rest[..start])
      },
      None => {
        self.rest = None;
        Some(rest)
      },
    }
  }
}

impl std::iter::FusedIterator for Lines<'_> {}
