//! Locale-style formatting conventions for rendered values.
//!
//! A [`FormatContext`] decides how primitives look once written: the sign
//! used for negative numbers, the decimal separator, the names of the two
//! booleans and the line terminator. Every render runs against exactly one
//! context; when the caller does not supply one, the ambient
//! [`FormatContext::current`] applies.

use std::{
  fmt::{
    self,
    Write,
  },
  sync::Arc,
};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Tendril,
  line_ending::{
    LineEnding,
    NATIVE_LINE_ENDING,
  },
};

// The ambient context is process-wide, like the working directory: renders
// that are not handed a context explicitly read it here.
static CURRENT: Lazy<RwLock<Arc<FormatContext>>> =
  Lazy::new(|| RwLock::new(Arc::new(FormatContext::default())));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FormatContext {
  pub negative_sign:     Tendril,
  pub decimal_separator: Tendril,
  pub true_name:         Tendril,
  pub false_name:        Tendril,
  pub line_ending:       LineEnding,
}

impl Default for FormatContext {
  fn default() -> Self {
    Self {
      negative_sign:     Tendril::from("-"),
      decimal_separator: Tendril::from("."),
      true_name:         Tendril::from("true"),
      false_name:        Tendril::from("false"),
      line_ending:       NATIVE_LINE_ENDING,
    }
  }
}

impl FormatContext {
  /// The context used when a render is not given one.
  pub fn current() -> Arc<FormatContext> {
    CURRENT.read().clone()
  }

  /// Replace the ambient context, returning the previous one.
  pub fn set_current(context: FormatContext) -> Arc<FormatContext> {
    tracing::debug!(?context, "replacing ambient format context");
    std::mem::replace(&mut *CURRENT.write(), Arc::new(context))
  }

  pub fn with_negative_sign(mut self, sign: &str) -> Self {
    self.negative_sign = sign.into();
    self
  }

  pub fn with_decimal_separator(mut self, separator: &str) -> Self {
    self.decimal_separator = separator.into();
    self
  }

  pub fn with_bool_names(mut self, true_name: &str, false_name: &str) -> Self {
    self.true_name = true_name.into();
    self.false_name = false_name.into();
    self
  }

  pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
    self.line_ending = line_ending;
    self
  }

  #[inline]
  pub fn newline(&self) -> &'static str {
    self.line_ending.as_str()
  }

  pub fn write_bool(&self, out: &mut dyn Write, value: bool) -> fmt::Result {
    out.write_str(if value {
      self.true_name.as_str()
    } else {
      self.false_name.as_str()
    })
  }

  pub fn write_signed(&self, out: &mut dyn Write, value: i128) -> fmt::Result {
    if value < 0 {
      out.write_str(&self.negative_sign)?;
    }
    write!(out, "{}", value.unsigned_abs())
  }

  pub fn write_unsigned(&self, out: &mut dyn Write, value: u128) -> fmt::Result {
    write!(out, "{value}")
  }

  pub fn write_f64(&self, out: &mut dyn Write, value: f64) -> fmt::Result {
    self.write_float(out, value.is_sign_negative() && !value.is_nan(), value.abs())
  }

  // Kept apart from `write_f64`: widening first would print the f32's binary
  // expansion instead of its shortest representation.
  pub fn write_f32(&self, out: &mut dyn Write, value: f32) -> fmt::Result {
    self.write_float(out, value.is_sign_negative() && !value.is_nan(), value.abs())
  }

  fn write_float(
    &self,
    out: &mut dyn Write,
    negative: bool,
    magnitude: impl fmt::Display,
  ) -> fmt::Result {
    // -0.0 prints as "0", matching integer zero.
    let mut digits = Tendril::new();
    write!(digits, "{magnitude}")?;
    if negative && digits.as_str() != "0" {
      out.write_str(&self.negative_sign)?;
    }
    match digits.split_once('.') {
      Some((whole, fraction)) => {
        out.write_str(whole)?;
        out.write_str(&self.decimal_separator)?;
        out.write_str(fraction)
      },
      None => out.write_str(&digits),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn render(f: impl FnOnce(&FormatContext, &mut String) -> fmt::Result) -> String {
    render_in(&FormatContext::default(), f)
  }

  fn render_in(
    context: &FormatContext,
    f: impl FnOnce(&FormatContext, &mut String) -> fmt::Result,
  ) -> String {
    let mut out = String::new();
    f(context, &mut out).unwrap();
    out
  }

  #[test]
  fn integers() {
    assert_eq!(render(|c, o| c.write_signed(o, -1)), "-1");
    assert_eq!(render(|c, o| c.write_signed(o, 42)), "42");
    assert_eq!(
      render(|c, o| c.write_signed(o, i128::from(i64::MIN))),
      "-9223372036854775808"
    );
    assert_eq!(render(|c, o| c.write_unsigned(o, u128::MAX)), u128::MAX.to_string());
  }

  #[test]
  fn negative_sign_override() {
    let context = FormatContext::default().with_negative_sign("~");
    assert_eq!(render_in(&context, |c, o| c.write_signed(o, -1)), "~1");
    assert_eq!(render_in(&context, |c, o| c.write_f64(o, -2.5)), "~2.5");
  }

  #[test]
  fn floats() {
    assert_eq!(render(|c, o| c.write_f64(o, 1.5)), "1.5");
    assert_eq!(render(|c, o| c.write_f64(o, 3.0)), "3");
    assert_eq!(render(|c, o| c.write_f64(o, -0.0)), "0");
    assert_eq!(render(|c, o| c.write_f32(o, 1.1)), "1.1");
    assert_eq!(render(|c, o| c.write_f64(o, f64::NAN)), "NaN");
    assert_eq!(render(|c, o| c.write_f64(o, f64::NEG_INFINITY)), "-inf");

    let context = FormatContext::default().with_decimal_separator(",");
    assert_eq!(render_in(&context, |c, o| c.write_f64(o, 1.25)), "1,25");
  }

  #[test]
  fn bools() {
    assert_eq!(render(|c, o| c.write_bool(o, true)), "true");
    let context = FormatContext::default().with_bool_names("True", "False");
    assert_eq!(render_in(&context, |c, o| c.write_bool(o, false)), "False");
  }

  #[test]
  fn deserialize_partial() {
    let context: FormatContext =
      serde_json::from_str(r#"{ "negative-sign": "~", "line-ending": "crlf" }"#).unwrap();
    assert_eq!(context.negative_sign.as_str(), "~");
    assert_eq!(context.decimal_separator.as_str(), ".");
    assert_eq!(context.newline(), "\r\n");
  }
}
