//! Deferred write steps.
//!
//! A [`Step`] is one unit of output bound to a node of a [`Text`] chain.
//! Common sources have their own variant so that building a chain out of
//! literals and numbers allocates nothing beyond the node itself; anything
//! else goes through a shared [`Render`] value or a callback.

use std::{
  borrow::Cow,
  fmt,
  sync::Arc,
};

use crate::{
  Tendril,
  Text,
  error::Result,
  render::Render,
  writer::Writer,
};

pub(crate) type WriteFn = dyn Fn(&mut Writer<'_>) -> Result<()> + Send + Sync;

#[derive(Clone, Default)]
pub struct Step(Kind);

#[derive(Clone, Default)]
enum Kind {
  #[default]
  Empty,
  Literal(Tendril),
  Char(char),
  Bool(bool),
  Signed(i128),
  Unsigned(u128),
  F32(f32),
  F64(f64),
  Nested(Text),
  Value(Arc<dyn Render + Send + Sync>),
  Write(Arc<WriteFn>),
}

impl Step {
  pub const fn empty() -> Self {
    Self(Kind::Empty)
  }

  /// A step rendering `value` through its [`Render`] impl.
  pub fn value<V>(value: V) -> Self
  where
    V: Render + Send + Sync + 'static,
  {
    Self(Kind::Value(Arc::new(value)))
  }

  /// A step running `f` against the sink on every render.
  pub fn write<F>(f: F) -> Self
  where
    F: Fn(&mut Writer<'_>) -> Result<()> + Send + Sync + 'static,
  {
    Self(Kind::Write(Arc::new(f)))
  }

  /// True for steps known to write nothing. A callback or an empty nested
  /// text is not inspected.
  pub fn is_empty(&self) -> bool {
    match &self.0 {
      Kind::Empty => true,
      Kind::Literal(s) => s.is_empty(),
      Kind::Nested(text) => text.is_empty(),
      _ => false,
    }
  }

  /// True only for the step that converts from `None`.
  pub(crate) fn is_absent(&self) -> bool {
    matches!(self.0, Kind::Empty)
  }

  pub(crate) fn nested(&self) -> Option<&Text> {
    match &self.0 {
      Kind::Nested(text) => Some(text),
      _ => None,
    }
  }

  /// Moves a nested text out, leaving the empty text behind.
  pub(crate) fn take_nested(&mut self) -> Option<Text> {
    match &mut self.0 {
      Kind::Nested(text) => Some(std::mem::take(text)),
      _ => None,
    }
  }
}

impl Render for Step {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    match &self.0 {
      Kind::Empty => Ok(()),
      Kind::Literal(s) => writer.write_str(s),
      Kind::Char(ch) => writer.write_char(*ch),
      Kind::Bool(value) => value.write_to(writer),
      Kind::Signed(value) => value.write_to(writer),
      Kind::Unsigned(value) => value.write_to(writer),
      Kind::F32(value) => value.write_to(writer),
      Kind::F64(value) => value.write_to(writer),
      Kind::Nested(text) => text.write_to(writer),
      Kind::Value(value) => value.write_to(writer),
      Kind::Write(f) => f(writer),
    }
  }
}

impl fmt::Debug for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Kind::Empty => f.write_str("Empty"),
      Kind::Literal(s) => f.debug_tuple("Literal").field(&s.as_str()).finish(),
      Kind::Char(ch) => f.debug_tuple("Char").field(ch).finish(),
      Kind::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
      Kind::Signed(value) => f.debug_tuple("Signed").field(value).finish(),
      Kind::Unsigned(value) => f.debug_tuple("Unsigned").field(value).finish(),
      Kind::F32(value) => f.debug_tuple("F32").field(value).finish(),
      Kind::F64(value) => f.debug_tuple("F64").field(value).finish(),
      Kind::Nested(text) => f.debug_tuple("Nested").field(text).finish(),
      Kind::Value(_) => f.write_str("Value(..)"),
      Kind::Write(_) => f.write_str("Write(..)"),
    }
  }
}

impl From<&str> for Step {
  fn from(s: &str) -> Self {
    Self(Kind::Literal(s.into()))
  }
}

impl From<&String> for Step {
  fn from(s: &String) -> Self {
    Self(Kind::Literal(s.as_str().into()))
  }
}

impl From<String> for Step {
  fn from(s: String) -> Self {
    Self(Kind::Literal(s.into()))
  }
}

impl From<Tendril> for Step {
  fn from(s: Tendril) -> Self {
    Self(Kind::Literal(s))
  }
}

impl From<Cow<'_, str>> for Step {
  fn from(s: Cow<'_, str>) -> Self {
    Self(Kind::Literal(s.as_ref().into()))
  }
}

impl From<char> for Step {
  fn from(ch: char) -> Self {
    Self(Kind::Char(ch))
  }
}

impl From<bool> for Step {
  fn from(value: bool) -> Self {
    Self(Kind::Bool(value))
  }
}

impl From<f32> for Step {
  fn from(value: f32) -> Self {
    Self(Kind::F32(value))
  }
}

impl From<f64> for Step {
  fn from(value: f64) -> Self {
    Self(Kind::F64(value))
  }
}

macro_rules! step_from_integers {
  ($kind:ident as $wide:ty: $($ty:ty),*) => {
    $(
      impl From<$ty> for Step {
        fn from(value: $ty) -> Self {
          Self(Kind::$kind(value as $wide))
        }
      }
    )*
  };
}

step_from_integers!(Signed as i128: i8, i16, i32, i64, i128, isize);
step_from_integers!(Unsigned as u128: u8, u16, u32, u64, u128, usize);

impl From<Text> for Step {
  fn from(text: Text) -> Self {
    Self(Kind::Nested(text))
  }
}

impl From<&Text> for Step {
  fn from(text: &Text) -> Self {
    Self(Kind::Nested(text.clone()))
  }
}

impl<T: Into<Step>> From<Option<T>> for Step {
  fn from(value: Option<T>) -> Self {
    value.map_or_else(Step::empty, Into::into)
  }
}

/// Positional arguments for [`Text::format`].
///
/// Implemented for tuples of up to six values, arrays and `Vec`s of anything
/// convertible to a [`Step`].
pub trait FormatArgs {
  fn into_steps(self) -> Vec<Step>;
}

impl<T: Into<Step>> FormatArgs for Vec<T> {
  fn into_steps(self) -> Vec<Step> {
    self.into_iter().map(Into::into).collect()
  }
}

impl<T: Into<Step>, const N: usize> FormatArgs for [T; N] {
  fn into_steps(self) -> Vec<Step> {
    self.into_iter().map(Into::into).collect()
  }
}

macro_rules! format_args_tuple {
  ($($name:ident),+) => {
    impl<$($name: Into<Step>),+> FormatArgs for ($($name,)+) {
      #[allow(non_snake_case)]
      fn into_steps(self) -> Vec<Step> {
        let ($($name,)+) = self;
        vec![$($name.into()),+]
      }
    }
  };
}

format_args_tuple!(A);
format_args_tuple!(A, B);
format_args_tuple!(A, B, C);
format_args_tuple!(A, B, C, D);
format_args_tuple!(A, B, C, D, E);
format_args_tuple!(A, B, C, D, E, F);
