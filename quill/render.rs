use std::{
  borrow::Cow,
  rc::Rc,
  sync::Arc,
};

use crate::{
  Tendril,
  error::Result,
  writer::Writer,
};

/// A value with a canonical textual form.
///
/// Primitives defer to the writer's [`FormatContext`], so the same value can
/// render differently under different conventions.
///
/// `Option` is deliberately not `Render`: absence is handled by sequence
/// combinators through [`Entry`](crate::many::Entry), and by `Step`'s `From`
/// impl, where `None` writes nothing.
///
/// [`FormatContext`]: quill_core::FormatContext
pub trait Render {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()>;
}

impl Render for str {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    writer.write_str(self)
  }
}

impl Render for String {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    writer.write_str(self)
  }
}

impl Render for Tendril {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    writer.write_str(self)
  }
}

impl Render for Cow<'_, str> {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    writer.write_str(self)
  }
}

impl Render for char {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    writer.write_char(*self)
  }
}

impl Render for bool {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    let format = writer.format();
    format.write_bool(writer.sink(), *self)?;
    Ok(())
  }
}

macro_rules! render_integers {
  ($method:ident as $wide:ty: $($ty:ty),*) => {
    $(
      impl Render for $ty {
        fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
          let format = writer.format();
          format.$method(writer.sink(), *self as $wide)?;
          Ok(())
        }
      }
    )*
  };
}

render_integers!(write_signed as i128: i8, i16, i32, i64, i128, isize);
render_integers!(write_unsigned as u128: u8, u16, u32, u64, u128, usize);

impl Render for f32 {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    let format = writer.format();
    format.write_f32(writer.sink(), *self)?;
    Ok(())
  }
}

impl Render for f64 {
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    let format = writer.format();
    format.write_f64(writer.sink(), *self)?;
    Ok(())
  }
}

impl<T: Render + ?Sized> Render for &T {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    (**self).write_to(writer)
  }
}

impl<T: Render + ?Sized> Render for Box<T> {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    (**self).write_to(writer)
  }
}

impl<T: Render + ?Sized> Render for Arc<T> {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    (**self).write_to(writer)
  }
}

impl<T: Render + ?Sized> Render for Rc<T> {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    (**self).write_to(writer)
  }
}

#[cfg(test)]
mod tests {
  use quill_core::FormatContext;

  use super::*;

  fn render_in(format: &FormatContext, value: &dyn Render) -> String {
    let mut out = String::new();
    value
      .write_to(&mut Writer::new(&mut out, format))
      .unwrap();
    out
  }

  fn render(value: &dyn Render) -> String {
    render_in(&FormatContext::default(), value)
  }

  #[test]
  fn primitives() {
    assert_eq!(render(&true), "true");
    assert_eq!(render(&'x'), "x");
    assert_eq!(render(&-12i8), "-12");
    assert_eq!(render(&u64::MAX), "18446744073709551615");
    assert_eq!(render(&i64::MIN), "-9223372036854775808");
    assert_eq!(render(&0.5f32), "0.5");
    assert_eq!(render(&-2.25f64), "-2.25");
    assert_eq!(render(&Cow::Borrowed("cow")), "cow");
    assert_eq!(render(&Arc::new(String::from("shared"))), "shared");
  }

  #[test]
  fn context_conventions() {
    let format = FormatContext::default()
      .with_negative_sign("~")
      .with_decimal_separator(",")
      .with_bool_names("yes", "no");
    assert_eq!(render_in(&format, &-1), "~1");
    assert_eq!(render_in(&format, &-1.5), "~1,5");
    assert_eq!(render_in(&format, &false), "no");
  }
}
