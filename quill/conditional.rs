//! Conditional texts.
//!
//! The `bool` forms choose while the text is being built. The `_fn` forms
//! defer the choice into the render step, calling the predicate once per
//! render.

use crate::Text;

impl Text {
  /// `then` when `condition` holds, otherwise the empty text.
  pub fn when(condition: bool, then: impl Into<Text>) -> Text {
    if condition { then.into() } else { Text::empty() }
  }

  pub fn when_else(condition: bool, then: impl Into<Text>, otherwise: impl Into<Text>) -> Text {
    if condition {
      then.into()
    } else {
      otherwise.into()
    }
  }

  /// `otherwise` when `condition` does not hold, otherwise the empty text.
  pub fn when_not(condition: bool, otherwise: impl Into<Text>) -> Text {
    Text::when(!condition, otherwise)
  }

  /// `when_false` if `condition` is false, `when_true` if it is true.
  pub fn when_not_else(
    condition: bool,
    when_false: impl Into<Text>,
    when_true: impl Into<Text>,
  ) -> Text {
    Text::when_else(condition, when_true, when_false)
  }

  pub fn when_fn<P>(predicate: P, then: impl Into<Text>) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    Text::when_fn_else(predicate, then, Text::empty())
  }

  pub fn when_fn_else<P>(predicate: P, then: impl Into<Text>, otherwise: impl Into<Text>) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    let then = then.into();
    let otherwise = otherwise.into();
    Text::write(move |writer| {
      if predicate() {
        then.write_to(writer)
      } else {
        otherwise.write_to(writer)
      }
    })
  }

  pub fn when_not_fn<P>(predicate: P, otherwise: impl Into<Text>) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    Text::when_fn_else(predicate, Text::empty(), otherwise)
  }

  pub fn when_not_fn_else<P>(
    predicate: P,
    when_false: impl Into<Text>,
    when_true: impl Into<Text>,
  ) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    Text::when_fn_else(predicate, when_true, when_false)
  }

  pub fn append_when(&self, condition: bool, then: impl Into<Text>) -> Text {
    self.append(Text::when(condition, then))
  }

  pub fn append_when_else(
    &self,
    condition: bool,
    then: impl Into<Text>,
    otherwise: impl Into<Text>,
  ) -> Text {
    self.append(Text::when_else(condition, then, otherwise))
  }

  pub fn append_when_not(&self, condition: bool, otherwise: impl Into<Text>) -> Text {
    self.append(Text::when_not(condition, otherwise))
  }

  pub fn append_when_fn<P>(&self, predicate: P, then: impl Into<Text>) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    self.append(Text::when_fn(predicate, then))
  }

  pub fn append_when_not_fn<P>(&self, predicate: P, otherwise: impl Into<Text>) -> Text
  where
    P: Fn() -> bool + Send + Sync + 'static,
  {
    self.append(Text::when_not_fn(predicate, otherwise))
  }
}
