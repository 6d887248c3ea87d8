//! Conversions to and from plain strings.

use std::{
  convert::Infallible,
  str::FromStr,
};

use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
};

use crate::{
  Text,
  error::RenderError,
};

impl FromStr for Text {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Text::of(s))
  }
}

impl TryFrom<&Text> for String {
  type Error = RenderError;

  fn try_from(text: &Text) -> Result<Self, Self::Error> {
    text.render()
  }
}

impl TryFrom<Text> for String {
  type Error = RenderError;

  fn try_from(text: Text) -> Result<Self, Self::Error> {
    text.render()
  }
}

/// Serializes as the rendered string, using the ambient context.
impl Serialize for Text {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let rendered = self.render().map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&rendered)
  }
}

impl<'de> Deserialize<'de> for Text {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(Text::of(s))
  }
}
