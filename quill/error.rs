use std::{
  fmt,
  io,
};

use quill_core::template::TemplateError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Failure while replaying a [`Text`](crate::Text) into a sink.
///
/// Nothing is retried: the first error stops the render and reaches the
/// caller unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
  #[error("sink rejected write")]
  Sink(#[from] fmt::Error),
  #[error("failed to write rendered text: {0}")]
  Io(#[source] io::Error),
  #[error("failed to read line source: {0}")]
  Read(#[source] io::Error),
  #[error("invalid template: {0}")]
  Template(#[from] TemplateError),
}

impl RenderError {
  pub fn is_sink(&self) -> bool {
    matches!(self, Self::Sink(_) | Self::Io(_))
  }
}
