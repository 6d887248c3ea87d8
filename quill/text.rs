//! The deferred text value.
//!
//! A [`Text`] is a persistent chain of [`Step`]s. Appending allocates one
//! node pointing at the unchanged predecessor, so every intermediate value
//! stays valid and can be rendered or extended independently:
//!
//! ```
//! use quill::Text;
//!
//! let greeting = Text::of("Hello, ");
//! let world = greeting.append("world");
//! let there = greeting.append("there");
//!
//! assert_eq!(world.render().unwrap(), "Hello, world");
//! assert_eq!(there.render().unwrap(), "Hello, there");
//! ```
//!
//! Nothing is written until the value is rendered. Rendering replays the
//! chain in append order into a [`Writer`].

use std::{
  borrow::Cow,
  fmt,
  io,
  ops::{
    Add,
    AddAssign,
  },
  sync::Arc,
  time::Instant,
};

use quill_core::FormatContext;
use ropey::{
  Rope,
  RopeBuilder,
};
use smallvec::SmallVec;

use crate::{
  Step,
  Tendril,
  error::Result,
  render::Render,
  writer::{
    IoSink,
    Writer,
  },
};

#[derive(Clone, Default)]
pub struct Text {
  tail: Option<Arc<Node>>,
}

struct Node {
  previous: Text,
  step:     Step,
}

impl Node {
  /// Unlinks the predecessor and a nested text, handing back their nodes.
  fn detach(&mut self) -> [Option<Arc<Node>>; 2] {
    let nested = self.step.take_nested().and_then(|text| text.tail);
    [self.previous.tail.take(), nested]
  }
}

impl Drop for Node {
  // Take predecessors and nested texts apart one node at a time. Dropping a
  // long or deeply nested text recursively would overflow the stack.
  fn drop(&mut self) {
    let mut pending: SmallVec<[Arc<Node>; 4]> = self.detach().into_iter().flatten().collect();
    while let Some(node) = pending.pop() {
      if let Some(mut node) = Arc::into_inner(node) {
        pending.extend(node.detach().into_iter().flatten());
      }
    }
  }
}

impl Text {
  /// The empty text. Renders nothing.
  pub const fn empty() -> Self {
    Self { tail: None }
  }

  /// True only for the empty value, not for texts that happen to render
  /// nothing.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.tail.is_none()
  }

  /// A new text rendering `self` followed by `step`.
  #[must_use]
  pub fn append(&self, step: impl Into<Step>) -> Text {
    Text {
      tail: Some(Arc::new(Node {
        previous: self.clone(),
        step:     step.into(),
      })),
    }
  }

  /// Number of steps in the chain. Nested texts count as one.
  pub fn len_steps(&self) -> usize {
    self.nodes().count()
  }

  fn nodes(&self) -> impl Iterator<Item = &Node> {
    std::iter::successors(self.tail.as_deref(), |node| node.previous.tail.as_deref())
  }

  /// Replays the chain into `writer`.
  pub fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    // Pending steps with the next one on top. Nested texts are unfolded in
    // place, so depth costs heap, not stack.
    let mut pending: SmallVec<[&Step; 16]> = self.nodes().map(|node| &node.step).collect();
    while let Some(step) = pending.pop() {
      match step.nested() {
        Some(text) => pending.extend(text.nodes().map(|node| &node.step)),
        None => step.write_to(writer)?,
      }
    }
    Ok(())
  }

  /// Renders into `sink` using the ambient [`FormatContext`].
  pub fn render_to(&self, sink: &mut dyn fmt::Write) -> Result<()> {
    let format = FormatContext::current();
    self.render_with(sink, &format)
  }

  pub fn render_with(&self, sink: &mut dyn fmt::Write, format: &FormatContext) -> Result<()> {
    let start = tracing::enabled!(tracing::Level::TRACE).then(Instant::now);
    let result = self.write_to(&mut Writer::new(sink, format));
    if let Some(start) = start {
      tracing::trace!(
        steps = self.len_steps(),
        "render took {}s",
        Instant::now().duration_since(start).as_secs_f64()
      );
    }
    result
  }

  /// Renders into an io stream using the ambient [`FormatContext`].
  pub fn render_io<W: io::Write>(&self, out: W) -> Result<()> {
    let format = FormatContext::current();
    let mut sink = IoSink::new(out);
    let result = self.render_with(&mut sink, &format);
    sink.finish(result)
  }

  pub fn render(&self) -> Result<String> {
    let mut out = String::new();
    self.render_to(&mut out)?;
    Ok(out)
  }

  pub fn render_with_context(&self, format: &FormatContext) -> Result<String> {
    let mut out = String::new();
    self.render_with(&mut out, format)?;
    Ok(out)
  }

  pub fn to_rope(&self) -> Result<Rope> {
    let mut sink = RopeSink(RopeBuilder::new());
    self.render_to(&mut sink)?;
    Ok(sink.0.finish())
  }
}

struct RopeSink(RopeBuilder);

impl fmt::Write for RopeSink {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.0.append(s);
    Ok(())
  }
}

impl Render for Text {
  #[inline]
  fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
    Text::write_to(self, writer)
  }
}

impl fmt::Display for Text {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.render_to(f).map_err(|err| {
      if !err.is_sink() {
        tracing::warn!("failed to render text for display: {err}");
      }
      fmt::Error
    })
  }
}

impl fmt::Debug for Text {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.render() {
      Ok(rendered) => f.debug_tuple("Text").field(&rendered).finish(),
      Err(err) => f.debug_tuple("Text").field(&format_args!("<{err}>")).finish(),
    }
  }
}

impl<T: Into<Step>> Add<T> for Text {
  type Output = Text;

  fn add(self, rhs: T) -> Text {
    self.append(rhs)
  }
}

impl<T: Into<Step>> Add<T> for &Text {
  type Output = Text;

  fn add(self, rhs: T) -> Text {
    self.append(rhs)
  }
}

impl<T: Into<Step>> AddAssign<T> for Text {
  fn add_assign(&mut self, rhs: T) {
    *self = self.append(rhs);
  }
}

impl From<Step> for Text {
  fn from(step: Step) -> Self {
    Text::of(step)
  }
}

impl From<&Text> for Text {
  fn from(text: &Text) -> Self {
    text.clone()
  }
}

impl<T: Into<Step>> From<Option<T>> for Text {
  fn from(value: Option<T>) -> Self {
    value.map_or_else(Text::empty, Text::of)
  }
}

macro_rules! text_from {
  ($($ty:ty),* $(,)?) => {
    $(
      impl From<$ty> for Text {
        fn from(value: $ty) -> Self {
          Text::empty().append(value)
        }
      }
    )*
  };
}

text_from!(
  &str, &String, String, Tendril, Cow<'_, str>, char, bool, f32, f64, i8, i16, i32, i64, i128,
  isize, u8, u16, u32, u64, u128, usize,
);
