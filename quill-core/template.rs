//! Positional templates: `"{0} of {1,-8}"`.
//!
//! A placeholder is `{index}` or `{index,alignment}`. A positive alignment
//! right-aligns the argument in that many columns, a negative one
//! left-aligns it. `{{` and `}}` stand for literal braces. Parsing is lazy:
//! [`Template`] yields segments as it goes and stops at the first error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TemplateError {
  #[error("unclosed placeholder starting at byte {position}")]
  Unclosed { position: usize },
  #[error("unescaped '}}' at byte {position}")]
  StrayBrace { position: usize },
  #[error("invalid argument index {text:?} at byte {position}")]
  InvalidIndex { position: usize, text: String },
  #[error("invalid alignment {text:?} at byte {position}")]
  InvalidAlignment { position: usize, text: String },
  #[error("format specifiers are not supported (placeholder at byte {position})")]
  UnsupportedSpecifier { position: usize },
  #[error("argument index {index} is out of range for {count} arguments")]
  IndexOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
  Literal(&'a str),
  Argument { index: usize, alignment: i32 },
}

#[derive(Debug, Clone)]
pub struct Template<'a> {
  source: &'a str,
  pos:    usize,
  failed: bool,
}

pub fn parse(source: &str) -> Template<'_> {
  Template {
    source,
    pos: 0,
    failed: false,
  }
}

/// Checks `source` parses and refers only to arguments below `count`.
pub fn validate(source: &str, count: usize) -> Result<()> {
  for segment in parse(source) {
    if let Segment::Argument { index, .. } = segment?
      && index >= count
    {
      return Err(TemplateError::IndexOutOfRange { index, count });
    }
  }
  Ok(())
}

impl<'a> Template<'a> {
  fn placeholder(&mut self, open: usize) -> Result<Segment<'a>> {
    let body_start = open + 1;
    let close = self.source[body_start..]
      .find('}')
      .map(|off| body_start + off)
      .ok_or(TemplateError::Unclosed { position: open })?;
    let body = &self.source[body_start..close];
    self.pos = close + 1;

    if body.contains(':') {
      return Err(TemplateError::UnsupportedSpecifier { position: open });
    }
    let (index, alignment) = match body.split_once(',') {
      Some((index, alignment)) => (index, Some(alignment)),
      None => (body, None),
    };

    let index_text = index.trim();
    if index_text.is_empty() || !index_text.bytes().all(|b| b.is_ascii_digit()) {
      return Err(TemplateError::InvalidIndex {
        position: open,
        text:     index_text.to_string(),
      });
    }
    let index = index_text
      .parse::<usize>()
      .map_err(|_| TemplateError::InvalidIndex {
        position: open,
        text:     index_text.to_string(),
      })?;

    let alignment = match alignment.map(str::trim) {
      None => 0,
      Some(text) => {
        text
          .parse::<i32>()
          .map_err(|_| TemplateError::InvalidAlignment {
            position: open,
            text:     text.to_string(),
          })?
      },
    };

    Ok(Segment::Argument { index, alignment })
  }
}

impl<'a> Iterator for Template<'a> {
  type Item = Result<Segment<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed || self.pos >= self.source.len() {
      return None;
    }
    let rest = &self.source[self.pos..];
    let bytes = rest.as_bytes();

    let result = match bytes[0] {
      b'{' if bytes.get(1) == Some(&b'{') => {
        self.pos += 2;
        Ok(Segment::Literal(&rest[..1]))
      },
      b'{' => self.placeholder(self.pos),
      b'}' if bytes.get(1) == Some(&b'}') => {
        self.pos += 2;
        Ok(Segment::Literal(&rest[..1]))
      },
      b'}' => Err(TemplateError::StrayBrace { position: self.pos }),
      _ => {
        let len = rest.find(['{', '}']).unwrap_or(rest.len());
        self.pos += len;
        Ok(Segment::Literal(&rest[..len]))
      },
    };

    self.failed = result.is_err();
    Some(result)
  }
}

impl std::iter::FusedIterator for Template<'_> {}

#[cfg(test)]
mod test {
  use super::*;

  fn segments(source: &str) -> Result<Vec<Segment<'_>>> {
    parse(source).collect()
  }

  #[test]
  fn literals_and_arguments() {
    assert!(segments("").unwrap().is_empty());
    assert_eq!(segments("{0} and {1}").unwrap(), vec![
      Segment::Argument {
        index:     0,
        alignment: 0,
      },
      Segment::Literal(" and "),
      Segment::Argument {
        index:     1,
        alignment: 0,
      },
    ]);
  }

  #[test]
  fn escaped_braces() {
    assert_eq!(segments("{{x}}").unwrap(), vec![
      Segment::Literal("{"),
      Segment::Literal("x"),
      Segment::Literal("}"),
    ]);
  }

  #[test]
  fn alignment() {
    assert_eq!(segments("{2,-8}").unwrap(), vec![Segment::Argument {
      index:     2,
      alignment: -8,
    }]);
    assert_eq!(segments("{ 1 , 4 }").unwrap(), vec![Segment::Argument {
      index:     1,
      alignment: 4,
    }]);
  }

  #[test]
  fn errors() {
    assert_eq!(
      segments("abc {0"),
      Err(TemplateError::Unclosed { position: 4 })
    );
    assert_eq!(segments("a}b"), Err(TemplateError::StrayBrace { position: 1 }));
    assert!(matches!(
      segments("{x}"),
      Err(TemplateError::InvalidIndex { position: 0, .. })
    ));
    assert!(matches!(
      segments("{-1}"),
      Err(TemplateError::InvalidIndex { .. })
    ));
    assert!(matches!(
      segments("{0,wide}"),
      Err(TemplateError::InvalidAlignment { .. })
    ));
    assert_eq!(
      segments("{0:N2}"),
      Err(TemplateError::UnsupportedSpecifier { position: 0 })
    );
  }

  #[test]
  fn stops_after_first_error() {
    let mut template = parse("}{0}");
    assert!(template.next().unwrap().is_err());
    assert!(template.next().is_none());
  }

  #[test]
  fn validate_counts_arguments() {
    assert_eq!(validate("{0}{1}", 2), Ok(()));
    assert_eq!(
      validate("{0}{2}", 2),
      Err(TemplateError::IndexOutOfRange { index: 2, count: 2 })
    );
  }
}
