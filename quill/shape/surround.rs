use crate::{
  Step,
  Text,
};

impl Text {
  /// The text written `times` times in a row.
  pub fn repeat(&self, times: usize) -> Text {
    match times {
      0 => Text::empty(),
      1 => self.clone(),
      _ => {
        let text = self.clone();
        Text::write(move |writer| {
          for _ in 0..times {
            text.write_to(writer)?;
          }
          Ok(())
        })
      },
    }
  }

  /// `start`, the text, then `end`.
  pub fn surround(&self, start: impl Into<Step>, end: impl Into<Step>) -> Text {
    Text::of(start).append(self).append(end)
  }

  pub fn in_parentheses(&self) -> Text {
    self.surround('(', ')')
  }

  pub fn in_braces(&self) -> Text {
    self.surround('{', '}')
  }

  pub fn in_brackets(&self) -> Text {
    self.surround('[', ']')
  }

  pub fn in_angle_brackets(&self) -> Text {
    self.surround('<', '>')
  }

  pub fn in_single_quotes(&self) -> Text {
    self.surround('\'', '\'')
  }

  pub fn in_double_quotes(&self) -> Text {
    self.surround('"', '"')
  }

  pub fn append_repeated(&self, value: impl Into<Text>, times: usize) -> Text {
    self.append(value.into().repeat(times))
  }

  pub fn append_surrounded(
    &self,
    value: impl Into<Text>,
    start: impl Into<Step>,
    end: impl Into<Step>,
  ) -> Text {
    self.append(value.into().surround(start, end))
  }

  pub fn append_in_parentheses(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_parentheses())
  }

  pub fn append_in_braces(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_braces())
  }

  pub fn append_in_brackets(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_brackets())
  }

  pub fn append_in_angle_brackets(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_angle_brackets())
  }

  pub fn append_in_single_quotes(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_single_quotes())
  }

  pub fn append_in_double_quotes(&self, value: impl Into<Text>) -> Text {
    self.append(value.into().in_double_quotes())
  }
}
