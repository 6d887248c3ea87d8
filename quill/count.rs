use crate::Text;

impl Text {
  /// `singular` when `count` is one, otherwise `singular` followed by `s`.
  pub fn plural(count: i64, singular: impl Into<Text>) -> Text {
    let singular = singular.into();
    let plural = singular.append('s');
    Text::when_else(count == 1, singular, plural)
  }

  pub fn plural_or(count: i64, singular: impl Into<Text>, plural: impl Into<Text>) -> Text {
    Text::when_else(count == 1, singular, plural)
  }

  /// The number, a space, then the matching word: `3 files`.
  pub fn count(count: i64, singular: impl Into<Text>) -> Text {
    Text::of(count).append(' ').append(Text::plural(count, singular))
  }

  pub fn count_or(count: i64, singular: impl Into<Text>, plural: impl Into<Text>) -> Text {
    Text::of(count)
      .append(' ')
      .append(Text::plural_or(count, singular, plural))
  }

  pub fn append_plural(&self, count: i64, singular: impl Into<Text>) -> Text {
    self.append(Text::plural(count, singular))
  }

  pub fn append_plural_or(
    &self,
    count: i64,
    singular: impl Into<Text>,
    plural: impl Into<Text>,
  ) -> Text {
    self.append(Text::plural_or(count, singular, plural))
  }

  pub fn append_count(&self, count: i64, singular: impl Into<Text>) -> Text {
    self.append(Text::count(count, singular))
  }

  pub fn append_count_or(
    &self,
    count: i64,
    singular: impl Into<Text>,
    plural: impl Into<Text>,
  ) -> Text {
    self.append(Text::count_or(count, singular, plural))
  }
}
