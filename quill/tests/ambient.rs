// The ambient context is process-wide, so everything touching it lives in a
// single test.

use quill::{
  FormatContext,
  Text,
  config::Config,
};

#[test]
fn installed_config_drives_default_renders() {
  let config = Config::from_toml(
    r#"
      [format]
      negative-sign = "~"
      decimal-separator = ","
      true-name = "yes"
      false-name = "no"
      line-ending = "lf"
    "#,
  )
  .unwrap();

  let text = Text::line(-3).append(1.5).append(' ').append(true);
  let previous = config.install();

  assert_eq!(text.render().unwrap(), "~3\n1,5 yes");
  assert_eq!(text.to_string(), "~3\n1,5 yes");
  assert_eq!(Text::when_else(false, "a", -1).render().unwrap(), "~1");

  // An explicit context still wins.
  let explicit = FormatContext::default().with_line_ending(quill::LineEnding::Crlf);
  assert_eq!(text.render_with_context(&explicit).unwrap(), "-3\r\n1.5 true");

  // Deferred texts pick up context changes made after they were built.
  FormatContext::set_current(config.format.clone().with_negative_sign("neg "));
  assert_eq!(text.render().unwrap(), "neg 3\n1,5 yes");

  FormatContext::set_current((*previous).clone());
  assert_eq!(*FormatContext::current(), *previous);
  assert_eq!(Text::of(-7).render_with_context(&previous).unwrap(), "-7");
}
