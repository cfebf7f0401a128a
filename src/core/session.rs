use crate::core::parser::parse_or_default;
use crate::core::{ConfigProvider, LineSource, ParseOutcome, Result};
use std::io::Write;

pub const VALUE_PLACEHOLDER: &str = "{value}";

pub struct PromptSession<S: LineSource, W: Write, C: ConfigProvider> {
    source: S,
    output: W,
    config: C,
}

impl<S: LineSource, W: Write, C: ConfigProvider> PromptSession<S, W, C> {
    pub fn new(source: S, output: W, config: C) -> Self {
        Self {
            source,
            output,
            config,
        }
    }

    /// 提示、讀一行、解析並回顯，回傳最終的整數
    pub fn run(&mut self) -> Result<i32> {
        writeln!(self.output, "{}", self.config.prompt())?;
        self.output.flush()?;

        let raw = self.source.read_line()?;
        if raw.is_end_of_input() {
            tracing::debug!("Input closed before a line was entered");
        }

        let outcome = parse_or_default(raw.as_str());
        if let ParseOutcome::Defaulted { input, reason } = &outcome {
            tracing::warn!("Invalid input '{}' ({}), substituting default", input, reason);
            writeln!(self.output, "{}", self.config.invalid_notice())?;
        }

        let value = outcome.value();
        writeln!(
            self.output,
            "{}",
            render_echo(self.config.echo_template(), value)
        )?;
        self.output.flush()?;

        tracing::debug!("Session finished with value {}", value);
        Ok(value)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn render_echo(template: &str, value: i32) -> String {
    template.replace(VALUE_PLACEHOLDER, &value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInput;
    use crate::utils::error::PromptError;

    struct FixedSource(Option<&'static str>);

    impl LineSource for FixedSource {
        fn read_line(&mut self) -> Result<RawInput> {
            match self.0.take() {
                Some(line) => Ok(RawInput::new(line)),
                None => Err(PromptError::IoError(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "stream closed",
                ))),
            }
        }
    }

    struct Messages;

    impl ConfigProvider for Messages {
        fn prompt(&self) -> &str {
            "Enter a number:"
        }

        fn invalid_notice(&self) -> &str {
            "Invalid input, defaulting to 0"
        }

        fn echo_template(&self) -> &str {
            "You entered: {value}"
        }
    }

    fn run_with(source: FixedSource) -> (Result<i32>, String) {
        let mut session = PromptSession::new(source, Vec::new(), Messages);
        let result = session.run();
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_valid_number_is_echoed() {
        let (result, output) = run_with(FixedSource(Some("42\n")));
        assert_eq!(result.unwrap(), 42);
        assert_eq!(output, "Enter a number:\nYou entered: 42\n");
    }

    #[test]
    fn test_invalid_number_prints_notice() {
        let (result, output) = run_with(FixedSource(Some("abc\n")));
        assert_eq!(result.unwrap(), 0);
        assert_eq!(
            output,
            "Enter a number:\nInvalid input, defaulting to 0\nYou entered: 0\n"
        );
    }

    #[test]
    fn test_read_failure_is_propagated() {
        let (result, output) = run_with(FixedSource(None));
        assert!(matches!(result, Err(PromptError::IoError(_))));
        assert_eq!(output, "Enter a number:\n");
    }

    #[test]
    fn test_render_echo() {
        assert_eq!(render_echo("You entered: {value}", -8), "You entered: -8");
        assert_eq!(render_echo("{value} / {value}", 3), "3 / 3");
    }
}
