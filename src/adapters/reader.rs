use crate::core::{LineSource, RawInput, Result};
use std::io::{BufRead, StdinLock};

#[derive(Debug)]
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> Result<RawInput> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        tracing::debug!("Read {} bytes from input", bytes);
        Ok(RawInput::new(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PromptError;
    use std::io::Cursor;

    #[test]
    fn test_reads_exactly_one_line() {
        let mut source = ReaderSource::new(Cursor::new("42\nnext\n"));
        assert_eq!(source.read_line().unwrap().as_str(), "42\n");
        assert_eq!(source.read_line().unwrap().as_str(), "next\n");
        assert!(source.read_line().unwrap().is_end_of_input());
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut source = ReaderSource::new(Cursor::new("  7 "));
        assert_eq!(source.read_line().unwrap().as_str(), "  7 ");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut source = ReaderSource::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        match source.read_line() {
            Err(PromptError::IoError(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("expected IO error, got {:?}", other),
        }
    }
}
