use crate::domain::ports::Console;
use crate::utils::error::{LessonError, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// `Console` over any buffered reader and writer.
pub struct IoConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            // close the dangling prompt line
            writeln!(self.writer)?;
            return Err(LessonError::UnexpectedEof {
                prompt: message.to_string(),
            });
        }

        tracing::trace!("Read {} bytes for prompt {:?}", read, message);
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_writes_message() {
        let mut console = IoConsole::new(Cursor::new("  Ana  \n"), Vec::new());
        let answer = console.prompt("¿Nombre? ").unwrap();
        assert_eq!(answer, "Ana");

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(out, "¿Nombre? ");
    }

    #[test]
    fn test_prompt_accepts_last_line_without_newline() {
        let mut console = IoConsole::new(Cursor::new("42"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "42");
    }

    #[test]
    fn test_prompt_at_eof_fails() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        let err = console.prompt("> ").unwrap_err();
        assert!(matches!(err, LessonError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_say_and_blank() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.say("hola").unwrap();
        console.blank().unwrap();
        assert_eq!(console.into_writer(), b"hola\n\n");
    }
}
