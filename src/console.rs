use std::io::{BufRead, Write};

use crate::{RError, RResult};

pub const RESET: &str = "\x1b[0m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Line-oriented terminal I/O. Colors are only emitted when enabled, the screen is only
/// cleared when the output is a terminal.
pub struct Console<I, O> {
    input: I,
    output: O,
    color: bool,
    clear: bool,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, color: bool, clear: bool) -> Self {
        Self {
            input,
            output,
            color,
            clear,
        }
    }

    // Getters/Setters

    pub fn output(&self) -> &O {
        &self.output
    }

    // Functions

    pub fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn print(&mut self, text: &str) -> RResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> RResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn print_colored(&mut self, color: &str, text: &str) -> RResult<()> {
        let text = self.paint(color, text);
        self.println(&text)
    }

    pub fn clear_screen(&mut self) -> RResult<()> {
        if self.clear {
            self.print(CLEAR_SCREEN)?;
        }
        Ok(())
    }

    /// Reads one line without its line terminator. Fails with `InputClosed` at end of input.
    /// Bytes that are not valid UTF-8 are replaced, the answer is then judged like any other.
    pub fn read_line(&mut self) -> RResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    pub fn prompt(&mut self, question: &str) -> RResult<String> {
        self.print(question)?;
        self.read_line()
    }
}

/// Parses a numeric answer. Anything that is not a number maps to 0, which no menu or
/// ordinal accepts.
pub fn parse_number(answer: &str) -> usize {
    answer.trim().parse().unwrap_or(0)
}

/// Y or y means yes, anything else means no.
pub fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('Y' | 'y'))
}
