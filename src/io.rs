// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character input and text output collaborators.
//!
//! The interpreter reads through [`CharInput`] and writes through
//! [`TextOutput`]. Standard-stream and in-memory implementations are
//! provided; the latter are what the tests drive programs with.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of characters for `in(char)` and `in(number)`.
pub trait CharInput {
    /// Next character, or `None` at end of input. May block.
    fn read_char(&mut self) -> Option<char>;

    /// Read a decimal integer: skip leading whitespace, accept an optional
    /// sign and then digits up to the next non-digit, which is consumed.
    ///
    /// Returns `None` if no digits were found or the value does not fit.
    fn read_integer(&mut self) -> Option<i64> {
        let mut token = String::new();
        let mut c = self.read_char()?;
        while c.is_whitespace() {
            c = self.read_char()?;
        }
        if c == '-' || c == '+' {
            token.push(c);
            c = self.read_char()?;
        }
        while c.is_ascii_digit() {
            token.push(c);
            match self.read_char() {
                Some(next) => c = next,
                None => break,
            }
        }
        token.parse().ok()
    }
}

/// Sink for `out(number)` and `out(char)`.
pub trait TextOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Line-buffered standard input.
pub struct StdinInput {
    pending: VecDeque<char>,
    eof: bool,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            eof: false,
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CharInput for StdinInput {
    fn read_char(&mut self) -> Option<char> {
        while self.pending.is_empty() && !self.eof {
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => self.eof = true,
                Ok(_) => self.pending.extend(line.chars()),
            }
        }
        self.pending.pop_front()
    }
}

/// Standard output, flushed after every write so prompts appear before
/// the next input read blocks.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl TextOutput for StdoutOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Input from a fixed string.
#[derive(Debug, Clone, Default)]
pub struct StringInput {
    chars: VecDeque<char>,
}

impl StringInput {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl CharInput for StringInput {
    fn read_char(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

/// Output collected into a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOutput {
    text: String,
}

impl StringOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TextOutput for StringOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.text.push_str(text);
        Ok(())
    }
}
