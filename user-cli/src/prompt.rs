// Console I/O
// Line-oriented prompts over any BufRead/Write pair

use crate::output::Printer;

use std::io::{self, BufRead, Write};

use user_service::{ServiceError, ServiceResult, UserId};

/// Input and output of one interactive session.
pub struct Console<R, W> {
    input: R,
    out: Printer<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self {
            input,
            out: Printer::new(out, color),
        }
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// The line terminator is stripped, nothing else is. Returns `None` once
    /// the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.out.prompt(label)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn out(&mut self) -> &mut Printer<W> {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out.into_inner()
    }
}

/// Parse a user id typed at a prompt. Surrounding whitespace is ignored.
pub fn parse_user_id(text: &str) -> ServiceResult<UserId> {
    let text = text.trim();
    text.parse::<UserId>().map_err(|_| {
        ServiceError::InvalidInput(format!("the ID must be an integer (got \"{}\")", text))
    })
}
