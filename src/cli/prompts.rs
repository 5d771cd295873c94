//! User prompt functions for interactive input.
//!
//! All prompts read from any `BufRead` and write to any `Write`, so the
//! shell can be driven by stdin/stdout or by in-memory buffers. `Ok(None)`
//! means the input is exhausted.

use std::io::{self, BufRead, Write};

pub const INVALID_NUMBER: &str = "Please enter a whole number.";

/// Read one line, without its line ending. `None` on end of input.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Print `prompt` and read the answer line
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_line(input)
}

/// Parse a whole number, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Prompt until a whole number is entered. An empty answer takes `default`
/// when one is given.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: Option<i32>,
) -> io::Result<Option<i32>> {
    loop {
        let Some(answer) = prompt_text(input, output, prompt)? else {
            return Ok(None);
        };

        if answer.trim().is_empty() {
            if let Some(value) = default {
                return Ok(Some(value));
            }
        }

        match parse_number(&answer) {
            Some(value) => return Ok(Some(value)),
            None => {
                tracing::warn!(answer = %answer, "rejected non-numeric answer");
                writeln!(output, "{}", INVALID_NUMBER)?;
            }
        }
    }
}
