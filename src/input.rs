//! Console input validation.
//!
//! All prompting goes through re-prompt loops: invalid input is reported
//! inline and asked for again, never surfaced to the caller. Readers and
//! writers are injected so tests can drive the loops with scripted input.

use std::io::{self, BufRead, Write};

/// How a guess token is parsed before the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPolicy {
    /// Any integer-parseable string, including negatives.
    AnyInteger,
    /// Non-empty strings of ASCII digits only. Negative numbers are
    /// rejected at parse time regardless of the configured range.
    DigitsOnly,
}

/// Read one trimmed line, treating EOF as an error.
///
/// The prompt is written without a trailing newline and flushed so it
/// appears before the cursor blocks on input.
fn read_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed while waiting for a line",
        ));
    }
    Ok(line.trim().to_string())
}

/// Parse a token under the given policy. None means re-prompt.
fn parse_guess(raw: &str, policy: GuessPolicy) -> Option<i32> {
    match policy {
        GuessPolicy::AnyInteger => raw.parse::<i32>().ok(),
        GuessPolicy::DigitsOnly => {
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            raw.parse::<i32>().ok()
        }
    }
}

/// Ask for an integer, repeating until a valid one is entered.
///
/// Optionally enforces inclusive minimum and maximum values. A rejected
/// line gets a feedback message and does not count as anything; the loop
/// has no retry cap.
pub fn ask_int(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    min: Option<i32>,
    max: Option<i32>,
    policy: GuessPolicy,
) -> io::Result<i32> {
    loop {
        let raw = read_line(input, output, prompt)?;

        let value = match parse_guess(&raw, policy) {
            Some(value) => value,
            None => {
                match policy {
                    GuessPolicy::AnyInteger => writeln!(output, "Please enter a whole number.")?,
                    GuessPolicy::DigitsOnly => writeln!(output, "Numbers only, please.")?,
                }
                continue;
            }
        };

        if let Some(min) = min {
            if value < min {
                writeln!(output, "Please enter a number at least {}.", min)?;
                continue;
            }
        }

        if let Some(max) = max {
            if value > max {
                writeln!(output, "Please enter a number at most {}.", max)?;
                continue;
            }
        }

        return Ok(value);
    }
}

/// Ask a yes/no question, repeating until the answer is recognizable.
///
/// Accepts y/yes/n/no, case-insensitive, surrounding whitespace ignored.
pub fn ask_yes_no(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<bool> {
    loop {
        let answer = read_line(input, output, prompt)?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please enter 'y' or 'n'.")?,
        }
    }
}
