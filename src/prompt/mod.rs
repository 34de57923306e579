//! Asking the operator for input.

use std::io::{BufRead, Write};

pub const ORIGIN_REF_PROMPT: &str = "Please enter 'origin_ref' which should be deleted";
pub const LEASE_REF_PROMPT: &str = "Please enter 'lease_ref' which should be deleted";

/// Source of operator answers.
pub trait Prompt {
    /// Ask a question. `None` means the operator cancelled.
    fn ask(&mut self, message: &str) -> Option<String>;
}

/// Line-based prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompt on stderr, read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Option<String> {
        if write!(self.output, "{}: ", message)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // EOF is a cancel
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read answer: {}", e);
                None
            }
        }
    }
}

/// Use `given` if present, otherwise ask. Cancelled or blank answers yield `None`.
pub fn resolve_reference(
    given: Option<String>,
    prompt: &mut impl Prompt,
    message: &str,
) -> Option<String> {
    let answer = match given {
        Some(value) => value,
        None => prompt.ask(message)?,
    };

    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}
