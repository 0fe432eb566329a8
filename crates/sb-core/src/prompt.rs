//! Interactive numbered-choice prompts.

use std::io::{self, BufRead, Write};

use crate::error::{BookError, BookResult};

/// Line-oriented operator interaction.
pub trait Prompter {
    /// Show a line of text.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Ask a question and block for one line of input. Blank input and end
    /// of input both yield `default` (or an empty string without one).
    fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String>;
}

/// A [`Prompter`] over any reader/writer pair, e.g. locked stdin/stdout.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String> {
        writeln!(self.writer, "{question}")?;
        if let Some(d) = default {
            write!(self.writer, "(Default: {d}) ")?;
        }
        write!(self.writer, "(Type and press ENTER)\n> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(default.unwrap_or_default().to_string());
        }
        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}

/// Present `options` as a 1-based list and return the chosen index.
///
/// Invalid answers are reported and asked again, up to `max_attempts`
/// answers in total. Then [`BookError::InvalidSelection`].
pub fn select<P: Prompter + ?Sized>(
    prompter: &mut P,
    title: &str,
    question: &str,
    options: &[String],
    max_attempts: u32,
) -> BookResult<usize> {
    prompter.say(title).map_err(BookError::Prompt)?;
    for (i, option) in options.iter().enumerate() {
        prompter
            .say(&format!("  [{}] {option}", i + 1))
            .map_err(BookError::Prompt)?;
    }

    let mut answer = String::new();
    for attempt in 1..=max_attempts.max(1) {
        answer = prompter.ask(question, None).map_err(BookError::Prompt)?;
        match parse_choice(&answer, options.len()) {
            Some(index) => return Ok(index),
            None => {
                tracing::warn!(%answer, attempt, "rejected selection");
                prompter
                    .say(&format!(
                        "Please enter a number between 1 and {}.",
                        options.len()
                    ))
                    .map_err(BookError::Prompt)?;
            }
        }
    }

    Err(BookError::InvalidSelection {
        answer,
        count: options.len(),
    })
}

/// Zero-based index for a 1-based answer in `1..=count`.
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    if (1..=count).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}
