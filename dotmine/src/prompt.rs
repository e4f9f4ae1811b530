//! Interactive decisions.
//!
//! Every destructive or ambiguous step of a merge asks the user first. This
//! module abstracts the asking behind the [`Prompter`] trait so the
//! reconciler can run against a real terminal ([`TerminalPrompter`]) or a
//! scripted list of answers ([`ScriptedPrompter`]).

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// One answer the user can give to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Remove what is at the destination and put the source there.
    Overwrite,
    /// Remove the source and keep what is at the destination.
    DeleteSource,
    /// Merge the source directory into the destination directory.
    Merge,
    /// Leave both sides untouched.
    Skip,
    /// Stop the whole operation.
    Abort,
}

impl Decision {
    /// The single lowercase character the user types for this decision.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Overwrite => 'o',
            Self::DeleteSource => 'd',
            Self::Merge => 'm',
            Self::Skip => 's',
            Self::Abort => 'a',
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::DeleteSource => write!(f, "delete source"),
            Self::Merge => write!(f, "merge"),
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// A question with a fixed set of single-character answers.
///
/// # Examples
///
/// ```
/// use dotmine::prompt::{Decision, Prompt};
///
/// let prompt = Prompt::new(
///     "a directory already exists at `~/dotmine/.config`",
///     &[Decision::Overwrite, Decision::Merge, Decision::Skip],
/// )
/// .with_default(Decision::Skip);
///
/// assert_eq!(prompt.indicator(), "o/m/S");
/// assert_eq!(prompt.decision_for("M"), Some(Decision::Merge));
/// assert_eq!(prompt.decision_for(""), Some(Decision::Skip));
/// assert_eq!(prompt.decision_for("x"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    message: String,
    choices: Vec<Decision>,
    default: Option<Decision>,
}

impl Prompt {
    /// Create a prompt offering `choices` in the given order.
    #[must_use]
    pub fn new(message: impl Into<String>, choices: &[Decision]) -> Self {
        Self {
            message: message.into(),
            choices: choices.to_vec(),
            default: None,
        }
    }

    /// Set the decision applied when the user enters a blank line.
    ///
    /// The default must be one of the offered choices; otherwise it is ignored.
    #[must_use]
    pub fn with_default(mut self, default: Decision) -> Self {
        if self.choices.contains(&default) {
            self.default = Some(default);
        }
        self
    }

    /// The question shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offered decisions, in display order.
    #[must_use]
    pub fn choices(&self) -> &[Decision] {
        &self.choices
    }

    /// The decision applied on blank input, if any.
    #[must_use]
    pub fn default_choice(&self) -> Option<Decision> {
        self.default
    }

    /// Render the choice keys, upper-casing the default: `o/m/S`.
    #[must_use]
    pub fn indicator(&self) -> String {
        self.choices
            .iter()
            .map(|choice| {
                if Some(*choice) == self.default {
                    choice.key().to_ascii_uppercase().to_string()
                } else {
                    choice.key().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The legend explaining each key: `[o] overwrite, [m] merge, [s] skip`.
    #[must_use]
    pub fn legend(&self) -> String {
        self.choices
            .iter()
            .map(|choice| format!("[{}] {choice}", choice.key()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Interpret one line of user input.
    ///
    /// The first character is matched case-insensitively against the choice
    /// keys. A blank line yields the default. Anything else yields `None`.
    #[must_use]
    pub fn decision_for(&self, input: &str) -> Option<Decision> {
        let input = input.trim();
        let Some(first) = input.chars().next() else {
            return self.default;
        };
        let first = first.to_ascii_lowercase();
        self.choices.iter().copied().find(|c| c.key() == first)
    }
}

/// Source of user decisions.
pub trait Prompter {
    /// Ask `prompt` and return one of its choices.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid answer can be obtained, e.g. because the
    /// input was closed.
    fn choose(&mut self, prompt: &Prompt) -> Result<Decision>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn choose(&mut self, prompt: &Prompt) -> Result<Decision> {
        (**self).choose(prompt)
    }
}

/// Prompter that asks on a terminal-like reader/writer pair.
///
/// It loops until a valid answer is read. End of input fails with
/// [`Error::PromptClosed`] rather than looping forever.
///
/// # Examples
///
/// ```
/// use dotmine::prompt::{Decision, Prompt, Prompter, TerminalPrompter};
/// use std::io::Cursor;
///
/// let input = Cursor::new(b"x\nd\n".to_vec());
/// let mut output = Vec::new();
/// let mut prompter = TerminalPrompter::new(input, &mut output);
///
/// let prompt = Prompt::new("keep which?", &[Decision::Overwrite, Decision::DeleteSource]);
/// assert_eq!(prompter.choose(&prompt).unwrap(), Decision::DeleteSource);
/// ```
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter reading answers from `input` and writing questions
    /// to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_question(&mut self, prompt: &Prompt) -> io::Result<()> {
        writeln!(self.output, "{}", prompt.legend())?;
        write!(self.output, "{} [{}]: ", prompt.message(), prompt.indicator())?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn choose(&mut self, prompt: &Prompt) -> Result<Decision> {
        loop {
            self.write_question(prompt)
                .map_err(|e| Error::io("write prompt", "<stdout>", e))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::io("read answer", "<stdin>", e))?;
            if read == 0 {
                return Err(Error::PromptClosed {
                    prompt: prompt.message().to_string(),
                });
            }

            if let Some(decision) = prompt.decision_for(&line) {
                log::debug!("prompt `{}` answered with {decision}", prompt.message());
                return Ok(decision);
            }
        }
    }
}

/// Prompter that replays a fixed list of answers.
///
/// It records every prompt it was shown, so callers can assert on what was
/// asked. Running out of answers fails with [`Error::PromptClosed`], and so
/// does an answer that the prompt does not offer.
///
/// # Examples
///
/// ```
/// use dotmine::prompt::{Decision, Prompt, Prompter, ScriptedPrompter};
///
/// let mut prompter = ScriptedPrompter::new([Decision::Merge]);
/// let prompt = Prompt::new("merge?", &[Decision::Merge, Decision::Skip]);
///
/// assert_eq!(prompter.choose(&prompt).unwrap(), Decision::Merge);
/// assert!(prompter.choose(&prompt).is_err());
/// assert_eq!(prompter.asked().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Decision>,
    asked: Vec<Prompt>,
}

impl ScriptedPrompter {
    /// Create a prompter answering with `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far.
    #[must_use]
    pub fn asked(&self) -> &[Prompt] {
        &self.asked
    }

    /// Answers that were never consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&mut self, prompt: &Prompt) -> Result<Decision> {
        self.asked.push(prompt.clone());
        match self.answers.pop_front() {
            Some(decision) if prompt.choices().contains(&decision) => Ok(decision),
            _ => Err(Error::PromptClosed {
                prompt: prompt.message().to_string(),
            }),
        }
    }
}
