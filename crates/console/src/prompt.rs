//! Modal input abstraction.
//!
//! The browser's blocking `prompt`/`confirm`/`alert` dialogs map onto the
//! [`Prompter`] trait: no further action happens until the user responds.
//! The interactive binary uses the rustyline implementation; tests script
//! responses with [`ScriptedPrompter`].

use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Errors that can occur while reading user input.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Readline(#[from] ReadlineError),
    /// A scripted prompter ran out of prepared responses
    #[error("no scripted response left for: {0}")]
    ScriptExhausted(String),
}

/// Blocking user dialogs.
pub trait Prompter {
    /// Asks for a line of input, pre-filled with `initial`.
    ///
    /// Returns `Ok(None)` when the user cancels (interrupt or end of
    /// input). An empty reply is returned as `Ok(Some(""))`; callers decide
    /// whether empty means "no change" or "abort".
    fn input(&mut self, message: &str, initial: &str) -> Result<Option<String>, PromptError>;

    /// Asks a yes/no question; anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> Result<bool, PromptError>;

    /// Shows a message and waits for acknowledgement.
    fn alert(&mut self, message: &str);
}

/// Rustyline-backed prompter for the interactive session.
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    /// # Errors
    ///
    /// Returns a `PromptError` if the line editor cannot be constructed.
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for ReadlinePrompter {
    fn input(&mut self, message: &str, initial: &str) -> Result<Option<String>, PromptError> {
        let prompt = format!("{message} ");
        match self.editor.readline_with_initial(&prompt, (initial, "")) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        let prompt = format!("{message} [y/N] ");
        match self.editor.readline(&prompt) {
            Ok(line) => {
                let reply = line.trim().to_ascii_lowercase();
                Ok(reply == "y" || reply == "yes")
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn alert(&mut self, message: &str) {
        println!("!! {message}");
        // Hold until acknowledged; a closed stdin just falls through.
        let _ = self.editor.readline("Press Enter to continue ");
    }
}

/// Prompter with pre-scripted responses, used by the test suites.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<Option<String>>,
    confirmations: VecDeque<bool>,
    /// Every alert message shown, in order.
    pub alerts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for the next `input` call; `None` scripts a cancel.
    pub fn push_input(&mut self, reply: Option<&str>) {
        self.inputs.push_back(reply.map(str::to_string));
    }

    /// Queues an answer for the next `confirm` call.
    pub fn push_confirm(&mut self, answer: bool) {
        self.confirmations.push_back(answer);
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, _initial: &str) -> Result<Option<String>, PromptError> {
        self.inputs
            .pop_front()
            .ok_or_else(|| PromptError::ScriptExhausted(message.to_string()))
    }

    fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        self.confirmations
            .pop_front()
            .ok_or_else(|| PromptError::ScriptExhausted(message.to_string()))
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
