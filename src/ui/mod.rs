//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - output sink and text formatting
//! - This module - the interactive bump-kind choice

use std::cell::RefCell;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::domain::BumpKind;
use crate::error::{BumpError, Result};

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_pushed, display_tag_created, display_versions,
    format_error, Output,
};

/// Asks a human to pick one bump kind out of `choices`.
///
/// Implementations must return one of `choices`, or [BumpError::SelectionAborted]
/// when no choice was made. They must never pick a default on their own.
pub trait Prompter {
    fn select(&self, label: &str, choices: &[BumpKind]) -> Result<BumpKind>;
}

/// Arrow-key menu on the terminal.
///
/// The menu is drawn on stderr; without a terminal there the selection fails
/// instead of guessing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, label: &str, choices: &[BumpKind]) -> Result<BumpKind> {
        if !Term::stderr().is_term() {
            return Err(BumpError::selection_aborted(
                "no terminal to ask on; pass --major, --minor or --patch",
            ));
        }

        let items: Vec<&str> = choices.iter().map(BumpKind::as_str).collect();

        // Ctrl-C surfaces as an interrupted read, Esc/q as `None`
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(&items)
            .default(0)
            .report(false)
            .interact_opt()
            .map_err(|e| BumpError::selection_aborted(e.to_string()))?;

        match selection {
            Some(index) => choices
                .get(index)
                .copied()
                .ok_or_else(|| BumpError::selection_aborted("selection out of range")),
            None => Err(BumpError::selection_aborted("selection cancelled")),
        }
    }
}

/// A prompt record kept by [ScriptedPrompter]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    pub label: String,
    pub choices: Vec<BumpKind>,
}

/// Answers prompts from a fixed script instead of a terminal.
///
/// `None` in the script behaves like a user pressing Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<Vec<Option<BumpKind>>>,
    prompts: RefCell<Vec<PromptRecord>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Option<BumpKind>>) -> Self {
        let mut answers: Vec<_> = answers.into_iter().collect();
        answers.reverse();
        ScriptedPrompter {
            answers: RefCell::new(answers),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Always pick `kind`
    pub fn answering(kind: BumpKind) -> Self {
        Self::new([Some(kind)])
    }

    /// Abort the first prompt
    pub fn aborting() -> Self {
        Self::new([None])
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> Vec<PromptRecord> {
        self.prompts.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, label: &str, choices: &[BumpKind]) -> Result<BumpKind> {
        self.prompts.borrow_mut().push(PromptRecord {
            label: label.to_string(),
            choices: choices.to_vec(),
        });

        match self.answers.borrow_mut().pop() {
            Some(Some(kind)) if choices.contains(&kind) => Ok(kind),
            Some(Some(kind)) => Err(BumpError::selection_aborted(format!(
                "{} is not one of the offered choices",
                kind
            ))),
            Some(None) => Err(BumpError::selection_aborted("^C")),
            None => Err(BumpError::selection_aborted("no scripted answer left")),
        }
    }
}
