//! Answer sources for interactive questions
//!
//! Resolution never talks to a terminal directly. Every question goes through
//! a [`Prompter`], which returns exactly one [`Answer`] per [`Question`]:
//!
//! - `tui::CliclackPrompter` renders questions with cliclack (feature `tui`)
//! - [`DefaultsPrompter`] answers with each question's default (non-interactive runs)
//! - [`ScriptedPrompter`] answers from a fixed script and records what was asked

mod defaults;
mod scripted;

pub use defaults::DefaultsPrompter;
pub use scripted::ScriptedPrompter;

use crate::error::ResolveError;

/// A single selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Identifier returned to the resolver
    pub value: &'static str,
    pub label: String,
    pub hint: String,
}

/// What kind of answer a question expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text
    Input {
        placeholder: Option<String>,
        /// Used when nobody can be asked
        default: Option<String>,
    },
    /// One entry out of `choices`
    Select {
        choices: Vec<Choice>,
        initial: Option<usize>,
    },
    /// Yes or no
    Confirm { initial: bool },
}

/// One question put to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier for the question
    pub key: &'static str,
    /// Flag that answers this question without prompting
    pub flag: &'static str,
    pub message: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn input(key: &'static str, flag: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            flag,
            message: message.into(),
            kind: QuestionKind::Input {
                placeholder: None,
                default: None,
            },
        }
    }

    pub fn select(
        key: &'static str,
        flag: &'static str,
        message: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            key,
            flag,
            message: message.into(),
            kind: QuestionKind::Select {
                choices,
                initial: None,
            },
        }
    }

    pub fn confirm(
        key: &'static str,
        flag: &'static str,
        message: impl Into<String>,
        initial: bool,
    ) -> Self {
        Self {
            key,
            flag,
            message: message.into(),
            kind: QuestionKind::Confirm { initial },
        }
    }

    /// Placeholder text for an input question
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let QuestionKind::Input { placeholder, .. } = &mut self.kind {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Default value for an input question
    pub fn default_input(mut self, text: impl Into<String>) -> Self {
        if let QuestionKind::Input { default, .. } = &mut self.kind {
            *default = Some(text.into());
        }
        self
    }

    /// Preselected entry of a select question, by value
    pub fn initial(mut self, value: &str) -> Self {
        if let QuestionKind::Select { choices, initial } = &mut self.kind {
            *initial = choices.iter().position(|c| c.value == value);
        }
        self
    }
}

/// The operator's reply to a [`Question`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Index into the question's choices
    Selected(usize),
    Confirmed(bool),
}

/// Informational message shown during resolution (e.g. a deprecation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body_lines: Vec<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body_lines.push(line.into());
        self
    }
}

/// Source of answers for interactive questions
pub trait Prompter {
    /// Ask one question and wait for exactly one answer
    fn ask(&mut self, question: &Question) -> Result<Answer, ResolveError>;

    /// Show a notice to the operator
    fn notify(&mut self, notice: &Notice) -> Result<(), ResolveError> {
        tracing::warn!(title = %notice.title, body = ?notice.body_lines, "notice");
        Ok(())
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, question: &Question) -> Result<Answer, ResolveError> {
        (**self).ask(question)
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), ResolveError> {
        (**self).notify(notice)
    }
}

fn mismatched(question: &Question, answer: &Answer) -> ResolveError {
    ResolveError::Prompt(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!(
            "question '{}' received an answer of the wrong kind: {:?}",
            question.key, answer
        ),
    ))
}

/// Ask an input question and return the text
pub fn ask_text<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: &Question,
) -> Result<String, ResolveError> {
    match prompter.ask(question)? {
        Answer::Text(text) => Ok(text),
        other => Err(mismatched(question, &other)),
    }
}

/// Ask a select question and return the chosen value
pub fn ask_choice<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: &Question,
) -> Result<&'static str, ResolveError> {
    let QuestionKind::Select { choices, .. } = &question.kind else {
        return Err(mismatched(question, &Answer::Selected(0)));
    };
    match prompter.ask(question)? {
        Answer::Selected(idx) => choices
            .get(idx)
            .map(|choice| choice.value)
            .ok_or_else(|| mismatched(question, &Answer::Selected(idx))),
        other => Err(mismatched(question, &other)),
    }
}

/// Ask a yes/no question
pub fn ask_confirm<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: &Question,
) -> Result<bool, ResolveError> {
    match prompter.ask(question)? {
        Answer::Confirmed(value) => Ok(value),
        other => Err(mismatched(question, &other)),
    }
}
