//! Prompter that replays a fixed script

use super::{Answer, Notice, Prompter, Question, QuestionKind};
use crate::error::ResolveError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    Choice(&'static str),
    Confirm(bool),
}

/// Answers questions by key from a prepared script.
///
/// Every question asked is recorded, so callers can check which questions a
/// resolution produced. A question with no scripted answer is treated as if
/// the operator cancelled it.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<&'static str, Scripted>,
    asked: Vec<&'static str>,
    notices: Vec<Notice>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer an input question
    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.answers.insert(key, Scripted::Text(value.into()));
        self
    }

    /// Answer a select question with the entry whose value is `value`
    pub fn choose(mut self, key: &'static str, value: &'static str) -> Self {
        self.answers.insert(key, Scripted::Choice(value));
        self
    }

    /// Answer a yes/no question
    pub fn confirm(mut self, key: &'static str, value: bool) -> Self {
        self.answers.insert(key, Scripted::Confirm(value));
        self
    }

    /// Keys of every question asked so far, in order
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Whether the question with `key` was asked
    pub fn was_asked(&self, key: &str) -> bool {
        self.asked.iter().any(|k| *k == key)
    }

    /// Notices received so far
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, ResolveError> {
        self.asked.push(question.key);

        let scripted = self
            .answers
            .get(question.key)
            .ok_or(ResolveError::Cancelled {
                question: question.key,
            })?;

        match scripted {
            Scripted::Text(text) => Ok(Answer::Text(text.clone())),
            Scripted::Confirm(value) => Ok(Answer::Confirmed(*value)),
            Scripted::Choice(value) => {
                let QuestionKind::Select { choices, .. } = &question.kind else {
                    return Err(ResolveError::Cancelled {
                        question: question.key,
                    });
                };
                // A value that is not on offer cannot be picked by an operator either
                choices
                    .iter()
                    .position(|c| c.value == *value)
                    .map(Answer::Selected)
                    .ok_or(ResolveError::Cancelled {
                        question: question.key,
                    })
            }
        }
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), ResolveError> {
        self.notices.push(notice.clone());
        Ok(())
    }
}
