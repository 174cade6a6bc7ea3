//! Prompter for non-interactive runs

use super::{Answer, Notice, Prompter, Question, QuestionKind};
use crate::error::ResolveError;

/// Answers every question with its default.
///
/// Questions without a default (free-text names, the stack choice) cannot be
/// answered and fail with [`ResolveError::MissingOption`] naming the flag that
/// would have supplied the value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, ResolveError> {
        let missing = || ResolveError::MissingOption {
            option: question.flag,
        };

        let answer = match &question.kind {
            QuestionKind::Input { default, .. } => {
                Answer::Text(default.clone().ok_or_else(missing)?)
            }
            QuestionKind::Select { initial, .. } => Answer::Selected(initial.ok_or_else(missing)?),
            QuestionKind::Confirm { initial } => Answer::Confirmed(*initial),
        };

        tracing::debug!(question = question.key, ?answer, "answered with default");
        Ok(answer)
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), ResolveError> {
        tracing::warn!("{}", notice.title);
        for line in &notice.body_lines {
            tracing::warn!("  {}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Choice;

    #[test]
    fn test_input_without_default_is_missing() {
        let question = Question::input("name", "name", "Workspace name").placeholder("org");
        let err = DefaultsPrompter.ask(&question).unwrap_err();
        assert!(matches!(err, ResolveError::MissingOption { option: "name" }));
    }

    #[test]
    fn test_input_with_default() {
        let question = Question::input("app-name", "app-name", "Application name").default_input("acme");
        assert_eq!(
            DefaultsPrompter.ask(&question).unwrap(),
            Answer::Text("acme".to_string())
        );
    }

    #[test]
    fn test_select_uses_initial() {
        let question = Question::select(
            "bundler",
            "bundler",
            "Bundler",
            vec![
                Choice {
                    value: "vite",
                    label: "Vite".to_string(),
                    hint: String::new(),
                },
                Choice {
                    value: "webpack",
                    label: "Webpack".to_string(),
                    hint: String::new(),
                },
            ],
        )
        .initial("webpack");
        assert_eq!(DefaultsPrompter.ask(&question).unwrap(), Answer::Selected(1));
    }

    #[test]
    fn test_select_without_initial_reports_flag() {
        let question = Question::select("stack", "preset", "Which stack?", Vec::new());
        let err = DefaultsPrompter.ask(&question).unwrap_err();
        assert!(matches!(err, ResolveError::MissingOption { option: "preset" }));
    }

    #[test]
    fn test_confirm_uses_initial() {
        let question = Question::confirm("routing", "routing", "Add routing?", true);
        assert_eq!(
            DefaultsPrompter.ask(&question).unwrap(),
            Answer::Confirmed(true)
        );
    }
}
