//! Charm-style CLI prompts using cliclack

use crate::config::ResolvedConfiguration;
use crate::error::ResolveError;
use crate::product::ProductConfig;
use crate::prompt::{Answer, Notice, Prompter, Question, QuestionKind};
use crate::request::{Environment, RawRequest};
use crate::resolve::resolve;
use std::io;

/// Renders each question as a cliclack prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl CliclackPrompter {
    fn interrupted(question: &Question, err: io::Error) -> ResolveError {
        if err.kind() == io::ErrorKind::Interrupted {
            ResolveError::Cancelled {
                question: question.key,
            }
        } else {
            ResolveError::Prompt(err)
        }
    }
}

impl Prompter for CliclackPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, ResolveError> {
        let answer = match &question.kind {
            QuestionKind::Input {
                placeholder,
                default,
            } => {
                let mut input = cliclack::input(&question.message);
                if let Some(placeholder) = placeholder {
                    input = input.placeholder(placeholder);
                }
                if let Some(default) = default {
                    input = input.default_input(default);
                }
                input.interact::<String>().map(Answer::Text)
            }
            QuestionKind::Select { choices, initial } => {
                let mut select = cliclack::select(&question.message);
                for (idx, choice) in choices.iter().enumerate() {
                    select = select.item(idx, &choice.label, &choice.hint);
                }
                if let Some(initial) = initial {
                    select = select.initial_value(*initial);
                }
                select.interact().map(Answer::Selected)
            }
            QuestionKind::Confirm { initial } => cliclack::confirm(&question.message)
                .initial_value(*initial)
                .interact()
                .map(Answer::Confirmed),
        };

        answer.map_err(|err| Self::interrupted(question, err))
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), ResolveError> {
        if notice.body_lines.is_empty() {
            cliclack::log::warning(&notice.title)?;
        } else {
            cliclack::note(&notice.title, notice.body_lines.join("\n"))?;
        }
        Ok(())
    }
}

/// Resolve a workspace configuration with interactive prompts
pub fn run<C: ProductConfig>(
    product: &C,
    request: &RawRequest,
    env: &Environment,
) -> Result<ResolvedConfiguration, ResolveError> {
    cliclack::intro(product.display_name())?;

    if !request.interactive {
        cliclack::log::info("Non-interactive mode, missing options use their defaults")?;
    }

    let config = resolve(request, env, &mut CliclackPrompter)?;

    cliclack::log::success(format!(
        "Workspace \"{}\" will use the \"{}\" preset",
        config.name,
        config.preset()
    ))?;

    Ok(config)
}

/// Show a resolution failure the way the prompts show everything else
pub fn report(err: &ResolveError) {
    let message = err.message();
    let shown = cliclack::log::error(&message.title).and_then(|_| {
        if message.body_lines.is_empty() {
            Ok(())
        } else {
            cliclack::outro_cancel(message.body_lines.join("\n"))
        }
    });

    // The terminal may be gone (e.g. closed pipe); fall back to plain stderr
    if shown.is_err() {
        eprintln!("{}", message);
    }
}
