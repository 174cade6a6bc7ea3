//! Single-question resolvers
//!
//! Each resolver returns the flag value when one was supplied and otherwise
//! asks exactly one question.

use crate::error::{invariant, ResolveError};
use crate::options::{
    ensure_allowed, parse_option, Bundler, E2eTestRunner, NodeFramework, OptionValue,
    ReactFramework, Style, WorkspaceType,
};
use crate::preset::Stack;
use crate::prompt::{ask_choice, ask_confirm, ask_text, Choice, Prompter, Question};
use crate::request::{Environment, RawRequest};

/// Placeholder shown when asking for the workspace folder
const DEFAULT_FOLDER_PLACEHOLDER: &str = "org";

/// Shared state for one resolution run
pub struct Resolver<'a, P: Prompter + ?Sized> {
    pub(crate) request: &'a RawRequest,
    pub(crate) env: &'a Environment,
    pub(crate) prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> Resolver<'a, P> {
    pub fn new(request: &'a RawRequest, env: &'a Environment, prompter: &'a mut P) -> Self {
        Self {
            request,
            env,
            prompter,
        }
    }

    /// Workspace folder name. A prompted name must not exist yet.
    pub fn folder_name(&mut self) -> Result<String, ResolveError> {
        if let Some(name) = RawRequest::non_empty(&self.request.name) {
            return Ok(name.to_string());
        }

        let question = Question::input("name", "name", "Where would you like to create your workspace?")
            .placeholder(DEFAULT_FOLDER_PLACEHOLDER);
        let reply = ask_text(&mut *self.prompter, &question)?;
        let reply = reply.trim().to_string();

        invariant(!reply.is_empty(), || ResolveError::EmptyName {
            what: "folder name",
        })?;

        // Point-in-time check; nothing is held until generation runs
        let target = self.env.cwd.join(&reply);
        invariant(!target.exists(), || ResolveError::FolderTaken {
            name: reply.clone(),
        })?;

        Ok(reply)
    }

    /// Application name for presets that scaffold a named app
    pub fn app_name(&mut self, workspace: &str) -> Result<String, ResolveError> {
        if let Some(name) = RawRequest::non_empty(&self.request.app_name) {
            return Ok(name.to_string());
        }

        let question = Question::input("app-name", "app-name", "Application name")
            .placeholder(workspace)
            .default_input(workspace);
        let reply = ask_text(&mut *self.prompter, &question)?;
        let reply = reply.trim().to_string();

        invariant(!reply.is_empty(), || ResolveError::EmptyName { what: "name" })?;
        Ok(reply)
    }

    /// Application name for standalone presets: the flag, else the workspace name
    pub fn standalone_app_name(&self, workspace: &str) -> String {
        RawRequest::non_empty(&self.request.app_name)
            .unwrap_or(workspace)
            .to_string()
    }

    /// Stack picked by the operator when no preset was given
    pub fn stack(&mut self) -> Result<Stack, ResolveError> {
        let choices = Stack::SELECTABLE
            .iter()
            .map(|stack| Choice {
                value: stack.as_str(),
                label: stack.as_str().to_string(),
                hint: stack.description().to_string(),
            })
            .collect();
        let question = Question::select("stack", "preset", "Which stack do you want to use?", choices);
        let value = ask_choice(&mut *self.prompter, &question)?;

        Stack::SELECTABLE
            .iter()
            .find(|s| s.as_str() == value)
            .copied()
            .ok_or(ResolveError::Cancelled { question: "stack" })
    }

    /// Workspace topology, restricted to the shapes on offer
    pub fn workspace_type(&mut self, allowed: &[WorkspaceType]) -> Result<WorkspaceType, ResolveError> {
        if let Some(flag) = self.request.workspace_type {
            return ensure_allowed(flag, allowed);
        }

        let message = if allowed.contains(&WorkspaceType::PackageBased) {
            "Package-based monorepo, integrated monorepo, or standalone project?"
        } else {
            "Integrated monorepo, or standalone project?"
        };
        let initial = if allowed.contains(&WorkspaceType::PackageBased) {
            WorkspaceType::PackageBased
        } else {
            WorkspaceType::Standalone
        };

        self.select("workspace-type", message, allowed, Some(initial))
    }

    pub fn react_framework(&mut self, allowed: &[ReactFramework]) -> Result<ReactFramework, ResolveError> {
        if let Some(flag) = &self.request.framework {
            return parse_option(flag, allowed);
        }
        self.select(
            "framework",
            "What framework would you like to use?",
            allowed,
            Some(ReactFramework::None),
        )
    }

    pub fn node_framework(&mut self) -> Result<NodeFramework, ResolveError> {
        if let Some(flag) = &self.request.framework {
            return parse_option(flag, &NodeFramework::ALL);
        }
        self.select(
            "framework",
            "What framework should be used?",
            &NodeFramework::ALL,
            Some(NodeFramework::None),
        )
    }

    pub fn bundler(&mut self) -> Result<Bundler, ResolveError> {
        if let Some(flag) = self.request.bundler {
            return Ok(flag);
        }
        self.select(
            "bundler",
            "Which bundler would you like to use?",
            &Bundler::ALL,
            Some(Bundler::Vite),
        )
    }

    pub fn e2e_test_runner(&mut self) -> Result<E2eTestRunner, ResolveError> {
        if let Some(flag) = self.request.e2e_test_runner {
            return Ok(flag);
        }
        self.select(
            "e2e-test-runner",
            "Test runner to use for end to end (E2E) tests",
            &E2eTestRunner::ALL,
            Some(E2eTestRunner::Cypress),
        )
    }

    /// Stylesheet format from the flag, if one was given
    pub fn style_flag(&self, allowed: &[Style]) -> Result<Option<Style>, ResolveError> {
        RawRequest::non_empty(&self.request.style)
            .map(|flag| parse_option(flag, allowed))
            .transpose()
    }

    pub fn style(&mut self, allowed: &[Style]) -> Result<Style, ResolveError> {
        if let Some(style) = self.style_flag(allowed)? {
            return Ok(style);
        }
        self.select("style", "Default stylesheet format", allowed, Some(Style::Css))
    }

    pub fn next_app_dir(&mut self) -> Result<bool, ResolveError> {
        self.confirm(
            self.request.next_app_dir,
            Question::confirm(
                "next-app-dir",
                "next-app-dir",
                "Would you like to use the App Router (recommended)?",
                true,
            ),
        )
    }

    pub fn standalone_api(&mut self) -> Result<bool, ResolveError> {
        self.confirm(
            self.request.standalone_api,
            Question::confirm(
                "standalone-api",
                "standalone-api",
                "Would you like to use Standalone Components in your application?",
                false,
            ),
        )
    }

    pub fn routing(&mut self) -> Result<bool, ResolveError> {
        self.confirm(
            self.request.routing,
            Question::confirm("routing", "routing", "Would you like to add routing?", true),
        )
    }

    pub fn docker(&mut self) -> Result<bool, ResolveError> {
        self.confirm(
            self.request.docker,
            Question::confirm(
                "docker",
                "docker",
                "Would you like to generate a Dockerfile? [https://docs.docker.com/]",
                false,
            ),
        )
    }

    /// Whether to generate plain JavaScript. The question is asked the other
    /// way round ("use TypeScript?").
    pub fn js(&mut self) -> Result<bool, ResolveError> {
        if let Some(flag) = self.request.js {
            return Ok(flag);
        }
        let question = Question::confirm(
            "typescript",
            "js",
            "Would you like to use TypeScript with this project?",
            true,
        );
        Ok(!ask_confirm(&mut *self.prompter, &question)?)
    }

    fn confirm(&mut self, flag: Option<bool>, question: Question) -> Result<bool, ResolveError> {
        match flag {
            Some(value) => Ok(value),
            None => ask_confirm(&mut *self.prompter, &question),
        }
    }

    /// Ask the operator to pick one of `allowed`
    pub(crate) fn select<T: OptionValue>(
        &mut self,
        key: &'static str,
        message: &str,
        allowed: &[T],
        initial: Option<T>,
    ) -> Result<T, ResolveError> {
        let choices = allowed
            .iter()
            .map(|option| Choice {
                value: option.id(),
                label: option.label().to_string(),
                hint: option.hint().to_string(),
            })
            .collect();
        let mut question = Question::select(key, T::FLAG, message, choices);
        if let Some(initial) = initial {
            question = question.initial(initial.id());
        }

        let value = ask_choice(&mut *self.prompter, &question)?;
        let picked = parse_option(value, allowed)?;
        tracing::debug!(question = key, answer = picked.id(), "resolved by prompt");
        Ok(picked)
    }
}
