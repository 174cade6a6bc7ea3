//! Resolvers shared by every stack, run after the stack options

use super::primitives::Resolver;
use crate::error::ResolveError;
use crate::options::{CiProvider, OptionValue, PackageManager};
use crate::prompt::{ask_choice, ask_confirm, ask_text, Choice, Prompter, Question};
use crate::request::RawRequest;

/// Base branch used when none is given
pub const DEFAULT_BASE: &str = "main";

/// Select value meaning "do not generate a CI workflow"
const SKIP_CI: &str = "skip";

impl<P: Prompter + ?Sized> Resolver<'_, P> {
    /// Package manager: the flag, else the one running us. Asked only with `all_prompts`.
    pub fn package_manager(&mut self) -> Result<PackageManager, ResolveError> {
        if let Some(flag) = self.request.package_manager {
            return Ok(flag);
        }

        let detected = PackageManager::detect(self.env.user_agent.as_deref());
        if !self.request.all_prompts {
            return Ok(detected);
        }

        self.select(
            "package-manager",
            "Which package manager to use",
            &PackageManager::ALL,
            Some(detected),
        )
    }

    pub fn default_base(&mut self) -> Result<String, ResolveError> {
        if let Some(base) = RawRequest::non_empty(&self.request.default_base) {
            return Ok(base.to_string());
        }
        if !self.request.all_prompts {
            return Ok(DEFAULT_BASE.to_string());
        }

        let question = Question::input("default-base", "default-base", "Main branch name")
            .placeholder(DEFAULT_BASE)
            .default_input(DEFAULT_BASE);
        let reply = ask_text(&mut *self.prompter, &question)?;
        let reply = reply.trim();

        Ok(if reply.is_empty() {
            DEFAULT_BASE.to_string()
        } else {
            reply.to_string()
        })
    }

    pub fn cloud(&mut self) -> Result<bool, ResolveError> {
        if let Some(flag) = self.request.cloud {
            return Ok(flag);
        }
        let question = Question::confirm(
            "cloud",
            "cloud",
            "Enable distributed caching to make your CI faster?",
            false,
        );
        ask_confirm(&mut *self.prompter, &question)
    }

    /// CI provider. Nothing is asked when caching is off.
    pub fn ci(&mut self, cloud: bool) -> Result<Option<CiProvider>, ResolveError> {
        if let Some(flag) = self.request.ci {
            return Ok(Some(flag));
        }
        if !cloud {
            return Ok(None);
        }

        let mut choices: Vec<Choice> = CiProvider::ALL
            .iter()
            .map(|ci| Choice {
                value: ci.id(),
                label: ci.label().to_string(),
                hint: ci.hint().to_string(),
            })
            .collect();
        choices.push(Choice {
            value: SKIP_CI,
            label: "Do it later".to_string(),
            hint: String::new(),
        });

        let question = Question::select("ci", "ci", "CI workflow to generate", choices)
            .initial(CiProvider::Github.id());

        let value = ask_choice(&mut *self.prompter, &question)?;
        if value == SKIP_CI {
            return Ok(None);
        }
        Ok(CiProvider::ALL.iter().find(|ci| ci.id() == value).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{DefaultsPrompter, ScriptedPrompter};
    use crate::request::Environment;

    #[test]
    fn test_package_manager_detected_without_prompt() {
        let request = RawRequest::default();
        let env = Environment::new(std::env::temp_dir()).with_user_agent("pnpm/8.6.0 node/v18");
        let mut prompter = ScriptedPrompter::new();
        let pm = Resolver::new(&request, &env, &mut prompter)
            .package_manager()
            .unwrap();
        assert_eq!(pm, PackageManager::Pnpm);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_all_prompts_asks_package_manager_with_detected_initial() {
        let request = RawRequest {
            all_prompts: true,
            ..Default::default()
        };
        let env = Environment::new(std::env::temp_dir()).with_user_agent("yarn/1.22.19");
        let mut prompter = DefaultsPrompter;
        let pm = Resolver::new(&request, &env, &mut prompter)
            .package_manager()
            .unwrap();
        assert_eq!(pm, PackageManager::Yarn);
    }

    #[test]
    fn test_default_base() {
        let env = Environment::new(std::env::temp_dir());
        let mut prompter = ScriptedPrompter::new();

        let request = RawRequest::default();
        let base = Resolver::new(&request, &env, &mut prompter).default_base().unwrap();
        assert_eq!(base, "main");

        let request = RawRequest {
            all_prompts: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::new().text("default-base", "trunk");
        let base = Resolver::new(&request, &env, &mut prompter).default_base().unwrap();
        assert_eq!(base, "trunk");
    }

    #[test]
    fn test_ci_skipped_without_cloud() {
        let request = RawRequest::default();
        let env = Environment::new(std::env::temp_dir());
        let mut prompter = ScriptedPrompter::new();
        assert_eq!(Resolver::new(&request, &env, &mut prompter).ci(false).unwrap(), None);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_ci_prompt_offers_skip() {
        let request = RawRequest::default();
        let env = Environment::new(std::env::temp_dir());

        let mut prompter = ScriptedPrompter::new().choose("ci", "skip");
        assert_eq!(Resolver::new(&request, &env, &mut prompter).ci(true).unwrap(), None);

        let mut prompter = ScriptedPrompter::new().choose("ci", "gitlab");
        assert_eq!(
            Resolver::new(&request, &env, &mut prompter).ci(true).unwrap(),
            Some(CiProvider::Gitlab)
        );

        let mut prompter = DefaultsPrompter;
        assert_eq!(
            Resolver::new(&request, &env, &mut prompter).ci(true).unwrap(),
            Some(CiProvider::Github)
        );
    }

    #[test]
    fn test_ci_flag_wins_even_without_cloud() {
        let request = RawRequest {
            ci: Some(CiProvider::Azure),
            ..Default::default()
        };
        let env = Environment::new(std::env::temp_dir());
        let mut prompter = ScriptedPrompter::new();
        assert_eq!(
            Resolver::new(&request, &env, &mut prompter).ci(false).unwrap(),
            Some(CiProvider::Azure)
        );
    }

    #[test]
    fn test_cloud_defaults_to_off() {
        let request = RawRequest::default();
        let env = Environment::new(std::env::temp_dir());
        let mut prompter = DefaultsPrompter;
        assert!(!Resolver::new(&request, &env, &mut prompter).cloud().unwrap());
    }
}
