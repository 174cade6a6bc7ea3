//! Unresolved input to the resolver

use crate::options::{Bundler, CiProvider, E2eTestRunner, PackageManager, WorkspaceType};
use std::path::PathBuf;

/// Environment variable package managers set when running a create script
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// The flags as supplied by the operator. Any field may be absent.
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// Workspace (folder) name
    pub name: Option<String>,

    /// Built-in preset id or third-party package specifier
    pub preset: Option<String>,

    /// Prompt for missing values (otherwise defaults are used)
    pub interactive: bool,

    /// Also prompt for values that normally fall back to defaults
    pub all_prompts: bool,

    pub workspace_type: Option<WorkspaceType>,
    pub app_name: Option<String>,

    /// Stylesheet format; validated against the chosen stack
    pub style: Option<String>,

    /// Framework; validated against the chosen stack
    pub framework: Option<String>,

    pub bundler: Option<Bundler>,
    pub e2e_test_runner: Option<E2eTestRunner>,
    pub standalone_api: Option<bool>,
    pub routing: Option<bool>,
    pub docker: Option<bool>,
    pub next_app_dir: Option<bool>,

    /// Generate plain JavaScript instead of TypeScript
    pub js: Option<bool>,

    pub package_manager: Option<PackageManager>,
    pub default_base: Option<String>,
    pub ci: Option<CiProvider>,
    pub cloud: Option<bool>,
}

impl Default for RawRequest {
    fn default() -> Self {
        Self {
            name: None,
            preset: None,
            interactive: true,
            all_prompts: false,
            workspace_type: None,
            app_name: None,
            style: None,
            framework: None,
            bundler: None,
            e2e_test_runner: None,
            standalone_api: None,
            routing: None,
            docker: None,
            next_app_dir: None,
            js: None,
            package_manager: None,
            default_base: None,
            ci: None,
            cloud: None,
        }
    }
}

impl RawRequest {
    /// Supplied value of a text flag, treating an empty string as absent
    pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Process state the resolver reads, captured once per run
#[derive(Debug, Clone)]
pub struct Environment {
    /// Directory the workspace folder is created in
    pub cwd: PathBuf,

    /// Value of `npm_config_user_agent`, if set
    pub user_agent: Option<String>,
}

impl Environment {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            user_agent: None,
        }
    }

    /// Capture the current working directory and package manager hint
    pub fn from_process() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_agent: std::env::var(USER_AGENT_ENV).ok(),
        }
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}
