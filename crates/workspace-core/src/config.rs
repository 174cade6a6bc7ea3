//! The fully resolved workspace configuration handed to the generator

use crate::options::{
    Bundler, CiProvider, E2eTestRunner, NodeFramework, PackageManager, ReactFramework, Style,
    WorkspaceType,
};
use crate::preset::{Preset, Stack};
use serde::Serialize;

/// Final output of resolution. Every field the chosen stack needs is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    /// Workspace folder name
    pub name: String,
    pub options: StackOptions,
    pub package_manager: PackageManager,
    pub default_base: String,
    pub cloud: bool,
    /// `None` when no CI workflow should be generated
    pub ci: Option<CiProvider>,
}

impl ResolvedConfiguration {
    /// Preset string the generator applies (built-in id or package specifier)
    pub fn preset(&self) -> &str {
        self.options.preset()
    }

    /// Built-in preset, if one was resolved
    pub fn builtin_preset(&self) -> Option<Preset> {
        self.options.builtin_preset()
    }

    /// Stack the configuration was resolved for; `None` for third-party presets
    pub fn stack(&self) -> Option<Stack> {
        self.options.stack()
    }
}

/// Stack-specific options, one shape per stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stack", rename_all = "kebab-case")]
pub enum StackOptions {
    None(NoneOptions),
    React(ReactOptions),
    Angular(AngularOptions),
    Vue(VueOptions),
    Node(NodeOptions),
    Unknown(UnknownOptions),
    ThirdParty(ThirdPartyOptions),
}

impl StackOptions {
    pub fn preset(&self) -> &str {
        match self {
            StackOptions::ThirdParty(opts) => &opts.preset,
            _ => self.builtin_preset().map(|p| p.as_str()).unwrap_or_default(),
        }
    }

    pub fn builtin_preset(&self) -> Option<Preset> {
        match self {
            StackOptions::None(opts) => Some(opts.preset),
            StackOptions::React(opts) => Some(opts.preset),
            StackOptions::Angular(opts) => Some(opts.preset),
            StackOptions::Vue(opts) => Some(opts.preset),
            StackOptions::Node(opts) => Some(opts.preset),
            StackOptions::Unknown(opts) => Some(opts.preset),
            StackOptions::ThirdParty(_) => None,
        }
    }

    pub fn stack(&self) -> Option<Stack> {
        match self {
            StackOptions::None(_) => Some(Stack::None),
            StackOptions::React(_) => Some(Stack::React),
            StackOptions::Angular(_) => Some(Stack::Angular),
            StackOptions::Vue(_) => Some(Stack::Vue),
            StackOptions::Node(_) => Some(Stack::Node),
            StackOptions::Unknown(_) => Some(Stack::Unknown),
            StackOptions::ThirdParty(_) => None,
        }
    }

    /// Application name, where the stack has one
    pub fn app_name(&self) -> Option<&str> {
        match self {
            StackOptions::None(opts) => opts.app_name.as_deref(),
            StackOptions::React(opts) => Some(&opts.app_name),
            StackOptions::Angular(opts) => Some(&opts.app_name),
            StackOptions::Vue(opts) => Some(&opts.app_name),
            StackOptions::Node(opts) => Some(&opts.app_name),
            StackOptions::Unknown(_) => None,
            StackOptions::ThirdParty(opts) => Some(&opts.app_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoneOptions {
    pub preset: Preset,
    pub workspace_type: Option<WorkspaceType>,
    /// Only set for the standalone TypeScript preset
    pub app_name: Option<String>,
    /// Plain JavaScript instead of TypeScript
    pub js: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactOptions {
    pub preset: Preset,
    pub workspace_type: WorkspaceType,
    pub app_name: String,
    pub app: ReactApp,
}

/// What kind of react application is generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "framework",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ReactApp {
    #[serde(rename = "none")]
    Web {
        bundler: Bundler,
        e2e_test_runner: E2eTestRunner,
        style: Style,
    },
    #[serde(rename = "nextjs")]
    NextJs {
        /// Use the App Router
        app_dir: bool,
        e2e_test_runner: E2eTestRunner,
        style: Style,
    },
    ReactNative { style: Option<Style> },
    Expo { style: Option<Style> },
}

impl ReactApp {
    pub fn framework(&self) -> ReactFramework {
        match self {
            ReactApp::Web { .. } => ReactFramework::None,
            ReactApp::NextJs { .. } => ReactFramework::NextJs,
            ReactApp::ReactNative { .. } => ReactFramework::ReactNative,
            ReactApp::Expo { .. } => ReactFramework::Expo,
        }
    }

    pub fn style(&self) -> Option<Style> {
        match self {
            ReactApp::Web { style, .. } | ReactApp::NextJs { style, .. } => Some(*style),
            ReactApp::ReactNative { style } | ReactApp::Expo { style } => *style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularOptions {
    pub preset: Preset,
    pub workspace_type: WorkspaceType,
    pub app_name: String,
    pub style: Style,
    pub e2e_test_runner: E2eTestRunner,
    pub standalone_api: bool,
    pub routing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VueOptions {
    pub preset: Preset,
    pub workspace_type: WorkspaceType,
    pub app_name: String,
    pub style: Style,
    pub e2e_test_runner: E2eTestRunner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOptions {
    pub preset: Preset,
    pub workspace_type: WorkspaceType,
    pub app_name: String,
    pub framework: NodeFramework,
    pub docker: bool,
}

/// A built-in preset without stack-specific options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownOptions {
    pub preset: Preset,
}

/// An external preset package; it owns its own option semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyOptions {
    /// Package specifier, e.g. `@acme/preset@1.2.0`
    pub preset: String,
    /// Always empty
    pub app_name: String,
    /// Always empty
    pub style: String,
}

impl ThirdPartyOptions {
    pub fn new(preset: impl Into<String>) -> Self {
        Self {
            preset: preset.into(),
            app_name: String::new(),
            style: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_config() -> ResolvedConfiguration {
        ResolvedConfiguration {
            name: "acme".to_string(),
            options: StackOptions::Node(NodeOptions {
                preset: Preset::Nest,
                workspace_type: WorkspaceType::Integrated,
                app_name: "api".to_string(),
                framework: NodeFramework::Nest,
                docker: true,
            }),
            package_manager: PackageManager::Npm,
            default_base: "main".to_string(),
            cloud: false,
            ci: None,
        }
    }

    #[test]
    fn test_accessors() {
        let config = node_config();
        assert_eq!(config.preset(), "nest");
        assert_eq!(config.builtin_preset(), Some(Preset::Nest));
        assert_eq!(config.stack(), Some(Stack::Node));
        assert_eq!(config.options.app_name(), Some("api"));
    }

    #[test]
    fn test_third_party_has_no_stack() {
        let options = StackOptions::ThirdParty(ThirdPartyOptions::new("@acme/preset"));
        assert_eq!(options.preset(), "@acme/preset");
        assert_eq!(options.stack(), None);
        assert_eq!(options.app_name(), Some(""));
    }

    #[test]
    fn test_serializes_with_stack_tag() {
        let yaml = serde_yaml::to_string(&node_config()).unwrap();
        assert!(yaml.contains("stack: node"));
        assert!(yaml.contains("preset: nest"));
        assert!(yaml.contains("workspaceType: integrated"));
        assert!(yaml.contains("packageManager: npm"));
    }

    #[test]
    fn test_react_app_serializes_framework_tag() {
        let app = ReactApp::NextJs {
            app_dir: true,
            e2e_test_runner: E2eTestRunner::Playwright,
            style: Style::Emotion,
        };
        let yaml = serde_yaml::to_string(&app).unwrap();
        assert!(yaml.contains("framework: nextjs"));
        assert!(yaml.contains("appDir: true"));
        assert!(yaml.contains("e2eTestRunner: playwright"));
        assert_eq!(app.framework(), ReactFramework::NextJs);
        assert_eq!(app.style(), Some(Style::Emotion));
    }
}
