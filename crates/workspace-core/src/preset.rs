//! Built-in presets, stack classification and deprecated preset handling

use crate::options::WorkspaceType;
use crate::prompt::Notice;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in scaffolding templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Apps,
    Empty,
    Core,
    Npm,
    Ts,
    TsStandalone,
    WebComponents,
    Angular,
    AngularMonorepo,
    AngularStandalone,
    React,
    ReactMonorepo,
    ReactStandalone,
    #[serde(rename = "next")]
    NextJs,
    #[serde(rename = "nextjs-standalone")]
    NextJsStandalone,
    ReactNative,
    Expo,
    VueMonorepo,
    VueStandalone,
    Nest,
    Express,
    NodeStandalone,
    NodeMonorepo,
}

impl Preset {
    pub const ALL: [Preset; 23] = [
        Preset::Apps,
        Preset::Empty,
        Preset::Core,
        Preset::Npm,
        Preset::Ts,
        Preset::TsStandalone,
        Preset::WebComponents,
        Preset::Angular,
        Preset::AngularMonorepo,
        Preset::AngularStandalone,
        Preset::React,
        Preset::ReactMonorepo,
        Preset::ReactStandalone,
        Preset::NextJs,
        Preset::NextJsStandalone,
        Preset::ReactNative,
        Preset::Expo,
        Preset::VueMonorepo,
        Preset::VueStandalone,
        Preset::Nest,
        Preset::Express,
        Preset::NodeStandalone,
        Preset::NodeMonorepo,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Preset::Apps => "apps",
            Preset::Empty => "empty",
            Preset::Core => "core",
            Preset::Npm => "npm",
            Preset::Ts => "ts",
            Preset::TsStandalone => "ts-standalone",
            Preset::WebComponents => "web-components",
            Preset::Angular => "angular",
            Preset::AngularMonorepo => "angular-monorepo",
            Preset::AngularStandalone => "angular-standalone",
            Preset::React => "react",
            Preset::ReactMonorepo => "react-monorepo",
            Preset::ReactStandalone => "react-standalone",
            Preset::NextJs => "next",
            Preset::NextJsStandalone => "nextjs-standalone",
            Preset::ReactNative => "react-native",
            Preset::Expo => "expo",
            Preset::VueMonorepo => "vue-monorepo",
            Preset::VueStandalone => "vue-standalone",
            Preset::Nest => "nest",
            Preset::Express => "express",
            Preset::NodeStandalone => "node-standalone",
            Preset::NodeMonorepo => "node-monorepo",
        }
    }

    /// Stack this preset belongs to. Total over every preset.
    pub const fn stack(&self) -> Stack {
        match self {
            Preset::Angular | Preset::AngularStandalone | Preset::AngularMonorepo => Stack::Angular,
            Preset::React
            | Preset::ReactStandalone
            | Preset::ReactMonorepo
            | Preset::NextJs
            | Preset::NextJsStandalone
            | Preset::ReactNative
            | Preset::Expo => Stack::React,
            Preset::VueStandalone | Preset::VueMonorepo => Stack::Vue,
            Preset::Nest | Preset::Express | Preset::NodeStandalone | Preset::NodeMonorepo => {
                Stack::Node
            }
            Preset::Apps | Preset::Npm | Preset::Ts | Preset::TsStandalone => Stack::None,
            Preset::WebComponents | Preset::Core | Preset::Empty => Stack::Unknown,
        }
    }

    /// Workspace topology implied by the preset, if it fixes one
    pub const fn workspace_type(&self) -> Option<WorkspaceType> {
        match self {
            Preset::TsStandalone
            | Preset::AngularStandalone
            | Preset::ReactStandalone
            | Preset::NextJsStandalone
            | Preset::VueStandalone
            | Preset::NodeStandalone => Some(WorkspaceType::Standalone),
            Preset::Npm | Preset::Core => Some(WorkspaceType::PackageBased),
            Preset::Apps
            | Preset::Empty
            | Preset::Ts
            | Preset::WebComponents
            | Preset::AngularMonorepo
            | Preset::ReactMonorepo
            | Preset::NextJs
            | Preset::ReactNative
            | Preset::Expo
            | Preset::VueMonorepo
            | Preset::Nest
            | Preset::Express
            | Preset::NodeMonorepo => Some(WorkspaceType::Integrated),
            Preset::Angular | Preset::React => None,
        }
    }

    /// Replacement for a deprecated preset
    pub const fn replacement(&self) -> Option<Preset> {
        match self {
            Preset::Core => Some(Preset::Npm),
            Preset::Empty => Some(Preset::Apps),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Returned when a string is not a built-in preset identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

/// Coarse technology classification used to pick a resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    None,
    React,
    Angular,
    Vue,
    Node,
    Unknown,
}

impl Stack {
    /// Stacks offered when no preset was given. `Unknown` is never offered.
    pub const SELECTABLE: [Stack; 5] = [
        Stack::None,
        Stack::React,
        Stack::Vue,
        Stack::Angular,
        Stack::Node,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Stack::None => "none",
            Stack::React => "react",
            Stack::Angular => "angular",
            Stack::Vue => "vue",
            Stack::Node => "node",
            Stack::Unknown => "unknown",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Stack::None => "Configures a TypeScript/JavaScript project with minimal structure.",
            Stack::React => "Configures a React application with your framework of choice.",
            Stack::Angular => "Configures an Angular application with modern tooling.",
            Stack::Vue => "Configures a Vue application with modern tooling.",
            Stack::Node => "Configures a Node API application with your framework of choice.",
            Stack::Unknown => "",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite a deprecated preset in place.
///
/// Returns the notice to show when a rewrite happened. A second call on the
/// rewritten value finds nothing to do.
pub fn normalize_preset(preset: &mut Option<String>) -> Option<Notice> {
    let raw = preset.as_deref()?;
    let deprecated: Preset = raw.parse().ok()?;
    let replacement = deprecated.replacement()?;

    *preset = Some(replacement.as_str().to_string());

    Some(
        Notice::new(format!("The \"{}\" preset is deprecated.", deprecated)).with_line(format!(
            "The \"{}\" preset will be removed in a future release. Use the \"{}\" preset instead.",
            deprecated, replacement
        )),
    )
}
