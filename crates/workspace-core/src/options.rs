//! Closed option sets resolved for a workspace
//!
//! Each type implements [`OptionValue`], which gives the flag name, the
//! identifier accepted on the command line and the label shown in prompts.

use crate::error::ResolveError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An enumerated option that can be passed as a flag or picked from a list
pub trait OptionValue: Copy + PartialEq + 'static {
    /// Flag this option is read from
    const FLAG: &'static str;

    /// Identifier accepted on the command line
    fn id(&self) -> &'static str;

    /// Label shown in select prompts
    fn label(&self) -> &'static str {
        self.id()
    }

    /// Hint shown next to the label
    fn hint(&self) -> &'static str {
        ""
    }
}

/// Parse a flag value, accepting only the entries in `allowed`
pub fn parse_option<T: OptionValue>(value: &str, allowed: &[T]) -> Result<T, ResolveError> {
    allowed
        .iter()
        .find(|candidate| candidate.id() == value)
        .copied()
        .ok_or_else(|| ResolveError::InvalidOption {
            option: T::FLAG,
            value: value.to_string(),
            expected: allowed.iter().map(|a| a.id().to_string()).collect(),
        })
}

/// Check that an already-typed flag value is one the current question offers
pub fn ensure_allowed<T: OptionValue>(value: T, allowed: &[T]) -> Result<T, ResolveError> {
    parse_option(value.id(), allowed)
}

/// Workspace shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WorkspaceType {
    PackageBased,
    Integrated,
    Standalone,
}

impl OptionValue for WorkspaceType {
    const FLAG: &'static str = "workspace-type";

    fn id(&self) -> &'static str {
        match self {
            WorkspaceType::PackageBased => "package-based",
            WorkspaceType::Integrated => "integrated",
            WorkspaceType::Standalone => "standalone",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkspaceType::PackageBased => "Package-based Monorepo",
            WorkspaceType::Integrated => "Integrated Monorepo",
            WorkspaceType::Standalone => "Standalone",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            WorkspaceType::PackageBased => "Fast builds, but you run things your way",
            WorkspaceType::Integrated => "A monorepo that contains multiple projects",
            WorkspaceType::Standalone => "A single project, made fast",
        }
    }
}

/// Framework choice for the react stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactFramework {
    None,
    #[serde(rename = "nextjs")]
    NextJs,
    ReactNative,
    Expo,
}

impl ReactFramework {
    pub const ALL: [ReactFramework; 4] = [
        ReactFramework::None,
        ReactFramework::NextJs,
        ReactFramework::Expo,
        ReactFramework::ReactNative,
    ];
}

impl OptionValue for ReactFramework {
    const FLAG: &'static str = "framework";

    fn id(&self) -> &'static str {
        match self {
            ReactFramework::None => "none",
            ReactFramework::NextJs => "nextjs",
            ReactFramework::ReactNative => "react-native",
            ReactFramework::Expo => "expo",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReactFramework::None => "None",
            ReactFramework::NextJs => "Next.js",
            ReactFramework::ReactNative => "React Native",
            ReactFramework::Expo => "Expo",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ReactFramework::None => "I only want react and react-dom",
            ReactFramework::NextJs => "https://nextjs.org/",
            ReactFramework::ReactNative => "https://reactnative.dev/",
            ReactFramework::Expo => "https://expo.io/",
        }
    }
}

/// Framework choice for the node stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeFramework {
    None,
    Express,
    Fastify,
    Koa,
    Nest,
}

impl NodeFramework {
    pub const ALL: [NodeFramework; 5] = [
        NodeFramework::None,
        NodeFramework::Express,
        NodeFramework::Fastify,
        NodeFramework::Koa,
        NodeFramework::Nest,
    ];
}

impl OptionValue for NodeFramework {
    const FLAG: &'static str = "framework";

    fn id(&self) -> &'static str {
        match self {
            NodeFramework::None => "none",
            NodeFramework::Express => "express",
            NodeFramework::Fastify => "fastify",
            NodeFramework::Koa => "koa",
            NodeFramework::Nest => "nest",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NodeFramework::None => "None",
            NodeFramework::Express => "Express",
            NodeFramework::Fastify => "Fastify",
            NodeFramework::Koa => "Koa",
            NodeFramework::Nest => "NestJs",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            NodeFramework::None => "",
            NodeFramework::Express => "https://expressjs.com/",
            NodeFramework::Fastify => "https://www.fastify.dev/",
            NodeFramework::Koa => "https://koajs.com/",
            NodeFramework::Nest => "https://nestjs.com/",
        }
    }
}

/// Bundler for react applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    Vite,
    Webpack,
    Rspack,
}

impl Bundler {
    pub const ALL: [Bundler; 3] = [Bundler::Vite, Bundler::Webpack, Bundler::Rspack];
}

impl OptionValue for Bundler {
    const FLAG: &'static str = "bundler";

    fn id(&self) -> &'static str {
        match self {
            Bundler::Vite => "vite",
            Bundler::Webpack => "webpack",
            Bundler::Rspack => "rspack",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Bundler::Vite => "Vite",
            Bundler::Webpack => "Webpack",
            Bundler::Rspack => "Rspack",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Bundler::Vite => "https://vitejs.dev/",
            Bundler::Webpack => "https://webpack.js.org/",
            Bundler::Rspack => "https://www.rspack.dev/",
        }
    }
}

/// End-to-end test runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum E2eTestRunner {
    Cypress,
    Playwright,
    None,
}

impl E2eTestRunner {
    pub const ALL: [E2eTestRunner; 3] = [
        E2eTestRunner::Cypress,
        E2eTestRunner::Playwright,
        E2eTestRunner::None,
    ];
}

impl OptionValue for E2eTestRunner {
    const FLAG: &'static str = "e2e-test-runner";

    fn id(&self) -> &'static str {
        match self {
            E2eTestRunner::Cypress => "cypress",
            E2eTestRunner::Playwright => "playwright",
            E2eTestRunner::None => "none",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            E2eTestRunner::Cypress => "Cypress",
            E2eTestRunner::Playwright => "Playwright",
            E2eTestRunner::None => "None",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            E2eTestRunner::Cypress => "https://www.cypress.io/",
            E2eTestRunner::Playwright => "https://playwright.dev/",
            E2eTestRunner::None => "",
        }
    }
}

/// Stylesheet format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "css")]
    Css,
    #[serde(rename = "scss")]
    Scss,
    #[serde(rename = "less")]
    Less,
    #[serde(rename = "styled-components")]
    StyledComponents,
    #[serde(rename = "@emotion/styled")]
    Emotion,
    #[serde(rename = "styled-jsx")]
    StyledJsx,
    #[serde(rename = "none")]
    None,
}

impl Style {
    /// Formats offered for react and Next.js applications
    pub const REACT: [Style; 6] = [
        Style::Css,
        Style::Scss,
        Style::Less,
        Style::StyledComponents,
        Style::Emotion,
        Style::StyledJsx,
    ];

    /// Formats offered for vue applications
    pub const VUE: [Style; 4] = [Style::Css, Style::Scss, Style::Less, Style::None];

    /// Formats offered for angular applications
    pub const ANGULAR: [Style; 3] = [Style::Css, Style::Scss, Style::Less];
}

impl OptionValue for Style {
    const FLAG: &'static str = "style";

    fn id(&self) -> &'static str {
        match self {
            Style::Css => "css",
            Style::Scss => "scss",
            Style::Less => "less",
            Style::StyledComponents => "styled-components",
            Style::Emotion => "@emotion/styled",
            Style::StyledJsx => "styled-jsx",
            Style::None => "none",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Style::Css => "CSS",
            Style::Scss => "SASS(.scss)",
            Style::Less => "LESS",
            Style::StyledComponents => "styled-components",
            Style::Emotion => "emotion",
            Style::StyledJsx => "styled-jsx",
            Style::None => "None",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Style::Css | Style::None => "",
            Style::Scss => "http://sass-lang.com",
            Style::Less => "http://lesscss.org",
            Style::StyledComponents => "https://styled-components.com",
            Style::Emotion => "https://emotion.sh",
            Style::StyledJsx => "https://www.npmjs.com/package/styled-jsx",
        }
    }
}

/// Package manager used to install the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Detect the invoking package manager from an `npm_config_user_agent` value
    pub fn detect(user_agent: Option<&str>) -> PackageManager {
        match user_agent {
            Some(agent) if agent.starts_with("yarn") => PackageManager::Yarn,
            Some(agent) if agent.starts_with("pnpm") => PackageManager::Pnpm,
            _ => PackageManager::Npm,
        }
    }
}

impl OptionValue for PackageManager {
    const FLAG: &'static str = "package-manager";

    fn id(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PackageManager::Npm => "NPM",
            PackageManager::Yarn => "Yarn",
            PackageManager::Pnpm => "PNPM",
        }
    }
}

/// CI provider to generate a workflow for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CiProvider {
    Github,
    #[value(name = "circleci")]
    #[serde(rename = "circleci")]
    CircleCi,
    Azure,
    Gitlab,
    BitbucketPipelines,
}

impl CiProvider {
    pub const ALL: [CiProvider; 5] = [
        CiProvider::Github,
        CiProvider::CircleCi,
        CiProvider::Azure,
        CiProvider::Gitlab,
        CiProvider::BitbucketPipelines,
    ];
}

impl OptionValue for CiProvider {
    const FLAG: &'static str = "ci";

    fn id(&self) -> &'static str {
        match self {
            CiProvider::Github => "github",
            CiProvider::CircleCi => "circleci",
            CiProvider::Azure => "azure",
            CiProvider::Gitlab => "gitlab",
            CiProvider::BitbucketPipelines => "bitbucket-pipelines",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CiProvider::Github => "GitHub Actions",
            CiProvider::CircleCi => "Circle CI",
            CiProvider::Azure => "Azure DevOps",
            CiProvider::Gitlab => "GitLab",
            CiProvider::BitbucketPipelines => "BitBucket Pipelines",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_accepts_allowed_value() {
        assert_eq!(parse_option("scss", &Style::ANGULAR).unwrap(), Style::Scss);
        assert_eq!(
            parse_option("@emotion/styled", &Style::REACT).unwrap(),
            Style::Emotion
        );
    }

    #[test]
    fn test_parse_option_rejects_value_outside_stack() {
        let err = parse_option("styled-jsx", &Style::ANGULAR).unwrap_err();
        match err {
            ResolveError::InvalidOption {
                option, expected, ..
            } => {
                assert_eq!(option, "style");
                assert_eq!(expected, vec!["css", "scss", "less"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ensure_allowed_rejects_package_based_for_two_way_topology() {
        let allowed = [WorkspaceType::Integrated, WorkspaceType::Standalone];
        assert!(ensure_allowed(WorkspaceType::PackageBased, &allowed).is_err());
        assert!(ensure_allowed(WorkspaceType::Standalone, &allowed).is_ok());
    }

    #[test]
    fn test_framework_ids() {
        assert_eq!(
            parse_option("react-native", &ReactFramework::ALL).unwrap(),
            ReactFramework::ReactNative
        );
        assert_eq!(
            parse_option("fastify", &NodeFramework::ALL).unwrap(),
            NodeFramework::Fastify
        );
        assert!(parse_option("nextjs", &NodeFramework::ALL).is_err());
    }

    #[test]
    fn test_detect_package_manager() {
        assert_eq!(PackageManager::detect(None), PackageManager::Npm);
        assert_eq!(
            PackageManager::detect(Some("yarn/1.22.19 npm/? node/v18.16.0 darwin arm64")),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::detect(Some("pnpm/8.6.0 npm/? node/v18.16.0 linux x64")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::detect(Some("npm/9.5.1 node/v18.16.0 linux x64")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_clap_value_names_match_ids() {
        for ci in CiProvider::ALL {
            let value = ci.to_possible_value().expect("not skipped");
            assert_eq!(value.get_name(), ci.id());
        }
        for pm in PackageManager::ALL {
            assert_eq!(pm.to_possible_value().unwrap().get_name(), pm.id());
        }
        let standalone = WorkspaceType::Standalone.to_possible_value().unwrap();
        assert_eq!(standalone.get_name(), "standalone");
        let package_based = WorkspaceType::PackageBased.to_possible_value().unwrap();
        assert_eq!(package_based.get_name(), "package-based");
    }
}
