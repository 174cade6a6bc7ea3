//! Product configuration trait for CLI binaries
//!
//! The resolver is product-agnostic. Each binary implements this trait to
//! name itself and to point operators at the right documentation once a
//! configuration has been resolved.

use crate::config::ResolvedConfiguration;
use crate::preset::Preset;

/// Configuration trait for the binaries built on this library
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Tutorial to read after creating a workspace from a built-in preset
    fn tutorial_link(&self, _preset: Preset) -> String {
        self.docs_url().to_string()
    }

    /// Lines shown once the configuration has been handed off
    fn next_steps(&self, config: &ResolvedConfiguration) -> Vec<String> {
        match config.builtin_preset() {
            Some(preset) => vec![
                format!("cd {}", config.name),
                format!("Learn more: {}", self.tutorial_link(preset)),
            ],
            None => vec![
                format!("Successfully applied preset: {}", config.preset()),
                format!("cd {}", config.name),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StackOptions, ThirdPartyOptions, UnknownOptions};
    use crate::options::PackageManager;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn docs_url(&self) -> &'static str {
            "https://example.test/docs"
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }
    }

    fn config(options: StackOptions) -> ResolvedConfiguration {
        ResolvedConfiguration {
            name: "acme".to_string(),
            options,
            package_manager: PackageManager::Npm,
            default_base: "main".to_string(),
            cloud: false,
            ci: None,
        }
    }

    #[test]
    fn test_builtin_preset_points_to_tutorial() {
        let steps = TestProduct.next_steps(&config(StackOptions::Unknown(UnknownOptions {
            preset: Preset::WebComponents,
        })));
        assert_eq!(steps[0], "cd acme");
        assert!(steps[1].contains("https://example.test/docs"));
    }

    #[test]
    fn test_third_party_preset_reports_success() {
        let steps = TestProduct.next_steps(&config(StackOptions::ThirdParty(
            ThirdPartyOptions::new("@acme/preset"),
        )));
        assert_eq!(steps[0], "Successfully applied preset: @acme/preset");
    }
}
