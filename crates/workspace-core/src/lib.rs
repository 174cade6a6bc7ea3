//! Workspace Core - configuration resolution for workspace scaffolding CLIs
//!
//! This library turns a partially specified "create a workspace" request into
//! a complete, validated [`ResolvedConfiguration`]: which preset to apply,
//! which stack it belongs to and every option that stack needs. Missing values
//! are asked for one question at a time through a [`Prompter`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Data** - presets, option sets, the request and the resolved configuration
//! - **Layer 2: Resolution** - preset normalization, third-party lookup, stack
//!   classification, per-stack decision trees and the orchestrating [`resolve`]
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompter and [`run`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use workspace_core::{resolve, DefaultsPrompter, Environment, RawRequest};
//!
//! let request = RawRequest {
//!     name: Some("acme".into()),
//!     preset: Some("nest".into()),
//!     interactive: false,
//!     ..Default::default()
//! };
//! let config = resolve(&request, &Environment::from_process(), &mut DefaultsPrompter)?;
//! println!("{}", workspace_core::handoff::render_yaml(&config)?);
//! ```

pub mod config;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod options;
pub mod preset;
pub mod product;
pub mod prompt;
pub mod request;
pub mod resolve;
pub mod third_party;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ResolvedConfiguration, StackOptions};
pub use error::{ErrorMessage, ResolveError, FAILURE_EXIT_CODE};
pub use preset::{Preset, Stack};
pub use product::ProductConfig;
pub use prompt::{DefaultsPrompter, Prompter, ScriptedPrompter};
pub use request::{Environment, RawRequest};
pub use resolve::resolve;

#[cfg(feature = "tui")]
pub use tui::run;
