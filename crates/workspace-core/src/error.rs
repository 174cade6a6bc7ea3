//! Resolution errors and the invariant checker

use std::fmt;
use thiserror::Error;

/// Exit status used for every fatal resolution failure
pub const FAILURE_EXIT_CODE: i32 = 1;

/// A structured, user-facing error report (title plus optional body lines)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub title: String,
    pub body_lines: Vec<String>,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body_lines.push(line.into());
        self
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.body_lines {
            write!(f, "\n  {}", line)?;
        }
        Ok(())
    }
}

/// Every way a resolution run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A name prompt was answered with an empty string
    #[error("Invalid {what}: name cannot be empty")]
    EmptyName { what: &'static str },

    /// The prompted workspace folder already exists
    #[error("That folder is already taken: {name}")]
    FolderTaken { name: String },

    /// The preset is neither built in nor a valid package specifier
    #[error("Could not find preset \"{preset}\"")]
    PresetNotFound { preset: String, reason: String },

    /// A flag value outside the set accepted by the chosen stack
    #[error("Invalid value \"{value}\" for --{option}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: Vec<String>,
    },

    /// A question had no default and prompting is disabled
    #[error("Missing required option --{option} in non-interactive mode")]
    MissingOption { option: &'static str },

    /// The operator aborted a prompt
    #[error("Prompt cancelled: {question}")]
    Cancelled { question: &'static str },

    /// The prompt backend failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

impl ResolveError {
    /// Render the error the way it is shown to the operator
    pub fn message(&self) -> ErrorMessage {
        match self {
            ResolveError::EmptyName { what } => {
                ErrorMessage::new(format!("Invalid {}", what)).with_line(format!(
                    "{} cannot be empty",
                    capitalize(what)
                ))
            }
            ResolveError::FolderTaken { name } => ErrorMessage::new("That folder is already taken")
                .with_line(format!("\"{}\" already exists in the current directory", name)),
            ResolveError::PresetNotFound { preset, reason } => {
                ErrorMessage::new(format!("Could not find preset \"{}\"", preset)).with_line(reason)
            }
            ResolveError::InvalidOption {
                option,
                value,
                expected,
            } => ErrorMessage::new(format!("Invalid value \"{}\" for --{}", value, option))
                .with_line(format!("It must be one of the following: {}", expected.join(", "))),
            ResolveError::MissingOption { option } => {
                ErrorMessage::new(format!("Missing required option --{}", option))
                    .with_line("Pass it explicitly or run without --interactive=false")
            }
            ResolveError::Cancelled { question } => {
                ErrorMessage::new("Operation cancelled").with_line(format!("No answer for: {}", question))
            }
            ResolveError::Prompt(e) => ErrorMessage::new("Prompt failed").with_line(e.to_string()),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

/// Fail-fast assertion used throughout resolution.
///
/// Returns the error instead of terminating; the top-level caller reports it
/// and exits with [`FAILURE_EXIT_CODE`].
pub fn invariant(predicate: bool, error: impl FnOnce() -> ResolveError) -> Result<(), ResolveError> {
    if predicate {
        Ok(())
    } else {
        Err(error())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
