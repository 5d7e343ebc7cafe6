//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` / `ConfigError` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use guideon_config::ConfigError;
use guideon_core::CoreError;

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    #[diagnostic(
        code(guideon::validation),
        help("Fix the value and retry. Site names are 1-100 characters;\nemails must look like operator@example.com.")
    )]
    Validation { field: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(guideon::not_found),
        help("List known ids with: guideon {list_command}")
    )]
    NotFound {
        resource: String,
        identifier: String,
        list_command: String,
    },

    #[error("No demo operator with email '{email}'")]
    #[diagnostic(
        code(guideon::unknown_operator),
        help("Seeded operators: admin@guideon.com (platform admin),\noperator@example.com (site admin for site 1).")
    )]
    UnknownOperator { email: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No profile named '{name}'")]
    #[diagnostic(
        code(guideon::unknown_profile),
        help("List profiles with: guideon config profiles")
    )]
    UnknownProfile { name: String },

    #[error("Configuration error")]
    #[diagnostic(code(guideon::config))]
    Config(#[from] ConfigError),

    // ── Plumbing ─────────────────────────────────────────────────────
    #[error("IO error")]
    #[diagnostic(code(guideon::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::NotFound { .. } | Self::UnknownProfile { .. } | Self::UnknownOperator { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }

    /// Attach the list command a NotFound should point the user at.
    pub fn from_core(err: CoreError, list_command: &str) -> Self {
        match err {
            CoreError::Validation { field, reason } => Self::Validation { field, reason },
            CoreError::NotFound { entity, id } => Self::NotFound {
                resource: entity.into(),
                identifier: id,
                list_command: list_command.into(),
            },
        }
    }
}
