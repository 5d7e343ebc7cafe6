//! Command handlers for the `guideon` CLI.

pub mod audit;
pub mod config_cmd;
pub mod documents;
pub mod sites;
pub mod util;

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;
use crate::session::Session;

/// Resolved presentation options shared by every handler.
pub struct Ui {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

/// Route a parsed command to its handler. Config and completions are
/// handled in `main` (they need no session).
pub fn dispatch(command: Command, session: &mut Session, ui: &Ui) -> Result<(), CliError> {
    match command {
        Command::Sites(args) => sites::handle(session, args, ui),
        Command::Audit(args) => audit::handle(session, args, ui),
        Command::Documents(args) => documents::handle(session, args, ui),
        Command::Config(_) | Command::Completions(_) => unreachable!("handled in main"),
    }
}
