//! Shared helpers for command handlers.

use owo_colors::OwoColorize;

use guideon_core::AuditStatus;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// "active" / "inactive" label, green/dimmed when color is on.
pub fn active_badge(is_active: bool, color: bool) -> String {
    let label = if is_active { "active" } else { "inactive" };
    if !color {
        return label.into();
    }
    if is_active {
        label.green().to_string()
    } else {
        label.dimmed().to_string()
    }
}

/// Audit status label, severity-colored when color is on.
pub fn status_badge(status: AuditStatus, color: bool) -> String {
    let label = status.to_string();
    if !color {
        return label;
    }
    match status {
        AuditStatus::Success => label.green().to_string(),
        AuditStatus::Warning => label.yellow().to_string(),
        AuditStatus::Error => label.red().to_string(),
    }
}

/// Reject a page number the current view cannot offer. Page 0 is always
/// accepted (an empty view renders as "no entries", not an error).
pub fn check_page(requested: usize, total_pages: usize) -> Result<(), CliError> {
    if requested > 0 && requested >= total_pages {
        return Err(CliError::Validation {
            field: "page".into(),
            reason: format!(
                "page {requested} is out of range (the view has {total_pages} page(s), 0-based)"
            ),
        });
    }
    Ok(())
}
