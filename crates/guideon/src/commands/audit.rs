//! Audit log command handlers.

use chrono::NaiveDate;
use tabled::Tabled;

use guideon_core::{AuditFilterUpdate, AuditLogEntry};

use crate::cli::{AuditArgs, AuditCommand};
use crate::commands::{Ui, util};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "When")]
    when: String,
}

fn audit_row(entry: &AuditLogEntry, color: bool) -> AuditRow {
    AuditRow {
        id: entry.id.to_string(),
        kind: entry.kind.to_string(),
        site: entry.site.clone().unwrap_or_else(|| "-".into()),
        action: entry.action.clone(),
        target: entry.target.clone(),
        status: util::status_badge(entry.status, color),
        when: entry.time_label.clone(),
    }
}

fn entry_detail(entry: &AuditLogEntry) -> String {
    [
        format!("Entry {} · {} · {}", entry.id, entry.kind, entry.status),
        format!("  site:     {}", entry.site.as_deref().unwrap_or("-")),
        format!("  action:   {}", entry.action),
        format!("  target:   {}", entry.target),
        format!(
            "  occurred: {} ({})",
            entry.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            entry.time_label
        ),
        format!("  message:  {}", entry.message),
    ]
    .join("\n")
}

/// Start of `date` as a UTC instant.
fn day_start(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
        .and_utc()
}

/// End of `date` as a UTC instant, so `--to` stays day-inclusive.
fn day_end(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
        .and_utc()
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(session: &mut Session, args: AuditArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        AuditCommand::List { kind, from, to, page } => {
            if let Some(kind) = kind {
                session.audit.update_filter(AuditFilterUpdate::Kind(Some(kind.into())));
            }
            if let Some(from) = from {
                session.audit.update_filter(AuditFilterUpdate::From(Some(day_start(from))));
            }
            if let Some(to) = to {
                session.audit.update_filter(AuditFilterUpdate::To(Some(day_end(to))));
            }

            util::check_page(page, session.audit.page().total_pages)?;
            session.audit.set_page(page);

            let view = session.audit.page();
            let out = output::render_page(
                ui.format,
                &view,
                |entry| audit_row(entry, ui.color),
                |entry| entry.id.to_string(),
            );
            output::print_output(&out, ui.quiet);
            Ok(())
        }

        AuditCommand::Get { entry } => {
            let found = session
                .audit
                .get(entry)
                .ok_or_else(|| CliError::NotFound {
                    resource: "audit entry".into(),
                    identifier: entry.to_string(),
                    list_command: "audit list".into(),
                })?
                .clone();
            let out = output::render_single(ui.format, &found, entry_detail, |e| e.id.to_string());
            output::print_output(&out, ui.quiet);
            Ok(())
        }
    }
}
