//! Document upload command handlers.

use tabled::Tabled;

use guideon_core::DocumentEntry;

use crate::cli::{DocumentsArgs, DocumentsCommand};
use crate::commands::{Ui, util};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DocumentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
}

impl From<&DocumentEntry> for DocumentRow {
    fn from(entry: &DocumentEntry) -> Self {
        Self {
            id: entry.id.clone(),
            file: entry.file_name.clone(),
            status: entry.status.to_string(),
            size: entry.size.clone(),
            uploaded: entry.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(session: &mut Session, args: DocumentsArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        DocumentsCommand::List { status, page } => {
            if let Some(status) = status {
                session.documents.set_status_filter(Some(status.into()));
            }

            util::check_page(page, session.documents.page().total_pages)?;
            session.documents.set_page(page);

            let view = session.documents.page();
            let out = output::render_page(
                ui.format,
                &view,
                |entry| DocumentRow::from(entry),
                |entry| entry.id.clone(),
            );
            output::print_output(&out, ui.quiet);
            Ok(())
        }
    }
}
