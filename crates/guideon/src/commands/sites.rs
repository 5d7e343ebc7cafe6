//! Site command handlers.

use tabled::Tabled;

use guideon_core::{
    CreateSiteRequest, SiteFilterUpdate, SiteWithInvites, UpdateSiteRequest,
};

use crate::cli::{SitesArgs, SitesCommand};
use crate::commands::{Ui, util};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Invites")]
    invites: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

fn site_row(row: &SiteWithInvites, color: bool) -> SiteRow {
    SiteRow {
        id: row.site.id.to_string(),
        name: row.site.name.clone(),
        status: util::active_badge(row.site.is_active, color),
        invites: if row.invites.is_empty() {
            String::new()
        } else {
            row.invites.len().to_string()
        },
        updated: row.site.updated_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn render_current_page(session: &Session, ui: &Ui) {
    let view = session.sites.page();
    let out = output::render_page(
        ui.format,
        &view,
        |row| site_row(row, ui.color),
        |row| row.site.id.to_string(),
    );
    output::print_output(&out, ui.quiet);
}

fn site_detail(row: &SiteWithInvites) -> String {
    let mut lines = vec![
        format!("Site {} · {}", row.site.id, row.site.name),
        format!("  status:   {}", if row.site.is_active { "active" } else { "inactive" }),
        format!("  created:  {}", row.site.created_at.format("%Y-%m-%d %H:%M")),
        format!("  updated:  {}", row.site.updated_at.format("%Y-%m-%d %H:%M")),
    ];
    if row.invites.is_empty() {
        lines.push("  invites:  none".into());
    } else {
        lines.push("  invites:".into());
        for invite in &row.invites {
            lines.push(format!(
                "    #{} {} ({}) sent {}",
                invite.id,
                invite.email,
                invite.status,
                invite.created_at.format("%Y-%m-%d %H:%M")
            ));
        }
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(session: &mut Session, args: SitesArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List { search, status, page } => {
            if let Some(term) = search {
                session.sites.update_filter(SiteFilterUpdate::SearchTerm(term));
            }
            session.sites.update_filter(SiteFilterUpdate::ActiveStatus(status.into()));

            util::check_page(page, session.sites.page().total_pages)?;
            session.sites.set_page(page);
            render_current_page(session, ui);
            Ok(())
        }

        SitesCommand::Get { site } => {
            let found = session
                .sites
                .get(site)
                .ok_or_else(|| CliError::NotFound {
                    resource: "site".into(),
                    identifier: site.to_string(),
                    list_command: "sites list".into(),
                })?
                .clone();
            let row = SiteWithInvites {
                site: found,
                invites: session.sites.invites_for(site).into_iter().cloned().collect(),
            };
            let out = output::render_single(ui.format, &row, site_detail, |r| r.site.id.to_string());
            output::print_output(&out, ui.quiet);
            Ok(())
        }

        SitesCommand::Create { name } => {
            let id = session
                .sites
                .create(&CreateSiteRequest { name })
                .map_err(|e| CliError::from_core(e, "sites list"))?;
            if !ui.quiet {
                eprintln!("Site created (id {id})");
            }
            render_current_page(session, ui);
            Ok(())
        }

        SitesCommand::Update { site, name } => {
            session
                .sites
                .update(site, &UpdateSiteRequest { name })
                .map_err(|e| CliError::from_core(e, "sites list"))?;
            if !ui.quiet {
                eprintln!("Site {site} renamed");
            }
            render_current_page(session, ui);
            Ok(())
        }

        SitesCommand::Toggle { site } => {
            // Two-step contract: the store never asks, the UI always does.
            let target = session.sites.get(site).ok_or_else(|| CliError::NotFound {
                resource: "site".into(),
                identifier: site.to_string(),
                list_command: "sites list".into(),
            })?;
            let verb = if target.is_active { "Deactivate" } else { "Activate" };
            if !util::confirm(&format!("{verb} site '{}'?", target.name), ui.yes)? {
                return Ok(());
            }
            let now_active = session
                .sites
                .toggle_active(site)
                .map_err(|e| CliError::from_core(e, "sites list"))?;
            if !ui.quiet {
                eprintln!(
                    "Site {site} is now {}",
                    if now_active { "active" } else { "inactive" }
                );
            }
            render_current_page(session, ui);
            Ok(())
        }

        SitesCommand::Delete { site } => {
            let target = session.sites.get(site).ok_or_else(|| CliError::NotFound {
                resource: "site".into(),
                identifier: site.to_string(),
                list_command: "sites list".into(),
            })?;
            if !util::confirm(
                &format!("Delete site '{}'? This is destructive.", target.name),
                ui.yes,
            )? {
                return Ok(());
            }
            session
                .sites
                .remove(site)
                .map_err(|e| CliError::from_core(e, "sites list"))?;
            if !ui.quiet {
                eprintln!("Site {site} deleted");
            }
            render_current_page(session, ui);
            Ok(())
        }

        SitesCommand::Invite { site, email } => {
            let invite_id = session
                .sites
                .invite_operator(site, &email)
                .map_err(|e| CliError::from_core(e, "sites list"))?;
            if !ui.quiet {
                eprintln!("Invite #{invite_id} sent to {email} for site {site}");
            }
            render_current_page(session, ui);
            Ok(())
        }
    }
}
