//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders pages and single entities in the format selected by
//! `--output`. Table output gets a pagination footer; structured formats
//! serialize the whole `PageView` so scripts see the page facts too.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use guideon_core::PageView;

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render one page of rows in the chosen format.
///
/// - `table`: `Tabled` rows plus a "Page x/y" footer
/// - `json` / `json-compact` / `yaml`: the full `PageView` via serde
/// - `plain`: `id_fn` per row, one identifier per line (scripting)
pub fn render_page<T, R>(
    format: OutputFormat,
    view: &PageView<T>,
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            if view.total_pages == 0 {
                return "No matching entries.".into();
            }
            let rows: Vec<R> = view.rows.iter().map(to_row).collect();
            let table = render_table(&rows);
            format!(
                "{table}\nPage {}/{} · {} total",
                view.page + 1,
                view.total_pages,
                view.total_count
            )
        }
        OutputFormat::Json => render_json(view, false),
        OutputFormat::JsonCompact => render_json(view, true),
        OutputFormat::Yaml => render_yaml(view),
        OutputFormat::Plain => view.rows.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
