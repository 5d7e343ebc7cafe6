//! Clap derive structures for the `guideon` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use guideon_core::{ActiveStatus, AuditKind, DocumentStatus, EntryId, SiteId};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// guideon -- admin console for the GUIDEON kiosk/tourism platform
#[derive(Debug, Parser)]
#[command(
    name = "guideon",
    version,
    about = "Manage GUIDEON tourism sites from the command line",
    long_about = "Administer GUIDEON tourism sites, operator invites, audit logs,\n\
        and knowledge-base documents.\n\n\
        The platform backend is not wired in yet: every invocation runs\n\
        against the seeded demo dataset, exactly like the web console's\n\
        mock mode. Mutations are real within the invocation and shown\n\
        immediately, but are not persisted.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Platform profile to use
    #[arg(long, short = 'p', env = "GUIDEON_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Output format (defaults to the config file's setting)
    #[arg(long, short = 'o', env = "GUIDEON_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Rows per page for list views (defaults to the config file's setting)
    #[arg(long, env = "GUIDEON_PAGE_SIZE", global = true)]
    pub page_size: Option<usize>,

    /// Act as one of the seeded demo operators (by email). Site admins
    /// only see their assigned sites.
    #[arg(long, value_name = "EMAIL", env = "GUIDEON_OPERATOR", global = true)]
    pub as_operator: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage tourism sites and operator invites
    #[command(alias = "site", alias = "s")]
    Sites(SitesArgs),

    /// Browse the platform audit log
    #[command(alias = "logs")]
    Audit(AuditArgs),

    /// List knowledge-base document uploads
    #[command(alias = "docs")]
    Documents(DocumentsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SITES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List sites (filtered, paginated)
    #[command(alias = "ls")]
    List {
        /// Case-insensitive name search
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Activation filter
        #[arg(long, default_value = "all", value_enum)]
        status: StatusFilter,

        /// Page number (0-based)
        #[arg(long, default_value = "0")]
        page: usize,
    },

    /// Show one site with its operator invites
    Get {
        /// Site id
        site: SiteId,
    },

    /// Register a new site (starts active)
    Create {
        /// Site display name (1-100 characters)
        #[arg(long, required = true)]
        name: String,
    },

    /// Rename a site
    Update {
        /// Site id
        site: SiteId,

        /// New display name (1-100 characters)
        #[arg(long, required = true)]
        name: String,
    },

    /// Toggle a site between active and inactive
    Toggle {
        /// Site id
        site: SiteId,
    },

    /// Delete a site
    Delete {
        /// Site id
        site: SiteId,
    },

    /// Invite a site operator by email
    Invite {
        /// Site id
        site: SiteId,

        /// Operator email address
        #[arg(long, required = true)]
        email: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    All,
    Active,
    Inactive,
}

impl From<StatusFilter> for ActiveStatus {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::All => Self::All,
            StatusFilter::Active => Self::Active,
            StatusFilter::Inactive => Self::Inactive,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUDIT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuditArgs {
    #[command(subcommand)]
    pub command: AuditCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// List recent audit entries (filtered, paginated)
    #[command(alias = "ls")]
    List {
        /// Entry kind filter
        #[arg(long = "type", value_enum)]
        kind: Option<KindFilter>,

        /// Start of the date range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<chrono::NaiveDate>,

        /// End of the date range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<chrono::NaiveDate>,

        /// Page number (0-based)
        #[arg(long, default_value = "0")]
        page: usize,
    },

    /// Show one audit entry in full
    Get {
        /// Entry id
        entry: EntryId,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    System,
    User,
    Device,
}

impl From<KindFilter> for AuditKind {
    fn from(value: KindFilter) -> Self {
        match value {
            KindFilter::System => Self::System,
            KindFilter::User => Self::User,
            KindFilter::Device => Self::Device,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DOCUMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub command: DocumentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DocumentsCommand {
    /// List uploaded documents (filtered, paginated)
    #[command(alias = "ls")]
    List {
        /// Ingestion status filter
        #[arg(long, value_enum)]
        status: Option<DocStatusFilter>,

        /// Page number (0-based)
        #[arg(long, default_value = "0")]
        page: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocStatusFilter {
    Completed,
    Processing,
    Failed,
    Pending,
}

impl From<DocStatusFilter> for DocumentStatus {
    fn from(value: DocStatusFilter) -> Self {
        match value {
            DocStatusFilter::Completed => Self::Completed,
            DocStatusFilter::Processing => Self::Processing,
            DocStatusFilter::Failed => Self::Failed,
            DocStatusFilter::Pending => Self::Pending,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create an initial config file with an example profile
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
