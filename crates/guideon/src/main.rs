mod cli;
mod commands;
mod error;
mod output;
mod session;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use guideon_core::{Operator, seed};

use crate::cli::{Cli, ColorMode, Command, OutputFormat};
use crate::commands::Ui;
use crate::error::CliError;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = guideon_config::load_config_or_default();
    let ui = resolve_ui(&cli.global, &config);

    match cli.command {
        // Config commands operate on the file, not on a session
        Command::Config(args) => commands::config_cmd::handle(args, &ui),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "guideon", &mut std::io::stdout());
            Ok(())
        }

        // Everything else runs against a seeded session
        cmd => {
            // Resolve and validate the platform profile even though no
            // request leaves the process yet: a broken profile should
            // fail loudly now, not when the backend lands.
            let profile_name =
                guideon_config::active_profile_name(cli.global.profile.as_deref(), &config);
            match config.profiles.get(&profile_name) {
                Some(profile) => guideon_config::validate_profile(profile)?,
                None => {
                    if cli.global.profile.is_some() {
                        return Err(CliError::UnknownProfile { name: profile_name });
                    }
                }
            }

            let operator = resolve_operator(cli.global.as_operator.as_deref())?;
            let page_size = cli.global.page_size.unwrap_or(config.defaults.page_size);

            tracing::debug!(operator = %operator.email, page_size, "starting seeded session");
            let mut session = Session::seeded(page_size, &operator);
            commands::dispatch(cmd, &mut session, &ui)
        }
    }
}

/// Pick the acting demo operator: explicit email, else the platform admin.
fn resolve_operator(email: Option<&str>) -> Result<Operator, CliError> {
    let operators = seed::operators();
    match email {
        None => operators
            .into_iter()
            .next()
            .ok_or_else(|| CliError::UnknownOperator { email: String::new() }),
        Some(email) => operators
            .into_iter()
            .find(|op| op.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| CliError::UnknownOperator { email: email.into() }),
    }
}

/// Flag > config file > built-in default, per presentation option.
fn resolve_ui(global: &cli::GlobalOpts, config: &guideon_config::Config) -> Ui {
    let format = global.output.unwrap_or_else(|| {
        match config.defaults.output.as_str() {
            "json" => OutputFormat::Json,
            "json-compact" => OutputFormat::JsonCompact,
            "yaml" => OutputFormat::Yaml,
            "plain" => OutputFormat::Plain,
            _ => OutputFormat::Table,
        }
    });
    let color_mode = global.color.unwrap_or_else(|| {
        match config.defaults.color.as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    });

    Ui {
        format,
        color: output::should_color(color_mode),
        quiet: global.quiet,
        yes: global.yes,
    }
}
