//! Config command handlers.

use guideon_config::{Config, Profile, config_path, load_config_or_default, save_config};

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::commands::Ui;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = config_path();
            if path.exists() {
                if !ui.quiet {
                    eprintln!("Config already exists at {}", path.display());
                }
                return Ok(());
            }

            let mut cfg = Config::default();
            cfg.profiles.insert(
                "default".into(),
                Profile {
                    platform: "https://api.guideon.io".into(),
                    api_key: None,
                    api_key_env: Some("GUIDEON_API_KEY".into()),
                    site_ids: Vec::new(),
                },
            );
            save_config(&cfg)?;
            if !ui.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(guideon_config::ConfigError::Serialization)?;
            output::print_output(rendered.trim_end(), ui.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = load_config_or_default();
            if cfg.profiles.is_empty() {
                output::print_output("No profiles configured. Run: guideon config init", ui.quiet);
                return Ok(());
            }
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();
            let listing = names
                .into_iter()
                .map(|name| {
                    let marker = if name == default { "* " } else { "  " };
                    format!("{marker}{name}")
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&listing, ui.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::UnknownProfile { name });
            }
            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            if !ui.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}
