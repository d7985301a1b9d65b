use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use slackfmt::config::{BoundaryPolicy, ReplacementMode};
use slackfmt::error::{Error, Result};
use slackfmt::formatter::Rule;
use slackfmt::{Config, Formatter};

mod cli;
use cli::{Cli, Commands};

/// Parse an option override like "userClass=mention" into (key, value)
fn parse_option(option: &str) -> std::result::Result<(&str, &str), String> {
    option.split_once('=').ok_or_else(|| {
        format!(
            "Invalid option '{}'. Expected KEY=VALUE (e.g., userClass=mention)",
            option
        )
    })
}

fn read_all(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    log::debug!("Reading {}", path.display());
    let s = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli_config: Option<&Path>, file: &Option<PathBuf>) -> Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = slackfmt::config::load(cli_config, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Format {
            file,
            users,
            emoji,
            options,
            enforce_boundaries,
            offset_replacement,
        } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let mut formatter = Formatter::new(cfg);

            if let Some(path) = &users
                && !formatter.register_users_value(&read_json(path)?)
            {
                return Err(Error::InvalidRegistration { what: "user" });
            }
            if let Some(path) = &emoji
                && !formatter.register_custom_emoji_value(&read_json(path)?)
            {
                return Err(Error::InvalidRegistration {
                    what: "custom emoji",
                });
            }

            let mut overrides = Vec::with_capacity(options.len());
            for option in &options {
                match parse_option(option) {
                    Ok(pair) => overrides.push(pair),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            formatter.configure(overrides);

            if enforce_boundaries {
                formatter.set_boundaries(BoundaryPolicy::Enforce);
            }
            if offset_replacement {
                formatter.set_replacement(ReplacementMode::Offset);
            }

            let input = read_all(file.as_ref())?;
            let output = formatter.format_bytes(&input)?;

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
            Ok(())
        }
        Commands::Rules => {
            for (idx, rule) in Rule::ALL.iter().enumerate() {
                println!("{:>2}. {}", idx + 1, rule);
            }
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
