//! `contactbook` - CLI for the in-memory address book
//!
//! This binary starts the interactive menu on the terminal and offers a few
//! commands for inspecting configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use contactbook::cli::{Cli, Command, ConfigCommand};
use contactbook::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.into_command() {
        Command::Run => handle_run(config),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(stdin, stdout, config)
        .run()
        .context("interactive session failed")
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", config.to_json()?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Menu]");
                println!("  Show banner:        {}", config.menu.show_banner);
                println!("  Title:              {}", config.menu.title);
                println!();
                println!("[Display]");
                println!("  Show total:         {}", config.display.show_total);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
