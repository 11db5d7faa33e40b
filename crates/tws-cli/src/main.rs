//! Tower Structure Studio CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tws_cli::logging::{LogConfig, LogFormat, init_logging};
use tws_client::{ApiClient, Credentials};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_areas, run_assign, run_blocks, run_capacity, run_create, run_serialize, run_structures,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let credentials = resolve_credentials(cli)?;
    let client = ApiClient::new(credentials)?;
    match &cli.command {
        Command::Structures(args) => run_structures(&client, args),
        Command::Areas(args) => run_areas(&client, args),
        Command::Capacity(args) => run_capacity(&client, args),
        Command::Blocks(args) => run_blocks(&client, args),
        Command::Create(args) => run_create(&client, args),
        Command::Serialize(args) => run_serialize(&client, args),
        Command::Assign(args) => run_assign(&client, args),
    }
}

/// Resolve credentials once, from flags or environment, and thread them in
/// explicitly; no operation reads ambient storage.
fn resolve_credentials(cli: &Cli) -> anyhow::Result<Credentials> {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("TWS_BASE_URL").ok())
        .ok_or_else(|| anyhow::anyhow!("backend base URL missing: pass --base-url or set TWS_BASE_URL"))?;
    let secret_key = cli
        .secret_key
        .clone()
        .or_else(|| std::env::var("TWS_SECRET_KEY").ok())
        .ok_or_else(|| anyhow::anyhow!("auth token missing: pass --secret-key or set TWS_SECRET_KEY"))?;
    Ok(Credentials::new(base_url, secret_key))
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
