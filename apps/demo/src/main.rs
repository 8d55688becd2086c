mod cli;
mod scenarios;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tether_collections::pool::{self, PoolConfig};

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = tether_log::Config::from_env();
    if let Some(level) = &cli.log_level {
        log_config.level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    let _log_guard = tether_log::init_with(log_config).context("failed to initialize logging")?;

    let mut pool_config = PoolConfig::from_env();
    if let Some(max_idle) = cli.max_idle {
        pool_config.max_idle = Some(max_idle);
    }
    pool::init(pool_config).context("failed to initialize pool registry")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::All) {
        Command::Stack => scenarios::stack(&mut out)?,
        Command::Queue => scenarios::queue(&mut out)?,
        Command::List => scenarios::list(&mut out)?,
        Command::Pool { json } => scenarios::pool(&mut out, json)?,
        Command::Concurrent {
            threads,
            per_thread,
        } => scenarios::concurrent(&mut out, threads, per_thread)?,
        Command::All => {
            scenarios::stack(&mut out)?;
            scenarios::queue(&mut out)?;
            scenarios::list(&mut out)?;
            scenarios::pool(&mut out, false)?;
            scenarios::concurrent(&mut out, 4, 1_000)?;
        }
    }

    out.flush()?;
    Ok(())
}
