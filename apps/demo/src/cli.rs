use clap::{Parser, Subcommand};
use tether_log::Format;

#[derive(Debug, Parser)]
#[command(
    name = "tether-demo",
    about = "Walk through the tether stack, queue, list and pool",
    version
)]
pub struct Cli {
    /// Log filter directives (overrides TETHER_LOG / RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<Format>,

    /// Idle instances kept per container type (overrides TETHER_POOL_MAX_IDLE)
    #[arg(long, global = true, value_name = "N")]
    pub max_idle: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// LIFO push/pop walkthrough
    Stack,
    /// FIFO push/pop/peek walkthrough
    Queue,
    /// Indexed insert/remove and search
    List,
    /// Pooled acquire/release and pool stats
    Pool {
        /// Print the stats snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Many threads pushing into one shared stack
    Concurrent {
        #[arg(long, default_value_t = 4)]
        threads: usize,
        #[arg(long, default_value_t = 1_000)]
        per_thread: usize,
    },
    /// Every scenario in order (default)
    All,
}
