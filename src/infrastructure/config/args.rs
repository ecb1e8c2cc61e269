use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "encomendas",
    version,
    about = "A terminal client for managing customer orders",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Route path to open on startup (e.g. "/blogs").
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Seed the store with a sample order on startup.
    #[arg(long)]
    pub seed_demo_data: Option<bool>,

    /// Currency symbol shown in the Amount column.
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
