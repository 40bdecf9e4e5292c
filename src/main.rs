use anyhow::{Context, Result};
use clap::Parser;
use solana_sdk::pubkey::Pubkey;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod chain;
mod dashboard;
mod explorer;
mod icons;
mod notify;
mod poller;
mod theme;
mod wallet;

use dashboard::{Dashboard, Settings};
use explorer::Cluster;

/// Demo wallet that receives token sends and delegate approvals unless
/// `--recipient` overrides it.
const DEFAULT_RECIPIENT: &str = "JCsFjtj6tem9Dv83Ks4HxsL7p8GhdLtokveqW7uWjGyi";

#[derive(Parser)]
#[command(name = "soldeck")]
#[command(author, version)]
#[command(about = "Terminal dashboard for Solana devnet wallets and SPL tokens")]
#[command(long_about = None)]
#[command(styles = get_styles())]
struct Cli {
    /// RPC endpoint URL (defaults to devnet)
    #[arg(long, default_value = "https://api.devnet.solana.com")]
    rpc_url: String,

    /// Path to your Solana wallet keypair JSON file (defaults to ~/.config/solana/id.json)
    #[arg(long)]
    keypair: Option<PathBuf>,

    /// Wallet address that token sends and delegate approvals target
    #[arg(long, default_value = DEFAULT_RECIPIENT)]
    recipient: String,

    /// Cluster used when building explorer links
    #[arg(long, value_enum, default_value_t = Cluster::Devnet)]
    cluster: Cluster,

    /// Log file path (the dashboard owns the terminal, so logs go to disk)
    #[arg(long, default_value_os_t = default_log_path())]
    log_file: PathBuf,
}

fn get_styles() -> clap::builder::Styles {
    use clap::builder::styling::*;
    clap::builder::Styles::styled()
        .header(AnsiColor::BrightMagenta.on_default().bold())
        .usage(AnsiColor::BrightCyan.on_default().bold())
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::Magenta.on_default())
        .error(AnsiColor::BrightRed.on_default().bold())
        .valid(AnsiColor::BrightCyan.on_default())
        .invalid(AnsiColor::BrightYellow.on_default())
}

fn default_keypair_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/solana/id.json")
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("soldeck.log")
}

fn init_logging(path: &PathBuf) -> Result<WorkerGuard> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soldeck=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let recipient = Pubkey::from_str(&cli.recipient)
        .context("--recipient is not a valid base58 address")?;
    let keypair_path = cli.keypair.unwrap_or_else(default_keypair_path);

    // Keep the guard alive so buffered log lines flush on exit.
    let _guard = init_logging(&cli.log_file)?;
    tracing::info!(
        rpc_url = %cli.rpc_url,
        cluster = %cli.cluster,
        keypair = %keypair_path.display(),
        "starting soldeck"
    );

    let settings = Settings {
        rpc_url: cli.rpc_url,
        keypair_path,
        recipient,
        cluster: cli.cluster,
    };

    Dashboard::new(settings).run()
}
