//! `chessdesk-setup` - verify and repair a ChessDesk installation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chessdesk::installer::version::OfflineVersionSource;
use chessdesk::installer::{InstallerFlow, SetupLog, DEFAULT_VERSION_URL};

#[derive(Parser, Debug)]
#[command(name = "chessdesk-setup", version, about = "Verify and repair a ChessDesk installation")]
struct Args {
    /// Installation root; defaults to the folder holding this executable
    #[arg(long)]
    root: Option<PathBuf>,

    /// Manifest to read the latest version from
    #[arg(long, default_value = DEFAULT_VERSION_URL)]
    version_url: String,

    /// Skip the version check
    #[arg(long)]
    offline: bool,

    /// Report missing requirements without installing them
    #[arg(long)]
    no_install: bool,
}

fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut flow = InstallerFlow::new(args.root.unwrap_or_else(default_root), &args.version_url);
    if args.offline {
        flow.version_source = Box::new(OfflineVersionSource);
    }
    if args.no_install {
        flow.installer = None;
    }

    let mut log = SetupLog::new();
    let code = match flow.run(&mut log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(e.to_string());
            ExitCode::from(e.exit_code())
        }
    };
    log.info(log.summary());
    code
}
