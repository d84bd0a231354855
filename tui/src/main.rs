use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "memopad-tui", about = "Interactive memo pad")]
struct Cli {
    /// Directory holding the persisted memo collection.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    color_eyre::install().map_err(|e| anyhow::anyhow!(e))?;
    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .unwrap_or_else(memopad_memo::factory::resolve_data_dir);
    let _guard = init_logging(&data_dir)?;
    memopad_tui::launch(&data_dir)
}

/// Log to a file under the data dir so the terminal stays clean.
fn init_logging(data_dir: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;
    let file = tracing_appender::rolling::never(data_dir, "memopad-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
