use std::io::BufRead;
use std::path::PathBuf;

use chrono::TimeZone;
use clap::Parser;

use memopad_memo::export;
use memopad_memo::factory;
use memopad_memo::session::Session;
use memopad_memo::types::MemoField;

/// Command line for memo management. Without a subcommand the
/// interactive UI is launched instead.
#[derive(Debug, Parser)]
#[command(name = "memopad", about = "Keep short text memos on disk")]
pub struct Cli {
    /// Directory holding the persisted memo collection.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Memo subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Create a memo, optionally with a title; prints the new id.
    New { title: Option<String> },
    /// List memos, newest first.
    List,
    /// Print one memo as plain text.
    Show { id: String },
    /// Overwrite a memo's title and/or content.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Remove a memo by id.
    Rm { id: String },
    /// Remove every memo (asks for confirmation unless --yes is given).
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Write a memo to a text file named after its title.
    Export {
        id: String,
        /// Target directory, defaulting to the working directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(factory::resolve_data_dir);
    let Some(cmd) = cli.cmd else {
        return memopad_tui::launch(&data_dir);
    };
    let mut session = Session::load(factory::open_store_in(&data_dir))?;
    match cmd {
        Command::New { title } => {
            let id = session.create()?.id.clone();
            if let Some(title) = title {
                session.update_active(MemoField::Title, &title)?;
            }
            tracing::debug!("created memo {id}");
            println!("{id}");
        }
        Command::List => {
            for memo in session.memos() {
                println!(
                    "{}  {}  {}",
                    memo.id,
                    format_timestamp(memo.updated_at),
                    memo.display_title()
                );
            }
        }
        Command::Show { id } => {
            session.select(&id);
            match session.active() {
                Some(memo) => println!("{}", export::export_text(memo)),
                None => anyhow::bail!("memo id not found: {id}"),
            }
        }
        Command::Edit { id, title, content } => {
            if title.is_none() && content.is_none() {
                anyhow::bail!("nothing to edit: pass --title and/or --content");
            }
            session.select(&id);
            if session.active().is_none() {
                anyhow::bail!("memo id not found: {id}");
            }
            if let Some(title) = title {
                session.update_active(MemoField::Title, &title)?;
            }
            if let Some(content) = content {
                session.update_active(MemoField::Content, &content)?;
            }
        }
        Command::Rm { id } => {
            session.delete(&id)?;
        }
        Command::Clear { yes } => {
            let count = session.memos().len();
            let confirmed = yes || confirm_on_stdin(count)?;
            if session.delete_all(confirmed)? {
                println!("Deleted {count} memos");
            } else {
                println!("Aborted");
            }
        }
        Command::Export { id, out } => {
            session.select(&id);
            let Some(memo) = session.active() else {
                anyhow::bail!("memo id not found: {id}");
            };
            let dir = match out {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let path = export::write_export(memo, &dir)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn confirm_on_stdin(count: usize) -> anyhow::Result<bool> {
    eprint!("Delete all {count} memos? This cannot be undone. [y/N] ");
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn format_timestamp(ms: i64) -> String {
    match chrono::Local.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => ms.to_string(),
    }
}
