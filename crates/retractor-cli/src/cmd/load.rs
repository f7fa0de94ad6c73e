//! Load subcommand - import extracted records into the graph database

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use retractor_extract::ArticleRecord;
use retractor_load::{DbConfig, Session};

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// JSON record array produced by `retractor extract` (default: stdin)
    pub input: Option<PathBuf>,

    /// Print the derived commands instead of contacting the database
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: LoadArgs) -> Result<()> {
    // Connection settings are checked before any input is consumed, so a
    // missing variable fails fast even when records come from a pipe.
    let session = if args.dry_run {
        None
    } else {
        Some(Session::new(DbConfig::from_env()?))
    };

    let records = read_records(args.input.as_deref())?;
    log::info!("Loaded {} records", records.len());

    let stdout = std::io::stdout();
    retractor_load::run(&records, args.dry_run, session.as_ref(), &mut stdout.lock())
}

fn read_records(input: Option<&std::path::Path>) -> Result<Vec<ArticleRecord>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read records from stdin")?;
            buf
        }
    };

    serde_json::from_str(&text).context("input is not a JSON record array")
}
