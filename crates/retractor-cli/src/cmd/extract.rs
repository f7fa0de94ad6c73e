//! Extract subcommand - parse downloaded documents into JSON records

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory of downloaded documents (default: configured output directory)
    pub dir: Option<PathBuf>,
}

/// Parse every document in the directory and write the record array to
/// stdout. Warnings about individual records go to stderr.
pub fn run(args: ExtractArgs, config: &Config) -> Result<()> {
    let dir = args
        .dir
        .unwrap_or_else(|| config.output.default_dir.clone());

    let records = retractor_extract::run(&dir)?;

    let stdout = std::io::stdout();
    retractor_extract::runner::write_json(&records, stdout.lock())?;

    Ok(())
}
