//! Load driver
//!
//! Derives the command sequence and either prints it (dry run) or runs it
//! against the configured server, one statement per transaction.

use std::io::Write;

use anyhow::{Context, Result};
use retractor_extract::ArticleRecord;

use crate::commands::commands_from_records;
use crate::session::Session;

/// Execute a full load of `records`.
///
/// With `dry_run` the derived commands are written to `out` as a JSON
/// array of strings and the server is never contacted. Otherwise each
/// command runs in order against `session`; the first failure aborts the
/// remainder of the sequence.
pub fn run(
    records: &[ArticleRecord],
    dry_run: bool,
    session: Option<&Session>,
    out: &mut impl Write,
) -> Result<()> {
    let commands = commands_from_records(records);

    if dry_run {
        serde_json::to_writer_pretty(&mut *out, &commands).context("writing command list")?;
        writeln!(out)?;
        return Ok(());
    }

    let session = session.context("a database session is required unless --dry-run is set")?;

    log::info!("running {} commands", commands.len());
    for (i, command) in commands.iter().enumerate() {
        session
            .run(command)
            .with_context(|| format!("command {} of {} failed", i + 1, commands.len()))?;
    }
    log::info!("load complete, {} records", records.len());

    Ok(())
}
