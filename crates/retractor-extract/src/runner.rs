//! Directory driver for the extraction stage

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::parser::parse_document;
use crate::record::ArticleRecord;

/// Parse every `.xml` file in `dir` into a record.
///
/// Order is filesystem listing order; downstream consumers treat the
/// sequence as a set. A structurally broken document aborts the whole
/// batch: a corrupt download is an operator problem, not a per-file skip.
/// A record with no recognized fields is kept in the output, with a
/// warning, so that the document count stays honest.
pub fn run(dir: &Path) -> Result<Vec<ArticleRecord>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let path = entry.path();
        if !path.extension().map_or(false, |ext| ext == "xml") {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let xml = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let record = parse_document(&xml, &name)?;

        if record.is_empty() {
            log::warn!("{name}: no relevant fields, skipping");
        }
        records.push(record);
    }

    log::info!("Extracted {} records from {}", records.len(), dir.display());
    Ok(records)
}

/// Serialize the record sequence as one JSON array.
pub fn write_json(records: &[ArticleRecord], mut out: impl Write) -> Result<()> {
    serde_json::to_writer(&mut out, records).context("failed to serialize records")?;
    writeln!(out)?;
    Ok(())
}
