//! Main runner for the download stage

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::eutils;

/// Download run summary
#[derive(Debug)]
pub struct Summary {
    pub total_ids: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub elapsed: std::time::Duration,
}

/// Run the download stage: resolve PMIDs and fill the output directory.
///
/// A `<pmid>.xml` file that already exists is left untouched, which makes
/// the run resumable after an interruption.
pub fn run(config: &Config) -> Result<Summary> {
    let start = Instant::now();

    let article_count = match config.article_count {
        Some(count) => count,
        None => {
            log::info!("Resolving article count for \"{}\"...", config.term);
            eutils::resolve_count(&config.base_url, &config.term)?
        }
    };

    log::info!("Resolving up to {article_count} article ids...");
    let ids = eutils::resolve_ids(&config.base_url, &config.term, article_count)?;
    log::info!("Found {} article ids", ids.len());

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let pb = ProgressBar::new(ids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {pos}/{len} {bar:20} {wide_msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let (downloaded, skipped) = download_missing(&ids, &config.output_dir, |id| {
        pb.set_message(format!("article {id}"));
        log::debug!("Downloading article {id}");
        let xml = eutils::fetch_article(&config.base_url, id)?;
        pb.inc(1);
        Ok(xml)
    })?;
    pb.finish_and_clear();

    let summary = Summary {
        total_ids: ids.len(),
        downloaded,
        skipped,
        elapsed: start.elapsed(),
    };

    log::info!("=== Fetch Summary ===");
    log::info!(
        "Articles: {} downloaded, {} already present ({} total)",
        summary.downloaded,
        summary.skipped,
        summary.total_ids
    );
    log::info!("Time: {:.1}s", summary.elapsed.as_secs_f64());

    Ok(summary)
}

/// Write `<id>.xml` for every id not already on disk.
///
/// The file-existence check doubles as the idempotency marker; the fetch
/// callback runs only for missing articles. Returns (downloaded, skipped).
fn download_missing(
    ids: &[String],
    output_dir: &Path,
    mut fetch: impl FnMut(&str) -> Result<String>,
) -> Result<(usize, usize)> {
    let mut downloaded = 0usize;
    let mut skipped = 0usize;

    for id in ids {
        let out_path = output_dir.join(format!("{id}.xml"));
        if out_path.is_file() {
            skipped += 1;
            continue;
        }

        let xml = fetch(id)?;
        std::fs::write(&out_path, xml.as_bytes())
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        downloaded += 1;
    }

    Ok((downloaded, skipped))
}
