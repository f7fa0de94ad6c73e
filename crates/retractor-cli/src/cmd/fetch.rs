//! Fetch subcommand - download retraction documents from PubMed

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Output directory (default: configured output directory)
    pub dir: Option<PathBuf>,

    /// PubMed search term
    #[arg(short, long)]
    pub term: Option<String>,

    /// Download at most this many articles
    #[arg(short = 'l', long)]
    pub article_count: Option<usize>,
}

pub fn run(args: FetchArgs, config: &Config) -> Result<()> {
    let output_dir = args
        .dir
        .unwrap_or_else(|| config.output.default_dir.clone());

    let fetch_config = retractor_fetch::Config {
        output_dir: output_dir.clone(),
        term: args.term.unwrap_or_else(|| config.fetch.term.clone()),
        article_count: args.article_count,
        base_url: config.fetch.base_url.clone(),
    };

    log::info!("Fetching \"{}\"", fetch_config.term);
    log::info!("  Output: {}", output_dir.display());

    let summary = retractor_fetch::run(&fetch_config)?;

    print_summary(
        "Fetch",
        &[
            ("Articles", format!("{}", summary.total_ids)),
            ("Downloaded", format!("{}", summary.downloaded)),
            ("Already present", format!("{}", summary.skipped)),
            ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
        ],
    );

    Ok(())
}

/// Print a key-value summary table on stderr
fn print_summary(title: &str, rows: &[(&str, String)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new(title).fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    eprintln!("\n{table}");
}
