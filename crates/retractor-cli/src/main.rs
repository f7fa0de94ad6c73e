//! retractor - retracted-publication pipeline CLI
//!
//! Downloads PubMed retraction metadata, extracts it into JSON records,
//! and loads the records into a Neo4j graph.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "retractor")]
#[command(about = "Retracted-publication metadata pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./retractor.toml or ~/.config/retractor/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Download retraction documents from PubMed
    Fetch(cmd::fetch::FetchArgs),
    /// Extract downloaded documents into a JSON record array
    Extract(cmd::extract::ExtractArgs),
    /// Load extracted records into the graph database
    Load(cmd::load::LoadArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    retractor_core::init_logging(false, cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Fetch(args) => cmd::fetch::run(args, &config),
        Command::Extract(args) => cmd::extract::run(args, &config),
        Command::Load(args) => cmd::load::run(args),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Output directory",
                &config.output.default_dir.display().to_string(),
            ]);
            table.add_row(vec!["Search term", &config.fetch.term]);
            table.add_row(vec!["E-utilities base URL", &config.fetch.base_url]);
            table.add_row(vec![
                "Database",
                if std::env::var("DATABASE_URL").is_ok() {
                    "configured (DATABASE_URL)"
                } else {
                    "not set"
                },
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
