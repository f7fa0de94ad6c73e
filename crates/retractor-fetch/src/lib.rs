//! Retractor Fetch - PubMed article downloader
//!
//! Resolves PMIDs for a search term through the NCBI E-utilities API and
//! downloads the raw XML for each article into a directory, one file per
//! PMID. Already-downloaded articles are skipped, so an interrupted run can
//! simply be restarted.

pub mod config;
pub mod eutils;
pub mod runner;

// Re-exports
pub use config::Config;
pub use runner::{Summary, run};
