//! Fetch stage configuration

use std::path::PathBuf;

/// Runtime configuration for the download stage
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving one `<pmid>.xml` file per article
    pub output_dir: PathBuf,
    /// PubMed search term
    pub term: String,
    /// How many articles to download (default: everything the term matches)
    pub article_count: Option<usize>,
    /// Base URL for the E-utilities API
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Retractions"),
            term: "Retracted Publications".to_string(),
            article_count: None,
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
        }
    }
}
