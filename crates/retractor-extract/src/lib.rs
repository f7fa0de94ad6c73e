//! Retractor Extract - PubMed retraction metadata extraction
//!
//! The core of the pipeline: a deterministic transform from one PubMed XML
//! document to one normalized [`ArticleRecord`], plus the directory driver
//! that turns a directory of downloaded documents into a single JSON array.
//!
//! # Example
//!
//! ```ignore
//! let records = retractor_extract::run(std::path::Path::new("Retractions"))?;
//! serde_json::to_writer(std::io::stdout(), &records)?;
//! ```

pub mod dates;
pub mod error;
pub mod parser;
pub mod record;
pub mod runner;

// Re-exports
pub use error::ExtractError;
pub use parser::parse_document;
pub use record::{ArticleRecord, DateComponents, DateEntry};
pub use runner::run;
