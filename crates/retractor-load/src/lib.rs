//! Retractor Load - graph import for extracted records
//!
//! Turns a JSON array of [`retractor_extract::ArticleRecord`]s into a
//! sequence of Cypher upsert commands and runs them against a Neo4j server
//! over its HTTP transactional endpoint, or prints them for inspection.

pub mod commands;
pub mod runner;
pub mod session;

// Re-exports
pub use commands::{WIPE_COMMAND, commands_from_records};
pub use runner::run;
pub use session::{DbConfig, Session};
