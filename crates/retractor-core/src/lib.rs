//! Retractor Core - Common infrastructure for the retraction pipeline
//!
//! Shared pieces used by the fetch, extract, and load stages: a blocking
//! facade over a pooled HTTP client, transport error classification,
//! fixed-budget retries, logging setup, and string sanitization.

pub mod error;
pub mod http;
pub mod logging;
pub mod retry;
pub mod sanitize;

// Re-exports for convenience
pub use error::HttpError;
pub use http::{SHARED_RUNTIME, get_text, http_client};
pub use logging::init_logging;
pub use retry::{MAX_RETRIES, retry_fixed};
pub use sanitize::sanitize;
