//! Blocking HTTP facade over a shared async client.
//!
//! Uses async reqwest internally on a lazily-built tokio runtime, but
//! presents a sync interface since every stage of the pipeline is a
//! sequential batch run.

use std::sync::LazyLock;
use std::time::Duration;

use crate::error::HttpError;

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Overall per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(4)
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// HTTP GET returning the response body as UTF-8 text.
///
/// Non-2xx statuses are reported as [`HttpError::Http`] with the status
/// attached so callers can classify them as transient or fatal.
pub fn get_text(url: &str) -> Result<String, HttpError> {
    SHARED_RUNTIME.handle().block_on(async {
        let response = SHARED_CLIENT
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| HttpError::from_reqwest(&e))?;

        response.text().await.map_err(|e| HttpError::from_reqwest(&e))
    })
}
