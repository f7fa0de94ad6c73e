//! Neo4j session over the HTTP transactional endpoint
//!
//! Connection parameters come from the environment and are validated
//! before any input is read. The session handle is passed explicitly to
//! everything that executes commands; there is no ambient global driver.

use anyhow::{Context, Result, bail};

use retractor_core::{SHARED_RUNTIME, http_client};

/// Connection parameters for the graph store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Host (and optional port) of the Neo4j HTTP endpoint
    pub url: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Read connection parameters from `DATABASE_URL`, `DATABASE_USER`,
    /// and `DATABASE_PASS`. A missing variable is a configuration error
    /// raised before any work begins.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .with_context(|| format!("environment variable {name} must be set"))
        };
        Ok(Self {
            url: var("DATABASE_URL")?,
            user: var("DATABASE_USER")?,
            password: var("DATABASE_PASS")?,
        })
    }

    /// Commit endpoint for the default database.
    fn commit_endpoint(&self) -> String {
        format!("http://{}/db/neo4j/tx/commit", self.url)
    }
}

/// An open connection to the store.
pub struct Session {
    config: DbConfig,
}

impl Session {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Run one Cypher statement in its own transaction.
    ///
    /// Each statement commits independently; a failure mid-sequence leaves
    /// earlier statements applied. Acceptable for the batch sizes this
    /// loader handles, and called out in the documentation.
    pub fn run(&self, statement: &str) -> Result<()> {
        let endpoint = self.config.commit_endpoint();
        let body = serde_json::json!({
            "statements": [{ "statement": statement }]
        });

        let response_body: serde_json::Value = SHARED_RUNTIME.handle().block_on(async {
            let response = http_client()
                .post(&endpoint)
                .basic_auth(&self.config.user, Some(&self.config.password))
                .json(&body)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .context("database request failed")?;

            response
                .json()
                .await
                .context("malformed database response")
        })?;

        check_response_errors(&response_body)
    }
}

/// The transactional endpoint reports statement failures in an `errors`
/// array with a 200 status; surface them as real errors.
fn check_response_errors(body: &serde_json::Value) -> Result<()> {
    if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
        if let Some(first) = errors.first() {
            let code = first.get("code").and_then(|c| c.as_str()).unwrap_or("unknown");
            let message = first
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("no message");
            bail!("database error {code}: {message}");
        }
    }
    Ok(())
}
