//! Transport error type shared by the network-facing stages

/// Error from a single HTTP round trip.
///
/// Wraps either an HTTP-level failure (with status code when the server
/// responded at all) or a local I/O error.
#[derive(Debug)]
pub enum HttpError {
    Http {
        status: Option<u16>,
        message: String,
    },
    Io(std::io::Error),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for HttpError {}

impl From<std::io::Error> for HttpError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl HttpError {
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Connection-level failures (no status), 429, and 5xx are transient;
    /// other 4xx responses mean the request itself is wrong.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { status, .. } => match status {
                None => true,
                Some(429) => true,
                Some(s) => *s >= 500,
            },
            Self::Io(e) => e.kind() != std::io::ErrorKind::StorageFull,
        }
    }
}
