//! Extraction failure modes
//!
//! Structural failures are fatal for the batch: a corrupt downloaded file
//! is an operator-visible problem, not something to paper over per file.

/// Error from extracting a single document.
#[derive(Debug)]
pub enum ExtractError {
    /// The document is not well-formed XML.
    Xml {
        document: String,
        error: quick_xml::Error,
    },
    /// An `Author` element carries neither fore/last name pair nor a
    /// collective name.
    MalformedAuthor { document: String },
    /// Date components do not form a year/month/day prefix.
    DateComponents { container: String, detail: String },
    /// Components were shaped correctly but name no real calendar date.
    InvalidDate { container: String, date: String },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml { document, error } => {
                write!(f, "{document}: XML parse error: {error}")
            }
            Self::MalformedAuthor { document } => {
                write!(
                    f,
                    "{document}: Author element has neither ForeName/LastName nor CollectiveName"
                )
            }
            Self::DateComponents { container, detail } => {
                write!(f, "{container}: invalid date components: {detail}")
            }
            Self::InvalidDate { container, date } => {
                write!(f, "{container}: not a valid calendar date: {date}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
