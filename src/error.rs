use std::fmt;

/// A crate-wide result type alias using the custom [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for discovery and JWKS reads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Errors that occur while fetching or decoding a remote document.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// One or more keys of a fetched set could not be rendered.
    #[error(transparent)]
    EncodeKeys(#[from] crate::jwk::EncodeKeysError),

    /// The HTTP client could not be configured.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

/// The remote documents this crate knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// An OpenID Connect discovery document.
    Discovery,
    /// A JSON Web Key Set.
    Jwks,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Discovery => f.write_str("discovery document"),
            Document::Jwks => f.write_str("JWKS document"),
        }
    }
}

/// Failure to retrieve a remote document, by stage.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured URL could not be parsed.
    #[error("unable to get the {document}: invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// Which document was requested.
        document: Document,
        /// The rejected URL.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or no response arrived in time.
    #[error("unable to get the {document} from {url}: {source}")]
    Request {
        /// Which document was requested.
        document: Document,
        /// The requested URL.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("unable to get the {document} from {url}: HTTP {status}")]
    Status {
        /// Which document was requested.
        document: Document,
        /// The requested URL.
        url: String,
        /// The status returned.
        status: reqwest::StatusCode,
    },

    /// The response body could not be read.
    #[error("unable to read the {document}: {source}")]
    Body {
        /// Which document was requested.
        document: Document,
        /// Transport failure while streaming the body.
        #[source]
        source: reqwest::Error,
    },

    /// The body is not JSON of the expected shape.
    #[error("unable to decode the {document}: {source}")]
    Decode {
        /// Which document was requested.
        document: Document,
        /// JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The document the failed request was for.
    pub fn document(&self) -> Document {
        match self {
            FetchError::InvalidUrl { document, .. }
            | FetchError::Request { document, .. }
            | FetchError::Status { document, .. }
            | FetchError::Body { document, .. }
            | FetchError::Decode { document, .. } => *document,
        }
    }
}
