use crate::error::FetchError;
use crate::jwk::{EncodeKeysError, KeyEncodingError};
use crate::provider::{Diagnostic, Diagnostics};
use crate::Error;

const NOT_AVAILABLE: &str = "Provided URL is not valid or not available.";
const NOT_READABLE: &str = "Document found is not readable.";
const NOT_JSON: &str = "Document found is not in the right JSON format.";

impl From<&FetchError> for Diagnostic {
    fn from(err: &FetchError) -> Self {
        let document = err.document();
        match err {
            FetchError::InvalidUrl { .. } | FetchError::Request { .. } => {
                Diagnostic::error(format!("Unable to get the {document}"), NOT_AVAILABLE)
            }
            FetchError::Status { status, .. } => Diagnostic::error(
                format!("Unable to get the {document}"),
                format!("{NOT_AVAILABLE} The server responded with HTTP {status}."),
            ),
            FetchError::Body { .. } => {
                Diagnostic::error(format!("Unable to read the {document}"), NOT_READABLE)
            }
            FetchError::Decode { .. } => {
                Diagnostic::error(format!("Unable to decode the {document}"), NOT_JSON)
            }
        }
    }
}

impl From<&KeyEncodingError> for Diagnostic {
    fn from(err: &KeyEncodingError) -> Self {
        match err {
            KeyEncodingError::Json(_) => Diagnostic::error(
                "Unable to encode the JWKS key as string",
                "The JSON key can't be converted to string.",
            ),
            _ => Diagnostic::error(
                "Unable to convert JWKS keys as PEM",
                "The JSON key can't be converted to PEM.",
            ),
        }
    }
}

impl From<&EncodeKeysError> for Diagnostics {
    /// One diagnostic per distinct failure; keys failing the same way share
    /// a diagnostic.
    fn from(err: &EncodeKeysError) -> Self {
        err.failures
            .iter()
            .map(|failure| Diagnostic::from(&failure.error))
            .collect()
    }
}

impl From<&Error> for Diagnostics {
    fn from(err: &Error) -> Self {
        match err {
            Error::Fetch(err) => Diagnostic::from(err).into(),
            Error::EncodeKeys(err) => Diagnostics::from(err),
            Error::Config(err) => {
                Diagnostic::error("Unable to configure the provider", err.to_string()).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::Document;
    use crate::jwk::{EncodedKeys, KeyFailure};

    fn decode_error(document: Document) -> FetchError {
        FetchError::Decode {
            document,
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
    }

    #[test]
    fn decode_errors_name_the_document() {
        let diag = Diagnostic::from(&decode_error(Document::Discovery));
        assert_eq!(diag.summary, "Unable to decode the discovery document");
        assert_eq!(diag.detail, NOT_JSON);

        let diag = Diagnostic::from(&decode_error(Document::Jwks));
        assert_eq!(diag.summary, "Unable to decode the JWKS document");
    }

    #[test]
    fn invalid_url_reads_as_unavailable() {
        let err = FetchError::InvalidUrl {
            document: Document::Jwks,
            url: "::".into(),
            source: url::Url::parse("::").unwrap_err(),
        };
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.summary, "Unable to get the JWKS document");
        assert_eq!(diag.detail, NOT_AVAILABLE);
    }

    #[test]
    fn status_detail_includes_the_code() {
        let err = FetchError::Status {
            document: Document::Discovery,
            url: "https://issuer.example".into(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        let diag = Diagnostic::from(&err);
        assert!(diag.detail.starts_with(NOT_AVAILABLE));
        assert!(diag.detail.contains("502"));
    }

    #[test]
    fn config_errors_become_one_diagnostic() {
        let err = Error::Config(ConfigError::InvalidTimeout {
            value: "soon".into(),
        });
        let diags = Diagnostics::from(&err);
        assert_eq!(diags.len(), 1);
        assert!(diags.has_error());
    }

    #[test]
    fn same_key_failures_share_one_diagnostic() {
        let failure = |index: usize, kty: &str| KeyFailure {
            index,
            kid: format!("key-{index}"),
            error: KeyEncodingError::UnsupportedKeyType(kty.into()),
        };
        let err = EncodeKeysError {
            partial: EncodedKeys::default(),
            failures: vec![failure(0, "oct"), failure(1, "OKP"), failure(2, "oct")],
        };

        let diags = Diagnostics::from(&err);
        assert_eq!(diags.len(), 1);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Unable to convert JWKS keys as PEM");
        assert_eq!(diag.detail, "The JSON key can't be converted to PEM.");
    }
}
