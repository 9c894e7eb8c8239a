use thiserror::Error;

use super::key::EncodedKeys;

/// Errors that can occur while turning a single JWK into a string
/// representation.
#[derive(Debug, Error)]
pub enum KeyEncodingError {
    /// The key could not be serialized back to JSON.
    #[error("failed to serialize key as JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The `kty` member names a key type that has no PEM public key form.
    #[error("unsupported key type {0:?}")]
    UnsupportedKeyType(String),

    /// The `crv` member of an EC key names an unsupported curve.
    #[error("unsupported elliptic curve {0:?}")]
    UnsupportedCurve(String),

    /// A member required for the key type is absent or empty.
    #[error("key is missing the '{0}' member")]
    MissingMember(&'static str),

    /// A key parameter is not valid base64url.
    #[error("key member '{member}' is not valid base64url: {source}")]
    InvalidBase64 {
        /// Name of the offending member.
        member: &'static str,
        /// Underlying decoding failure.
        #[source]
        source: base64::DecodeError,
    },

    /// OpenSSL rejected the key parameters or failed to encode them.
    #[error("invalid key material: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),
}

/// A key from a set that could not be encoded.
#[derive(Debug)]
pub struct KeyFailure {
    /// Position of the key in the set.
    pub index: usize,
    /// The key's `kid`, possibly empty.
    pub kid: String,
    /// What went wrong.
    pub error: KeyEncodingError,
}

/// Aggregated failure of [`JwkSet::encode`](super::JwkSet::encode).
///
/// Every key is attempted; `partial` still holds the index-aligned output,
/// with empty strings wherever a conversion failed.
#[derive(Debug, Error)]
#[error("{} of {} keys could not be encoded", .failures.len(), .partial.len())]
pub struct EncodeKeysError {
    /// Output produced for all keys, failed slots left empty.
    pub partial: EncodedKeys,
    /// One entry per failed conversion, in key order.
    pub failures: Vec<KeyFailure>,
}
