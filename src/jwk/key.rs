use serde::{Deserialize, Serialize};
use tracing::*;

use super::error::{EncodeKeysError, KeyEncodingError, KeyFailure};
use crate::de::null_as_default;

/// A JSON Web Key Set as published at a `jwks_uri`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    /// Keys in publication order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keys: Vec<JwkKey>,
}

/// A single public JSON Web Key.
///
/// Only the members needed to identify a key and rebuild RSA or EC public
/// keys are retained. Absent or `null` members read as empty strings.
///
/// The JSON form always carries `kty`, `alg`, `use`, `kid`, `n` and `e`, even
/// when empty. The EC members are written only when set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwkKey {
    /// Key type, `RSA` or `EC` for keys that can be PEM encoded.
    #[serde(deserialize_with = "null_as_default")]
    pub kty: String,

    /// Intended algorithm.
    #[serde(deserialize_with = "null_as_default")]
    pub alg: String,

    /// Public key use, usually `sig`.
    #[serde(rename = "use", deserialize_with = "null_as_default")]
    pub key_use: String,

    /// Key ID.
    #[serde(deserialize_with = "null_as_default")]
    pub kid: String,

    /// RSA modulus, base64url.
    #[serde(deserialize_with = "null_as_default")]
    pub n: String,

    /// RSA public exponent, base64url.
    #[serde(deserialize_with = "null_as_default")]
    pub e: String,

    /// EC curve name.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub crv: String,

    /// EC x coordinate, base64url.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub x: String,

    /// EC y coordinate, base64url.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub y: String,
}

impl JwkKey {
    /// Serializes the key to its canonical compact JSON form.
    pub fn to_json_string(&self) -> Result<String, KeyEncodingError> {
        serde_json::to_string(self).map_err(KeyEncodingError::Json)
    }
}

/// String renderings of a key set, index-aligned with [`JwkSet::keys`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedKeys {
    /// Each key as a JSON string.
    pub keys: Vec<String>,
    /// Each key as a trimmed SubjectPublicKeyInfo PEM block.
    pub pem: Vec<String>,
}

impl EncodedKeys {
    /// Number of keys rendered.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys were rendered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl JwkSet {
    /// Renders every key as JSON and as PEM.
    ///
    /// A key that fails to convert does not stop the remaining keys from
    /// being processed, but any failure fails the whole set.
    pub fn encode(&self) -> Result<EncodedKeys, EncodeKeysError> {
        let mut encoded = EncodedKeys {
            keys: Vec::with_capacity(self.keys.len()),
            pem: Vec::with_capacity(self.keys.len()),
        };
        let mut failures = Vec::new();

        for (index, key) in self.keys.iter().enumerate() {
            let json = match key.to_json_string() {
                Ok(json) => json,
                Err(error) => {
                    warn!(
                        index,
                        kid = %key.kid,
                        "Unable to encode the JWKS key as string: {error}"
                    );
                    failures.push(KeyFailure {
                        index,
                        kid: key.kid.clone(),
                        error,
                    });
                    String::new()
                }
            };
            encoded.keys.push(json);

            let pem = match key.to_pem() {
                Ok(pem) => pem,
                Err(error) => {
                    warn!(index, kid = %key.kid, "Unable to convert JWKS key as PEM: {error}");
                    failures.push(KeyFailure {
                        index,
                        kid: key.kid.clone(),
                        error,
                    });
                    String::new()
                }
            };
            encoded.pem.push(pem);
        }

        if failures.is_empty() {
            debug!(keys = encoded.len(), "Encoded JWKS keys");
            Ok(encoded)
        } else {
            Err(EncodeKeysError {
                partial: encoded,
                failures,
            })
        }
    }
}
