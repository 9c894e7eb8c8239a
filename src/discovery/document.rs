use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// The subset of an OpenID Provider's metadata surfaced by the
/// `wellknownoidc_document` data source.
///
/// Members missing from the published document, or published as `null`,
/// decode to empty values. Unknown members are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryDocument {
    /// URL the OP asserts as its Issuer Identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,

    /// URL of the OP's JSON Web Key Set document.
    #[serde(deserialize_with = "null_as_default")]
    pub jwks_uri: String,

    /// OAuth 2.0 `response_type` values the OP supports.
    #[serde(deserialize_with = "null_as_default")]
    pub response_types_supported: Vec<String>,

    /// Subject Identifier types the OP supports.
    #[serde(deserialize_with = "null_as_default")]
    pub subject_types_supported: Vec<String>,

    /// JWS `alg` values the OP supports for ID Tokens.
    #[serde(deserialize_with = "null_as_default")]
    pub id_token_signing_alg_values_supported: Vec<String>,

    /// Claim Names the OP may be able to supply values for.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub claims_supported: Vec<String>,

    /// Non-standard grant type list published by some providers. This is
    /// the member surfaced as the data source's `grant_types`.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub grant_types: Vec<String>,

    /// OAuth 2.0 Grant Type values the OP supports.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub grant_types_supported: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_google_style_document() {
        let body = json!({
            "issuer": "https://accounts.google.com",
            "authorization_endpoint": "https://accounts.google.com/o/oauth2/v2/auth",
            "jwks_uri": "https://www.googleapis.com/oauth2/v3/certs",
            "response_types_supported": ["code", "token", "id_token"],
            "subject_types_supported": ["public"],
            "id_token_signing_alg_values_supported": ["RS256"],
            "claims_supported": ["aud", "email", "sub"],
            "grant_types_supported": ["authorization_code", "refresh_token"]
        });

        let doc: DiscoveryDocument = serde_json::from_value(body).unwrap();
        assert_eq!(doc.issuer, "https://accounts.google.com");
        assert_eq!(doc.jwks_uri, "https://www.googleapis.com/oauth2/v3/certs");
        assert_eq!(doc.response_types_supported, ["code", "token", "id_token"]);
        assert_eq!(doc.subject_types_supported, ["public"]);
        assert_eq!(doc.id_token_signing_alg_values_supported, ["RS256"]);
        assert_eq!(doc.claims_supported, ["aud", "email", "sub"]);
        assert!(doc.grant_types.is_empty());
        assert_eq!(doc.grant_types_supported, ["authorization_code", "refresh_token"]);
    }

    #[test]
    fn absent_members_default_to_empty() {
        let doc: DiscoveryDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, DiscoveryDocument::default());
    }

    #[test]
    fn grant_type_lists_are_kept_apart() {
        let doc: DiscoveryDocument = serde_json::from_value(json!({
            "grant_types": ["implicit"],
            "grant_types_supported": ["authorization_code"]
        }))
        .unwrap();
        assert_eq!(doc.grant_types, ["implicit"]);
        assert_eq!(doc.grant_types_supported, ["authorization_code"]);
    }

    #[test]
    fn null_members_decode_to_empty() {
        let doc: DiscoveryDocument = serde_json::from_value(json!({
            "issuer": "https://issuer.example",
            "jwks_uri": null,
            "claims_supported": null,
            "grant_types": null
        }))
        .unwrap();
        assert_eq!(doc.issuer, "https://issuer.example");
        assert!(doc.jwks_uri.is_empty());
        assert!(doc.claims_supported.is_empty());
        assert!(doc.grant_types.is_empty());
    }

    #[test]
    fn rejects_wrongly_typed_members() {
        let result = serde_json::from_value::<DiscoveryDocument>(json!({
            "issuer": "https://issuer.example",
            "response_types_supported": "code"
        }));
        assert!(result.is_err());
    }
}
