use serde::de::DeserializeOwned;
use tracing::*;
use url::Url;

use crate::config::ClientConfig;
use crate::discovery::{discovery_url, DiscoveryDocument};
use crate::error::{Document, FetchError};
use crate::jwk::{EncodedKeys, JwkSet};

/// OidcClient fetches OpenID Connect discovery documents and JSON Web Key
/// Sets over HTTP.
///
/// Every call performs exactly one GET. Nothing is cached and failed
/// requests are not retried.
#[derive(Clone, Debug)]
pub struct OidcClient {
    http: reqwest::Client,
}

impl OidcClient {
    /// Creates a client with the default [`ClientConfig`].
    pub fn new() -> crate::Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: &ClientConfig) -> crate::Result<Self> {
        let http = config.build_http_client()?;
        Ok(Self { http })
    }

    /// Fetches `{base_url}/.well-known/openid-configuration`.
    pub async fn fetch_discovery_document(
        &self,
        base_url: &str,
    ) -> crate::Result<DiscoveryDocument> {
        let url = discovery_url(base_url);
        let document: DiscoveryDocument = self.get_json(Document::Discovery, &url).await?;
        debug!(
            issuer = %document.issuer,
            jwks_uri = %document.jwks_uri,
            "Fetched discovery document"
        );
        Ok(document)
    }

    /// Fetches the key set published at `jwks_uri`.
    pub async fn fetch_jwks(&self, jwks_uri: &str) -> crate::Result<JwkSet> {
        let set: JwkSet = self.get_json(Document::Jwks, jwks_uri).await?;
        debug!(keys = set.keys.len(), "Fetched JWKS document");
        Ok(set)
    }

    /// Fetches the key set at `jwks_uri` and renders each key as JSON and
    /// PEM.
    pub async fn fetch_jwks_encoded(&self, jwks_uri: &str) -> crate::Result<EncodedKeys> {
        let set = self.fetch_jwks(jwks_uri).await?;
        Ok(set.encode()?)
    }

    /// GETs `url` and decodes the body as JSON, mapping each stage to its own
    /// error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        document: Document,
        url: &str,
    ) -> Result<T, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            document,
            url: url.to_owned(),
            source,
        })?;

        debug!(%url, "Requesting {document}");

        let response = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                document,
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                document,
                url: url.to_owned(),
                status,
            });
        }

        // The response, and its connection, is released once the body is read.
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Body { document, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { document, source })
    }
}
