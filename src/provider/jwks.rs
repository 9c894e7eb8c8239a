use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::*;

use super::{required_string, to_state, Attribute, DataSource, Diagnostics, Schema};
use crate::jwk::EncodedKeys;
use crate::OidcClient;

/// State of the `wellknownoidc_jwks` data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwksDataSourceModel {
    /// Same as `jwks_uri`.
    pub id: String,
    /// The configured key set URI.
    pub jwks_uri: String,
    /// Keys as JSON strings.
    pub keys: Vec<String>,
    /// Keys as PEM, index-aligned with `keys`.
    pub pem: Vec<String>,
}

impl JwksDataSourceModel {
    /// Builds the state for keys fetched from `jwks_uri`.
    pub fn new(jwks_uri: String, encoded: EncodedKeys) -> Self {
        JwksDataSourceModel {
            id: jwks_uri.clone(),
            jwks_uri,
            keys: encoded.keys,
            pem: encoded.pem,
        }
    }
}

/// The `wellknownoidc_jwks` data source.
#[derive(Debug, Clone)]
pub struct JwksDataSource {
    client: OidcClient,
}

impl JwksDataSource {
    /// Creates the data source on top of a shared client.
    pub fn new(client: OidcClient) -> Self {
        Self { client }
    }

    /// Fetches and encodes the key set at `jwks_uri`.
    pub async fn read_model(&self, jwks_uri: String) -> Result<JwksDataSourceModel, Diagnostics> {
        match self.client.fetch_jwks_encoded(&jwks_uri).await {
            Ok(encoded) => Ok(JwksDataSourceModel::new(jwks_uri, encoded)),
            Err(err) => {
                error!(%jwks_uri, "{err}");
                Err(Diagnostics::from(&err))
            }
        }
    }
}

impl DataSource for JwksDataSource {
    fn type_name_suffix(&self) -> &'static str {
        "jwks"
    }

    fn schema(&self) -> Schema {
        Schema::new("JWKS data source")
            .with_attribute("jwks_uri", Attribute::required_string("OIDC JWKS URI"))
            .with_attribute("keys", Attribute::computed_list("JWKS Keys as JSON String"))
            .with_attribute("pem", Attribute::computed_list("JWKS Keys as PEM format"))
            .with_attribute("id", Attribute::computed_string("Unique ID of this JWKS"))
    }

    fn read(&self, config: Value) -> BoxFuture<'_, Result<Value, Diagnostics>> {
        async move {
            let jwks_uri = required_string(&config, "jwks_uri")?;
            let model = self.read_model(jwks_uri).await?;
            to_state(&model)
        }
        .boxed()
    }
}
