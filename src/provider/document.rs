use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::*;

use super::{required_string, to_state, Attribute, DataSource, Diagnostics, Schema};
use crate::discovery::DiscoveryDocument;
use crate::OidcClient;

/// State of the `wellknownoidc_document` data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDataSourceModel {
    /// Same as `discovery_url`.
    pub id: String,
    /// The configured base URL.
    pub discovery_url: String,
    /// Issuer published by the provider.
    pub issuer: String,
    /// JWKS URI published by the provider.
    pub jwks_uri: String,
    /// Supported `response_type` values.
    pub response_types_supported: Vec<String>,
    /// Supported subject types.
    pub subject_types_supported: Vec<String>,
    /// Supported ID Token signing algorithms.
    pub id_token_signing_alg_values_supported: Vec<String>,
    /// Claims the provider may supply.
    pub claims_supported: Vec<String>,
    /// Supported grant types.
    pub grant_types: Vec<String>,
}

impl DocumentDataSourceModel {
    /// Builds the state for a document fetched from `discovery_url`.
    pub fn new(discovery_url: String, document: DiscoveryDocument) -> Self {
        DocumentDataSourceModel {
            id: discovery_url.clone(),
            discovery_url,
            issuer: document.issuer,
            jwks_uri: document.jwks_uri,
            response_types_supported: document.response_types_supported,
            subject_types_supported: document.subject_types_supported,
            id_token_signing_alg_values_supported: document.id_token_signing_alg_values_supported,
            claims_supported: document.claims_supported,
            grant_types: document.grant_types,
        }
    }
}

/// The `wellknownoidc_document` data source.
#[derive(Debug, Clone)]
pub struct DocumentDataSource {
    client: OidcClient,
}

impl DocumentDataSource {
    /// Creates the data source on top of a shared client.
    pub fn new(client: OidcClient) -> Self {
        Self { client }
    }

    /// Fetches the discovery document below `discovery_url` and builds the
    /// state model.
    pub async fn read_model(
        &self,
        discovery_url: String,
    ) -> Result<DocumentDataSourceModel, Diagnostics> {
        match self.client.fetch_discovery_document(&discovery_url).await {
            Ok(document) => Ok(DocumentDataSourceModel::new(discovery_url, document)),
            Err(err) => {
                error!(%discovery_url, "{err}");
                Err(Diagnostics::from(&err))
            }
        }
    }
}

impl DataSource for DocumentDataSource {
    fn type_name_suffix(&self) -> &'static str {
        "document"
    }

    fn schema(&self) -> Schema {
        Schema::new("Document data source")
            .with_attribute(
                "discovery_url",
                Attribute::required_string("OpenID configuration discovery URL"),
            )
            .with_attribute(
                "issuer",
                Attribute::computed_string(
                    "URL using the https scheme with no query or fragment component that the \
                     OP asserts as its Issuer Identifier",
                ),
            )
            .with_attribute(
                "jwks_uri",
                Attribute::computed_string(
                    "URL of the OP's JSON Web Key Set [JWK] document. This contains the \
                     signing key(s) the RP uses to validate signatures from the OP",
                ),
            )
            .with_attribute(
                "response_types_supported",
                Attribute::computed_list(
                    "List of the OAuth 2.0 response_type values that this OP supports",
                ),
            )
            .with_attribute(
                "subject_types_supported",
                Attribute::computed_list(
                    "List of the Subject Identifier types that this OP supports",
                ),
            )
            .with_attribute(
                "id_token_signing_alg_values_supported",
                Attribute::computed_list(
                    "List of the JWS signing algorithms (alg values) supported by the OP for \
                     the ID Token to encode the Claims in a JWT",
                ),
            )
            .with_attribute(
                "claims_supported",
                Attribute::computed_list(
                    "List of the Claim Names of the Claims that the OpenID Provider MAY be \
                     able to supply values for",
                ),
            )
            .with_attribute(
                "grant_types",
                Attribute::computed_list(
                    "List of the OAuth 2.0 Grant Type values that this OP supports",
                ),
            )
            .with_attribute("id", Attribute::computed_string("Unique ID of this configuration"))
    }

    fn read(&self, config: Value) -> BoxFuture<'_, Result<Value, Diagnostics>> {
        async move {
            let discovery_url = required_string(&config, "discovery_url")?;
            let model = self.read_model(discovery_url).await?;
            to_state(&model)
        }
        .boxed()
    }
}
