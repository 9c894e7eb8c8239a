//! The `wellknownoidc` provider surface: metadata, schemas, configuration
//! and data source reads, independent of the plugin wire protocol.
//!
//! Configuration and state travel as JSON objects keyed by attribute name.

mod diagnostics;
mod document;
mod jwks;
mod schema;

pub use diagnostics::*;
pub use document::*;
pub use jwks::*;
pub use schema::*;

use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use tracing::*;

use crate::config::ClientConfig;
use crate::OidcClient;

/// Type name of the provider; data source names are prefixed with it.
pub const PROVIDER_TYPE_NAME: &str = "wellknownoidc";

/// A read-only data source.
pub trait DataSource: Send + Sync {
    /// Suffix appended to the provider type name, e.g. `document`.
    fn type_name_suffix(&self) -> &'static str;

    /// Schema of the data source.
    fn schema(&self) -> Schema;

    /// Reads the data source for `config` and returns the new state.
    ///
    /// Any error diagnostic means no state is produced.
    fn read(&self, config: Value) -> BoxFuture<'_, Result<Value, Diagnostics>>;

    /// Full type name, e.g. `wellknownoidc_document`.
    fn type_name(&self) -> String {
        format!("{PROVIDER_TYPE_NAME}_{}", self.type_name_suffix())
    }
}

/// Provider name and version reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    /// Provider type name.
    pub type_name: &'static str,
    /// Provider version.
    pub version: String,
}

/// The `wellknownoidc` provider.
#[derive(Debug, Clone)]
pub struct WellKnownOidcProvider {
    // "dev" for local builds, "test" under acceptance tests, the release
    // version otherwise.
    version: String,
    client: Option<OidcClient>,
}

impl WellKnownOidcProvider {
    /// Creates an unconfigured provider.
    pub fn new(version: impl Into<String>) -> Self {
        WellKnownOidcProvider {
            version: version.into(),
            client: None,
        }
    }

    /// Name and version of the provider.
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME,
            version: self.version.clone(),
        }
    }

    /// The provider block takes no attributes.
    pub fn schema(&self) -> Schema {
        Schema::new("Reads OpenID Connect discovery documents and JSON Web Key Sets.")
    }

    /// Configures the provider and builds the HTTP client shared by its data
    /// sources.
    pub fn configure(&mut self, config: &Value) -> Result<(), Diagnostics> {
        match config {
            Value::Null => {}
            Value::Object(attributes) => {
                if let Some(name) = attributes.keys().next() {
                    return Err(Diagnostic::error(
                        "Unsupported argument",
                        format!("An argument named \"{name}\" is not expected here."),
                    )
                    .with_attribute(name.clone())
                    .into());
                }
            }
            _ => {
                return Err(Diagnostic::error(
                    "Invalid provider configuration",
                    "The provider configuration must be an object.",
                )
                .into())
            }
        }

        let client = ClientConfig::from_env()
            .map_err(crate::Error::from)
            .and_then(|config| OidcClient::with_config(&config))
            .map_err(|err| {
                error!("Unable to configure the provider: {err}");
                Diagnostics::from(&err)
            })?;

        debug!(version = %self.version, "Configured provider");
        self.client = Some(client);
        Ok(())
    }

    /// The data sources offered by this provider.
    ///
    /// Uses the configured client, or a default one when [`configure`] was
    /// never called.
    ///
    /// [`configure`]: Self::configure
    pub fn data_sources(&self) -> Result<Vec<Box<dyn DataSource>>, Diagnostics> {
        let client = match &self.client {
            Some(client) => client.clone(),
            None => OidcClient::new().map_err(|err| Diagnostics::from(&err))?,
        };

        let data_sources: Vec<Box<dyn DataSource>> = vec![
            Box::new(DocumentDataSource::new(client.clone())),
            Box::new(JwksDataSource::new(client)),
        ];
        Ok(data_sources)
    }

    /// Reads the data source named `type_name` with `config`.
    pub async fn read_data_source(
        &self,
        type_name: &str,
        config: Value,
    ) -> Result<Value, Diagnostics> {
        let data_source = self
            .data_sources()?
            .into_iter()
            .find(|data_source| data_source.type_name() == type_name)
            .ok_or_else(|| {
                Diagnostics::from(Diagnostic::error(
                    "Unknown data source",
                    format!("The provider does not offer a data source named \"{type_name}\"."),
                ))
            })?;

        data_source.read(config).await
    }
}

/// Extracts a required, non-empty string attribute from a configuration
/// object.
pub(crate) fn required_string(
    config: &Value,
    attribute: &'static str,
) -> Result<String, Diagnostics> {
    match config.get(attribute) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
        Some(Value::String(_) | Value::Null) | None => Err(Diagnostic::error(
            "Missing required argument",
            format!("The argument \"{attribute}\" is required and must not be empty."),
        )
        .with_attribute(attribute)
        .into()),
        Some(_) => Err(Diagnostic::error(
            "Incorrect attribute value type",
            format!("The argument \"{attribute}\" must be a string."),
        )
        .with_attribute(attribute)
        .into()),
    }
}

/// Converts a state model to the JSON object handed back to the host.
pub(crate) fn to_state<T: Serialize>(model: &T) -> Result<Value, Diagnostics> {
    serde_json::to_value(model).map_err(|err| {
        error!("Unable to save state: {err}");
        Diagnostic::error("Unable to save state", err.to_string()).into()
    })
}
