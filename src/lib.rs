//! # wellknown-oidc
//!
//! This crate implements the `wellknownoidc` Terraform provider's two
//! read-only data sources: one reads an OpenID Connect discovery document,
//! the other reads the JSON Web Key Set it points to and renders every key as
//! JSON and as PEM.
//!
//! The HTTP side is usable on its own through [`OidcClient`]; the
//! [`provider`] module layers schemas, configuration handling and
//! diagnostics on top for a plugin server.
//!
//! ## Example
//!
//! ```no_run
//! use wellknown_oidc::{OidcClient, Result};
//!
//! #[actix_rt::main]
//! async fn main() -> Result<()> {
//!     let client = OidcClient::new()?;
//!
//!     let document = client
//!         .fetch_discovery_document("https://accounts.google.com")
//!         .await?;
//!     let keys = client.fetch_jwks_encoded(&document.jwks_uri).await?;
//!
//!     for pem in &keys.pem {
//!         println!("{pem}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod de;
mod discovery;
mod error;
mod impls;
mod jwk;
pub mod provider;

#[cfg(test)]
mod test_support;

pub use client::*;
pub use config::*;
pub use discovery::*;
pub use error::*;
pub use jwk::*;
