pub mod client;
pub mod transport;
pub mod wire;

use crate::catalog::client::{ApiSettings, CatalogClient};
use crate::catalog::transport::GlooTransport;
use crate::env_variable_utils::CONFIG;

/// Browser-backed client configured from `ENV_CONFIG`.
pub fn catalog_client() -> CatalogClient {
    CatalogClient::new(GlooTransport, ApiSettings::from(&*CONFIG))
}
