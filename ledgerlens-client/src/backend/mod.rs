/// Backend selection
///
/// The capability surface lives in [`client_trait::BackendClient`]; the two
/// implementations are the in-process [`mock::MockBackend`] and the live
/// [`http::HttpBackend`]. [`from_config`] picks one at startup so the rest
/// of the client only ever sees `Arc<dyn BackendClient>`.
///
/// # Example
///
/// ```
/// use ledgerlens_client::backend::{self, BackendClient};
/// use ledgerlens_client::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// let backend = backend::from_config(&config).unwrap();
/// assert_eq!(backend.name(), "mock");
/// ```
use std::sync::Arc;

pub mod client_trait;
pub mod http;
pub mod mock;

pub use client_trait::BackendClient;
pub use http::HttpBackend;
pub use mock::MockBackend;

use crate::config::ClientConfig;
use mock::{FileStore, KeyValueStore, LatencyPolicy, MemoryStore};

/// Builds the backend the configuration asks for
///
/// Mock mode persists through a [`FileStore`] when a store path is
/// configured and falls back to process-local memory otherwise. Live mode
/// needs nothing beyond the base URL.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed.
pub fn from_config(config: &ClientConfig) -> anyhow::Result<Arc<dyn BackendClient>> {
    if config.use_mock {
        let store: Arc<dyn KeyValueStore> = match &config.mock_store_path {
            Some(path) => Arc::new(FileStore::new(path.clone())),
            None => Arc::new(MemoryStore::new()),
        };
        let latency = if config.simulate_latency {
            LatencyPolicy::realistic()
        } else {
            LatencyPolicy::none()
        };

        tracing::info!(
            persistent = config.mock_store_path.is_some(),
            latency = config.simulate_latency,
            "using mock backend"
        );
        return Ok(Arc::new(MockBackend::new(store, latency)));
    }

    tracing::info!(base_url = %config.api_base_url, "using live backend");
    let backend = HttpBackend::new(config.api_base_url.clone())?;
    Ok(Arc::new(backend))
}
