/// Common test utilities for backend integration tests
///
/// Provides:
/// - Instant mock backend construction (latency disabled, fresh state)
/// - Demo account sign-in
/// - Well-formed company payloads

use std::sync::Arc;

use ledgerlens_client::backend::mock::{
    LatencyPolicy, MemoryStore, MockBackend, DEMO_EMAIL, DEMO_PASSWORD,
};
use ledgerlens_client::backend::BackendClient;
use ledgerlens_shared::models::company::NewCompany;

/// Mock backend over fresh in-memory state with latency disabled
pub fn instant_backend() -> MockBackend {
    MockBackend::new(Arc::new(MemoryStore::new()), LatencyPolicy::none())
}

/// Signs the demo account in and returns its bearer token
pub async fn demo_token(backend: &MockBackend) -> String {
    backend
        .login(DEMO_EMAIL, DEMO_PASSWORD)
        .await
        .unwrap()
        .access_token
}

/// Registration payload for a well-formed company
pub fn sample_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        region: "Auckland".to_string(),
        industry: "Retail".to_string(),
    }
}
