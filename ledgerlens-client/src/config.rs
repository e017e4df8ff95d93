/// Configuration management for the LedgerLens client
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `LEDGERLENS_USE_MOCK`: Run against the local simulation unless set to
///   `false` (default: mock mode)
/// - `LEDGERLENS_API_BASE_URL`: Base URL of the live backend
///   (default: http://localhost:8000)
/// - `LEDGERLENS_MOCK_STORE_PATH`: Directory for persistent mock storage;
///   unset means in-memory storage that is gone on exit
/// - `LEDGERLENS_MOCK_LATENCY`: Set to `off` or `0` to disable simulated
///   network delays (default: on)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use ledgerlens_client::config::ClientConfig;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = ClientConfig::from_env()?;
/// println!("mock mode: {}", config.use_mock);
/// # Ok(())
/// # }
/// ```
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Whether to simulate the backend locally instead of calling it
    pub use_mock: bool,

    /// Base URL of the live backend, without a trailing slash
    pub api_base_url: String,

    /// Directory for persistent mock storage (None = in-memory)
    pub mock_store_path: Option<PathBuf>,

    /// Whether mock operations pause for realistic network delays
    pub simulate_latency: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            use_mock: true,
            api_base_url: "http://localhost:8000".to_string(),
            mock_store_path: None,
            simulate_latency: true,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables
    ///
    /// Mock mode is the default: only an explicit `LEDGERLENS_USE_MOCK=false`
    /// switches the client to the live backend.
    ///
    /// # Errors
    ///
    /// Returns an error if `LEDGERLENS_API_BASE_URL` is set but empty.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let use_mock = env::var("LEDGERLENS_USE_MOCK")
            .map(|v| v != "false")
            .unwrap_or(true);

        let api_base_url = normalize_base_url(
            &env::var("LEDGERLENS_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        );
        if api_base_url.is_empty() {
            anyhow::bail!("LEDGERLENS_API_BASE_URL must not be empty");
        }

        let mock_store_path = env::var("LEDGERLENS_MOCK_STORE_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let simulate_latency = env::var("LEDGERLENS_MOCK_LATENCY")
            .map(|v| v != "off" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            use_mock,
            api_base_url,
            mock_store_path,
            simulate_latency,
        })
    }
}

/// Strips trailing slashes so endpoint paths can always be appended
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
