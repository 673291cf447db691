//! Top-level SDK facade

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use rehabkit_http::{ApiTransport, HttpClient, HttpConfig};

use crate::auth::AuthApi;
use crate::clients::ClientsApi;
use crate::programs::ProgramsApi;
use crate::users::UsersApi;

/// Entry point to the RehabKit API surfaces.
///
/// Owns the HTTP client and hands every sub-API a shared transport handle;
/// tests wire the same surfaces to a mock via [`RehabKit::with_transport`].
pub struct RehabKit {
    http: Option<Arc<HttpClient>>,
    auth: AuthApi,
    users: UsersApi,
    clients: ClientsApi,
    programs: ProgramsApi,
}

impl RehabKit {
    /// Connect to the API with the given configuration
    pub fn new(config: HttpConfig) -> Self {
        debug!("RehabKit SDK initialized with base URL {}", config.base_url);
        let http = Arc::new(HttpClient::new(config));
        let mut kit = Self::with_transport(http.clone());
        kit.http = Some(http);
        kit
    }

    /// Connect with default configuration
    pub fn with_defaults() -> Self {
        Self::new(HttpConfig::default())
    }

    /// Build the SDK over any transport (the mock transport in tests)
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            http: None,
            auth: AuthApi::new(transport.clone()),
            users: UsersApi::new(transport.clone()),
            clients: ClientsApi::new(transport.clone()),
            programs: ProgramsApi::new(transport),
        }
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn users(&self) -> &UsersApi {
        &self.users
    }

    pub fn clients(&self) -> &ClientsApi {
        &self.clients
    }

    pub fn programs(&self) -> &ProgramsApi {
        &self.programs
    }

    /// Update the bearer token for subsequent requests.
    /// No effect when built over a custom transport.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        if let Some(http) = &self.http {
            http.set_api_key(api_key);
            debug!("API key updated");
        }
    }

    /// Update the base URL for subsequent requests.
    /// No effect when built over a custom transport.
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        if let Some(http) = &self.http {
            let base_url = base_url.into();
            debug!("base URL updated to {}", base_url);
            http.set_base_url(base_url);
        }
    }

    /// Update the per-request timeout.
    /// No effect when built over a custom transport.
    pub fn set_timeout(&self, timeout: Duration) {
        if let Some(http) = &self.http {
            http.set_timeout(timeout);
        }
    }
}
