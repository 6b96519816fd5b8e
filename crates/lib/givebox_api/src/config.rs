//! API server configuration.

/// Configuration for the API server.
///
/// Constructed by the server binary from CLI arguments and environment
/// variables; tests build it directly.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
    /// Password exchanged for an admin session token.
    pub admin_password: String,
    /// Origins allowed by the CORS policy. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}
