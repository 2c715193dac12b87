use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub headers: HeadersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Filesystem collaborators: the prebuilt SPA bundle and the chain images.
#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Directory holding the front-end build output (served as-is).
    pub static_root: String,
    /// Directory scanned at startup for chain images.
    pub chain_dir: String,
    /// Create `chain_dir` when it does not exist instead of just warning.
    pub create_missing: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// "combined" or "json"
    pub access_log_format: String,
    pub access_log_file: Option<String>,
    pub error_log_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Fixed response header policy, attached to every outgoing response.
///
/// The defaults form one coherent camera-permission set: COOP keeps popup
/// flows working, Permissions-Policy grants camera/microphone to the app's
/// own origin, and CORS stays wide open for development callers.
#[derive(Debug, Deserialize, Clone)]
pub struct HeadersConfig {
    pub opener_policy: String,
    pub permissions_policy: String,
    pub cors_origin: String,
}
