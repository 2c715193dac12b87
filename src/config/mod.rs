// Configuration module entry point
// Layered loading: optional config.toml, CHAINFIT_* environment, PORT override

mod state;
mod types;

pub use state::AppState;
pub use types::{
    Config, HeadersConfig, LoggingConfig, PathsConfig, PerformanceConfig, ServerConfig,
};

use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OPENER_POLICY: &str = "same-origin-allow-popups";
const DEFAULT_PERMISSIONS_POLICY: &str = "camera=(self), microphone=(self)";
const DEFAULT_CORS_ORIGIN: &str = "*";

impl Config {
    /// Load configuration with the full source stack: `config.toml` (if
    /// present), `CHAINFIT_*` environment variables, then the `PORT`
    /// environment variable overriding the listen port (platform hosts
    /// commonly inject it).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = builder_with_defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CHAINFIT").separator("__"))
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(p) => cfg.server.port = p,
                Err(_) => crate::logger::log_warning(&format!(
                    "Ignoring invalid PORT environment value '{port}'"
                )),
            }
        }

        Ok(cfg)
    }

    /// Load configuration from a specific file path (without extension),
    /// skipping environment sources. Used by tests for deterministic state.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = builder_with_defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .build()?;
        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

fn builder_with_defaults() -> Result<
    config::builder::ConfigBuilder<config::builder::DefaultState>,
    config::ConfigError,
> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("paths.static_root", "dist")?
        .set_default("paths.chain_dir", "chains")?
        .set_default("paths.create_missing", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("logging.access_log_format", "combined")?
        .set_default("performance.keep_alive_timeout", 75)?
        .set_default("performance.read_timeout", 30)?
        .set_default("performance.write_timeout", 30)?
        .set_default("headers.opener_policy", DEFAULT_OPENER_POLICY)?
        .set_default("headers.permissions_policy", DEFAULT_PERMISSIONS_POLICY)?
        .set_default("headers.cors_origin", DEFAULT_CORS_ORIGIN)
}
