use super::Config;
use crate::catalog::ImageCatalog;

/// Process-wide state shared by all request handlers.
///
/// Both fields are immutable after startup, so the state is shared behind a
/// plain `Arc` with no interior locking.
pub struct AppState {
    pub config: Config,
    pub catalog: ImageCatalog,
}

impl AppState {
    pub const fn new(config: Config, catalog: ImageCatalog) -> Self {
        Self { config, catalog }
    }
}
