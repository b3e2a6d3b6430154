//! Router configuration.

/// Configuration for a Trellis router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Log route lookups during transitions.
    pub log_routes: bool,
    /// Log resolved models during route setup.
    pub log_models: bool,
    /// Root URL prefix for the application.
    pub root_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            log_routes: true,
            log_models: true,
            root_url: "/".to_string(),
        }
    }
}

impl RouterConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable route-lookup logging.
    pub fn with_log_routes(mut self, enabled: bool) -> Self {
        self.log_routes = enabled;
        self
    }

    /// Enable or disable model logging.
    pub fn with_log_models(mut self, enabled: bool) -> Self {
        self.log_models = enabled;
        self
    }

    /// Set the root URL prefix.
    pub fn with_root_url(mut self, root_url: impl Into<String>) -> Self {
        self.root_url = root_url.into();
        self
    }
}
