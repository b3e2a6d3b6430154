//! Error types for registry construction.

use thiserror::Error;

/// Errors raised while building a route registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A route definition was supplied without a `path`.
    #[error("route definition '{route_name}' is missing a \"path\"")]
    MissingPath {
        /// Best-effort name for the offending definition.
        route_name: String,
    },
}
