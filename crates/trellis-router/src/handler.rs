//! Route handler trait and model types.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

/// Resolved model value for a route.
pub type Model = serde_json::Value;

/// Extracted route parameters (e.g. `:id` from `/users/:id`).
pub type RouteParams = HashMap<String, String>;

/// Error type for model resolution.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model resolution failed: {0}")]
    Resolve(#[from] anyhow::Error),

    #[error("no resolved model for route '{0}' on the active transition")]
    NotResolved(String),
}

/// A named route handler.
///
/// Handlers resolve the model for their route and carry the component the
/// rendering collaborator mounts. Every hook has a default so a unit struct
/// is a valid handler.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    /// Display name used for route-name inference (e.g. `UserEditRoute`).
    fn handler_name(&self) -> &str;

    /// Resolve the model for this route.
    async fn model(&self, _params: &RouteParams) -> Result<Model, ModelError> {
        Ok(Model::Object(serde_json::Map::new()))
    }

    /// Called when the route becomes active.
    fn activate(&self) {}

    /// Called when the route is exited.
    fn deactivate(&self) {}
}

/// Shared reference to a route handler.
pub type HandlerRef = Arc<dyn RouteHandler>;
