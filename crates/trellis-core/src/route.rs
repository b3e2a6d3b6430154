//! Default route handler.

use async_trait::async_trait;
use trellis_router::{Model, ModelError, RouteHandler, RouteParams};

/// Fallback handler used when a route entry has no handler of its own.
///
/// Its model carries the route name so a missing handler is visible in the
/// rendered output instead of failing the transition.
#[derive(Debug, Clone)]
pub struct DefaultRoute {
    route_name: String,
}

impl DefaultRoute {
    /// Create the fallback handler for a route name.
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
        }
    }

    /// The route name this handler stands in for.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }
}

#[async_trait]
impl RouteHandler for DefaultRoute {
    fn handler_name(&self) -> &str {
        "DefaultRoute"
    }

    async fn model(&self, _params: &RouteParams) -> Result<Model, ModelError> {
        Ok(serde_json::json!({ "routeName": self.route_name }))
    }
}
