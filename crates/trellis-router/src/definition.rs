//! Route definition inputs and path metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::handler::HandlerRef;

/// Path metadata attached to every registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    /// Path segment owned by this route, always with a leading `/`.
    pub path: String,
}

impl PathOptions {
    /// Create path options from a segment or path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path options for an index route (`/`).
    pub fn index() -> Self {
        Self {
            path: "/".to_string(),
        }
    }
}

/// A flat route definition supplied to the registry builder.
///
/// `path` is required. The route name is resolved from `route_name`, the
/// handler's display name, or the path, in that order.
#[derive(Clone, Default)]
pub struct RouteDefinition {
    /// URL path for this route (e.g. `/users/:id`).
    pub path: Option<String>,
    /// Explicit dotted route name (e.g. `users.edit`).
    pub route_name: Option<String>,
    /// Handler responsible for model resolution and rendering.
    pub handler: Option<HandlerRef>,
    /// Handler for the `<name>.index` route, registered alongside this one.
    pub index_handler: Option<HandlerRef>,
}

impl RouteDefinition {
    /// Create a definition for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Set the explicit dotted route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    /// Set the route handler.
    pub fn with_handler(mut self, handler: HandlerRef) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Set the handler for the `<name>.index` route.
    pub fn with_index_handler(mut self, handler: HandlerRef) -> Self {
        self.index_handler = Some(handler);
        self
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("route_name", &self.route_name)
            .field("handler", &self.handler.as_ref().map(|h| h.handler_name()))
            .field(
                "index_handler",
                &self.index_handler.as_ref().map(|h| h.handler_name()),
            )
            .finish()
    }
}

/// Options for a single `route` call in a map callback.
#[derive(Clone, Default)]
pub struct RouteOptions {
    /// Path segment for the route; defaults to `/<name>`.
    pub path: Option<String>,
    /// Handler for the route.
    pub handler: Option<HandlerRef>,
}

impl RouteOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path segment.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the handler.
    pub fn with_handler(mut self, handler: HandlerRef) -> Self {
        self.handler = Some(handler);
        self
    }
}

impl fmt::Debug for RouteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOptions")
            .field("path", &self.path)
            .field("handler", &self.handler.as_ref().map(|h| h.handler_name()))
            .finish()
    }
}
