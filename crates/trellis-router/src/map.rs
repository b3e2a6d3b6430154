//! DSL-style route map collection.

use crate::definition::{PathOptions, RouteOptions};
use crate::registry::{RouteEntry, RouteRegistry};

impl RouteRegistry {
    /// Collect a registry from a DSL-style map callback.
    ///
    /// The callback receives an explicit map builder; nested `route_with`
    /// calls record dotted child names under the parent's full name, with
    /// the same merge semantics as definition ingestion:
    ///
    /// ```rust,ignore
    /// let registry = RouteRegistry::from_map(|map| {
    ///     map.route("index");
    ///     map.route_with("users", RouteOptions::new(), |users| {
    ///         users.route("edit");
    ///     });
    /// });
    /// ```
    ///
    /// Every call constructs and returns a fresh registry.
    pub fn from_map(map_fn: impl FnOnce(&mut RouteMap<'_>)) -> Self {
        let mut registry = Self::new();
        let mut map = RouteMap {
            registry: &mut registry,
            prefix: None,
        };
        map_fn(&mut map);

        registry
    }
}

/// Mutable recorder handed to map callbacks.
pub struct RouteMap<'r> {
    registry: &'r mut RouteRegistry,
    prefix: Option<String>,
}

impl RouteMap<'_> {
    /// Record a leaf route; the path defaults to `/<name>`.
    pub fn route(&mut self, name: &str) {
        self.record(name, RouteOptions::default());
    }

    /// Record a leaf route with options.
    pub fn route_opts(&mut self, name: &str, options: RouteOptions) {
        self.record(name, options);
    }

    /// Record a route with options and nested children.
    ///
    /// A parent that gains nested children also gets a synthesized `.index`
    /// placeholder.
    pub fn route_with(
        &mut self,
        name: &str,
        options: RouteOptions,
        nested: impl FnOnce(&mut RouteMap<'_>),
    ) {
        let full_name = self.record(name, options);

        let before = self.registry.len();
        let mut child = RouteMap {
            registry: self.registry,
            prefix: Some(full_name.clone()),
        };
        nested(&mut child);

        if self.registry.len() > before {
            self.registry.ensure_index_placeholder(&full_name);
        }
    }

    fn record(&mut self, name: &str, options: RouteOptions) -> String {
        let full_name = match &self.prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string(),
        };
        let path = options.path.unwrap_or_else(|| format!("/{name}"));
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        self.registry.upsert(RouteEntry {
            route_name: full_name.clone(),
            path: PathOptions::new(path),
            handler: options.handler,
        });

        full_name
    }
}
