//! The route registry: a flat, name-keyed map of route entries.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use crate::definition::{PathOptions, RouteDefinition};
use crate::error::RegistryError;
use crate::handler::HandlerRef;
use crate::name::{route_name_from_handler, route_name_from_path};

/// A single entry in the route registry.
#[derive(Clone)]
pub struct RouteEntry {
    /// Full dotted route name (the registry key).
    pub route_name: String,
    /// Path metadata for this route's own segment.
    pub path: PathOptions,
    /// Handler, if one has been supplied; `None` for placeholders.
    pub handler: Option<HandlerRef>,
}

impl RouteEntry {
    /// Whether this entry is a pure path-segment placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.handler.is_none()
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("route_name", &self.route_name)
            .field("path", &self.path.path)
            .field("handler", &self.handler.as_ref().map(|h| h.handler_name()))
            .finish()
    }
}

/// The flat, name-keyed mapping from dotted route names to path/handler
/// metadata, the single source of truth during router configuration.
///
/// A registry is an owned value: each builder entry point constructs and
/// returns a fresh one, and callers thread it explicitly to the tree
/// converter and the router. Entries are merged in place and never deleted
/// within one build pass.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    entries: BTreeMap<String, RouteEntry>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of flat route definitions.
    pub fn from_definitions(definitions: &[RouteDefinition]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.add_definition(definition)?;
        }

        Ok(registry)
    }

    /// Apply a single definition to this registry.
    ///
    /// Walks the resolved route name segment by segment, upserting an entry
    /// for every dotted prefix and synthesizing an `.index` placeholder for
    /// each parent that gains a child. Name segments beyond the path's
    /// segment count reuse the last path segment.
    pub fn add_definition(&mut self, definition: &RouteDefinition) -> Result<(), RegistryError> {
        let path = definition.path.as_deref().ok_or_else(|| {
            let route_name = definition
                .route_name
                .clone()
                .or_else(|| {
                    definition
                        .handler
                        .as_deref()
                        .and_then(route_name_from_handler)
                })
                .unwrap_or_else(|| "<unnamed>".to_string());
            RegistryError::MissingPath { route_name }
        })?;

        let route_name = definition
            .route_name
            .clone()
            .or_else(|| {
                definition
                    .handler
                    .as_deref()
                    .and_then(route_name_from_handler)
            })
            .unwrap_or_else(|| route_name_from_path(path));

        let name_segments: Vec<&str> = route_name.split('.').collect();
        let normalized = path.strip_prefix('/').unwrap_or(path);
        let path_segments: Vec<&str> = normalized.split('/').collect();

        let mut prefix = String::new();
        for (index, segment) in name_segments.iter().enumerate() {
            let parent = prefix.clone();
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(segment);

            let path_index = index.min(path_segments.len() - 1);
            let handler = if index == name_segments.len() - 1 {
                definition.handler.clone()
            } else {
                None
            };

            self.upsert(RouteEntry {
                route_name: prefix.clone(),
                path: PathOptions::new(format!("/{}", path_segments[path_index])),
                handler,
            });

            if !parent.is_empty() {
                self.ensure_index_placeholder(&parent);
            }
        }

        if let Some(index_handler) = &definition.index_handler {
            if route_name != "index" {
                self.upsert(RouteEntry {
                    route_name: format!("{route_name}.index"),
                    path: PathOptions::index(),
                    handler: Some(index_handler.clone()),
                });
            }
        }

        Ok(())
    }

    /// Insert or merge an entry under its route name.
    ///
    /// Merging keeps the existing path-options; an incoming handler always
    /// wins, with a warning when it displaces a different handler.
    pub(crate) fn upsert(&mut self, incoming: RouteEntry) {
        match self.entries.get_mut(&incoming.route_name) {
            None => {
                self.entries.insert(incoming.route_name.clone(), incoming);
            }
            Some(existing) => {
                if let Some(handler) = incoming.handler {
                    if let Some(current) = &existing.handler {
                        if current.handler_name() != handler.handler_name() {
                            warn!(
                                route_name = %incoming.route_name,
                                previous = %current.handler_name(),
                                replacement = %handler.handler_name(),
                                "route handler overwritten; the last definition wins"
                            );
                        }
                    }
                    existing.handler = Some(handler);
                }
            }
        }
    }

    /// Make sure `<parent>.index` exists, as a placeholder with path `/`.
    pub(crate) fn ensure_index_placeholder(&mut self, parent: &str) {
        let index_name = format!("{parent}.index");
        self.entries
            .entry(index_name.clone())
            .or_insert_with(|| RouteEntry {
                route_name: index_name,
                path: PathOptions::index(),
                handler: None,
            });
    }

    /// Look up an entry by its full dotted route name.
    pub fn get(&self, route_name: &str) -> Option<&RouteEntry> {
        self.entries.get(route_name)
    }

    /// Whether the registry contains the given route name.
    pub fn contains(&self, route_name: &str) -> bool {
        self.entries.contains_key(route_name)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.values()
    }

    /// Registered route names, in key order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::handler::RouteHandler;

    struct NamedRoute(&'static str);

    impl RouteHandler for NamedRoute {
        fn handler_name(&self) -> &str {
            self.0
        }
    }

    fn handler(name: &'static str) -> HandlerRef {
        Arc::new(NamedRoute(name))
    }

    fn names(registry: &RouteRegistry) -> Vec<&str> {
        registry.route_names().collect()
    }

    // === Validation Tests ===

    #[test]
    fn test_missing_path_is_rejected() {
        let definition = RouteDefinition {
            path: None,
            route_name: Some("users".to_string()),
            handler: None,
            index_handler: None,
        };

        let err = RouteRegistry::from_definitions(std::slice::from_ref(&definition)).unwrap_err();
        assert!(matches!(err, RegistryError::MissingPath { route_name } if route_name == "users"));
    }

    // === Name Resolution Tests ===

    #[test]
    fn test_explicit_name_wins_over_handler_and_path() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/people")
            .with_name("users")
            .with_handler(handler("PeopleRoute"))])
        .unwrap();

        assert!(registry.contains("users"));
        assert!(!registry.contains("people"));
    }

    #[test]
    fn test_name_inferred_from_handler() {
        let registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/users/edit").with_handler(handler("UserEditRoute"))
        ])
        .unwrap();

        assert_eq!(names(&registry), vec!["user", "user.edit", "user.index"]);
    }

    #[test]
    fn test_name_inferred_from_path() {
        let registry =
            RouteRegistry::from_definitions(&[RouteDefinition::new("/users/:id/edit")]).unwrap();

        assert_eq!(
            names(&registry),
            vec![
                "users",
                "users.id",
                "users.id.edit",
                "users.id.index",
                "users.index"
            ]
        );
    }

    // === Prefix Walk Tests ===

    #[test]
    fn test_key_set_is_all_prefixes_plus_index_per_parent() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/a/b/c")
            .with_name("a.b.c")
            .with_handler(handler("CRoute"))])
        .unwrap();

        assert_eq!(
            names(&registry),
            vec!["a", "a.b", "a.b.c", "a.b.index", "a.index"]
        );
        assert!(registry.get("a").unwrap().is_placeholder());
        assert!(registry.get("a.b").unwrap().is_placeholder());
        assert_eq!(
            registry.get("a.b.c").unwrap().handler.as_ref().unwrap().handler_name(),
            "CRoute"
        );
    }

    #[test]
    fn test_excess_name_segments_reuse_last_path_segment() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/a/b")
            .with_name("x.y.z")
            .with_handler(handler("ZRoute"))])
        .unwrap();

        assert_eq!(registry.get("x").unwrap().path.path, "/a");
        assert_eq!(registry.get("x.y").unwrap().path.path, "/b");
        assert_eq!(registry.get("x.y.z").unwrap().path.path, "/b");
    }

    #[test]
    fn test_index_placeholders_have_root_path() {
        let registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/users/edit").with_name("users.edit")
        ])
        .unwrap();

        let index = registry.get("users.index").unwrap();
        assert!(index.is_placeholder());
        assert_eq!(index.path.path, "/");
    }

    // === Merge Tests ===

    #[test]
    fn test_placeholder_filled_by_later_definition_keeps_path() {
        let mut registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/users/edit").with_name("users.edit")
        ])
        .unwrap();

        // "users" exists as a placeholder with path "/users"; filling it in
        // with a handler must not disturb the recorded path.
        registry
            .add_definition(
                &RouteDefinition::new("/members")
                    .with_name("users")
                    .with_handler(handler("UsersRoute")),
            )
            .unwrap();

        let entry = registry.get("users").unwrap();
        assert_eq!(entry.path.path, "/users");
        assert_eq!(entry.handler.as_ref().unwrap().handler_name(), "UsersRoute");
    }

    #[test]
    fn test_conflicting_handlers_last_write_wins() {
        let registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/users")
                .with_name("users")
                .with_handler(handler("UsersRoute")),
            RouteDefinition::new("/users")
                .with_name("users")
                .with_handler(handler("PeopleRoute")),
        ])
        .unwrap();

        assert_eq!(
            registry.get("users").unwrap().handler.as_ref().unwrap().handler_name(),
            "PeopleRoute"
        );
    }

    // === Index Handler Tests ===

    #[test]
    fn test_explicit_index_handler_fills_index_entry() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/users")
            .with_name("users")
            .with_handler(handler("UsersRoute"))
            .with_index_handler(handler("UsersIndexRoute"))])
        .unwrap();

        let index = registry.get("users.index").unwrap();
        assert_eq!(index.path.path, "/");
        assert_eq!(
            index.handler.as_ref().unwrap().handler_name(),
            "UsersIndexRoute"
        );
    }

    #[test]
    fn test_index_handler_ignored_on_index_route() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/")
            .with_name("index")
            .with_index_handler(handler("IndexIndexRoute"))])
        .unwrap();

        assert_eq!(names(&registry), vec!["index"]);
    }

    #[test]
    fn test_explicit_index_handler_overwrites_placeholder() {
        let registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/users/edit").with_name("users.edit"),
            RouteDefinition::new("/users")
                .with_name("users")
                .with_index_handler(handler("UsersIndexRoute")),
        ])
        .unwrap();

        assert_eq!(
            registry.get("users.index").unwrap().handler.as_ref().unwrap().handler_name(),
            "UsersIndexRoute"
        );
    }

    // === Concrete Scenario ===

    #[test]
    fn test_three_definition_scenario() {
        let registry = RouteRegistry::from_definitions(&[
            RouteDefinition::new("/")
                .with_name("index")
                .with_handler(handler("IndexRoute")),
            RouteDefinition::new("/users")
                .with_name("users")
                .with_handler(handler("UsersRoute")),
            RouteDefinition::new("/users/:id")
                .with_name("users.edit")
                .with_handler(handler("UserEditRoute")),
        ])
        .unwrap();

        assert_eq!(
            names(&registry),
            vec!["index", "users", "users.edit", "users.index"]
        );
        let index = registry.get("users.index").unwrap();
        assert!(index.is_placeholder());
        assert_eq!(index.path.path, "/");
        assert_eq!(registry.get("users.edit").unwrap().path.path, "/:id");
    }
}
