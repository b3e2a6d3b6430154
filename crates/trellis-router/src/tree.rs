//! Conversion from the flat registry to the engine-facing route tree.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::definition::PathOptions;
use crate::handler::HandlerRef;
use crate::registry::{RouteEntry, RouteRegistry};

/// A node in the nested route tree handed to the path-recognition engine.
///
/// A node's `nested_routes` contains exactly the registry entries whose
/// route name is `<route_name>.<single-segment>`.
#[derive(Clone, Serialize)]
pub struct RouteNode {
    /// Full dotted route name.
    pub route_name: String,
    /// Path metadata for this node's own segment.
    pub path: PathOptions,
    /// Handler, if any.
    #[serde(skip)]
    pub handler: Option<HandlerRef>,
    /// Child nodes.
    pub nested_routes: Vec<RouteNode>,
}

impl RouteNode {
    fn from_entry(entry: &RouteEntry) -> Self {
        Self {
            route_name: entry.route_name.clone(),
            path: entry.path.clone(),
            handler: entry.handler.clone(),
            nested_routes: Vec::new(),
        }
    }

    /// Find a descendant (or this node) by full dotted route name.
    pub fn find(&self, route_name: &str) -> Option<&RouteNode> {
        if self.route_name == route_name {
            return Some(self);
        }
        self.nested_routes
            .iter()
            .find_map(|child| child.find(route_name))
    }
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("route_name", &self.route_name)
            .field("path", &self.path.path)
            .field("handler", &self.handler.as_ref().map(|h| h.handler_name()))
            .field("nested_routes", &self.nested_routes)
            .finish()
    }
}

impl RouteRegistry {
    /// Convert the registry into the nested array shape the external
    /// path-recognition engine expects.
    ///
    /// Entries are visited in (segment-depth, name) order so a parent is
    /// always placed before any of its children, whatever characters its
    /// segment names contain. An entry whose parent is not registered is
    /// promoted to a root node, with a warning.
    pub fn to_tree(&self) -> Vec<RouteNode> {
        let mut entries: Vec<&RouteEntry> = self.iter().collect();
        entries.sort_by(|a, b| {
            let depth_a = a.route_name.split('.').count();
            let depth_b = b.route_name.split('.').count();
            depth_a
                .cmp(&depth_b)
                .then_with(|| a.route_name.cmp(&b.route_name))
        });

        let mut roots: Vec<RouteNode> = Vec::new();
        for entry in entries {
            let node = RouteNode::from_entry(entry);
            match entry.route_name.rsplit_once('.') {
                None => roots.push(node),
                Some((parent_name, _)) => {
                    if let Some(orphan) = attach_to_parent(&mut roots, parent_name, node) {
                        warn!(
                            route_name = %entry.route_name,
                            parent = %parent_name,
                            "parent route not registered; promoting child to a root route"
                        );
                        roots.push(orphan);
                    }
                }
            }
        }

        roots
    }
}

/// Push `node` into its parent's `nested_routes`; hands the node back when
/// the parent is not in the forest.
fn attach_to_parent(
    roots: &mut [RouteNode],
    parent_name: &str,
    node: RouteNode,
) -> Option<RouteNode> {
    match find_nested_route(roots, parent_name) {
        Some(parent) => {
            parent.nested_routes.push(node);
            None
        }
        None => Some(node),
    }
}

/// Walk the forest by cumulative name segments (`a`, `a.b`, `a.b.c`),
/// matching each cumulative name against `route_name`.
fn find_nested_route<'t>(
    roots: &'t mut [RouteNode],
    parent_name: &str,
) -> Option<&'t mut RouteNode> {
    let mut segments = parent_name.split('.');
    let mut cumulative = segments.next()?.to_string();
    let mut current = roots
        .iter_mut()
        .find(|node| node.route_name == cumulative)?;

    for segment in segments {
        cumulative.push('.');
        cumulative.push_str(segment);
        current = current
            .nested_routes
            .iter_mut()
            .find(|node| node.route_name == cumulative)?;
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::definition::RouteDefinition;
    use crate::handler::{HandlerRef, RouteHandler};

    struct NamedRoute(&'static str);

    impl RouteHandler for NamedRoute {
        fn handler_name(&self) -> &str {
            self.0
        }
    }

    fn handler(name: &'static str) -> HandlerRef {
        Arc::new(NamedRoute(name))
    }

    fn scenario_registry() -> RouteRegistry {
        RouteRegistry::from_definitions(&[
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
        .unwrap()
    }

    fn shape(nodes: &[RouteNode]) -> Vec<(String, Vec<String>)> {
        nodes
            .iter()
            .map(|node| {
                (
                    node.route_name.clone(),
                    node.nested_routes
                        .iter()
                        .map(|child| child.route_name.clone())
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_scenario_tree_shape() {
        let tree = scenario_registry().to_tree();

        assert_eq!(
            shape(&tree),
            vec![
                ("index".to_string(), vec![]),
                (
                    "users".to_string(),
                    vec!["users.edit".to_string(), "users.index".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_deep_nesting_attaches_to_innermost_parent() {
        let registry = RouteRegistry::from_definitions(&[RouteDefinition::new("/a/b/c")
            .with_name("a.b.c")
            .with_handler(handler("CRoute"))])
        .unwrap();

        let tree = registry.to_tree();
        assert_eq!(tree.len(), 1);

        let deep = tree[0].find("a.b.c").unwrap();
        assert_eq!(deep.path.path, "/c");
        assert_eq!(
            tree[0].find("a.b").unwrap().nested_routes.len(),
            2 // a.b.c and a.b.index
        );
    }

    #[test]
    fn test_to_tree_is_idempotent() {
        let registry = scenario_registry();

        let first = registry.to_tree();
        let second = registry.to_tree();

        assert_eq!(shape(&first), shape(&second));
    }

    #[test]
    fn test_leaf_round_trip() {
        let registry = scenario_registry();
        let tree = registry.to_tree();

        // Every registered name must be reachable by walking the tree from
        // its roots.
        for name in registry.route_names() {
            let found = tree.iter().find_map(|root| root.find(name));
            assert_eq!(found.map(|node| node.route_name.as_str()), Some(name));
        }
    }

    #[test]
    fn test_orphan_promoted_to_root() {
        let registry = RouteRegistry::from_map(|map| {
            map.route_opts(
                "ghost.child",
                crate::definition::RouteOptions::new().with_path("/child"),
            );
        });

        let tree = registry.to_tree();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].route_name, "ghost.child");
        assert!(tree[0].nested_routes.is_empty());
    }

    #[test]
    fn test_depth_order_survives_segments_sorting_before_dot() {
        // "a-b" sorts before "a.b" lexicographically ('-' < '.'); depth-first
        // ordering must still place the parent "a" before both.
        let registry = RouteRegistry::from_map(|map| {
            map.route_with("a", crate::definition::RouteOptions::new(), |a| {
                a.route("b");
            });
            map.route("a-b");
        });

        let tree = registry.to_tree();
        let root_names: Vec<&str> = tree.iter().map(|n| n.route_name.as_str()).collect();
        assert_eq!(root_names, vec!["a", "a-b"]);
        assert!(tree[0].find("a.b").is_some());
    }

    #[test]
    fn test_tree_serializes_without_handlers() {
        let tree = scenario_registry().to_tree();
        let json = serde_json::to_value(&tree).unwrap();

        let users = &json[1];
        assert_eq!(users["route_name"], "users");
        assert_eq!(users["path"]["path"], "/users");
        assert!(users.get("handler").is_none());
        assert_eq!(users["nested_routes"].as_array().unwrap().len(), 2);
    }
}
