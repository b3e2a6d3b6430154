//! Named service registry.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name of the router's own service entry, registered at startup.
pub const ROUTER_SERVICE: &str = "router";

/// Named registry of shared services available to route activations.
///
/// Services reach handlers only through their activation (see
/// `RouteActivation`), never through shared handler structure.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, service: Arc<dyn Any + Send + Sync>) {
        self.services.insert(name.into(), service);
    }

    /// Typed lookup by name.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.services
            .get(name)
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Whether a service is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.services.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Session {
        user: String,
    }

    #[test]
    fn test_typed_lookup() {
        let mut services = ServiceRegistry::new();
        services.insert(
            "session",
            Arc::new(Session {
                user: "iz".to_string(),
            }),
        );

        let session = services.get::<Session>("session").unwrap();
        assert_eq!(session.user, "iz");
    }

    #[test]
    fn test_wrong_type_is_none() {
        let mut services = ServiceRegistry::new();
        services.insert("session", Arc::new(7u32));

        assert!(services.get::<Session>("session").is_none());
        assert!(services.get::<u32>("missing").is_none());
        assert!(services.contains("session"));
    }
}
