//! Router construction and startup.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use trellis_router::{RouteDefinition, RouteMap, RouteRegistry};

use crate::config::RouterConfig;
use crate::engine::{PathRecognizer, TransitionEngine};
use crate::error::RouterError;
use crate::location::{Location, MemoryLocation};
use crate::render::{ComponentRenderer, NullRenderer};
use crate::service::{RouterService, RouterState, SharedLocation, StateObserver};
use crate::services::{ServiceRegistry, ROUTER_SERVICE};

/// Builder for a configured, running router.
///
/// # Example
///
/// ```rust,ignore
/// let router = RouterBuilder::new(engine)
///     .definitions([
///         RouteDefinition::new("/").with_name("index").with_handler(index),
///         RouteDefinition::new("/users").with_name("users").with_handler(users),
///     ])
///     .start()?;
///
/// router.visit("/users").await?;
/// ```
pub struct RouterBuilder<E> {
    engine: E,
    renderer: Arc<dyn ComponentRenderer>,
    location: Box<dyn Location>,
    config: RouterConfig,
    definitions: Vec<RouteDefinition>,
    map_registry: Option<RouteRegistry>,
    services: ServiceRegistry,
}

impl<E> RouterBuilder<E>
where
    E: TransitionEngine + PathRecognizer,
{
    /// Start describing a router over the given engine.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            renderer: Arc::new(NullRenderer),
            location: Box::new(MemoryLocation::new()),
            config: RouterConfig::default(),
            definitions: Vec::new(),
            map_registry: None,
            services: ServiceRegistry::new(),
        }
    }

    /// Set the rendering collaborator.
    pub fn with_renderer(mut self, renderer: Arc<dyn ComponentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the URL bar collaborator.
    pub fn with_location(mut self, location: impl Location + 'static) -> Self {
        self.location = Box::new(location);
        self
    }

    /// Set the router configuration.
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Pre-register a named service for route activations.
    pub fn with_service(
        mut self,
        name: impl Into<String>,
        service: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        self.services.insert(name, service);
        self
    }

    /// Add flat route definitions.
    pub fn definitions(mut self, definitions: impl IntoIterator<Item = RouteDefinition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    /// Record routes from a DSL-style map callback.
    pub fn map(mut self, map_fn: impl FnOnce(&mut RouteMap<'_>)) -> Self {
        self.map_registry = Some(RouteRegistry::from_map(map_fn));
        self
    }

    /// Build the registry, configure the engine with the route tree, start
    /// the location collaborator, and return the running router service.
    ///
    /// Definitions are applied after the map callback's routes, so a
    /// definition wins when both claim the same route name.
    pub fn start(self) -> Result<RouterService<E>, RouterError> {
        let mut registry = self.map_registry.unwrap_or_default();
        for definition in &self.definitions {
            registry.add_definition(definition)?;
        }

        let mut engine = self.engine;
        engine.configure(registry.to_tree());

        let state = Arc::new(RouterState::default());
        let location: SharedLocation = Arc::new(Mutex::new(self.location));
        location.lock().start(true);
        engine.set_observer(Arc::new(StateObserver::new(
            Arc::clone(&state),
            Arc::clone(&location),
        )));

        let mut services = self.services;
        services.insert(
            ROUTER_SERVICE,
            Arc::clone(&state) as Arc<dyn Any + Send + Sync>,
        );

        Ok(RouterService::new(
            engine,
            registry,
            self.renderer,
            location,
            self.config,
            Arc::new(services),
            state,
        ))
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for RouterBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .field("definitions", &self.definitions)
            .finish()
    }
}
