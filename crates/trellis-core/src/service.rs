//! The transition adapter over the external router engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};
use trellis_router::{HandlerRef, Model, ModelError, RouteRegistry};

use crate::config::RouterConfig;
use crate::engine::{
    PathRecognizer, RouteInfo, TransitionEngine, TransitionError, TransitionObserver,
};
use crate::error::RouterError;
use crate::location::Location;
use crate::query::cast_query_params;
use crate::render::{ComponentRenderer, RenderArgs};
use crate::route::DefaultRoute;
use crate::services::ServiceRegistry;

/// Shared handle to the location collaborator.
pub type SharedLocation = Arc<Mutex<Box<dyn Location>>>;

/// Observable routing state shared between the router, the engine's
/// lifecycle callbacks, and the `"router"` service entry.
#[derive(Debug, Default)]
pub struct RouterState {
    inner: RwLock<StateInner>,
}

#[derive(Debug, Default)]
struct StateInner {
    current_route: Option<RouteInfo>,
    current_url: Option<String>,
    resolved_models: HashMap<String, Model>,
    last_transition_aborted: bool,
}

impl RouterState {
    /// Route info of the current route, if a transition has settled.
    pub fn current_route(&self) -> Option<RouteInfo> {
        self.inner.read().current_route.clone()
    }

    /// Dotted name of the current route.
    pub fn current_route_name(&self) -> Option<String> {
        self.inner
            .read()
            .current_route
            .as_ref()
            .map(|info| info.name.clone())
    }

    /// URL of the current route.
    pub fn current_url(&self) -> Option<String> {
        self.inner.read().current_url.clone()
    }

    /// Resolved model for a route on the active transition.
    pub fn model_for(&self, route_name: &str) -> Result<Model, ModelError> {
        self.inner
            .read()
            .resolved_models
            .get(route_name)
            .cloned()
            .ok_or_else(|| ModelError::NotResolved(route_name.to_string()))
    }

    /// Whether the most recent transition ended in an abort.
    pub fn last_transition_aborted(&self) -> bool {
        self.inner.read().last_transition_aborted
    }

    /// A new transition is resolving; previous models no longer apply.
    fn begin(&self, route_infos: &[RouteInfo]) {
        let mut inner = self.inner.write();
        inner.resolved_models.clear();
        inner.last_transition_aborted = false;
        Self::track(&mut inner, route_infos);
    }

    fn settle(&self, route_infos: &[RouteInfo]) {
        Self::track(&mut self.inner.write(), route_infos);
    }

    fn track(inner: &mut StateInner, route_infos: &[RouteInfo]) {
        if let Some(target) = route_infos.last() {
            inner.current_url = Some(target.url.clone());
            inner.current_route = Some(target.clone());
        }
    }

    pub(crate) fn set_model(&self, route_name: &str, model: Model) {
        self.inner
            .write()
            .resolved_models
            .insert(route_name.to_string(), model);
    }

    pub(crate) fn set_url(&self, url: &str) {
        self.inner.write().current_url = Some(url.to_string());
    }

    pub(crate) fn mark_aborted(&self) {
        self.inner.write().last_transition_aborted = true;
    }
}

/// Observer registered with the engine at startup: mirrors lifecycle
/// callbacks into the shared state and the location collaborator.
pub(crate) struct StateObserver {
    state: Arc<RouterState>,
    location: SharedLocation,
}

impl StateObserver {
    pub(crate) fn new(state: Arc<RouterState>, location: SharedLocation) -> Self {
        Self { state, location }
    }
}

impl TransitionObserver for StateObserver {
    fn will_transition(&self, route_infos: &[RouteInfo]) {
        self.state.begin(route_infos);
    }

    fn did_transition(&self, route_infos: &[RouteInfo]) {
        self.state.settle(route_infos);
    }

    fn model_resolved(&self, route_name: &str, model: Model) {
        self.state.set_model(route_name, model);
    }

    fn transition_did_error(&self, error: &TransitionError) {
        if error.is_aborted() {
            debug!("transition aborted by the engine");
            self.state.mark_aborted();
        }
    }

    fn update_url(&self, url: &str) {
        self.state.set_url(url);
        self.location.lock().update(url);
    }
}

/// A handler bundled with the services injected for one activation.
#[derive(Clone)]
pub struct RouteActivation {
    /// Handler driving this activation.
    pub handler: HandlerRef,
    /// Shared services available to this activation.
    pub services: Arc<ServiceRegistry>,
}

impl std::fmt::Debug for RouteActivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteActivation")
            .field("handler", &self.handler.handler_name())
            .field("services", &self.services)
            .finish()
    }
}

/// Thin façade over the external router engine.
///
/// Resolves visited paths to handlers, drives transitions, exposes the
/// current-route state, and runs route setup (model resolution + render)
/// once a transition settles.
///
/// Concurrent `visit` calls follow a last-call-wins policy: each call
/// claims a generation, and a call whose generation has been superseded
/// when its transition resolves discards its outcome.
pub struct RouterService<E> {
    engine: E,
    registry: RouteRegistry,
    renderer: Arc<dyn ComponentRenderer>,
    location: SharedLocation,
    config: RouterConfig,
    services: Arc<ServiceRegistry>,
    state: Arc<RouterState>,
    active: Mutex<Option<RouteActivation>>,
    generation: AtomicU64,
}

impl<E> RouterService<E>
where
    E: TransitionEngine + PathRecognizer,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        engine: E,
        registry: RouteRegistry,
        renderer: Arc<dyn ComponentRenderer>,
        location: SharedLocation,
        config: RouterConfig,
        services: Arc<ServiceRegistry>,
        state: Arc<RouterState>,
    ) -> Self {
        Self {
            engine,
            registry,
            renderer,
            location,
            config,
            services,
            state,
            active: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve `path` and drive a transition to its terminal route.
    ///
    /// An unmatched path logs a diagnostic and resolves without
    /// transitioning. Dynamic-segment values are forwarded to the engine in
    /// the recognizer's key order; none are forwarded when the target has
    /// no parameters.
    pub async fn visit(&self, path: &str) -> Result<(), RouterError> {
        let Some(matches) = self.engine.recognize(path) else {
            warn!(%path, "no route matched; skipping transition");
            return Ok(());
        };
        let Some(target) = matches.last() else {
            warn!(%path, "recognizer returned an empty match chain; skipping transition");
            return Ok(());
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let params = target.param_values();
        let result = self.engine.transition_to(&target.handler, &params).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(%path, "visit superseded by a later one; discarding its outcome");
            return Ok(());
        }

        match result {
            Ok(route_infos) => self.setup_route(&route_infos).await,
            Err(error) if error.is_aborted() => {
                debug!(%path, "transition aborted");
                self.state.mark_aborted();
                Ok(())
            }
            Err(error) => Err(RouterError::Transition(error)),
        }
    }

    /// Activate the terminal route of a settled transition: resolve its
    /// model, then mount its component into the render target.
    async fn setup_route(&self, route_infos: &[RouteInfo]) -> Result<(), RouterError> {
        let Some(target) = route_infos.last() else {
            return Ok(());
        };

        let activation = self.get_route(&target.name);

        if let Some(previous) = self.active.lock().take() {
            previous.handler.deactivate();
        }
        activation.handler.activate();

        let model = activation.handler.model(&target.params).await?;
        if self.config.log_models {
            debug!(route_name = %target.name, model = %model, "resolved route model");
        }
        self.state.set_model(&target.name, model.clone());

        let render_target = self
            .renderer
            .resolve_target()
            .ok_or(RouterError::MissingRenderTarget)?;
        let args = RenderArgs {
            model,
            params: target.params.clone(),
            query_params: cast_query_params(&target.query_params),
        };
        self.renderer
            .render(&activation.handler, &render_target, args, &activation.services)?;

        *self.active.lock() = Some(activation);

        Ok(())
    }

    /// Look up the handler for a route name, falling back to the default
    /// handler, and bundle it with the services for this activation.
    pub fn get_route(&self, name: &str) -> RouteActivation {
        if self.config.log_routes {
            debug!(route_name = %name, "route lookup");
        }

        let handler = self
            .registry
            .get(name)
            .and_then(|entry| entry.handler.clone())
            .unwrap_or_else(|| Arc::new(DefaultRoute::new(name)) as HandlerRef);

        RouteActivation {
            handler,
            services: Arc::clone(&self.services),
        }
    }

    /// Route info of the current route.
    pub fn current_route(&self) -> Option<RouteInfo> {
        self.state.current_route()
    }

    /// Dotted name of the current route.
    pub fn current_route_name(&self) -> Option<String> {
        self.state.current_route_name()
    }

    /// URL of the current route.
    pub fn current_url(&self) -> Option<String> {
        self.state.current_url()
    }

    /// Resolved model for a route on the active transition.
    pub fn model_for(&self, route_name: &str) -> Result<Model, ModelError> {
        self.state.model_for(route_name)
    }

    /// Shared observable state (also registered as the `"router"` service).
    pub fn state(&self) -> Arc<RouterState> {
        Arc::clone(&self.state)
    }

    /// The route registry this router was configured from.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The shared service registry.
    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// The router configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The location collaborator.
    pub fn location(&self) -> SharedLocation {
        Arc::clone(&self.location)
    }
}

impl<E> std::fmt::Debug for RouterService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterService")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}
