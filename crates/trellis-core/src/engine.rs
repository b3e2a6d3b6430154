//! External engine interfaces: path recognition and transitions.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use trellis_router::{Model, RouteNode, RouteParams};

/// One matched level of a recognized path, as produced by the external path
/// recognizer. The terminal entry names the handler a visit transitions to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedRoute {
    /// Dotted route name of the matched handler.
    pub handler: String,
    /// Dynamic-segment parameters, in the recognizer's key order.
    pub params: Vec<(String, String)>,
}

impl RecognizedRoute {
    /// Create a match for the named handler.
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            params: Vec::new(),
        }
    }

    /// Append a dynamic-segment parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Parameter values only, preserving key order.
    pub fn param_values(&self) -> Vec<String> {
        self.params.iter().map(|(_, value)| value.clone()).collect()
    }
}

/// Route info the engine reports through lifecycle callbacks and transition
/// results, outermost route first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteInfo {
    /// Dotted route name.
    pub name: String,
    /// Resolved dynamic-segment parameters.
    pub params: RouteParams,
    /// Raw query parameters for this transition.
    pub query_params: RouteParams,
    /// URL the engine resolved for this route.
    pub url: String,
}

impl RouteInfo {
    /// Create route info for the named route.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set a dynamic-segment parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set a query parameter.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }
}

/// Error surfaced by the external transition engine.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The transition was aborted. Expected cancellation; swallowed by the
    /// adapter.
    #[error("transition aborted")]
    Aborted,

    /// The transition failed.
    #[error("transition failed: {0}")]
    Failed(String),
}

impl TransitionError {
    /// Whether this error represents an expected abort.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Path recognizer collaborator.
pub trait PathRecognizer: Send + Sync {
    /// Match a URL path to its chain of route handlers, outermost first.
    /// `None` when no registered route matches.
    fn recognize(&self, path: &str) -> Option<Vec<RecognizedRoute>>;
}

/// Observer for engine lifecycle callbacks.
///
/// Implemented by the router's shared state and registered with the engine
/// at startup; the engine invokes these while a transition settles.
pub trait TransitionObserver: Send + Sync {
    /// A transition is about to resolve the given route chain.
    fn will_transition(&self, route_infos: &[RouteInfo]);

    /// A transition finished resolving the given route chain.
    fn did_transition(&self, route_infos: &[RouteInfo]);

    /// The engine resolved a model for a route on the active transition.
    fn model_resolved(&self, route_name: &str, model: Model);

    /// The engine failed a transition. Abort disposition is recorded here;
    /// error propagation stays with the caller that drove the transition.
    fn transition_did_error(&self, error: &TransitionError);

    /// The engine asks for the URL bar to change.
    fn update_url(&self, url: &str);
}

/// Transition engine collaborator.
#[async_trait]
pub trait TransitionEngine: Send + Sync {
    /// Hand the engine its route tree (the engine's `map` configuration
    /// entry point).
    fn configure(&mut self, tree: Vec<RouteNode>);

    /// Register the observer for lifecycle callbacks.
    fn set_observer(&mut self, observer: Arc<dyn TransitionObserver>);

    /// Drive a transition to the named route.
    ///
    /// `params` carries dynamic-segment values in recognizer key order and
    /// is empty when the target has none. Resolves to the route-info chain
    /// of the new active path, outermost first.
    async fn transition_to(
        &self,
        name: &str,
        params: &[String],
    ) -> Result<Vec<RouteInfo>, TransitionError>;
}
