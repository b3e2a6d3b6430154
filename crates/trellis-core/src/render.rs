//! Component rendering collaborator interface.

use thiserror::Error;
use trellis_router::{HandlerRef, Model, RouteParams};

use crate::services::ServiceRegistry;

/// Target element a route component renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    /// Identifier of the host element (e.g. a DOM id).
    pub element: String,
}

impl RenderTarget {
    /// Create a target for the given host element.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
        }
    }
}

/// Arguments handed to the renderer for one route component.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Resolved route model.
    pub model: Model,
    /// Dynamic-segment parameters.
    pub params: RouteParams,
    /// Query parameters, cast to typed values.
    pub query_params: serde_json::Map<String, serde_json::Value>,
}

/// Error surfaced by the rendering collaborator.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Rendering collaborator.
pub trait ComponentRenderer: Send + Sync {
    /// Resolve the element route components render into, if one is present
    /// in the host document.
    fn resolve_target(&self) -> Option<RenderTarget>;

    /// Mount a route component into the target element.
    fn render(
        &self,
        handler: &HandlerRef,
        target: &RenderTarget,
        args: RenderArgs,
        owner: &ServiceRegistry,
    ) -> Result<(), RenderError>;
}

/// Renderer stand-in for headless embedding and tests: resolves a fixed
/// target and renders nothing.
#[derive(Debug, Clone, Default)]
pub struct NullRenderer;

impl ComponentRenderer for NullRenderer {
    fn resolve_target(&self) -> Option<RenderTarget> {
        Some(RenderTarget::new("app"))
    }

    fn render(
        &self,
        _handler: &HandlerRef,
        _target: &RenderTarget,
        _args: RenderArgs,
        _owner: &ServiceRegistry,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
