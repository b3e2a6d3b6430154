//! Error types for the router core.

use thiserror::Error;
use trellis_router::{ModelError, RegistryError};

use crate::engine::TransitionError;
use crate::render::RenderError;

/// Errors that can occur while building or driving the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Registry construction failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// No render target element is available in the host document.
    #[error("render target element not found in the host document")]
    MissingRenderTarget,

    /// Model resolution failed during route setup.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The external engine failed a transition.
    #[error("transition error: {0}")]
    Transition(#[from] TransitionError),

    /// The rendering collaborator failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
