//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use trellis_core::prelude::*;
//! ```

pub use crate::{
    ComponentRenderer, Location, MemoryLocation, NullRenderer, PathRecognizer, RecognizedRoute,
    RenderArgs, RenderTarget, RouteDefinition, RouteHandler, RouteInfo, RouteOptions,
    RouteRegistry, RouterBuilder, RouterConfig, RouterError, RouterService, ServiceRegistry,
    TransitionEngine, TransitionError,
};
