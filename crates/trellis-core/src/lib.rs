//! Router core for the Trellis framework.
//!
//! Wraps an external path-recognition/transition engine behind trait seams
//! and drives the route lifecycle: visited paths resolve to handlers,
//! handlers resolve models, and a rendering collaborator mounts the route's
//! component. Route declarations and registry construction live in
//! `trellis-router`; this crate wires a registry to the engine and exposes
//! the running router.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use trellis_core::prelude::*;
//!
//! let router = RouterBuilder::new(engine)
//!     .with_renderer(renderer)
//!     .definitions([
//!         RouteDefinition::new("/").with_name("index").with_handler(index),
//!         RouteDefinition::new("/users/:id").with_name("users.edit").with_handler(edit),
//!     ])
//!     .start()?;
//!
//! router.visit("/users/7").await?;
//! assert_eq!(router.current_route_name().as_deref(), Some("users.edit"));
//! ```

pub mod prelude;

mod app;
mod config;
mod engine;
mod error;
mod location;
mod query;
mod render;
mod route;
mod service;
mod services;

pub use app::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use location::*;
pub use query::*;
pub use render::*;
pub use route::*;
pub use service::*;
pub use services::*;

// Re-export the routing data layer
pub use trellis_router::{
    route_name_from_handler, route_name_from_path, HandlerRef, Model, ModelError, PathOptions,
    RegistryError, RouteDefinition, RouteEntry, RouteHandler, RouteMap, RouteNode, RouteOptions,
    RouteParams, RouteRegistry,
};
