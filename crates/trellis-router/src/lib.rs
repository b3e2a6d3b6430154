//! Route registry and tree construction for the Trellis framework.
//!
//! Trellis maps URL paths to hierarchical, dot-named route handlers. This
//! crate turns flat route definitions or a DSL-style map callback into a
//! uniquely-keyed registry (synthesizing index routes and inheriting parent
//! path segments) and converts that registry into the nested tree shape the
//! external path-recognition engine consumes:
//!
//! ```text
//! definitions                        registry                 tree
//! /          -> index                index                    index
//! /users     -> users                users                    users
//! /users/:id -> users.edit           users.edit               ├── users.edit
//!                                    users.index (synth)      └── users.index
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use trellis_router::{RouteDefinition, RouteRegistry};
//!
//! let registry = RouteRegistry::from_definitions(&[
//!     RouteDefinition::new("/").with_name("index"),
//!     RouteDefinition::new("/users").with_name("users"),
//!     RouteDefinition::new("/users/:id").with_name("users.edit"),
//! ])?;
//!
//! let tree = registry.to_tree();
//! ```

mod definition;
mod error;
mod handler;
mod map;
mod name;
mod registry;
mod tree;

pub use definition::*;
pub use error::*;
pub use handler::*;
pub use map::*;
pub use name::*;
pub use registry::*;
pub use tree::*;
