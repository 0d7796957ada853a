//! Application services - use-case implementations.
//!
//! Each service receives its ports as trait objects (constructor injection),
//! keeping this layer decoupled from concrete adapters.

mod post;

pub use post::PostService;
