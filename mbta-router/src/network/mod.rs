//! Route/stop graph construction.
//!
//! The graph is rebuilt from a fresh upstream snapshot for every query and
//! discarded afterwards; nothing here is cached.

mod graph;
mod provider;

pub use graph::{BuildError, TransitNetwork};
pub use provider::{RouteProvider, StopProvider};
