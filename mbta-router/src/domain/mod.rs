//! Domain types for the transit router.
//!
//! Routes and stops are plain value types compared structurally, so they
//! can be used directly as keys in the adjacency maps.

mod route;
mod stop;

pub use route::{InvalidRouteType, Route, RouteType};
pub use stop::Stop;
