//! Upstream lookup abstractions.

use std::future::Future;

use crate::domain::{Route, RouteType, Stop};
use crate::mbta::MbtaError;

/// Trait for fetching the stops served by a route.
///
/// This abstraction allows the graph builder to be tested with mock data.
/// Implementations must return the complete stop list for the route; the
/// builder cannot tell a partial list from a full one.
pub trait StopProvider {
    /// Get every stop served by `route`, in upstream order.
    fn get_stops(
        &self,
        route: &Route,
    ) -> impl Future<Output = Result<Vec<Stop>, MbtaError>> + Send;
}

/// Trait for listing routes by type.
pub trait RouteProvider {
    /// Get every route whose type is one of `types`, in upstream order.
    fn get_routes(
        &self,
        types: &[RouteType],
    ) -> impl Future<Output = Result<Vec<Route>, MbtaError>> + Send;
}
