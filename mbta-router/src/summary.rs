//! Route and stop statistics.
//!
//! Derived from a [`TransitNetwork`] without touching the search: the
//! routes with the fewest and most stops, and the interchange stops served
//! by more than one route.

use crate::domain::{Route, Stop};
use crate::network::TransitNetwork;

/// Routes with the fewest and the most stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub min_route: Route,
    pub min_count: usize,
    pub max_route: Route,
    pub max_count: usize,
}

/// A stop served by more than one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interchange {
    pub stop: Stop,
    /// Serving routes, in the order they were discovered.
    pub routes: Vec<Route>,
}

impl Interchange {
    /// Route long names joined with `", "`.
    pub fn route_names(&self) -> String {
        self.routes
            .iter()
            .map(|r| r.long_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Find the routes with the fewest and most stops.
///
/// Ties go to the route added to the network first. Returns `None` for an
/// empty network.
pub fn summarize(network: &TransitNetwork) -> Option<RouteSummary> {
    let mut routes = network
        .routes()
        .iter()
        .map(|route| (route, network.stops_for(route).map_or(0, <[Stop]>::len)));

    let (first, count) = routes.next()?;
    let mut summary = RouteSummary {
        min_route: first.clone(),
        min_count: count,
        max_route: first.clone(),
        max_count: count,
    };

    for (route, count) in routes {
        if count > summary.max_count {
            summary.max_route = route.clone();
            summary.max_count = count;
        }
        if count < summary.min_count {
            summary.min_route = route.clone();
            summary.min_count = count;
        }
    }

    Some(summary)
}

/// Stops served by two or more routes, in stop discovery order.
pub fn interchanges(network: &TransitNetwork) -> Vec<Interchange> {
    network
        .stops()
        .iter()
        .filter_map(|stop| {
            let routes = network.routes_for(stop)?;
            (routes.len() > 1).then(|| Interchange {
                stop: stop.clone(),
                routes: routes.to_vec(),
            })
        })
        .collect()
}
