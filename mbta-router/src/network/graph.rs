//! Bipartite route/stop graph.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{Route, Stop};
use crate::mbta::MbtaError;

use super::provider::StopProvider;

/// Error building a [`TransitNetwork`].
///
/// A single failed lookup aborts the whole build; no partial network is
/// ever returned.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch stops for route {route_id}: {source}")]
pub struct BuildError {
    pub route_id: String,
    #[source]
    pub source: MbtaError,
}

/// Adjacency lists between routes and the stops they serve.
///
/// Holds both directions of the graph:
/// - RouteStops: route → its stops, exactly as fetched
/// - StopRoutes: stop → every route serving it, in the order routes were
///   processed
///
/// Key order is remembered separately so iteration follows discovery order.
/// The search and the aggregates are only deterministic because of this.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    routes: Vec<Route>,
    route_stops: HashMap<Route, Vec<Stop>>,
    stops: Vec<Stop>,
    stop_routes: HashMap<Stop, Vec<Route>>,
}

impl TransitNetwork {
    /// Build the network by fetching the stops of each route in turn.
    ///
    /// Lookups run sequentially, in input order. Routes repeated in the
    /// input are fetched once.
    pub async fn build<P: StopProvider>(
        provider: &P,
        routes: &[Route],
    ) -> Result<Self, BuildError> {
        let mut network = Self::default();

        for route in routes {
            if network.route_stops.contains_key(route) {
                debug!(route = %route.id, "Skipping duplicate route");
                continue;
            }

            let stops = provider
                .get_stops(route)
                .await
                .map_err(|source| BuildError {
                    route_id: route.id.clone(),
                    source,
                })?;

            debug!(route = %route.id, stops = stops.len(), "Fetched route stops");
            network.insert_route(route.clone(), stops);
        }

        info!(
            routes = network.route_count(),
            stops = network.stop_count(),
            "Built transit network"
        );

        Ok(network)
    }

    /// Build the network from already-fetched stop lists.
    pub fn from_parts(parts: impl IntoIterator<Item = (Route, Vec<Stop>)>) -> Self {
        let mut network = Self::default();
        for (route, stops) in parts {
            if !network.route_stops.contains_key(&route) {
                network.insert_route(route, stops);
            }
        }
        network
    }

    fn insert_route(&mut self, route: Route, stops: Vec<Stop>) {
        for stop in &stops {
            match self.stop_routes.get_mut(stop) {
                Some(serving) => {
                    // A route listing the same stop twice still serves it once
                    if serving.last() != Some(&route) {
                        serving.push(route.clone());
                    }
                }
                None => {
                    self.stops.push(stop.clone());
                    self.stop_routes.insert(stop.clone(), vec![route.clone()]);
                }
            }
        }

        self.routes.push(route.clone());
        self.route_stops.insert(route, stops);
    }

    /// Routes in the order they were added.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Stops in the order they were first seen.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops served by `route`, or `None` if the route is not in the network.
    pub fn stops_for(&self, route: &Route) -> Option<&[Stop]> {
        self.route_stops.get(route).map(Vec::as_slice)
    }

    /// Routes serving `stop`, or `None` if no route serves it.
    pub fn routes_for(&self, stop: &Stop) -> Option<&[Route]> {
        self.stop_routes.get(stop).map(Vec::as_slice)
    }

    /// Whether any route serves `stop`.
    pub fn contains_stop(&self, stop: &Stop) -> bool {
        self.stop_routes.contains_key(stop)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find a stop by its display name.
    ///
    /// Surrounding whitespace in `name` is ignored; otherwise the match is
    /// exact and case-sensitive. If several stops share the name, the last
    /// one encountered walking routes and their stops in order wins.
    pub fn find_stop_by_name(&self, name: &str) -> Option<&Stop> {
        let name = name.trim();
        self.routes
            .iter()
            .filter_map(|route| self.route_stops.get(route))
            .flatten()
            .filter(|stop| stop.name == name)
            .last()
    }
}
