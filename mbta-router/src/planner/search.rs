//! Backtracking route search.
//!
//! Finds a sequence of routes connecting two stops by walking the
//! bipartite route/stop graph depth-first: from a stop, try each route
//! serving it; if the route reaches the destination we are done, otherwise
//! ride it to each of its other stops and search again from there.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{Route, Stop};
use crate::network::TransitNetwork;

use super::config::{SearchConfig, SearchStrategy};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// No route serves the start stop
    #[error("could not find start stop: {0}")]
    StartStopNotFound(String),

    /// No route serves the end stop
    #[error("could not find end stop: {0}")]
    EndStopNotFound(String),

    /// The stops are not connected by any sequence of routes
    #[error("no connecting routes found from {from} to {to}")]
    NoPathFound { from: String, to: String },
}

/// Check both endpoints are in the network before searching.
pub(super) fn check_endpoints(
    network: &TransitNetwork,
    start: &Stop,
    end: &Stop,
) -> Result<(), PathError> {
    if !network.contains_stop(start) {
        return Err(PathError::StartStopNotFound(start.name.clone()));
    }
    if !network.contains_stop(end) {
        return Err(PathError::EndStopNotFound(end.name.clone()));
    }
    Ok(())
}

/// Find a sequence of routes from `start` to `end`.
///
/// Routes are tried in the order they serve each stop, and a route that
/// reaches `end` directly is taken immediately. The result is the first
/// path found this way; a path with fewer routes may exist (see
/// [`fewest_changes`](super::fewest_changes)).
///
/// Returns an empty sequence when `start == end`.
pub fn find_path(
    network: &TransitNetwork,
    start: &Stop,
    end: &Stop,
) -> Result<Vec<Route>, PathError> {
    check_endpoints(network, start, end)?;

    let mut search = DepthFirst {
        network,
        end,
        path: Vec::new(),
        explored: HashSet::new(),
    };

    if search.explore(start) {
        debug!(
            from = %start.name,
            to = %end.name,
            routes = search.path.len(),
            "Found path"
        );
        Ok(search.path.into_iter().cloned().collect())
    } else {
        Err(PathError::NoPathFound {
            from: start.name.clone(),
            to: end.name.clone(),
        })
    }
}

/// Find a path with the configured strategy.
pub fn plan(
    network: &TransitNetwork,
    start: &Stop,
    end: &Stop,
    config: &SearchConfig,
) -> Result<Vec<Route>, PathError> {
    match config.strategy {
        SearchStrategy::DepthFirst => find_path(network, start, end),
        SearchStrategy::FewestChanges => super::fewest_changes(network, start, end),
    }
}

/// Depth-first search state.
///
/// `explored` always equals the set of routes in `path`: a route is marked
/// before descending through it and unmarked when backtracking, so sibling
/// branches never see each other's exploration while a single branch can
/// never ride the same route twice.
struct DepthFirst<'a> {
    network: &'a TransitNetwork,
    end: &'a Stop,
    path: Vec<&'a Route>,
    explored: HashSet<&'a Route>,
}

impl<'a> DepthFirst<'a> {
    /// Search onward from `current`.
    ///
    /// On success `path` holds the full route sequence. On failure `path`
    /// and `explored` are exactly as they were on entry.
    fn explore(&mut self, current: &'a Stop) -> bool {
        if current == self.end {
            return true;
        }

        let network = self.network;
        let Some(routes) = network.routes_for(current) else {
            return false;
        };

        for route in routes {
            if self.explored.contains(route) {
                continue;
            }
            let Some(stops) = network.stops_for(route) else {
                continue;
            };

            if stops.contains(self.end) {
                self.path.push(route);
                return true;
            }

            self.path.push(route);
            self.explored.insert(route);

            for next in stops {
                if next == current {
                    continue;
                }
                trace!(stop = %next.name, route = %route.id, depth = self.path.len(), "Exploring");
                if self.explore(next) {
                    return true;
                }
            }

            self.explored.remove(route);
            self.path.pop();
        }

        false
    }
}
