//! Fewest-changes search.
//!
//! Breadth-first search over routes: routes are nodes, and two routes are
//! adjacent when they share a stop. The first route reached that serves
//! the destination closes a path with the minimum number of routes.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::domain::{Route, Stop};
use crate::network::TransitNetwork;

use super::search::{PathError, check_endpoints};

/// Find a sequence of routes from `start` to `end` using as few routes as
/// possible.
///
/// Ties are broken by discovery order. Returns an empty sequence when
/// `start == end`.
pub fn fewest_changes(
    network: &TransitNetwork,
    start: &Stop,
    end: &Stop,
) -> Result<Vec<Route>, PathError> {
    check_endpoints(network, start, end)?;

    if start == end {
        return Ok(Vec::new());
    }

    // Route -> route it was reached from (None for routes serving start)
    let mut came_from: HashMap<&Route, Option<&Route>> = HashMap::new();
    let mut queue: VecDeque<&Route> = VecDeque::new();

    for route in network.routes_for(start).unwrap_or_default() {
        if !came_from.contains_key(route) {
            came_from.insert(route, None);
            queue.push_back(route);
        }
    }

    while let Some(route) = queue.pop_front() {
        let stops = network.stops_for(route).unwrap_or_default();

        if stops.contains(end) {
            let path = unwind(&came_from, route);
            debug!(
                from = %start.name,
                to = %end.name,
                routes = path.len(),
                explored = came_from.len(),
                "Found fewest-changes path"
            );
            return Ok(path);
        }

        for stop in stops {
            for next in network.routes_for(stop).unwrap_or_default() {
                if !came_from.contains_key(next) {
                    came_from.insert(next, Some(route));
                    queue.push_back(next);
                }
            }
        }
    }

    Err(PathError::NoPathFound {
        from: start.name.clone(),
        to: end.name.clone(),
    })
}

/// Follow `came_from` links back to a starting route.
fn unwind<'a>(
    came_from: &HashMap<&'a Route, Option<&'a Route>>,
    last: &'a Route,
) -> Vec<Route> {
    let mut path = vec![last.clone()];
    let mut current = last;
    while let Some(&Some(prev)) = came_from.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
