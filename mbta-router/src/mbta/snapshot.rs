//! Offline MBTA client backed by a JSON snapshot.
//!
//! Useful for development and testing without network access. The
//! snapshot holds raw API documents, so it goes through the same
//! conversion as live responses:
//!
//! ```json
//! {
//!   "routes": {"data": [{"id": "Red", "attributes": {"long_name": "Red Line", "type": 1}}]},
//!   "stops": {"Red": {"data": [{"id": "place-alfcl", "attributes": {"name": "Alewife"}}]}}
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Route, RouteType, Stop};
use crate::network::{RouteProvider, StopProvider};

use super::convert::{convert_route, convert_stops, route_type_of};
use super::error::MbtaError;
use super::types::{RoutesDocument, StopsDocument};

#[derive(Debug, Clone, Deserialize)]
struct Snapshot {
    routes: RoutesDocument,
    #[serde(default)]
    stops: HashMap<String, StopsDocument>,
}

/// MBTA client that serves routes and stops from a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    snapshot: Snapshot,
}

impl SnapshotClient {
    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MbtaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MbtaError::Snapshot {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MbtaError> {
        let snapshot = serde_json::from_str(json).map_err(|e| MbtaError::Snapshot {
            message: format!("failed to parse snapshot: {}", e),
        })?;
        Ok(Self { snapshot })
    }
}

impl RouteProvider for SnapshotClient {
    /// Routes whose `type` is missing or unrecognised match no filter.
    async fn get_routes(&self, types: &[RouteType]) -> Result<Vec<Route>, MbtaError> {
        self.snapshot
            .routes
            .data
            .iter()
            .filter(|r| route_type_of(r).is_some_and(|t| types.contains(&t)))
            .map(|r| {
                convert_route(r).map_err(|e| MbtaError::Json {
                    message: e.to_string(),
                    body: None,
                })
            })
            .collect()
    }
}

impl StopProvider for SnapshotClient {
    async fn get_stops(&self, route: &Route) -> Result<Vec<Stop>, MbtaError> {
        let doc = self
            .snapshot
            .stops
            .get(&route.id)
            .ok_or_else(|| MbtaError::Api {
                status: 404,
                message: format!("no stops for route {} in snapshot", route.id),
            })?;

        convert_stops(doc).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}
