//! MBTA v3 API response DTOs.
//!
//! The API speaks JSON:API: every response is a `{"data": [...]}` document
//! of resources with an `id` and an `attributes` object. Only the fields
//! the router needs are modelled; everything else is ignored by serde.

use serde::Deserialize;

/// Top-level JSON:API document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: Vec<T>,
}

/// Response from `GET /routes`.
pub type RoutesDocument = Document<RouteResource>;

/// Response from `GET /stops`.
pub type StopsDocument = Document<StopResource>;

/// A route resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResource {
    pub id: String,
    pub attributes: Option<RouteAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    pub long_name: Option<String>,

    /// GTFS route type code (0 = light rail, 1 = heavy rail, ...).
    #[serde(rename = "type")]
    pub route_type: Option<i64>,
}

/// A stop resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: Option<StopAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: Option<String>,
}
