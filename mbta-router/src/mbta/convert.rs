//! Conversion from MBTA DTOs to domain types.
//!
//! Resources missing an ID or the attribute we key on are rejected rather
//! than defaulted: an empty name would silently collide with other
//! nameless entities in the adjacency maps.

use crate::domain::{Route, RouteType, Stop};

use super::types::{RouteResource, RoutesDocument, StopResource, StopsDocument};

/// Error converting an API resource into a domain type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind} resource has an empty id")]
    EmptyId { kind: &'static str },

    #[error("{kind} {id} has no attributes")]
    MissingAttributes { kind: &'static str, id: String },

    #[error("{kind} {id} is missing `{field}`")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },
}

/// Convert a single route resource.
pub fn convert_route(resource: &RouteResource) -> Result<Route, ConversionError> {
    if resource.id.is_empty() {
        return Err(ConversionError::EmptyId { kind: "route" });
    }

    let attributes =
        resource
            .attributes
            .as_ref()
            .ok_or_else(|| ConversionError::MissingAttributes {
                kind: "route",
                id: resource.id.clone(),
            })?;

    let long_name =
        attributes
            .long_name
            .as_ref()
            .ok_or_else(|| ConversionError::MissingField {
                kind: "route",
                id: resource.id.clone(),
                field: "long_name",
            })?;

    Ok(Route::new(resource.id.clone(), long_name.clone()))
}

/// Convert a single stop resource.
pub fn convert_stop(resource: &StopResource) -> Result<Stop, ConversionError> {
    if resource.id.is_empty() {
        return Err(ConversionError::EmptyId { kind: "stop" });
    }

    let name = resource
        .attributes
        .as_ref()
        .ok_or_else(|| ConversionError::MissingAttributes {
            kind: "stop",
            id: resource.id.clone(),
        })?
        .name
        .as_ref()
        .ok_or_else(|| ConversionError::MissingField {
            kind: "stop",
            id: resource.id.clone(),
            field: "name",
        })?;

    Ok(Stop::new(resource.id.clone(), name.clone()))
}

/// Convert a routes document, preserving response order.
pub fn convert_routes(doc: &RoutesDocument) -> Result<Vec<Route>, ConversionError> {
    doc.data.iter().map(convert_route).collect()
}

/// Convert a stops document, preserving response order.
pub fn convert_stops(doc: &StopsDocument) -> Result<Vec<Stop>, ConversionError> {
    doc.data.iter().map(convert_stop).collect()
}

/// The route's GTFS type, if present and recognised.
pub fn route_type_of(resource: &RouteResource) -> Option<RouteType> {
    resource
        .attributes
        .as_ref()?
        .route_type
        .and_then(|code| RouteType::from_code(code).ok())
}
