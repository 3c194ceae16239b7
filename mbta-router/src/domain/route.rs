//! Route entity and route type codes.

use std::fmt;

/// A transit line.
///
/// Equality and hashing cover every field, not just the ID. Two `Route`
/// values with the same ID but different names are distinct map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// Server-assigned opaque ID (e.g. `Red`, `Green-B`).
    pub id: String,
    /// Human-readable long name (e.g. `Red Line`).
    pub long_name: String,
}

impl Route {
    /// Create a new route.
    pub fn new(id: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_name: long_name.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_name)
    }
}

/// Error returned when parsing an unknown route type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route type code: {0}")]
pub struct InvalidRouteType(pub i64);

/// GTFS route type, as used by the upstream `filter[type]` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    LightRail,
    HeavyRail,
    CommuterRail,
    Bus,
    Ferry,
}

impl RouteType {
    /// Light and heavy rail: the subway network.
    pub const RAIL: [RouteType; 2] = [RouteType::LightRail, RouteType::HeavyRail];

    /// Returns the numeric GTFS code.
    pub fn code(self) -> u8 {
        match self {
            RouteType::LightRail => 0,
            RouteType::HeavyRail => 1,
            RouteType::CommuterRail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }

    /// Parse a numeric GTFS code.
    pub fn from_code(code: i64) -> Result<Self, InvalidRouteType> {
        match code {
            0 => Ok(RouteType::LightRail),
            1 => Ok(RouteType::HeavyRail),
            2 => Ok(RouteType::CommuterRail),
            3 => Ok(RouteType::Bus),
            4 => Ok(RouteType::Ferry),
            other => Err(InvalidRouteType(other)),
        }
    }
}
