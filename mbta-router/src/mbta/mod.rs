//! MBTA v3 API client.
//!
//! Supplies the two upstream lookups the router depends on: rail routes by
//! type, and the stops of a single route. Both are available live over
//! HTTP ([`MbtaClient`]) or offline from a snapshot file
//! ([`SnapshotClient`]).

mod client;
mod convert;
mod error;
mod snapshot;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use convert::ConversionError;
pub use error::MbtaError;
pub use snapshot::SnapshotClient;
pub use types::{
    Document, RouteAttributes, RouteResource, RoutesDocument, StopAttributes, StopResource,
    StopsDocument,
};
