//! MBTA rail route finder.
//!
//! Answers questions over the subway network: which rail routes exist,
//! which have the fewest and most stops, which stops connect routes, and
//! which sequence of routes gets you from one stop to another.

pub mod domain;
pub mod mbta;
pub mod network;
pub mod planner;
pub mod queries;
pub mod summary;
