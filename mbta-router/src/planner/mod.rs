//! Stop-to-stop route planner.
//!
//! Answers "which routes do I take to get from stop A to stop B?" over a
//! [`TransitNetwork`](crate::network::TransitNetwork). The default search
//! is depth-first with backtracking; a breadth-first fewest-changes search
//! is available through [`SearchStrategy::FewestChanges`].

mod bfs;
mod config;
mod search;


pub use bfs::fewest_changes;
pub use config::{InvalidStrategy, SearchConfig, SearchStrategy};
pub use search::{PathError, find_path, plan};
