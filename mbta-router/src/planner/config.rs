//! Search configuration for the route planner.

use std::fmt;
use std::str::FromStr;

/// Which search algorithm answers a stop-to-stop query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Backtracking depth-first search. Returns the first connecting path
    /// found in discovery order, not necessarily the one with the fewest
    /// routes.
    #[default]
    DepthFirst,

    /// Breadth-first search over routes. Returns a path using the fewest
    /// routes.
    FewestChanges,
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy {0:?} (expected \"depth-first\" or \"fewest-changes\")")]
pub struct InvalidStrategy(pub String);

impl FromStr for SearchStrategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(SearchStrategy::DepthFirst),
            "fewest-changes" | "bfs" => Ok(SearchStrategy::FewestChanges),
            _ => Err(InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::DepthFirst => f.write_str("depth-first"),
            SearchStrategy::FewestChanges => f.write_str("fewest-changes"),
        }
    }
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
}

impl SearchConfig {
    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
