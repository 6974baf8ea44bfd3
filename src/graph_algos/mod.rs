pub mod frontier;
pub mod a_star;
pub mod bidirectional;
mod shortest_path;
#[cfg(test)]
mod dijkstra;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::geometry::Coord;
use crate::grid::CostGrid;

use std::time::Instant;

/// Closed nodes of one search direction
/// Coord: cell that has been expanded
/// The tuple contains (parent_index, g) where:
/// - parent_index is the index of the parent node in the map (NO_PARENT for the origin)
/// - g is the cost to reach this node from the origin
pub type NodeGraph = FxIndexMap<Coord, (usize, f64)>;


/// Outcome of a successful search
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Coord>, // start to end, both included
    pub total_cost: f64,
    pub expansions: usize, // nodes popped and closed
}


/// Check both endpoints before any search work is done
pub(crate) fn validate_endpoints(grid: &CostGrid, start: Coord, end: Coord) -> Result<(), SearchError> {
    for coord in [start, end] {
        if !grid.contains(coord) {
            return Err(SearchError::OutOfBounds {
                coord,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }
    for coord in [start, end] {
        if !grid.is_passable(coord) {
            return Err(SearchError::ImpassableEndpoint { coord });
        }
    }
    Ok(())
}


/// Step budget and wall-clock cutoff for one search call
pub(crate) struct Budget {
    max_expansions: Option<usize>,
    deadline: Option<Instant>,
}

impl Budget {

    pub(crate) fn start(config: &SearchConfig) -> Self {
        Self {
            max_expansions: config.max_expansions,
            // A limit too large to represent as an Instant never expires
            deadline: config.time_limit.and_then(|limit| Instant::now().checked_add(limit)),
        }
    }

    /// Fails once `expansions` reaches the cap or the deadline has passed
    pub(crate) fn check(&self, expansions: usize) -> Result<(), SearchError> {
        let over_cap = self.max_expansions.is_some_and(|max| expansions >= max);
        let over_time = self.deadline.is_some_and(|deadline| Instant::now() >= deadline);
        if over_cap || over_time {
            log::debug!("search budget exhausted after {expansions} expansions");
            return Err(SearchError::BudgetExhausted { expansions });
        }
        Ok(())
    }
}
