//! Shortest paths on weighted 8-connected grids.
//!
//! Two searches share one grid model:
//! - [`AStar`]: best-first search from start to end with the octile heuristic
//! - [`BidirectionalAStar`]: forward and backward searches stepped in lockstep,
//!   stitched together where they meet
//!
//! Entering a cell costs the cell's value plus 1 for a straight step or
//! sqrt(2) for a diagonal one. Negative cells are impassable.
//!
//! ```
//! use gridnav::{CostGrid, Coord, search, bidirectional_search};
//!
//! let grid = CostGrid::from_rows(&[
//!     [1.0, 1.0, -1.0],
//!     [1.0, 1.0, 1.0],
//! ]).unwrap();
//!
//! let one_way = search(&grid, Coord::new(0, 0), Coord::new(2, 1)).unwrap();
//! let both_ways = bidirectional_search(&grid, Coord::new(0, 0), Coord::new(2, 1)).unwrap();
//!
//! assert_eq!(one_way.path.first(), Some(&Coord::new(0, 0)));
//! assert_eq!(one_way.path.last(), Some(&Coord::new(2, 1)));
//! assert!((one_way.total_cost - both_ways.total_cost).abs() < 1e-9);
//! ```

pub mod errors;
mod collections;
pub mod geometry;
pub mod grid;
pub mod config;
pub mod graph_algos;

pub use config::{MeetingRule, QueuePolicy, SearchConfig};
pub use errors::{GridError, SearchError};
pub use geometry::{Coord, heuristic};
pub use graph_algos::SearchResult;
pub use graph_algos::a_star::AStar;
pub use graph_algos::bidirectional::BidirectionalAStar;
pub use grid::CostGrid;


/// A* from start to end with the default settings
pub fn search(grid: &CostGrid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
    search_with(grid, start, end, &SearchConfig::default())
}

pub fn search_with(grid: &CostGrid, start: Coord, end: Coord, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    AStar::new(config.clone()).plan(grid, start, end)
}

/// Bidirectional A* from start to end with the default settings
pub fn bidirectional_search(grid: &CostGrid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
    bidirectional_search_with(grid, start, end, &SearchConfig::default())
}

pub fn bidirectional_search_with(grid: &CostGrid, start: Coord, end: Coord, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    BidirectionalAStar::new(config.clone()).plan(grid, start, end)
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_config_finds_bridged_route() {
        let grid = CostGrid::from_rows(&[
            [1.0, 10.0, -1.0, 10.0],
            [10.0, 1.0, -1.0, 10.0],
            [1.0, 1.0, 1.0, 1.0],
        ]).unwrap();
        let (start, end) = (Coord::new(0, 0), Coord::new(3, 0));
        let config = SearchConfig::reference();

        for result in [
            search_with(&grid, start, end, &config).unwrap(),
            bidirectional_search_with(&grid, start, end, &config).unwrap(),
        ] {
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&end));
            assert!(result.path.contains(&Coord::new(2, 2)));
            assert!((grid.path_cost(&result.path).unwrap() - result.total_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn test_errors_display() {
        let err = search(&CostGrid::new(1, 1, vec![-1.0]).unwrap(), Coord::new(0, 0), Coord::new(0, 0));
        assert_eq!(err.unwrap_err().to_string(), "endpoint (0, 0) is impassable");

        let err: SearchError = GridError::EmptyGrid.into();
        assert_eq!(err.to_string(), "invalid grid: grid has no cells");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_and_result_serde() {
        let config = SearchConfig::reference().with_max_expansions(100);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SearchConfig>(&json).unwrap(), config);

        let grid = CostGrid::new(2, 1, vec![0.0, 0.0]).unwrap();
        let result = search(&grid, Coord::new(0, 0), Coord::new(1, 0)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["path"][1]["x"], 1);
        assert_eq!(json["total_cost"], 1.0);
    }
}
