use crate::geometry::Coord;

use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    OutOfBounds { coord: Coord, width: usize, height: usize }, // Endpoint lies outside the grid
    ImpassableEndpoint { coord: Coord }, // Endpoint cell has a negative cost
    NoPathFound, // Frontier(s) exhausted without reaching the goal
    EmptyFrontier, // pop_min on an empty frontier - internal invariant breach
    BudgetExhausted { expansions: usize }, // Step budget or time limit ran out
    Grid(GridError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    EmptyGrid, // Zero width or height
    DimensionMismatch { expected: usize, actual: usize }, // width * height != number of costs
    RaggedRows { row: usize, expected: usize, actual: usize },
    InvalidCost { coord: Coord, value: f64 }, // NaN or +inf
}


impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfBounds { coord, width, height } => {
                write!(f, "coordinate {coord} is outside the {width}x{height} grid")
            }
            SearchError::ImpassableEndpoint { coord } => {
                write!(f, "endpoint {coord} is impassable")
            }
            SearchError::NoPathFound => write!(f, "no path found"),
            SearchError::EmptyFrontier => write!(f, "pop from an empty frontier"),
            SearchError::BudgetExhausted { expansions } => {
                write!(f, "search budget exhausted after {expansions} expansions")
            }
            SearchError::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid has no cells"),
            GridError::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} costs, got {actual}")
            }
            GridError::RaggedRows { row, expected, actual } => {
                write!(f, "row {row} has {actual} cells, expected {expected}")
            }
            GridError::InvalidCost { coord, value } => {
                write!(f, "cell {coord} has invalid cost {value}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for GridError {}


impl From<GridError> for SearchError {
    fn from(error: GridError) -> Self {
        SearchError::Grid(error)
    }
}
