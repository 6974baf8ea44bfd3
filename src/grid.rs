use crate::errors::GridError;
use crate::geometry::Coord;


/// Rectangular matrix of per-cell traversal costs
/// Stored row-major (index = y * width + x). A non-negative value is the cost
/// of entering the cell, a negative value marks the cell impassable.
/// The search only ever reads from it
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    width: usize,
    height: usize,
    costs: Vec<f64>,
}

impl CostGrid {

    /// Build a grid from a flat row-major cost vector
    pub fn new(width: usize, height: usize, costs: Vec<f64>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width.checked_mul(height).ok_or(GridError::DimensionMismatch {
            expected: usize::MAX,
            actual: costs.len(),
        })?;
        if costs.len() != expected {
            return Err(GridError::DimensionMismatch { expected, actual: costs.len() });
        }

        // NaN never compares, +inf would poison every g it touches
        if let Some(i) = costs.iter().position(|c| c.is_nan() || *c == f64::INFINITY) {
            return Err(GridError::InvalidCost {
                coord: Coord::new(i % width, i / width),
                value: costs[i],
            });
        }

        Ok(Self { width, height, costs })
    }

    /// Build a grid from rows indexed as rows[y][x]
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut costs = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows { row: y, expected: width, actual: row.len() });
            }
            costs.extend_from_slice(row);
        }
        Self::new(width, rows.len(), costs)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Cost of entering a cell, None outside the grid
    pub fn cost(&self, coord: Coord) -> Option<f64> {
        if self.contains(coord) {
            Some(self.costs[coord.y * self.width + coord.x])
        } else {
            None
        }
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        self.cost(coord).is_some_and(|c| c >= 0.0)
    }

    /// Price a path the way the search does: every cell after the first costs
    /// its entry cost plus the step base of the move into it.
    /// Returns None if the path leaves the grid, crosses an impassable cell or
    /// jumps between cells that are not 8-neighbors
    pub fn path_cost(&self, path: &[Coord]) -> Option<f64> {
        let first = path.first()?;
        if !self.is_passable(*first) {
            return None;
        }

        let mut total = 0.0;
        for pair in path.windows(2) {
            let offset = pair[0].offset_to(pair[1])?;
            if !self.is_passable(pair[1]) {
                return None;
            }
            total += self.cost(pair[1])? + offset.step_base();
        }
        Some(total)
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_indexes_by_y_then_x() {
        let grid = CostGrid::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, -1.0, 6.0]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cost(Coord::new(2, 0)), Some(3.0));
        assert_eq!(grid.cost(Coord::new(0, 1)), Some(4.0));
        assert_eq!(grid.cost(Coord::new(3, 0)), None);
        assert!(!grid.is_passable(Coord::new(1, 1)));
        assert!(grid.is_passable(Coord::new(1, 0)));
    }

    #[test]
    fn test_grid_validation() {
        assert_eq!(CostGrid::new(0, 3, vec![]), Err(GridError::EmptyGrid));
        assert_eq!(
            CostGrid::new(2, 2, vec![1.0; 3]),
            Err(GridError::DimensionMismatch { expected: 4, actual: 3 })
        );
        assert_eq!(
            CostGrid::from_rows(&[vec![1.0, 1.0], vec![1.0]]),
            Err(GridError::RaggedRows { row: 1, expected: 2, actual: 1 })
        );
        assert!(matches!(
            CostGrid::new(2, 1, vec![1.0, f64::NAN]),
            Err(GridError::InvalidCost { coord: Coord { x: 1, y: 0 }, .. })
        ));
        assert!(CostGrid::new(2, 1, vec![f64::NEG_INFINITY, 0.0]).is_ok());
    }

    #[test]
    fn test_path_cost() {
        let grid = CostGrid::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, -1.0, 6.0]]).unwrap();
        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 1)];
        let expected = (2.0 + 1.0) + (6.0 + std::f64::consts::SQRT_2);
        assert!((grid.path_cost(&path).unwrap() - expected).abs() < 1e-12);

        assert_eq!(grid.path_cost(&[Coord::new(0, 0)]), Some(0.0));
        assert_eq!(grid.path_cost(&[]), None);
        // Impassable and teleporting paths are rejected
        assert_eq!(grid.path_cost(&[Coord::new(0, 0), Coord::new(1, 1)]), None);
        assert_eq!(grid.path_cost(&[Coord::new(0, 0), Coord::new(2, 0)]), None);
    }
}
