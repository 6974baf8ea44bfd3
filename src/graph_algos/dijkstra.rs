//! Plain Dijkstra over the grid, used by the tests as a brute-force oracle
//! for the A* variants. Same move rules and pricing as the searches.

use crate::collections::FxIndexMap;
use crate::geometry::{Coord, NEIGHBOR_OFFSETS};
use crate::grid::CostGrid;

use std::{collections::BinaryHeap, cmp::Ordering};
use indexmap::map::Entry::{Occupied, Vacant};


/// Cheapest cost from start to goal, None if the goal is unreachable
pub(crate) fn dijkstra_cost(grid: &CostGrid, start: Coord, goal: Coord) -> Option<f64> {

    if !grid.is_passable(start) || !grid.is_passable(goal) {
        return None;
    }

    // Every discovered cell with the best cost seen so far, heap entries point into it by index
    let mut nodes_map: FxIndexMap<Coord, f64> = FxIndexMap::default();
    let mut nodes_to_visit: BinaryHeap<NodeId> = BinaryHeap::new();

    let start_index = nodes_map.insert_full(start, 0.0).0;
    nodes_to_visit.push(NodeId { index: start_index, cost: 0.0 });

    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        let (&node, &c) = nodes_map.get_index(index)?;

        // Stale heap entry, a cheaper path to this node was already found
        if cost > c {
            continue;
        }

        if node == goal {
            return Some(c);
        }

        for offset in NEIGHBOR_OFFSETS {
            let Some(neighbor) = node.checked_add(offset) else {
                continue;
            };
            let Some(entry_cost) = grid.cost(neighbor).filter(|v| *v >= 0.0) else {
                continue;
            };
            let new_cost = c + entry_cost + offset.step_base();

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let index = e.index();
                    e.insert(new_cost);
                    index
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        e.insert(new_cost);
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId { index: neighbor_index, cost: new_cost });
        }
    }

    None
}


/// Heap entry, reversed so BinaryHeap pops the cheapest first
#[derive(Debug)]
struct NodeId {
    index: usize,
    cost: f64,
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}
impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for NodeId {}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra_cost_open_grid() {
        let grid = CostGrid::new(4, 4, vec![0.0; 16]).unwrap();
        let cost = dijkstra_cost(&grid, Coord::new(0, 0), Coord::new(3, 1)).unwrap();
        assert!((cost - (2.0 + std::f64::consts::SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn test_dijkstra_cost_unreachable() {
        let grid = CostGrid::from_rows(&[vec![1.0, -1.0, 1.0], vec![1.0, -1.0, 1.0]]).unwrap();
        assert_eq!(dijkstra_cost(&grid, Coord::new(0, 0), Coord::new(2, 1)), None);
    }
}
