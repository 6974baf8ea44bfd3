use crate::config::{QueuePolicy, SearchConfig};
use crate::errors::SearchError;
use crate::geometry::{Coord, NEIGHBOR_OFFSETS, heuristic};
use crate::grid::CostGrid;
use super::frontier::{Frontier, NO_PARENT, SearchNode};
use super::{Budget, NodeGraph, SearchResult, shortest_path, validate_endpoints};


/// Result of a single expansion step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Expanded(Coord), // node closed, neighbors queued
    Reached(usize), // target popped - index in the closed graph
    Stale, // popped coordinate was already closed, nothing done
}


/// One search direction: frontier, closed node graph and target
/// Nodes are never reopened once closed. Whether a queued node can still be
/// lowered depends on the QueuePolicy
pub struct Expansion<'g> {
    grid: &'g CostGrid,
    target: Coord,
    halt_at_target: bool,
    policy: QueuePolicy,
    frontier: Frontier,
    closed: NodeGraph,
    labelled: Vec<Coord>, // coordinates whose g was set by the last step
}

impl<'g> Expansion<'g> {

    /// Start a search direction at `origin` with an initial cost of `origin_g`
    pub fn new(grid: &'g CostGrid, origin: Coord, origin_g: f64, target: Coord, policy: QueuePolicy) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(SearchNode::new(origin, origin_g, heuristic(origin, target), NO_PARENT));

        Self {
            grid,
            target,
            halt_at_target: true,
            policy,
            frontier,
            closed: NodeGraph::default(),
            labelled: vec![origin],
        }
    }

    /// Whether popping the target ends this direction
    /// The bidirectional search keeps both directions running past their targets
    pub fn halt_at_target(mut self, halt: bool) -> Self {
        self.halt_at_target = halt;
        self
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn closed(&self) -> &NodeGraph {
        &self.closed
    }

    pub fn labelled(&self) -> &[Coord] {
        &self.labelled
    }

    pub fn expansions(&self) -> usize {
        self.closed.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Best known cost from the origin to a coordinate, closed or queued
    pub fn label(&self, coord: Coord) -> Option<f64> {
        match self.closed.get(&coord) {
            Some(&(_, g)) => Some(g),
            None => self.frontier.peek_by_coord(coord).map(|node| node.g),
        }
    }

    /// Pop the cheapest node, close it and queue its neighbors
    pub fn step(&mut self) -> Result<Step, SearchError> {
        self.labelled.clear();

        let current = self.frontier.pop_min()?;
        if self.closed.contains_key(&current.coord) {
            return Ok(Step::Stale);
        }
        let index = self.closed.insert_full(current.coord, (current.parent, current.g)).0;
        log::trace!("expand {} g={:.3} f={:.3}", current.coord, current.g, current.f());

        if self.halt_at_target && current.coord == self.target {
            return Ok(Step::Reached(index));
        }

        for offset in NEIGHBOR_OFFSETS {
            let Some(neighbor) = current.coord.checked_add(offset) else {
                continue;
            };
            if self.closed.contains_key(&neighbor) {
                continue;
            }
            // Off the grid or impassable
            let Some(entry_cost) = self.grid.cost(neighbor).filter(|c| *c >= 0.0) else {
                continue;
            };

            let g = current.g + entry_cost + offset.step_base();

            if self.frontier.contains(neighbor) {
                if self.policy == QueuePolicy::Relax && self.frontier.decrease_key(neighbor, g, index) {
                    self.labelled.push(neighbor);
                }
                continue;
            }

            let h = heuristic(neighbor, self.target);
            self.frontier.push(SearchNode::new(neighbor, g, h, index));
            self.labelled.push(neighbor);
        }

        Ok(Step::Expanded(current.coord))
    }

    /// Path from the origin to a closed or queued coordinate, origin first
    pub fn path_to(&self, coord: Coord) -> Result<Vec<Coord>, SearchError> {
        if let Some(index) = self.closed.get_index_of(&coord) {
            return shortest_path(&self.closed, index);
        }

        let node = self.frontier.peek_by_coord(coord).ok_or(SearchError::NoPathFound)?;
        let mut path = match node.parent {
            NO_PARENT => Vec::new(),
            parent => shortest_path(&self.closed, parent)?,
        };
        path.push(coord);
        Ok(path)
    }
}


/// A* Algorithm on a cost grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Expand from start until end is popped
    /// The path runs start to end with both endpoints included, the total cost
    /// is the g of the end node
    pub fn plan(&self, grid: &CostGrid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
        validate_endpoints(grid, start, end)?;
        log::debug!(
            "a* {start} -> {end} on {}x{} grid ({:?})",
            grid.width(), grid.height(), self.config.queue_policy
        );

        if start == end {
            return Ok(SearchResult { path: vec![start], total_cost: 0.0, expansions: 0 });
        }

        let budget = Budget::start(&self.config);
        let mut search = Expansion::new(grid, start, 0.0, end, self.config.queue_policy);

        while !search.is_exhausted() {
            budget.check(search.expansions())?;

            let step = search.step();
            debug_assert!(step != Err(SearchError::EmptyFrontier), "stepped an exhausted frontier");
            if let Step::Reached(index) = step? {
                let path = shortest_path(search.closed(), index)?;
                let (_, &(_, total_cost)) = search.closed().get_index(index).ok_or(SearchError::NoPathFound)?;
                log::debug!(
                    "a* found path: cost={total_cost:.3} len={} expansions={}",
                    path.len(), search.expansions()
                );
                return Ok(SearchResult { path, total_cost, expansions: search.expansions() });
            }
        }

        log::debug!("a* exhausted the frontier after {} expansions", search.expansions());
        Err(SearchError::NoPathFound)
    }
}
