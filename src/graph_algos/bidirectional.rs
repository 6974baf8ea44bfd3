use crate::config::{MeetingRule, SearchConfig};
use crate::errors::SearchError;
use crate::geometry::Coord;
use crate::grid::CostGrid;
use super::a_star::Expansion;
use super::{Budget, SearchResult, validate_endpoints};


/// Coordinate labelled by both directions, with the cost of the stitched path
#[derive(Clone, Copy, Debug, PartialEq)]
struct Meeting {
    coord: Coord,
    cost: f64,
}


/// Meet-in-the-middle A*
/// Runs a forward search from start and a backward search from end, one
/// expansion each per round, and stitches the two halves at a meeting cell.
///
/// Both directions price a move as the entered cell's cost plus the step base.
/// The backward origin is seeded with the end cell's own cost, so a cell
/// labelled by both sides has its entry cost counted twice and the stitched
/// cost is `g_forward + g_backward - cost(meeting)`
#[derive(Clone, Debug, Default)]
pub struct BidirectionalAStar {
    config: SearchConfig,
}

impl BidirectionalAStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self, grid: &CostGrid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
        validate_endpoints(grid, start, end)?;
        log::debug!(
            "bidirectional a* {start} -> {end} on {}x{} grid ({:?}, {:?})",
            grid.width(), grid.height(), self.config.queue_policy, self.config.meeting_rule
        );

        if start == end {
            return Ok(SearchResult { path: vec![start], total_cost: 0.0, expansions: 0 });
        }

        let end_cost = grid.cost(end).ok_or(SearchError::ImpassableEndpoint { coord: end })?;
        let policy = self.config.queue_policy;
        let mut forward = Expansion::new(grid, start, 0.0, end, policy).halt_at_target(false);
        let mut backward = Expansion::new(grid, end, end_cost, start, policy).halt_at_target(false);

        let budget = Budget::start(&self.config);
        let mut best: Option<Meeting> = None;

        let meeting = loop {
            if let Some(meeting) = self.advance(&mut forward, &backward, grid, &budget, &mut best)? {
                break meeting;
            }
            if let Some(meeting) = self.advance(&mut backward, &forward, grid, &budget, &mut best)? {
                break meeting;
            }
        };

        let expansions = forward.expansions() + backward.expansions();
        let result = stitch(grid, &forward, &backward, meeting.coord, expansions)?;
        log::debug!(
            "bidirectional a* met at {}: cost={:.3} len={} expansions={}",
            meeting.coord, result.total_cost, result.path.len(), expansions
        );
        Ok(result)
    }

    /// One expansion of `active`, followed by the meeting check
    /// Returns the meeting point once the search may stop
    fn advance(
        &self,
        active: &mut Expansion<'_>,
        other: &Expansion<'_>,
        grid: &CostGrid,
        budget: &Budget,
        best: &mut Option<Meeting>,
    ) -> Result<Option<Meeting>, SearchError> {

        if active.is_exhausted() {
            return exhausted(*best);
        }
        budget.check(active.expansions() + other.expansions())?;
        let step = active.step();
        debug_assert!(step != Err(SearchError::EmptyFrontier), "stepped an exhausted frontier");
        step?;

        match self.config.meeting_rule {
            MeetingRule::FirstContact => {
                let contact = first_contact(active, other, grid);
                if contact.is_none() && active.is_exhausted() {
                    return exhausted(None);
                }
                Ok(contact)
            }
            MeetingRule::Exact => {
                for &coord in active.labelled() {
                    offer(best, coord, active, other, grid);
                }
                if active.is_exhausted() {
                    return exhausted(*best);
                }

                // No path through either frontier can undercut the best stitch anymore
                let bound = active.frontier().min_f().max(other.frontier().min_f());
                Ok(best.filter(|meeting| meeting.cost <= bound))
            }
        }
    }
}


/// A direction ran dry: the best stitch so far is the answer, or there is no path
fn exhausted(best: Option<Meeting>) -> Result<Option<Meeting>, SearchError> {
    match best {
        Some(meeting) => Ok(Some(meeting)),
        None => {
            log::debug!("bidirectional a* exhausted a frontier without meeting");
            Err(SearchError::NoPathFound)
        }
    }
}

/// Stitched cost through `coord` if both directions have labelled it
fn stitched_cost(coord: Coord, a: &Expansion<'_>, b: &Expansion<'_>, grid: &CostGrid) -> Option<f64> {
    Some(a.label(coord)? + b.label(coord)? - grid.cost(coord)?)
}

/// Record `coord` as the meeting point if it beats the best stitch so far
fn offer(best: &mut Option<Meeting>, coord: Coord, active: &Expansion<'_>, other: &Expansion<'_>, grid: &CostGrid) {
    let Some(cost) = stitched_cost(coord, active, other, grid) else {
        return;
    };
    if best.is_none_or(|meeting| cost < meeting.cost) {
        log::trace!("meeting candidate {coord} cost={cost:.3}");
        *best = Some(Meeting { coord, cost });
    }
}

/// Scan for coordinates queued in both frontiers
/// Walks the smaller frontier and looks each coordinate up in the other one.
/// Among several shared coordinates the cheapest stitch wins, then the lower coordinate
fn first_contact(a: &Expansion<'_>, b: &Expansion<'_>, grid: &CostGrid) -> Option<Meeting> {
    let (small, large) = if a.frontier().len() <= b.frontier().len() { (a, b) } else { (b, a) };

    small
        .frontier()
        .iter()
        .filter(|node| large.frontier().contains(node.coord))
        .filter_map(|node| {
            let cost = stitched_cost(node.coord, small, large, grid)?;
            Some(Meeting { coord: node.coord, cost })
        })
        .min_by(|x, y| x.cost.total_cmp(&y.cost).then(x.coord.cmp(&y.coord)))
}

/// Join the forward half start..=meeting with the backward half after the meeting cell
fn stitch(
    grid: &CostGrid,
    forward: &Expansion<'_>,
    backward: &Expansion<'_>,
    meeting: Coord,
    expansions: usize,
) -> Result<SearchResult, SearchError> {

    let total_cost = stitched_cost(meeting, forward, backward, grid).ok_or(SearchError::NoPathFound)?;

    // backward.path_to runs end..=meeting, drop the meeting cell and flip it
    let mut path = forward.path_to(meeting)?;
    let mut tail = backward.path_to(meeting)?;
    tail.pop();
    tail.reverse();
    path.extend(tail);

    Ok(SearchResult { path, total_cost, expansions })
}
