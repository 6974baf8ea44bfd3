use crate::errors::SearchError;
use crate::geometry::Coord;
use super::NodeGraph;
use super::frontier::NO_PARENT;

/// Construct the path from the search origin to a node of the graph
/// Returns the ordered path as a vector of coordinates from origin to node
/// node_map: NodeGraph - closed nodes with their parent index and cost
/// index: usize - index of the last node in the node_map
pub(crate) fn shortest_path(node_map: &NodeGraph, index: usize) -> Result<Vec<Coord>, SearchError> {

    let mut path = Vec::new();
    let mut current_index = index;

    // Trace back from the node to the origin
    while current_index != NO_PARENT {
        match node_map.get_index(current_index) {
            Some((coord, &(parent_index, _))) => {
                path.push(*coord);
                current_index = parent_index;
            }
            None => return Err(SearchError::NoPathFound),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(SearchError::NoPathFound);
    }

    Ok(path)
}
