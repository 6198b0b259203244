use tracing::{debug, trace};

use super::graph::ConstraintGraph;

/// Maximum-cardinality matching between members and open slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// Open-slot position -> member
    slot_owner: Vec<Option<usize>>,
}

impl Matching {
    pub fn owner(&self, pos: usize) -> Option<usize> {
        self.slot_owner[pos]
    }

    /// Member -> open-slot position
    pub fn member_slots(&self, member_count: usize) -> Vec<Option<usize>> {
        let mut by_member = vec![None; member_count];
        for (pos, owner) in self.slot_owner.iter().enumerate() {
            if let Some(member) = *owner {
                by_member[member] = Some(pos);
            }
        }
        by_member
    }

    pub fn size(&self) -> usize {
        self.slot_owner.iter().filter(|o| o.is_some()).count()
    }
}

/// Runs one augmenting-path search per member, in member order.
///
/// Every root gets a fresh visited marker. Slot candidates are tried in
/// ascending order, so identical graphs always yield identical matchings.
pub fn max_matching(graph: &ConstraintGraph) -> Matching {
    let member_count = graph.member_count();
    let mut slot_owner = vec![None; graph.open_slot_count()];

    for member in 0..member_count {
        let mut visited = vec![false; member_count];
        if try_augment(graph, member, &mut visited, &mut slot_owner) {
            trace!(member, "augmenting path found");
        } else {
            debug!(member, "no augmenting path, member stays unmatched");
        }
    }

    Matching { slot_owner }
}

/// Depth-first search for an augmenting path rooted at `member`.
///
/// On success the path is flipped in place: each occupant along it moves
/// to its next slot and `member` takes the first slot of the path.
pub fn try_augment(
    graph: &ConstraintGraph,
    member: usize,
    visited: &mut [bool],
    slot_owner: &mut [Option<usize>],
) -> bool {
    if visited[member] {
        return false;
    }
    visited[member] = true;

    for &pos in graph.candidates(member) {
        let reachable = match slot_owner[pos] {
            None => true,
            Some(occupant) => try_augment(graph, occupant, visited, slot_owner),
        };
        if reachable {
            slot_owner[pos] = Some(member);
            return true;
        }
    }

    false
}
