use super::augment::Matching;
use super::graph::ConstraintGraph;
use super::locks::LockedRoster;
use super::types::{Allocation, Signup};

/// Merges pinned locks with the matcher output into the final roster.
/// Unmatched members become alternates in their original order.
pub fn assemble(roster: LockedRoster<'_>, graph: &ConstraintGraph, matching: &Matching) -> Allocation {
    let LockedRoster { assignment, unlocked, displaced, .. } = roster;

    let mut slots: Vec<Option<Signup>> = assignment.into_iter().map(|s| s.cloned()).collect();
    let mut alternates = Vec::new();

    for (member, pos) in matching.member_slots(unlocked.len()).into_iter().enumerate() {
        match pos {
            Some(pos) => slots[graph.slot_index(pos)] = Some(unlocked[member].clone()),
            None => alternates.push(unlocked[member].clone()),
        }
    }

    Allocation {
        assignment: slots,
        alternates,
        displaced_locks: displaced.into_iter().cloned().collect(),
    }
}
