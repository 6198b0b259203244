use super::eligibility::eligible;
use super::types::{Signup, SlotRule};

/// Bipartite adjacency between unlocked members and open slots.
///
/// Open slots are addressed by their position in `open_slots` so match
/// state can live in a dense array. Each adjacency list is ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGraph {
    open_slots: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    pub fn build(rules: &[SlotRule], members: &[&Signup], open_slots: &[usize]) -> Self {
        let adjacency = members
            .iter()
            .map(|member| {
                open_slots
                    .iter()
                    .enumerate()
                    .filter(|(_, &slot)| eligible(member, &rules[slot]))
                    .map(|(pos, _)| pos)
                    .collect()
            })
            .collect();

        ConstraintGraph {
            open_slots: open_slots.to_vec(),
            adjacency,
        }
    }

    pub fn member_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn open_slot_count(&self) -> usize {
        self.open_slots.len()
    }

    /// Open-slot positions `member` may take
    pub fn candidates(&self, member: usize) -> &[usize] {
        &self.adjacency[member]
    }

    /// Roster slot index of an open-slot position
    pub fn slot_index(&self, pos: usize) -> usize {
        self.open_slots[pos]
    }

    /// Roster slot indices `member` may take, ascending
    pub fn eligible_slots(&self, member: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[member].iter().map(move |&pos| self.open_slots[pos])
    }
}
