use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::Signup;

/// One entry of a saved board layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry {
    pub signup_id: String,
    pub slot_index: usize,
}

/// Rearranges an assignment for display according to a saved layout.
///
/// Entries whose signup is present are placed first; every other position
/// is filled with the leftover entries of `slots` in their original order.
pub fn apply_view_mapping(slots: &[Option<Signup>], view: &[ViewEntry]) -> Vec<Option<Signup>> {
    if view.is_empty() {
        return slots.to_vec();
    }

    let mut arranged: Vec<Option<Option<Signup>>> = vec![None; slots.len()];
    let mut used = HashSet::new();

    for entry in view {
        if entry.slot_index >= arranged.len() {
            continue;
        }
        let found = slots.iter().enumerate().find(|(idx, s)| {
            !used.contains(idx) && matches!(s, Some(s) if s.id == entry.signup_id)
        });
        if let Some((idx, signup)) = found {
            arranged[entry.slot_index] = Some(signup.clone());
            used.insert(idx);
        }
    }

    let mut leftovers = slots
        .iter()
        .enumerate()
        .filter(|(idx, _)| !used.contains(idx))
        .map(|(_, s)| s.clone());

    arranged
        .into_iter()
        .map(|placed| placed.unwrap_or_else(|| leftovers.next().flatten()))
        .collect()
}
