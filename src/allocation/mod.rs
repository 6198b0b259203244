//! Roster slot allocation.
//!
//! Cancelled signups are dropped, locked signups are pinned to their slots,
//! and the remaining signups are matched to the open slots with augmenting
//! paths (Kuhn's algorithm). Whoever is left over becomes an alternate.

pub mod types;
pub mod rules;
pub mod eligibility;
pub mod locks;
pub mod graph;
pub mod augment;
pub mod assemble;
pub mod layout;

use std::collections::HashSet;

use tracing::info;

use crate::config::AllocatorConfig;
use crate::error::AllocationError;

pub use assemble::assemble;
pub use augment::{max_matching, Matching};
pub use eligibility::eligible;
pub use graph::ConstraintGraph;
pub use layout::{apply_view_mapping, ViewEntry};
pub use locks::{filter_active, resolve_locks, LockedRoster};
pub use rules::{normalize_rules, DEFAULT_SLOT_COUNT};
pub use types::{Allocation, ClassId, Signup, SignupStatus, SlotRule};

/// Allocates signups to slots with the default (last lock wins) policy
pub fn allocate(rules: &[SlotRule], signups: &[Signup]) -> Result<Allocation, AllocationError> {
    allocate_with(rules, signups, &AllocatorConfig::default())
}

/// Allocates signups to slots.
///
/// The rule list is used as given; pad it with [`normalize_rules`] first
/// for a fixed roster size. Neither input is modified.
pub fn allocate_with(
    rules: &[SlotRule],
    signups: &[Signup],
    config: &AllocatorConfig,
) -> Result<Allocation, AllocationError> {
    let active = filter_active(signups);
    check_unique_ids(&active)?;

    let roster = resolve_locks(&active, rules.len(), config.strict_locks)?;
    let graph = ConstraintGraph::build(rules, &roster.unlocked, &roster.open_slots);
    let matching = max_matching(&graph);
    let allocation = assemble(roster, &graph, &matching);

    info!(
        slots = rules.len(),
        signups = active.len(),
        filled = allocation.filled_count(),
        alternates = allocation.alternates.len(),
        "allocation complete"
    );

    Ok(allocation)
}

fn check_unique_ids(active: &[&Signup]) -> Result<(), AllocationError> {
    let mut seen = HashSet::new();
    for signup in active {
        if !seen.insert(signup.id.as_str()) {
            return Err(AllocationError::DuplicateSignupId { id: signup.id.clone() });
        }
    }
    Ok(())
}
