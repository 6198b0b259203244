use tracing::{debug, warn};

use super::types::Signup;
use crate::error::AllocationError;

/// Drops withdrawn signups, keeping input order
pub fn filter_active(signups: &[Signup]) -> Vec<&Signup> {
    signups.iter().filter(|s| !s.is_cancelled()).collect()
}

/// Roster state after locks have been pinned
#[derive(Debug, Clone)]
pub struct LockedRoster<'a> {
    /// Slot -> locked signup
    pub assignment: Vec<Option<&'a Signup>>,
    /// Non-locked signups in input order
    pub unlocked: Vec<&'a Signup>,
    /// Unoccupied slot indices, ascending
    pub open_slots: Vec<usize>,
    /// Locks overwritten by a later lock on the same slot
    pub displaced: Vec<&'a Signup>,
}

/// Pins every locked signup to its slot, ignoring eligibility.
///
/// A second lock on an already pinned slot replaces the first. With
/// `strict` set this is rejected instead.
pub fn resolve_locks<'a>(
    active: &[&'a Signup],
    slot_count: usize,
    strict: bool,
) -> Result<LockedRoster<'a>, AllocationError> {
    let mut assignment: Vec<Option<&'a Signup>> = vec![None; slot_count];
    let mut unlocked = Vec::new();
    let mut displaced = Vec::new();

    for &signup in active {
        if !signup.is_lock {
            unlocked.push(signup);
            continue;
        }

        let slot = signup.lock_slot.ok_or_else(|| AllocationError::MissingLockSlot {
            signup: signup.id.clone(),
        })?;
        if slot >= slot_count {
            return Err(AllocationError::LockSlotOutOfRange {
                signup: signup.id.clone(),
                slot,
                slot_count,
            });
        }

        if let Some(previous) = assignment[slot].replace(signup) {
            if strict {
                return Err(AllocationError::DuplicateLock {
                    slot,
                    first: previous.id.clone(),
                    second: signup.id.clone(),
                });
            }
            warn!(slot, displaced = %previous.id, by = %signup.id, "duplicate lock, keeping the later signup");
            displaced.push(previous);
        }
        debug!(slot, signup = %signup.id, "locked");
    }

    let open_slots = assignment
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_none())
        .map(|(idx, _)| idx)
        .collect();

    Ok(LockedRoster { assignment, unlocked, open_slots, displaced })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_signups_are_dropped_in_order() {
        let signups = vec![
            Signup::new("a", "dps"),
            Signup::new("b", "dps").cancelled_at("2024-01-01"),
            Signup::new("c", "heal").cancelled_at(""),
        ];
        let ids: Vec<&str> = filter_active(&signups).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn locks_split_roster() {
        let signups = vec![
            Signup::new("a", "dps"),
            Signup::new("l", "heal").locked_to(1),
            Signup::new("b", "tank"),
        ];
        let active = filter_active(&signups);
        let roster = resolve_locks(&active, 3, false).unwrap();

        assert_eq!(roster.assignment[1].map(|s| s.id.as_str()), Some("l"));
        assert_eq!(roster.open_slots, vec![0, 2]);
        let unlocked: Vec<&str> = roster.unlocked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(unlocked, vec!["a", "b"]);
        assert!(roster.displaced.is_empty());
    }

    #[test]
    fn later_lock_wins() {
        let signups = vec![
            Signup::new("first", "dps").locked_to(0),
            Signup::new("second", "dps").locked_to(0),
        ];
        let active = filter_active(&signups);
        let roster = resolve_locks(&active, 2, false).unwrap();

        assert_eq!(roster.assignment[0].map(|s| s.id.as_str()), Some("second"));
        assert_eq!(roster.displaced.len(), 1);
        assert_eq!(roster.displaced[0].id, "first");
        assert_eq!(roster.open_slots, vec![1]);
    }

    #[test]
    fn strict_mode_rejects_duplicate_lock() {
        let signups = vec![
            Signup::new("first", "dps").locked_to(0),
            Signup::new("second", "dps").locked_to(0),
        ];
        let active = filter_active(&signups);
        let err = resolve_locks(&active, 2, true).unwrap_err();
        assert_eq!(
            err,
            AllocationError::DuplicateLock {
                slot: 0,
                first: "first".to_string(),
                second: "second".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_lock_is_rejected() {
        let signups = vec![Signup::new("x", "dps").locked_to(5)];
        let active = filter_active(&signups);
        assert!(matches!(
            resolve_locks(&active, 5, false),
            Err(AllocationError::LockSlotOutOfRange { slot: 5, slot_count: 5, .. })
        ));
    }

    #[test]
    fn lock_without_slot_is_rejected() {
        let mut signup = Signup::new("x", "dps");
        signup.is_lock = true;
        let signups = vec![signup];
        let active = filter_active(&signups);
        assert!(matches!(
            resolve_locks(&active, 3, false),
            Err(AllocationError::MissingLockSlot { .. })
        ));
    }
}
