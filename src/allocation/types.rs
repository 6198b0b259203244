use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Class (xinfa) identifier as used by slot rules
pub type ClassId = String;

/// Eligibility rule for a single slot position. The slot's identity is its
/// index in the rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRule {
    #[serde(default)]
    pub allow_rich: bool,
    #[serde(default)]
    pub allow_xinfa_list: Vec<ClassId>,
}

impl SlotRule {
    pub fn rich_only() -> Self {
        SlotRule { allow_rich: true, allow_xinfa_list: Vec::new() }
    }

    pub fn classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ClassId>,
    {
        SlotRule {
            allow_rich: false,
            allow_xinfa_list: classes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single registration for a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub id: String,
    #[serde(default)]
    pub character_class: ClassId,
    #[serde(default)]
    pub is_rich: bool,
    #[serde(default)]
    pub is_lock: bool,
    #[serde(default)]
    pub lock_slot: Option<usize>,
    #[serde(default)]
    pub cancel_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Signup {
    pub fn new(id: impl Into<String>, character_class: impl Into<ClassId>) -> Self {
        Signup {
            id: id.into(),
            character_class: character_class.into(),
            ..Default::default()
        }
    }

    pub fn rich(id: impl Into<String>) -> Self {
        Signup {
            id: id.into(),
            is_rich: true,
            ..Default::default()
        }
    }

    pub fn locked_to(mut self, slot: usize) -> Self {
        self.is_lock = true;
        self.lock_slot = Some(slot);
        self
    }

    pub fn cancelled_at(mut self, time: impl Into<String>) -> Self {
        self.cancel_time = Some(time.into());
        self
    }

    /// A withdrawn signup has a non-empty cancel time
    pub fn is_cancelled(&self) -> bool {
        self.cancel_time.as_deref().map_or(false, |t| !t.is_empty())
    }
}

/// Outcome of one allocation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// One entry per slot rule, indexed like the rule list
    pub assignment: Vec<Option<Signup>>,
    /// Unplaced unlocked signups in input order
    pub alternates: Vec<Signup>,
    /// Locked signups overwritten by a later lock on the same slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub displaced_locks: Vec<Signup>,
}

/// Where a signup ended up after allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SignupStatus {
    Allocated { slot: usize },
    Waitlisted { position: usize },
    Unallocated,
}

impl Allocation {
    pub fn filled_count(&self) -> usize {
        self.assignment.iter().filter(|s| s.is_some()).count()
    }

    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.assignment
            .iter()
            .position(|s| s.as_ref().map_or(false, |s| s.id == id))
    }

    pub fn status_of(&self, id: &str) -> SignupStatus {
        if let Some(slot) = self.slot_of(id) {
            return SignupStatus::Allocated { slot };
        }
        match self.alternates.iter().position(|s| s.id == id) {
            Some(position) => SignupStatus::Waitlisted { position },
            None => SignupStatus::Unallocated,
        }
    }
}
