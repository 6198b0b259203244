use serde::{Deserialize, Serialize};

use crate::allocation::DEFAULT_SLOT_COUNT;
use crate::error::{Error, Result};

pub const SLOT_COUNT_VAR: &str = "ROSTER_SLOT_COUNT";
pub const STRICT_LOCKS_VAR: &str = "ROSTER_STRICT_LOCKS";

/// Allocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatorConfig {
    /// Roster size rule lists are padded to
    #[serde(default = "default_slot_count")]
    pub slot_count: usize,
    /// Reject two locks on one slot instead of keeping the later one
    #[serde(default)]
    pub strict_locks: bool,
}

fn default_slot_count() -> usize {
    DEFAULT_SLOT_COUNT
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        AllocatorConfig {
            slot_count: DEFAULT_SLOT_COUNT,
            strict_locks: false,
        }
    }
}

impl AllocatorConfig {
    /// Reads overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AllocatorConfig::default();

        if let Some(raw) = lookup(SLOT_COUNT_VAR) {
            config.slot_count = raw.trim().parse().map_err(|_| Error::Config {
                key: SLOT_COUNT_VAR.to_string(),
                message: format!("expected a slot count, got {:?}", raw),
            })?;
        }

        if let Some(raw) = lookup(STRICT_LOCKS_VAR) {
            config.strict_locks = parse_flag(&raw).ok_or_else(|| Error::Config {
                key: STRICT_LOCKS_VAR.to_string(),
                message: format!("expected true/false, got {:?}", raw),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
