use thiserror::Error;

/// Rejections raised by `allocate` before any slot is filled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("signup {signup} is locked but has no lock slot")]
    MissingLockSlot { signup: String },

    #[error("signup {signup} is locked to slot {slot}, roster has {slot_count} slots")]
    LockSlotOutOfRange {
        signup: String,
        slot: usize,
        slot_count: usize,
    },

    #[error("slot {slot} is locked by both {first} and {second}")]
    DuplicateLock {
        slot: usize,
        first: String,
        second: String,
    },

    #[error("signup id {id} appears more than once")]
    DuplicateSignupId { id: String },
}

/// Crate-level error for loaders, configuration and the binary
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration ({key}): {message}")]
    Config { key: String, message: String },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

pub type Result<T> = std::result::Result<T, Error>;
