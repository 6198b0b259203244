//! Slot allocation for team rosters.
//!
//! Given a list of slot rules and an ordered list of signups, [`allocate`]
//! fills as many slots as possible while honouring manual locks and
//! per-slot eligibility, and returns everyone left over as alternates.

pub mod allocation;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod parser;
pub mod web;

pub use allocation::{allocate, allocate_with, Allocation, Signup, SignupStatus, SlotRule};
pub use config::AllocatorConfig;
pub use error::{AllocationError, Error, Result};
