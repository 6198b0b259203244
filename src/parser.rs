use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::Reader;
use tracing::debug;

use crate::allocation::{Signup, SlotRule};
use crate::error::Result;

/// Parses a boolean value from various string representations
fn parse_bool(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower == "yes" || lower == "true" || lower == "1"
}

/// Parses a slot index, `None` if empty or invalid
fn parse_slot(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Parses an RFC 3339 timestamp, `None` if empty or invalid
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Loads the slot rule list from a JSON array
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Vec<SlotRule>> {
    let raw = fs::read_to_string(path)?;
    let rules: Vec<SlotRule> = serde_json::from_str(&raw)?;
    Ok(rules)
}

/// Loads signups from a `.json` array or a CSV file with a header row.
/// Row order is kept as the arrival order.
pub fn load_signups<P: AsRef<Path>>(path: P) -> Result<Vec<Signup>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let raw = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&raw)?);
    }
    read_signups_csv(fs::File::open(path)?)
}

/// Reads signups from CSV.
///
/// Columns are found by header name: `id`, `characterClass`, `isRich`,
/// `isLock`, `lockSlot`, `cancelTime`, `createdAt`. Only `id` is required;
/// rows with an empty id are skipped.
pub fn read_signups_csv<R: std::io::Read>(input: R) -> Result<Vec<Signup>> {
    let mut reader = Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let id_col = column("id").unwrap_or(0);
    let class_col = column("characterClass");
    let rich_col = column("isRich");
    let lock_col = column("isLock");
    let lock_slot_col = column("lockSlot");
    let cancel_col = column("cancelTime");
    let created_col = column("createdAt");

    let mut signups = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

        let id = field(Some(id_col)).trim().to_string();
        if id.is_empty() {
            continue;
        }

        signups.push(Signup {
            id,
            character_class: field(class_col).trim().to_string(),
            is_rich: parse_bool(field(rich_col)),
            is_lock: parse_bool(field(lock_col)),
            lock_slot: parse_slot(field(lock_slot_col)),
            cancel_time: non_empty(field(cancel_col)),
            created_at: parse_timestamp(field(created_col)),
        });
    }

    debug!(count = signups.len(), "signups loaded");
    Ok(signups)
}

/// Stable sort by signup time. Entries without a timestamp keep their
/// relative order after all timestamped ones.
pub fn order_by_arrival(signups: &mut [Signup]) {
    signups.sort_by_key(|s| (s.created_at.is_none(), s.created_at));
}
