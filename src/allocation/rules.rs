use super::types::SlotRule;

/// Slot count of a full team roster
pub const DEFAULT_SLOT_COUNT: usize = 25;

/// Pads a rule list with closed slots up to `slot_count`. Longer lists are
/// kept whole.
pub fn normalize_rules(rules: &[SlotRule], slot_count: usize) -> Vec<SlotRule> {
    let count = slot_count.max(rules.len());
    let mut normalized = rules.to_vec();
    normalized.resize_with(count, SlotRule::default);
    normalized
}
