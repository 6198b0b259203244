//! End-to-end allocation scenarios through the public API.

use roster_allocator::{allocate, Allocation, Signup, SignupStatus, SlotRule};

fn three_slot_rules() -> Vec<SlotRule> {
    vec![
        SlotRule::rich_only(),
        SlotRule::classes(["dps"]),
        SlotRule::classes(["heal"]),
    ]
}

fn slot_ids(allocation: &Allocation) -> Vec<Option<&str>> {
    allocation
        .assignment
        .iter()
        .map(|s| s.as_ref().map(|s| s.id.as_str()))
        .collect()
}

fn alternate_ids(allocation: &Allocation) -> Vec<&str> {
    allocation.alternates.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn each_signup_finds_its_slot() {
    let signups = vec![Signup::rich("A"), Signup::new("B", "dps"), Signup::new("C", "heal")];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();

    assert_eq!(slot_ids(&allocation), vec![Some("A"), Some("B"), Some("C")]);
    assert!(allocation.alternates.is_empty());
}

#[test]
fn earlier_signup_keeps_contested_slot() {
    let signups = vec![Signup::new("B1", "dps"), Signup::new("B2", "dps")];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();

    assert_eq!(slot_ids(&allocation), vec![None, Some("B1"), None]);
    assert_eq!(alternate_ids(&allocation), vec!["B2"]);
}

#[test]
fn lock_ignores_slot_rule() {
    let signups = vec![
        Signup::new("D", "dps"),
        Signup::new("L", "heal").locked_to(1),
    ];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();

    assert_eq!(allocation.slot_of("L"), Some(1));
    assert_eq!(alternate_ids(&allocation), vec!["D"]);
    assert!(allocation.displaced_locks.is_empty());
}

#[test]
fn cancelled_signup_disappears() {
    let signups = vec![
        Signup::new("B", "dps").cancelled_at("2024-05-01T12:00:00Z"),
        Signup::new("C", "heal"),
    ];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();

    assert_eq!(allocation.status_of("B"), SignupStatus::Unallocated);
    assert!(allocation.alternates.is_empty());
    assert_eq!(slot_ids(&allocation), vec![None, None, Some("C")]);
}

#[test]
fn cancelled_lock_never_occupies_its_slot() {
    let signups = vec![
        Signup::new("L", "dps").locked_to(1).cancelled_at("2024-05-01T12:00:00Z"),
        Signup::new("B", "dps"),
    ];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();
    assert_eq!(allocation.slot_of("B"), Some(1));
}

#[test]
fn occupant_is_moved_when_it_has_another_slot() {
    // X can sit in either slot, Y only in slot 0
    let rules = vec![SlotRule::classes(["dps", "heal"]), SlotRule::classes(["heal"])];
    let signups = vec![Signup::new("X", "heal"), Signup::new("Y", "dps")];
    let allocation = allocate(&rules, &signups).unwrap();

    assert_eq!(slot_ids(&allocation), vec![Some("Y"), Some("X")]);
    assert!(allocation.alternates.is_empty());
}

#[test]
fn occupant_stays_when_it_has_nowhere_to_go() {
    let rules = vec![SlotRule::classes(["dps", "heal"]), SlotRule::classes(["tank"])];
    let signups = vec![Signup::new("X", "heal"), Signup::new("Y", "dps")];
    let allocation = allocate(&rules, &signups).unwrap();

    assert_eq!(slot_ids(&allocation), vec![Some("X"), None]);
    assert_eq!(alternate_ids(&allocation), vec!["Y"]);
}

#[test]
fn rich_signup_needs_rich_slot_even_with_matching_class() {
    let rules = vec![SlotRule::classes(["dps"]), SlotRule::rich_only()];
    let mut boss = Signup::rich("R");
    boss.character_class = "dps".to_string();
    let allocation = allocate(&rules, &[boss, Signup::new("D", "dps")]).unwrap();

    assert_eq!(slot_ids(&allocation), vec![Some("D"), Some("R")]);
}

#[test]
fn alternates_keep_input_order() {
    let rules = vec![SlotRule::classes(["heal"])];
    let signups = vec![
        Signup::new("t1", "tank"),
        Signup::new("h1", "heal"),
        Signup::new("d1", "dps"),
        Signup::new("h2", "heal"),
        Signup::new("t2", "tank"),
    ];
    let allocation = allocate(&rules, &signups).unwrap();

    assert_eq!(allocation.slot_of("h1"), Some(0));
    assert_eq!(alternate_ids(&allocation), vec!["t1", "d1", "h2", "t2"]);
    assert_eq!(allocation.status_of("h2"), SignupStatus::Waitlisted { position: 2 });
}

#[test]
fn duplicate_lock_is_reported() {
    roster_allocator::logging::init_test();
    let signups = vec![
        Signup::new("L1", "dps").locked_to(2),
        Signup::new("L2", "tank").locked_to(2),
    ];
    let allocation = allocate(&three_slot_rules(), &signups).unwrap();

    assert_eq!(allocation.slot_of("L2"), Some(2));
    assert_eq!(allocation.displaced_locks, vec![signups[0].clone()]);
    assert_eq!(allocation.status_of("L1"), SignupStatus::Unallocated);
}

#[test]
fn inputs_are_left_untouched() {
    let rules = three_slot_rules();
    let signups = vec![Signup::new("B1", "dps"), Signup::new("B2", "dps").locked_to(0)];
    let rules_before = rules.clone();
    let signups_before = signups.clone();

    allocate(&rules, &signups).unwrap();

    assert_eq!(rules, rules_before);
    assert_eq!(signups, signups_before);
}
