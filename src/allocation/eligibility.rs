use super::types::{Signup, SlotRule};

/// Whether `signup` may occupy a slot governed by `rule`.
///
/// Rich signups only look at `allow_rich`; the class list is never consulted
/// for them. Everyone else needs their class in a non-empty allow list.
pub fn eligible(signup: &Signup, rule: &SlotRule) -> bool {
    if signup.is_rich {
        return rule.allow_rich;
    }
    rule.allow_xinfa_list.contains(&signup.character_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_ignores_class_list() {
        let mut rich = Signup::rich("boss");
        rich.character_class = "dps".to_string();

        assert!(eligible(&rich, &SlotRule::rich_only()));
        assert!(!eligible(&rich, &SlotRule::classes(["dps"])));
    }

    #[test]
    fn class_must_be_listed() {
        let healer = Signup::new("h", "heal");
        assert!(eligible(&healer, &SlotRule::classes(["dps", "heal"])));
        assert!(!eligible(&healer, &SlotRule::classes(["dps"])));
        assert!(!eligible(&healer, &SlotRule::rich_only()));
    }

    #[test]
    fn closed_rule_accepts_nobody() {
        let rule = SlotRule::default();
        assert!(!eligible(&Signup::new("x", ""), &rule));
        assert!(!eligible(&Signup::rich("y"), &rule));
    }
}
