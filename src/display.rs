use std::fs::File;
use std::io::Write;

use crate::allocation::{Allocation, Signup, SlotRule};

/// Formats a signup as `id (class)`, rich signups are tagged instead
pub fn format_signup(signup: &Signup) -> String {
    if signup.is_rich {
        format!("{} (rich)", signup.id)
    } else if signup.character_class.is_empty() {
        signup.id.clone()
    } else {
        format!("{} ({})", signup.id, signup.character_class)
    }
}

/// Short description of a slot rule for the board header column
pub fn describe_rule(rule: &SlotRule) -> String {
    match (rule.allow_rich, rule.allow_xinfa_list.is_empty()) {
        (true, true) => "rich only".to_string(),
        (false, true) => "closed".to_string(),
        (true, false) => format!("rich, {}", rule.allow_xinfa_list.join("/")),
        (false, false) => rule.allow_xinfa_list.join("/"),
    }
}

/// Renders the board: one line per slot, then alternates and displaced locks
pub fn render_board(rules: &[SlotRule], allocation: &Allocation) -> String {
    let mut out = String::new();

    for (slot, entry) in allocation.assignment.iter().enumerate() {
        let rule = rules.get(slot).map(describe_rule).unwrap_or_default();
        let occupant = match entry {
            Some(signup) if signup.is_lock => format!("{} [LOCKED]", format_signup(signup)),
            Some(signup) => format_signup(signup),
            None => "[EMPTY]".to_string(),
        };
        out.push_str(&format!("  #{:<2} {:<20} -> {}\n", slot, rule, occupant));
    }

    if !allocation.alternates.is_empty() {
        out.push_str(&format!("Alternates ({}):\n", allocation.alternates.len()));
        for (position, signup) in allocation.alternates.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", position + 1, format_signup(signup)));
        }
    }

    if !allocation.displaced_locks.is_empty() {
        out.push_str(&format!("Displaced locks ({}):\n", allocation.displaced_locks.len()));
        for signup in &allocation.displaced_locks {
            let slot = signup.lock_slot.map(|s| s.to_string()).unwrap_or_default();
            out.push_str(&format!("  - {} (slot {})\n", format_signup(signup), slot));
        }
    }

    out
}

/// Prints the board with a summary line
pub fn print_board(title: &str, rules: &[SlotRule], allocation: &Allocation) {
    println!("\n=== {} ===", title);
    println!(
        "Filled {} of {} slots, {} alternates",
        allocation.filled_count(),
        allocation.assignment.len(),
        allocation.alternates.len()
    );
    print!("{}", render_board(rules, allocation));
}

/// Writes the rendered board to a file
pub fn write_board_to_file(
    title: &str,
    rules: &[SlotRule],
    allocation: &Allocation,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    writeln!(file, "** {} **", title)?;
    write!(file, "{}", render_board(rules, allocation))?;
    Ok(())
}
