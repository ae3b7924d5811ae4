use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use tod_engine::{Category, SessionStore};

pub fn run(state_dir: &Path) -> Result<(), String> {
    let store = SessionStore::new(state_dir);
    let Some(snapshot) = store.load() else {
        println!("No saved session.");
        return Ok(());
    };

    let age = Utc::now() - snapshot.timestamp;
    let last = snapshot.last_card_type.map_or("-", Category::label);

    println!("Saved session:");
    println!("  Round: {}", snapshot.current_round);
    println!("  Last card: {last}");
    println!("  Packages: {}", snapshot.selected_package_ids.len());
    for state in &snapshot.package_states {
        println!(
            "    #{}: truth {}/{}, dare {}/{}",
            state.id,
            state.truth_index,
            state.truth_cards.len(),
            state.dare_index,
            state.dare_cards.len()
        );
    }
    println!(
        "  Saved: {}",
        format!("{}h ago", age.num_hours()).dimmed()
    );
    Ok(())
}
