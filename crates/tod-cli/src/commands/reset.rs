use std::path::Path;

use tod_engine::SessionStore;

pub fn run(state_dir: &Path) -> Result<(), String> {
    SessionStore::new(state_dir).clear();
    println!("Saved session cleared.");
    Ok(())
}
