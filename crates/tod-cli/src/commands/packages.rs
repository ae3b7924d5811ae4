use std::path::Path;

use colored::Colorize;

use tod_engine::ContentCatalog;

pub fn run(catalog_path: &Path) -> Result<(), String> {
    let catalog = ContentCatalog::load(catalog_path).map_err(|e| e.to_string())?;

    if catalog.list().is_empty() {
        println!("No packages in the catalog.");
        return Ok(());
    }

    println!("Available packages:\n");
    for pkg in catalog.list() {
        println!("  {:>3}  {}", pkg.id, pkg.name.bold());
        if !pkg.description.is_empty() {
            println!("       {}", pkg.description.dimmed());
        }
    }
    println!("\nStart a game with: tod play --packages <ids>");
    Ok(())
}
