use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use tod_engine::{Category, ContentCatalog, DrawnCard, GameConfig, GameEngine, Settings};

pub fn run(
    catalog_path: &Path,
    packages: &[u32],
    state_dir: &Path,
    seed: Option<u64>,
    force_new: bool,
) -> Result<(), String> {
    let catalog = ContentCatalog::load(catalog_path).map_err(|e| e.to_string())?;

    let mut config = GameConfig::default().with_state_dir(state_dir);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut engine = GameEngine::new(catalog, config);

    if force_new {
        engine.clear_saved();
    }

    let resumed = if let Some((round, last)) = engine.saved_summary() {
        let last = last.map_or("-", Category::label);
        println!(
            "Resuming saved game at round {round} (last card: {last}). Use --new to start over."
        );
        engine.resume().map_err(|e| e.to_string())?
    } else {
        false
    };

    if resumed && !packages.is_empty() {
        // A changed selection on top of a resumed session is a
        // reconciliation, not a restart.
        engine.reconcile(packages).map_err(|e| e.to_string())?;
        remember_selection(&engine, packages);
    } else if !resumed {
        let ids: Vec<u32> = if packages.is_empty() {
            engine.store().load_settings().selected_package_ids
        } else {
            packages.to_vec()
        };
        engine.start(&ids).map_err(|e| e.to_string())?;
        remember_selection(&engine, &ids);
        println!("New game started with {} package(s).", ids.len());
    }
    print_notices(&mut engine);

    println!("Commands: [t]ruth, [d]are, [p]ass, select <ids>, status, quit\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        dispatch(&mut engine, input);
        print_notices(&mut engine);
    }

    Ok(())
}

fn dispatch(engine: &mut GameEngine, input: &str) {
    let (cmd, rest) = input.split_once(' ').unwrap_or((input, ""));

    if let Some(category) = Category::parse(cmd) {
        match engine.draw(category) {
            Ok(card) => show_card(engine, &card),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
        return;
    }

    match cmd.to_lowercase().as_str() {
        "p" | "pass" => match engine.pass() {
            Ok(card) => show_card(engine, &card),
            Err(e) => println!("{}", e.to_string().yellow()),
        },
        "select" => match parse_ids(rest) {
            Ok(ids) => match engine.reconcile(&ids) {
                Ok(()) => {
                    remember_selection(engine, &ids);
                    println!("Selection updated: {} package(s) active.", ids.len());
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            Err(e) => println!("{}", e.yellow()),
        },
        "status" => show_status(engine),
        "help" | "h" => {
            println!("Commands: [t]ruth, [d]are, [p]ass, select <ids>, status, quit");
        }
        other => println!("{}", format!("unknown command: {other}").yellow()),
    }
}

fn show_card(engine: &GameEngine, card: &DrawnCard) {
    let label = match card.category {
        Category::Truth => card.category.label().cyan().bold(),
        Category::Dare => card.category.label().magenta().bold(),
    };
    println!(
        "\nRound {} — {} — {}",
        engine.session().current_round,
        card.package_name.bold(),
        label
    );
    println!("{}\n", card.text);
}

fn show_status(engine: &GameEngine) {
    println!("Round: {}", engine.session().current_round);
    match engine.session().last_draw {
        Some(last) => println!("Last card: {}", last.category),
        None => println!("Last card: -"),
    }
    for deck in engine.session().decks() {
        let name = engine
            .catalog()
            .find(deck.id)
            .map_or_else(|| format!("package {}", deck.id), |p| p.name.clone());
        println!(
            "  {name}: {} truth / {} dare remaining",
            deck.remaining(Category::Truth),
            deck.remaining(Category::Dare)
        );
    }
}

fn print_notices(engine: &mut GameEngine) {
    for notice in engine.take_notices() {
        println!("{}", notice.to_string().yellow());
    }
}

fn remember_selection(engine: &GameEngine, ids: &[u32]) {
    let settings = Settings {
        selected_package_ids: ids.to_vec(),
        ..engine.store().load_settings()
    };
    // Settings are a convenience slot; a failed write shouldn't end the game.
    if engine.store().save_settings(&settings).is_err() {
        eprintln!("warning: could not save settings");
    }
}

fn parse_ids(input: &str) -> Result<Vec<u32>, String> {
    if input.trim().is_empty() {
        return Err("usage: select <id>[,<id>...]".to_string());
    }
    input
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("not a package id: {part}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids_accepts_commas_and_spaces() {
        assert_eq!(parse_ids("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_ids("4 5").unwrap(), vec![4, 5]);
        assert_eq!(parse_ids("7").unwrap(), vec![7]);
    }

    #[test]
    fn parse_ids_rejects_garbage() {
        assert!(parse_ids("").is_err());
        assert!(parse_ids("one").is_err());
    }
}
