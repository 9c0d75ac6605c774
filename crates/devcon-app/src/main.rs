//! Dev-console demo harness.
//!
//! Registers the sample cheat commands against a shared game state and
//! drives the terminal facade from a stdin read loop. Each line becomes
//! the entered message and is dispatched; unknown commands print a
//! "did you mean" list from the suggestion engine. `help` lists the
//! registered commands, `exit` quits.

mod commands;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use devcon_console::{ConsoleConfig, Terminal};

use commands::{GameState, register_cheat_commands};

/// Optional config file checked in the working directory.
const CONFIG_PATH: &str = "devcon.toml";

fn load_config() -> Result<ConsoleConfig> {
    if Path::new(CONFIG_PATH).exists() {
        let text = std::fs::read_to_string(CONFIG_PATH)?;
        let config = ConsoleConfig::from_toml_str(&text)?;
        log::info!("loaded config from {CONFIG_PATH}");
        Ok(config)
    } else {
        Ok(ConsoleConfig::default())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "starting dev console ({} suggestions, {}ms debounce)",
        config.max_suggestions,
        config.debounce_window_ms,
    );

    let state = Rc::new(RefCell::new(GameState::new()));
    let mut terminal = Terminal::new(config);
    register_cheat_commands(&mut terminal, &state);
    terminal.set_open();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "exit" | "quit" => break,
            "help" => {
                for (name, description) in terminal.commands() {
                    println!("  {name:<18} {description}");
                }
                continue;
            },
            "" => continue,
            _ => {},
        }

        terminal.set_entered_message(Some(line));
        if terminal.process_message() {
            continue;
        }
        if terminal.entered_message().is_empty() {
            // Recognized command, rejected input: the line was consumed.
            println!("rejected: {}", line.trim());
            continue;
        }
        let suggestions = terminal.autocomplete_suggestions();
        if suggestions.is_empty() {
            println!("unknown command: {}", line.trim());
        } else {
            println!("unknown command, did you mean: {}", suggestions.join(", "));
        }
    }

    terminal.set_closed();
    log::info!("dev console closed");
    Ok(())
}
