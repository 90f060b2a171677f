//! Projective Plane Card Decks - Command Line Interface
//!
//! Usage:
//!   pp-cards deal [OPTIONS]      Deal and verify a deck
//!   pp-cards verify --input F    Validate a saved deck
//!   pp-cards info [OPTIONS]      Show order selection for a card count
//!   pp-cards config --output F   Write a deck configuration file

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::*;
use log::info;

use projective_plane_cards::prelude::*;
use projective_plane_cards::points_for_order;

#[derive(Parser)]
#[command(name = "pp-cards")]
#[command(about = "Deal card decks where any two cards share exactly one symbol")]
#[command(version)]
struct Cli {
    /// Output results in JSON format (for machine parsing)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal a deck and verify it
    Deal {
        /// Number of cards (overrides the config file)
        #[arg(short, long)]
        cards: Option<usize>,

        /// Number of generated symbols (overrides the config file)
        #[arg(short, long)]
        symbols: Option<usize>,

        /// Directory whose file names are used as symbols
        #[arg(short = 'd', long)]
        symbols_dir: Option<PathBuf>,

        /// Deck configuration file (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Save the dealt deck as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a deck saved with `deal --output`
    Verify {
        /// Deck JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show which plane order serves a number of cards
    Info {
        /// Number of cards (plane points)
        #[arg(short, long, default_value = "55")]
        points: usize,
    },

    /// Write a deck configuration file
    Config {
        /// Destination TOML file
        #[arg(short, long, default_value = "deck.toml")]
        output: String,

        /// Preset to write (classic, fano)
        #[arg(short, long, default_value = "classic")]
        preset: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_output = cli.json;

    let result = match cli.command {
        Commands::Deal { cards, symbols, symbols_dir, config, output } => {
            run_deal(cards, symbols, symbols_dir, config, output, json_output)
        }
        Commands::Verify { input } => run_verify(&input, json_output),
        Commands::Info { points } => show_info(points, json_output),
        Commands::Config { output, preset } => write_config(&output, &preset),
    };

    if let Err(message) = result {
        if json_output {
            eprintln!("{}", serde_json::json!({ "error": message }));
        } else {
            eprintln!("{}: {}", "Error".red(), message);
        }
        std::process::exit(1);
    }
}

fn print_banner(title: &str) {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".cyan());
    println!("{}", format!("║ {:^60} ║", title).cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".cyan());
    println!();
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn run_deal(
    cards: Option<usize>,
    symbols: Option<usize>,
    symbols_dir: Option<PathBuf>,
    config_path: Option<String>,
    output: Option<PathBuf>,
    json_output: bool,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => DeckConfig::load(&path).map_err(|e| format!("failed to load {}: {}", path, e))?,
        None => DeckConfig::default(),
    };
    if let Some(n) = cards {
        config.num_cards = n;
    }
    if let Some(n) = symbols {
        config.num_symbols = n;
    }
    if symbols_dir.is_some() {
        config.symbol_dir = symbols_dir;
    }

    if !json_output {
        print_banner("Projective Plane Card Deck");
        println!("Configuration:");
        println!("  • Cards: {}", config.num_cards);
        match &config.symbol_dir {
            Some(dir) => println!("  • Symbols: files in {}", dir.display()),
            None => println!("  • Symbols: {}", config.num_symbols),
        }
        println!();
    }

    let selector = config.selector().map_err(|e| e.to_string())?;
    let symbols = config.symbols().map_err(|e| e.to_string())?;
    let deck = Deck::deal(symbols, config.num_cards, &selector).map_err(|e| e.to_string())?;
    info!("dealt {} cards from a plane of order {}", deck.cards.len(), deck.order);

    if let Some(path) = &output {
        deck.save_json(path).map_err(|e| format!("failed to save {}: {}", path.display(), e))?;
    }

    if json_output {
        println!("{}", to_json(&deck)?);
        return Ok(());
    }

    println!("Cards ({}, {} symbols each, order {}):", deck.cards.len(), deck.symbols_per_card(), deck.order);
    println!("──────────────────────────────────────────");
    for (i, card) in deck.cards.iter().enumerate() {
        println!("  {:>3}: {}", i, card);
    }
    println!();

    deck.validate().map_err(|e| e.to_string())?;
    println!("{}", "All cards validated with no errors!".green());
    if let Some(path) = &output {
        println!("Saved deck to {}", path.display());
    }
    Ok(())
}

fn run_verify(input: &Path, json_output: bool) -> Result<(), String> {
    let deck = Deck::load_json(input).map_err(|e| format!("failed to load {}: {}", input.display(), e))?;
    let result = deck.validate();

    if json_output {
        let report = serde_json::json!({
            "cards": deck.cards.len(),
            "order": deck.order,
            "valid": result.is_ok(),
        });
        println!("{}", to_json(&report)?);
    } else {
        print_banner("Deck Validation");
        println!("  • Cards: {}", deck.cards.len());
        println!("  • Plane order: {}", deck.order);
        println!();
        if result.is_ok() {
            println!("{}", "All cards validated with no errors!".green());
        }
    }

    result.map_err(|e| e.to_string())
}

/// JSON output for order selection info
#[derive(serde::Serialize)]
struct PlaneInfo {
    requested_points: usize,
    order: usize,
    max_points: usize,
    lines_required: usize,
    lines_per_point: usize,
    points_per_line: usize,
    unused_points: usize,
    supported_orders: Vec<usize>,
}

fn show_info(points: usize, json_output: bool) -> Result<(), String> {
    let selector = OrderSelector::default();
    let order = selector.select(points).map_err(|e| e.to_string())?;
    let n = points_for_order(order);
    let k = order + 1;

    if json_output {
        let info = PlaneInfo {
            requested_points: points,
            order,
            max_points: n,
            lines_required: n,
            lines_per_point: k,
            points_per_line: k,
            unused_points: n - points,
            supported_orders: selector.orders().to_vec(),
        };
        println!("{}", to_json(&info)?);
        return Ok(());
    }

    print_banner("Projective Plane Information");
    println!("Projective Plane PG(2, {})", order);
    println!("════════════════════════════════════════");
    println!();
    println!("Basic Properties:");
    println!("  • Order: {}", order);
    println!("  • Points: {}", n);
    println!("  • Lines: {}", n);
    println!("  • Lines through each point: {}", k);
    println!("  • Points on each line: {}", k);
    println!();
    println!("Deck Mapping:");
    println!("  • Cards requested: {} of {}", points, n);
    println!("  • Symbols required: {}", n);
    println!("  • Symbols per card: {}", k);
    println!();
    println!("Supported orders: {:?} (up to {} cards)", selector.orders(), selector.max_points());
    Ok(())
}

fn write_config(output: &str, preset: &str) -> Result<(), String> {
    let config = match preset {
        "classic" => DeckConfig::classic(),
        "fano" => DeckConfig::fano(),
        other => return Err(format!("unknown preset '{}'; supported presets: classic, fano", other)),
    };
    config.save(output).map_err(|e| format!("failed to write {}: {}", output, e))?;
    println!("{} {}", "Wrote".green(), output);
    Ok(())
}
