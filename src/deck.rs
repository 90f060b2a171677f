//! Card Decks
//!
//! Maps plane points to cards and lines to symbols. Any two cards dealt from
//! one plane share exactly one symbol.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructor::ProjectivePlaneConstructor;
use crate::error::PlaneError;
use crate::order::OrderSelector;
use crate::point::PlanePoint;
use crate::verify::verify_point_lines_par;

/// A symbol printed on cards, identified and ordered by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol { name: name.into() }
    }

    /// Symbols named `"0"` through `"n-1"`
    pub fn default_list(n: usize) -> Vec<Symbol> {
        (0..n).map(|i| Symbol::new(i.to_string())).collect()
    }

    /// One symbol per file in `dir`, named after the file and sorted by name
    pub fn from_dir(dir: &Path) -> std::io::Result<Vec<Symbol>> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Invalid symbol directory '{}' specified", dir.display()),
            ));
        }

        let mut symbols = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                symbols.push(Symbol::new(entry.file_name().to_string_lossy().into_owned()));
            }
        }
        symbols.sort();
        Ok(symbols)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One card: the symbols of a single plane point, in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardSymbols")]
pub struct Card {
    pub symbols: Vec<Symbol>,
}

/// Card as stored on disk, before sorting and duplicate checks
#[derive(Deserialize)]
struct CardSymbols {
    symbols: Vec<Symbol>,
}

impl TryFrom<CardSymbols> for Card {
    type Error = PlaneError;

    fn try_from(raw: CardSymbols) -> Result<Self, Self::Error> {
        let count = raw.symbols.len();
        let card = Card::new(raw.symbols);
        if card.symbols.len() != count {
            return Err(PlaneError::InvalidArgument(format!(
                "card {} repeats a symbol",
                card
            )));
        }
        Ok(card)
    }
}

impl Card {
    pub fn new(mut symbols: Vec<Symbol>) -> Self {
        symbols.sort();
        symbols.dedup();
        Card { symbols }
    }

    pub fn from_point(point: &PlanePoint<Symbol>) -> Self {
        Card::new(point.lines.iter().cloned().collect())
    }

    /// Number of symbols on both cards
    pub fn shared_with(&self, other: &Card) -> usize {
        let theirs: HashSet<&Symbol> = other.symbols.iter().collect();
        self.symbols.iter().filter(|s| theirs.contains(s)).count()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "}}")
    }
}

/// A dealt deck of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Order of the plane the cards came from
    pub order: usize,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Deal `num_cards` cards over `symbols`.
    ///
    /// The plane is verified before any card is produced; a plane that fails
    /// verification yields [`PlaneError::VerificationFailed`], never a partial
    /// deck.
    pub fn deal(symbols: Vec<Symbol>, num_cards: usize, selector: &OrderSelector) -> Result<Deck, PlaneError> {
        let plane = ProjectivePlaneConstructor::with_selector(symbols, num_cards, selector)?;
        let points = plane.plane_points();

        if !verify_point_lines_par(points) {
            return Err(PlaneError::VerificationFailed);
        }

        let cards: Vec<Card> = points.iter().map(Card::from_point).collect();
        debug!("dealt {} cards with {} symbols each", cards.len(), plane.order() + 1);

        Ok(Deck { order: plane.order(), cards })
    }

    pub fn symbols_per_card(&self) -> usize {
        self.order + 1
    }

    /// Check that every two cards share exactly one symbol
    pub fn validate(&self) -> Result<(), PlaneError> {
        for (i, card) in self.cards.iter().enumerate() {
            for (j, other) in self.cards.iter().enumerate().skip(i + 1) {
                let shared = card.shared_with(other);
                if shared != 1 {
                    return Err(PlaneError::CardMismatch { left: i, right: j, shared });
                }
            }
        }
        Ok(())
    }

    /// Save cards to a JSON file
    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }

    /// Load cards from a JSON file
    pub fn load_json(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
