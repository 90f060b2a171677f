//! Deck Configuration
//!
//! Parameters for dealing a deck: how many cards, which symbols, and which
//! plane orders may be used.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::deck::Symbol;
use crate::error::PlaneError;
use crate::order::{OrderSelector, SUPPORTED_ORDERS};
use crate::points_for_order;

/// Complete deck configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Number of cards (plane points) to deal
    pub num_cards: usize,
    /// Number of generated symbols when no symbol directory is given
    pub num_symbols: usize,
    /// Plane orders available to the order selector (each 1 or prime)
    pub supported_orders: Vec<usize>,
    /// Directory whose file names become the symbols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_dir: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            num_cards: 55,    // order 7 deck with two cards left out
            num_symbols: 57,  // 7² + 7 + 1
            supported_orders: SUPPORTED_ORDERS.to_vec(),
            symbol_dir: None,
        }
    }
}

impl DeckConfig {
    /// The 55-card, 57-symbol deck
    pub fn classic() -> Self {
        Self::default()
    }

    /// Smallest non-trivial deck: 7 cards of 3 symbols (Fano plane)
    pub fn fano() -> Self {
        Self::single_order(2)
    }

    /// Full deck of a single plane order
    pub fn single_order(order: usize) -> Self {
        let n = points_for_order(order);
        DeckConfig {
            num_cards: n,
            num_symbols: n,
            ..Default::default()
        }
    }

    pub fn selector(&self) -> Result<OrderSelector, PlaneError> {
        OrderSelector::new(self.supported_orders.iter().copied())
    }

    /// Symbols read from `symbol_dir` if set, otherwise `num_symbols`
    /// numbered symbols
    pub fn symbols(&self) -> std::io::Result<Vec<Symbol>> {
        match &self.symbol_dir {
            Some(dir) => Symbol::from_dir(dir),
            None => Ok(Symbol::default_list(self.num_symbols)),
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, toml_str)
    }

    /// Load configuration from TOML file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let toml_str = std::fs::read_to_string(path)?;
        toml::from_str(&toml_str)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = DeckConfig::default();
        assert_eq!(config.num_cards, 55);
        assert_eq!(config.num_symbols, 57);
        assert_eq!(config, DeckConfig::classic());

        let fano = DeckConfig::fano();
        assert_eq!(fano.num_cards, 7);
        assert_eq!(fano.num_symbols, 7);
    }

    #[test]
    fn test_config_serialization() {
        let config = DeckConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let recovered: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, recovered);
    }

    #[test]
    fn test_toml_save_load() {
        let mut config = DeckConfig::single_order(5);
        config.symbol_dir = Some(PathBuf::from("symbols/png"));

        let path = std::env::temp_dir().join(format!("pp-cards-{}-deck.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        config.save(&path).unwrap();
        let loaded = DeckConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_selector_from_config() {
        let mut config = DeckConfig::default();
        assert_eq!(config.selector().unwrap(), OrderSelector::default());

        config.supported_orders = vec![2, 6];
        assert_eq!(config.selector(), Err(PlaneError::UnsupportedOrder(6)));
    }

    #[test]
    fn test_generated_symbols() {
        let config = DeckConfig::fano();
        assert_eq!(config.symbols().unwrap().len(), 7);
    }
}
