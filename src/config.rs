use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Runtime settings, read from the environment with fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory of the JSON record files.
    pub data_dir: PathBuf,
    /// Currency code recorded on new games.
    pub currency_code: String,
    pub min_players: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            currency_code: DEFAULT_CURRENCY.to_string(),
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup("PRICE_GUESSER_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let currency_code = lookup("PRICE_GUESSER_CURRENCY")
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.currency_code);

        // Fewer than one player makes no round at all
        let min_players = lookup("PRICE_GUESSER_MIN_PLAYERS")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n >= 1)
            .unwrap_or(defaults.min_players);

        Self {
            data_dir,
            currency_code,
            min_players,
        }
    }
}
