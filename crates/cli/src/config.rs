//! Runtime configuration, read from the environment once at startup.

use auctionhouse_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "AUCTION_LOG_FORMAT";
pub const PROMPT_VAR: &str = "AUCTION_PROMPT";

const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    /// Shown before each command; empty disables it.
    pub prompt: String,
    /// Problems found while reading the environment. Logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset variables keep
    /// their defaults; invalid ones keep their defaults and add a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using default")),
            }
        }

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        config
    }
}
