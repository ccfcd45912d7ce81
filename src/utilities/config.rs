use std::env;
use std::path::PathBuf;

use super::constants::{
    CARDS_FILE_NAME, JUSTTCG_API_URL, OUTPUT_DIR, PRICE_MOVERS_FILE_NAME, SCRYFALL_API_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub skip_prebuild: bool,
    pub fetch_cards: bool,
    pub fetch_price_movers: bool,
    pub output_dir: String,
    pub scryfall_api_url: String,
    pub justtcg_api_url: String,
    pub justtcg_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_prebuild: false,
            fetch_cards: true,
            fetch_price_movers: true,
            output_dir: OUTPUT_DIR.to_string(),
            scryfall_api_url: SCRYFALL_API_URL.to_string(),
            justtcg_api_url: JUSTTCG_API_URL.to_string(),
            justtcg_api_key: "".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.update_from(|key| env::var(key).ok());
    }

    fn update_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(skip_prebuild) = lookup("SKIP_PREBUILD") {
            self.skip_prebuild = skip_prebuild == "true";
        }
        if let Some(fetch_cards) = lookup("FETCH_CARDS") {
            self.fetch_cards = fetch_cards == "1";
        }
        if let Some(fetch_price_movers) = lookup("FETCH_PRICE_MOVERS") {
            self.fetch_price_movers = fetch_price_movers == "1";
        }
        if let Some(output_dir) = lookup("OUTPUT_DIR").filter(|dir| !dir.is_empty()) {
            self.output_dir = output_dir;
        }
        if let Some(url) = lookup("SCRYFALL_API_URL").filter(|url| !url.is_empty()) {
            self.scryfall_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("JUSTTCG_API_URL").filter(|url| !url.is_empty()) {
            self.justtcg_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(api_key) = lookup("JUSTTCG_API_KEY") {
            self.justtcg_api_key = api_key.trim().to_string();
        }
    }

    pub fn cards_output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(CARDS_FILE_NAME)
    }

    pub fn price_movers_output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(PRICE_MOVERS_FILE_NAME)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = Config::default();
        config.update_from(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);

        assert!(!config.skip_prebuild);
        assert!(config.fetch_cards);
        assert!(config.fetch_price_movers);
        assert_eq!(config.scryfall_api_url, SCRYFALL_API_URL);
        assert!(config.justtcg_api_key.is_empty());
        assert_eq!(
            config.cards_output_path(),
            PathBuf::from("src/generated/cards.json")
        );
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("SKIP_PREBUILD", "true"),
            ("FETCH_PRICE_MOVERS", "0"),
            ("OUTPUT_DIR", "/tmp/out"),
            ("SCRYFALL_API_URL", "http://localhost:1234/"),
            ("JUSTTCG_API_KEY", " secret "),
        ]);

        assert!(config.skip_prebuild);
        assert!(config.fetch_cards);
        assert!(!config.fetch_price_movers);
        assert_eq!(config.scryfall_api_url, "http://localhost:1234");
        assert_eq!(config.justtcg_api_key, "secret");
        assert_eq!(
            config.price_movers_output_path(),
            PathBuf::from("/tmp/out/price-movers.json")
        );
    }

    #[test]
    fn test_skip_prebuild_only_accepts_true() {
        let config = config_from(&[("SKIP_PREBUILD", "1")]);
        assert!(!config.skip_prebuild);
    }
}
