use std::path::PathBuf;

use glampsite_storage_json::JsonStoreConfig;

pub struct Config {
    pub data_dir: PathBuf,
    pub pretty_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = std::env::var("GLAMPSITE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let pretty_json = std::env::var("GLAMPSITE_PRETTY_JSON")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);
        Self {
            data_dir,
            pretty_json,
        }
    }

    pub fn store_config(&self) -> JsonStoreConfig {
        JsonStoreConfig {
            data_dir: self.data_dir.clone(),
            pretty: self.pretty_json,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
