use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub port: u16,

    #[serde(default="default_db_path")]
    pub db_path: String,

    #[serde(default="default_refresh_interval_s")]
    pub refresh_interval_s: u64,

    #[serde(default="default_assets_path")]
    pub assets_path: String,

    #[serde(default="default_main_logo_path")]
    pub main_logo_path: String,
}

fn default_db_path() -> String {
    "./db".to_string()
}

fn default_refresh_interval_s() -> u64 {
    30
}

fn default_assets_path() -> String {
    "./assets".to_string()
}

fn default_main_logo_path() -> String {
    "/assets/logo-mfm.svg".to_string()
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(path.clone())
        .expect("Unable to read file");
    let mut result: Config = serde_json::from_str(&data)
        .unwrap_or_else(|_| panic!("{}", &format!("Could not parse JSON at {path}!")));
    if let Ok(db_path) = std::env::var("DB_PATH") {
        result.db_path = db_path;
        println!("[CONFIG] DB_PATH {}", result.db_path);
    }
    println!("[CONFIG] {:?}", result);
    result
}
