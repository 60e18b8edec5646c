use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Global Config stored in `OnceLock`
static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server binds; `PORT`, default 5000.
    pub port: u16,
    /// Path of the persisted JSON store; `DATA_FILE`, default `data.json`.
    pub data_file: PathBuf,
}

impl Config {
    /// Load environment variables and set defaults
    pub fn from_env() -> Self {
        dotenv().ok(); // Load .env only once

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a number"),
            data_file: PathBuf::from(
                env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string()),
            ),
        }
    }

    /// Initialize the global config
    pub fn init() {
        CONFIG
            .set(Arc::new(Self::from_env()))
            .expect("Config already initialized");
    }

    /// Safe access to Config
    pub fn get() -> Arc<Config> {
        CONFIG.get().expect("Config not initialized").clone()
    }
}
