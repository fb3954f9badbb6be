use dotenvy::dotenv;
use std::env;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Local file store unless `DATABASE_URL` points elsewhere.
    pub database_url: String,
    pub max_connections: u32,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        }
    }
}
