use anyhow::{Context, Result};

/// New members start from this index until their first recomputation.
pub const DEFAULT_HANDICAP: i32 = 18;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_first_name: String,
    pub admin_last_name: String,
    pub default_handicap: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .context("Cannot load ADMIN_EMAIL env variable")?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .context("Cannot load ADMIN_PASSWORD env variable")?,
            admin_first_name: std::env::var("ADMIN_FIRST_NAME")
                .unwrap_or_else(|_| "Club".to_string()),
            admin_last_name: std::env::var("ADMIN_LAST_NAME")
                .unwrap_or_else(|_| "Administrator".to_string()),
            default_handicap: match std::env::var("DEFAULT_HANDICAP") {
                Ok(value) => value.parse().context("DEFAULT_HANDICAP must be a number")?,
                Err(_) => DEFAULT_HANDICAP,
            },
        })
    }
}
