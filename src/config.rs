use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://bibliodades.db?mode=rwc".to_string());

        Self { database_url }
    }

    /// Load configuration from a named env-format properties file. A
    /// missing or unreadable file is an error, which callers should treat
    /// as fatal at startup.
    pub fn from_file(path: &str) -> Result<Self, dotenvy::Error> {
        dotenvy::from_filename(path)?;
        Ok(Self::from_env())
    }
}
