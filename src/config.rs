use std::env;

use crate::types::error::AppError;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> Result<String, AppError> {
        env::var(key).map_err(|_| AppError::Internal(format!("Environment variable {} not set", key)))
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            db_url: Self::get_env("POSTGRES_URI")?,
        })
    }
}
