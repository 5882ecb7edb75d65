use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub nats_url: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Secret used to sign blob-storage URLs.
    pub url_signing_secret: String,
    /// Directory where generated contract PDFs are stored.
    pub files_dir: String,
    /// Public base URL used when minting signed file URLs.
    pub public_base_url: String,
    /// Lifetime of signed contract-PDF URLs, in days.
    pub pdf_url_ttl_days: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            nats_url: env::var("NATS_URL")
                .unwrap_or_else(|_| "nats://localhost:4222".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            url_signing_secret: env::var("URL_SIGNING_SECRET")
                .context("URL_SIGNING_SECRET must be set")?,
            files_dir: env::var("FILES_DIR").unwrap_or_else(|_| "./data/files".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            pdf_url_ttl_days: env::var("PDF_URL_TTL_DAYS")
                .unwrap_or_else(|_| "3650".to_string())
                .parse()
                .context("PDF_URL_TTL_DAYS must be a valid number")?,
        })
    }
}
