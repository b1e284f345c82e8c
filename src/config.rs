use anyhow::{Context, Result, bail};
use std::env;

/// Which storage backend to construct at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub database_path: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend = match env::var("ITEMS_BACKEND")
            .unwrap_or_else(|_| "sqlite".to_string())
            .as_str()
        {
            "memory" => Backend::Memory,
            "sqlite" => Backend::Sqlite,
            other => bail!("ITEMS_BACKEND must be 'memory' or 'sqlite', got '{other}'"),
        };

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "./data.db".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            backend,
            database_path,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Storage backend: {:?}", self.backend);
        if self.backend == Backend::Sqlite {
            tracing::info!("  Database path: {}", self.database_path);
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
