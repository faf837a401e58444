use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Credentials allowed to mutate contact information.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Optional override for the record the store starts with.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub defaults: Option<Map<String, Value>>,
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Server settings from `SERVER_HOST` / `SERVER_PORT`, everything else defaulted.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg
    }

    /// Read the config file if it exists, otherwise fall back to env vars; then validate.
    pub fn load_or_env() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // 环境变量中的管理员 key 与配置文件合并
        let env_keys = std::env::var("ADMIN_API_KEYS").ok();
        self.admin.merge_keys(env_keys.as_deref());
        self.contact.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AdminConfig {
    /// Merge comma-separated keys into the configured list; trims, drops empties and duplicates.
    pub fn merge_keys(&mut self, extra: Option<&str>) {
        let mut merged: Vec<String> = Vec::new();
        let from_env = extra.into_iter().flat_map(|s| s.split(','));
        for key in self.api_keys.iter().map(String::as_str).chain(from_env) {
            let key = key.trim();
            if key.is_empty() || merged.iter().any(|k| k == key) {
                continue;
            }
            merged.push(key.to_string());
        }
        self.api_keys = merged;
    }
}

impl ContactConfig {
    fn validate(&self) -> Result<()> {
        if let Some(defaults) = &self.defaults {
            if defaults.is_empty() {
                return Err(anyhow!("contact.defaults must not be empty when present"));
            }
        }
        Ok(())
    }
}
