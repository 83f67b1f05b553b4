//! Configuration loading for Attriboard.
//! Reads attriboard.toml from the current directory or the path in the
//! ATTRIBOARD_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

fn default_csv_path() -> String { "data/watson_healthcare_modified.csv".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self { csv_path: default_csv_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_department")]
    pub default_department: String,
}

fn default_title() -> String { "Dashboard Employee Attrition for Healthcare".to_string() }
fn default_department() -> String { "Maternity".to_string() }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_department: default_department(),
        }
    }
}

impl Config {
    /// Load configuration from attriboard.toml.
    /// Checks ATTRIBOARD_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ATTRIBOARD_CONFIG")
            .unwrap_or_else(|_| "attriboard.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy attriboard.example.toml to attriboard.toml and edit it.",
                path
            );
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
