use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BistroError, Result};

/// Registered-port range accepted for the database connection.
pub const PORT_MIN: u16 = 1024;
pub const PORT_MAX: u16 = 49151;

/// Environment variable consulted for the database password, so it can stay
/// out of settings files and shell history.
pub const PASSWORD_ENV: &str = "BISTRO_DB_PASSWORD";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the bookings CSV to ingest.
    #[serde(default)]
    pub bookings_path: Option<String>,
    #[serde(default)]
    pub database: DbSettings,
    /// When set, the report is also saved as CSV at this path.
    #[serde(default)]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbSettings {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_table() -> String {
    "monthly_restaurants_report".to_string()
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            database: String::new(),
            host: default_host(),
            port: default_port(),
            table: default_table(),
        }
    }
}

fn settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bistro")
        .join("settings.json")
}

/// Load settings from an explicit file, or from the default location if it
/// exists, or fall back to defaults. An explicitly named file that cannot be
/// read or parsed is a configuration error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (settings_path(), false),
    };
    if !path.exists() {
        if explicit {
            return Err(BistroError::Config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .map_err(|e| BistroError::Config(format!("{}: {e}", path.display())))
}

impl Settings {
    /// Environment overrides sit between the settings file and CLI flags.
    pub fn apply_env(&mut self) {
        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            self.database.password = password;
        }
    }
}

/// Validate the merged configuration once, at startup. Every violation is
/// reported, not just the first.
pub fn validate(settings: &Settings) -> Result<()> {
    let mut problems = Vec::new();

    if settings.bookings_path.as_deref().map_or(true, str::is_empty) {
        problems.push("bookings path is required".to_string());
    }

    let db = &settings.database;
    if db.username.is_empty() {
        problems.push("database username is required".to_string());
    }
    if db.password.is_empty() {
        problems.push(format!(
            "database password is required (flag or {PASSWORD_ENV})"
        ));
    }
    if db.database.is_empty() {
        problems.push("database name is required".to_string());
    }
    if !(PORT_MIN..=PORT_MAX).contains(&db.port) {
        problems.push(format!(
            "port must be between {PORT_MIN} and {PORT_MAX}, got {}",
            db.port
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(BistroError::Config(problems.join("; ")))
    }
}
