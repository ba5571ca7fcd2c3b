use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_students_file")]
    pub students_file: String,

    #[serde(default = "default_drives_file")]
    pub drives_file: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_horizon_days")]
    pub upcoming_horizon_days: i64,
}

fn default_students_file() -> String {
    "students.json".to_string()
}
fn default_drives_file() -> String {
    "drives.json".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_horizon_days() -> i64 {
    crate::engine::DEFAULT_HORIZON_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            drives_file: default_drives_file(),
            page_size: default_page_size(),
            upcoming_horizon_days: default_horizon_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("vaxreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".vaxreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vaxreport.conf")
    }

    /// Load configuration from file. A missing or unparseable file degrades
    /// to defaults instead of aborting the command.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warning(format!("Could not read config file: {e}; using defaults"));
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("Malformed config file: {e}; using defaults"));
                Self::default()
            }
        }
    }
}
