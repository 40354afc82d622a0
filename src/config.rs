// File: ./src/config.rs
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

// TODO: add more counties/courts once their calendar URLs are collected
const DEFAULT_NAME: &str = "chittenden_crim";
const DEFAULT_URL: &str = "http://www.state.vt.us/courts/court_cal/cnd_cal.htm";

/// One known court calendar page. Pure declarative data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CourtCalendar {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub calendars: Vec<CourtCalendar>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendars: vec![CourtCalendar {
                name: DEFAULT_NAME.to_string(),
                url: DEFAULT_URL.to_string(),
            }],
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(path) = env::var("COURTCAL_CONFIG") {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "courtcal", "courtcal")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the calendar table from the config file, falling back to the
    /// built-in list when no file exists.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::get_path()
            && path.exists()
        {
            let content = fs::read_to_string(&path)?;
            let config = toml::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }
}
