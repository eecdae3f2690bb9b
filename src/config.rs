//! Configuration management
//!
//! Manages app configuration: the demo credential pair and the simulated
//! latency table. Every "API call" in the app is a local operation behind a
//! fixed delay; the delays live here so tests can zero them out.

use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Demo login credentials
    #[serde(default)]
    pub demo: DemoConfig,
    /// Simulated network latency per operation
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Storage location override
    #[serde(default)]
    pub storage: StorageConfig,
}

/// The one hard-coded credential pair that `login` accepts.
///
/// There is no credential database; this is a stand-in, not an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_email")]
    pub email: String,
    #[serde(default = "default_demo_password")]
    pub password: String,
}

fn default_demo_email() -> String {
    "demo@example.com".to_string()
}

fn default_demo_password() -> String {
    "password".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            email: default_demo_email(),
            password: default_demo_password(),
        }
    }
}

/// Fixed durations each simulated operation sleeps before resolving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_signup_ms")]
    pub signup_ms: u64,
    #[serde(default = "default_logout_ms")]
    pub logout_ms: u64,
    #[serde(default = "default_update_user_ms")]
    pub update_user_ms: u64,
    #[serde(default = "default_lesson_ms")]
    pub lesson_ms: u64,
    #[serde(default = "default_community_ms")]
    pub community_ms: u64,
    #[serde(default = "default_run_code_ms")]
    pub run_code_ms: u64,
    #[serde(default = "default_save_project_ms")]
    pub save_project_ms: u64,
}

fn default_login_ms() -> u64 {
    1000
}

fn default_signup_ms() -> u64 {
    1500
}

fn default_logout_ms() -> u64 {
    500
}

fn default_update_user_ms() -> u64 {
    1000
}

fn default_lesson_ms() -> u64 {
    500
}

fn default_community_ms() -> u64 {
    1000
}

fn default_run_code_ms() -> u64 {
    1500
}

fn default_save_project_ms() -> u64 {
    1000
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            signup_ms: default_signup_ms(),
            logout_ms: default_logout_ms(),
            update_user_ms: default_update_user_ms(),
            lesson_ms: default_lesson_ms(),
            community_ms: default_community_ms(),
            run_code_ms: default_run_code_ms(),
            save_project_ms: default_save_project_ms(),
        }
    }
}

impl LatencyConfig {
    /// All delays zeroed, for tests and scripted use
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            signup_ms: 0,
            logout_ms: 0,
            update_user_ms: 0,
            lesson_ms: 0,
            community_ms: 0,
            run_code_ms: 0,
            save_project_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn signup(&self) -> Duration {
        Duration::from_millis(self.signup_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }

    pub fn update_user(&self) -> Duration {
        Duration::from_millis(self.update_user_ms)
    }

    pub fn lesson(&self) -> Duration {
        Duration::from_millis(self.lesson_ms)
    }

    pub fn community(&self) -> Duration {
        Duration::from_millis(self.community_ms)
    }

    pub fn run_code(&self) -> Duration {
        Duration::from_millis(self.run_code_ms)
    }

    pub fn save_project(&self) -> Duration {
        Duration::from_millis(self.save_project_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            latency: LatencyConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Resolve the storage directory, honoring the override
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_dir(),
        }
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "codecampus", "codecampus")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Get the data directory path
pub fn data_dir() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "codecampus", "codecampus")
        .context("Failed to get project directories")?;
    Ok(base.data_dir().to_path_buf())
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("CodeCampus Configuration");
    println!("========================");
    println!("Config file: {}", config_path()?.display());
    println!("Data dir:    {}", config.storage_dir()?.display());
    println!();
    println!("Demo login:  {}", config.demo.email);
    println!();
    println!("Simulated latency (ms):");
    println!("  login:        {}", config.latency.login_ms);
    println!("  signup:       {}", config.latency.signup_ms);
    println!("  logout:       {}", config.latency.logout_ms);
    println!("  update user:  {}", config.latency.update_user_ms);
    println!("  lesson:       {}", config.latency.lesson_ms);
    println!("  community:    {}", config.latency.community_ms);
    println!("  run code:     {}", config.latency.run_code_ms);
    println!("  save project: {}", config.latency.save_project_ms);

    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_pair() {
        let config = Config::default();
        assert_eq!(config.demo.email, "demo@example.com");
        assert_eq!(config.demo.password, "password");
    }

    #[test]
    fn latency_none_is_zero() {
        let latency = LatencyConfig::none();
        assert_eq!(latency.login(), Duration::ZERO);
        assert_eq!(latency.run_code(), Duration::ZERO);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.latency.signup_ms, 1500);
        assert_eq!(parsed.demo.email, config.demo.email);
    }
}
