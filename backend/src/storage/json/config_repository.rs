//! # Booking Config Repository
//!
//! Stores the app configuration in a single YAML file,
//! `booking_config.yaml`, at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_format_version: "1.0"
//! passphrase: mamamia
//! members:
//!   - id: 1
//!     name: Nabil Zahlan
//!     color: "#FF5733"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;

use super::connection::JsonConnection;
use crate::domain::access_gate::DEFAULT_PASSPHRASE;
use crate::domain::models::{MemberRoster, RosterError};
use crate::mappers::MemberMapper;
use crate::storage::traits::ConfigStorage;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Data format version for future migrations
    pub data_format_version: String,
    /// Shared passphrase for the access screen
    pub passphrase: String,
    /// Members in legend order
    pub members: Vec<shared::Member>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            data_format_version: "1.0".to_string(),
            passphrase: DEFAULT_PASSPHRASE.to_string(),
            members: MemberRoster::default().iter().map(MemberMapper::to_dto).collect(),
        }
    }
}

impl BookingConfig {
    /// Build the member roster from the configured members
    pub fn roster(&self) -> Result<MemberRoster, RosterError> {
        MemberRoster::new(self.members.iter().cloned().map(MemberMapper::to_domain).collect())
    }
}

/// YAML-backed configuration repository
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    connection: JsonConnection,
}

impl ConfigRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Load config from file, creating default if it doesn't exist
    fn load_or_create_config(&self) -> Result<BookingConfig> {
        let config_path = self.connection.config_file_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: BookingConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = BookingConfig::default();
            self.save_config(&config)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    fn save_config(&self, config: &BookingConfig) -> Result<()> {
        let config_path = self.connection.config_file_path();
        let yaml_content = serde_yaml::to_string(config).context("Failed to serialize config")?;

        self.connection
            .write_atomic(&config_path, &yaml_content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        debug!("Saved config to {:?}", config_path);
        Ok(())
    }
}

impl ConfigStorage for ConfigRepository {
    fn get_config(&self) -> Result<BookingConfig> {
        self.load_or_create_config()
    }

    fn update_config(&self, config: &BookingConfig) -> Result<()> {
        config.roster().context("Refusing to save an invalid member list")?;
        self.save_config(config)?;
        info!("Updated config ({} members)", config.members.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;

    #[test]
    fn test_default_config_is_written_on_first_load() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());

        let config = repo.get_config().unwrap();

        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.members.len(), 3);
        assert!(env.connection.config_file_path().exists());
    }

    #[test]
    fn test_members_are_not_limited_to_three() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());
        let yaml = r##"
data_format_version: "1.0"
passphrase: ahoy
members:
  - id: 10
    name: Captain
    color: "#000000"
  - id: 11
    name: First Mate
    color: "#111111"
  - id: 12
    name: Deckhand
    color: "#222222"
  - id: 13
    name: Cook
    color: "#333333"
"##;
        fs::write(env.connection.config_file_path(), yaml).unwrap();

        let config = repo.get_config().unwrap();
        let roster = config.roster().unwrap();

        assert_eq!(config.passphrase, "ahoy");
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.members()[3].display_name, "Cook");
    }

    #[test]
    fn test_update_config_rejects_duplicate_members() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());
        let mut config = BookingConfig::default();
        config.members[1].id = config.members[0].id;

        assert!(repo.update_config(&config).is_err());
    }

    #[test]
    fn test_update_and_reload() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());
        let mut config = BookingConfig::default();
        config.passphrase = "new phrase".to_string();

        repo.update_config(&config).unwrap();

        assert_eq!(repo.get_config().unwrap().passphrase, "new phrase");
    }
}
