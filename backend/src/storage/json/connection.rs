use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "BOAT_BOOKINGS_DATA_DIR";

const BOOKINGS_FILE: &str = "boatBookings.json";
const CONFIG_FILE: &str = "booking_config.yaml";

/// JsonConnection manages the data directory holding the booking files
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self { base_directory: base_path })
    }

    /// Create a connection in the default data directory.
    ///
    /// Uses `$BOAT_BOOKINGS_DATA_DIR` when set, otherwise the platform data
    /// directory (e.g. `~/.local/share/Boat Bookings`).
    pub fn new_default() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => {
                info!("Using data directory from {}", DATA_DIR_ENV);
                PathBuf::from(dir)
            }
            None => dirs::data_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine the user data directory"))?
                .join("Boat Bookings"),
        };

        debug!("Data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn bookings_file_path(&self) -> PathBuf {
        self.base_directory.join(BOOKINGS_FILE)
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE)
    }

    /// Atomic write using a temp file next to the target
    pub fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, path)
    }
}
