//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use std::path::PathBuf;

use crate::domain::models::Booking;
use crate::storage::json::BookingConfig;

/// Failure to read or write persisted bookings.
///
/// These never reach the user: a failed load starts the session empty and a
/// failed save is logged.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed booking data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid date '{value}' in stored booking {id}")]
    InvalidDate { id: String, value: String },
    #[error("Stored booking {id} ends before it starts")]
    InvalidRange { id: String },
    #[error("Stored booking id {id} appears more than once")]
    DuplicateId { id: String },
    #[error("Stored bookings {first} and {second} overlap")]
    Overlapping { first: String, second: String },
}

/// Trait defining the interface for booking persistence.
///
/// The whole collection is loaded once at startup and written back in full
/// after every change.
pub trait BookingStorage: Send + Sync {
    /// Load every stored booking; an absent store yields an empty list
    fn load(&self) -> Result<Vec<Booking>, PersistenceError>;

    /// Replace the stored collection with `bookings`
    fn save(&self, bookings: &[Booking]) -> Result<(), PersistenceError>;
}

/// Trait defining the interface for configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Get the configuration, creating the default one if none exists
    fn get_config(&self) -> anyhow::Result<BookingConfig>;

    /// Update the configuration
    fn update_config(&self, config: &BookingConfig) -> anyhow::Result<()>;
}
