use log::{debug, info};
use shared::StoredBooking;
use std::collections::HashSet;
use std::fs;
use std::io;

use super::connection::JsonConnection;
use crate::domain::models::Booking;
use crate::domain::overlap;
use crate::mappers::BookingMapper;
use crate::storage::traits::{BookingStorage, PersistenceError};

/// JSON file repository holding the whole booking collection in
/// `boatBookings.json`
#[derive(Debug, Clone)]
pub struct BookingRepository {
    connection: JsonConnection,
}

impl BookingRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.connection.bookings_file_path(),
            source,
        }
    }

    /// Reject a collection that could not have been built through the
    /// booking form: repeated IDs or overlapping ranges
    fn check_collection(bookings: &[Booking]) -> Result<(), PersistenceError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = bookings.iter().find(|b| !seen.insert(&b.id)) {
            return Err(PersistenceError::DuplicateId {
                id: duplicate.id.to_string(),
            });
        }

        if let Some((first, second)) = overlap::find_overlapping_pair(bookings) {
            return Err(PersistenceError::Overlapping {
                first: first.id.to_string(),
                second: second.id.to_string(),
            });
        }

        Ok(())
    }
}

impl BookingStorage for BookingRepository {
    fn load(&self) -> Result<Vec<Booking>, PersistenceError> {
        let path = self.connection.bookings_file_path();

        if !path.exists() {
            debug!("No booking file at {:?}, starting empty", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| self.io_error(e))?;
        let stored: Vec<StoredBooking> = serde_json::from_str(&content)?;

        // One bad record rejects the whole file rather than loading part of it
        let bookings = stored
            .into_iter()
            .map(BookingMapper::to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Self::check_collection(&bookings)?;

        info!("Loaded {} bookings from {:?}", bookings.len(), path);
        Ok(bookings)
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), PersistenceError> {
        let path = self.connection.bookings_file_path();

        if bookings.is_empty() {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| self.io_error(e))?;
                info!("Removed booking file {:?}, no bookings left", path);
            }
            return Ok(());
        }

        let stored: Vec<StoredBooking> = bookings.iter().map(BookingMapper::to_stored).collect();
        let content = serde_json::to_string_pretty(&stored)?;

        self.connection
            .write_atomic(&path, &content)
            .map_err(|e| self.io_error(e))?;

        debug!("Saved {} bookings to {:?}", bookings.len(), path);
        Ok(())
    }
}
