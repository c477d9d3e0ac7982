//! Test utilities shared by the domain and storage tests.
//!
//! `TestEnvironment` owns a temporary data directory that is removed when it
//! is dropped, even if the test panics.

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Mutex;
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::domain::models::{Booking, BookingId, DateRange, MemberId, MemberRoster};
use crate::storage::traits::{BookingStorage, PersistenceError};

/// Temporary data directory with a connection pointing at it
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Booking for a member of the default roster, with a fresh ID
pub fn booking(member_id: u32, start: &str, end: &str) -> Booking {
    let roster = MemberRoster::default();
    let member = roster.find(MemberId(member_id)).unwrap();
    let range = DateRange::new(date(start), date(end)).unwrap();
    Booking::new(BookingId::next(), member, range)
}

/// In-memory `BookingStorage` that records what was saved and can be told
/// to fail every call
#[derive(Default)]
pub struct MemoryStorage {
    saved: Mutex<Vec<Booking>>,
    save_count: Mutex<usize>,
    fail: bool,
}

impl MemoryStorage {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            saved: Mutex::new(bookings),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<Booking> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    fn failure() -> PersistenceError {
        PersistenceError::Io {
            path: "memory".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "storage unavailable"),
        }
    }
}

impl BookingStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Booking>, PersistenceError> {
        if self.fail {
            return Err(Self::failure());
        }
        Ok(self.saved())
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), PersistenceError> {
        *self.save_count.lock().unwrap() += 1;
        if self.fail {
            return Err(Self::failure());
        }
        *self.saved.lock().unwrap() = bookings.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_memory_storage_failure_mode() {
        let storage = MemoryStorage::failing();
        assert!(storage.load().is_err());
        assert!(storage.save(&[]).is_err());
        assert_eq!(storage.save_count(), 1);
    }
}
