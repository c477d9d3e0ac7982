//! # JSON Storage Module
//!
//! File-based storage for the booking calendar. Everything lives in one data
//! directory:
//!
//! ```text
//! data/
//! ├── booking_config.yaml   ← members and passphrase
//! └── boatBookings.json     ← the booking collection
//! ```
//!
//! ## File Format
//!
//! ```json
//! [
//!   {"id": "booking::1709251200000", "title": "Nabil Zahlan",
//!    "start": "2024-03-10", "end": "2024-03-13",
//!    "userId": 1, "userName": "Nabil Zahlan", "color": "#FF5733"}
//! ]
//! ```
//!
//! `end` is exclusive: the booking above occupies March 10, 11 and 12.

pub mod booking_repository;
pub mod config_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use booking_repository::BookingRepository;
pub use config_repository::{BookingConfig, ConfigRepository};
pub use connection::JsonConnection;
