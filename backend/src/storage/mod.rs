//! # Storage Module
//!
//! Persistence for the booking calendar. The domain only sees the traits in
//! [`traits`]; [`json`] is the file implementation used by the app.
//!
//! Persistence is a collaborator, not part of the booking rules: the whole
//! collection is loaded once at startup and written back after each change.

pub mod json;
pub mod traits;

pub use json::{BookingConfig, BookingRepository, ConfigRepository, JsonConnection};
pub use traits::{BookingStorage, ConfigStorage, PersistenceError};
