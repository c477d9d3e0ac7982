//! # Domain Module
//!
//! Business logic for the family boat booking calendar, independent of any
//! UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: members, bookings, date ranges and calendar occurrences
//! - **booking_store**: in-memory collection of accepted bookings
//! - **overlap**: admission check for new bookings (the boat is exclusive)
//! - **calendar**: projects bookings onto the days of a month, month navigation
//! - **statistics**: reserved days per member
//! - **access_gate**: shared passphrase screen
//! - **booking_service**: create/delete pipeline with save-after-change
//!
//! ## Business Rules
//!
//! - Booking ranges are half-open `[start, end)`; back-to-back bookings are legal
//! - No two bookings may overlap, whichever members own them
//! - Bookings keep the member name and color they were created with
//! - There is no edit operation; corrections are delete and recreate

pub mod access_gate;
pub mod booking_service;
pub mod booking_store;
pub mod calendar;
pub mod commands;
pub mod models;
pub mod overlap;
pub mod statistics;

pub use access_gate::AccessGate;
pub use booking_service::{BookingError, BookingService};
pub use booking_store::BookingStore;
pub use calendar::{CalendarError, CalendarService, MonthProjection};
