//! In-memory collection of accepted bookings.
//!
//! The store is a plain container: it does not check ranges or conflicts.
//! Callers run candidates through [`crate::domain::overlap::validate`] first.

use log::debug;

use crate::domain::models::{Booking, BookingId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted bookings
    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// Append a booking without any validation
    pub fn insert(&mut self, booking: Booking) {
        debug!("Inserting booking {} ({} to {})", booking.id, booking.start(), booking.end());
        self.bookings.push(booking);
    }

    /// Remove the booking with the given ID.
    /// Returns false (and changes nothing) when no such booking exists.
    pub fn remove(&mut self, id: &BookingId) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|b| &b.id != id);
        let removed = self.bookings.len() != before;
        if !removed {
            debug!("Booking {} not found, nothing removed", id);
        }
        removed
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
