use chrono::NaiveDate;
use log::{info, warn};
use shared::{BookingStatistics, DATE_FORMAT};

use crate::domain::booking_store::BookingStore;
use crate::domain::commands::bookings::{
    CreateBookingCommand, CreateBookingResult, DeleteBookingCommand, DeleteBookingResult,
};
use crate::domain::models::{Booking, BookingId, MemberId, MemberRoster, ValidationError};
use crate::domain::{overlap, statistics};
use crate::storage::traits::BookingStorage;

/// Why a booking request was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please fill out all fields")]
    MissingFields,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid user selected")]
    UnknownMember(MemberId),
}

/// Service that owns the booking collection and keeps it persisted.
///
/// Every mutation runs to completion synchronously and is followed by a
/// save. A failed save is logged and otherwise ignored: the in-memory
/// collection stays authoritative for the session.
pub struct BookingService<S: BookingStorage> {
    store: BookingStore,
    roster: MemberRoster,
    storage: S,
}

impl<S: BookingStorage> BookingService<S> {
    /// Create the service, rehydrating bookings from storage.
    /// Unreadable storage yields an empty collection.
    pub fn load(roster: MemberRoster, storage: S) -> Self {
        let store = match storage.load() {
            Ok(bookings) => {
                info!("Loaded {} bookings", bookings.len());
                BookingStore::from_bookings(bookings)
            }
            Err(e) => {
                warn!("Failed to load stored bookings, starting empty: {}", e);
                BookingStore::new()
            }
        };

        Self { store, roster, storage }
    }

    /// Validate and store a new booking
    pub fn create_booking(&mut self, command: CreateBookingCommand) -> Result<CreateBookingResult, BookingError> {
        info!(
            "Creating booking: member={:?}, start={}, end={}",
            command.member_id, command.start_date, command.end_date
        );

        let member_id = match command.member_id {
            Some(id) if !command.start_date.trim().is_empty() && !command.end_date.trim().is_empty() => id,
            _ => return Err(BookingError::MissingFields),
        };
        let start = Self::parse_date(&command.start_date)?;
        let end = Self::parse_date(&command.end_date)?;

        let range = overlap::validate(start, end, self.store.all()).map_err(|e| {
            info!("Booking refused ({}): {}", e.reason(), e);
            e
        })?;

        let member = self
            .roster
            .find(member_id)
            .ok_or(BookingError::UnknownMember(member_id))?;

        let booking = Booking::new(BookingId::next(), member, range);
        self.store.insert(booking.clone());
        self.persist();

        info!("Created booking {} for {}", booking.id, booking.title());

        Ok(CreateBookingResult { booking })
    }

    /// Delete a booking. Deleting an unknown ID is not an error.
    pub fn delete_booking(&mut self, command: DeleteBookingCommand) -> DeleteBookingResult {
        info!("Deleting booking: {}", command.booking_id);

        let removed = self.store.remove(&command.booking_id);
        if removed {
            self.persist();
        } else {
            warn!("Booking not found: {}", command.booking_id);
        }

        DeleteBookingResult { removed }
    }

    pub fn bookings(&self) -> &[Booking] {
        self.store.all()
    }

    pub fn get_booking(&self, id: &BookingId) -> Option<&Booking> {
        self.store.get(id)
    }

    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    pub fn statistics(&self) -> BookingStatistics {
        statistics::summarize(&self.roster, self.store.all())
    }

    fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate(value.to_string()))
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(self.store.all()) {
            warn!("Failed to save bookings ({} in memory): {}", self.store.len(), e);
        }
    }
}
