//! backend/src/mappers/booking_mapper.rs

use chrono::NaiveDate;
use shared::{CalendarBooking, CreateBookingRequest, StoredBooking, DATE_FORMAT};

use crate::domain::commands::bookings::CreateBookingCommand;
use crate::domain::models::{Booking, BookingId, BookingOccurrence, DateRange, MemberId, MemberSnapshot};
use crate::storage::traits::PersistenceError;

/// Mapper to convert between shared booking DTOs and domain Booking models.
pub struct BookingMapper;

impl BookingMapper {
    /// Converts a domain Booking to its stored form.
    pub fn to_stored(booking: &Booking) -> StoredBooking {
        StoredBooking {
            id: booking.id.to_string(),
            title: booking.snapshot.display_name.clone(),
            start: booking.start().format(DATE_FORMAT).to_string(),
            end: booking.end().format(DATE_FORMAT).to_string(),
            user_id: booking.member_id.0,
            user_name: booking.snapshot.display_name.clone(),
            color: booking.snapshot.color_tag.clone(),
        }
    }

    /// Converts a stored booking back into a domain Booking.
    ///
    /// The snapshot name is taken from `userName`, falling back to `title`
    /// for records where it is blank.
    pub fn to_domain(stored: StoredBooking) -> Result<Booking, PersistenceError> {
        let start = Self::parse_stored_date(&stored.id, &stored.start)?;
        let end = Self::parse_stored_date(&stored.id, &stored.end)?;
        let range = DateRange::new(start, end)
            .map_err(|_| PersistenceError::InvalidRange { id: stored.id.clone() })?;

        let display_name = if stored.user_name.trim().is_empty() {
            stored.title
        } else {
            stored.user_name
        };

        Ok(Booking {
            id: BookingId::new(stored.id),
            member_id: MemberId(stored.user_id),
            range,
            snapshot: MemberSnapshot {
                display_name,
                color_tag: stored.color,
            },
        })
    }

    /// Parse a stored date, accepting `YYYY-MM-DD` as well as full ISO
    /// timestamps such as `2024-03-10T00:00:00.000Z`, of which only the date
    /// part is kept.
    pub fn parse_stored_date(id: &str, value: &str) -> Result<NaiveDate, PersistenceError> {
        let date_part = value.trim().split('T').next().unwrap_or_default();
        NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| PersistenceError::InvalidDate {
            id: id.to_string(),
            value: value.to_string(),
        })
    }

    /// Converts one calendar occurrence into the cell entry the UI renders.
    pub fn to_calendar_booking(occurrence: &BookingOccurrence<'_>) -> CalendarBooking {
        let booking = occurrence.booking;
        CalendarBooking {
            booking_id: booking.id.to_string(),
            user_id: booking.member_id.0,
            user_name: booking.snapshot.display_name.clone(),
            color: booking.snapshot.color_tag.clone(),
            is_first_day: occurrence.is_first_day,
            is_last_day: occurrence.is_last_day,
            label: occurrence.label(),
        }
    }

    /// Converts a booking form request into a domain command.
    pub fn to_create_command(request: CreateBookingRequest) -> CreateBookingCommand {
        CreateBookingCommand {
            member_id: request.user_id.map(MemberId),
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}
