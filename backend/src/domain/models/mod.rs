//! Domain models for the boat booking system.

pub mod booking;
pub mod member;

pub use booking::{Booking, BookingId, BookingOccurrence, DateRange, OccurrenceSpan, ValidationError};
pub use member::{Member, MemberId, MemberRoster, MemberSnapshot, RosterError};
