//! Domain-level command and result types.
//! These are used by services inside the domain layer. The mappers convert
//! the public DTOs from the `shared` crate into these internal types.

pub mod bookings {
    use crate::domain::models::{Booking, BookingId, MemberId};

    /// Input for creating a booking, straight from the booking form
    #[derive(Debug, Clone, Default)]
    pub struct CreateBookingCommand {
        pub member_id: Option<MemberId>,
        /// Start date as typed (YYYY-MM-DD)
        pub start_date: String,
        /// Exclusive end date as typed (YYYY-MM-DD)
        pub end_date: String,
    }

    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        pub booking: Booking,
    }

    /// Command for deleting a booking after the user confirmed
    #[derive(Debug, Clone)]
    pub struct DeleteBookingCommand {
        pub booking_id: BookingId,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteBookingResult {
        /// False when the booking was already gone
        pub removed: bool,
    }
}
