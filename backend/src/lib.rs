//! # Boat Booking Backend
//!
//! All non-UI logic for the family boat booking calendar.
//!
//! - **Domain**: members, bookings, overlap checks, calendar projection and
//!   statistics
//! - **Storage**: loading and saving bookings and configuration
//! - **Mappers**: conversions to and from the `shared` DTOs
//!
//! Everything is synchronous. Each user action (create, delete, month
//! navigation) runs to completion before the UI re-renders.

pub mod domain;
pub mod mappers;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use shared::{BookingStatistics, CalendarMonth, CreateBookingRequest, Member as SharedMember};

use crate::domain::commands::bookings::{CreateBookingResult, DeleteBookingCommand, DeleteBookingResult};
use crate::domain::models::BookingId;
use crate::domain::{AccessGate, BookingError, BookingService, CalendarError, CalendarService};
use crate::mappers::{BookingMapper, MemberMapper};
use crate::storage::{BookingRepository, BookingStorage, ConfigRepository, ConfigStorage, JsonConnection};

/// Main backend struct that orchestrates all services
pub struct Backend<S: BookingStorage = BookingRepository> {
    pub booking_service: BookingService<S>,
    pub calendar_service: CalendarService,
    pub access_gate: AccessGate,
}

impl Backend<BookingRepository> {
    /// Create a backend using the default data directory
    pub fn new() -> Result<Self> {
        let connection = JsonConnection::new_default()?;
        Self::with_connection(connection)
    }

    /// Create a backend reading config and bookings from `connection`
    pub fn with_connection(connection: JsonConnection) -> Result<Self> {
        info!("Setting up boat booking backend in {}", connection.base_directory().display());

        let config = ConfigRepository::new(connection.clone())
            .get_config()
            .context("Failed to load booking configuration")?;
        let roster = config.roster().context("Invalid member list in configuration")?;

        let booking_service = BookingService::load(roster, BookingRepository::new(connection));

        Ok(Backend {
            booking_service,
            calendar_service: CalendarService::new(),
            access_gate: AccessGate::new(config.passphrase),
        })
    }
}

impl<S: BookingStorage> Backend<S> {
    /// Assemble a backend from already constructed services
    pub fn from_parts(booking_service: BookingService<S>, calendar_service: CalendarService, access_gate: AccessGate) -> Self {
        Self {
            booking_service,
            calendar_service,
            access_gate,
        }
    }

    /// Members in legend order
    pub fn members(&self) -> Vec<SharedMember> {
        self.booking_service.roster().iter().map(MemberMapper::to_dto).collect()
    }

    pub fn create_booking(&mut self, request: CreateBookingRequest) -> Result<CreateBookingResult, BookingError> {
        self.booking_service.create_booking(BookingMapper::to_create_command(request))
    }

    pub fn delete_booking(&mut self, booking_id: &str) -> DeleteBookingResult {
        self.booking_service.delete_booking(DeleteBookingCommand {
            booking_id: BookingId::new(booking_id),
        })
    }

    /// Calendar grid for any month
    pub fn calendar_month(&self, year: i32, month: u32) -> Result<CalendarMonth, CalendarError> {
        self.calendar_service
            .generate_calendar_month(year, month, self.booking_service.bookings())
    }

    /// Calendar grid for the month currently in focus
    pub fn focused_calendar_month(&self) -> Result<CalendarMonth, CalendarError> {
        let focus = self.calendar_service.focus();
        self.calendar_month(focus.year, focus.month)
    }

    pub fn statistics(&self) -> BookingStatistics {
        self.booking_service.statistics()
    }
}
