//! Calendar domain logic for the boat booking system.
//!
//! This module maps bookings, each spanning any number of days, onto the days
//! of one calendar month and keeps track of which month the calendar is
//! focused on. The UI only lays out the grid; every date computation lives
//! here.

use chrono::{Datelike, Months, NaiveDate};
use log::{debug, info};
use shared::{CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth};

use crate::domain::models::{Booking, BookingOccurrence, DateRange};
use crate::mappers::BookingMapper;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {month}. Must be between 1 and 12")]
    InvalidMonth { month: u32 },
    #[error("Date out of range: {year}-{month:02}")]
    OutOfRange { year: i32, month: u32 },
}

/// Bookings of one month, bucketed by day of month.
///
/// Bucket `d - 1` holds the occurrences for day `d`, in the order the
/// bookings were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthProjection<'a> {
    pub year: i32,
    pub month: u32,
    /// Weekday of day 1 (0 = Sunday, 1 = Monday, etc.)
    pub first_day_of_week: u32,
    buckets: Vec<Vec<BookingOccurrence<'a>>>,
}

impl<'a> MonthProjection<'a> {
    pub fn days_in_month(&self) -> u32 {
        self.buckets.len() as u32
    }

    /// Occurrences on `day`; empty for days outside the month
    pub fn day(&self, day: u32) -> &[BookingOccurrence<'a>] {
        if day == 0 {
            return &[];
        }
        self.buckets
            .get((day - 1) as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(day_of_month, occurrences)` for every day of the month
    pub fn days(&self) -> impl Iterator<Item = (u32, &[BookingOccurrence<'a>])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| (i as u32 + 1, bucket.as_slice()))
    }

    pub fn occurrence_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone)]
pub struct CalendarService {
    /// Month currently shown; kept in memory only
    focus: CalendarFocusDate,
}

impl CalendarService {
    /// Create a calendar focused on the current month
    pub fn new() -> Self {
        Self {
            focus: CalendarFocusDate::default(),
        }
    }

    pub fn with_focus(year: i32, month: u32) -> Result<Self, CalendarError> {
        let mut service = Self::new();
        service.set_focus(year, month)?;
        Ok(service)
    }

    /// First day of the month and first day of the following month
    fn month_bounds(&self, year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| Some((first, first.checked_add_months(Months::new(1))?)))
            .ok_or(CalendarError::OutOfRange { year, month })
    }

    /// Get the number of days in a given month
    pub fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        let (first, next_first) = self.month_bounds(year, month)?;
        Ok((next_first - first).num_days() as u32)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        let (first, _) = self.month_bounds(year, month)?;
        Ok(first.weekday().num_days_from_sunday())
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Month before `year`/`month`; fails when the year would leave the
    /// representable range
    pub fn previous_month(&self, year: i32, month: u32) -> Result<(i32, u32), CalendarError> {
        if month <= 1 {
            let previous_year = year.checked_sub(1).ok_or(CalendarError::OutOfRange { year, month })?;
            Ok((previous_year, 12))
        } else {
            Ok((year, month - 1))
        }
    }

    /// Month after `year`/`month`; fails when the year would leave the
    /// representable range
    pub fn next_month(&self, year: i32, month: u32) -> Result<(i32, u32), CalendarError> {
        if month >= 12 {
            let next_year = year.checked_add(1).ok_or(CalendarError::OutOfRange { year, month })?;
            Ok((next_year, 1))
        } else {
            Ok((year, month + 1))
        }
    }

    /// Project bookings onto the days of `year`/`month`.
    ///
    /// Each booking overlapping the month is clamped to the month and walked
    /// once by day number. First/last-day flags are computed against the
    /// booking's own start and last covered day, not the month edges, so the
    /// part of a booking that spills into another month carries no flag on
    /// the side that was cut off.
    pub fn project<'a>(
        &self,
        year: i32,
        month: u32,
        bookings: &'a [Booking],
    ) -> Result<MonthProjection<'a>, CalendarError> {
        let (first, next_first) = self.month_bounds(year, month)?;
        let month_range = DateRange::new(first, next_first)
            .map_err(|_| CalendarError::OutOfRange { year, month })?;
        let month_last = month_range.last_covered_day();
        let days_in_month = month_range.num_days() as usize;

        let mut buckets: Vec<Vec<BookingOccurrence<'a>>> =
            (0..days_in_month).map(|_| Vec::new()).collect();

        for booking in bookings.iter().filter(|b| b.range.overlaps(&month_range)) {
            let last_covered = booking.range.last_covered_day();

            let from = booking.start().max(first).day();
            let to = last_covered.min(month_last).day();
            let first_day = (booking.start() >= first).then(|| booking.start().day());
            let last_day = (last_covered < next_first).then(|| last_covered.day());

            for day in from..=to {
                buckets[(day - 1) as usize].push(BookingOccurrence {
                    booking,
                    day,
                    is_first_day: first_day == Some(day),
                    is_last_day: last_day == Some(day),
                });
            }
        }

        let projection = MonthProjection {
            year,
            month,
            first_day_of_week: first.weekday().num_days_from_sunday(),
            buckets,
        };
        debug!(
            "Projected {} bookings onto {}/{}: {} occurrences",
            bookings.len(),
            month,
            year,
            projection.occurrence_count()
        );
        Ok(projection)
    }

    /// Generate the calendar grid for a month: padding cells up to the first
    /// weekday, then one cell per day with its bookings
    pub fn generate_calendar_month(
        &self,
        year: i32,
        month: u32,
        bookings: &[Booking],
    ) -> Result<CalendarMonth, CalendarError> {
        let projection = self.project(year, month, bookings)?;
        let first_day = projection.first_day_of_week;

        info!("Generating calendar for {}/{}", month, year);

        let mut calendar_days = Vec::with_capacity((first_day + projection.days_in_month()) as usize);

        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                day_type: CalendarDayType::PaddingBefore,
                bookings: Vec::new(),
            });
        }

        for (day, occurrences) in projection.days() {
            calendar_days.push(CalendarDay {
                day,
                day_type: CalendarDayType::MonthDay,
                bookings: occurrences.iter().map(BookingMapper::to_calendar_booking).collect(),
            });
        }

        Ok(CalendarMonth {
            month,
            year,
            month_name: self.month_name(month).to_string(),
            days_in_month: projection.days_in_month(),
            first_day_of_week: first_day,
            days: calendar_days,
        })
    }

    /// Get the month the calendar is focused on
    pub fn focus(&self) -> &CalendarFocusDate {
        &self.focus
    }

    /// Set the focus month
    pub fn set_focus(&mut self, year: i32, month: u32) -> Result<CalendarFocusDate, CalendarError> {
        self.month_bounds(year, month)?;
        self.focus = CalendarFocusDate { month, year };
        Ok(self.focus.clone())
    }

    /// Navigate to the previous month. The focus is left unchanged when that
    /// month cannot be shown.
    pub fn navigate_previous_month(&mut self) -> Result<CalendarFocusDate, CalendarError> {
        let (year, month) = self.previous_month(self.focus.year, self.focus.month)?;
        self.set_focus(year, month)
    }

    /// Navigate to the next month. The focus is left unchanged when that
    /// month cannot be shown.
    pub fn navigate_next_month(&mut self) -> Result<CalendarFocusDate, CalendarError> {
        let (year, month) = self.next_month(self.focus.year, self.focus.month)?;
        self.set_focus(year, month)
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::booking;

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(2025, 1), Ok(31));
        assert_eq!(service.days_in_month(2025, 4), Ok(30));
        assert_eq!(service.days_in_month(2025, 2), Ok(28));
        assert_eq!(service.days_in_month(2024, 2), Ok(29));
        assert_eq!(service.days_in_month(1900, 2), Ok(28));
        assert_eq!(service.days_in_month(2000, 2), Ok(29));
        assert_eq!(service.days_in_month(2024, 12), Ok(31));
    }

    #[test]
    fn test_invalid_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(2024, 13), Err(CalendarError::InvalidMonth { month: 13 }));
        assert!(service.project(2024, 0, &[]).is_err());
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        assert_eq!(service.first_day_of_month(2024, 3), Ok(5)); // Friday
        assert_eq!(service.first_day_of_month(2025, 6), Ok(0)); // Sunday
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(2025, 6), Ok((2025, 5)));
        assert_eq!(service.previous_month(2025, 1), Ok((2024, 12)));
        assert_eq!(service.next_month(2025, 6), Ok((2025, 7)));
        assert_eq!(service.next_month(2025, 12), Ok((2026, 1)));
    }

    #[test]
    fn test_extreme_years_are_out_of_range() {
        let service = CalendarService::new();

        assert_eq!(
            service.next_month(i32::MAX, 12),
            Err(CalendarError::OutOfRange { year: i32::MAX, month: 12 })
        );
        assert_eq!(
            service.previous_month(i32::MIN, 1),
            Err(CalendarError::OutOfRange { year: i32::MIN, month: 1 })
        );
        assert_eq!(
            service.days_in_month(i32::MAX, 12),
            Err(CalendarError::OutOfRange { year: i32::MAX, month: 12 })
        );
        assert_eq!(
            service.first_day_of_month(i32::MIN, 1),
            Err(CalendarError::OutOfRange { year: i32::MIN, month: 1 })
        );
        assert!(service.generate_calendar_month(i32::MAX, 12, &[]).is_err());
    }

    #[test]
    fn test_navigation_stops_at_last_representable_month() {
        // December of the last year has no following month to bound it
        let year = NaiveDate::MAX.year();
        let mut service = CalendarService::with_focus(year, 11).unwrap();

        assert_eq!(
            service.navigate_next_month(),
            Err(CalendarError::OutOfRange { year, month: 12 })
        );
        assert_eq!(service.focus(), &CalendarFocusDate { month: 11, year });
        assert!(service.navigate_previous_month().is_ok());
    }

    #[test]
    fn test_project_booking_starting_in_previous_month() {
        let service = CalendarService::new();
        let bookings = vec![booking(1, "2024-02-28", "2024-03-02")];

        let march = service.project(2024, 3, &bookings).unwrap();

        assert_eq!(march.days_in_month(), 31);
        assert_eq!(march.occurrence_count(), 1);
        let day_1 = march.day(1);
        assert_eq!(day_1.len(), 1);
        assert!(!day_1[0].is_first_day);
        assert!(day_1[0].is_last_day);
        assert!(march.day(2).is_empty());

        let february = service.project(2024, 2, &bookings).unwrap();
        assert_eq!(february.occurrence_count(), 2);
        assert!(february.day(28)[0].is_first_day);
        assert!(!february.day(28)[0].is_last_day);
        assert!(!february.day(29)[0].is_first_day);
        assert!(!february.day(29)[0].is_last_day);
    }

    #[test]
    fn test_project_single_day_booking() {
        let service = CalendarService::new();
        let bookings = vec![booking(2, "2024-03-15", "2024-03-16")];

        let projection = service.project(2024, 3, &bookings).unwrap();

        assert_eq!(projection.occurrence_count(), 1);
        let occurrence = projection.day(15)[0];
        assert!(occurrence.is_first_day && occurrence.is_last_day);
    }

    #[test]
    fn test_project_booking_spanning_whole_month() {
        let service = CalendarService::new();
        let bookings = vec![booking(3, "2024-03-20", "2024-05-03")];

        let april = service.project(2024, 4, &bookings).unwrap();

        assert_eq!(april.occurrence_count(), 30);
        assert!(april.days().all(|(_, occ)| occ.len() == 1 && !occ[0].is_first_day && !occ[0].is_last_day));

        let may = service.project(2024, 5, &bookings).unwrap();
        assert_eq!(may.occurrence_count(), 2);
        assert!(may.day(2)[0].is_last_day);
    }

    #[test]
    fn test_project_ignores_bookings_outside_month() {
        let service = CalendarService::new();
        let bookings = vec![
            booking(1, "2024-02-10", "2024-03-01"),
            booking(2, "2024-04-01", "2024-04-05"),
        ];

        let march = service.project(2024, 3, &bookings).unwrap();
        assert_eq!(march.occurrence_count(), 0);
    }

    #[test]
    fn test_project_keeps_supplied_order_within_a_day() {
        let service = CalendarService::new();
        // The projector does not validate, so overlapping input is allowed here
        let bookings = vec![
            booking(2, "2024-03-03", "2024-03-06"),
            booking(1, "2024-03-01", "2024-03-05"),
        ];

        let march = service.project(2024, 3, &bookings).unwrap();

        let day_4: Vec<_> = march.day(4).iter().map(|o| o.booking.id.clone()).collect();
        assert_eq!(day_4, vec![bookings[0].id.clone(), bookings[1].id.clone()]);
        assert!(!march.day(4)[0].is_last_day);
        assert!(march.day(4)[1].is_last_day);
        assert_eq!(march.day(5).len(), 1);
        assert!(march.day(0).is_empty());
        assert!(march.day(32).is_empty());
    }

    #[test]
    fn test_generate_calendar_month() {
        let service = CalendarService::new();
        let bookings = vec![booking(1, "2024-03-01", "2024-03-04")];

        let calendar = service.generate_calendar_month(2024, 3, &bookings).unwrap();

        assert_eq!(calendar.month, 3);
        assert_eq!(calendar.year, 2024);
        assert_eq!(calendar.month_name, "March");
        assert_eq!(calendar.first_day_of_week, 5);
        assert_eq!(calendar.days.len(), 5 + 31);
        assert!(calendar.days[..5].iter().all(|d| d.day_type == CalendarDayType::PaddingBefore));

        let day_1 = &calendar.days[5];
        assert_eq!(day_1.day, 1);
        assert_eq!(day_1.bookings[0].label, "Nabil Zahlan");
        let day_2 = &calendar.days[6];
        assert_eq!(day_2.bookings[0].label, "Nabil Zahlan (cont.)");
        let day_3 = &calendar.days[7];
        assert_eq!(day_3.bookings[0].label, "Nabil Zahlan (end)");
        assert!(calendar.days[8].bookings.is_empty());
    }

    #[test]
    fn test_set_focus() {
        let mut service = CalendarService::new();

        let focus = service.set_focus(2025, 6).unwrap();
        assert_eq!(focus, CalendarFocusDate { month: 6, year: 2025 });
        assert_eq!(service.focus(), &focus);

        assert!(service.set_focus(2025, 13).is_err());
        assert!(service.set_focus(2025, 0).is_err());
        assert_eq!(service.focus(), &focus);
    }

    #[test]
    fn test_navigate_with_year_rollover() {
        let mut service = CalendarService::with_focus(2025, 1).unwrap();

        assert_eq!(service.navigate_previous_month(), Ok(CalendarFocusDate { month: 12, year: 2024 }));
        assert_eq!(service.navigate_next_month(), Ok(CalendarFocusDate { month: 1, year: 2025 }));

        service.set_focus(2025, 12).unwrap();
        assert_eq!(service.navigate_next_month(), Ok(CalendarFocusDate { month: 1, year: 2026 }));
    }
}
