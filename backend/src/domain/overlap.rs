//! Admission check for new bookings.
//!
//! The boat is an exclusive resource: a candidate range is refused if it
//! overlaps any existing booking, whoever owns it. Ranges are half-open, so
//! back-to-back bookings sharing a boundary day are accepted.

use chrono::NaiveDate;
use log::debug;

use crate::domain::models::{Booking, DateRange, ValidationError};

/// Validate a candidate `[start, end)` against the existing bookings.
///
/// Returns the accepted range, or why it was refused.
pub fn validate(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Booking],
) -> Result<DateRange, ValidationError> {
    let candidate = DateRange::new(start, end)?;

    if let Some(conflict) = find_conflict(&candidate, existing) {
        debug!(
            "Candidate {} to {} conflicts with booking {} ({} to {})",
            start,
            end,
            conflict.id,
            conflict.start(),
            conflict.end()
        );
        return Err(ValidationError::Conflict);
    }

    Ok(candidate)
}

/// First existing booking overlapping `candidate`, if any
pub fn find_conflict<'a>(candidate: &DateRange, existing: &'a [Booking]) -> Option<&'a Booking> {
    existing.iter().find(|b| b.range.overlaps(candidate))
}

/// Any two bookings of `bookings` that overlap each other.
///
/// Sorting by start is enough: if any pair overlaps, some pair adjacent in
/// start order overlaps too.
pub fn find_overlapping_pair(bookings: &[Booking]) -> Option<(&Booking, &Booking)> {
    let mut by_start: Vec<&Booking> = bookings.iter().collect();
    by_start.sort_by_key(|b| b.start());
    by_start
        .windows(2)
        .find(|pair| pair[0].range.overlaps(&pair[1].range))
        .map(|pair| (pair[0], pair[1]))
}
