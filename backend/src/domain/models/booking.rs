//! backend/src/domain/models/booking.rs

use chrono::{NaiveDate, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::member::{Member, MemberId, MemberSnapshot};

/// Last millisecond value handed out by `BookingId::next`
static LAST_ID_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Opaque booking identifier, immutable once assigned
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a booking ID from an epoch timestamp
    pub fn generate(epoch_millis: u64) -> Self {
        Self(format!("booking::{}", epoch_millis))
    }

    /// Generate a fresh ID from the clock.
    ///
    /// Two calls within the same millisecond still get distinct IDs: the
    /// timestamp is bumped past the last one issued in this process.
    pub fn next() -> Self {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let previous = LAST_ID_MILLIS
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        Self::generate(now.max(previous + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a candidate date range is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("End date must be after start date")]
    InvalidRange,
    #[error("This time period overlaps with an existing booking")]
    Conflict,
}

impl ValidationError {
    /// Machine readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::InvalidRange => "invalid-range",
            ValidationError::Conflict => "conflict",
        }
    }
}

/// Half-open calendar date interval `[start, end)`.
///
/// `start` is the first occupied day and `end` is the first free day, so a
/// range ending on day D and one starting on day D are adjacent, not
/// overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Last day actually occupied (the day before `end`)
    pub fn last_covered_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }

    /// Number of occupied days
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Domain model of a reservation of the boat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub member_id: MemberId,
    pub range: DateRange,
    pub snapshot: MemberSnapshot,
}

impl Booking {
    /// Create a booking for `member`, snapshotting its name and color
    pub fn new(id: BookingId, member: &Member, range: DateRange) -> Self {
        Self {
            id,
            member_id: member.id,
            range,
            snapshot: MemberSnapshot::of(member),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.range.start()
    }

    pub fn end(&self) -> NaiveDate {
        self.range.end()
    }

    /// Booking title, which is always the member name at creation time
    pub fn title(&self) -> &str {
        &self.snapshot.display_name
    }

    /// Text shown in the delete confirmation dialog
    pub fn deletion_prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this booking? (You must be {})",
            self.snapshot.display_name
        )
    }
}

/// Where an occurrence sits inside its booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceSpan {
    /// One-day booking
    Single,
    Start,
    Middle,
    End,
}

/// A booking projected onto one day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingOccurrence<'a> {
    pub booking: &'a Booking,
    /// Day of month (1-based)
    pub day: u32,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

impl<'a> BookingOccurrence<'a> {
    pub fn span(&self) -> OccurrenceSpan {
        match (self.is_first_day, self.is_last_day) {
            (true, true) => OccurrenceSpan::Single,
            (true, false) => OccurrenceSpan::Start,
            (false, true) => OccurrenceSpan::End,
            (false, false) => OccurrenceSpan::Middle,
        }
    }

    /// Member name with a continuation marker for days after the first
    pub fn label(&self) -> String {
        let name = &self.booking.snapshot.display_name;
        match self.span() {
            OccurrenceSpan::Single | OccurrenceSpan::Start => name.clone(),
            OccurrenceSpan::Middle => format!("{} (cont.)", name),
            OccurrenceSpan::End => format!("{} (end)", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_generate_booking_id() {
        assert_eq!(BookingId::generate(1709251200000).as_str(), "booking::1709251200000");
    }

    #[test]
    fn test_next_ids_never_collide() {
        let ids: Vec<BookingId> = (0..500).map(|_| BookingId::next()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_date_range_rejects_empty_and_reversed() {
        assert_eq!(
            DateRange::new(date("2024-03-05"), date("2024-03-05")),
            Err(ValidationError::InvalidRange)
        );
        assert_eq!(
            DateRange::new(date("2024-03-06"), date("2024-03-05")),
            Err(ValidationError::InvalidRange)
        );
    }

    #[test]
    fn test_date_range_is_half_open() {
        let range = DateRange::new(date("2024-03-10"), date("2024-03-13")).unwrap();

        assert!(range.contains(date("2024-03-10")));
        assert!(range.contains(date("2024-03-12")));
        assert!(!range.contains(date("2024-03-13")));
        assert_eq!(range.last_covered_day(), date("2024-03-12"));
        assert_eq!(range.num_days(), 3);
    }

    #[test]
    fn test_back_to_back_ranges_do_not_overlap() {
        let first = DateRange::new(date("2024-03-01"), date("2024-03-05")).unwrap();
        let second = DateRange::new(date("2024-03-05"), date("2024-03-10")).unwrap();
        let straddling = DateRange::new(date("2024-03-04"), date("2024-03-06")).unwrap();

        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
        assert!(first.overlaps(&straddling));
        assert!(second.overlaps(&straddling));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(ValidationError::InvalidRange.reason(), "invalid-range");
        assert_eq!(ValidationError::Conflict.reason(), "conflict");
    }

    #[test]
    fn test_occurrence_labels() {
        let member = Member::new(2, "Kamal Zahlan", "#33A1FF");
        let range = DateRange::new(date("2024-03-01"), date("2024-03-04")).unwrap();
        let booking = Booking::new(BookingId::generate(1), &member, range);

        let occurrence = |is_first_day, is_last_day| BookingOccurrence {
            booking: &booking,
            day: 1,
            is_first_day,
            is_last_day,
        };

        assert_eq!(occurrence(true, true).label(), "Kamal Zahlan");
        assert_eq!(occurrence(true, false).label(), "Kamal Zahlan");
        assert_eq!(occurrence(false, false).label(), "Kamal Zahlan (cont.)");
        assert_eq!(occurrence(false, true).label(), "Kamal Zahlan (end)");
        assert_eq!(occurrence(false, false).span(), OccurrenceSpan::Middle);
    }

    #[test]
    fn test_deletion_prompt_names_the_owner() {
        let member = Member::new(3, "Mira Mouawad", "#AD33FF");
        let range = DateRange::new(date("2024-03-01"), date("2024-03-02")).unwrap();
        let booking = Booking::new(BookingId::generate(7), &member, range);

        assert!(booking.deletion_prompt().ends_with("(You must be Mira Mouawad)"));
        assert_eq!(booking.title(), "Mira Mouawad");
    }
}
