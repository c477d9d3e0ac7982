use serde::{Deserialize, Serialize};
use chrono::Datelike;

/// Date format used for every date string crossing the crate boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A booking as it is persisted and handed to the presentation layer.
///
/// Field names match the stored JSON array written by earlier versions of the
/// app, so `user_id` serializes as `userId` and `user_name` as `userName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBooking {
    /// Booking ID in format: "booking::epoch_millis"
    pub id: String,
    /// Display title, a copy of the member name at creation time
    pub title: String,
    /// First occupied day (YYYY-MM-DD)
    pub start: String,
    /// Exclusive end day (YYYY-MM-DD)
    pub end: String,
    pub user_id: u32,
    pub user_name: String,
    /// Member color at creation time (CSS color string)
    pub color: String,
}

/// A family member allowed to reserve the boat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub color: String,
}

/// Request coming from the booking form.
///
/// Every field may be blank because the form submits whatever the user typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: Option<u32>,
    pub start_date: String,
    pub end_date: String,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A calendar month ready to be laid out on a seven column grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    pub days_in_month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days: Vec<CalendarDay>,
}

/// A single cell of the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub day_type: CalendarDayType,
    pub bookings: Vec<CalendarBooking>,
}

/// One booking as shown inside one calendar cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarBooking {
    pub booking_id: String,
    pub user_id: u32,
    pub user_name: String,
    pub color: String,
    pub is_first_day: bool,
    pub is_last_day: bool,
    /// Name with continuation suffix, e.g. "Kamal Zahlan (cont.)"
    pub label: String,
}

/// Reserved days for one member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberStats {
    pub user_id: u32,
    pub name: String,
    pub color: String,
    pub days: i64,
    /// Share of all booked days, 0.0 to 100.0
    pub share_percent: f64,
}

/// Booking statistics panel data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingStatistics {
    pub members: Vec<MemberStats>,
    pub total_days: i64,
}

/// Month and year the calendar is currently showing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}
