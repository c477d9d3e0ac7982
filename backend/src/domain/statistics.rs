//! Reserved-day totals per member.

use std::collections::HashMap;

use log::debug;
use shared::{BookingStatistics, MemberStats};

use crate::domain::models::{Booking, MemberId, MemberRoster};

/// Total booked days for one member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDays {
    pub member_id: MemberId,
    pub display_name: String,
    pub color_tag: String,
    pub total_days: i64,
}

/// Count reserved days for every member of the roster, in roster order.
///
/// Members without bookings are reported with zero days. Bookings whose
/// member is no longer on the roster are not counted.
pub fn aggregate(roster: &MemberRoster, bookings: &[Booking]) -> Vec<MemberDays> {
    let mut days_by_member: HashMap<MemberId, i64> = HashMap::new();
    for booking in bookings {
        *days_by_member.entry(booking.member_id).or_insert(0) += booking.range.num_days();
    }

    roster
        .iter()
        .map(|member| MemberDays {
            member_id: member.id,
            display_name: member.display_name.clone(),
            color_tag: member.color_tag.clone(),
            total_days: days_by_member.get(&member.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Statistics panel data: per-member totals, their share of all booked
/// days, and the overall total
pub fn summarize(roster: &MemberRoster, bookings: &[Booking]) -> BookingStatistics {
    let per_member = aggregate(roster, bookings);
    let total_days: i64 = per_member.iter().map(|m| m.total_days).sum();

    let members = per_member
        .into_iter()
        .map(|m| MemberStats {
            user_id: m.member_id.0,
            share_percent: if total_days > 0 {
                m.total_days as f64 / total_days as f64 * 100.0
            } else {
                0.0
            },
            name: m.display_name,
            color: m.color_tag,
            days: m.total_days,
        })
        .collect();

    debug!("Booking statistics: {} days booked in total", total_days);

    BookingStatistics { members, total_days }
}
