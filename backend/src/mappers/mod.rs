//! Conversions between the `shared` DTOs and the domain models.

pub mod booking_mapper;
pub mod member_mapper;

pub use booking_mapper::BookingMapper;
pub use member_mapper::MemberMapper;
