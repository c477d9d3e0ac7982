//! backend/src/mappers/member_mapper.rs

use shared::Member as SharedMember;

use crate::domain::models::{Member, MemberId};

/// Mapper to convert between shared Member DTOs and domain Member models.
pub struct MemberMapper;

impl MemberMapper {
    pub fn to_domain(dto: SharedMember) -> Member {
        Member {
            id: MemberId(dto.id),
            display_name: dto.name.trim().to_string(),
            color_tag: dto.color,
        }
    }

    pub fn to_dto(member: &Member) -> SharedMember {
        SharedMember {
            id: member.id.0,
            name: member.display_name.clone(),
            color: member.color_tag.clone(),
        }
    }
}
