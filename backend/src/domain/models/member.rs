//! backend/src/domain/models/member.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable numeric identifier of a family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain model for a member who may reserve the boat.
/// Members are known at startup and never change while the app runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
    pub color_tag: String,
}

impl Member {
    pub fn new(id: u32, display_name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            id: MemberId(id),
            display_name: display_name.into(),
            color_tag: color_tag.into(),
        }
    }
}

/// Copy of a member's display fields taken when a booking is created.
///
/// A booking keeps showing the name and color it was created with, even if
/// the member's configuration changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub display_name: String,
    pub color_tag: String,
}

impl MemberSnapshot {
    pub fn of(member: &Member) -> Self {
        Self {
            display_name: member.display_name.clone(),
            color_tag: member.color_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Duplicate member id: {0}")]
    DuplicateId(MemberId),
    #[error("Member name cannot be empty (id {0})")]
    EmptyName(MemberId),
}

/// The ordered list of members, in the order the legend and statistics show them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<Member>,
}

impl MemberRoster {
    pub fn new(members: Vec<Member>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(RosterError::DuplicateId(member.id));
            }
            if member.display_name.trim().is_empty() {
                return Err(RosterError::EmptyName(member.id));
            }
        }
        Ok(Self { members })
    }

    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for MemberRoster {
    fn default() -> Self {
        Self {
            members: vec![
                Member::new(1, "Nabil Zahlan", "#FF5733"),
                Member::new(2, "Kamal Zahlan", "#33A1FF"),
                Member::new(3, "Mira Mouawad", "#AD33FF"),
            ],
        }
    }
}
