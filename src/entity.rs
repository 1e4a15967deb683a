//! Entity types for the roster store
//!
//! A `Team` owns zero-or-more `Member`s. The relationship is held on the
//! member side (`team_id`); the team's member list is a derived query
//! (`RosterStore::team_members`), never stored state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team row
///
/// `id` and both timestamps are store-assigned. `created_at` is write-once;
/// `updated_at` is refreshed by every store-level mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A member row
///
/// `username` is optional; `team_id` is an optional foreign reference to a
/// team, so an unaffiliated member is representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub username: Option<String>,
    pub age: i64,
    #[serde(rename = "teamId")]
    pub team_id: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Request to insert a new member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i64,
    #[serde(rename = "teamId", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

impl NewMember {
    /// Create a new member request with a username
    pub fn new(username: impl Into<String>, age: i64) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Create a new member request without a username
    pub fn anonymous(age: i64) -> Self {
        Self {
            username: None,
            age,
            team_id: None,
        }
    }

    /// Set the team reference
    pub fn in_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// A member together with its eagerly loaded team, produced by a fetch join
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberWithTeam {
    pub member: Member,
    /// `None` when the member is unaffiliated
    pub team: Option<Team>,
}
