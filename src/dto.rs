//! Data-transfer shapes for query projections
//!
//! These records stay decoupled from the entity types: they carry only what a
//! projection selects, and the store offers several equivalent instantiation
//! strategies for them (see the `member_dtos_*` operations on `RosterStore`).

use serde::{Deserialize, Serialize};

/// Projection of a member's username and age
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberDto {
    pub username: Option<String>,
    pub age: i64,
}

impl MemberDto {
    /// Constructor-style injection target
    pub fn new(username: Option<String>, age: i64) -> Self {
        Self { username, age }
    }
}

/// Projection with a differently named field, filled from an aliased column
/// and a scalar subquery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserDto {
    pub name: Option<String>,
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_dto_constructor() {
        let dto = MemberDto::new(Some("memb1".to_string()), 31);
        assert_eq!(dto.username.as_deref(), Some("memb1"));
        assert_eq!(dto.age, 31);
    }

    #[test]
    fn test_member_dto_default() {
        let dto = MemberDto::default();
        assert!(dto.username.is_none());
        assert_eq!(dto.age, 0);
    }
}
