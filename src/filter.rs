//! Filter, sort, and pagination types for member queries
//!
//! `MemberFilter` is the dynamic predicate composer: every parameter is
//! optional, and only present parameters contribute a condition. Composition
//! is a fold over an identity condition, so a filter with one parameter (or
//! none) is valid rather than a null-combinator failure.

use serde::{Deserialize, Serialize};

use crate::sql::condition::{Condition, Param};

/// Optional filter parameters over members
///
/// Absent parameters contribute no constraint. `age` distinguishes "not
/// supplied" from "supplied as zero": `Some(0)` filters for age 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberFilter {
    /// Exact-match on username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Exact-match on age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Inclusive lower age bound
    #[serde(rename = "minAge", skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i64>,
    /// Inclusive upper age bound
    #[serde(rename = "maxAge", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
}

impl MemberFilter {
    /// Filter with no constraints (matches every member)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to an exact username
    pub fn username_eq(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Constrain to an exact age
    pub fn age_eq(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Constrain to ages at or above `min`
    pub fn min_age(mut self, min: i64) -> Self {
        self.min_age = Some(min);
        self
    }

    /// Constrain to ages at or below `max`
    pub fn max_age(mut self, max: i64) -> Self {
        self.max_age = Some(max);
        self
    }

    /// Constrain to ages within `[min, max]`
    pub fn age_between(self, min: i64, max: i64) -> Self {
        self.min_age(min).max_age(max)
    }

    /// Compose the present parameters into a single condition
    ///
    /// Each present parameter maps to one single-field clause; absent
    /// parameters are skipped entirely. Zero present parameters yield the
    /// identity condition.
    pub fn condition(&self) -> Condition {
        self.qualified_condition("")
    }

    /// Like [`MemberFilter::condition`], with every column qualified by a
    /// table alias prefix (e.g. `"m."`) for use in joined queries
    pub fn qualified_condition(&self, prefix: &str) -> Condition {
        let mut cond = Condition::always();

        if let Some(username) = &self.username {
            cond = cond.and_where(format!("{}username = ?", prefix), Param::text(username));
        }
        if let Some(age) = self.age {
            cond = cond.and_where(format!("{}age = ?", prefix), Param::Int(age));
        }
        if let Some(min) = self.min_age {
            cond = cond.and_where(format!("{}age >= ?", prefix), Param::Int(min));
        }
        if let Some(max) = self.max_age {
            cond = cond.and_where(format!("{}age <= ?", prefix), Param::Int(max));
        }

        cond
    }
}

/// Sortable member fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Username,
    Age,
    CreatedAt,
    Id,
}

impl SortField {
    /// The SQL column backing this sort field
    pub fn column(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Age => "age",
            Self::CreatedAt => "created_at",
            Self::Id => "id",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// One key of a multi-key ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

/// Offset/limit pagination
///
/// `offset` rows are skipped (zero-based); at most `limit` rows are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}
