//! Condition building for SQL WHERE clauses
//!
//! A `Condition` is an opaque composed filter: a conjunction of clauses with
//! their bind parameters. It is built by folding present filter parameters
//! into an identity condition, so zero conditions is a valid state that
//! matches every row, and a single condition never passes through a binary
//! AND combinator with a missing operand.

use crate::filter::{Direction, SortKey};

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Int(i64),
}

impl Param {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// A composed WHERE condition: conjunction of clauses plus bind parameters
///
/// The clause list and the parameter list stay in sync: each clause appended
/// by [`Condition::and_where`] carries exactly one `?` placeholder.
#[derive(Debug, Clone, Default)]
pub struct Condition {
    clauses: Vec<String>,
    params: Vec<Param>,
}

impl Condition {
    /// The identity condition: matches every row
    pub fn always() -> Self {
        Self::default()
    }

    /// Fold one clause into the conjunction
    pub fn and_where(mut self, clause: impl Into<String>, param: Param) -> Self {
        self.clauses.push(clause.into());
        self.params.push(param);
        self
    }

    /// Render the WHERE clause body (without the `WHERE` keyword)
    ///
    /// The identity condition renders as `TRUE` so callers can always emit a
    /// `WHERE` clause unconditionally.
    pub fn clause(&self) -> String {
        if self.clauses.is_empty() {
            "TRUE".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }

    /// Parameters to bind, in placeholder order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// True when no condition has been folded in
    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Build an ORDER BY clause body from sort keys
///
/// Null sort keys are placed last regardless of direction. An empty key list
/// falls back to `id ASC` so result order stays deterministic.
pub fn build_order_by_clause(sort: &[SortKey]) -> String {
    if sort.is_empty() {
        return "id ASC".to_string();
    }

    sort.iter()
        .map(|key| {
            let dir = match key.direction {
                Direction::Asc => "ASC",
                Direction::Desc => "DESC",
            };
            format!("{} {} NULLS LAST", key.field.column(), dir)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
