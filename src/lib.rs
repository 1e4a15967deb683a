//! # roster-store
//!
//! Typed dynamic query composition over a SQLite-backed member/team roster.
//!
//! This crate provides a small relational store for two entities — `Member`
//! and `Team` in a one-to-many relationship — and a dynamic predicate
//! composer for querying it. Every filter parameter is optional; present
//! parameters fold into a single conjunction, absent ones contribute no
//! constraint, and the empty filter matches every row.
//!
//! ## Features
//!
//! - **Dynamic Predicates**: optional equality and range conditions composed
//!   with a null-tolerant AND fold
//! - **Sorting & Pagination**: multi-key ordering with nulls always last,
//!   offset/limit paging
//! - **Joins & Subqueries**: inner joins, join-with-predicate, theta joins,
//!   fetch joins, correlated-free subqueries in WHERE and SELECT
//! - **Projections**: DTO instantiation by setter, field, constructor, or
//!   derived row mapping — all equivalent
//! - **Bulk Mutations**: set-based update/delete returning affected-row
//!   counts, with an explicit identity-map invalidation step
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster_store::{MemberFilter, NewMember, RosterStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::builder("sqlite::memory:").build();
//!     let store = RosterStore::new(config).await?;
//!
//!     let team = store.insert_team("teamA").await?;
//!     store
//!         .insert_member(NewMember::new("memb1", 31).in_team(team.id))
//!         .await?;
//!
//!     // Only present parameters constrain the query.
//!     let members = store
//!         .search(&MemberFilter::new().username_eq("memb1"), &[], None)
//!         .await?;
//!     assert_eq!(members.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Caching
//!
//! Inserts and single-row reads prime an in-memory identity map, and
//! [`RosterStore::get_member`] serves from it. Bulk mutations bypass the map,
//! so call [`RosterStore::invalidate_cache`] between a bulk write and any
//! dependent read — otherwise the read may return stale cached rows. This is
//! a documented contract, not an error the store can detect.

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod filter;
pub mod sql;
pub mod store;

// Re-export main types for convenience
pub use config::{StoreConfig, StoreConfigBuilder};
pub use dto::{MemberDto, UserDto};
pub use entity::{Member, MemberWithTeam, NewMember, Team};
pub use error::{Result, StoreError};
pub use filter::{Direction, MemberFilter, Page, SortField, SortKey};
pub use store::{AgeSummary, RosterStore};

// Re-export SQL utilities for advanced users
pub use sql::condition::{build_order_by_clause, Condition, Param};
