//! SQL building utilities
//!
//! - `condition`: WHERE-clause composition and ORDER BY building
//! - `ddl`: static schema bootstrap statements

pub mod condition;
pub mod ddl;
