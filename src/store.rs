//! RosterStore - Main entry point for the member/team roster
//!
//! This module provides the `RosterStore` struct that owns the connection
//! pool, bootstraps the schema, and executes every query and mutation. All
//! timestamps are stamped here, on the write path, never by callers.
//!
//! Single-row reads and inserts prime an in-memory identity map. Bulk
//! mutations write straight to the database and bypass that map entirely, so
//! a dependent read must be preceded by [`RosterStore::invalidate_cache`] or
//! it may observe stale cached rows. That hazard is part of the contract, not
//! an error condition.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::{Row, Sqlite};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::dto::{MemberDto, UserDto};
use crate::entity::{Member, MemberWithTeam, NewMember, Team};
use crate::error::{Result, StoreError};
use crate::filter::{MemberFilter, Page, SortKey};
use crate::sql::condition::{build_order_by_clause, Param};
use crate::sql::ddl;

const MEMBER_COLUMNS: &str = "id, username, age, team_id, created_at, updated_at";

/// Aggregate statistics over member ages
///
/// `sum`, `avg`, `max`, and `min` are `None` when no row matched.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeSummary {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub max: Option<i64>,
    pub min: Option<i64>,
}

/// SQLite-backed member/team roster store
pub struct RosterStore {
    /// Database connection pool
    pool: SqlitePool,
    /// Store configuration
    config: StoreConfig,
    /// Identity map: members keyed by id, primed by inserts and single-row
    /// reads, cleared only by `invalidate_cache`
    cache: Mutex<HashMap<i64, Member>>,
}

impl RosterStore {
    /// Create a new RosterStore from configuration
    ///
    /// This will:
    /// 1. Connect to the database
    /// 2. Create the roster tables if they don't exist
    pub async fn new(config: StoreConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::Connection(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(config.foreign_keys);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(format!("Database connection failed: {}", e)))?;

        let store = Self {
            pool,
            config,
            cache: Mutex::new(HashMap::new()),
        };
        store.ensure_schema().await?;

        Ok(store)
    }

    /// Create a new RosterStore from an existing pool
    ///
    /// Use this when you already have a connection pool and want to share it
    /// with the roster store. Foreign-key enforcement follows whatever the
    /// pool was configured with.
    pub async fn from_pool(pool: SqlitePool, config: StoreConfig) -> Result<Self> {
        let store = Self {
            pool,
            config,
            cache: Mutex::new(HashMap::new()),
        };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Get a reference to the connection pool
    ///
    /// Transactions come straight from sqlx: `store.pool().begin()`.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Ensures the roster tables exist
    async fn ensure_schema(&self) -> Result<()> {
        for statement in ddl::schema_statements() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("roster schema ready");
        Ok(())
    }

    /// Drop every cached member
    ///
    /// Must be called between a bulk mutation and any dependent read;
    /// otherwise reads served from the identity map return the pre-mutation
    /// rows.
    pub fn invalidate_cache(&self) {
        self.cache().clear();
    }

    // =========================================================================
    // Team Operations
    // =========================================================================

    /// Insert a new team, returning it with its assigned id
    pub async fn insert_team(&self, name: impl Into<String>) -> Result<Team> {
        let name = name.into();
        let now = Utc::now();

        let result = sqlx::query("INSERT INTO teams (name, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(&name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        debug!(team = %name, "inserted team");

        Ok(Team {
            id: result.last_insert_rowid(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a team by id
    pub async fn find_team(&self, id: i64) -> Result<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT id, name, created_at, updated_at FROM teams WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    /// Members of a team, as a derived query
    ///
    /// There is no stored member list on the team side; this query is the
    /// back-reference, so it can never drift out of sync with `team_id`.
    pub async fn team_members(&self, team_id: i64) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE team_id = ? ORDER BY id",
            MEMBER_COLUMNS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    // =========================================================================
    // Member Writes
    // =========================================================================

    /// Insert a new member, returning it with its assigned id
    ///
    /// A `team_id` referencing a nonexistent team fails at the store layer
    /// (foreign-key constraint) and the error propagates unchanged.
    pub async fn insert_member(&self, request: NewMember) -> Result<Member> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO members (username, age, team_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.username)
        .bind(request.age)
        .bind(request.team_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let member = Member {
            id: result.last_insert_rowid(),
            username: request.username,
            age: request.age,
            team_id: request.team_id,
            created_at: now,
            updated_at: now,
        };

        debug!(id = member.id, "inserted member");
        self.cache().insert(member.id, member.clone());

        Ok(member)
    }

    /// Change a member's username, refreshing `updated_at`
    pub async fn update_username(&self, id: i64, username: Option<String>) -> Result<Member> {
        let now = Utc::now();

        let result = sqlx::query("UPDATE members SET username = ?, updated_at = ? WHERE id = ?")
            .bind(&username)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(format!("member {}", id)));
        }

        self.reload_member(id).await
    }

    /// Move a member into a team (or out of any team with `None`)
    ///
    /// This is the single bidirectional-consistency operation: the member's
    /// reference is the only stored side, and `team_members` reflects the
    /// change without any separate persistence step.
    pub async fn assign_team(&self, member_id: i64, team_id: Option<i64>) -> Result<Member> {
        let now = Utc::now();

        let result = sqlx::query("UPDATE members SET team_id = ?, updated_at = ? WHERE id = ?")
            .bind(team_id)
            .bind(now)
            .bind(member_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(format!("member {}", member_id)));
        }

        self.reload_member(member_id).await
    }

    /// Re-read a member after a single-row write and refresh the cache entry
    async fn reload_member(&self, id: i64) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE id = ?",
            MEMBER_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        self.cache().insert(member.id, member.clone());
        Ok(member)
    }

    // =========================================================================
    // Member Reads
    // =========================================================================

    /// Get a member by id, served from the identity map when cached
    pub async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        if let Some(member) = self.cache().get(&id).cloned() {
            debug!(id, "member served from identity map");
            return Ok(Some(member));
        }

        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE id = ?",
            MEMBER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(member) = &member {
            self.cache().insert(member.id, member.clone());
        }

        Ok(member)
    }

    /// Fetch exactly one member matching the filter
    ///
    /// Zero matches is `NotFound`; more than one is `Ambiguous`, never a
    /// silent truncation to the first row.
    pub async fn find_one(&self, filter: &MemberFilter) -> Result<Member> {
        let cond = filter.condition();
        let sql = format!(
            "SELECT {} FROM members WHERE {} LIMIT 2",
            MEMBER_COLUMNS,
            cond.clause()
        );

        let query = bind_condition_as::<Member>(sqlx::query_as(&sql), cond.params());
        let mut rows = query.fetch_all(&self.pool).await?;

        match rows.len() {
            0 => Err(StoreError::not_found(format!(
                "no member matches {:?}",
                filter
            ))),
            1 => {
                let member = rows.remove(0);
                self.cache().insert(member.id, member.clone());
                Ok(member)
            }
            _ => Err(StoreError::ambiguous(format!(
                "more than one member matches {:?}",
                filter
            ))),
        }
    }

    /// Filtered, sorted, paginated member search
    ///
    /// The filter composes only its present parameters; an empty filter
    /// matches every member. `sort` is multi-key with nulls placed last, and
    /// `page` skips `offset` rows then returns at most `limit`.
    pub async fn search(
        &self,
        filter: &MemberFilter,
        sort: &[SortKey],
        page: Option<Page>,
    ) -> Result<Vec<Member>> {
        let cond = filter.condition();
        let order_by = build_order_by_clause(sort);

        let mut sql = format!(
            "SELECT {} FROM members WHERE {} ORDER BY {}",
            MEMBER_COLUMNS,
            cond.clause(),
            order_by
        );
        if page.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        debug!(clause = %cond.clause(), order_by = %order_by, "searching members");

        let mut query = bind_condition_as::<Member>(sqlx::query_as(&sql), cond.params());
        if let Some(page) = page {
            query = query.bind(page.limit).bind(page.offset);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Count members matching the filter
    pub async fn count(&self, filter: &MemberFilter) -> Result<i64> {
        let cond = filter.condition();
        let sql = format!("SELECT COUNT(*) FROM members WHERE {}", cond.clause());

        let query = bind_condition_as::<(i64,)>(sqlx::query_as(&sql), cond.params());
        let (count,) = query.fetch_one(&self.pool).await?;

        Ok(count)
    }

    // =========================================================================
    // Joins
    // =========================================================================

    /// Members belonging to the named team (inner join)
    pub async fn members_in_team(&self, team_name: &str) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT m.id, m.username, m.age, m.team_id, m.created_at, m.updated_at \
             FROM members m JOIN teams t ON m.team_id = t.id \
             WHERE t.name = ? ORDER BY m.id",
        )
        .bind(team_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Member/team pairs, joining on the relationship with an extra ON
    /// predicate restricting the team name
    pub async fn members_with_team_filtered(
        &self,
        team_name: &str,
    ) -> Result<Vec<(Member, Team)>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM members m JOIN teams t ON m.team_id = t.id AND t.name = ? ORDER BY m.id",
            PAIR_COLUMNS
        ))
        .bind(team_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(pair_from_row).collect()
    }

    /// Member/team pairs joined without a declared relationship: a theta
    /// join on username = team name
    pub async fn theta_join_username_team(&self) -> Result<Vec<(Member, Team)>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM members m JOIN teams t ON m.username = t.name ORDER BY m.id",
            PAIR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(pair_from_row).collect()
    }

    /// Fetch exactly one member with its team eagerly loaded in the same
    /// round trip (fetch join); the team is `None` for unaffiliated members
    ///
    /// Single-row semantics match [`RosterStore::find_one`].
    pub async fn find_member_with_team(&self, filter: &MemberFilter) -> Result<MemberWithTeam> {
        let cond = filter.qualified_condition("m.");
        let sql = format!(
            "SELECT {} FROM members m LEFT JOIN teams t ON m.team_id = t.id WHERE {} LIMIT 2",
            PAIR_COLUMNS,
            cond.clause()
        );

        let query = bind_condition(sqlx::query(&sql), cond.params());
        let rows = query.fetch_all(&self.pool).await?;

        match rows.len() {
            0 => Err(StoreError::not_found(format!(
                "no member matches {:?}",
                filter
            ))),
            1 => {
                let (member, team) = optional_pair_from_row(&rows[0])?;
                self.cache().insert(member.id, member.clone());
                Ok(MemberWithTeam { member, team })
            }
            _ => Err(StoreError::ambiguous(format!(
                "more than one member matches {:?}",
                filter
            ))),
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Count/sum/avg/max/min over the ages of matching members
    pub async fn age_summary(&self, filter: &MemberFilter) -> Result<AgeSummary> {
        let cond = filter.condition();
        let sql = format!(
            "SELECT COUNT(*), SUM(age), AVG(age), MAX(age), MIN(age) FROM members WHERE {}",
            cond.clause()
        );

        let query = bind_condition_as::<(i64, Option<i64>, Option<f64>, Option<i64>, Option<i64>)>(
            sqlx::query_as(&sql),
            cond.params(),
        );
        let (count, sum, avg, max, min) = query.fetch_one(&self.pool).await?;

        Ok(AgeSummary {
            count,
            sum,
            avg,
            max,
            min,
        })
    }

    /// Average member age per team name (join + GROUP BY)
    pub async fn average_age_by_team(&self) -> Result<Vec<(String, f64)>> {
        let rows = sqlx::query_as::<_, (String, f64)>(
            "SELECT t.name, AVG(m.age) FROM members m \
             JOIN teams t ON m.team_id = t.id \
             GROUP BY t.name ORDER BY t.name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // =========================================================================
    // Subqueries
    // =========================================================================

    /// Members whose age equals the maximum age
    pub async fn oldest_members(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE age = (SELECT MAX(age) FROM members) ORDER BY id",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Members whose age is at or above the average age
    pub async fn members_at_or_above_average(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE age >= (SELECT AVG(age) FROM members) ORDER BY id",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Members whose age appears among ages over the threshold (IN subquery)
    pub async fn members_with_age_over(&self, threshold: i64) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members \
             WHERE age IN (SELECT age FROM members WHERE age > ?) ORDER BY id",
            MEMBER_COLUMNS
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Every username alongside the overall average age (scalar subquery in
    /// the select list)
    pub async fn usernames_with_average_age(&self) -> Result<Vec<(Option<String>, f64)>> {
        let rows = sqlx::query_as::<_, (Option<String>, f64)>(
            "SELECT username, (SELECT AVG(age) FROM members) FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Label each member's age with a value-to-result case expression
    pub async fn age_labels(&self) -> Result<Vec<String>> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT CASE age \
                WHEN 31 THEN 'age thirty-one' \
                WHEN 32 THEN 'age thirty-two' \
                ELSE CAST(age AS TEXT) \
             END FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(label,)| label).collect())
    }

    /// Band each member's age with a range case expression
    pub async fn age_bands(&self) -> Result<Vec<String>> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT CASE \
                WHEN age BETWEEN 31 AND 32 THEN 'junior' \
                WHEN age BETWEEN 33 AND 34 THEN 'senior' \
                ELSE 'other' \
             END FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(band,)| band).collect())
    }

    /// `username_age` tags for matching members via string concatenation
    ///
    /// A member without a username yields `None` (NULL propagates through
    /// the concatenation).
    pub async fn username_age_tags(&self, filter: &MemberFilter) -> Result<Vec<Option<String>>> {
        let cond = filter.condition();
        let sql = format!(
            "SELECT username || '_' || CAST(age AS TEXT) FROM members WHERE {} ORDER BY id",
            cond.clause()
        );

        let query = bind_condition_as::<(Option<String>,)>(sqlx::query_as(&sql), cond.params());
        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|(tag,)| tag).collect())
    }

    // =========================================================================
    // Projections
    // =========================================================================
    //
    // Four equivalent instantiation strategies for MemberDto. They differ
    // only in how rows become records; identical input yields identical
    // result rows from each.

    /// Setter-style injection: start from a default record, assign each
    /// column
    pub async fn member_dtos_mapped(&self) -> Result<Vec<MemberDto>> {
        let rows = sqlx::query("SELECT username, age FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<MemberDto> {
                let mut dto = MemberDto::default();
                dto.username = row.try_get("username")?;
                dto.age = row.try_get("age")?;
                Ok(dto)
            })
            .collect()
    }

    /// Field injection: build the record directly from extracted columns
    pub async fn member_dtos_fields(&self) -> Result<Vec<MemberDto>> {
        let rows = sqlx::query("SELECT username, age FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<MemberDto> {
                Ok(MemberDto {
                    username: row.try_get("username")?,
                    age: row.try_get("age")?,
                })
            })
            .collect()
    }

    /// Constructor injection: decode a tuple row, pass it to the constructor
    pub async fn member_dtos_constructed(&self) -> Result<Vec<MemberDto>> {
        let rows = sqlx::query_as::<_, (Option<String>, i64)>(
            "SELECT username, age FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(username, age)| MemberDto::new(username, age))
            .collect())
    }

    /// Derived row mapping: the query layer instantiates the record through
    /// its compile-time `FromRow` implementation
    pub async fn member_dtos_derived(&self) -> Result<Vec<MemberDto>> {
        let dtos = sqlx::query_as::<_, MemberDto>("SELECT username, age FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(dtos)
    }

    /// Project into a differently shaped record: the username under an
    /// aliased column, the age from a scalar subquery (overall maximum)
    pub async fn user_dtos(&self) -> Result<Vec<UserDto>> {
        let dtos = sqlx::query_as::<_, UserDto>(
            "SELECT username AS name, (SELECT MAX(age) FROM members) AS age \
             FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(dtos)
    }

    // =========================================================================
    // Bulk Mutations
    // =========================================================================
    //
    // Set-based writes issued directly against the store. They bypass the
    // identity map: call `invalidate_cache` before any dependent read.

    /// Rename every matching member, returning the affected-row count
    pub async fn bulk_rename(&self, filter: &MemberFilter, username: &str) -> Result<u64> {
        let cond = filter.condition();
        let sql = format!(
            "UPDATE members SET username = ?, updated_at = ? WHERE {}",
            cond.clause()
        );

        let query = sqlx::query(&sql).bind(username).bind(Utc::now());
        let result = bind_condition(query, cond.params())
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "bulk rename");
        Ok(result.rows_affected())
    }

    /// Add `delta` to every member's age, returning the affected-row count
    pub async fn bulk_age_increment(&self, delta: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE members SET age = age + ?, updated_at = ?")
            .bind(delta)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "bulk age increment");
        Ok(result.rows_affected())
    }

    /// Delete every matching member, returning the affected-row count
    pub async fn bulk_delete(&self, filter: &MemberFilter) -> Result<u64> {
        let cond = filter.condition();
        let sql = format!("DELETE FROM members WHERE {}", cond.clause());

        let result = bind_condition(sqlx::query(&sql), cond.params())
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "bulk delete");
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn cache(&self) -> MutexGuard<'_, HashMap<i64, Member>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Aliased column list for member/team pair rows
const PAIR_COLUMNS: &str = "m.id AS m_id, m.username AS m_username, m.age AS m_age, \
     m.team_id AS m_team_id, m.created_at AS m_created_at, m.updated_at AS m_updated_at, \
     t.id AS t_id, t.name AS t_name, t.created_at AS t_created_at, t.updated_at AS t_updated_at";

fn member_from_pair_row(row: &SqliteRow) -> Result<Member> {
    Ok(Member {
        id: row.try_get("m_id")?,
        username: row.try_get("m_username")?,
        age: row.try_get("m_age")?,
        team_id: row.try_get("m_team_id")?,
        created_at: row.try_get("m_created_at")?,
        updated_at: row.try_get("m_updated_at")?,
    })
}

fn pair_from_row(row: &SqliteRow) -> Result<(Member, Team)> {
    let member = member_from_pair_row(row)?;
    let team = Team {
        id: row.try_get("t_id")?,
        name: row.try_get("t_name")?,
        created_at: row.try_get("t_created_at")?,
        updated_at: row.try_get("t_updated_at")?,
    };
    Ok((member, team))
}

/// Pair mapping for LEFT JOINs, where the team side may be entirely NULL
fn optional_pair_from_row(row: &SqliteRow) -> Result<(Member, Option<Team>)> {
    let member = member_from_pair_row(row)?;
    let team_id: Option<i64> = row.try_get("t_id")?;
    let team = match team_id {
        Some(id) => Some(Team {
            id,
            name: row.try_get("t_name")?,
            created_at: row.try_get("t_created_at")?,
            updated_at: row.try_get("t_updated_at")?,
        }),
        None => None,
    };
    Ok((member, team))
}

fn bind_condition<'q>(
    mut query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Param],
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Param::Text(s) => query.bind(s.clone()),
            Param::Int(i) => query.bind(*i),
        };
    }
    query
}

fn bind_condition_as<'q, O>(
    mut query: sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    params: &[Param],
) -> sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Param::Text(s) => query.bind(s.clone()),
            Param::Int(i) => query.bind(*i),
        };
    }
    query
}
