//! Schema bootstrap statements
//!
//! The roster schema is static: two tables and an index on the foreign key.
//! Statements are idempotent so the store constructor can run them on every
//! startup.

/// DDL statements executed by `RosterStore::new`, in order
pub fn schema_statements() -> [&'static str; 3] {
    [
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT,
            age INTEGER NOT NULL,
            team_id INTEGER REFERENCES teams(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS members_team_id_idx ON members(team_id)",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_are_idempotent() {
        for statement in schema_statements() {
            assert!(statement.contains("IF NOT EXISTS"));
        }
    }

    #[test]
    fn test_members_reference_teams() {
        let members = schema_statements()[1];
        assert!(members.contains("REFERENCES teams(id)"));
        // username and team_id stay nullable
        assert!(!members.contains("username TEXT NOT NULL"));
        assert!(members.contains("age INTEGER NOT NULL"));
    }

    #[test]
    fn test_timestamp_columns_present() {
        for statement in &schema_statements()[..2] {
            assert!(statement.contains("created_at"));
            assert!(statement.contains("updated_at"));
        }
    }
}
