//! Configuration for RosterStore
//!
//! Provides a builder pattern for configuring the roster store.

/// Configuration for the roster store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite database URL (e.g. `sqlite::memory:` or `sqlite://roster.db`)
    pub database_url: String,
    /// Maximum number of pooled connections (default: 1)
    ///
    /// In-memory databases are private to a single connection, so the default
    /// stays at 1. Raise it for file-backed databases.
    pub max_connections: u32,
    /// Whether to enforce foreign keys via `PRAGMA foreign_keys` (default: true)
    ///
    /// When enabled, a member referencing a nonexistent team fails at the
    /// store layer and the error propagates unchanged to the caller.
    pub foreign_keys: bool,
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder(database_url: impl Into<String>) -> StoreConfigBuilder {
        StoreConfigBuilder::new(database_url)
    }
}

/// Builder for StoreConfig
#[derive(Debug)]
pub struct StoreConfigBuilder {
    database_url: String,
    max_connections: u32,
    foreign_keys: bool,
}

impl StoreConfigBuilder {
    /// Create a new builder with the database URL
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 1,
            foreign_keys: true,
        }
    }

    /// Set the maximum number of pooled connections (default: 1)
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enable or disable foreign-key enforcement (default: true)
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            database_url: self.database_url,
            max_connections: self.max_connections,
            foreign_keys: self.foreign_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::builder("sqlite::memory:").build();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert!(config.foreign_keys);
    }

    #[test]
    fn test_builder_accepts_string() {
        let config = StoreConfig::builder(String::from("sqlite://roster.db")).build();
        assert_eq!(config.database_url, "sqlite://roster.db");
    }

    #[test]
    fn test_max_connections() {
        let config = StoreConfig::builder("sqlite://roster.db")
            .max_connections(8)
            .build();

        assert_eq!(config.max_connections, 8);
    }

    #[test]
    fn test_foreign_keys_disabled() {
        let config = StoreConfig::builder("sqlite::memory:")
            .foreign_keys(false)
            .build();

        assert!(!config.foreign_keys);
    }

    #[test]
    fn test_builder_order_independence() {
        let config1 = StoreConfig::builder("sqlite::memory:")
            .foreign_keys(false)
            .max_connections(4)
            .build();

        let config2 = StoreConfig::builder("sqlite::memory:")
            .max_connections(4)
            .foreign_keys(false)
            .build();

        assert_eq!(config1.max_connections, config2.max_connections);
        assert_eq!(config1.foreign_keys, config2.foreign_keys);
    }

    #[test]
    fn test_config_clone() {
        let config1 = StoreConfig::builder("sqlite::memory:")
            .max_connections(2)
            .build();

        let config2 = config1.clone();

        assert_eq!(config1.database_url, config2.database_url);
        assert_eq!(config1.max_connections, config2.max_connections);
    }

    #[test]
    fn test_config_debug() {
        let config = StoreConfig::builder("sqlite::memory:").build();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("StoreConfig"));
        assert!(debug_str.contains("database_url"));
    }
}
