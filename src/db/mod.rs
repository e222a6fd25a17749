pub mod models;
pub mod repo;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Opens the SQLite pool, creating the database file if it does not exist.
///
/// Each connection to an in-memory database sees its own empty database, so
/// those pools are pinned to a single connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool_opts = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_opts.connect_with(opts).await
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory SQLite");
    repo::create_user_table(&pool)
        .await
        .expect("Failed to create users table");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://users?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://users.sqlite3"));
    }
}
