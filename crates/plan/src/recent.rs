use std::collections::HashSet;

use sqlx::SqlitePool;

const SLOT_KEY: &str = "last_accepted_meals";

/// The single persisted preference: which meal ids were accepted last time.
/// Stored as a JSON string array in one row of the `preference` table.
#[derive(Clone)]
pub struct RecentSelections {
    pool: SqlitePool,
}

impl RecentSelections {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS preference (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Ids accepted last time. Fails soft: a missing slot, a database error
    /// or garbage in the slot all read as "nothing recent".
    pub async fn load(&self) -> HashSet<String> {
        let row: Result<Option<(String,)>, sqlx::Error> =
            sqlx::query_as("SELECT value FROM preference WHERE key = ?")
                .bind(SLOT_KEY)
                .fetch_optional(&self.pool)
                .await;

        let value = match row {
            Ok(Some((value,))) => value,
            Ok(None) => return HashSet::new(),
            Err(err) => {
                tracing::warn!(err = %err, "failed to read recent selections, treating as empty");
                return HashSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&value) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                tracing::warn!(err = %err, "recent selections slot is not valid JSON, treating as empty");
                HashSet::new()
            }
        }
    }

    pub async fn save(&self, ids: &[String]) -> sqlx::Result<()> {
        let value = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_owned());

        sqlx::query(
            "INSERT INTO preference (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(SLOT_KEY)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn load_on_empty_slot_is_empty() {
        let pool = memory_pool().await;
        RecentSelections::migrate(&pool).await.unwrap();

        let recent = RecentSelections::new(pool);
        assert!(recent.load().await.is_empty());
    }

    #[tokio::test]
    async fn load_without_table_is_empty_not_an_error() {
        let pool = memory_pool().await;
        let recent = RecentSelections::new(pool);
        assert!(recent.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let pool = memory_pool().await;
        RecentSelections::migrate(&pool).await.unwrap();

        let recent = RecentSelections::new(pool);
        recent
            .save(&["3".to_owned(), "7".to_owned()])
            .await
            .unwrap();

        let ids = recent.load().await;
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("3") && ids.contains("7"));
    }

    #[tokio::test]
    async fn save_replaces_the_previous_slot() {
        let pool = memory_pool().await;
        RecentSelections::migrate(&pool).await.unwrap();

        let recent = RecentSelections::new(pool);
        recent.save(&["1".to_owned()]).await.unwrap();
        recent.save(&["2".to_owned()]).await.unwrap();

        let ids = recent.load().await;
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("2"));
    }

    #[tokio::test]
    async fn garbage_in_the_slot_reads_as_empty() {
        let pool = memory_pool().await;
        RecentSelections::migrate(&pool).await.unwrap();

        sqlx::query("INSERT INTO preference (key, value) VALUES ('last_accepted_meals', 'not json')")
            .execute(&pool)
            .await
            .unwrap();

        let recent = RecentSelections::new(pool);
        assert!(recent.load().await.is_empty());
    }
}
