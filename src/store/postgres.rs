//! Postgres adapter for the name store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{NameRecord, NewName, OriginCount, RecordPage};

use super::{clamp_page_index, like_pattern, DatabaseConfig, NameStore};

const SELECT_COLUMNS: &str = "id, name, meaning, origin, reason, search_count";

#[derive(Clone, Debug)]
pub struct PgNameStore {
    pool: PgPool,
}

impl PgNameStore {
    pub async fn connect(config: &DatabaseConfig) -> CatalogResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.database_url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `names` table and its filter indexes if they do not exist.
    pub async fn init_schema(&self) -> CatalogResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS names (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                meaning TEXT,
                origin TEXT,
                reason TEXT,
                search_count BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_names_name ON names (name)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_names_origin ON names (origin)")
            .execute(&self.pool)
            .await?;

        info!("Postgres schema verified");
        Ok(())
    }
}

#[async_trait::async_trait]
impl NameStore for PgNameStore {
    async fn find_by_name_substring(&self, term: &str) -> CatalogResult<Vec<NameRecord>> {
        let records = sqlx::query_as::<_, NameRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM names WHERE name ILIKE $1 ORDER BY name ASC"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn list_filtered(
        &self,
        name_filter: &str,
        origin_filter: &str,
        page_index: i64,
        page_size: i64,
    ) -> CatalogResult<RecordPage> {
        let page_size = page_size.max(1);
        let name_pattern = like_pattern(name_filter);
        let origin_pattern = like_pattern(origin_filter);

        // A blank origin filter must not exclude rows with a NULL origin.
        let total_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM names \
             WHERE name ILIKE $1 AND ($2 = '' OR origin ILIKE $3)",
        )
        .bind(&name_pattern)
        .bind(origin_filter)
        .bind(&origin_pattern)
        .fetch_one(&self.pool)
        .await?;

        let (page_index, page_count) = clamp_page_index(page_index, total_count, page_size);
        let offset = (page_index - 1) * page_size;

        let records = sqlx::query_as::<_, NameRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM names \
             WHERE name ILIKE $1 AND ($2 = '' OR origin ILIKE $3) \
             ORDER BY name ASC LIMIT $4 OFFSET $5"
        ))
        .bind(&name_pattern)
        .bind(origin_filter)
        .bind(&origin_pattern)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(RecordPage {
            records,
            total_count,
            page_index,
            page_count,
        })
    }

    async fn insert(&self, new: &NewName) -> CatalogResult<NameRecord> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM names WHERE LOWER(name) = LOWER($1)")
                .bind(&new.name)
                .fetch_optional(&self.pool)
                .await?;
        if existing.is_some() {
            return Err(CatalogError::Duplicate {
                name: new.name.clone(),
            });
        }

        let record = sqlx::query_as::<_, NameRecord>(&format!(
            "INSERT INTO names (name, meaning, origin, reason, search_count) \
             VALUES ($1, $2, $3, $4, 0) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.meaning)
        .bind(&new.origin)
        .bind(&new.reason)
        .fetch_one(&self.pool)
        .await?;

        info!("Registered name '{}' as record {}", record.name, record.id);
        Ok(record)
    }

    async fn set_search_count(&self, id: i64, new_value: i64) -> CatalogResult<()> {
        if new_value < 0 {
            return Err(CatalogError::Validation(
                "search count cannot be negative".to_string(),
            ));
        }

        let result = sqlx::query("UPDATE names SET search_count = $1 WHERE id = $2")
            .bind(new_value)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound { id });
        }
        Ok(())
    }

    async fn top_by_search_count(&self, limit: i64) -> CatalogResult<Vec<NameRecord>> {
        let records = sqlx::query_as::<_, NameRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM names \
             ORDER BY search_count DESC, id ASC LIMIT $1"
        ))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn count_by_origin(&self) -> CatalogResult<Vec<OriginCount>> {
        let counts = sqlx::query_as::<_, OriginCount>(
            "SELECT origin, COUNT(*) AS count FROM names \
             WHERE origin IS NOT NULL AND origin <> '' \
             GROUP BY origin ORDER BY count DESC, origin ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn count_all(&self) -> CatalogResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM names")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
