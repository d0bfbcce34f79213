use std::ops::Deref;

use log::info;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{JobListing, ListingKey, SeenListingStore, StdResult};

const CREATE_SCHEMA_QUERIES: [&str; 2] = [
    "CREATE SCHEMA IF NOT EXISTS jobs",
    r#"
CREATE TABLE IF NOT EXISTS jobs.seen_listing (
    title TEXT NOT NULL,
    iso_date TEXT NOT NULL,
    url TEXT NOT NULL,
    first_seen_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (title, iso_date)
)
    "#,
];

/// A seen listing store backed by a PostgreSQL database.
pub struct PostgresSqlSeenStore {
    pool: PgPool,
}

impl PostgresSqlSeenStore {
    /// Creates a new `PostgresSqlSeenStore` instance, creating its table if needed.
    pub async fn try_new(connection_string: &str) -> StdResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(connection_string)
            .await?;
        for query in CREATE_SCHEMA_QUERIES {
            sqlx::query(query).execute(&pool).await?;
        }

        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl SeenListingStore for PostgresSqlSeenStore {
    async fn is_new(&self, key: &ListingKey) -> StdResult<bool> {
        let row: (bool,) = sqlx::query_as(
            r#"
SELECT EXISTS (
    SELECT 1 FROM jobs.seen_listing WHERE title = $1 AND iso_date = $2
)
            "#,
        )
        .bind(key.title.deref().to_owned())
        .bind(key.date.deref().to_owned())
        .fetch_one(&self.pool)
        .await?;

        Ok(!row.0)
    }

    async fn mark_seen(&self, listings: &[JobListing]) -> StdResult<u32> {
        let mut total_inserted = 0;
        for listing in listings {
            let result = sqlx::query(
                r#"
INSERT INTO jobs.seen_listing (title, iso_date, url)
VALUES ($1, $2, $3)
ON CONFLICT (title, iso_date) DO NOTHING
                "#,
            )
            .bind(listing.title().deref().to_owned())
            .bind(listing.date().deref().to_owned())
            .bind(listing.url().to_owned())
            .execute(&self.pool)
            .await?;
            if result.rows_affected() == 0 {
                info!("Already recorded {}", listing.key());
            } else {
                info!("Recorded {}", listing.key());
            }
            total_inserted += result.rows_affected() as u32;
        }

        Ok(total_inserted)
    }
}
