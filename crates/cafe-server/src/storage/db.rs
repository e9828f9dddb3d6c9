//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use cafe_core::{Cafe, CafeError, CafeStore, NewCafe, Seating};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database path selecting a private in-memory database
pub const MEMORY_PATH: &str = ":memory:";

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        if database_path == MEMORY_PATH {
            tracing::info!("Opening in-memory SQLite database");
            return Self::in_memory().await;
        }

        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tracing::info!("Creating parent directory: {}", parent.display());
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Private in-memory database
    ///
    /// Limited to one connection that is never recycled, since every SQLite
    /// memory connection owns a separate database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Columns mirror CAFE_COLUMNS, in the same order
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cafes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(250) UNIQUE NOT NULL,
                map_url VARCHAR(500) NOT NULL,
                img_url VARCHAR(500) NOT NULL,
                location VARCHAR(250) NOT NULL,
                seats VARCHAR(250) NOT NULL,
                has_toilet BOOLEAN NOT NULL,
                has_wifi BOOLEAN NOT NULL,
                has_sockets BOOLEAN NOT NULL,
                can_take_calls BOOLEAN NOT NULL,
                coffee_price VARCHAR(250)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CafeStore for Database {
    async fn insert(&self, cafe: &NewCafe) -> cafe_core::Result<Cafe> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafes (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(cafe.seats.label())
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return CafeError::duplicate_name(&cafe.name);
                }
            }
            unavailable(e)
        })?;

        Ok(Cafe::from_new(result.last_insert_rowid(), cafe.clone()))
    }

    async fn list_all(&self) -> cafe_core::Result<Vec<Cafe>> {
        let rows: Vec<CafeRow> = sqlx::query_as(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        rows.into_iter().map(Cafe::try_from).collect()
    }
}

fn unavailable(e: sqlx::Error) -> CafeError {
    CafeError::StoreUnavailable(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct CafeRow {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl TryFrom<CafeRow> for Cafe {
    type Error = CafeError;

    fn try_from(r: CafeRow) -> Result<Self, Self::Error> {
        let seats = Seating::from_str(&r.seats)
            .map_err(|e| CafeError::CorruptRow(format!("cafe {}: {}", r.id, e)))?;

        Ok(Cafe {
            id: r.id,
            name: r.name,
            map_url: r.map_url,
            img_url: r.img_url,
            location: r.location,
            seats,
            has_toilet: r.has_toilet,
            has_wifi: r.has_wifi,
            has_sockets: r.has_sockets,
            can_take_calls: r.can_take_calls,
            coffee_price: r.coffee_price,
        })
    }
}
