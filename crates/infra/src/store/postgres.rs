//! Postgres-backed catalog store.
//!
//! One table per entity kind, all with the same shape:
//! `id BIGSERIAL`, a label column, `price`, a maker column, `image`,
//! `is_on_special`. The per-kind column names come from [`PgTable`].

use std::marker::PhantomData;

use anyhow::Context;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use gamestore_catalog::{Accessory, CatalogEntity, Console, Game, ItemFields};
use gamestore_core::Price;

use super::{CatalogStore, StoreError, StoreResult};

/// Table and column mapping for an entity kind.
pub trait PgTable {
    const TABLE: &'static str;
    const LABEL_COLUMN: &'static str;
    const MAKER_COLUMN: &'static str;
}

impl PgTable for Game {
    const TABLE: &'static str = "games";
    const LABEL_COLUMN: &'static str = "title";
    const MAKER_COLUMN: &'static str = "developer";
}

impl PgTable for Console {
    const TABLE: &'static str = "consoles";
    const LABEL_COLUMN: &'static str = "model";
    const MAKER_COLUMN: &'static str = "manufacturer";
}

impl PgTable for Accessory {
    const TABLE: &'static str = "accessories";
    const LABEL_COLUMN: &'static str = "name";
    const MAKER_COLUMN: &'static str = "manufacturer";
}

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS games (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL UNIQUE,
        price DOUBLE PRECISION NOT NULL,
        developer TEXT NOT NULL DEFAULT '',
        image TEXT,
        is_on_special BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS consoles (
        id BIGSERIAL PRIMARY KEY,
        model TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        manufacturer TEXT NOT NULL DEFAULT '',
        image TEXT,
        is_on_special BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS accessories (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        manufacturer TEXT NOT NULL DEFAULT '',
        image TEXT,
        is_on_special BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
];

/// Open a connection pool.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")
}

/// Create the catalog tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .context("failed to create catalog schema")?;
    }
    Ok(())
}

/// Postgres store for one entity kind.
///
/// `PgPool` is internally reference counted, so one pool is shared by the
/// three per-kind stores.
pub struct PostgresCatalogStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PostgresCatalogStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E: CatalogEntity + PgTable> PostgresCatalogStore<E> {
    fn returning() -> String {
        format!(
            "id, {label} AS label, price, {maker} AS maker, image, is_on_special",
            label = E::LABEL_COLUMN,
            maker = E::MAKER_COLUMN,
        )
    }

    fn select(tail: &str) -> String {
        format!("SELECT {} FROM {} {}", Self::returning(), E::TABLE, tail)
    }

    fn from_row(row: &PgRow) -> Result<E, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let fields = ItemFields {
            label: row.try_get("label")?,
            price: Price::new(row.try_get::<f64, _>("price")?),
            maker: row.try_get("maker")?,
            image: row.try_get("image")?,
            is_on_special: row.try_get("is_on_special")?,
        };
        Ok(E::from_fields(E::Id::from(id), fields))
    }

    fn from_rows(rows: Vec<PgRow>, operation: &'static str) -> StoreResult<Vec<E>> {
        rows.iter()
            .map(Self::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_sqlx_error::<E>(operation, e))
    }
}

#[async_trait::async_trait]
impl<E: CatalogEntity + PgTable> CatalogStore<E> for PostgresCatalogStore<E> {
    async fn get(&self, id: E::Id) -> StoreResult<Option<E>> {
        let key: i64 = id.into();
        let row = sqlx::query(&Self::select("WHERE id = $1"))
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("get", e))?;

        row.as_ref()
            .map(Self::from_row)
            .transpose()
            .map_err(|e| map_sqlx_error::<E>("get", e))
    }

    async fn list(&self) -> StoreResult<Vec<E>> {
        let rows = sqlx::query(&Self::select("ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("list", e))?;
        Self::from_rows(rows, "list")
    }

    async fn find_on_special(&self) -> StoreResult<Vec<E>> {
        let rows = sqlx::query(&Self::select("WHERE is_on_special ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("find_on_special", e))?;
        Self::from_rows(rows, "find_on_special")
    }

    async fn insert(&self, fields: ItemFields) -> StoreResult<E> {
        let sql = format!(
            "INSERT INTO {table} ({label}, price, {maker}, image, is_on_special) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {returning}",
            table = E::TABLE,
            label = E::LABEL_COLUMN,
            maker = E::MAKER_COLUMN,
            returning = Self::returning(),
        );
        let row = sqlx::query(&sql)
            .bind(fields.label)
            .bind(fields.price.amount())
            .bind(fields.maker)
            .bind(fields.image)
            .bind(fields.is_on_special)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("insert", e))?;

        Self::from_row(&row).map_err(|e| map_sqlx_error::<E>("insert", e))
    }

    async fn update(&self, id: E::Id, fields: ItemFields) -> StoreResult<Option<E>> {
        let sql = format!(
            "UPDATE {table} SET {label} = $1, price = $2, {maker} = $3, image = $4, \
             is_on_special = $5 WHERE id = $6 RETURNING {returning}",
            table = E::TABLE,
            label = E::LABEL_COLUMN,
            maker = E::MAKER_COLUMN,
            returning = Self::returning(),
        );
        let key: i64 = id.into();
        let row = sqlx::query(&sql)
            .bind(fields.label)
            .bind(fields.price.amount())
            .bind(fields.maker)
            .bind(fields.image)
            .bind(fields.is_on_special)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("update", e))?;

        row.as_ref()
            .map(Self::from_row)
            .transpose()
            .map_err(|e| map_sqlx_error::<E>("update", e))
    }

    async fn delete(&self, id: E::Id) -> StoreResult<bool> {
        let key: i64 = id.into();
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", E::TABLE))
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error::<E>("delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Check if an error is a unique constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            return code.as_ref() == "23505";
        }
    }
    false
}

fn map_sqlx_error<E: PgTable>(operation: &str, err: sqlx::Error) -> StoreError {
    if is_unique_violation(&err) {
        return StoreError::UniqueViolation(format!("{}: {}", E::TABLE, err));
    }
    StoreError::Backend(
        anyhow::Error::new(err).context(format!("sqlx error in {} on {}", operation, E::TABLE)),
    )
}
