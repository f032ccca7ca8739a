//! Repository for the `unit_conversion_logs` table, the usage-log store.
//!
//! Rows are keyed by the five-field natural key. `record` is a
//! read-then-write upsert: not atomic, and deliberately so. Concurrent
//! submissions of the same key may lose an increment (or hit the
//! primary-key conflict on first insert); the log is an approximate
//! analytics signal, not a ledger, and the weaker model matches what
//! the site has always done.

use std::collections::HashSet;

use chrono::Utc;
use sqlx::PgPool;
use unitconver_core::types::Timestamp;

use crate::models::conversion_log::{NewConversionLog, UnitConversionLog};

const COLUMNS: &str = "from_unit, input_value, to_unit, output_value, lang_code, \
     conversion_count, first_seen_at, last_seen_at";

/// Hard cap on `recent_for_units` results.
pub const RECENT_HARD_CAP: i64 = 100;

/// Default `recent_for_units` limit.
pub const RECENT_DEFAULT_LIMIT: i64 = 20;

/// Usage-log persistence keyed by the conversion natural key.
pub struct ConversionLogRepo;

impl ConversionLogRepo {
    /// Look up the row for an exact natural key.
    pub async fn find(
        pool: &PgPool,
        entry: &NewConversionLog,
    ) -> Result<Option<UnitConversionLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unit_conversion_logs \
             WHERE from_unit = $1 AND input_value = $2 AND to_unit = $3 \
               AND output_value = $4 AND lang_code = $5"
        );
        sqlx::query_as::<_, UnitConversionLog>(&query)
            .bind(&entry.from_unit)
            .bind(&entry.input_value)
            .bind(&entry.to_unit)
            .bind(&entry.output_value)
            .bind(&entry.lang_code)
            .fetch_optional(pool)
            .await
    }

    /// Insert a first-seen row with count 1 and both timestamps = `now`.
    async fn insert(
        pool: &PgPool,
        entry: &NewConversionLog,
        now: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO unit_conversion_logs \
                (from_unit, input_value, to_unit, output_value, lang_code, \
                 conversion_count, first_seen_at, last_seen_at) \
             VALUES ($1, $2, $3, $4, $5, 1, $6, $6)",
        )
        .bind(&entry.from_unit)
        .bind(&entry.input_value)
        .bind(&entry.to_unit)
        .bind(&entry.output_value)
        .bind(&entry.lang_code)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Increment the counter and touch `last_seen_at` for an existing
    /// key. `first_seen_at` is never mutated.
    async fn touch(
        pool: &PgPool,
        entry: &NewConversionLog,
        now: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE unit_conversion_logs \
             SET conversion_count = conversion_count + 1, last_seen_at = $6 \
             WHERE from_unit = $1 AND input_value = $2 AND to_unit = $3 \
               AND output_value = $4 AND lang_code = $5",
        )
        .bind(&entry.from_unit)
        .bind(&entry.input_value)
        .bind(&entry.to_unit)
        .bind(&entry.output_value)
        .bind(&entry.lang_code)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Record one successful conversion: increment the existing row or
    /// insert a fresh one.
    ///
    /// A concurrent first insert for the same key surfaces as a
    /// primary-key violation here; that race loses one increment and is
    /// accepted, so it is downgraded to a debug log instead of an error.
    pub async fn record(pool: &PgPool, entry: &NewConversionLog) -> Result<(), sqlx::Error> {
        let now = Utc::now();

        if Self::find(pool, entry).await?.is_some() {
            Self::touch(pool, entry, now).await?;
            return Ok(());
        }

        match Self::insert(pool, entry, now).await {
            Ok(()) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                tracing::debug!(
                    from = %entry.from_unit,
                    to = %entry.to_unit,
                    "Concurrent log insert raced, dropping one increment"
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Rows where `from_unit` OR `to_unit` is in `symbols`, deduplicated
    /// by natural key (first occurrence wins), ordered by `last_seen_at`
    /// descending and truncated to `limit`.
    pub async fn recent_for_units(
        pool: &PgPool,
        symbols: &[String],
        limit: i64,
    ) -> Result<Vec<UnitConversionLog>, sqlx::Error> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.clamp(1, RECENT_HARD_CAP);

        let by_from = Self::recent_matching(pool, "from_unit", symbols, limit).await?;
        let by_to = Self::recent_matching(pool, "to_unit", symbols, limit).await?;

        Ok(merge_recent(by_from, by_to, limit as usize))
    }

    async fn recent_matching(
        pool: &PgPool,
        column: &str,
        symbols: &[String],
        limit: i64,
    ) -> Result<Vec<UnitConversionLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unit_conversion_logs \
             WHERE {column} = ANY($1) \
             ORDER BY last_seen_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, UnitConversionLog>(&query)
            .bind(symbols)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

/// Merge two recency-ordered result sets: first occurrence of a natural
/// key wins, output sorted by `last_seen_at` descending, truncated to
/// `limit`. ISO-8601 ordering and timestamp ordering agree, so sorting
/// on the typed timestamps is stable and sufficient.
fn merge_recent(
    a: Vec<UnitConversionLog>,
    b: Vec<UnitConversionLog>,
    limit: usize,
) -> Vec<UnitConversionLog> {
    let mut seen = HashSet::new();
    let mut merged: Vec<UnitConversionLog> = a
        .into_iter()
        .chain(b)
        .filter(|row| seen.insert(row.natural_key()))
        .collect();
    merged.sort_by(|x, y| y.last_seen_at.cmp(&x.last_seen_at));
    merged.truncate(limit);
    merged
}
