//! Integration tests for the usage-log store upsert and recency feed.

use sqlx::PgPool;

use unitconver_db::models::conversion_log::NewConversionLog;
use unitconver_db::repositories::ConversionLogRepo;

fn entry(from: &str, value: &str, to: &str, out: &str, lang: &str) -> NewConversionLog {
    NewConversionLog {
        from_unit: from.into(),
        input_value: value.into(),
        to_unit: to.into(),
        output_value: out.into(),
        lang_code: lang.into(),
    }
}

// ---------------------------------------------------------------------------
// Test: repeated identical submissions count up on a single row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn identical_submissions_increment_one_row(pool: PgPool) {
    let e = entry("m", "5", "ft", "16.404199475065617", "zh");

    ConversionLogRepo::record(&pool, &e).await.unwrap();
    let after_first = ConversionLogRepo::find(&pool, &e).await.unwrap().unwrap();

    ConversionLogRepo::record(&pool, &e).await.unwrap();
    ConversionLogRepo::record(&pool, &e).await.unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM unit_conversion_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "identical natural keys must share one row");

    let row = ConversionLogRepo::find(&pool, &e).await.unwrap().unwrap();
    assert_eq!(row.conversion_count, 3);
    // first_seen_at is set once and never mutated.
    assert_eq!(row.first_seen_at, after_first.first_seen_at);
    // last_seen_at moved forward with the third call.
    assert!(row.last_seen_at >= after_first.last_seen_at);
}

// ---------------------------------------------------------------------------
// Test: lang_code is part of the natural key
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lang_code_splits_rows(pool: PgPool) {
    let zh = entry("m", "1", "ft", "3.280839895013123", "zh");
    let en = entry("m", "1", "ft", "3.280839895013123", "en");

    ConversionLogRepo::record(&pool, &zh).await.unwrap();
    ConversionLogRepo::record(&pool, &en).await.unwrap();

    let zh_row = ConversionLogRepo::find(&pool, &zh).await.unwrap().unwrap();
    let en_row = ConversionLogRepo::find(&pool, &en).await.unwrap().unwrap();
    assert_eq!(zh_row.conversion_count, 1);
    assert_eq!(en_row.conversion_count, 1);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM unit_conversion_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

// ---------------------------------------------------------------------------
// Test: input value text is matched exactly, no numeric normalization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn input_value_text_is_key_material(pool: PgPool) {
    ConversionLogRepo::record(&pool, &entry("kg", "1.5", "lb", "3.3", "zh"))
        .await
        .unwrap();
    ConversionLogRepo::record(&pool, &entry("kg", "1.50", "lb", "3.3", "zh"))
        .await
        .unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM unit_conversion_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2, "\"1.5\" and \"1.50\" are distinct keys");
}

// ---------------------------------------------------------------------------
// Test: recent_for_units matches either side and sorts by recency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recent_feed_is_recency_ordered(pool: PgPool) {
    // Insert out of recency order with explicit timestamps.
    sqlx::query(
        "INSERT INTO unit_conversion_logs \
         (from_unit, input_value, to_unit, output_value, lang_code, \
          conversion_count, first_seen_at, last_seen_at) VALUES \
         ('m',  '1', 'ft', '3.28', 'zh', 1, NOW() - INTERVAL '1 hour', NOW() - INTERVAL '1 hour'), \
         ('kg', '2', 'lb', '4.41', 'zh', 1, NOW(),                     NOW()), \
         ('cm', '3', 'in', '1.18', 'zh', 1, NOW() - INTERVAL '2 hour', NOW() - INTERVAL '2 hour')",
    )
    .execute(&pool)
    .await
    .unwrap();

    // "ft" only appears on the to_unit side; it must still match.
    let symbols: Vec<String> = ["m", "ft", "kg", "lb", "cm", "in"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let feed = ConversionLogRepo::recent_for_units(&pool, &symbols, 20)
        .await
        .unwrap();

    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0].from_unit, "kg");
    assert_eq!(feed[1].from_unit, "m");
    assert_eq!(feed[2].from_unit, "cm");
}

// ---------------------------------------------------------------------------
// Test: recent_for_units limit and empty-symbol behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recent_feed_respects_limit(pool: PgPool) {
    for i in 0..5 {
        ConversionLogRepo::record(&pool, &entry("m", &i.to_string(), "ft", "1", "zh"))
            .await
            .unwrap();
    }

    let symbols = vec!["m".to_string()];
    let feed = ConversionLogRepo::recent_for_units(&pool, &symbols, 2)
        .await
        .unwrap();
    assert_eq!(feed.len(), 2);

    let empty = ConversionLogRepo::recent_for_units(&pool, &[], 20)
        .await
        .unwrap();
    assert!(empty.is_empty());
}
