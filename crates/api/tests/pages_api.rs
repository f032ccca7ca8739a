mod common;

use sqlx::PgPool;

use common::{build_test_app, data_of, get};

async fn seed_unit(pool: &PgPool, category: &str, symbol: &str, category_zh: Option<&str>) {
    sqlx::query(
        "INSERT INTO unit_dictionary (symbol, category, category_zh, is_active)
         VALUES ($1, $2, $3, TRUE)",
    )
    .bind(symbol)
    .bind(category)
    .bind(category_zh)
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_name(pool: &PgPool, symbol: &str, lang: &str, name: &str) {
    sqlx::query(
        "INSERT INTO unit_localizations (unit_symbol, lang_code, name) VALUES ($1, $2, $3)",
    )
    .bind(symbol)
    .bind(lang)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pair_page_builds_a_complete_payload(pool: PgPool) {
    seed_unit(&pool, "length", "m", Some("长度")).await;
    seed_unit(&pool, "length", "cm", Some("长度")).await;
    seed_name(&pool, "m", "zh", "米").await;
    seed_name(&pool, "cm", "zh", "厘米").await;

    let app = build_test_app(pool);
    let data = data_of(get(app, "/api/v1/pages/length/m-to-cm").await).await;

    assert_eq!(data["category"], "length");
    assert_eq!(data["category_name"], "长度");
    assert_eq!(data["from"], "m");
    assert_eq!(data["to"], "cm");
    assert_eq!(data["from_name"], "米");
    assert_eq!(data["to_name"], "厘米");
    assert_eq!(data["value"], "1");
    assert_eq!(data["output_value"], "100");
    assert_eq!(data["ratio"], 100.0);
    assert_eq!(data["convertible"], true);
    assert_eq!(data["symbols"], serde_json::json!(["cm", "m"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_label_is_suppressed_outside_chinese_locales(pool: PgPool) {
    seed_unit(&pool, "length", "m", Some("长度")).await;
    seed_unit(&pool, "length", "cm", Some("长度")).await;

    let app = build_test_app(pool);
    let data = data_of(get(app, "/api/v1/pages/length/m-to-cm?locale=en").await).await;
    assert_eq!(data["category_name"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn value_pair_page_parses_the_embedded_value(pool: PgPool) {
    let app = build_test_app(pool);
    let data = data_of(get(app, "/api/v1/pages/length/m-to-ft/5m-to-ft").await).await;

    assert_eq!(data["from"], "m");
    assert_eq!(data["to"], "ft");
    assert_eq!(data["value"], "5");
    assert_eq!(data["convertible"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn value_pair_page_falls_back_to_the_outer_pair(pool: PgPool) {
    let app = build_test_app(pool);
    // The inner slug names a target but no source unit.
    let data = data_of(get(app, "/api/v1/pages/length/m-to-ft/-to-cm").await).await;

    assert_eq!(data["from"], "m");
    assert_eq!(data["to"], "cm");
    assert_eq!(data["value"], "1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unconvertible_pair_still_renders(pool: PgPool) {
    let app = build_test_app(pool);
    let data = data_of(get(app, "/api/v1/pages/misc/m-to-kg").await).await;

    assert_eq!(data["convertible"], false);
    assert_eq!(data["ratio"], serde_json::Value::Null);
    assert_eq!(data["output_value"], serde_json::Value::Null);
    // Names fall back to the symbols themselves.
    assert_eq!(data["from_name"], "m");
    assert_eq!(data["to_name"], "kg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mangled_slug_degrades_without_erroring(pool: PgPool) {
    let app = build_test_app(pool);
    let data = data_of(get(app, "/api/v1/pages/length/garbage").await).await;

    assert_eq!(data["from"], "garbage");
    assert_eq!(data["to"], "");
    assert_eq!(data["convertible"], false);
}
