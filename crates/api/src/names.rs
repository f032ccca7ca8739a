//! Unit display-name resolution.
//!
//! A symbol's display name comes from an ordered list of lookup layers,
//! merged first-match-wins per symbol (later layers never overwrite an
//! already-resolved symbol):
//!
//! 1. `unit_localizations` rows filtered to the locale's candidate
//!    language list, in candidate-priority order
//! 2. the category's static snapshot file
//! 3. the raw symbol itself, with the "no data" source sentinel
//!
//! The resolver never fails: a store error degrades to an empty layer
//! and the caller still gets a complete map via the symbol fallback.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;

use unitconver_core::locale::{self, SOURCE_NO_DATA};
use unitconver_db::repositories::UnitRepo;

use crate::snapshot::SnapshotStore;

/// A resolved display name and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedName {
    pub name: String,
    /// Source description: the localization row's own description, the
    /// snapshot marker, or the "no data" sentinel.
    pub source: String,
}

/// Source marker for names served from a snapshot file.
const SOURCE_SNAPSHOT: &str = "snapshot";

pub struct NameResolver<'a> {
    pool: &'a PgPool,
    snapshots: &'a SnapshotStore,
}

impl<'a> NameResolver<'a> {
    pub fn new(pool: &'a PgPool, snapshots: &'a SnapshotStore) -> Self {
        Self { pool, snapshots }
    }

    /// Resolve display names for `symbols` in a locale, with the
    /// category's snapshot as the second layer. Every input symbol is
    /// present in the result.
    pub async fn resolve(
        &self,
        category: &str,
        symbols: &[String],
        locale: &str,
    ) -> HashMap<String, ResolvedName> {
        let layers = [
            self.from_localizations(symbols, locale).await,
            self.from_snapshot(category, symbols).await,
            from_raw_symbols(symbols),
        ];

        let mut resolved: HashMap<String, ResolvedName> = HashMap::new();
        for layer in layers {
            for (symbol, name) in layer {
                resolved.entry(symbol).or_insert(name);
            }
        }
        resolved
    }

    /// Layer 1: the localization table, first row per symbol wins in
    /// candidate-priority order. Store errors degrade to an empty layer.
    async fn from_localizations(
        &self,
        symbols: &[String],
        locale: &str,
    ) -> HashMap<String, ResolvedName> {
        let candidates = locale::lang_candidates(locale);
        let rows = match UnitRepo::localized_names(self.pool, symbols, &candidates).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, "Localization lookup failed, degrading to fallbacks");
                return HashMap::new();
            }
        };

        let mut layer = HashMap::new();
        for row in rows {
            if row.name.is_empty() {
                continue;
            }
            layer.entry(row.unit_symbol).or_insert(ResolvedName {
                name: row.name,
                source: row.source_description.unwrap_or_else(|| SOURCE_NO_DATA.to_string()),
            });
        }
        layer
    }

    /// Layer 2: the category's static snapshot names.
    async fn from_snapshot(
        &self,
        category: &str,
        symbols: &[String],
    ) -> HashMap<String, ResolvedName> {
        let Some(snapshot) = self.snapshots.get(category).await else {
            return HashMap::new();
        };

        symbols
            .iter()
            .filter_map(|symbol| {
                snapshot.names.get(symbol).map(|name| {
                    (
                        symbol.clone(),
                        ResolvedName {
                            name: name.clone(),
                            source: SOURCE_SNAPSHOT.to_string(),
                        },
                    )
                })
            })
            .collect()
    }
}

/// Layer 3: absolute fallback, the symbol names itself.
fn from_raw_symbols(symbols: &[String]) -> HashMap<String, ResolvedName> {
    symbols
        .iter()
        .map(|symbol| {
            (
                symbol.clone(),
                ResolvedName {
                    name: symbol.clone(),
                    source: SOURCE_NO_DATA.to_string(),
                },
            )
        })
        .collect()
}

/// Project a resolved map down to plain symbol → name pairs for API
/// payloads that do not carry sources.
pub fn names_only(resolved: &HashMap<String, ResolvedName>) -> HashMap<String, String> {
    resolved
        .iter()
        .map(|(symbol, r)| (symbol.clone(), r.name.clone()))
        .collect()
}
