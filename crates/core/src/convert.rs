//! The conversion engine.
//!
//! Values are decimal strings at the storage boundary (the exact text
//! the user typed is what gets logged) but plain `f64` during the
//! computation. No rounding is applied here; callers render whatever
//! the arithmetic yields.

use crate::error::CoreError;
use crate::units::{self, Measure};

/// Convert `value` between two unit symbols.
///
/// The measurement category is inferred as the first measure containing
/// both symbols; when none does the units have no conversion path and
/// [`CoreError::IncompatibleUnits`] is returned.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, CoreError> {
    let measure = units::measure_for_pair(from, to).ok_or_else(|| incompatible(from, to))?;

    // Both lookups succeed by construction of `measure_for_pair`.
    let from_def = measure.find_unit(from).ok_or_else(|| incompatible(from, to))?;
    let to_def = measure.find_unit(to).ok_or_else(|| incompatible(from, to))?;

    let base = value * from_def.factor + from_def.offset;
    Ok((base - to_def.offset) / to_def.factor)
}

/// Scalar ratio for explanatory text: "1 `from` = ratio `to`".
pub fn unit_ratio(from: &str, to: &str) -> Result<f64, CoreError> {
    convert(1.0, from, to)
}

/// Filter a category's dictionary symbols down to the convertible set.
///
/// Probes measures in table order and picks the first one sharing at
/// least two symbols with the candidates, preserving candidate order.
/// When no measure matches, falls back to the candidates known to any
/// measure; when even that is empty, the original list is returned
/// unchanged so the page still has something to show.
pub fn supported_symbols(candidates: &[String]) -> Vec<String> {
    for measure in units::MEASURES {
        let picked = intersect(candidates, measure);
        if picked.len() >= 2 {
            return picked;
        }
    }

    let known: Vec<String> = candidates
        .iter()
        .filter(|s| units::is_known_symbol(s))
        .cloned()
        .collect();
    if known.is_empty() {
        candidates.to_vec()
    } else {
        known
    }
}

fn intersect(candidates: &[String], measure: &Measure) -> Vec<String> {
    candidates
        .iter()
        .filter(|s| measure.contains(s))
        .cloned()
        .collect()
}

fn incompatible(from: &str, to: &str) -> CoreError {
    CoreError::IncompatibleUnits {
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // -- convert --

    #[test]
    fn meters_to_feet() {
        close(convert(1.0, "m", "ft").unwrap(), 1.0 / 0.3048);
        close(convert(5.0, "m", "ft").unwrap(), 5.0 / 0.3048);
    }

    #[test]
    fn kilograms_to_pounds() {
        close(convert(1.0, "kg", "lb").unwrap(), 1.0 / 0.45359237);
    }

    #[test]
    fn celsius_to_fahrenheit_affine() {
        close(convert(100.0, "C", "F").unwrap(), 212.0);
        close(convert(0.0, "C", "F").unwrap(), 32.0);
        close(convert(0.0, "C", "K").unwrap(), 273.15);
        close(convert(32.0, "F", "C").unwrap(), 0.0);
    }

    #[test]
    fn identity_conversion() {
        close(convert(42.0, "m", "m").unwrap(), 42.0);
    }

    #[test]
    fn incompatible_units_rejected() {
        let err = convert(1.0, "m", "kg").unwrap_err();
        match err {
            CoreError::IncompatibleUnits { from, to } => {
                assert_eq!(from, "m");
                assert_eq!(to, "kg");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_symbol_rejected() {
        assert!(convert(1.0, "m", "banana").is_err());
    }

    // -- unit_ratio --

    #[test]
    fn ratio_is_conversion_of_one() {
        close(unit_ratio("km", "m").unwrap(), 1000.0);
        close(unit_ratio("m", "km").unwrap(), 0.001);
    }

    // -- supported_symbols --

    #[test]
    fn picks_first_measure_with_two_matches() {
        let candidates = vec!["m".to_string(), "ft".to_string(), "banana".to_string()];
        assert_eq!(supported_symbols(&candidates), ["m", "ft"]);
    }

    #[test]
    fn single_known_symbol_falls_back_to_known_set() {
        let candidates = vec!["kg".to_string(), "banana".to_string()];
        assert_eq!(supported_symbols(&candidates), ["kg"]);
    }

    #[test]
    fn fully_unknown_list_is_returned_unchanged() {
        let candidates = vec!["foo".to_string(), "bar".to_string()];
        assert_eq!(supported_symbols(&candidates), ["foo", "bar"]);
    }
}
