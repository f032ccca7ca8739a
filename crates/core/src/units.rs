//! Static measurement tables.
//!
//! The dictionary seeds unit symbols with the abbreviations used by the
//! site's URLs ("m", "kg", "fl-oz", ...). Each measure maps its units
//! onto a base unit through a linear/affine transform:
//!
//! ```text
//! base = value * factor + offset
//! ```
//!
//! `offset` is zero everywhere except temperature. The tables are the
//! conversion authority for the whole service; a symbol absent from
//! every measure is not convertible.

/// A unit inside one measure.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    /// Short symbol as it appears in URLs and the dictionary.
    pub abbr: &'static str,
    /// English display name (singular).
    pub name: &'static str,
    /// Multiplier onto the measure's base unit.
    pub factor: f64,
    /// Additive offset onto the base unit (temperature only).
    pub offset: f64,
}

/// One measurable quantity grouping convertible units.
#[derive(Debug, Clone, Copy)]
pub struct Measure {
    pub name: &'static str,
    pub units: &'static [UnitDef],
}

const fn unit(abbr: &'static str, name: &'static str, factor: f64) -> UnitDef {
    UnitDef {
        abbr,
        name,
        factor,
        offset: 0.0,
    }
}

const LENGTH: &[UnitDef] = &[
    unit("mm", "millimeter", 0.001),
    unit("cm", "centimeter", 0.01),
    unit("m", "meter", 1.0),
    unit("km", "kilometer", 1000.0),
    unit("in", "inch", 0.0254),
    unit("ft", "foot", 0.3048),
    unit("yd", "yard", 0.9144),
    unit("mi", "mile", 1609.344),
];

const MASS: &[UnitDef] = &[
    unit("mg", "milligram", 1e-6),
    unit("g", "gram", 0.001),
    unit("kg", "kilogram", 1.0),
    unit("t", "metric ton", 1000.0),
    unit("oz", "ounce", 0.028349523125),
    unit("lb", "pound", 0.45359237),
];

const AREA: &[UnitDef] = &[
    unit("mm2", "square millimeter", 1e-6),
    unit("cm2", "square centimeter", 1e-4),
    unit("m2", "square meter", 1.0),
    unit("ha", "hectare", 1e4),
    unit("km2", "square kilometer", 1e6),
    unit("in2", "square inch", 0.00064516),
    unit("ft2", "square foot", 0.09290304),
    unit("ac", "acre", 4046.8564224),
    unit("mi2", "square mile", 2_589_988.110336),
];

const VOLUME: &[UnitDef] = &[
    unit("ml", "milliliter", 0.001),
    unit("l", "liter", 1.0),
    unit("m3", "cubic meter", 1000.0),
    unit("tsp", "teaspoon", 0.00492892159375),
    unit("Tbs", "tablespoon", 0.01478676478125),
    unit("fl-oz", "fluid ounce", 0.0295735295625),
    unit("cup", "cup", 0.2365882365),
    unit("pnt", "pint", 0.473176473),
    unit("qt", "quart", 0.946352946),
    unit("gal", "gallon", 3.785411784),
];

// Base is degrees Celsius; Fahrenheit/Rankine are affine.
const TEMPERATURE: &[UnitDef] = &[
    unit("C", "degree Celsius", 1.0),
    UnitDef {
        abbr: "K",
        name: "kelvin",
        factor: 1.0,
        offset: -273.15,
    },
    UnitDef {
        abbr: "F",
        name: "degree Fahrenheit",
        factor: 5.0 / 9.0,
        offset: -160.0 / 9.0,
    },
    UnitDef {
        abbr: "R",
        name: "degree Rankine",
        factor: 5.0 / 9.0,
        offset: -273.15,
    },
];

const TIME: &[UnitDef] = &[
    unit("ms", "millisecond", 0.001),
    unit("s", "second", 1.0),
    unit("min", "minute", 60.0),
    unit("h", "hour", 3600.0),
    unit("d", "day", 86400.0),
    unit("week", "week", 604800.0),
    unit("month", "month", 2_629_800.0),
    unit("year", "year", 31_557_600.0),
];

const SPEED: &[UnitDef] = &[
    unit("m/s", "meter per second", 1.0),
    unit("km/h", "kilometer per hour", 1.0 / 3.6),
    unit("mph", "mile per hour", 0.44704),
    unit("knot", "knot", 0.514444444444444),
    unit("ft/s", "foot per second", 0.3048),
];

const DIGITAL: &[UnitDef] = &[
    unit("b", "bit", 1.0),
    unit("Kb", "kilobit", 1024.0),
    unit("Mb", "megabit", 1_048_576.0),
    unit("Gb", "gigabit", 1_073_741_824.0),
    unit("B", "byte", 8.0),
    unit("KB", "kilobyte", 8192.0),
    unit("MB", "megabyte", 8_388_608.0),
    unit("GB", "gigabyte", 8_589_934_592.0),
    unit("TB", "terabyte", 8_796_093_022_208.0),
];

/// All measures, in the order the category picker probes them.
pub const MEASURES: &[Measure] = &[
    Measure {
        name: "length",
        units: LENGTH,
    },
    Measure {
        name: "mass",
        units: MASS,
    },
    Measure {
        name: "area",
        units: AREA,
    },
    Measure {
        name: "volume",
        units: VOLUME,
    },
    Measure {
        name: "temperature",
        units: TEMPERATURE,
    },
    Measure {
        name: "time",
        units: TIME,
    },
    Measure {
        name: "speed",
        units: SPEED,
    },
    Measure {
        name: "digital",
        units: DIGITAL,
    },
];

impl Measure {
    /// Look up a unit by its abbreviation within this measure.
    pub fn find_unit(&self, abbr: &str) -> Option<&'static UnitDef> {
        self.units.iter().find(|u| u.abbr == abbr)
    }

    pub fn contains(&self, abbr: &str) -> bool {
        self.find_unit(abbr).is_some()
    }
}

/// First measure containing both symbols, if any.
pub fn measure_for_pair(from: &str, to: &str) -> Option<&'static Measure> {
    MEASURES
        .iter()
        .find(|m| m.contains(from) && m.contains(to))
}

/// Whether any measure knows this symbol.
pub fn is_known_symbol(abbr: &str) -> bool {
    MEASURES.iter().any(|m| m.contains(abbr))
}

/// English display name for a symbol, from the first measure that
/// defines it.
pub fn english_name(abbr: &str) -> Option<&'static str> {
    MEASURES
        .iter()
        .find_map(|m| m.find_unit(abbr))
        .map(|u| u.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_in_same_measure_is_found() {
        let m = measure_for_pair("m", "ft").unwrap();
        assert_eq!(m.name, "length");
    }

    #[test]
    fn pair_across_measures_is_not_found() {
        assert!(measure_for_pair("m", "kg").is_none());
    }

    #[test]
    fn unknown_symbol_is_not_known() {
        assert!(is_known_symbol("m"));
        assert!(!is_known_symbol("banana"));
    }

    #[test]
    fn abbreviations_are_unique_within_a_measure() {
        for measure in MEASURES {
            for (i, a) in measure.units.iter().enumerate() {
                for b in &measure.units[i + 1..] {
                    assert_ne!(a.abbr, b.abbr, "duplicate abbr in {}", measure.name);
                }
            }
        }
    }

    #[test]
    fn english_name_resolves() {
        assert_eq!(english_name("kg"), Some("kilogram"));
        assert_eq!(english_name("nope"), None);
    }
}
