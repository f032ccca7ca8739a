//! Codec for the public URL slug fragments.
//!
//! Two shapes exist, and both are public crawlable URLs so the encoded
//! forms are bit-exact contracts:
//!
//! - pair slug: `<from>-to-<to>` (percent-encoded components)
//! - value-pair slug: `<value><from>-to-<to>` where the value is a
//!   decimal prefix concatenated directly onto the from-symbol
//!
//! Decoding is total: malformed input degrades to empty/default fields
//! instead of erroring, so a bad URL still renders a page.

use std::sync::OnceLock;

use regex::Regex;

/// Literal separator between the two halves of a slug.
const SEPARATOR: &str = "-to-";

/// Default value when a value-pair slug carries no numeric prefix.
const DEFAULT_VALUE: &str = "1";

/// A decoded `<from>-to-<to>` fragment. Missing halves are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSlug {
    pub from: String,
    pub to: String,
}

/// A decoded `<value><from>-to-<to>` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePairSlug {
    /// The user-entered value, preserved as text (e.g. "1.50").
    pub value: String,
    pub from: String,
    pub to: String,
}

fn value_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]*\.?[0-9]+)([A-Za-z]+)$").unwrap())
}

/// Percent-decode a slug component, keeping the raw text when the
/// encoding is invalid UTF-8.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Decode a `<from>-to-<to>` slug. Never fails; absent halves are `""`.
pub fn decode_pair(slug: &str) -> PairSlug {
    let mut parts = slug.split(SEPARATOR);
    let from = parts.next().map(decode_component).unwrap_or_default();
    let to = parts.next().map(decode_component).unwrap_or_default();
    PairSlug { from, to }
}

/// Decode a `<value><from>-to-<to>` slug.
///
/// The left token is matched against `^([0-9]*\.?[0-9]+)([A-Za-z]+)$`;
/// when the match fails the whole token is treated as a bare unit
/// symbol and the value defaults to "1".
pub fn decode_value_pair(slug: &str) -> ValuePairSlug {
    let PairSlug { from: left, to } = decode_pair(slug);

    match value_prefix_re().captures(&left) {
        Some(caps) => ValuePairSlug {
            value: caps[1].to_string(),
            from: caps[2].to_string(),
            to,
        },
        None => ValuePairSlug {
            value: DEFAULT_VALUE.to_string(),
            from: left,
            to,
        },
    }
}

/// Encode a pair slug from raw symbols.
pub fn encode_pair(from: &str, to: &str) -> String {
    format!(
        "{}{SEPARATOR}{}",
        urlencoding::encode(from),
        urlencoding::encode(to)
    )
}

/// Encode a value-pair slug. The value and from-symbol are concatenated
/// before encoding, matching the links the site emits.
pub fn encode_value_pair(value: &str, from: &str, to: &str) -> String {
    let left = format!("{value}{from}");
    format!(
        "{}{SEPARATOR}{}",
        urlencoding::encode(&left),
        urlencoding::encode(to)
    )
}
