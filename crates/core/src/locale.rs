//! Locale to language-candidate mapping for name resolution.
//!
//! The localization table keys rows by exact `lang_code`, but a page
//! locale like "zh" should also match region variants. Candidate order
//! matters: the resolver takes the first row touched per symbol.

/// Default page locale.
pub const DEFAULT_LOCALE: &str = "zh";

/// Sentinel source used when a name falls back to the raw symbol.
pub const SOURCE_NO_DATA: &str = "no data";

/// Prioritized `lang_code` candidates for a page locale.
///
/// "en" locales match the English region variants; everything else is
/// treated as Chinese-family, matching the site's two shipped locales.
/// An unrecognized locale still gets itself plus its `-CN` variant so a
/// future locale degrades gracefully instead of matching nothing.
pub fn lang_candidates(locale: &str) -> Vec<String> {
    if locale.starts_with("en") {
        vec!["en".into(), "en-US".into(), "en-GB".into()]
    } else if locale.starts_with("zh") || locale.is_empty() {
        vec!["zh".into(), "zh-CN".into()]
    } else {
        vec![locale.to_string(), format!("{locale}-CN")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zh_maps_to_zh_family() {
        assert_eq!(lang_candidates("zh"), ["zh", "zh-CN"]);
        assert_eq!(lang_candidates("zh-TW"), ["zh", "zh-CN"]);
    }

    #[test]
    fn en_maps_to_en_family() {
        assert_eq!(lang_candidates("en"), ["en", "en-US", "en-GB"]);
        assert_eq!(lang_candidates("en-GB"), ["en", "en-US", "en-GB"]);
    }

    #[test]
    fn empty_locale_defaults_to_zh() {
        assert_eq!(lang_candidates(""), ["zh", "zh-CN"]);
    }

    #[test]
    fn unknown_locale_gets_itself_and_cn_variant() {
        assert_eq!(lang_candidates("fr"), ["fr", "fr-CN"]);
    }
}
