//! Language name and code lookup for the gtx endpoint

/// Human-readable language names mapped to provider codes
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("chinese", "zh-CN"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("galician", "gl"),
    ("german", "de"),
    ("georgian", "ka"),
    ("greek", "el"),
    ("haitian creole", "ht"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("macedonian", "mk"),
    ("malay", "ms"),
    ("maltese", "mt"),
    ("norwegian", "no"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("serbian", "sr"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("spanish", "es"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("yiddish", "yi"),
];

/// Resolve a language name or provider code to the provider code.
///
/// Matching is exact and case-sensitive. Codes resolve to themselves.
pub fn resolve(identifier: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find_map(|&(name, code)| {
            if name == identifier || code == identifier {
                Some(code)
            } else {
                None
            }
        })
}

/// All accepted identifiers, names and codes together, sorted
pub fn supported_languages() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = LANGUAGE_NAMES
        .iter()
        .flat_map(|&(name, code)| [name, code])
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Name/code pairs in table order
pub fn language_pairs() -> &'static [(&'static str, &'static str)] {
    LANGUAGE_NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_code_resolve_to_same_code() {
        assert_eq!(resolve("french"), Some("fr"));
        assert_eq!(resolve("fr"), Some("fr"));

        for &(name, code) in language_pairs() {
            assert_eq!(resolve(name), resolve(code), "mismatch for {}", name);
            assert_eq!(resolve(code), Some(code));
        }
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(resolve("klingon"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("xx"), None);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("zh-CN"), Some("zh-CN"));
        assert_eq!(resolve("zh-cn"), None);
        assert_eq!(resolve("French"), None);
    }

    #[test]
    fn test_supported_languages_sorted() {
        let langs = supported_languages();
        assert_eq!(langs.len(), LANGUAGE_NAMES.len() * 2);
        assert!(langs.windows(2).all(|w| w[0] < w[1]));
        assert!(langs.contains(&"english"));
        assert!(langs.contains(&"en"));
        assert!(langs.contains(&"haitian creole"));
    }
}
