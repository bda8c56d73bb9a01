//! Supported conversation languages.

use serde::Serialize;

/// Default conversation language code.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

static LANGUAGES: [Language; 24] = [
    lang("en", "English", "English"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("ta", "Tamil", "தமிழ்"),
    lang("te", "Telugu", "తెలుగు"),
    lang("bn", "Bengali", "বাংলা"),
    lang("mr", "Marathi", "मराठी"),
    lang("gu", "Gujarati", "ગુજરાતી"),
    lang("kn", "Kannada", "ಕನ್ನಡ"),
    lang("ml", "Malayalam", "മലയാളം"),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ"),
    lang("or", "Odia", "ଓଡ଼ିଆ"),
    lang("as", "Assamese", "অসমীয়া"),
    lang("ur", "Urdu", "اردو"),
    lang("ne", "Nepali", "नेपाली"),
    lang("si", "Sinhala", "සිංහල"),
    lang("ar", "Arabic", "العربية"),
    lang("zh", "Chinese", "中文"),
    lang("ja", "Japanese", "日本語"),
    lang("de", "German", "Deutsch"),
    lang("fr", "French", "Français"),
    lang("es", "Spanish", "Español"),
    lang("pt", "Portuguese", "Português"),
    lang("ru", "Russian", "Русский"),
    lang("id", "Indonesian", "Bahasa Indonesia"),
];

pub fn supported_languages() -> &'static [Language] {
    &LANGUAGES
}

/// Looks up a language by code, case-insensitively.
pub fn find_language(code: &str) -> Option<&'static Language> {
    let code = code.trim();
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// English name of the language, or the code itself when unknown.
pub fn language_name(code: &str) -> &str {
    find_language(code).map_or(code, |l| l.name)
}

pub fn is_default_language(code: &str) -> bool {
    code.trim().is_empty() || code.trim().eq_ignore_ascii_case(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_languages_by_code() {
        assert_eq!(find_language("HI").map(|l| l.name), Some("Hindi"));
        assert_eq!(language_name("ta"), "Tamil");
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        assert_eq!(language_name("xx"), "xx");
        assert!(find_language("xx").is_none());
    }

    #[test]
    fn blank_and_en_are_default() {
        assert!(is_default_language(""));
        assert!(is_default_language("EN"));
        assert!(!is_default_language("hi"));
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = supported_languages().iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), supported_languages().len());
    }
}
