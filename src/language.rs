//! Target-language resolution for the translation collaborator.
//!
//! Callers supply `target_lang` as a free-form string: either an English
//! language name (`"english"`) or an ISO 639-1 code (`"en"`). The translation
//! endpoint only accepts codes, so the value is resolved against a static
//! table before the network call; anything unknown is a translation failure.

use anyhow::Result;

/// Supported target languages: ISO 639-1 code and English name.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Resolve a caller-supplied language into an ISO 639-1 code.
///
/// Accepts either column of [`SUPPORTED_LANGUAGES`], case-insensitively,
/// with surrounding whitespace ignored.
///
/// # Errors
///
/// Returns an error if the value matches neither a code nor a name.
pub fn resolve_code(lang: &str) -> Result<&'static str> {
    let needle = lang.trim();
    for (code, name) in SUPPORTED_LANGUAGES {
        if code.eq_ignore_ascii_case(needle) || name.eq_ignore_ascii_case(needle) {
            return Ok(code);
        }
    }
    anyhow::bail!(
        "Unsupported target language: '{}'. Run 'docchat languages' to see supported values.",
        lang
    )
}

/// Prints the supported language table to stdout.
pub fn print_languages() {
    println!("Supported target languages:");
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", code, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_code("english").unwrap(), "en");
        assert_eq!(resolve_code("French").unwrap(), "fr");
        assert_eq!(resolve_code("GERMAN").unwrap(), "de");
    }

    #[test]
    fn test_resolve_by_code() {
        assert_eq!(resolve_code("en").unwrap(), "en");
        assert_eq!(resolve_code("JA").unwrap(), "ja");
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(resolve_code(" spanish ").unwrap(), "es");
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve_code("klingon").is_err());
        assert!(resolve_code("").is_err());
    }
}
