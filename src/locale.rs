//! Display-language resolution.
//!
//! The stored setting may be `"auto"` (or empty), in which case the client
//! locale decides; only `de` and `en` have translations, everything else
//! falls back to `en`. Applying an unsupported code is a silent no-op so a
//! bad stored value can never knock out the current language.

/// Languages with a shipped translation.
pub const SUPPORTED_LANGS: &[&str] = &["de", "en"];

/// Receiver for language switches (the translation collaborator).
pub trait Translator {
    fn use_lang(&mut self, code: &str);
}

/// Resolve the display language from the stored setting and the client
/// locale (e.g. `navigator.language`, like `"de-DE"` or `"fr"`).
///
/// An explicit stored value is returned verbatim. Under `"auto"` the primary
/// subtag is matched case-insensitively against the supported set; anything
/// else resolves to `en`.
pub fn resolve_lang(stored: &str, client_locale: Option<&str>) -> String {
    if stored.is_empty() || stored == "auto" {
        let candidate = client_locale
            .unwrap_or("")
            .split('-')
            .next()
            .unwrap_or("");
        if SUPPORTED_LANGS
            .iter()
            .any(|lang| candidate.eq_ignore_ascii_case(lang))
        {
            candidate.to_string()
        } else {
            "en".to_string()
        }
    } else {
        stored.to_string()
    }
}

/// Switch the active translation, but only for an exactly supported code.
pub fn apply_lang<T: Translator>(translator: &mut T, lang: &str) {
    if SUPPORTED_LANGS.contains(&lang) {
        translator.use_lang(lang);
    }
}
