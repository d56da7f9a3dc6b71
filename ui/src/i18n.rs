//! Internationalization (i18n) support for `agreements-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (per-locale asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/agreements_ui.ftl   (fallback/reference)
//!   fr-FR/agreements_ui.ftl
//! ```
//!
//! Unlike a single global loader that gets re-pointed at runtime, every
//! [`Language`] gets its own [`FluentLanguageLoader`]. The loaders are only
//! consulted while the content store is built (see [`crate::content`]); after
//! that the page reads plain strings and switching language touches no
//! loader state.
//!
//! ```ignore
//! let loader = i18n::loader_for(Language::Fr)?;
//! let heading = t!(&loader, "hero-heading");
//! ```
//!
//! NOTE: `fl!` derives the file name from the package name with underscores,
//! so `agreements_ui.ftl` is canonical across all locales.
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::content::{ContentError, Language};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation lookup against an explicit loader.
/// Examples:
///     t!(&loader, "hero-heading")
///
/// Expands to `fl!(loader, key)`, so every message ID is checked against the
/// fallback locale at compile time.
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "agreements_ui";

/// Locale every loader falls back to.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Build a loader with `language` selected on top of the fallback locale.
///
/// Fails when the locale folder is not embedded; a silent fallback to English
/// would hide a missing translation.
pub fn loader_for(language: Language) -> Result<FluentLanguageLoader, ContentError> {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE.parse()?;
    let requested: LanguageIdentifier = language.locale().parse()?;

    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    loader.set_use_isolating(false);

    let selected = i18n_embed::select(&loader, &Localizations, &[requested.clone()])?;
    if !selected.contains(&requested) {
        return Err(ContentError::LocaleNotEmbedded { language });
    }
    Ok(loader)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LOCALE));
    }

    #[test]
    fn every_language_has_an_embedded_locale() {
        let embedded = available_languages();
        for language in Language::ALL {
            assert!(
                embedded.iter().any(|l| l == language.locale()),
                "no embedded locale folder for {language:?}"
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        let loader = loader_for(Language::En).expect("english loader");
        assert_eq!(t!(&loader, "hero-heading"), "Helping share your work");
    }

    #[test]
    fn loaders_are_independent() {
        let en = loader_for(Language::En).expect("english loader");
        let fr = loader_for(Language::Fr).expect("french loader");
        assert_eq!(t!(&fr, "footer-powered-by"), "Propulsé par");
        assert_eq!(t!(&en, "footer-powered-by"), "Powered by");
    }

    #[test]
    fn string_literal_placeables_keep_their_spaces() {
        let loader = loader_for(Language::En).expect("english loader");
        assert!(t!(&loader, "cta-groups-body-lead").ends_with("deploy our "));
        assert!(t!(&loader, "cta-groups-body-tail").starts_with(" to customize"));
    }
}
