//! Page content: the per-language bundles and the store that holds them.
//!
//! The store is built once, on first use, from the embedded Fluent files and
//! is read-only afterwards. A bundle that fails validation is an authoring
//! defect, so building the store aborts instead of rendering a partial page.

mod language;
pub use language::Language;

pub mod links;

mod model;
pub use model::{
    AboutEntry, CallToAction, ContentBundle, FooterContent, FooterGroup, FooterLogo, HeroContent,
    Inline, RichText,
};

mod store;
pub use store::{ContentStore, FOOTER_LOGO_COUNT};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
    #[error("no embedded messages for language `{language}`")]
    LocaleNotEmbedded { language: Language },
    #[error("`{field}` is empty for language `{language}`")]
    MissingField {
        language: Language,
        field: &'static str,
    },
    #[error("expected {expected} footer logos for language `{language}`, found {found}", expected = FOOTER_LOGO_COUNT)]
    FooterLogoCount { language: Language, found: usize },
    #[error("invalid locale tag: {0}")]
    InvalidLocale(#[from] unic_langid::LanguageIdentifierError),
    #[error("localization error: {0}")]
    Localization(#[from] i18n_embed::I18nEmbedError),
}

static STORE: Lazy<ContentStore> = Lazy::new(|| match ContentStore::load() {
    Ok(store) => store,
    Err(err) => {
        error!(%err, "page content failed validation");
        panic!("page content failed validation: {err}");
    }
});

/// The process-wide content store.
pub fn store() -> &'static ContentStore {
    &STORE
}

/// Shorthand for `store().bundle(language)`.
pub fn bundle(language: Language) -> &'static ContentBundle {
    STORE.bundle(language)
}
