//! Language selection state owned by the landing page.

use crate::content::{self, ContentBundle, Language};

/// The page's only mutable state: which language is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub selected: Language,
}

impl PageState {
    /// Replace the selection. Total and idempotent.
    #[must_use]
    pub fn select(self, language: Language) -> Self {
        Self { selected: language }
    }

    /// Bundle for the current selection.
    pub fn bundle(&self) -> &'static ContentBundle {
        content::bundle(self.selected)
    }
}

/// Map a `<select>` option value back to its [`Language`].
///
/// The selector only offers [`Language::ALL`], so anything else means the
/// markup and the enum drifted apart.
pub fn language_from_selector(value: &str) -> Language {
    match value.parse::<Language>() {
        Ok(language) => language,
        Err(err) => panic!("language selector produced an unsupported value: {err}"),
    }
}
