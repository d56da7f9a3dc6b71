use dioxus::prelude::*;
use tracing::debug;

use crate::content::Language;
use crate::core::selection::language_from_selector;

/// Closed two-option language picker.
///
/// `label` comes from the active bundle, so the accessible name follows the
/// language it controls.
#[component]
pub fn LanguageSelect(
    selected: Language,
    label: String,
    on_select: EventHandler<Language>,
) -> Element {
    let on_change = move |evt: dioxus::events::FormEvent| {
        let language = language_from_selector(&evt.value());
        debug!(from = %selected, to = %language, "language selected");
        on_select.call(language);
    };

    rsx! {
        div { class: "hero-locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                "{label}"
            }
            select {
                id: "locale-select",
                aria_label: "{label}",
                value: "{selected.code()}",
                oninput: on_change,
                for language in Language::ALL {
                    option {
                        key: "{language.code()}",
                        value: "{language.code()}",
                        selected: language == selected,
                        "{language.option_label()}"
                    }
                }
            }
        }
    }
}
