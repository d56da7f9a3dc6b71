use dioxus::prelude::*;
use tracing::debug;

use crate::components::{AboutSection, CtaCard, IntroSection, LanguageSelect, SiteFooter};
use crate::content::{self, Language};
use crate::core::selection::PageState;
use crate::Hero;

/// The landing page. Owns the language selection; everything below it is a
/// pure projection of the selected bundle.
#[component]
pub fn Landing() -> Element {
    let state = use_signal(PageState::default);

    rsx! {
        LandingPage { state }
    }
}

/// Document title plus view, driven by `state`.
#[component]
pub fn LandingPage(state: Signal<PageState>) -> Element {
    let current = state();

    rsx! {
        document::Title { "{current.bundle().document_title}" }
        LandingView {
            language: current.selected,
            on_select: move |language: Language| select_language(state, language),
        }
    }
}

/// Selector handler: replace the selection wholesale.
pub fn select_language(mut state: Signal<PageState>, language: Language) {
    state.with_mut(|s| *s = s.select(language));
}

/// Render the bundle for `language`. No state, no side effects.
#[component]
pub fn LandingView(language: Language, on_select: EventHandler<Language>) -> Element {
    let bundle = content::bundle(language);

    debug!(%language, "landing render");

    rsx! {
        main { class: "app-shell", lang: "{language.code()}",
            Hero { hero: bundle.hero.clone(),
                LanguageSelect {
                    selected: language,
                    label: bundle.language_label.clone(),
                    on_select,
                }
            }

            section { class: "content-wrapper",
                IntroSection { paragraphs: bundle.intro.clone() }

                section { class: "cta-grid",
                    for cta in bundle.ctas.iter() {
                        CtaCard { key: "{cta.id}", cta: cta.clone() }
                    }
                }

                AboutSection { entries: bundle.about.clone() }
            }

            SiteFooter { footer: bundle.footer.clone() }
        }
    }
}
