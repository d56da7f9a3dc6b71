use dioxus::prelude::*;

use crate::content::AboutEntry;

// Both lists key by position: entries may repeat text.

#[component]
pub fn IntroSection(paragraphs: Vec<String>) -> Element {
    rsx! {
        section { class: "intro",
            for (idx, paragraph) in paragraphs.iter().enumerate() {
                p { key: "{idx}", "{paragraph}" }
            }
        }
    }
}

#[component]
pub fn AboutSection(entries: Vec<AboutEntry>) -> Element {
    rsx! {
        section { class: "about",
            for (idx, entry) in entries.iter().enumerate() {
                div { key: "{idx}",
                    h3 { "{entry.heading}" }
                    if let Some(body) = entry.body.as_ref() {
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
