use dioxus::prelude::*;

use crate::content::{CallToAction, Inline};

#[component]
pub fn CtaCard(cta: CallToAction) -> Element {
    rsx! {
        article { class: "cta-card cta-{cta.id}",
            h2 { "{cta.title}" }
            a {
                class: "cta-link",
                href: cta.link_href,
                target: "_blank",
                rel: "noreferrer",
                "{cta.link_label}"
            }
            p {
                for (idx, run) in cta.body.runs().iter().enumerate() {
                    {render_run(idx, run)}
                }
            }
        }
    }
}

fn render_run(idx: usize, run: &Inline) -> Element {
    match run {
        Inline::Text(text) => rsx! {
            span { key: "{idx}", "{text}" }
        },
        Inline::Link { label, href } => rsx! {
            a {
                key: "{idx}",
                class: "cta-highlight",
                href: *href,
                target: "_blank",
                rel: "noreferrer",
                "{label}"
            }
        },
    }
}
