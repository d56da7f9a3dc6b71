use dioxus::prelude::*;

use crate::components::LogoLink;
use crate::content::{FooterContent, FooterGroup};

/// Two labeled sponsor groups.
#[component]
pub fn SiteFooter(footer: FooterContent) -> Element {
    let groups = [
        (FooterGroup::PoweredBy, "footer-column--powered", footer.powered_by.clone()),
        (FooterGroup::SupportedBy, "footer-column--supported", footer.supported_by.clone()),
    ];

    rsx! {
        footer { class: "footer-section",
            div { class: "footer-grid",
                for (group, modifier, label) in groups {
                    div { key: "{modifier}", class: "footer-column {modifier}",
                        span { class: "footer-label", "{label}" }
                        for (idx, logo) in footer.group(group).enumerate() {
                            LogoLink {
                                key: "{idx}",
                                class: "footer-logo-link",
                                href: logo.href,
                                image: logo.image,
                                alt: logo.alt.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
