use dioxus::prelude::*;

use crate::components::LogoLink;
use crate::content::links::{LogoImage, AGRI_FOOD_DATA_CANADA_URL};
use crate::content::HeroContent;

/// Hero banner. `children` lands in the right-hand column under the logo
/// (the language selector goes there).
#[component]
pub fn Hero(hero: HeroContent, children: Element) -> Element {
    rsx! {
        header { class: "hero-section",
            div { class: "hero-container",
                div { class: "hero-left",
                    div { class: "hero-heading",
                        span { class: "hero-title", "{hero.title}" }
                        span { class: "hero-subtitle", "{hero.subtitle}" }
                    }
                    div { class: "hero-text",
                        h1 { "{hero.heading}" }
                        p { "{hero.description}" }
                    }
                }
                div { class: "hero-right", aria_label: "{hero.logo_alt}",
                    LogoLink {
                        class: "hero-logo-link",
                        href: AGRI_FOOD_DATA_CANADA_URL,
                        image: LogoImage::AgriFoodDataCanadaWhite,
                        alt: hero.logo_alt.clone(),
                    }
                    {children}
                }
            }
        }
    }
}
