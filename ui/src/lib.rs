//! Shared UI crate for the Semantic Engine Agreements landing page. Content,
//! selection state and every component live here; the platform crates only
//! launch [`views::Landing`].

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod cta_card;
    mod language_select;
    mod logo;
    mod sections;
    mod site_footer;

    pub use cta_card::CtaCard;
    pub use language_select::LanguageSelect;
    pub use logo::{logo_asset, LogoLink};
    pub use sections::{AboutSection, IntroSection};
    pub use site_footer::SiteFooter;
}

mod hero;
pub use hero::Hero;

use dioxus::prelude::*;

/// Shared page theme (`assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
