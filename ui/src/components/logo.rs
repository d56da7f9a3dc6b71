use dioxus::prelude::*;

use crate::content::links::LogoImage;

const AGRI_FOOD_LOGO: Asset = asset!("/assets/logos/agri-food-data-canada.svg");
const AGRI_FOOD_LOGO_WHITE: Asset = asset!("/assets/logos/agri-food-data-canada-white.svg");
const GENOME_CANADA_LOGO: Asset = asset!("/assets/logos/genome-canada.svg");
const RESEARCH_FUND_LOGO: Asset = asset!("/assets/logos/research-excellence-fund.svg");

/// Bundled artwork for a logo identifier.
pub fn logo_asset(image: LogoImage) -> Asset {
    match image {
        LogoImage::AgriFoodDataCanada => AGRI_FOOD_LOGO,
        LogoImage::AgriFoodDataCanadaWhite => AGRI_FOOD_LOGO_WHITE,
        LogoImage::GenomeCanada => GENOME_CANADA_LOGO,
        LogoImage::ResearchExcellenceFund => RESEARCH_FUND_LOGO,
    }
}

/// Outbound logo link; opens the sponsor site in a new tab.
#[component]
pub fn LogoLink(href: &'static str, image: LogoImage, alt: String, class: String) -> Element {
    rsx! {
        a {
            class: "{class}",
            href,
            target: "_blank",
            rel: "noreferrer",
            img { src: logo_asset(image), alt: "{alt}" }
        }
    }
}
