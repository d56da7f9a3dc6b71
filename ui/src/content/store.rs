use i18n_embed::fluent::FluentLanguageLoader;
use tracing::info;

use super::links::{
    LogoImage, AGREEMENT_SERVER_DOCS_URL, AGRI_FOOD_DATA_CANADA_URL, DATA_REQUEST_TRACKER_URL,
    GENOME_CANADA_URL, RESEARCH_EXCELLENCE_FUND_URL,
};
use super::model::{
    AboutEntry, CallToAction, ContentBundle, FooterContent, FooterGroup, FooterLogo, HeroContent,
    Inline, RichText,
};
use super::{ContentError, Language};
use crate::{i18n, t};

/// Number of sponsor logos the footer layout is built around.
pub const FOOTER_LOGO_COUNT: usize = 3;

/// Optional message holding the about entry's body text.
const ABOUT_ENGINE_BODY: &str = "about-engine-body";

/// Immutable content for every [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    en: ContentBundle,
    fr: ContentBundle,
}

impl ContentStore {
    /// Resolve and validate the bundle of every language.
    pub fn load() -> Result<Self, ContentError> {
        let store = Self {
            en: load_bundle(Language::En)?,
            fr: load_bundle(Language::Fr)?,
        };
        info!(languages = Language::ALL.len(), "content store ready");
        Ok(store)
    }

    #[cfg(test)]
    fn from_bundles(en: ContentBundle, fr: ContentBundle) -> Result<Self, ContentError> {
        en.validate(Language::En)?;
        fr.validate(Language::Fr)?;
        Ok(Self { en, fr })
    }

    pub fn bundle(&self, language: Language) -> &ContentBundle {
        match language {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        }
    }
}

fn load_bundle(language: Language) -> Result<ContentBundle, ContentError> {
    let loader = i18n::loader_for(language)?;
    let bundle = resolve_bundle(&loader);
    bundle.validate(language)?;
    Ok(bundle)
}

fn resolve_bundle(loader: &FluentLanguageLoader) -> ContentBundle {
    ContentBundle {
        document_title: t!(loader, "document-title"),
        language_label: t!(loader, "language-label"),
        hero: HeroContent {
            title: t!(loader, "hero-title"),
            subtitle: t!(loader, "hero-subtitle"),
            heading: t!(loader, "hero-heading"),
            description: t!(loader, "hero-description"),
            logo_alt: t!(loader, "hero-logo-alt"),
        },
        intro: vec![
            t!(loader, "intro-machine-readable"),
            t!(loader, "intro-standard-formats"),
        ],
        ctas: vec![CallToAction {
            id: "groups",
            title: t!(loader, "cta-groups-title"),
            link_label: t!(loader, "cta-groups-link"),
            link_href: AGREEMENT_SERVER_DOCS_URL,
            body: RichText(vec![
                Inline::Text(t!(loader, "cta-groups-body-lead")),
                Inline::Link {
                    label: t!(loader, "cta-groups-body-drt"),
                    href: DATA_REQUEST_TRACKER_URL,
                },
                Inline::Text(t!(loader, "cta-groups-body-tail")),
            ]),
        }],
        about: vec![AboutEntry {
            heading: t!(loader, "about-engine-heading"),
            body: loader
                .has(ABOUT_ENGINE_BODY)
                .then(|| loader.get(ABOUT_ENGINE_BODY)),
        }],
        footer: FooterContent {
            powered_by: t!(loader, "footer-powered-by"),
            supported_by: t!(loader, "footer-supported-by"),
            logos: vec![
                FooterLogo {
                    alt: t!(loader, "logo-agri-food-alt"),
                    href: AGRI_FOOD_DATA_CANADA_URL,
                    image: LogoImage::AgriFoodDataCanada,
                    group: FooterGroup::PoweredBy,
                },
                FooterLogo {
                    alt: t!(loader, "logo-genome-canada-alt"),
                    href: GENOME_CANADA_URL,
                    image: LogoImage::GenomeCanada,
                    group: FooterGroup::SupportedBy,
                },
                FooterLogo {
                    alt: t!(loader, "logo-cfref-alt"),
                    href: RESEARCH_EXCELLENCE_FUND_URL,
                    image: LogoImage::ResearchExcellenceFund,
                    group: FooterGroup::SupportedBy,
                },
            ],
        },
    }
}

impl ContentBundle {
    /// Check every required field is populated.
    pub fn validate(&self, language: Language) -> Result<(), ContentError> {
        let missing = |field: &'static str| ContentError::MissingField { language, field };
        let require = |value: &str, field: &'static str| {
            if value.trim().is_empty() {
                Err(missing(field))
            } else {
                Ok(())
            }
        };

        require(&self.document_title, "document_title")?;
        require(&self.language_label, "language_label")?;
        require(&self.hero.title, "hero.title")?;
        require(&self.hero.subtitle, "hero.subtitle")?;
        require(&self.hero.heading, "hero.heading")?;
        require(&self.hero.description, "hero.description")?;
        require(&self.hero.logo_alt, "hero.logo_alt")?;

        if self.intro.is_empty() {
            return Err(missing("intro"));
        }
        for paragraph in &self.intro {
            require(paragraph, "intro[]")?;
        }

        if self.ctas.is_empty() {
            return Err(missing("ctas"));
        }
        for cta in &self.ctas {
            require(cta.id, "ctas[].id")?;
            require(&cta.title, "ctas[].title")?;
            require(&cta.link_label, "ctas[].link_label")?;
            require(cta.link_href, "ctas[].link_href")?;
            if cta.body.is_blank() {
                return Err(missing("ctas[].body"));
            }
        }

        if self.about.is_empty() {
            return Err(missing("about"));
        }
        for entry in &self.about {
            require(&entry.heading, "about[].heading")?;
        }

        require(&self.footer.powered_by, "footer.powered_by")?;
        require(&self.footer.supported_by, "footer.supported_by")?;
        if self.footer.logos.len() != FOOTER_LOGO_COUNT {
            return Err(ContentError::FooterLogoCount {
                language,
                found: self.footer.logos.len(),
            });
        }
        for logo in &self.footer.logos {
            require(&logo.alt, "footer.logos[].alt")?;
            require(logo.href, "footer.logos[].href")?;
        }

        Ok(())
    }
}
