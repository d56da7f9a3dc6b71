//! Record types making up one language's page content.

use super::links::LogoImage;

/// Everything the page shows for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBundle {
    pub document_title: String,
    /// Accessible label of the language selector.
    pub language_label: String,
    pub hero: HeroContent,
    /// Rendered in order and keyed by position, so repeated text is fine.
    pub intro: Vec<String>,
    pub ctas: Vec<CallToAction>,
    pub about: Vec<AboutEntry>,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub heading: String,
    pub description: String,
    pub logo_alt: String,
}

/// A card pointing the reader at an external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    /// Stable identifier; used as list key and CSS modifier (`cta-{id}`).
    pub id: &'static str,
    pub title: String,
    pub link_label: String,
    pub link_href: &'static str,
    pub body: RichText,
}

/// Text with embedded outbound links, as an ordered list of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText(pub Vec<Inline>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { label: String, href: &'static str },
}

impl RichText {
    pub fn runs(&self) -> &[Inline] {
        &self.0
    }

    /// Text content with link labels inlined.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|run| match run {
                Inline::Text(text) => text.as_str(),
                Inline::Link { label, .. } => label.as_str(),
            })
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutEntry {
    pub heading: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    pub powered_by: String,
    pub supported_by: String,
    pub logos: Vec<FooterLogo>,
}

impl FooterContent {
    /// Logos shown under the given group label, in authored order.
    pub fn group(&self, group: FooterGroup) -> impl Iterator<Item = &FooterLogo> {
        self.logos.iter().filter(move |logo| logo.group == group)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterGroup {
    PoweredBy,
    SupportedBy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLogo {
    pub alt: String,
    pub href: &'static str,
    pub image: LogoImage,
    pub group: FooterGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_inlines_link_labels() {
        let text = RichText(vec![
            Inline::Text("deploy our ".into()),
            Inline::Link {
                label: "DRT".into(),
                href: "https://example.org/",
            },
            Inline::Text(" today".into()),
        ]);
        assert_eq!(text.plain_text(), "deploy our DRT today");
        assert!(!text.is_blank());
        assert!(RichText(vec![Inline::Text("  ".into())]).is_blank());
    }

    #[test]
    fn footer_groups_keep_order() {
        let logo = |alt: &str, group| FooterLogo {
            alt: alt.into(),
            href: "https://example.org/",
            image: LogoImage::GenomeCanada,
            group,
        };
        let footer = FooterContent {
            powered_by: "Powered by".into(),
            supported_by: "Supported by".into(),
            logos: vec![
                logo("a", FooterGroup::SupportedBy),
                logo("b", FooterGroup::PoweredBy),
                logo("c", FooterGroup::SupportedBy),
            ],
        };
        let supported: Vec<_> = footer
            .group(FooterGroup::SupportedBy)
            .map(|l| l.alt.as_str())
            .collect();
        assert_eq!(supported, ["a", "c"]);
    }
}
