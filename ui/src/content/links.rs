//! Outbound link targets and logo identifiers.
//!
//! None of these are localized: switching language swaps text only.

pub const AGRI_FOOD_DATA_CANADA_URL: &str = "https://agrifooddatacanada.ca/";
pub const GENOME_CANADA_URL: &str = "https://www.genomecanada.ca/";
pub const RESEARCH_EXCELLENCE_FUND_URL: &str = "https://www.cfref-apogee.gc.ca/";

/// Hosted Data Request Tracker instance.
pub const DATA_REQUEST_TRACKER_URL: &str = "https://drt-test.canadacentral.cloudapp.azure.com/";

/// Documentation for running a self-hosted agreement server.
pub const AGREEMENT_SERVER_DOCS_URL: &str = "https://github.com/agrifooddatacanada";

/// Sponsor logo artwork. The renderer maps each variant to a bundled asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoImage {
    AgriFoodDataCanada,
    /// Light variant used on the dark hero background.
    AgriFoodDataCanadaWhite,
    GenomeCanada,
    ResearchExcellenceFund,
}
