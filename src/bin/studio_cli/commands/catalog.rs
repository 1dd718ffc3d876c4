// ABOUTME: Catalog commands: protocol listing, required sites and percentage classification
// ABOUTME: Pure lookups over the engine's static tables, printed as JSON

use serde::Serialize;
use studio_engine::composition::{
    bands_for, classify as classify_percentage, ClassificationBand, DensityEquation, Gender,
    Protocol, SkinfoldSite,
};
use studio_engine::errors::AppResult;

use super::print_json;

#[derive(Serialize)]
struct SiteEntry {
    site: SkinfoldSite,
    label: &'static str,
}

#[derive(Serialize)]
struct SitesOutput {
    protocol: Protocol,
    gender: Gender,
    sites: Vec<SiteEntry>,
}

#[derive(Serialize)]
struct EquationEntry {
    gender: Gender,
    sites: &'static [SkinfoldSite],
    formula: String,
}

#[derive(Serialize)]
struct ProtocolEntry {
    protocol: Protocol,
    description: &'static str,
    reference: &'static str,
    equations: Vec<EquationEntry>,
}

#[derive(Serialize)]
struct ClassifyOutput {
    percentage: f64,
    gender: Gender,
    label: &'static str,
    style_hint: &'static str,
    bands: &'static [ClassificationBand],
}

/// Print the ordered sites a protocol requires
pub fn sites(protocol: Protocol, gender: Gender) -> AppResult<()> {
    print_json(&SitesOutput {
        protocol,
        gender,
        sites: protocol
            .required_sites(gender)
            .iter()
            .map(|&site| SiteEntry {
                site,
                label: site.display_label(),
            })
            .collect(),
    })
}

/// Print the classification of a percentage with the full band table
pub fn classify(percentage: f64, gender: Gender) -> AppResult<()> {
    let classification = classify_percentage(percentage, gender);
    print_json(&ClassifyOutput {
        percentage,
        gender,
        label: classification.label,
        style_hint: classification.style_hint.as_str(),
        bands: bands_for(gender),
    })
}

/// Print every protocol with its per-gender equation
pub fn protocols() -> AppResult<()> {
    let entries: Vec<ProtocolEntry> = Protocol::ALL
        .iter()
        .map(|&protocol| ProtocolEntry {
            protocol,
            description: protocol.description(),
            reference: protocol.reference(),
            equations: Gender::ALL
                .iter()
                .map(|&gender| EquationEntry {
                    gender,
                    sites: protocol.required_sites(gender),
                    formula: DensityEquation::for_protocol(protocol, gender).formula(),
                })
                .collect(),
        })
        .collect();
    print_json(&entries)
}
