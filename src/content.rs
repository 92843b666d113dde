//! Static page copy, parsed once from the embedded `content.json`.

use std::sync::OnceLock;

use log::error;
use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("content.json");

static CONTENT: OnceLock<Content> = OnceLock::new();

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Content {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub design_styles: Vec<DesignStyle>,
    pub suggestions: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub pricing: Pricing,
    pub call_to_action: CallToAction,
    pub nav_links: Vec<NavLink>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub preview_label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DesignStyle {
    pub name: String,
    pub description: String,
    /// CSS class painting the canvas and swatch for this style.
    pub preview: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Pricing {
    pub yearly_discount_percent: u32,
    pub tiers: Vec<PricingTier>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: String,
    /// `None` for tiers priced on request.
    pub monthly_usd: Option<u32>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub anchor: String,
}

impl Content {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// The page copy. A broken bundle renders empty sections rather than no page.
pub fn content() -> &'static Content {
    CONTENT.get_or_init(|| match Content::parse(CONTENT_JSON) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to parse page content: {}", e);
            Content::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = Content::parse(CONTENT_JSON).expect("content.json should parse");
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.design_styles.len(), 4);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.pricing.tiers.len(), 3);
        assert_eq!(content.pricing.tiers.iter().filter(|t| t.popular).count(), 1);
        assert!(content.pricing.tiers[2].monthly_usd.is_none());
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        let anchors: Vec<_> = content().nav_links.iter().map(|l| l.anchor.as_str()).collect();
        assert_eq!(anchors, ["features", "live-editor", "testimonials", "pricing"]);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(Content::parse("{\"hero\": 3}").is_err());
    }
}
