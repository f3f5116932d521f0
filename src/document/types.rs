// src/document/types.rs

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use url::Url;

use super::finite;
use super::levies::GovernmentCharge;
use super::network::NetworkCosts;
use super::wholesale::WholesaleCost;

/// One complete cost-explainer article: what makes up a UK household
/// electricity bill, with the wholesale, network and levy detail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostDocument {
    pub basic_info: ArticleMeta,
    /// Top-level breakdown, in the order the article presents it.
    #[serde(default)]
    pub cost_components: Vec<CostComponent>,
    pub wholesale_cost: WholesaleCost,
    pub network_costs: NetworkCosts,
    #[serde(default)]
    pub government_charges: Vec<GovernmentCharge>,
    pub source_info: SourceInfo,
    pub contact_info: ContactInfo,
}

impl CostDocument {
    /// First levy whose abbreviation matches, ignoring ASCII case.
    pub fn government_charge(&self, abbreviation: &str) -> Option<&GovernmentCharge> {
        self.government_charges
            .iter()
            .find(|c| c.abbreviation.eq_ignore_ascii_case(abbreviation))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    pub title: String,
    pub translator: String,
    /// RFC 3339, offset preserved.
    pub publish_date: DateTime<FixedOffset>,
    pub source_url: String,
    pub summary: String,
}

impl ArticleMeta {
    /// Calendar day of publication in the document's own offset.
    pub fn publish_day(&self) -> NaiveDate {
        self.publish_date.date_naive()
    }

    /// `source_url` is stored verbatim; this is the only place it gets parsed.
    pub fn parsed_source_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.source_url)
    }
}

/// One top-level cost category, e.g. "Wholesale Cost" at 35%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub name: String,
    pub description: String,
    /// 35.0 means 35%. Not clamped.
    #[serde(with = "finite")]
    pub percentage: f64,
}

/// Where the article's figures come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceInfo {
    pub publisher: String,
    pub original_title: String,
    pub url: String,
    /// Free text, e.g. "March 2025".
    pub retrieved: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub organization: String,
    pub email: String,
    pub website: String,
}
