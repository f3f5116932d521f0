// src/document/levies.rs

use serde::{Deserialize, Serialize};

use super::finite;

/// A government-mandated levy on the bill, e.g. the Renewables Obligation (RO).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentCharge {
    pub name: String,
    pub abbreviation: String,
    pub description: String,
    #[serde(with = "finite")]
    pub percentage: f64,
    /// When the levy applies, e.g. "Winter weekdays 16:00-19:00". Free text.
    pub period: String,
}
