// src/document/network.rs

use serde::{Deserialize, Serialize};

use super::finite;

/// Charges for moving power over the grid, split into transmission,
/// distribution and everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkCosts {
    pub description: String,
    pub transmission_cost: TransmissionCost,
    pub distribution_cost: DistributionCost,
    /// e.g. Balancing Services Use of System (BSUoS).
    #[serde(default)]
    pub other_costs: Vec<NetworkSubCharge>,
}

/// Transmission Network Use of System charge (TNUoS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionCost {
    pub name: String,
    pub description: String,
    /// Share of the whole bill.
    #[serde(with = "finite")]
    pub percentage: f64,
    /// Free-text description of how the charge is worked out.
    pub calculation: String,
}

/// Distribution Use of System charge (DUoS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCost {
    pub name: String,
    pub description: String,
    #[serde(with = "finite")]
    pub percentage: f64,
    #[serde(default)]
    pub components: Vec<DuosComponent>,
    #[serde(default)]
    pub time_bands: Vec<TimeBandCharge>,
}

/// Sub-item of the DUoS charge. `percentage` is a share of DUoS, not of the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuosComponent {
    pub name: String,
    pub description: String,
    #[serde(with = "finite")]
    pub percentage: f64,
}

/// Unit rate for one day type and time band (green/amber/red).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBandCharge {
    /// "Weekday", "Weekend", ...
    pub day_type: String,
    pub time_band: String,
    /// GBP/kWh.
    #[serde(with = "finite")]
    pub rate: f64,
    /// Relative to the base rate.
    #[serde(with = "finite")]
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSubCharge {
    pub name: String,
    pub description: String,
    #[serde(with = "finite")]
    pub percentage: f64,
}
