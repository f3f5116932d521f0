// src/document/wholesale.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::finite;

/// Month number outside `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid month {0}: expected 1..=12")]
pub struct InvalidMonth(pub u8);

/// Calendar month, 1 = January. Encoded as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub fn new(month: u8) -> Result<Self, InvalidMonth> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(InvalidMonth(month))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidMonth;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Month::new(month)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Wholesale market share of the bill: what drives it and how it has moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WholesaleCost {
    pub description: String,
    pub price_chart: PriceSeries,
    /// Influences on the wholesale price (e.g. "Seasonal demand", "Gas prices").
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Historical wholesale prices, one sample per (year, month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Range the chart covers, e.g. "2010-2020".
    pub time_period: String,
    /// e.g. "GBP/MWh".
    pub unit: String,
    /// Samples in the order they were published; not re-sorted.
    #[serde(default)]
    pub data_points: Vec<PricePoint>,
    /// e.g. "Ofgem".
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub year: i32,
    pub month: Month,
    #[serde(with = "finite")]
    pub value: f64,
}

impl PricePoint {
    pub fn new(year: i32, month: u8, value: f64) -> Result<Self, InvalidMonth> {
        Ok(Self {
            year,
            month: Month::new(month)?,
            value,
        })
    }

    /// First day of the sampled month, or `None` if `year` is outside chrono's range.
    pub fn period_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.get()), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds() {
        assert!(Month::new(0).is_err());
        assert_eq!(Month::new(1).unwrap().get(), 1);
        assert_eq!(Month::new(12).unwrap().get(), 12);
        assert_eq!(Month::new(13), Err(InvalidMonth(13)));
        assert_eq!(Month::try_from(7u8).unwrap().to_string(), "07");
    }

    #[test]
    fn price_point_rejects_bad_month_at_construction() {
        let err = PricePoint::new(2020, 13, 45.2).unwrap_err();
        assert_eq!(err.to_string(), "invalid month 13: expected 1..=12");
    }

    #[test]
    fn price_point_period_start() {
        let p = PricePoint::new(2020, 2, 47.8).unwrap();
        assert_eq!(p.period_start(), NaiveDate::from_ymd_opt(2020, 2, 1));
    }

    #[test]
    fn month_decodes_from_plain_integer() {
        let p: PricePoint =
            serde_json::from_str(r#"{"year":2020,"month":1,"value":45.2}"#).unwrap();
        assert_eq!(p, PricePoint::new(2020, 1, 45.2).unwrap());

        let bad = serde_json::from_str::<PricePoint>(r#"{"year":2020,"month":13,"value":45.2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn factors_and_points_keep_their_order() {
        let json = r#"{
            "description": "Set by the market",
            "price_chart": {
                "time_period": "2020",
                "unit": "GBP/MWh",
                "data_points": [
                    {"year": 2020, "month": 2, "value": 47.8},
                    {"year": 2020, "month": 1, "value": 45.2}
                ],
                "source": "Ofgem"
            },
            "factors": ["Gas prices", "Seasonal demand", "Carbon prices"]
        }"#;
        let w: WholesaleCost = serde_json::from_str(json).unwrap();
        assert_eq!(w.factors, ["Gas prices", "Seasonal demand", "Carbon prices"]);
        let months: Vec<u8> = w
            .price_chart
            .data_points
            .iter()
            .map(|p| p.month.get())
            .collect();
        assert_eq!(months, [2, 1]);
    }
}
