mod finite;
pub mod levies;
pub mod network;
pub mod types;
pub mod wholesale;

pub use levies::GovernmentCharge;
pub use network::{
    DistributionCost, DuosComponent, NetworkCosts, NetworkSubCharge, TimeBandCharge,
    TransmissionCost,
};
pub use types::{ArticleMeta, ContactInfo, CostComponent, CostDocument, SourceInfo};
pub use wholesale::{InvalidMonth, Month, PricePoint, PriceSeries, WholesaleCost};
