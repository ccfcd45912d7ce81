use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceMoverPeriod {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl PriceMoverPeriod {
    pub const ALL: [PriceMoverPeriod; 4] = [
        PriceMoverPeriod::Day,
        PriceMoverPeriod::Week,
        PriceMoverPeriod::Month,
        PriceMoverPeriod::Quarter,
    ];
}

impl fmt::Display for PriceMoverPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceMoverPeriod::Day => write!(f, "24h"),
            PriceMoverPeriod::Week => write!(f, "7d"),
            PriceMoverPeriod::Month => write!(f, "30d"),
            PriceMoverPeriod::Quarter => write!(f, "90d"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMoverCard {
    pub name: String,
    pub rarity: String,
    pub set_id: String,
    pub set_name: String,
    pub image_url: Option<String>,
    pub price: f64,
    #[serde(rename = "priceChange24hr")]
    pub price_change_24hr: Option<f64>,
    #[serde(rename = "priceChange7d")]
    pub price_change_7d: Option<f64>,
    #[serde(rename = "priceChange30d")]
    pub price_change_30d: Option<f64>,
    #[serde(rename = "priceChange90d")]
    pub price_change_90d: Option<f64>,
}

impl PriceMoverCard {
    pub fn price_change(&self, period: PriceMoverPeriod) -> Option<f64> {
        match period {
            PriceMoverPeriod::Day => self.price_change_24hr,
            PriceMoverPeriod::Week => self.price_change_7d,
            PriceMoverPeriod::Month => self.price_change_30d,
            PriceMoverPeriod::Quarter => self.price_change_90d,
        }
    }
}

/// Every period is always present, possibly with an empty list.
pub type PriceMoversDocument = BTreeMap<PriceMoverPeriod, Vec<PriceMoverCard>>;

pub fn empty_price_movers() -> PriceMoversDocument {
    PriceMoverPeriod::ALL
        .into_iter()
        .map(|period| (period, Vec::new()))
        .collect()
}
