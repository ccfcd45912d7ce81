use crate::cards::magicrarity::MagicRarity;
use crate::utilities::constants::{
    BASIC_LAND_MIN_USD, COMMON_MIN_USD, FOIL_MIN_PRICE, TOKEN_MIN_USD, UNCOMMON_MIN_USD,
};

/// Minimum prices (inclusive) for a card to be listed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceThresholds {
    pub basic_land: f64,
    pub token: f64,
    pub common: f64,
    pub uncommon: f64,
    pub foil: f64,
}

impl PriceThresholds {
    /// Date buckets only ever hold commons and uncommons.
    pub fn for_rarity(&self, rarity: MagicRarity) -> Option<f64> {
        match rarity {
            MagicRarity::Common => Some(self.common),
            MagicRarity::Uncommon => Some(self.uncommon),
            _ => None,
        }
    }
}

impl Default for PriceThresholds {
    fn default() -> Self {
        Self {
            basic_land: BASIC_LAND_MIN_USD,
            token: TOKEN_MIN_USD,
            common: COMMON_MIN_USD,
            uncommon: UNCOMMON_MIN_USD,
            foil: FOIL_MIN_PRICE,
        }
    }
}
