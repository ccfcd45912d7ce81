use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MagicRarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
    Bonus,
}

impl MagicRarity {
    /// Scryfall always sends lowercase rarities, anything else is unknown.
    pub fn from_scryfall(s: &str) -> Option<Self> {
        match s {
            "common" => Some(MagicRarity::Common),
            "uncommon" => Some(MagicRarity::Uncommon),
            "rare" => Some(MagicRarity::Rare),
            "mythic" => Some(MagicRarity::Mythic),
            "special" => Some(MagicRarity::Special),
            "bonus" => Some(MagicRarity::Bonus),
            _ => None,
        }
    }

    pub fn is_common_or_uncommon(&self) -> bool {
        matches!(self, MagicRarity::Common | MagicRarity::Uncommon)
    }
}

impl fmt::Display for MagicRarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MagicRarity::Common => write!(f, "common"),
            MagicRarity::Uncommon => write!(f, "uncommon"),
            MagicRarity::Rare => write!(f, "rare"),
            MagicRarity::Mythic => write!(f, "mythic"),
            MagicRarity::Special => write!(f, "special"),
            MagicRarity::Bonus => write!(f, "bonus"),
        }
    }
}

impl FromStr for MagicRarity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MagicRarity::from_scryfall(&s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown rarity: {}", s))
    }
}
