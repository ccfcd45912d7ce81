use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output category a card can be routed into. The derived ordering is the
/// order buckets appear in the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "y1993_2003")]
    Y1993To2003,
    #[serde(rename = "y2004_2014")]
    Y2004To2014,
    #[serde(rename = "y2015_2020")]
    Y2015To2020,
    #[serde(rename = "y2021_2022")]
    Y2021To2022,
    #[serde(rename = "y2023_2025")]
    Y2023To2025,
    #[serde(rename = "y2026_")]
    Y2026Onwards,
    #[serde(rename = "basic_land")]
    BasicLand,
    #[serde(rename = "token")]
    Token,
    #[serde(rename = "foil")]
    Foil,
}

impl Bucket {
    pub const ALL: [Bucket; 9] = [
        Bucket::Y1993To2003,
        Bucket::Y2004To2014,
        Bucket::Y2015To2020,
        Bucket::Y2021To2022,
        Bucket::Y2023To2025,
        Bucket::Y2026Onwards,
        Bucket::BasicLand,
        Bucket::Token,
        Bucket::Foil,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Bucket::Y1993To2003 => "y1993_2003",
            Bucket::Y2004To2014 => "y2004_2014",
            Bucket::Y2015To2020 => "y2015_2020",
            Bucket::Y2021To2022 => "y2021_2022",
            Bucket::Y2023To2025 => "y2023_2025",
            Bucket::Y2026Onwards => "y2026_",
            Bucket::BasicLand => "basic_land",
            Bucket::Token => "token",
            Bucket::Foil => "foil",
        }
    }

    pub fn is_date_range(&self) -> bool {
        !matches!(self, Bucket::BasicLand | Bucket::Token | Bucket::Foil)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Bucket {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| bucket.key() == s)
            .ok_or_else(|| format!("Unknown bucket key: {}", s))
    }
}
