use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::magicrarity::MagicRarity;
use super::price::Price;

/// One record of the Scryfall bulk dataset. Only the fields needed for
/// categorization are decoded, everything else is skipped by the parser.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCard {
    pub name: String,
    pub set: String,
    pub set_name: String,
    pub rarity: String,
    pub type_line: Option<String>,
    pub border_color: Option<String>,
    pub layout: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub released_at: Option<String>,
    #[serde(deserialize_with = "lenient_prices")]
    pub prices: RawPrices,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPrices {
    #[serde(deserialize_with = "lenient_price")]
    pub usd: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub usd_foil: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub eur: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub eur_foil: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub normal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardFace {
    pub image_uris: Option<ImageUris>,
}

/// Scryfall quotes prices as strings ("0.19"), but numbers are accepted too.
/// Anything unparseable counts as a missing quote.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
    .filter(|price| price.is_finite()))
}

/// A non-string release date is treated as missing.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// `null` or a non-object `prices` means no quotes at all.
fn lenient_prices<'de, D>(deserializer: D) -> Result<RawPrices, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => RawPrices::deserialize(value).unwrap_or_default(),
        _ => RawPrices::default(),
    })
}

impl RawCard {
    pub fn usd_price(&self) -> Option<Price> {
        self.prices.usd.map(Price::usd)
    }

    /// Foil quote in USD, falling back to EUR.
    pub fn foil_price(&self) -> Option<Price> {
        self.prices
            .usd_foil
            .map(Price::usd)
            .or_else(|| self.prices.eur_foil.map(Price::eur))
    }

    pub fn magic_rarity(&self) -> Option<MagicRarity> {
        MagicRarity::from_scryfall(&self.rarity)
    }

    pub fn released_on(&self) -> Option<NaiveDate> {
        self.released_at
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    /// The card image, or the front face image for multi-faced cards.
    pub fn image_url(&self) -> Option<&str> {
        self.image_uris
            .as_ref()
            .and_then(|uris| uris.normal.as_deref())
            .or_else(|| {
                self.card_faces
                    .as_ref()?
                    .first()?
                    .image_uris
                    .as_ref()?
                    .normal
                    .as_deref()
            })
    }

    pub fn type_line_lowercase(&self) -> String {
        self.type_line.as_deref().unwrap_or("").to_lowercase()
    }

    pub fn is_gold_bordered(&self) -> bool {
        self.border_color.as_deref() == Some("gold")
    }

    pub fn is_token_layout(&self) -> bool {
        self.layout.as_deref() == Some("token")
    }
}
