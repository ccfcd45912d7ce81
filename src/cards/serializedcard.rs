use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bucket::Bucket;
use super::currency::Currency;
use super::rawcard::RawCard;

/// The shape the display layer reads from `cards.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedCard {
    pub name: String,
    pub set: String,
    pub set_name: String,
    pub rarity: String,
    pub released_at: Option<String>,
    pub image_url: Option<String>,
    pub price_usd: Option<f64>,
    pub price_usd_foil: Option<f64>,
    pub price_eur_foil: Option<f64>,
}

/// Bucket key to ranked cards. Empty buckets are never inserted.
pub type CardsDocument = BTreeMap<Bucket, Vec<SerializedCard>>;

impl SerializedCard {
    /// Projects a raw record. In the foil context only one of the foil
    /// prices is set (USD preferred) and the plain price is left out,
    /// otherwise only the plain USD price is set.
    pub fn from_raw(card: &RawCard, foil: bool) -> Self {
        let mut price_usd = None;
        let mut price_usd_foil = None;
        let mut price_eur_foil = None;

        if foil {
            match card.foil_price() {
                Some(price) if price.currency == Currency::USD => {
                    price_usd_foil = Some(price.amount)
                }
                Some(price) => price_eur_foil = Some(price.amount),
                None => {}
            }
        } else {
            price_usd = card.usd_price().map(|price| price.amount);
        }

        SerializedCard {
            name: card.name.clone(),
            set: card.set.clone(),
            set_name: card.set_name.clone(),
            rarity: card.rarity.clone(),
            released_at: card.released_at.clone(),
            image_url: card.image_url().map(str::to_string),
            price_usd,
            price_usd_foil,
            price_eur_foil,
        }
    }
}
