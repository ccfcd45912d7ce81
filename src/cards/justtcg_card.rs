use serde::Deserialize;

use super::price_mover_card::PriceMoverPeriod;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JustTcgSet {
    pub id: String,
    pub name: String,
    pub set_value_change_7d_pct: Option<f64>,
    pub set_value_change_30d_pct: Option<f64>,
    pub set_value_change_90d_pct: Option<f64>,
}

impl JustTcgSet {
    /// There is no daily set figure, so the 24h ranking reuses the weekly one.
    pub fn change_pct(&self, period: PriceMoverPeriod) -> f64 {
        match period {
            PriceMoverPeriod::Day | PriceMoverPeriod::Week => self.set_value_change_7d_pct,
            PriceMoverPeriod::Month => self.set_value_change_30d_pct,
            PriceMoverPeriod::Quarter => self.set_value_change_90d_pct,
        }
        .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JustTcgCard {
    pub name: String,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    #[serde(rename = "scryfallId")]
    pub scryfall_id: Option<String>,
    pub variants: Vec<JustTcgVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JustTcgVariant {
    pub printing: Option<String>,
    pub condition: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "priceChange24hr")]
    pub price_change_24hr: Option<f64>,
    #[serde(rename = "priceChange7d")]
    pub price_change_7d: Option<f64>,
    #[serde(rename = "priceChange30d")]
    pub price_change_30d: Option<f64>,
    #[serde(rename = "priceChange90d")]
    pub price_change_90d: Option<f64>,
}

impl JustTcgVariant {
    pub fn price_change(&self, period: PriceMoverPeriod) -> Option<f64> {
        match period {
            PriceMoverPeriod::Day => self.price_change_24hr,
            PriceMoverPeriod::Week => self.price_change_7d,
            PriceMoverPeriod::Month => self.price_change_30d,
            PriceMoverPeriod::Quarter => self.price_change_90d,
        }
    }

    fn is_normal(&self) -> bool {
        self.printing.as_deref() == Some("Normal")
    }
}

/// Near Mint non-foil first, then any non-foil, then whatever is listed first.
pub fn pick_variant(variants: &[JustTcgVariant]) -> Option<&JustTcgVariant> {
    variants
        .iter()
        .find(|v| v.is_normal() && v.condition.as_deref() == Some("Near Mint"))
        .or_else(|| variants.iter().find(|v| v.is_normal()))
        .or_else(|| variants.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant(printing: &str, condition: &str, price: f64) -> JustTcgVariant {
        JustTcgVariant {
            printing: Some(printing.to_string()),
            condition: Some(condition.to_string()),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_pick_variant_prefers_near_mint_normal() {
        let variants = vec![
            variant("Foil", "Near Mint", 9.0),
            variant("Normal", "Lightly Played", 2.0),
            variant("Normal", "Near Mint", 3.0),
        ];
        assert_eq!(pick_variant(&variants).unwrap().price, Some(3.0));
    }

    #[test]
    fn test_pick_variant_falls_back_to_any_normal_then_first() {
        let variants = vec![variant("Foil", "Near Mint", 9.0), variant("Normal", "Damaged", 1.0)];
        assert_eq!(pick_variant(&variants).unwrap().price, Some(1.0));

        let foils = vec![variant("Foil", "Near Mint", 9.0), variant("Foil", "Damaged", 4.0)];
        assert_eq!(pick_variant(&foils).unwrap().price, Some(9.0));

        assert!(pick_variant(&[]).is_none());
    }

    #[test]
    fn test_day_ranking_uses_weekly_set_change() {
        let set: JustTcgSet = serde_json::from_value(json!({
            "id": "set-a",
            "name": "Set A",
            "set_value_change_7d_pct": 12.5,
            "set_value_change_90d_pct": null
        }))
        .unwrap();

        assert_eq!(set.change_pct(PriceMoverPeriod::Day), 12.5);
        assert_eq!(set.change_pct(PriceMoverPeriod::Week), 12.5);
        assert_eq!(set.change_pct(PriceMoverPeriod::Month), 0.0);
        assert_eq!(set.change_pct(PriceMoverPeriod::Quarter), 0.0);
    }

    #[test]
    fn test_variant_decodes_camel_case_changes() {
        let variant: JustTcgVariant = serde_json::from_value(json!({
            "printing": "Normal",
            "condition": "Near Mint",
            "price": 2.5,
            "priceChange24hr": 1.5,
            "priceChange90d": -3.0
        }))
        .unwrap();

        assert_eq!(variant.price_change(PriceMoverPeriod::Day), Some(1.5));
        assert_eq!(variant.price_change(PriceMoverPeriod::Week), None);
        assert_eq!(variant.price_change(PriceMoverPeriod::Quarter), Some(-3.0));
    }
}
