use crate::cards::bucket::Bucket;
use crate::cards::rawcard::{ImageUris, RawCard, RawPrices};
use crate::classifier::Classifier;
use crate::rules::date_ranges::{DateRange, DateRangeTable};
use crate::rules::excluded_sets::ExcludedSetRegistry;
use crate::rules::thresholds::PriceThresholds;
use chrono::NaiveDate;

pub static TEST_IMAGE_URL: &str = "https://cards.scryfall.io/normal/front/test.jpg";

pub fn raw_card(name: &str, rarity: &str, usd: Option<f64>, released_at: Option<&str>) -> RawCard {
    RawCard {
        name: name.to_string(),
        set: "tst".to_string(),
        set_name: "Test Set".to_string(),
        rarity: rarity.to_string(),
        type_line: Some("Creature — Elf".to_string()),
        border_color: Some("black".to_string()),
        layout: Some("normal".to_string()),
        released_at: released_at.map(str::to_string),
        prices: RawPrices {
            usd,
            ..Default::default()
        },
        image_uris: Some(ImageUris {
            normal: Some(TEST_IMAGE_URL.to_string()),
        }),
        card_faces: None,
    }
}

pub fn basic_land(usd: Option<f64>) -> RawCard {
    let mut card = raw_card("Forest", "common", usd, Some("1999-01-01"));
    card.type_line = Some("Basic Land — Forest".to_string());
    card
}

pub fn token(usd: Option<f64>) -> RawCard {
    let mut card = raw_card("Elf Warrior", "common", usd, Some("2008-05-02"));
    card.type_line = Some("Token Creature — Elf Warrior".to_string());
    card.layout = Some("token".to_string());
    card
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Two date ranges and a tiny exclusion list, independent of the shipped tables.
pub fn fixture_classifier() -> Classifier {
    let excluded = ExcludedSetRegistry::new(["xxx"], ["Fixture Promos"], ["Fixture Decks:"]);
    let ranges = DateRangeTable::new(vec![
        (
            Bucket::Y1993To2003,
            DateRange::new(date("1995-01-01"), Some(date("2003-12-31"))),
        ),
        (
            Bucket::Y2004To2014,
            DateRange::new(date("2004-01-01"), Some(date("2014-12-31"))),
        ),
    ])
    .unwrap();
    Classifier::new(excluded, ranges, PriceThresholds::default())
}
