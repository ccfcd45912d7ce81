use crate::cards::bucket::Bucket;
use crate::cards::price::Price;
use crate::cards::rawcard::RawCard;
use crate::rules::date_ranges::DateRangeTable;
use crate::rules::excluded_sets::ExcludedSetRegistry;
use crate::rules::thresholds::PriceThresholds;

pub struct Classifier {
    excluded_sets: ExcludedSetRegistry,
    date_ranges: DateRangeTable,
    thresholds: PriceThresholds,
}

impl Classifier {
    pub fn new(
        excluded_sets: ExcludedSetRegistry,
        date_ranges: DateRangeTable,
        thresholds: PriceThresholds,
    ) -> Self {
        Classifier {
            excluded_sets,
            date_ranges,
            thresholds,
        }
    }

    /// Buckets the card belongs to: nothing, exactly one of the date,
    /// basic land or token buckets, and/or the foil bucket.
    ///
    /// Basic lands and tokens are never considered for the date or foil
    /// buckets, and neither is anything rarer than uncommon.
    pub fn classify(&self, card: &RawCard) -> Vec<Bucket> {
        let mut buckets = Vec::new();

        if self.excluded_sets.is_excluded(&card.set, &card.set_name) || card.is_gold_bordered() {
            return buckets;
        }

        let type_line = card.type_line_lowercase();

        if type_line.contains("basic") {
            if meets(card.usd_price(), self.thresholds.basic_land) {
                buckets.push(Bucket::BasicLand);
            }
            return buckets;
        }

        if card.is_token_layout() || type_line.contains("emblem") {
            if meets(card.usd_price(), self.thresholds.token) {
                buckets.push(Bucket::Token);
            }
            return buckets;
        }

        let minimum = match card
            .magic_rarity()
            .and_then(|rarity| self.thresholds.for_rarity(rarity))
        {
            Some(minimum) => minimum,
            None => return buckets,
        };

        if let (Some(price), Some(released_on)) = (card.usd_price(), card.released_on()) {
            if price.at_least(minimum) {
                if let Some(bucket) = self.date_ranges.bucket_for(released_on) {
                    buckets.push(bucket);
                }
            }
        }

        if meets(card.foil_price(), self.thresholds.foil) {
            buckets.push(Bucket::Foil);
        }

        buckets
    }
}

fn meets(price: Option<Price>, threshold: f64) -> bool {
    price.is_some_and(|price| price.at_least(threshold))
}
