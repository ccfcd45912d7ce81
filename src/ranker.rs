use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cards::bucket::Bucket;
use crate::cards::magicrarity::MagicRarity;
use crate::cards::price::Price;
use crate::cards::rawcard::RawCard;
use crate::cards::serializedcard::{CardsDocument, SerializedCard};

/// Cards collected per bucket while the bulk data is streamed. Only the
/// classifier callback writes to it, ranking happens once the stream ended.
#[derive(Debug, Default)]
pub struct CardBuckets {
    buckets: BTreeMap<Bucket, Vec<RawCard>>,
}

impl CardBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bucket: Bucket, card: RawCard) {
        self.buckets.entry(bucket).or_default().push(card);
    }

    /// Adds the card to every bucket, cloning only when there is more than one.
    pub fn add_to_all(&mut self, buckets: &[Bucket], card: RawCard) {
        if let Some((last, rest)) = buckets.split_last() {
            for bucket in rest {
                self.add(*bucket, card.clone());
            }
            self.add(*last, card);
        }
    }

    pub fn len(&self, bucket: Bucket) -> usize {
        self.buckets.get(&bucket).map_or(0, Vec::len)
    }

    /// Sorts every bucket and projects it to the output shape.
    pub fn into_ranked(self) -> CardsDocument {
        self.buckets
            .into_iter()
            .map(|(bucket, mut cards)| {
                rank(bucket, &mut cards);
                let foil = bucket == Bucket::Foil;
                let serialized = cards
                    .iter()
                    .map(|card| SerializedCard::from_raw(card, foil))
                    .collect();
                (bucket, serialized)
            })
            .collect()
    }
}

fn rank(bucket: Bucket, cards: &mut [RawCard]) {
    match bucket {
        Bucket::BasicLand | Bucket::Token => {
            cards.sort_by(|a, b| descending(a.usd_price(), b.usd_price()))
        }
        Bucket::Foil => cards.sort_by(|a, b| descending(a.foil_price(), b.foil_price())),
        _ => cards.sort_by(|a, b| {
            rarity_rank(a)
                .cmp(&rarity_rank(b))
                .then_with(|| descending(a.usd_price(), b.usd_price()))
        }),
    }
}

/// Highest price first, missing prices count as zero.
fn descending(a: Option<Price>, b: Option<Price>) -> Ordering {
    let a = a.map_or(0.0, |price| price.amount);
    let b = b.map_or(0.0, |price| price.amount);
    b.total_cmp(&a)
}

fn rarity_rank(card: &RawCard) -> u8 {
    match card.magic_rarity() {
        Some(MagicRarity::Common) => 0,
        _ => 1,
    }
}
