use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

use log::{info, warn};

use crate::cards::justtcg_card::{pick_variant, JustTcgCard, JustTcgSet, JustTcgVariant};
use crate::cards::magicrarity::MagicRarity;
use crate::cards::price_mover_card::{
    empty_price_movers, PriceMoverCard, PriceMoverPeriod, PriceMoversDocument,
};
use crate::error::PipelineError;
use crate::justtcg_client::JustTcgClient;
use crate::rules::excluded_sets::ExcludedSetRegistry;
use crate::scryfall_card_lookup::{scryfall_image_url, ScryfallCardLookup};
use crate::utilities::constants::{
    JUSTTCG_REQUEST_DELAY_MS, PRICE_MOVER_COMMON_MIN_PRICE, PRICE_MOVER_UNCOMMON_MIN_PRICE,
    SCRYFALL_REQUEST_DELAY_MS, TOP_CARDS_PER_PERIOD, TOP_SETS_PER_PERIOD,
};
use crate::utilities::file_management::write_json_atomically;

pub type TopSets = BTreeMap<PriceMoverPeriod, Vec<JustTcgSet>>;

/// Builds `price-movers.json`: the commons and uncommons that gained the
/// most value per period, taken from the sets that moved the most.
pub struct PriceMoversPipeline {
    justtcg: JustTcgClient,
    scryfall: ScryfallCardLookup,
    excluded_sets: ExcludedSetRegistry,
    output_path: PathBuf,
    set_delay: Duration,
    image_delay: Duration,
}

impl PriceMoversPipeline {
    pub fn new(
        justtcg: JustTcgClient,
        scryfall: ScryfallCardLookup,
        excluded_sets: ExcludedSetRegistry,
        output_path: PathBuf,
    ) -> Self {
        PriceMoversPipeline {
            justtcg,
            scryfall,
            excluded_sets,
            output_path,
            set_delay: Duration::from_millis(JUSTTCG_REQUEST_DELAY_MS),
            image_delay: Duration::from_millis(SCRYFALL_REQUEST_DELAY_MS),
        }
    }

    pub fn with_delays(mut self, set_delay: Duration, image_delay: Duration) -> Self {
        self.set_delay = set_delay;
        self.image_delay = image_delay;
        self
    }

    pub async fn run(&self) -> Result<PriceMoversDocument, PipelineError> {
        if !self.justtcg.has_api_key() {
            info!("JUSTTCG_API_KEY not set, writing empty data");
            return self.write(empty_price_movers());
        }

        info!("Fetching MTG sets...");
        let all_sets = self.justtcg.fetch_all_sets().await;
        info!("fetch_all_sets returned {} sets", all_sets.len());
        if all_sets.is_empty() {
            warn!("No sets returned, writing empty data");
            return self.write(empty_price_movers());
        }

        let top_sets = top_sets_by_period(&all_sets, &self.excluded_sets);
        let set_ids = unique_set_ids(&top_sets);
        info!("Fetching cards from {} unique sets...", set_ids.len());
        let cards_by_set = self.fetch_cards_by_set(&set_ids).await;

        let mut document: PriceMoversDocument = top_sets
            .iter()
            .map(|(period, sets)| {
                let cards = rank_period(*period, sets, &cards_by_set, &self.excluded_sets);
                info!("  {}: {} cards", period, cards.len());
                (*period, cards)
            })
            .collect();

        self.resolve_missing_images(&mut document).await;
        self.write(document)
    }

    async fn fetch_cards_by_set(&self, set_ids: &[String]) -> HashMap<String, Vec<JustTcgCard>> {
        let mut cards_by_set = HashMap::new();
        for (index, set_id) in set_ids.iter().enumerate() {
            // JustTCG allows ten requests a minute.
            if index > 0 {
                tokio::time::sleep(self.set_delay).await;
            }
            let cards = self.justtcg.fetch_cards_for_set(set_id).await;
            cards_by_set.insert(set_id.clone(), cards);
            info!("Sets fetched: {}/{}", index + 1, set_ids.len());
        }
        cards_by_set
    }

    /// Looks up each distinct name once. Cards whose lookup fails keep no image.
    async fn resolve_missing_images(&self, document: &mut PriceMoversDocument) {
        let names = missing_image_names(document);
        if names.is_empty() {
            return;
        }
        info!("Resolving {} images via Scryfall...", names.len());

        let mut resolved = HashMap::new();
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.image_delay).await;
            }
            if let Some(image_url) = self.scryfall.image_url_by_name(name).await {
                resolved.insert(name.clone(), image_url);
            }
        }

        for card in document.values_mut().flatten() {
            if card.image_url.is_none() {
                card.image_url = resolved.get(&card.name).cloned();
            }
        }
    }

    fn write(&self, document: PriceMoversDocument) -> Result<PriceMoversDocument, PipelineError> {
        write_json_atomically(&self.output_path, &document)?;
        info!("Written to {}", self.output_path.display());
        Ok(document)
    }
}

/// The sets with the largest value change per period, ignoring excluded
/// set names. Ties keep the API order.
pub fn top_sets_by_period(sets: &[JustTcgSet], excluded_sets: &ExcludedSetRegistry) -> TopSets {
    let eligible: Vec<&JustTcgSet> = sets
        .iter()
        .filter(|set| !excluded_sets.is_excluded_name(&set.name))
        .collect();
    info!("{} eligible sets", eligible.len());

    PriceMoverPeriod::ALL
        .into_iter()
        .map(|period| {
            let mut sorted = eligible.clone();
            sorted.sort_by(|a, b| b.change_pct(period).total_cmp(&a.change_pct(period)));
            let top = sorted
                .into_iter()
                .take(TOP_SETS_PER_PERIOD)
                .cloned()
                .collect();
            (period, top)
        })
        .collect()
}

/// Set ids across all periods, each once, in first-seen order.
pub fn unique_set_ids(top_sets: &TopSets) -> Vec<String> {
    let mut seen = HashSet::new();
    top_sets
        .values()
        .flatten()
        .filter(|set| seen.insert(set.id.as_str()))
        .map(|set| set.id.clone())
        .collect()
}

pub fn rank_period(
    period: PriceMoverPeriod,
    top_sets: &[JustTcgSet],
    cards_by_set: &HashMap<String, Vec<JustTcgCard>>,
    excluded_sets: &ExcludedSetRegistry,
) -> Vec<PriceMoverCard> {
    let mut seen = HashSet::new();
    let mut movers = Vec::new();

    let cards = top_sets
        .iter()
        .filter_map(|set| cards_by_set.get(&set.id))
        .flatten();
    for card in cards {
        let Some(rarity) = card
            .rarity
            .as_deref()
            .and_then(|rarity| rarity.parse::<MagicRarity>().ok())
            .filter(MagicRarity::is_common_or_uncommon)
        else {
            continue;
        };
        if is_excluded(card, excluded_sets) {
            continue;
        }
        let Some(variant) = pick_variant(&card.variants) else {
            continue;
        };
        let Some(price) = variant.price.filter(|price| *price > 0.0) else {
            continue;
        };
        if price < minimum_price(rarity) {
            continue;
        }
        if !variant.price_change(period).is_some_and(|change| change > 0.0) {
            continue;
        }
        if !seen.insert(card.name.as_str()) {
            continue;
        }
        movers.push(to_price_mover(card, rarity, variant, price));
    }

    movers.sort_by(|a, b| {
        let a = a.price_change(period).unwrap_or(f64::NEG_INFINITY);
        let b = b.price_change(period).unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    movers.truncate(TOP_CARDS_PER_PERIOD);
    movers
}

fn is_excluded(card: &JustTcgCard, excluded_sets: &ExcludedSetRegistry) -> bool {
    let by_code = card
        .set
        .as_deref()
        .is_some_and(|code| excluded_sets.is_excluded_code(&code.to_lowercase()));
    let by_name = card
        .set_name
        .as_deref()
        .is_some_and(|name| excluded_sets.is_excluded_name(name));
    by_code || by_name
}

fn minimum_price(rarity: MagicRarity) -> f64 {
    match rarity {
        MagicRarity::Common => PRICE_MOVER_COMMON_MIN_PRICE,
        _ => PRICE_MOVER_UNCOMMON_MIN_PRICE,
    }
}

fn to_price_mover(
    card: &JustTcgCard,
    rarity: MagicRarity,
    variant: &JustTcgVariant,
    price: f64,
) -> PriceMoverCard {
    PriceMoverCard {
        name: card.name.clone(),
        rarity: rarity.to_string(),
        set_id: card.set.clone().unwrap_or_default(),
        set_name: card.set_name.clone().unwrap_or_default(),
        image_url: card.scryfall_id.as_deref().and_then(scryfall_image_url),
        price,
        price_change_24hr: variant.price_change_24hr,
        price_change_7d: variant.price_change_7d,
        price_change_30d: variant.price_change_30d,
        price_change_90d: variant.price_change_90d,
    }
}

fn missing_image_names(document: &PriceMoversDocument) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .values()
        .flatten()
        .filter(|card| card.image_url.is_none())
        .filter(|card| seen.insert(card.name.as_str()))
        .map(|card| card.name.clone())
        .collect()
}
