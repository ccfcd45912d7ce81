mod card_pipeline;
mod cards;
mod classifier;
mod error;
mod justtcg_client;
mod price_movers;
mod ranker;
mod rules;
mod scryfall_bulk_fetcher;
mod scryfall_card_lookup;
#[cfg(test)]
mod test;
mod utilities;

use std::process::ExitCode;

use env_logger::{Env, Target};
use log::info;

use card_pipeline::CardPipeline;
use cards::price_mover_card::PriceMoversDocument;
use cards::serializedcard::CardsDocument;
use classifier::Classifier;
use error::PipelineError;
use justtcg_client::JustTcgClient;
use price_movers::PriceMoversPipeline;
use rules::date_ranges::DateRangeTable;
use rules::excluded_sets::ExcludedSetRegistry;
use rules::thresholds::PriceThresholds;
use scryfall_bulk_fetcher::ScryfallBulkFetcher;
use scryfall_card_lookup::ScryfallCardLookup;
use utilities::config::CONFIG;

/// Blocking: owns a blocking HTTP client, so it must not run on the executor.
fn fetch_cards() -> Result<CardsDocument, PipelineError> {
    let start_time = chrono::prelude::Local::now();
    info!("Starting card fetch at {}", start_time);

    let classifier = Classifier::new(
        ExcludedSetRegistry::default(),
        DateRangeTable::default_ranges()?,
        PriceThresholds::default(),
    );
    let fetcher = ScryfallBulkFetcher::new(
        Some(&CONFIG.scryfall_api_url),
        reqwest::blocking::Client::new(),
    );
    let output_path = CONFIG.cards_output_path();
    let document = CardPipeline::new(fetcher, classifier, output_path.clone()).run()?;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Card fetch started at: {}. Finished at: {}. Took: {} seconds and with {} buckets \
         on path: {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        document.len(),
        output_path.display()
    );
    Ok(document)
}

async fn fetch_price_movers() -> Result<PriceMoversDocument, PipelineError> {
    let start_time = chrono::prelude::Local::now();
    info!("Starting price movers fetch at {}", start_time);

    let client = reqwest::Client::new();
    let pipeline = PriceMoversPipeline::new(
        JustTcgClient::new(
            Some(&CONFIG.justtcg_api_url),
            &CONFIG.justtcg_api_key,
            client.clone(),
        ),
        ScryfallCardLookup::new(Some(&CONFIG.scryfall_api_url), client),
        ExcludedSetRegistry::default(),
        CONFIG.price_movers_output_path(),
    );
    let document = pipeline.run().await?;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Price movers fetch started at: {}. Finished at: {}. Took: {} seconds and with {} cards",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        document.values().map(Vec::len).sum::<usize>()
    );
    Ok(document)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    if CONFIG.skip_prebuild {
        info!("prebuild: skipped (SKIP_PREBUILD=true)");
        return ExitCode::SUCCESS;
    }

    if CONFIG.fetch_cards {
        let result = tokio::task::spawn_blocking(fetch_cards)
            .await
            .map_err(PipelineError::from)
            .and_then(|result| result);
        if let Err(e) = result {
            eprintln!("[fetch-cards] Failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if CONFIG.fetch_price_movers {
        if let Err(e) = fetch_price_movers().await {
            eprintln!("[fetch-price-movers] Failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
