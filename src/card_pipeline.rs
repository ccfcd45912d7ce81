use std::io::Read;
use std::path::PathBuf;

use log::info;

use crate::cards::bucket::Bucket;
use crate::cards::serializedcard::CardsDocument;
use crate::classifier::Classifier;
use crate::error::{FetchError, PipelineError};
use crate::ranker::CardBuckets;
use crate::scryfall_bulk_fetcher::{CardStream, ScryfallBulkFetcher};
use crate::utilities::constants::PROGRESS_INTERVAL;
use crate::utilities::file_management::write_json_atomically;

/// Fetch, classify, rank and write `cards.json`. Blocking, run it off the
/// async executor.
pub struct CardPipeline {
    fetcher: ScryfallBulkFetcher,
    classifier: Classifier,
    output_path: PathBuf,
}

impl CardPipeline {
    pub fn new(fetcher: ScryfallBulkFetcher, classifier: Classifier, output_path: PathBuf) -> Self {
        CardPipeline {
            fetcher,
            classifier,
            output_path,
        }
    }

    pub fn run(&self) -> Result<CardsDocument, PipelineError> {
        info!("Fetching bulk data metadata...");
        let stream = self.fetcher.open_stream()?;

        let buckets = categorize_stream(stream, &self.classifier)?;
        for bucket in Bucket::ALL {
            info!("  {}: {} cards", bucket, buckets.len(bucket));
        }

        let document = buckets.into_ranked();
        write_json_atomically(&self.output_path, &document)?;
        info!("Wrote {}", self.output_path.display());

        Ok(document)
    }
}

/// Classifies every streamed card into a fresh accumulator.
pub fn categorize_stream<R: Read>(
    stream: CardStream<R>,
    classifier: &Classifier,
) -> Result<CardBuckets, FetchError> {
    let mut buckets = CardBuckets::new();
    let mut processed = 0usize;

    let total = stream.for_each_card(|card| {
        processed += 1;
        if processed % PROGRESS_INTERVAL == 0 {
            info!("  Processed {} cards...", processed);
        }
        let matched = classifier.classify(&card);
        buckets.add_to_all(&matched, card);
    })?;

    info!("Processed {} cards total", total);
    Ok(buckets)
}
