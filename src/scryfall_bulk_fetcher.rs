use std::fmt;
use std::io::{BufReader, Read};

use log::{debug, info};
use reqwest::blocking::{Client, Response};
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::cards::rawcard::RawCard;
use crate::error::FetchError;
use crate::utilities::constants::{SCRYFALL_API_URL, SCRYFALL_BULK_METADATA_PATH};
use crate::utilities::http_headers::scryfall_headers;

#[derive(Debug, Deserialize)]
struct BulkMetadata {
    download_uri: Option<String>,
}

pub struct ScryfallBulkFetcher {
    client: Client,
    base_url: String,
}

impl ScryfallBulkFetcher {
    pub fn new(base_url: Option<&str>, client: Client) -> Self {
        ScryfallBulkFetcher {
            client,
            base_url: base_url.unwrap_or(SCRYFALL_API_URL).to_string(),
        }
    }

    /// Asks Scryfall where today's "default cards" dump lives.
    pub fn resolve_download_uri(&self) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, SCRYFALL_BULK_METADATA_PATH);
        debug!("Requesting bulk metadata from {}", url);

        let response = self.client.get(&url).headers(scryfall_headers()).send()?;
        if !response.status().is_success() {
            return Err(FetchError::MetadataStatus(response.status()));
        }

        let metadata: BulkMetadata = response.json()?;
        metadata
            .download_uri
            .filter(|uri| !uri.is_empty())
            .ok_or(FetchError::MissingDownloadUri)
    }

    /// Opens the bulk download. Nothing is buffered beyond the reader, cards
    /// are decoded one at a time by [`CardStream::for_each_card`].
    pub fn open_stream(&self) -> Result<CardStream<Response>, FetchError> {
        let download_uri = self.resolve_download_uri()?;
        info!("Downloading bulk data from {}", download_uri);

        let response = self
            .client
            .get(&download_uri)
            .headers(scryfall_headers())
            .send()?;
        if !response.status().is_success() {
            return Err(FetchError::BulkStatus(response.status()));
        }

        Ok(CardStream::new(response))
    }
}

/// A JSON array of card records read straight off a byte source.
pub struct CardStream<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> CardStream<R> {
    pub fn new(reader: R) -> Self {
        CardStream {
            reader: BufReader::new(reader),
        }
    }

    /// Hands every decoded card to `on_card` in input order and returns how
    /// many there were. A malformed element aborts the whole stream.
    pub fn for_each_card<F>(self, on_card: F) -> Result<usize, FetchError>
    where
        F: FnMut(RawCard),
    {
        let mut deserializer = serde_json::Deserializer::from_reader(self.reader);
        let count = (&mut deserializer).deserialize_seq(CardSeqVisitor { on_card })?;
        deserializer.end()?;
        Ok(count)
    }
}

struct CardSeqVisitor<F> {
    on_card: F,
}

impl<'de, F> Visitor<'de> for CardSeqVisitor<F>
where
    F: FnMut(RawCard),
{
    type Value = usize;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of card objects")
    }

    fn visit_seq<A>(mut self, mut seq: A) -> Result<usize, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut count = 0;
        while let Some(card) = seq.next_element::<RawCard>()? {
            (self.on_card)(card);
            count += 1;
        }
        Ok(count)
    }
}
