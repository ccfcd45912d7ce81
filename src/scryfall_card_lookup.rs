use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::utilities::constants::{SCRYFALL_API_URL, SCRYFALL_IMAGE_BASE_URL};
use crate::utilities::http_headers::scryfall_headers;

/// Card image on the Scryfall CDN, derived from the card id alone.
pub fn scryfall_image_url(scryfall_id: &str) -> Option<String> {
    let mut chars = scryfall_id.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    Some(format!(
        "{}/{}/{}/{}.jpg",
        SCRYFALL_IMAGE_BASE_URL, first, second, scryfall_id
    ))
}

#[derive(Debug, Deserialize)]
struct NamedCard {
    id: Option<String>,
}

pub struct ScryfallCardLookup {
    client: Client,
    base_url: String,
}

impl ScryfallCardLookup {
    pub fn new(base_url: Option<&str>, client: Client) -> Self {
        ScryfallCardLookup {
            client,
            base_url: base_url.unwrap_or(SCRYFALL_API_URL).to_string(),
        }
    }

    /// Image of the card with exactly this name. Not found and failed
    /// requests both give `None`.
    pub async fn image_url_by_name(&self, name: &str) -> Option<String> {
        let url = format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("Scryfall lookup: {}", url);

        let response = match self.client.get(&url).headers(scryfall_headers()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Scryfall lookup for '{}' failed: {}", name, e);
                return None;
            }
        };
        if !response.status().is_success() {
            debug!("Scryfall has no card named '{}' ({})", name, response.status());
            return None;
        }

        match response.json::<NamedCard>().await {
            Ok(card) => card.id.as_deref().and_then(scryfall_image_url),
            Err(e) => {
                warn!("Scryfall lookup for '{}' returned an unreadable body: {}", name, e);
                None
            }
        }
    }
}
