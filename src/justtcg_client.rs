use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::cards::justtcg_card::{JustTcgCard, JustTcgSet};
use crate::utilities::constants::{JUSTTCG_API_URL, JUSTTCG_GAME};

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// Read-only JustTCG access. Every failure is logged and reported as an
/// empty result, price movers are optional data.
#[derive(Clone)]
pub struct JustTcgClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl JustTcgClient {
    pub fn new(base_url: Option<&str>, api_key: &str, client: Client) -> Self {
        JustTcgClient {
            client,
            base_url: base_url.unwrap_or(JUSTTCG_API_URL).to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn fetch_all_sets(&self) -> Vec<JustTcgSet> {
        self.get(
            "/sets",
            &[
                ("game", JUSTTCG_GAME),
                ("orderBy", "release_date"),
                ("order", "desc"),
                ("limit", "500"),
            ],
        )
        .await
    }

    pub async fn fetch_cards_for_set(&self, set_id: &str) -> Vec<JustTcgCard> {
        self.get(
            "/cards",
            &[
                ("set", set_id),
                ("orderBy", "90d"),
                ("order", "desc"),
                ("limit", "20"),
                ("min_price", "1.00"),
            ],
        )
        .await
    }

    async fn get<T>(&self, path: &str, params: &[(&str, &str)]) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let mut url = match Url::parse(&format!("{}{}", self.base_url, path)) {
            Ok(url) => url,
            Err(e) => {
                warn!("JustTCG: invalid url for {}: {}", path, e);
                return Vec::new();
            }
        };
        url.query_pairs_mut().extend_pairs(params);
        debug!("JustTCG request: {}", url);

        let response = match self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("JustTCG {} failed: {}", path, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!("JustTCG {} returned {}", path, response.status());
            return Vec::new();
        }

        match response.json::<DataEnvelope<T>>().await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                warn!("JustTCG {} returned an unreadable body: {}", path, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn server() -> mockito::ServerGuard {
        let _ = env_logger::builder().is_test(true).try_init();
        std::thread::spawn(mockito::Server::new).join().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_sets_sends_key_and_query() {
        let mut server = server();
        let mock = server
            .mock("GET", "/sets")
            .match_header("x-api-key", "secret")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("game".into(), "magic-the-gathering".into()),
                Matcher::UrlEncoded("orderBy".into(), "release_date".into()),
                Matcher::UrlEncoded("limit".into(), "500".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({"data": [
                    {"id": "lorwyn-magic-the-gathering", "name": "Lorwyn",
                     "set_value_change_7d_pct": 4.2},
                    {"id": "shadowmoor-magic-the-gathering", "name": "Shadowmoor"}
                ]})
                .to_string(),
            )
            .create_async()
            .await;

        let client = JustTcgClient::new(Some(&server.url()), "secret", Client::new());
        let sets = client.fetch_all_sets().await;

        mock.assert_async().await;
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].set_value_change_7d_pct, Some(4.2));
        assert_eq!(sets[1].set_value_change_30d_pct, None);
    }

    #[tokio::test]
    async fn test_fetch_cards_for_set() {
        let mut server = server();
        server
            .mock("GET", "/cards")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("set".into(), "lorwyn-magic-the-gathering".into()),
                Matcher::UrlEncoded("min_price".into(), "1.00".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({"data": [{
                    "name": "Sower of Temptation",
                    "rarity": "Uncommon",
                    "scryfallId": "abcdef12-0000",
                    "variants": [{"printing": "Normal", "condition": "Near Mint", "price": 3.5,
                                  "priceChange7d": 12.0}]
                }]})
                .to_string(),
            )
            .create_async()
            .await;

        let client = JustTcgClient::new(Some(&server.url()), "secret", Client::new());
        let cards = client.fetch_cards_for_set("lorwyn-magic-the-gathering").await;

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].scryfall_id.as_deref(), Some("abcdef12-0000"));
        assert_eq!(cards[0].variants[0].price_change_7d, Some(12.0));
    }

    #[tokio::test]
    async fn test_failures_are_empty_results() {
        let mut server = server();
        server
            .mock("GET", "/sets")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;
        server
            .mock("GET", "/cards")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = JustTcgClient::new(Some(&server.url()), "secret", Client::new());

        assert!(client.fetch_all_sets().await.is_empty());
        assert!(client.fetch_cards_for_set("any").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_empty_result() {
        let client = JustTcgClient::new(Some("http://127.0.0.1:1"), "secret", Client::new());

        assert!(client.fetch_all_sets().await.is_empty());
    }

    #[test]
    fn test_has_api_key() {
        assert!(!JustTcgClient::new(None, "", Client::new()).has_api_key());
        assert!(JustTcgClient::new(None, "key", Client::new()).has_api_key());
    }
}
