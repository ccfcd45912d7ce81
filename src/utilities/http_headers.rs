use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use super::constants;

/// Scryfall rejects requests without an explicit accept header and user agent.
pub fn scryfall_headers() -> HeaderMap {
    let mut header_map = HeaderMap::new();
    header_map.insert(ACCEPT, HeaderValue::from_static("application/json;q=0.9,*/*;q=0.8"));
    header_map.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
    header_map
}
