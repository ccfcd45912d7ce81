pub mod bucket;
pub mod currency;
pub mod justtcg_card;
pub mod magicrarity;
pub mod price;
pub mod price_mover_card;
pub mod rawcard;
pub mod serializedcard;
