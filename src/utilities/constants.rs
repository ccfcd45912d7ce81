pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const SCRYFALL_BULK_METADATA_PATH: &str = "/bulk-data/default-cards";
pub const SCRYFALL_IMAGE_BASE_URL: &str = "https://cards.scryfall.io/normal/front";

pub const JUSTTCG_API_URL: &str = "https://api.justtcg.com/v1";
pub const JUSTTCG_GAME: &str = "magic-the-gathering";

pub const OUTPUT_DIR: &str = "src/generated";
pub const CARDS_FILE_NAME: &str = "cards.json";
pub const PRICE_MOVERS_FILE_NAME: &str = "price-movers.json";

pub const USER_AGENT: &str = "mtg-prebuild/0.1";

/// Progress is logged every this many bulk records.
pub const PROGRESS_INTERVAL: usize = 10_000;

pub const BASIC_LAND_MIN_USD: f64 = 2.50;
pub const TOKEN_MIN_USD: f64 = 2.50;
pub const COMMON_MIN_USD: f64 = 0.80;
pub const UNCOMMON_MIN_USD: f64 = 2.00;
pub const FOIL_MIN_PRICE: f64 = 4.50;

pub const PRICE_MOVER_COMMON_MIN_PRICE: f64 = 1.00;
pub const PRICE_MOVER_UNCOMMON_MIN_PRICE: f64 = 2.00;
pub const TOP_SETS_PER_PERIOD: usize = 8;
pub const TOP_CARDS_PER_PERIOD: usize = 50;
/// JustTCG allows 10 requests a minute.
pub const JUSTTCG_REQUEST_DELAY_MS: u64 = 7_000;
pub const SCRYFALL_REQUEST_DELAY_MS: u64 = 120;

pub const EXCLUDED_SET_CODES: [&str; 12] = [
    "lea", "leb", "unk", "30a", "ced", "cei", "ptc", "sld", "slp", "slc", "slu", "pssc",
];

pub const EXCLUDED_SET_NAMES: [&str; 34] = [
    "Foreign Black Border",
    "Summer Magic / Edgar",
    "Beatdown Box Set",
    "Battle Royale Box Set",
    "Media and Collaboration Promos",
    "Unglued",
    "Renaissance",
    "Introductory Two-Player Set",
    "MicroProse Promos",
    "Fourth Edition Foreign Black Border",
    "Unlimited Edition",
    "Rinascimento",
    "Salvat 2005",
    "Salvat 2011",
    "Planechase Planes",
    "Planechase",
    "Archenemy Schemes",
    "Archenemy",
    "DCI Promos",
    "New Phyrexia Promos",
    "Planechase 2012 Planes",
    "Planechase 2012",
    "Face the Hydra",
    "Battle the Horde",
    "M15 Prerelease Challenge",
    "Planechase Anthology Planes",
    "Planechase Anthology",
    "Commander Anthology Tokens",
    "Commander Anthology Volume II Tokens",
    "Commander Anthology Volume II",
    "Core Set 2020 Promos",
    "The List",
    "Adventures in the Forgotten Realms Tokens",
    "Mystery Booster 2",
];

pub const EXCLUDED_SET_NAME_PREFIXES: [&str; 3] =
    ["Duel Decks:", "Duel Decks Anthology:", "Archenemy:"];

/// (bucket key, first day, last day). The last range has no end.
pub const DATE_RANGES: [(&str, &str, Option<&str>); 6] = [
    ("y1993_2003", "1995-01-01", Some("2003-12-31")),
    ("y2004_2014", "2004-01-01", Some("2014-12-31")),
    ("y2015_2020", "2015-01-01", Some("2020-12-31")),
    ("y2021_2022", "2021-01-01", Some("2022-12-31")),
    ("y2023_2025", "2023-01-01", Some("2025-12-31")),
    ("y2026_", "2026-01-01", None),
];
