// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.screener.in";
pub const MARKET_PATH: &str = "/market/";

// Public CORS relays, tried in listed order after the direct request
pub const RELAY_PREFIXES: [&str; 2] = [
    "https://api.allorigins.win/raw?url=",
    "https://corsproxy.io/?",
];

// A response only counts as the market page if the body contains this
pub const PAGE_MARKER: &str = "Industry";

pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Browser-like header set; the site rejects the default client UA
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// Local files
pub const APP_DIR: &str = ".screener_dash";
pub const STATE_FILE: &str = "state.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_INDUSTRIES_FILE: &str = "industries";
pub const DEFAULT_RECS_FILE: &str = "recommendations";

// Window
pub const APP_TITLE: &str = "Screener Dashboard";
