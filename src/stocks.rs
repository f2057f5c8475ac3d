// src/stocks.rs
//! Entity registry: stock symbol -> descriptive metadata.
//! Bundled read-only table; consulted when joining recommendation stock
//! picks to their screener pages and classification.

pub struct StockInfo {
    pub name: &'static str,
    pub screener_url: Option<&'static str>,
    pub industry: Option<&'static str>,
    pub group: Option<&'static str>,
    pub sub_group: Option<&'static str>,
}

pub static STOCKS: &[(&str, StockInfo)] = &[
    ("RELIANCE", StockInfo {
        name: "Reliance Industries",
        screener_url: Some("https://www.screener.in/company/RELIANCE/"),
        industry: Some("Refineries & Marketing"),
        group: Some("ENERGY"),
        sub_group: Some("Oil & Gas"),
    }),
    ("CCLPRODUCTS", StockInfo {
        name: "CCL Products",
        screener_url: Some("https://www.screener.in/company/CCL/"),
        industry: Some("Tea & Coffee"),
        group: Some("F&B"),
        sub_group: Some("Beverages"),
    }),
    ("MTARTECH", StockInfo {
        name: "MTAR Technologies",
        screener_url: Some("https://www.screener.in/company/MTARTECH/"),
        industry: Some("Aerospace & Defense"),
        group: Some("DEFENSE"),
        sub_group: Some("Other"),
    }),
    ("AZAD", StockInfo {
        name: "Azad Engineering",
        screener_url: Some("https://www.screener.in/company/AZAD/"),
        industry: Some("Aerospace & Defense"),
        group: Some("DEFENSE"),
        sub_group: Some("Other"),
    }),
    ("SONACOMS", StockInfo {
        name: "Sona BLW",
        screener_url: Some("https://www.screener.in/company/SONACOMS/"),
        industry: Some("Auto Components & Equipments"),
        group: Some("AUTO"),
        sub_group: Some("Ancillary"),
    }),
];

/// Lookup by symbol.
pub fn lookup(symbol: &str) -> Option<&'static StockInfo> {
    STOCKS
        .iter()
        .find(|(sym, _)| *sym == symbol)
        .map(|(_, info)| info)
}

/// Lookup by display name; recommendation picks reference stocks this way.
pub fn by_name(name: &str) -> Option<&'static StockInfo> {
    STOCKS
        .iter()
        .find(|(_, info)| info.name == name)
        .map(|(_, info)| info)
}
