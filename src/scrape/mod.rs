// src/scrape/mod.rs
mod market;

pub use market::collect_industries;
pub use market::parse_doc;
pub use market::{IndustryRow, ScrapeError};
