// src/scrape/market.rs
//! Industry listing extraction from the screener.in market page.
//!
//! Purpose:
//! - Walk every `<tr>` in the fetched document and keep the data rows:
//!   no `<th>` inside, at least 10 cells, and an anchor in the second cell.
//! - Map the cells into an `IndustryRow`. Display strings are kept as
//!   printed by the site ("3,08,481", "12.4%"); blanks become "-".
//!   The company count is the one numeric field.
//!
//! Non-Responsibilities:
//! - No categorization (taxonomy.rs) and no filtering or sorting (view.rs).

use std::error::Error;
use std::fmt;

use crate::config::consts::{BASE_URL, MARKET_PATH};
use crate::core::html::{attr_ci, inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::net::{self, FetchOutcome};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::progress::Progress;

/// One industry listing row, cells kept as display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRow {
    pub name: String,
    /// Absolute link to the industry page, when the anchor carries one.
    pub url: Option<String>,
    pub companies: u32,
    pub market_cap: String,
    pub median_cap: String,
    pub pe: String,
    pub sales_growth: String,
    pub opm: String,
    pub roce: String,
    pub return_1y: String,
}

/// Why a collection run produced nothing.
#[derive(Debug)]
pub enum ScrapeError {
    /// Direct fetch and every relay failed; carries the last error seen.
    Transport(String),
    /// The page came back but no industry rows could be extracted.
    NoData,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Transport(last) => {
                write!(f, "could not reach the market page: {last}")
            }
            ScrapeError::NoData => {
                write!(f, "market page held no industry rows (layout change?)")
            }
        }
    }
}

impl Error for ScrapeError {}

/// Fetch the market page and extract all industry rows.
pub fn collect_industries(
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<IndustryRow>, ScrapeError> {
    let target = join!(BASE_URL, MARKET_PATH);

    let body = match net::fetch_market_page(&target, progress.as_deref_mut()) {
        FetchOutcome::Success { body, via } => {
            logf!("Market page fetched via {}", via);
            body
        }
        FetchOutcome::Exhausted { last_error } => {
            return Err(ScrapeError::Transport(last_error));
        }
    };

    let rows = parse_doc(&body);
    if rows.is_empty() {
        loge!("Page fetched but zero rows extracted");
        return Err(ScrapeError::NoData);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Extracted {} industries", rows.len()));
        p.finish();
    }
    logf!("Extracted {} industry rows", rows.len());
    Ok(rows)
}

/// Extract industry rows from a full HTML document.
pub fn parse_doc(doc: &str) -> Vec<IndustryRow> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        // Header rows carry <th> cells.
        if to_lower(tr).contains("<th") {
            continue;
        }

        // Raw <td> blocks; text is pulled lazily per cell.
        let mut cells: Vec<&str> = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(&tr[td_s..td_e]);
            td_pos = td_e;
        }
        if cells.len() < 10 {
            continue;
        }

        // The second cell links to the industry page; rows without the
        // anchor (totals, spacers) are not data rows.
        let Some((name, url)) = read_anchor(cells[1]) else {
            continue;
        };

        out.push(IndustryRow {
            name,
            url,
            companies: parse_count(&cell_text(cells[2])),
            market_cap: cell_text(cells[3]),
            median_cap: cell_text(cells[4]),
            pe: cell_text(cells[5]),
            sales_growth: cell_text(cells[6]),
            opm: cell_text(cells[7]),
            roce: cell_text(cells[8]),
            return_1y: cell_text(cells[9]),
        });
    }

    out
}

/* ---------- helpers ---------- */

/// First `<a>` inside a cell block: (text, absolute href).
fn read_anchor(td_block: &str) -> Option<(String, Option<String>)> {
    let (a_s, a_e) = next_tag_block_ci(td_block, "<a", "</a>", 0)?;
    let a_block = &td_block[a_s..a_e];

    let name = normalize_ws(&strip_tags(normalize_entities(&inner_after_open_tag(a_block))));
    let url = attr_ci(a_block, "href").map(|href| {
        if href.starts_with("http") {
            href
        } else {
            join!(BASE_URL, &href)
        }
    });
    Some((name, url))
}

/// Cell text with site formatting intact; blank cells read "-".
fn cell_text(td_block: &str) -> String {
    let clean = normalize_ws(&strip_tags(normalize_entities(&inner_after_open_tag(td_block))));
    if clean.is_empty() { s!("-") } else { clean }
}

/// Leading integer with thousands separators dropped; no digits is 0.
fn parse_count(s: &str) -> u32 {
    let t: String = s.trim().chars().filter(|&c| c != ',').collect();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    static DOC: &str = r#"
        <html><body>
        <table>
          <tr><th>S.No</th><th>Industry</th><th>Cos.</th><th>Mar Cap</th>
              <th>Median Cap</th><th>P/E</th><th>Sales Gr</th><th>OPM</th>
              <th>ROCE</th><th>1Yr return</th></tr>
          <tr>
            <td></td>
            <td><a href="/market/industry/x/">Alpha</a></td>
            <td>5</td><td>120</td><td>80</td><td>15</td>
            <td>12%</td><td>-</td><td>22%</td><td>9%</td>
          </tr>
          <tr><td>1</td><td>short row</td></tr>
          <tr>
            <td></td><td>no anchor</td>
            <td>1</td><td>2</td><td>3</td><td>4</td>
            <td>5</td><td>6</td><td>7</td><td>8</td>
          </tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn keeps_only_anchored_data_rows() {
        let rows = parse_doc(DOC);
        assert_eq!(rows.len(), 1);

        let r = &rows[0];
        assert_eq!(r.name, "Alpha");
        assert_eq!(r.url.as_deref(), Some("https://www.screener.in/market/industry/x/"));
        assert_eq!(r.companies, 5);
        assert_eq!(r.market_cap, "120");
        assert_eq!(r.median_cap, "80");
        assert_eq!(r.pe, "15");
        assert_eq!(r.sales_growth, "12%");
        assert_eq!(r.opm, "-");
        assert_eq!(r.roce, "22%");
        assert_eq!(r.return_1y, "9%");
    }

    #[test]
    fn blank_cells_read_dash_and_entities_resolve() {
        let doc = r#"<table><tr>
            <td>1</td>
            <td><a href="/i/">Oil &amp; Gas</a></td>
            <td>1,234</td><td></td><td> </td><td><span>18.2</span></td>
            <td>&nbsp;</td><td>31.0%</td><td>12.9%</td><td>-4.2%</td>
        </tr></table>"#;
        let rows = parse_doc(doc);
        assert_eq!(rows.len(), 1);

        let r = &rows[0];
        assert_eq!(r.name, "Oil & Gas");
        assert_eq!(r.companies, 1234);
        assert_eq!(r.market_cap, "-");
        assert_eq!(r.median_cap, "-");
        assert_eq!(r.pe, "18.2");
        assert_eq!(r.sales_growth, "-");
        assert_eq!(r.return_1y, "-4.2%");
    }

    #[test]
    fn anchor_without_href_keeps_row_without_link() {
        let doc = r#"<table><tr>
            <td>1</td><td><a>Bare</a></td>
            <td>2</td><td>a</td><td>b</td><td>c</td>
            <td>d</td><td>e</td><td>f</td><td>g</td>
        </tr></table>"#;
        let rows = parse_doc(doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bare");
        assert_eq!(rows[0].url, None);
    }

    #[test]
    fn absolute_hrefs_are_left_alone() {
        let doc = r#"<table><tr>
            <td>1</td><td><a href="https://elsewhere.example/page">Ext</a></td>
            <td>2</td><td>a</td><td>b</td><td>c</td>
            <td>d</td><td>e</td><td>f</td><td>g</td>
        </tr></table>"#;
        let rows = parse_doc(doc);
        assert_eq!(rows[0].url.as_deref(), Some("https://elsewhere.example/page"));
    }

    #[test]
    fn parse_count_variants() {
        assert_eq!(parse_count("5"), 5);
        assert_eq!(parse_count("1,234"), 1234);
        assert_eq!(parse_count(" 17 cos"), 17);
        assert_eq!(parse_count("-"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn empty_document_extracts_nothing() {
        assert!(parse_doc("").is_empty());
        assert!(parse_doc("<table><tr><th>only headers</th></tr></table>").is_empty());
    }

    #[test]
    fn error_messages_name_the_failure() {
        let t = ScrapeError::Transport(s!("timed out")).to_string();
        assert!(t.contains("timed out"));
        let n = ScrapeError::NoData.to_string();
        assert!(n.contains("no industry rows"));
    }
}
