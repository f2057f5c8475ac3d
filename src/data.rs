// src/data.rs
//
// Light wrappers around canonical and view-layer table data.
//
// - MarketData: read-only holder for the fetched industry table.
//   Only a refresh replaces the contents, via the explicit method.
// - TableView: derived projection produced from MarketData by applying
//   a page's view state; holds row positions, never copies of rows.
//
// The display projections (header captions, per-row cells, the flattened
// recommendations table) live here too; GUI tables, clipboard copy and
// file export all share them.

use crate::recs::AggregatedRow;
use crate::scrape::IndustryRow;
use crate::taxonomy::Resolver;
use crate::view::{self, Column, ViewState};

/// Authoritative industry dataset. Empty until the first fetch lands.
#[derive(Clone, Debug, Default)]
pub struct MarketData {
    rows: Vec<IndustryRow>,
}

impl MarketData {
    pub fn new(rows: Vec<IndustryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndustryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The only mutator: a refresh swaps the whole table at once.
    pub fn replace(&mut self, rows: Vec<IndustryRow>) {
        self.rows = rows;
    }
}

/// Zero-copy filtered view for display.
/// Holds positions of kept rows in the canonical table.
pub struct TableView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a MarketData,
}

impl<'a> TableView<'a> {
    pub fn build(raw: &'a MarketData, state: &ViewState, resolver: &Resolver) -> Self {
        Self {
            row_ix: view::visible_rows(raw.rows(), state, resolver),
            raw,
        }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a IndustryRow> {
        self.row_ix.get(i).and_then(|&ix| self.raw.rows.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a IndustryRow> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.rows.get(ix))
    }
}

/* ---------- display projection ---------- */

/// Prefix for stock picks nested under their industry.
pub const NESTED_MARKER: &str = "└─";

pub fn industry_headers(include_links: bool) -> Vec<String> {
    let mut hdr: Vec<String> = Column::DISPLAY.iter().map(|c| s!(c.label())).collect();
    if include_links {
        hdr.push(s!("Link"));
    }
    hdr
}

/// One industry row as display strings, matching `industry_headers`.
pub fn industry_cells(row: &IndustryRow, resolver: &Resolver, include_links: bool) -> Vec<String> {
    let mut cells: Vec<String> = Column::DISPLAY
        .iter()
        .map(|c| c.cell(row, resolver))
        .collect();
    if include_links {
        cells.push(match &row.url {
            Some(u) => u.clone(),
            None => s!("-"),
        });
    }
    cells
}

pub fn recs_headers(include_links: bool) -> Vec<String> {
    let mut hdr = vec![
        s!("Group"),
        s!("Sub-group"),
        s!("Industry"),
        s!("Analysts"),
        s!("Thesis"),
    ];
    if include_links {
        hdr.push(s!("Link"));
    }
    hdr
}

/// Flatten aggregated recommendations for tabular output: each industry
/// row followed by its stock picks as nested rows. `ix` selects and
/// orders the industry rows (see `view::visible_recs`).
pub fn recs_rows(rows: &[AggregatedRow], ix: &[usize], include_links: bool) -> Vec<Vec<String>> {
    let mut out = Vec::new();

    for &i in ix {
        let Some(row) = rows.get(i) else { continue };

        let mut cells = vec![
            s!(row.group.unwrap_or("-")),
            s!(row.sub_group.unwrap_or("-")),
            s!(row.target),
            row.contributors.join(", "),
            join_notes(row.contributors.iter().map(|c| (*c, row.note_of(c)))),
        ];
        if include_links {
            cells.push(s!("-"));
        }
        out.push(cells);

        for stock in &row.stocks {
            let mut cells = vec![
                s!(),
                s!(),
                join!(NESTED_MARKER, " ", stock.name),
                stock.contributors.join(", "),
                join_notes(stock.contributors.iter().map(|c| (*c, stock.note_of(c)))),
            ];
            if include_links {
                cells.push(match stock.screener_url {
                    Some(u) => s!(u),
                    None => s!("-"),
                });
            }
            out.push(cells);
        }
    }

    out
}

/// "Who: note; Who: note", skipping contributors without one.
fn join_notes<'a>(pairs: impl Iterator<Item = (&'a str, Option<&'a str>)>) -> String {
    let mut out = s!();
    for (who, note) in pairs {
        let Some(note) = note else { continue };
        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(who);
        out.push_str(": ");
        out.push_str(note);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recs::{self, RecEntry, StockPick};

    fn sample_row() -> IndustryRow {
        IndustryRow {
            name: s!("Coal"),
            url: Some(s!("https://www.screener.in/i/coal/")),
            companies: 7,
            market_cap: s!("3,08,481"),
            median_cap: s!("120"),
            pe: s!("9.1"),
            sales_growth: s!("-2.0%"),
            opm: s!("31%"),
            roce: s!("18%"),
            return_1y: s!("12%"),
        }
    }

    #[test]
    fn replace_is_the_only_way_in() {
        let mut data = MarketData::default();
        assert!(data.is_empty());
        data.replace(vec![sample_row()]);
        assert_eq!(data.len(), 1);
        assert_eq!(data.rows()[0].name, "Coal");
    }

    #[test]
    fn table_view_borrows_rows_through_the_projection() {
        let data = MarketData::new(vec![sample_row()]);
        let view = TableView::build(&data, &ViewState::default(), Resolver::shared());
        assert_eq!(view.len(), 1);
        assert_eq!(view.row(0).map(|r| r.companies), Some(7));
        assert!(view.row(5).is_none());
        assert_eq!(view.iter().count(), 1);
    }

    #[test]
    fn industry_cells_match_headers_and_resolve_the_group() {
        let row = sample_row();
        let r = Resolver::shared();

        let hdr = industry_headers(false);
        let cells = industry_cells(&row, r, false);
        assert_eq!(hdr.len(), cells.len());
        assert_eq!(hdr[0], "Group");
        assert_eq!(cells[0], "ENERGY");
        assert_eq!(hdr[1], "Industry");
        assert_eq!(cells[1], "Coal");
        assert_eq!(cells[4], "7", "company count renders as a number");

        let with_links = industry_cells(&row, r, true);
        assert_eq!(with_links.len(), hdr.len() + 1);
        assert_eq!(with_links.last().map(String::as_str), Some("https://www.screener.in/i/coal/"));
    }

    #[test]
    fn unmapped_industry_shows_dash_for_group() {
        let mut row = sample_row();
        row.name = s!("Mystery Industry");
        row.url = None;
        let cells = industry_cells(&row, Resolver::shared(), true);
        assert_eq!(cells[0], "-");
        assert_eq!(cells.last().map(String::as_str), Some("-"));
    }

    static RECS: &[(&str, &[RecEntry])] = &[
        ("A", &[
            RecEntry { target: "Coal", note: "cheap on cash flows", stocks: &[
                StockPick { name: "MTAR Technologies", note: "pick note" },
            ]},
        ]),
        ("B", &[
            RecEntry { target: "Coal", note: "dividend support", stocks: &[] },
        ]),
    ];

    #[test]
    fn recs_flatten_nests_stocks_under_their_industry() {
        let rows = recs::aggregate(RECS, Resolver::shared());
        let ix: Vec<usize> = (0..rows.len()).collect();

        let flat = recs_rows(&rows, &ix, true);
        assert_eq!(flat.len(), 2);

        let industry = &flat[0];
        assert_eq!(industry[0], "ENERGY");
        assert_eq!(industry[1], "Coal");
        assert_eq!(industry[2], "Coal");
        assert_eq!(industry[3], "A, B");
        assert_eq!(industry[4], "A: cheap on cash flows; B: dividend support");
        assert_eq!(industry[5], "-");

        let stock = &flat[1];
        assert_eq!(stock[0], "");
        assert_eq!(stock[2], "└─ MTAR Technologies");
        assert_eq!(stock[3], "A");
        assert_eq!(stock[4], "A: pick note");
        assert!(stock[5].starts_with("https://"), "registry link fills in");
    }
}
