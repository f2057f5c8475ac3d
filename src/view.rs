// src/view.rs
//! Filter and sort state for the data pages, and the pure projection
//! that derives visible row order from it.
//!
//! Purpose:
//! - `ViewState` holds the whole selection: group, sub-group within it,
//!   contributor, sort column and direction. Plain data, cheap to clone
//!   and compare, with nothing widget-shaped inside.
//! - `visible_rows` / `visible_recs` are pure: the same rows and the same
//!   state always give the same index order. Filtering first, then one
//!   stable sort; ties keep source order.
//! - Missing numbers ("-", blank, bare "%") sort below every real value,
//!   they are never treated as zero.
//!
//! Non-Responsibilities:
//! - No painting and no fetching. The GUI decides when to re-derive.

use std::cmp::Ordering;

use crate::core::num::parse_num;
use crate::recs::AggregatedRow;
use crate::scrape::IndustryRow;
use crate::taxonomy::Resolver;

/// Sortable industry table columns. S.No is render-only and not listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Category,
    Name,
    Pe,
    Return1y,
    Companies,
    MarketCap,
    MedianCap,
    SalesGrowth,
    Opm,
    Roce,
}

impl Column {
    /// Table display order.
    pub const DISPLAY: [Column; 10] = [
        Column::Category,
        Column::Name,
        Column::Pe,
        Column::Return1y,
        Column::Companies,
        Column::MarketCap,
        Column::MedianCap,
        Column::SalesGrowth,
        Column::Opm,
        Column::Roce,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Category => "Group",
            Column::Name => "Industry",
            Column::Pe => "P/E",
            Column::Return1y => "1Y Return",
            Column::Companies => "Companies",
            Column::MarketCap => "Market Cap",
            Column::MedianCap => "Median Cap",
            Column::SalesGrowth => "Sales Growth",
            Column::Opm => "OPM",
            Column::Roce => "ROCE",
        }
    }

    /// Stable identifier, used by CLI flags.
    pub fn key(self) -> &'static str {
        match self {
            Column::Category => "category",
            Column::Name => "industry",
            Column::Pe => "pe",
            Column::Return1y => "return_1y",
            Column::Companies => "companies",
            Column::MarketCap => "market_cap",
            Column::MedianCap => "median_cap",
            Column::SalesGrowth => "sales_growth",
            Column::Opm => "opm",
            Column::Roce => "roce",
        }
    }

    pub fn from_key(key: &str) -> Option<Column> {
        Column::DISPLAY.into_iter().find(|c| c.key() == key)
    }

    /// Percentage columns whose cells color by sign.
    pub fn signed(self) -> bool {
        matches!(
            self,
            Column::Return1y | Column::SalesGrowth | Column::Opm | Column::Roce
        )
    }

    /// Display string for one cell.
    pub fn cell(self, row: &IndustryRow, resolver: &Resolver) -> String {
        match self {
            Column::Category => match resolver.resolve(&row.name) {
                Some((g, _)) => s!(g),
                None => s!("-"),
            },
            Column::Name => row.name.clone(),
            Column::Companies => row.companies.to_string(),
            _ => s!(self.raw(row)),
        }
    }

    /// The stored display string behind a numeric column.
    fn raw(self, row: &IndustryRow) -> &str {
        match self {
            Column::Pe => &row.pe,
            Column::Return1y => &row.return_1y,
            Column::MarketCap => &row.market_cap,
            Column::MedianCap => &row.median_cap,
            Column::SalesGrowth => &row.sales_growth,
            Column::Opm => &row.opm,
            Column::Roce => &row.roce,
            // Category, Name and Companies never reach here.
            _ => "",
        }
    }

    fn cmp_rows(self, a: &IndustryRow, b: &IndustryRow, resolver: &Resolver) -> Ordering {
        match self {
            Column::Category => {
                category_rank(resolver, &a.name).cmp(&category_rank(resolver, &b.name))
            }
            Column::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Column::Companies => a.companies.cmp(&b.companies),
            _ => cmp_opt_num(parse_num(self.raw(a)), parse_num(self.raw(b))),
        }
    }
}

/// (group rank, sub rank); unmapped industries rank after everything.
fn category_rank(resolver: &Resolver, industry: &str) -> (usize, usize) {
    match resolver.resolve(industry) {
        Some((g, sub)) => (
            resolver.group_rank(Some(g)),
            resolver.sub_rank(Some(g), Some(sub)),
        ),
        None => (usize::MAX, usize::MAX),
    }
}

/// Missing values compare below every number.
fn cmp_opt_num(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

/// The whole filter/sort selection for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Selected group; all groups when unset.
    pub group: Option<String>,
    /// Selected sub-group. Never set without a group.
    pub sub_group: Option<String>,
    /// Contributor filter, used by the recommendations page.
    pub contributor: Option<String>,
    pub sort: Option<SortSpec>,
}

impl ViewState {
    /// Picking a group always drops the sub-group selection, even when
    /// the group is re-picked.
    pub fn select_group(&mut self, group: Option<&str>) {
        self.group = group.map(|g| s!(g));
        self.sub_group = None;
    }

    /// Ignored while no group is selected.
    pub fn select_sub_group(&mut self, sub: Option<&str>) {
        if self.group.is_some() {
            self.sub_group = sub.map(|s| s!(s));
        }
    }

    pub fn select_contributor(&mut self, who: Option<&str>) {
        self.contributor = who.map(|w| s!(w));
    }

    /// Header click cycle: fresh column sorts ascending, a second click
    /// flips it, a third drops the sort.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(SortSpec { column: c, direction: SortDirection::Ascending }) if c == column => {
                Some(SortSpec { column, direction: SortDirection::Descending })
            }
            Some(SortSpec { column: c, direction: SortDirection::Descending }) if c == column => {
                None
            }
            _ => Some(SortSpec { column, direction: SortDirection::Ascending }),
        };
    }

    pub fn clear_filters(&mut self) {
        self.group = None;
        self.sub_group = None;
        self.contributor = None;
    }

    pub fn has_filters(&self) -> bool {
        self.group.is_some() || self.sub_group.is_some() || self.contributor.is_some()
    }
}

/// Visible row order for the industry table: filter, then stable sort.
pub fn visible_rows(rows: &[IndustryRow], state: &ViewState, resolver: &Resolver) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..rows.len())
        .filter(|&i| row_passes(&rows[i], state, resolver))
        .collect();

    if let Some(spec) = state.sort {
        ix.sort_by(|&a, &b| {
            let ord = spec.column.cmp_rows(&rows[a], &rows[b], resolver);
            match spec.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    ix
}

fn row_passes(row: &IndustryRow, state: &ViewState, resolver: &Resolver) -> bool {
    let Some(group) = state.group.as_deref() else {
        return true;
    };
    // A group filter excludes industries the taxonomy does not place.
    match resolver.resolve(&row.name) {
        Some((g, sub)) => {
            g == group && state.sub_group.as_deref().is_none_or(|want| sub == want)
        }
        None => false,
    }
}

/// Visible rows for the aggregated recommendations table. Rows arrive
/// already ordered by category, so this only filters.
pub fn visible_recs(rows: &[AggregatedRow], state: &ViewState) -> Vec<usize> {
    (0..rows.len())
        .filter(|&i| rec_passes(&rows[i], state))
        .collect()
}

fn rec_passes(row: &AggregatedRow, state: &ViewState) -> bool {
    if let Some(g) = state.group.as_deref() {
        if row.group != Some(g) {
            return false;
        }
    }
    if let Some(sub) = state.sub_group.as_deref() {
        if row.sub_group != Some(sub) {
            return false;
        }
    }
    if let Some(who) = state.contributor.as_deref() {
        if !row.contributors.iter().any(|c| *c == who) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recs::{self, RecEntry};

    fn row(name: &str, pe: &str) -> IndustryRow {
        IndustryRow {
            name: s!(name),
            url: None,
            companies: 0,
            market_cap: s!("-"),
            median_cap: s!("-"),
            pe: s!(pe),
            sales_growth: s!("-"),
            opm: s!("-"),
            roce: s!("-"),
            return_1y: s!("-"),
        }
    }

    #[test]
    fn selecting_a_group_resets_the_sub_group() {
        let mut st = ViewState::default();
        st.select_group(Some("ENERGY"));
        st.select_sub_group(Some("Power"));
        assert_eq!(st.sub_group.as_deref(), Some("Power"));

        st.select_group(Some("ENERGY"));
        assert_eq!(st.sub_group, None, "re-picking the group still resets");

        st.select_sub_group(Some("Coal"));
        st.select_group(None);
        assert_eq!(st.group, None);
        assert_eq!(st.sub_group, None);
    }

    #[test]
    fn sub_group_needs_a_group_first() {
        let mut st = ViewState::default();
        st.select_sub_group(Some("Power"));
        assert_eq!(st.sub_group, None);
    }

    #[test]
    fn toggle_sort_cycles_through_three_states() {
        let mut st = ViewState::default();
        st.toggle_sort(Column::Pe);
        assert_eq!(
            st.sort,
            Some(SortSpec { column: Column::Pe, direction: SortDirection::Ascending })
        );
        st.toggle_sort(Column::Pe);
        assert_eq!(
            st.sort,
            Some(SortSpec { column: Column::Pe, direction: SortDirection::Descending })
        );
        st.toggle_sort(Column::Pe);
        assert_eq!(st.sort, None);

        // Switching columns starts a fresh ascending sort.
        st.toggle_sort(Column::Pe);
        st.toggle_sort(Column::Name);
        assert_eq!(
            st.sort,
            Some(SortSpec { column: Column::Name, direction: SortDirection::Ascending })
        );
    }

    #[test]
    fn group_filter_keeps_members_and_drops_unmapped() {
        let rows = vec![
            row("Coal", "5"),
            row("Power Generation", "10"),
            row("Tea & Coffee", "30"),
            row("Mystery Industry", "1"),
        ];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 1, 2, 3]);

        st.select_group(Some("ENERGY"));
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 1]);

        st.select_sub_group(Some("Power"));
        assert_eq!(visible_rows(&rows, &st, r), vec![1]);

        st.select_group(Some("F&B"));
        assert_eq!(visible_rows(&rows, &st, r), vec![2]);
    }

    #[test]
    fn missing_numbers_sort_below_every_value() {
        let rows = vec![row("A", "10"), row("B", "-"), row("C", "2.5"), row("D", "")];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Pe);
        assert_eq!(visible_rows(&rows, &st, r), vec![1, 3, 2, 0]);

        st.toggle_sort(Column::Pe);
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 2, 1, 3]);
    }

    #[test]
    fn sorts_are_stable_on_ties() {
        let rows = vec![row("B", "7"), row("A", "7"), row("C", "7")];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Pe);
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 1, 2]);
        st.toggle_sort(Column::Pe);
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 1, 2]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let rows = vec![row("banana", "1"), row("Apple", "1"), row("cherry", "1")];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Name);
        assert_eq!(visible_rows(&rows, &st, r), vec![1, 0, 2]);
    }

    #[test]
    fn category_sort_follows_taxonomy_order_with_unmapped_last() {
        let rows = vec![
            row("Aerospace & Defense", "1"), // DEFENSE, last group
            row("Mystery Industry", "1"),    // unmapped
            row("Life Insurance", "1"),      // INSURANCE, early group
            row("Coal", "1"),                // ENERGY, Coal sub
            row("Power Generation", "1"),    // ENERGY, Power sub
        ];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Category);
        assert_eq!(visible_rows(&rows, &st, r), vec![2, 4, 3, 0, 1]);
    }

    #[test]
    fn category_sort_keeps_input_order_within_equal_keys() {
        // Two ENERGY/Power rows and two unmapped rows, each pair listed in
        // an order a tie-break on name would reverse.
        let rows = vec![
            row("Power Trading", "1"),
            row("Zed Industry", "1"),
            row("Power Generation", "1"),
            row("Aardvark Industry", "1"),
        ];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Category);
        assert_eq!(visible_rows(&rows, &st, r), vec![0, 2, 1, 3]);
    }

    #[test]
    fn companies_sorts_numerically() {
        let mut a = row("A", "1");
        a.companies = 12;
        let mut b = row("B", "1");
        b.companies = 3;
        let mut c = row("C", "1");
        c.companies = 101;
        let rows = vec![a, b, c];
        let r = Resolver::shared();

        let mut st = ViewState::default();
        st.toggle_sort(Column::Companies);
        assert_eq!(visible_rows(&rows, &st, r), vec![1, 0, 2]);
    }

    #[test]
    fn column_keys_round_trip() {
        for col in Column::DISPLAY {
            assert_eq!(Column::from_key(col.key()), Some(col));
        }
        assert_eq!(Column::from_key("bogus"), None);
    }

    static RECS: &[(&str, &[RecEntry])] = &[
        ("A", &[
            RecEntry { target: "Coal", note: "x", stocks: &[] },
            RecEntry { target: "Tea & Coffee", note: "x", stocks: &[] },
        ]),
        ("B", &[
            RecEntry { target: "Coal", note: "y", stocks: &[] },
            RecEntry { target: "Unknown Industry", note: "y", stocks: &[] },
        ]),
    ];

    #[test]
    fn rec_filters_compose() {
        let rows = recs::aggregate(RECS, Resolver::shared());
        // Category order: ENERGY/Coal, F&B/Tea & Coffee, unmapped.
        assert_eq!(rows[0].target, "Coal");

        let mut st = ViewState::default();
        assert_eq!(visible_recs(&rows, &st).len(), 3);

        st.select_group(Some("ENERGY"));
        let ix = visible_recs(&rows, &st);
        assert_eq!(ix.len(), 1);
        assert_eq!(rows[ix[0]].target, "Coal");

        st.clear_filters();
        st.select_contributor(Some("B"));
        let ix = visible_recs(&rows, &st);
        assert_eq!(ix.len(), 2);
        assert!(ix.iter().all(|&i| rows[i].contributors.contains(&"B")));

        st.select_group(Some("F&B"));
        assert!(visible_recs(&rows, &st).is_empty(), "filters are AND-ed");
    }
}
