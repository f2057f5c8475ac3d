// tests/selection_view.rs
//
// TableView derivation over a realistic multi-group dataset, without UI.
//
use screener_dash::data::{MarketData, TableView};
use screener_dash::scrape::IndustryRow;
use screener_dash::taxonomy::Resolver;
use screener_dash::view::{Column, ViewState};

fn row(name: &str, companies: u32, pe: &str, ret: &str) -> IndustryRow {
    IndustryRow {
        name: name.to_string(),
        url: Some(format!("https://www.screener.in/market/industry/{}/", companies)),
        companies,
        market_cap: "1,000".to_string(),
        median_cap: "50".to_string(),
        pe: pe.to_string(),
        sales_growth: "5%".to_string(),
        opm: "12%".to_string(),
        roce: "15%".to_string(),
        return_1y: ret.to_string(),
    }
}

fn dataset() -> MarketData {
    MarketData::new(vec![
        row("Coal", 7, "9.1", "12%"),            // ENERGY / Coal
        row("Power Generation", 22, "18.4", "-3%"), // ENERGY / Power
        row("Refineries & Marketing", 11, "12.0", "41%"), // ENERGY / Oil & Gas
        row("Tea & Coffee", 14, "30.2", "8%"),   // F&B
        row("Aerospace & Defense", 9, "55.0", "98%"), // DEFENSE
        row("Mystery Industry", 3, "-", "-"),    // not in the taxonomy
    ])
}

#[test]
fn view_none_group_sub() {
    let data = dataset();
    let r = Resolver::shared();

    // No filter: document order, unmapped row included.
    let st = ViewState::default();
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix, vec![0, 1, 2, 3, 4, 5]);

    // Group filter drops everything outside ENERGY, unmapped included.
    let mut st = ViewState::default();
    st.select_group(Some("ENERGY"));
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix, vec![0, 1, 2]);

    // Sub-group narrows further.
    st.select_sub_group(Some("Oil & Gas"));
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix, vec![2]);
    assert_eq!(view.row(0).map(|r| r.name.as_str()), Some("Refineries & Marketing"));
}

#[test]
fn group_switch_drops_stale_sub_group() {
    let data = dataset();
    let r = Resolver::shared();

    let mut st = ViewState::default();
    st.select_group(Some("ENERGY"));
    st.select_sub_group(Some("Power"));
    assert_eq!(TableView::build(&data, &st, r).row_ix, vec![1]);

    // "Power" is meaningless under F&B; the switch must clear it, not
    // produce an empty view.
    st.select_group(Some("F&B"));
    assert_eq!(st.sub_group, None);
    assert_eq!(TableView::build(&data, &st, r).row_ix, vec![3]);
}

#[test]
fn sort_composes_with_filter() {
    let data = dataset();
    let r = Resolver::shared();

    let mut st = ViewState::default();
    st.select_group(Some("ENERGY"));
    st.toggle_sort(Column::Companies);
    let view = TableView::build(&data, &st, r);
    // 7, 11, 22
    assert_eq!(view.row_ix, vec![0, 2, 1]);

    st.toggle_sort(Column::Companies); // descending
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix, vec![1, 2, 0]);

    st.toggle_sort(Column::Companies); // sort cleared, back to document order
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix, vec![0, 1, 2]);
}

#[test]
fn missing_numbers_lose_both_directions() {
    let data = dataset();
    let r = Resolver::shared();

    // Ascending: the dash P/E row comes first (it is smaller than any value).
    let mut st = ViewState::default();
    st.toggle_sort(Column::Pe);
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix.first(), Some(&5));

    // Descending: it goes last, never beating a real number.
    st.toggle_sort(Column::Pe);
    let view = TableView::build(&data, &st, r);
    assert_eq!(view.row_ix.last(), Some(&5));
    assert_eq!(view.row_ix.first(), Some(&4), "55.0 is the largest P/E");
}

#[test]
fn signed_returns_sort_by_value_not_text() {
    let data = dataset();
    let r = Resolver::shared();

    let mut st = ViewState::default();
    st.toggle_sort(Column::Return1y);
    let ordered: Vec<&str> = TableView::build(&data, &st, r)
        .iter()
        .map(|row| row.return_1y.as_str())
        .collect();
    assert_eq!(ordered, vec!["-", "-3%", "8%", "12%", "41%", "98%"]);
}

#[test]
fn category_sort_groups_rows_and_parks_unmapped_last() {
    let data = dataset();
    let r = Resolver::shared();

    let mut st = ViewState::default();
    st.toggle_sort(Column::Category);
    let view = TableView::build(&data, &st, r);

    let names: Vec<&str> = view.iter().map(|row| row.name.as_str()).collect();
    // ENERGY (Power, Oil & Gas, Coal in sub order), then F&B, then DEFENSE,
    // then the unmapped row.
    assert_eq!(
        names,
        vec![
            "Power Generation",
            "Refineries & Marketing",
            "Coal",
            "Tea & Coffee",
            "Aerospace & Defense",
            "Mystery Industry",
        ]
    );
}

#[test]
fn empty_dataset_yields_an_empty_view() {
    let data = MarketData::default();
    let mut st = ViewState::default();
    st.select_group(Some("ENERGY"));
    st.toggle_sort(Column::Pe);
    let view = TableView::build(&data, &st, Resolver::shared());
    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert!(view.row(0).is_none());
}
