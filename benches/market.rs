// benches/market.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use screener_dash::scrape;
use screener_dash::taxonomy::Resolver;
use screener_dash::view::{visible_rows, Column, ViewState};

/// A market page with `n` industry rows, shaped like the served document:
/// header row, anchored data rows, a trailing anchor-free summary row.
fn synth_doc(n: usize) -> String {
    let mut doc = String::with_capacity(n * 320);
    doc.push_str(
        "<html><body><table>\
         <tr><th>S.No</th><th>Industry</th><th>Cos.</th><th>Mar Cap</th>\
         <th>Median Cap</th><th>P/E</th><th>Sales Gr</th><th>OPM</th>\
         <th>ROCE</th><th>1Yr</th></tr>",
    );
    for i in 0..n {
        doc.push_str(&format!(
            "<tr><td>{i}</td>\
             <td><a href=\"/market/industry/{i}/\">Industry {i} &amp; Co</a></td>\
             <td>{}</td><td>{},431</td><td>1,2{}</td><td>{}.4</td>\
             <td>{}%</td><td>-{}.0%</td><td>18.{}%</td><td>{}%</td></tr>",
            3 + i % 40,
            10 + i % 90,
            i % 10,
            5 + i % 60,
            i % 25,
            i % 9,
            i % 10,
            i % 30,
        ));
    }
    doc.push_str(
        "<tr><td></td><td>Total</td><td>0</td><td>0</td><td>0</td>\
         <td>0</td><td>0</td><td>0</td><td>0</td><td>0</td></tr>",
    );
    doc.push_str("</table></body></html>");
    doc
}

fn bench_parse(c: &mut Criterion) {
    // A real page carries ~150 industries; the large case guards against
    // quadratic behavior in the block scanner.
    let page = synth_doc(150);
    let large = synth_doc(1000);

    c.bench_function("parse_doc_150", |b| {
        b.iter(|| {
            let rows = scrape::parse_doc(black_box(&page));
            black_box(rows.len())
        })
    });

    c.bench_function("parse_doc_1000", |b| {
        b.iter(|| {
            let rows = scrape::parse_doc(black_box(&large));
            black_box(rows.len())
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let rows = scrape::parse_doc(&synth_doc(1000));
    let resolver = Resolver::shared();

    let mut sorted = ViewState::default();
    sorted.toggle_sort(Column::Pe);

    let mut filtered = ViewState::default();
    filtered.select_group(Some("ENERGY"));

    c.bench_function("visible_rows_sorted_1000", |b| {
        b.iter(|| {
            let ix = visible_rows(black_box(&rows), black_box(&sorted), resolver);
            black_box(ix.len())
        })
    });

    c.bench_function("visible_rows_filtered_1000", |b| {
        b.iter(|| {
            let ix = visible_rows(black_box(&rows), black_box(&filtered), resolver);
            black_box(ix.len())
        })
    });
}

criterion_group!(benches, bench_parse, bench_view);
criterion_main!(benches);
