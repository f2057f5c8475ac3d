// src/recs.rs
//! Analyst recommendations: the bundled dataset and the aggregation that
//! turns it into one row per target industry.
//!
//! Purpose:
//! - Hold the canonical dataset: contributor -> ordered entries of
//!   { target industry, note, stock picks }.
//! - Aggregate entries across contributors: one `AggregatedRow` per target,
//!   contributor lists in first-seen order without duplicates, one note per
//!   contributor (a repeated target keeps the later note), and the same
//!   rules one level down for stock picks.
//! - Order rows by group display order, then sub-group order within the
//!   group. Unmapped targets go last. The sort is stable.
//!
//! Non-Responsibilities:
//! - No fetching. The dataset ships with the binary and the registry join
//!   (`stocks::by_name`) supplies stock links.

use std::collections::HashMap;

use crate::stocks;
use crate::taxonomy::Resolver;

pub struct StockPick {
    pub name: &'static str,
    pub note: &'static str,
}

pub struct RecEntry {
    /// Target industry name; usually a taxonomy leaf, but never required
    /// to be one.
    pub target: &'static str,
    pub note: &'static str,
    pub stocks: &'static [StockPick],
}

/// The bundled dataset, contributor order as shipped.
pub static RECOMMENDATIONS: &[(&str, &[RecEntry])] = &[
    ("Priya", &[
        RecEntry {
            target: "Aerospace & Defense",
            note: "Defense capex cycle is early; order books run to FY28 and \
                   indigenisation quotas keep rising.",
            stocks: &[
                StockPick {
                    name: "MTAR Technologies",
                    note: "Clean-energy and defense mix, high-precision moat.",
                },
                StockPick {
                    name: "Azad Engineering",
                    note: "Airfoil supplier to all four big turbine makers.",
                },
            ],
        },
        RecEntry {
            target: "Tea & Coffee",
            note: "Instant coffee realisations holding while green coffee \
                   costs fall.",
            stocks: &[
                StockPick {
                    name: "CCL Products",
                    note: "Volume-led B2B grower adding branded retail.",
                },
            ],
        },
    ]),
    ("Vikram", &[
        RecEntry {
            target: "Refineries & Marketing",
            note: "GRMs normalised but retail fuel margins are at decade \
                   highs.",
            stocks: &[
                StockPick {
                    name: "Reliance Industries",
                    note: "Refining cash cow funds retail and telecom."
                },
            ],
        },
        RecEntry {
            target: "Aerospace & Defense",
            note: "Export clearances accelerating; private players finally \
                   winning platform work.",
            stocks: &[
                StockPick {
                    name: "MTAR Technologies",
                    note: "Execution risk overdone after one weak quarter.",
                },
            ],
        },
        RecEntry {
            target: "Specialty Chemicals",
            note: "China destocking is done; spreads bottomed last quarter.",
            stocks: &[],
        },
    ]),
    ("Rahul", &[
        RecEntry {
            target: "Auto Components & Equipments",
            note: "EV content per vehicle keeps compounding for differential \
                   gear makers.",
            stocks: &[
                StockPick {
                    name: "Sona BLW",
                    note: "EV revenue share past a third and climbing.",
                },
            ],
        },
        RecEntry {
            target: "Refineries & Marketing",
            note: "Petchem integration undervalued at current crack spreads.",
            stocks: &[
                StockPick {
                    name: "Reliance Industries",
                    note: "New energy optionality priced at zero.",
                },
            ],
        },
        RecEntry {
            target: "Semiconductors",
            note: "Fab incentives will seed a local supplier base; watch the \
                   ancillary listings.",
            stocks: &[],
        },
    ]),
];

/// One aggregated target with its contributors and nested stock rows.
pub struct AggregatedRow {
    pub target: &'static str,
    pub group: Option<&'static str>,
    pub sub_group: Option<&'static str>,
    /// First-seen order, no duplicates.
    pub contributors: Vec<&'static str>,
    notes: HashMap<&'static str, &'static str>,
    pub stocks: Vec<StockRow>,
}

pub struct StockRow {
    pub name: &'static str,
    pub screener_url: Option<&'static str>,
    pub contributors: Vec<&'static str>,
    notes: HashMap<&'static str, &'static str>,
}

impl AggregatedRow {
    pub fn note_of(&self, contributor: &str) -> Option<&'static str> {
        self.notes.get(contributor).copied()
    }
}

impl StockRow {
    pub fn note_of(&self, contributor: &str) -> Option<&'static str> {
        self.notes.get(contributor).copied()
    }
}

/// Contributor names in dataset order.
pub fn contributors(dataset: &[(&'static str, &'static [RecEntry])]) -> Vec<&'static str> {
    dataset.iter().map(|(c, _)| *c).collect()
}

/// Build the aggregated table. Contributors are walked in dataset order,
/// entries in listed order; a contributor listing the same target twice
/// keeps the later note (not defended against, just defined).
pub fn aggregate(
    dataset: &[(&'static str, &'static [RecEntry])],
    resolver: &Resolver,
) -> Vec<AggregatedRow> {
    let mut rows: Vec<AggregatedRow> = Vec::new();

    for &(contributor, entries) in dataset {
        for entry in entries {
            let ix = match rows.iter().position(|r| r.target == entry.target) {
                Some(i) => i,
                None => {
                    let path = resolver.resolve(entry.target);
                    rows.push(AggregatedRow {
                        target: entry.target,
                        group: path.map(|(g, _)| g),
                        sub_group: path.map(|(_, s)| s),
                        contributors: Vec::new(),
                        notes: HashMap::new(),
                        stocks: Vec::new(),
                    });
                    rows.len() - 1
                }
            };
            let row = &mut rows[ix];
            if !row.contributors.contains(&contributor) {
                row.contributors.push(contributor);
            }
            row.notes.insert(contributor, entry.note);

            for pick in entry.stocks {
                let six = match row.stocks.iter().position(|s| s.name == pick.name) {
                    Some(i) => i,
                    None => {
                        row.stocks.push(StockRow {
                            name: pick.name,
                            screener_url: stocks::by_name(pick.name)
                                .and_then(|info| info.screener_url),
                            contributors: Vec::new(),
                            notes: HashMap::new(),
                        });
                        row.stocks.len() - 1
                    }
                };
                let srow = &mut row.stocks[six];
                if !srow.contributors.contains(&contributor) {
                    srow.contributors.push(contributor);
                }
                srow.notes.insert(contributor, pick.note);
            }
        }
    }

    // Stable: equal (group, sub) keep first-seen order.
    rows.sort_by_key(|r| (resolver.group_rank(r.group), resolver.sub_rank(r.group, r.sub_group)));
    rows
}

/// (industry count, stock count) per mapped group; used for filter badges.
pub fn group_counts(rows: &[AggregatedRow]) -> HashMap<&'static str, (usize, usize)> {
    let mut counts: HashMap<&'static str, (usize, usize)> = HashMap::new();
    for row in rows {
        if let Some(g) = row.group {
            let c = counts.entry(g).or_default();
            c.0 += 1;
            c.1 += row.stocks.len();
        }
    }
    counts
}

pub fn total_stocks(rows: &[AggregatedRow]) -> usize {
    rows.iter().map(|r| r.stocks.len()).sum()
}
