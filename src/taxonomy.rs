// src/taxonomy.rs
//! Static industry taxonomy and the category resolver built from it.
//!
//! Purpose:
//! - Bundle the two-level classification (group -> sub-group -> industries),
//!   the display order for groups, and the sidebar section layout.
//! - Provide `Resolver`: reverse lookups from an industry name to its
//!   (group, sub-group) plus display-order ranks, built once and shared.
//!
//! Non-Responsibilities:
//! - No fetching, no row storage, no UI state. Pure lookup tables.

use std::collections::HashMap;
use std::sync::OnceLock;

pub struct SubGroup {
    pub name: &'static str,
    pub industries: &'static [&'static str],
}

pub struct Group {
    pub name: &'static str,
    pub subs: &'static [SubGroup],
}

/// Display order for industry groups. Same set as `TAXONOMY`.
pub const GROUP_ORDER: [&str; 17] = [
    "FINANCIAL", "INSURANCE",
    "METALS", "ENERGY", "CHEMICALS",
    "INDUSTRIAL", "AUTO",
    "INFRASTRUCTURE", "CONSTRUCTION",
    "CONSUMER", "F&B", "TEXTILE", "CRAFT TYPE",
    "MEDIA",
    "HEALTHCARE",
    "TECH", "DEFENSE",
];

/// Sidebar layout: groups between dividers.
pub const SIDEBAR_SECTIONS: &[&[&str]] = &[
    &["FINANCIAL", "INSURANCE"],
    &["METALS", "ENERGY", "CHEMICALS"],
    &["INDUSTRIAL", "AUTO"],
    &["INFRASTRUCTURE", "CONSTRUCTION"],
    &["CONSUMER", "F&B", "TEXTILE", "CRAFT TYPE"],
    &["MEDIA"],
    &["HEALTHCARE"],
    &["TECH", "DEFENSE"],
];

/// The classification itself. Sub-group order matters: it is the
/// within-group display order used for category sorting.
pub static TAXONOMY: &[Group] = &[
    Group { name: "AUTO", subs: &[
        SubGroup { name: "OEM", industries: &[
            "Commercial Vehicles", "Tractors", "Passenger Cars & Utility Vehicles",
            "2/3 Wheelers", "Construction Vehicles",
        ]},
        SubGroup { name: "Ancillary", industries: &[
            "Tyres & Rubber Products", "Auto Components & Equipments",
            "Trading - Auto components",
        ]},
        SubGroup { name: "Dealer", industries: &[
            "Auto Dealer", "Dealers-Commercial Vehicles, Tractors, Construction Vehicles",
        ]},
    ]},
    Group { name: "CONSTRUCTION", subs: &[
        SubGroup { name: "Materials", industries: &[
            "Cement & Cement Products", "Paints", "Ceramics", "Cables - Electricals",
            "Sanitary Ware", "Plywood Boards/ Laminates", "Glass - Consumer",
            "Other Construction Materials",
        ]},
        SubGroup { name: "Real Estate", industries: &[
            "Residential, Commercial Projects", "Real Estate related services",
            "Real Estate Investment Trusts (REITs)",
        ]},
    ]},
    Group { name: "CHEMICALS", subs: &[
        SubGroup { name: "Specialty", industries: &[
            "Specialty Chemicals", "Dyes And Pigments", "Printing Inks", "Carbon Black",
        ]},
        SubGroup { name: "Agri", industries: &[
            "Pesticides & Agrochemicals", "Fertilizers",
        ]},
        SubGroup { name: "Commodity", industries: &[
            "Commodity Chemicals", "Petrochemicals", "Industrial Gases",
        ]},
        SubGroup { name: "Industrial", industries: &[
            "Industrial Minerals", "Electrodes & Refractories", "Lubricants",
        ]},
        SubGroup { name: "Trading", industries: &[
            "Trading - Chemicals",
        ]},
    ]},
    Group { name: "CONSUMER", subs: &[
        SubGroup { name: "Staples", industries: &[
            "Cigarettes & Tobacco Products", "Diversified FMCG", "Household Products",
            "Packaged Foods", "Personal Care",
        ]},
        SubGroup { name: "Retail", industries: &[
            "Diversified Retail", "E-Retail/ E-Commerce", "Footwear",
            "Garments & Apparels", "Internet & Catalogue Retail", "Pharmacy Retail",
            "Plastic Products - Consumer", "Speciality Retail",
        ]},
        SubGroup { name: "Durables", industries: &[
            "Consumer Electronics", "Household Appliances", "Houseware",
        ]},
        SubGroup { name: "Discretionary", industries: &[
            "Amusement Parks/ Other Recreation", "Gems, Jewellery And Watches",
            "Hotels & Resorts", "Leisure Products", "Restaurants",
            "Tour, Travel Related Services", "Wellness",
        ]},
    ]},
    Group { name: "CRAFT TYPE", subs: &[
        SubGroup { name: "Other", industries: &[
            "Forest Products", "Furniture, Home Furnishing", "Granites & Marbles",
            "Jute & Jute Products", "Leather And Leather Products",
            "Printing & Publication", "Stationary",
        ]},
    ]},
    Group { name: "DEFENSE", subs: &[
        SubGroup { name: "Other", industries: &[
            "Aerospace & Defense",
        ]},
    ]},
    Group { name: "ENERGY", subs: &[
        SubGroup { name: "Power", industries: &[
            "Power Generation", "Power Distribution", "Power - Transmission",
            "Power Trading", "Integrated Power Utilities", "Multi Utilities",
        ]},
        SubGroup { name: "Oil & Gas", industries: &[
            "Refineries & Marketing", "Oil Exploration & Production",
            "Oil Storage & Transportation", "Oil Equipment & Services",
            "Offshore Support Solution Drilling", "Gas Transmission/Marketing",
            "LPG/CNG/PNG/LNG Supplier", "Trading - Gas",
        ]},
        SubGroup { name: "Coal", industries: &[
            "Coal",
        ]},
    ]},
    Group { name: "FINANCIAL", subs: &[
        SubGroup { name: "Banks", industries: &[
            "Public Sector Bank", "Private Sector Bank", "Other Bank",
        ]},
        SubGroup { name: "NBFC", industries: &[
            "Non Banking Financial Company (NBFC)", "Microfinance Institutions",
            "Housing Finance Company",
        ]},
        SubGroup { name: "Asset Mgmt", industries: &[
            "Asset Management Company", "Investment Company",
        ]},
        SubGroup { name: "Services", industries: &[
            "Financial Institution", "Financial Products Distributor",
            "Other Financial Services",
        ]},
    ]},
    Group { name: "F&B", subs: &[
        SubGroup { name: "Beverages", industries: &[
            "Breweries & Distilleries", "Tea & Coffee", "Other Beverages",
        ]},
        SubGroup { name: "Staples", industries: &[
            "Sugar", "Edible Oil", "Dairy Products",
        ]},
        SubGroup { name: "Protein", industries: &[
            "Meat Products including Poultry", "Seafood",
        ]},
        SubGroup { name: "Other", industries: &[
            "Other Food Products", "Animal Feed",
        ]},
    ]},
    Group { name: "HEALTHCARE", subs: &[
        SubGroup { name: "Pharma", industries: &[
            "Pharmaceuticals",
        ]},
        SubGroup { name: "Services", industries: &[
            "Hospital", "Healthcare Service Provider",
        ]},
        SubGroup { name: "Equipment", industries: &[
            "Medical Equipment & Supplies",
            "Healthcare Research, Analytics & Technology",
        ]},
    ]},
    Group { name: "INDUSTRIAL", subs: &[
        SubGroup { name: "Electrical", industries: &[
            "Heavy Electrical Equipment", "Other Electrical Equipment",
        ]},
        SubGroup { name: "Machinery", industries: &[
            "Compressors, Pumps & Diesel Engines",
        ]},
        SubGroup { name: "Components", industries: &[
            "Abrasives & Bearings", "Castings & Forgings",
        ]},
        SubGroup { name: "Products", industries: &[
            "Industrial Products", "Other Industrial Products", "Glass - Industrial",
        ]},
    ]},
    Group { name: "INFRASTRUCTURE", subs: &[
        SubGroup { name: "Construction", industries: &[
            "Civil Construction",
        ]},
        SubGroup { name: "Road", industries: &[
            "Logistics Solution Provider", "Road Transport",
            "Transport Related Services", "Road AssetsToll, Annuity, Hybrid-Annuity",
        ]},
        SubGroup { name: "Rail", industries: &[
            "Railway Wagons",
        ]},
        SubGroup { name: "Sea", industries: &[
            "Port & Port services", "Ship Building & Allied Services", "Shipping",
            "Dredging",
        ]},
        SubGroup { name: "Air", industries: &[
            "Airline", "Airport & Airport services",
        ]},
    ]},
    Group { name: "INSURANCE", subs: &[
        SubGroup { name: "Insurance", industries: &[
            "Life Insurance", "General Insurance",
        ]},
        SubGroup { name: "Distributors", industries: &[
            "Insurance Distributors",
        ]},
    ]},
    Group { name: "MEDIA", subs: &[
        SubGroup { name: "Entertainment", industries: &[
            "Film Production, Distribution & Exhibition",
            "TV Broadcasting & Software Production", "Digital Entertainment",
            "Media & Entertainment",
        ]},
        SubGroup { name: "Advertising", industries: &[
            "Advertising & Media Agencies",
        ]},
        SubGroup { name: "Digital Media", industries: &[
            "Web based media and service", "Electronic Media",
        ]},
        SubGroup { name: "Print Media", industries: &[
            "Print Media",
        ]},
    ]},
    Group { name: "METALS", subs: &[
        SubGroup { name: "Iron", industries: &[
            "Iron & Steel", "Iron & Steel Products", "Pig Iron", "Sponge Iron",
        ]},
        SubGroup { name: "Aluminium", industries: &[
            "Aluminium", "Aluminium, Copper & Zinc Products",
        ]},
        SubGroup { name: "Copper", industries: &[
            "Copper",
        ]},
        SubGroup { name: "Zinc", industries: &[
            "Zinc",
        ]},
        SubGroup { name: "Precious", industries: &[
            "Precious Metals",
        ]},
        SubGroup { name: "Other", industries: &[
            "Diversified Metals", "Ferro & Silica Manganese", "Trading - Metals",
            "Trading - Minerals",
        ]},
    ]},
    Group { name: "TECH", subs: &[
        SubGroup { name: "IT Services", industries: &[
            "Computers - Software & Consulting", "IT Enabled Services",
            "Software Products", "E-Learning", "Financial Technology (Fintech)",
        ]},
        SubGroup { name: "Telecom", industries: &[
            "Telecom - Cellular & Fixed line services", "Other Telecom Services",
            "Telecom - Infrastructure", "Telecom - Equipment & Accessories",
        ]},
        SubGroup { name: "Hardware", industries: &[
            "Computers Hardware & Equipments",
        ]},
        SubGroup { name: "Biotech", industries: &[
            "Biotechnology",
        ]},
    ]},
    Group { name: "TEXTILE", subs: &[
        SubGroup { name: "All", industries: &[
            "Other Textile Products", "Trading - Textile Products",
        ]},
    ]},
];

/// Reverse indices over the static tables. Build once, share everywhere.
pub struct Resolver {
    leaf_to_path: HashMap<&'static str, (&'static str, &'static str)>,
    group_order: HashMap<&'static str, usize>,
    sub_order: HashMap<&'static str, HashMap<&'static str, usize>>,
}

impl Resolver {
    fn build() -> Self {
        let mut leaf_to_path = HashMap::new();
        let mut group_order = HashMap::new();
        let mut sub_order: HashMap<&'static str, HashMap<&'static str, usize>> =
            HashMap::new();

        for (i, g) in GROUP_ORDER.iter().enumerate() {
            group_order.insert(*g, i);
        }
        for group in TAXONOMY {
            let subs = sub_order.entry(group.name).or_default();
            for (si, sub) in group.subs.iter().enumerate() {
                subs.insert(sub.name, si);
                for leaf in sub.industries {
                    let prev = leaf_to_path.insert(*leaf, (group.name, sub.name));
                    // single-owner assumption; a duplicate means bad table data
                    debug_assert!(prev.is_none(), "industry listed twice: {leaf}");
                }
            }
        }
        Self { leaf_to_path, group_order, sub_order }
    }

    /// The process-wide instance.
    pub fn shared() -> &'static Resolver {
        static SHARED: OnceLock<Resolver> = OnceLock::new();
        SHARED.get_or_init(Resolver::build)
    }

    /// Industry name -> (group, sub-group). None when unmapped; unmapped
    /// rows stay visible, they just render uncategorized.
    pub fn resolve(&self, name: &str) -> Option<(&'static str, &'static str)> {
        self.leaf_to_path.get(name).copied()
    }

    /// Position of `group` in the display order. Unmapped sorts last.
    pub fn group_rank(&self, group: Option<&str>) -> usize {
        group
            .and_then(|g| self.group_order.get(g).copied())
            .unwrap_or(usize::MAX)
    }

    /// Position of `sub` within its group. Unmapped sorts last.
    pub fn sub_rank(&self, group: Option<&str>, sub: Option<&str>) -> usize {
        match (group, sub) {
            (Some(g), Some(s)) => self
                .sub_order
                .get(g)
                .and_then(|m| m.get(s))
                .copied()
                .unwrap_or(usize::MAX),
            _ => usize::MAX,
        }
    }

    /// Leaves under (group, sub), or the duplicate-free union across all of
    /// the group's sub-groups, in taxonomy order.
    pub fn industries_of(&self, group: &str, sub: Option<&str>) -> Vec<&'static str> {
        let Some(g) = TAXONOMY.iter().find(|g| g.name == group) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for sg in g.subs {
            if let Some(wanted) = sub {
                if sg.name != wanted { continue; }
            }
            for leaf in sg.industries {
                if !out.contains(leaf) {
                    out.push(*leaf);
                }
            }
        }
        out
    }

    /// How many of the given names fall under (group, sub).
    pub fn count_matching<'a, I>(&self, names: I, group: &str, sub: Option<&str>) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set = self.industries_of(group, sub);
        names
            .into_iter()
            .filter(|n| set.iter().any(|s| s == n))
            .count()
    }

    /// Sub-group names of a group, taxonomy order.
    pub fn subs_of(&self, group: &str) -> Vec<&'static str> {
        TAXONOMY
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.subs.iter().map(|s| s.name).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn group_order_matches_taxonomy_set() {
        for g in TAXONOMY {
            assert!(GROUP_ORDER.contains(&g.name), "not in display order: {}", g.name);
        }
        assert_eq!(GROUP_ORDER.len(), TAXONOMY.len());
    }

    #[test]
    fn sidebar_sections_cover_every_group_once() {
        let flat: Vec<&str> = SIDEBAR_SECTIONS
            .iter()
            .flat_map(|s| s.iter().copied())
            .collect();
        assert_eq!(flat.len(), GROUP_ORDER.len());
        for g in GROUP_ORDER {
            assert!(flat.contains(&g), "not in sidebar: {g}");
        }
    }

    #[test]
    fn every_leaf_has_a_single_owner() {
        let mut seen: HashMap<&str, (&str, &str)> = HashMap::new();
        for group in TAXONOMY {
            for sub in group.subs {
                for leaf in sub.industries {
                    let prev = seen.insert(leaf, (group.name, sub.name));
                    assert!(
                        prev.is_none(),
                        "{leaf} owned by both {:?} and ({}, {})",
                        prev, group.name, sub.name
                    );
                }
            }
        }
    }

    #[test]
    fn resolve_is_pure() {
        let r = Resolver::shared();
        assert_eq!(r.resolve("Power Generation"), Some(("ENERGY", "Power")));
        assert_eq!(r.resolve("Coal"), Some(("ENERGY", "Coal")));
        assert_eq!(r.resolve("Tea & Coffee"), Some(("F&B", "Beverages")));
        assert_eq!(r.resolve("Aerospace & Defense"), Some(("DEFENSE", "Other")));
        assert_eq!(r.resolve("Unknown Industry"), None);
    }

    #[test]
    fn union_equals_subgroup_lists_without_duplicates() {
        let r = Resolver::shared();
        for g in TAXONOMY {
            let union = r.industries_of(g.name, None);
            let mut concat: Vec<&str> = Vec::new();
            for sub in g.subs {
                for leaf in r.industries_of(g.name, Some(sub.name)) {
                    if !concat.contains(&leaf) {
                        concat.push(leaf);
                    }
                }
            }
            assert_eq!(union, concat, "group {}", g.name);

            let unique: HashSet<&str> = union.iter().copied().collect();
            assert_eq!(unique.len(), union.len(), "duplicates under {}", g.name);
        }
    }

    #[test]
    fn unknown_group_yields_empty() {
        let r = Resolver::shared();
        assert!(r.industries_of("NOPE", None).is_empty());
        assert!(r.subs_of("NOPE").is_empty());
    }

    #[test]
    fn ranks_put_unmapped_last() {
        let r = Resolver::shared();
        assert_eq!(r.group_rank(Some("FINANCIAL")), 0);
        assert_eq!(r.group_rank(Some("DEFENSE")), 16);
        assert_eq!(r.group_rank(Some("NOPE")), usize::MAX);
        assert_eq!(r.group_rank(None), usize::MAX);
        assert_eq!(r.sub_rank(Some("ENERGY"), Some("Power")), 0);
        assert_eq!(r.sub_rank(Some("ENERGY"), Some("Coal")), 2);
        assert_eq!(r.sub_rank(Some("ENERGY"), None), usize::MAX);
    }

    #[test]
    fn count_matching_counts_member_names_only() {
        let r = Resolver::shared();
        let names = ["Coal", "Power Generation", "Unknown Industry"];
        assert_eq!(r.count_matching(names.iter().copied(), "ENERGY", None), 2);
        assert_eq!(r.count_matching(names.iter().copied(), "ENERGY", Some("Coal")), 1);
        assert_eq!(r.count_matching(names.iter().copied(), "F&B", None), 0);
    }
}
