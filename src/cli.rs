// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::options::{ExportFormat, ExportOptions, ExportType, PageKind};
use crate::data::{industry_cells, industry_headers, recs_headers, recs_rows};
use crate::progress::ConsoleProgress;
use crate::taxonomy::{GROUP_ORDER, Resolver, TAXONOMY};
use crate::view::{self, Column, SortDirection, SortSpec, ViewState};
use crate::{csv, file, recs, scrape};

/// One parsed invocation.
struct CliRun {
    page: PageKind,
    view: ViewState,
    export: ExportOptions,
    /// --out/--per-group given; otherwise the table prints to stdout.
    to_file: bool,
    list_groups: bool,
}

impl CliRun {
    fn new() -> Self {
        Self {
            page: PageKind::Industries,
            view: ViewState::default(),
            export: ExportOptions::default(),
            to_file: false,
            list_groups: false,
        }
    }
}

pub fn run_from_args() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let run = parse(&args)?;
    execute(run)
}

fn parse(args: &[String]) -> Result<CliRun, Box<dyn Error>> {
    let mut run = CliRun::new();

    // Collected first, applied in order after the loop: sub-group needs
    // its group and sort needs its direction.
    let mut group: Option<String> = None;
    let mut sub_group: Option<String> = None;
    let mut contributor: Option<String> = None;
    let mut sort_col: Option<Column> = None;
    let mut desc = false;

    let mut args = args.iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                run.page = match v.to_ascii_lowercase().as_str() {
                    "industries" => PageKind::Industries,
                    "recommendations" | "recs" => PageKind::Recommendations,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };
            }
            "--group" => group = Some(args.next().ok_or("Missing value for --group")?.clone()),
            "--sub-group" => {
                sub_group = Some(args.next().ok_or("Missing value for --sub-group")?.clone());
            }
            "--contributor" => {
                contributor = Some(args.next().ok_or("Missing value for --contributor")?.clone());
            }
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                sort_col = Some(
                    Column::from_key(&v.to_ascii_lowercase())
                        .ok_or_else(|| format!("Unknown sort column: {} (try --help)", v))?,
                );
            }
            "--desc" => desc = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                run.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => run.export.include_headers = false,
            "--links" => run.export.include_links = true,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                run.export.export_type = ExportType::SingleFile;
                run.export.set_path(v);
                run.to_file = true;
            }
            "--per-group" => {
                let v = args.next().ok_or("Missing directory for --per-group")?;
                run.export.export_type = ExportType::PerGroup;
                run.export.set_path(v);
                run.to_file = true;
            }
            "--list-groups" => run.list_groups = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {} (try --help)", a).into()),
        }
    }

    if sub_group.is_some() && group.is_none() {
        return Err("--sub-group needs --group".into());
    }
    if desc && sort_col.is_none() {
        return Err("--desc needs --sort".into());
    }

    if let Some(g) = &group {
        if !GROUP_ORDER.contains(&g.as_str()) {
            return Err(format!("Unknown group: {} (see --list-groups)", g).into());
        }
        run.view.select_group(Some(g.as_str()));

        if let Some(s) = &sub_group {
            if !Resolver::shared().subs_of(g).contains(&s.as_str()) {
                return Err(format!("Unknown sub-group under {}: {}", g, s).into());
            }
            run.view.select_sub_group(Some(s.as_str()));
        }
    }

    if let Some(who) = &contributor {
        if run.page != PageKind::Recommendations {
            return Err("--contributor applies to --page recommendations".into());
        }
        run.view.select_contributor(Some(who.as_str()));
    }

    if let Some(column) = sort_col {
        if run.page != PageKind::Industries {
            return Err("--sort applies to --page industries".into());
        }
        run.view.sort = Some(SortSpec {
            column,
            direction: if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });
    }

    // File stem follows the page unless the user chose a path.
    if !run.to_file {
        run.export.set_default_stem(run.page);
    }

    Ok(run)
}

fn execute(run: CliRun) -> Result<(), Box<dyn Error>> {
    if run.list_groups {
        print_groups();
        return Ok(());
    }

    let resolver = Resolver::shared();
    let include_links = run.export.include_links;

    let (headers, rows) = match run.page {
        PageKind::Industries => {
            let mut progress = ConsoleProgress;
            let data = scrape::collect_industries(Some(&mut progress))?;
            let ix = view::visible_rows(&data, &run.view, resolver);
            let rows: Vec<Vec<String>> = ix
                .iter()
                .filter_map(|&i| data.get(i))
                .map(|r| industry_cells(r, resolver, include_links))
                .collect();
            (industry_headers(include_links), rows)
        }
        PageKind::Recommendations => {
            let aggregated = recs::aggregate(recs::RECOMMENDATIONS, resolver);
            let ix = view::visible_recs(&aggregated, &run.view);
            (
                recs_headers(include_links),
                recs_rows(&aggregated, &ix, include_links),
            )
        }
    };

    if rows.is_empty() {
        eprintln!("No rows matched the given filters.");
    }

    if run.to_file {
        match run.export.export_type {
            ExportType::SingleFile => {
                let path = file::write_export_single(&run.export, &headers, &rows)?;
                eprintln!("Wrote {}", path.display());
            }
            ExportType::PerGroup => {
                let written = file::write_export_per_group(&run.export, &headers, &rows, 0)?;
                for p in &written {
                    println!("{}", p.display());
                }
                eprintln!("Wrote {} file(s)", written.len());
            }
        }
    } else {
        print!(
            "{}",
            csv::to_export_string(&headers, &rows, run.export.include_headers, run.export.delim())
        );
    }

    Ok(())
}

/// The taxonomy as "GROUP / sub: industries" lines.
fn print_groups() {
    for group in GROUP_ORDER {
        println!("{group}");
        let Some(g) = TAXONOMY.iter().find(|g| g.name == group) else {
            continue;
        };
        for sub in g.subs {
            println!("  {}: {}", sub.name, sub.industries.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| s!(*p)).collect()
    }

    #[test]
    fn defaults_print_the_industry_table() {
        let run = parse(&argv(&[])).unwrap();
        assert_eq!(run.page, PageKind::Industries);
        assert!(!run.to_file);
        assert!(!run.list_groups);
        assert!(run.view.group.is_none());
        assert!(run.export.include_headers);
        assert!(!run.export.include_links);
    }

    #[test]
    fn filters_and_sort_land_in_the_view_state() {
        let run = parse(&argv(&[
            "--group", "ENERGY", "--sub-group", "Power", "--sort", "pe", "--desc",
        ]))
        .unwrap();
        assert_eq!(run.view.group.as_deref(), Some("ENERGY"));
        assert_eq!(run.view.sub_group.as_deref(), Some("Power"));
        assert_eq!(
            run.view.sort,
            Some(SortSpec { column: Column::Pe, direction: SortDirection::Descending })
        );
    }

    #[test]
    fn recs_page_takes_a_contributor() {
        let run = parse(&argv(&["--page", "recs", "--contributor", "Priya"])).unwrap();
        assert_eq!(run.page, PageKind::Recommendations);
        assert_eq!(run.view.contributor.as_deref(), Some("Priya"));
    }

    #[test]
    fn out_path_switches_to_file_output() {
        let run = parse(&argv(&["--out", "exports/table.txt", "--format", "tsv"])).unwrap();
        assert!(run.to_file);
        // Extension follows the format, not the typed path.
        assert_eq!(
            run.export.out_path(),
            std::path::PathBuf::from("exports/table.tsv")
        );
    }

    #[test]
    fn per_group_takes_a_directory() {
        let run = parse(&argv(&["--per-group", "out/groups"])).unwrap();
        assert!(run.to_file);
        assert_eq!(run.export.export_type, ExportType::PerGroup);
        assert_eq!(run.export.out_path(), std::path::PathBuf::from("out/groups"));
    }

    #[test]
    fn bad_inputs_are_rejected() {
        assert!(parse(&argv(&["--bogus"])).is_err());
        assert!(parse(&argv(&["--page", "teams"])).is_err());
        assert!(parse(&argv(&["--group", "NOT A GROUP"])).is_err());
        assert!(parse(&argv(&["--sub-group", "Power"])).is_err(), "sub-group without group");
        assert!(
            parse(&argv(&["--group", "ENERGY", "--sub-group", "Banks"])).is_err(),
            "sub-group from another group"
        );
        assert!(parse(&argv(&["--desc"])).is_err(), "desc without sort");
        assert!(parse(&argv(&["--sort", "altitude"])).is_err());
        assert!(
            parse(&argv(&["--contributor", "Priya"])).is_err(),
            "contributor only applies to recommendations"
        );
        assert!(
            parse(&argv(&["--page", "recs", "--sort", "pe"])).is_err(),
            "sort only applies to industries"
        );
        assert!(parse(&argv(&["--out"])).is_err(), "missing value");
    }
}
