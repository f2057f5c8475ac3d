// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::to_export_string;

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per industry group into the directory implied by
/// `export.out_path()` (a directory when `export_type == PerGroup`).
/// `group_col` is the column index of the group cell. Rows with an empty
/// group cell continue the row above them, which keeps nested stock rows
/// with their industry.
pub fn write_export_per_group(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
    group_col: usize,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // Bucket rows in table order.
    let mut buckets: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    let mut current = s!("-");
    for r in rows {
        if let Some(cell) = r.get(group_col) {
            if !cell.is_empty() {
                current = cell.clone();
            }
        }
        match buckets.iter_mut().find(|(g, _)| *g == current) {
            Some((_, rs)) => rs.push(r.clone()),
            None => buckets.push((current.clone(), vec![r.clone()])),
        }
    }

    // Dedup stems and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(buckets.len());
    let ext = export.format.ext();

    for (group, group_rows) in buckets {
        let stem = sanitize_filename(&group, "uncategorized");
        let path = resolve_export_filename(&outdir, &stem, &mut seen, ext);

        let contents =
            to_export_string(headers, &group_rows, export.include_headers, export.delim());
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_export_filename(
    dir: &Path,
    stem: &str, // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str, // "csv" | "tsv"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
