//! Capital table loading utilities
//!
//! Converts embedded records into domain values and reads custom tables
//! from tab-separated files.

use super::embedded::CapitalRecord;
use crate::core::{Capital, Region};
use std::fs;
use std::io;
use std::path::Path;

/// Convert embedded records to Capital values
///
/// Rows whose region tag does not parse are skipped; the embedded tables
/// are validated by tests so this only matters for hand-built slices.
#[must_use]
pub fn capitals_from_records(records: &[CapitalRecord]) -> Vec<Capital> {
    records
        .iter()
        .filter_map(|r| {
            let region: Region = r.region.parse().ok()?;
            Some(Capital::new(r.city, r.region_name, r.lat, r.lng, region))
        })
        .collect()
}

/// Load a capital table from a tab-separated file.
///
/// Expects `city<TAB>country<TAB>lat<TAB>lng<TAB>region` per line, the same
/// layout as the files under `data/`. Blank lines and malformed rows are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Capital>> {
    let content = fs::read_to_string(path)?;

    let capitals = content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() != 5 {
                return None;
            }
            let lat: f64 = fields[2].parse().ok()?;
            let lng: f64 = fields[3].parse().ok()?;
            let region: Region = fields[4].parse().ok()?;
            if fields[0].is_empty() || fields[1].is_empty() {
                return None;
            }
            Some(Capital::new(fields[0], fields[1], lat, lng, region))
        })
        .collect();

    Ok(capitals)
}
