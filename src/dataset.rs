use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{MorselError, Result};
use crate::models::{RegionFilter, SalesRecord};

/// Dates in the consolidated file are passed through from the source exports,
/// so accept ISO first and the US style some registers emit.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

/// Resolve the consolidated file's three columns from its header, same
/// trim + lowercase lookup the pipeline applies to raw exports.
fn resolve_columns(headers: &csv::StringRecord, file: &Path) -> Result<(usize, usize, usize)> {
    let find = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().to_lowercase() == name)
            .ok_or_else(|| MorselError::MissingColumn {
                file: file.display().to_string(),
                column: name,
            })
    };
    Ok((find("sales")?, find("date")?, find("region")?))
}

/// Load the consolidated dataset. Rows with an empty sales field or an
/// unparseable date are dropped here, not treated as errors.
pub fn load(path: &Path) -> Result<Vec<SalesRecord>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));
    let (sales_col, date_col, region_col) = resolve_columns(rdr.headers()?, path)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let Some(sales) = record
            .get(sales_col)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
        else {
            continue;
        };
        let Some(date) = record.get(date_col).and_then(parse_date) else {
            continue;
        };
        records.push(SalesRecord {
            date,
            sales,
            region: record.get(region_col).unwrap_or("").to_string(),
        });
    }
    Ok(records)
}

/// Apply a region filter, producing a copy; the loaded dataset is never
/// mutated. The `all` sentinel passes everything through.
pub fn filter_by_region(
    records: &[SalesRecord],
    filter: &RegionFilter,
    case_sensitive: bool,
) -> Vec<SalesRecord> {
    match filter {
        RegionFilter::All => records.to_vec(),
        RegionFilter::Named(name) => records
            .iter()
            .filter(|r| {
                if case_sensitive {
                    r.region == *name
                } else {
                    r.region.eq_ignore_ascii_case(name)
                }
            })
            .cloned()
            .collect(),
    }
}

/// Distinct region values present in the dataset, sorted.
pub fn distinct_regions(records: &[SalesRecord]) -> Vec<String> {
    let set: BTreeSet<String> = records.iter().map(|r| r.region.clone()).collect();
    set.into_iter().collect()
}
