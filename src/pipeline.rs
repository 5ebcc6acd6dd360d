use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{MorselError, Result};
use crate::models::{CellValue, NormalizedRow};

// ---------------------------------------------------------------------------
// Schema resolution
// ---------------------------------------------------------------------------

/// Header indices of the five required columns in one input file.
struct ColumnMap {
    product: usize,
    quantity: usize,
    price: usize,
    date: usize,
    region: usize,
}

/// Map raw headers onto the required logical columns, trimming whitespace and
/// lower-casing. A missing column fails the whole run; skipping the file
/// instead would silently under-report sales.
fn resolve_columns(headers: &csv::StringRecord, file: &Path) -> Result<ColumnMap> {
    let find = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().to_lowercase() == name)
            .ok_or_else(|| MorselError::MissingColumn {
                file: file.display().to_string(),
                column: name,
            })
    };
    Ok(ColumnMap {
        product: find("product")?,
        quantity: find("quantity")?,
        price: find("price")?,
        date: find("date")?,
        region: find("region")?,
    })
}

// ---------------------------------------------------------------------------
// Per-file processing
// ---------------------------------------------------------------------------

/// Matches the product line we keep: "pink morsel" with an optional plural s,
/// any case, no other text.
pub fn product_pattern() -> Regex {
    Regex::new(r"(?i)^pink\s+morsels?$").unwrap()
}

fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

fn process_file(path: &Path, pattern: &Regex) -> Result<Vec<NormalizedRow>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));
    let cols = resolve_columns(rdr.headers()?, path)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let Some(product) = record.get(cols.product) else {
            continue;
        };
        if !pattern.is_match(product.trim()) {
            continue;
        }
        let quantity = CellValue::from_field(record.get(cols.quantity).unwrap_or(""));
        let price = CellValue::from_field(record.get(cols.price).unwrap_or(""));
        let sales = match (quantity.to_number(), price.to_number()) {
            (Some(q), Some(p)) => Some(q * p),
            _ => None,
        };
        rows.push(NormalizedRow {
            sales,
            date: record.get(cols.date).unwrap_or("").to_string(),
            region: record.get(cols.region).unwrap_or("").to_string(),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct PipelineResult {
    pub rows_written: usize,
    pub output_path: PathBuf,
}

fn discover_csv_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .map_or(false, |e| e.eq_ignore_ascii_case("csv"))
        {
            files.push(path);
        }
    }
    // File-name order keeps the concatenated output deterministic.
    files.sort();
    if files.is_empty() {
        return Err(MorselError::NoCsvFiles(input_dir.display().to_string()));
    }
    Ok(files)
}

/// Run the full ingestion pass: read every CSV in `input_dir`, keep Pink
/// Morsel rows, compute sales, and write the consolidated file to
/// `output_path`, overwriting any previous run.
pub fn run(input_dir: &Path, output_path: &Path) -> Result<PipelineResult> {
    let files = discover_csv_files(input_dir)?;
    let pattern = product_pattern();

    let mut all_rows = Vec::new();
    for file in &files {
        all_rows.extend(process_file(file, &pattern)?);
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(["sales", "date", "region"])?;
    for row in &all_rows {
        let sales = match row.sales {
            Some(v) => format!("{:.2}", round2(v)),
            None => String::new(),
        };
        wtr.write_record([sales.as_str(), row.date.as_str(), row.region.as_str()])?;
    }
    wtr.flush()?;

    Ok(PipelineResult {
        rows_written: all_rows.len(),
        output_path: output_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_product_pattern() {
        let re = product_pattern();
        assert!(re.is_match("pink morsel"));
        assert!(re.is_match("Pink Morsels"));
        assert!(re.is_match("PINK  MORSEL"));
        assert!(!re.is_match("pink morsel deluxe"));
        assert!(!re.is_match("morsel"));
        assert!(!re.is_match("pinkmorsel"));
    }

    #[test]
    fn test_sales_computation() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,price,date,region\n\
             pink morsel,3,$2.50,2021-01-10,north\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 1);
        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("7.50,2021-01-10,north"), "got: {content}");
    }

    #[test]
    fn test_filters_other_products() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,price,date,region\n\
             Pink Morsels,2,3.00,2021-01-10,north\n\
             pink morsel deluxe,5,1.00,2021-01-10,north\n\
             gold morsel,4,2.00,2021-01-11,south\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 1);
    }

    #[test]
    fn test_unparseable_cells_become_empty_sales() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,price,date,region\n\
             pink morsel,abc,2.00,2021-01-10,north\n\
             pink morsel,2,,2021-01-11,south\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 2);
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "sales,date,region\n,2021-01-10,north\n,2021-01-11,south\n"
        );
    }

    #[test]
    fn test_non_finite_cells_become_empty_sales() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,price,date,region\n\
             pink morsel,NaN,2.00,2021-01-10,north\n\
             pink morsel,2,inf,2021-01-11,south\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 2);
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "sales,date,region\n,2021-01-10,north\n,2021-01-11,south\n"
        );
    }

    #[test]
    fn test_headers_normalized_case_and_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            " Product ,QUANTITY, Price ,Date,REGION\n\
             pink morsel,1,2.00,2021-01-10,east\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 1);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,date,region\n\
             pink morsel,1,2021-01-10,east\n",
        );
        let out = dir.path().join("out.csv");
        let err = run(dir.path(), &out).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("price"), "got: {msg}");
        assert!(msg.contains("sales.csv"), "got: {msg}");
    }

    #[test]
    fn test_empty_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let err = run(dir.path(), &out).unwrap_err();
        assert!(matches!(err, MorselError::NoCsvFiles(_)));
    }

    #[test]
    fn test_files_concatenated_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "b.csv",
            "product,quantity,price,date,region\n\
             pink morsel,1,2.00,2021-02-01,south\n",
        );
        write_csv(
            dir.path(),
            "a.csv",
            "product,quantity,price,date,region\n\
             pink morsel,1,1.00,2021-01-01,north\n",
        );
        let out = dir.path().join("out.csv");
        run(dir.path(), &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        let north = content.find("north").unwrap();
        let south = content.find("south").unwrap();
        assert!(north < south);
    }

    #[test]
    fn test_zero_match_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "a.csv",
            "product,quantity,price,date,region\n\
             gold morsel,1,1.00,2021-01-01,north\n",
        );
        write_csv(
            dir.path(),
            "b.csv",
            "product,quantity,price,date,region\n\
             pink morsel,1,2.00,2021-02-01,south\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 1);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "sales.csv",
            "product,quantity,price,date,region\n\
             pink morsel,2,\"$3.00\",2021-01-10,north\n\
             Pink Morsel,4,1.5,2021-01-20,north\n",
        );
        // Output lands in a subdirectory, as in real runs, so the second
        // pass does not discover it as an input.
        let out = dir.path().join("processed").join("out.csv");
        run(dir.path(), &out).unwrap();
        let first = std::fs::read(&out).unwrap();
        run(dir.path(), &out).unwrap();
        let second = std::fs::read(&out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_two_files() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "daily_sales_data_0.csv",
            "product,quantity,price,date,region\n\
             Pink Morsels,2,$3.00,2021-01-10,north\n",
        );
        write_csv(
            dir.path(),
            "daily_sales_data_1.csv",
            "product,quantity,price,date,region\n\
             Pink Morsel,4,1.5,2021-01-20,north\n",
        );
        let out = dir.path().join("out.csv");
        let result = run(dir.path(), &out).unwrap();
        assert_eq!(result.rows_written, 2);
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "sales,date,region\n6.00,2021-01-10,north\n6.00,2021-01-20,north\n"
        );
    }
}
