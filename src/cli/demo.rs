use std::path::Path;

use chrono::{Duration, NaiveDate};

use crate::analysis::price_increase_date;
use crate::error::Result;
use crate::settings::get_data_dir;

const REGIONS: &[&str] = &["north", "east", "south", "west"];

/// Daily unit counts rotated by day index so the series has visible texture
/// without being random.
const QUANTITIES: &[u32] = &[410, 385, 508, 442, 366, 471, 529, 398];

/// Product spellings rotated across rows; the pipeline must accept all of
/// these and reject the decoy lines below.
const SPELLINGS: &[&str] = &["pink morsel", "Pink Morsels", "PINK MORSEL", "Pink Morsel"];

const DECOYS: &[&str] = &["Gold Morsel", "pink morsel deluxe"];

struct DemoFile {
    name: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
}

const FILES: &[DemoFile] = &[
    DemoFile { name: "daily_sales_data_0.csv", start: (2020, 10, 1), end: (2020, 12, 31) },
    DemoFile { name: "daily_sales_data_1.csv", start: (2021, 1, 1), end: (2021, 2, 28) },
    DemoFile { name: "daily_sales_data_2.csv", start: (2021, 3, 1), end: (2021, 4, 30) },
];

fn write_demo_file(dir: &Path, file: &DemoFile) -> Result<usize> {
    let cutoff = price_increase_date();
    let (sy, sm, sd) = file.start;
    let (ey, em, ed) = file.end;
    let start = NaiveDate::from_ymd_opt(sy, sm, sd).unwrap();
    let end = NaiveDate::from_ymd_opt(ey, em, ed).unwrap();

    let mut wtr = csv::Writer::from_path(dir.join(file.name))?;
    wtr.write_record(["product", "quantity", "price", "date", "region"])?;

    let mut rows = 0usize;
    let mut day = start;
    let mut i = 0usize;
    while day <= end {
        let price = if day < cutoff { "$3.00" } else { "$3.99" };
        let date = day.format("%Y-%m-%d").to_string();
        for &region in REGIONS {
            let product = SPELLINGS[i % SPELLINGS.len()];
            let quantity = QUANTITIES[i % QUANTITIES.len()].to_string();
            wtr.write_record([product, quantity.as_str(), price, date.as_str(), region])?;
            // Sprinkle in lines the filter must drop
            if i % 9 == 0 {
                let decoy = DECOYS[i % DECOYS.len()];
                wtr.write_record([decoy, "100", price, date.as_str(), region])?;
            }
            rows += 1;
            i += 1;
        }
        day += Duration::days(7);
    }
    wtr.flush()?;
    Ok(rows)
}

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let mut total = 0usize;
    for file in FILES {
        total += write_demo_file(&data_dir, file)?;
    }

    println!(
        "Wrote {} sample files ({} Pink Morsel rows) to {}",
        FILES.len(),
        total,
        data_dir.display()
    );
    println!("Next: `morsel process`, then `morsel report verdict`.");
    Ok(())
}
