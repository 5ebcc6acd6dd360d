use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::analysis::{daily_series, price_increase_date, split_totals, verdict_text};
use crate::dataset;
use crate::error::Result;
use crate::fmt::money;
use crate::models::{DailyPoint, RegionFilter, SalesRecord};
use crate::settings::{default_output_path, load_settings};

fn resolve_data_path(data: Option<&str>) -> PathBuf {
    data.map(PathBuf::from).unwrap_or_else(default_output_path)
}

fn load_filtered(region: Option<&str>, data: Option<&str>) -> Result<Vec<SalesRecord>> {
    let settings = load_settings();
    let records = dataset::load(&resolve_data_path(data))?;
    let filter = RegionFilter::parse(region);
    Ok(dataset::filter_by_region(
        &records,
        &filter,
        settings.case_sensitive_regions,
    ))
}

pub fn daily(region: Option<&str>, data: Option<&str>) -> Result<()> {
    let records = load_filtered(region, data)?;
    let series = daily_series(&records);
    println!("{}", format_daily(&series));
    Ok(())
}

pub fn verdict(region: Option<&str>, data: Option<&str>) -> Result<()> {
    let records = load_filtered(region, data)?;
    let series = daily_series(&records);
    let cutoff = price_increase_date();
    let totals = split_totals(&series, cutoff);

    let text = verdict_text(&series, cutoff);
    let colored = if totals.after > totals.before {
        text.green()
    } else if totals.after < totals.before {
        text.red()
    } else {
        text.normal()
    };
    println!("Price increase: {}", cutoff.format("%-d %b %Y"));
    println!("{colored}");
    Ok(())
}

fn format_daily(series: &[DailyPoint]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Sales"]);
    for point in series {
        table.add_row(vec![
            Cell::new(point.date.format("%Y-%m-%d")),
            Cell::new(money(point.total_sales)),
        ]);
    }
    let total: f64 = series.iter().map(|p| p.total_sales).sum();
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(money(total))]);
    format!("Daily Sales\n{table}")
}
