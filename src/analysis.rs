use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::fmt::money;
use crate::models::{DailyPoint, SalesRecord};

/// The Pink Morsel price increase took effect on this date; it splits every
/// comparison into a before and an at-or-after partition.
pub fn price_increase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()
}

/// Group records by calendar date and sum sales per date, ascending.
/// Input order does not matter; the BTreeMap does the sorting.
pub fn daily_series(records: &[SalesRecord]) -> Vec<DailyPoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date).or_default() += record.sales;
    }
    by_date
        .into_iter()
        .map(|(date, total_sales)| DailyPoint { date, total_sales })
        .collect()
}

pub struct SplitTotals {
    pub before: f64,
    pub after: f64,
}

/// Total sales strictly before the cutoff vs at-or-after it.
pub fn split_totals(series: &[DailyPoint], cutoff: NaiveDate) -> SplitTotals {
    let mut totals = SplitTotals {
        before: 0.0,
        after: 0.0,
    };
    for point in series {
        if point.date < cutoff {
            totals.before += point.total_sales;
        } else {
            totals.after += point.total_sales;
        }
    }
    totals
}

/// Render the before/after comparison as a sentence. A zero partition total
/// means no rows landed on that side of the cutoff, which would make the
/// comparison misleading, so it gets called out explicitly.
pub fn verdict_text(series: &[DailyPoint], cutoff: NaiveDate) -> String {
    let totals = split_totals(series, cutoff);
    let verdict = if totals.after > totals.before {
        "higher after the price increase"
    } else if totals.after < totals.before {
        "higher before the price increase"
    } else {
        "equal before and after the price increase"
    };
    let mut text = format!(
        "Total before: {} \u{b7} after: {} \u{2014} Sales were {}.",
        money(totals.before),
        money(totals.after),
        verdict
    );
    if totals.before == 0.0 {
        text.push_str(" Note: no recorded sales before the cutoff.");
    }
    if totals.after == 0.0 {
        text.push_str(" Note: no recorded sales at or after the cutoff.");
    }
    text
}
