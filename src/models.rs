use chrono::NaiveDate;

/// A raw quantity/price cell as it appears in a point-of-sale export.
/// Exports are inconsistent: some write plain numbers, some currency
/// strings like "$1,234.56", some leave the cell blank.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Numeric(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn from_field(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        // f64::from_str accepts "NaN"/"inf"; those are not sales figures,
        // so anything non-finite stays text and degrades to None below.
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Numeric(n),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Numeric value of the cell, stripping currency formatting from text.
    /// Unparseable or non-finite text yields None rather than an error.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n).filter(|v| v.is_finite()),
            Self::Missing => None,
            Self::Text(s) => {
                let cleaned = s.replace('$', "").replace(',', "");
                cleaned.trim().parse().ok().filter(|v: &f64| v.is_finite())
            }
        }
    }
}

/// One pipeline output row. `date` and `region` pass through in the source
/// file's own representation; `sales` is None when quantity or price could
/// not be parsed.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub sales: Option<f64>,
    pub date: String,
    pub region: String,
}

/// One consolidated-dataset row after loading. Rows with a null sales value
/// or an unparseable date never make it this far.
#[derive(Debug, Clone)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sales: f64,
    pub region: String,
}

/// One point of the daily series driving the chart and verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total_sales: f64,
}

/// Region selection. "all" is the sentinel that bypasses filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionFilter {
    All,
    Named(String),
}

impl RegionFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::All,
            Some(r) if r.trim().eq_ignore_ascii_case("all") => Self::All,
            Some(r) => Self::Named(r.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_numeric_passthrough() {
        assert_eq!(CellValue::from_field("3").to_number(), Some(3.0));
        assert_eq!(CellValue::from_field("2.5").to_number(), Some(2.5));
        assert_eq!(CellValue::from_field(" 1.25 ").to_number(), Some(1.25));
    }

    #[test]
    fn test_cell_value_currency_strings() {
        assert_eq!(CellValue::from_field("$2.50").to_number(), Some(2.5));
        assert_eq!(CellValue::from_field("$1,234.56").to_number(), Some(1234.56));
        assert_eq!(CellValue::from_field(" $ 3.00").to_number(), Some(3.0));
    }

    #[test]
    fn test_cell_value_degrades_to_none() {
        assert_eq!(CellValue::from_field("abc").to_number(), None);
        assert_eq!(CellValue::from_field("").to_number(), None);
        assert_eq!(CellValue::from_field("   ").to_number(), None);
        assert_eq!(CellValue::Missing.to_number(), None);
    }

    #[test]
    fn test_cell_value_rejects_non_finite() {
        assert_eq!(CellValue::from_field("NaN").to_number(), None);
        assert_eq!(CellValue::from_field("inf").to_number(), None);
        assert_eq!(CellValue::from_field("-inf").to_number(), None);
        assert_eq!(CellValue::from_field("infinity").to_number(), None);
        assert_eq!(CellValue::Numeric(f64::NAN).to_number(), None);
    }

    #[test]
    fn test_region_filter_sentinel() {
        assert_eq!(RegionFilter::parse(None), RegionFilter::All);
        assert_eq!(RegionFilter::parse(Some("all")), RegionFilter::All);
        assert_eq!(RegionFilter::parse(Some("ALL")), RegionFilter::All);
        assert_eq!(
            RegionFilter::parse(Some("north")),
            RegionFilter::Named("north".to_string())
        );
    }
}
