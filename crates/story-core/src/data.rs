// File: crates/story-core/src/data.rs
// Summary: Row model and CSV loader for the annual emissions table.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{StoryError, StoryResult};

pub const COL_ENTITY: &str = "Entity";
pub const COL_YEAR: &str = "Year";
pub const COL_CO2: &str = "Annual CO₂ emissions";
const COL_CO2_ASCII: &str = "Annual CO2 emissions";

/// One parsed table row. Numeric cells that are blank or unparseable are `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub country: String,
    pub year: Option<i32>,
    pub co2: Option<f64>,
}

impl Row {
    /// Fully valid row.
    pub fn new(country: impl Into<String>, year: i32, co2: f64) -> Self {
        Self { country: country.into(), year: Some(year), co2: Some(co2) }
    }

    /// `(year, co2)` when both fields are numeric.
    pub fn point(&self) -> Option<(i32, f64)> {
        Some((self.year?, self.co2?))
    }

    pub fn is_valid(&self) -> bool { self.point().is_some() }
}

/// Entity, year and emissions cells, in that order, picked out of a wider record.
#[derive(Debug, Deserialize)]
struct RawRecord {
    entity: String,
    year: String,
    co2: String,
}

impl From<RawRecord> for Row {
    fn from(raw: RawRecord) -> Self {
        Self { country: raw.entity, year: parse_year(&raw.year), co2: parse_value(&raw.co2) }
    }
}

fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    // "2019.0" style exports
    let v = parse_value(s)?;
    if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 { Some(v as i32) } else { None }
}

fn parse_value(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Immutable row set shared by every scene for the session lifetime.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load the emissions CSV from disk.
    pub fn load_csv(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| StoryError::io(path, e))?;
        let ds = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), rows = ds.len(), "dataset loaded");
        Ok(ds)
    }

    /// Parse CSV content from any reader. Headers are required; extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> StoryResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let idx = |name: &str| headers.iter().position(|h| h == name);
        let i_entity = idx(COL_ENTITY).ok_or_else(|| StoryError::missing_column(COL_ENTITY))?;
        let i_year = idx(COL_YEAR).ok_or_else(|| StoryError::missing_column(COL_YEAR))?;
        // The subscript spelling wins when a file carries both.
        let i_co2 = idx(COL_CO2)
            .or_else(|| idx(COL_CO2_ASCII))
            .ok_or_else(|| StoryError::missing_column(COL_CO2))?;

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let cell = |i: usize| rec.get(i).unwrap_or("");
            let picked = csv::StringRecord::from(vec![cell(i_entity), cell(i_year), cell(i_co2)]);
            let raw: RawRecord = picked.deserialize(None)?;
            rows.push(Row::from(raw));
        }

        let invalid = rows.iter().filter(|r| !r.is_valid()).count();
        if invalid > 0 {
            tracing::debug!(invalid, "rows with blank or non-numeric year/emissions");
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Distinct country names in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_parse_leniently() {
        assert_eq!(parse_year(" 1955 "), Some(1955));
        assert_eq!(parse_year("2019.0"), Some(2019));
        assert_eq!(parse_year("2019.5"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_value("1.5e3"), Some(1500.0));
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("n/a"), None);
    }
}
