//! Subset derivation.
//!
//! The subset is the table restricted to the selected countries, projected
//! to the six dashboard columns and augmented with:
//!
//! - `death_proportion`: each row's share of the subset's deaths (0 when the
//!   subset has no deaths, null when the row's own count is null)
//! - a ranking by `total_confirmed`, descending and stable on table order
//! - the map center, the mean of the rows' coordinates
//!
//! A subset is built once per render pass and only read afterwards.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Instant;

use cvd_ingest::Dataset;
use cvd_model::columns::{
    ACTIVE_CASES, COUNTRY, LATITUDE, LONGITUDE, TOTAL_CONFIRMED, TOTAL_DEATHS,
};
use cvd_model::{CountryRecord, DashboardError, LatLon};
use tracing::{debug, info};

use crate::validate::ValidatedSelection;

#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    rows: Vec<CountryRecord>,
    ranked: Vec<usize>,
    center: Option<LatLon>,
}

impl Subset {
    fn new(rows: Vec<CountryRecord>) -> Self {
        let ranked = rank_by_confirmed(&rows);
        let center = map_center(&rows);
        Self {
            rows,
            ranked,
            center,
        }
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[CountryRecord] {
        &self.rows
    }

    /// Rows by `total_confirmed`, highest first. Ties keep table order and
    /// rows without a count come last.
    pub fn ranked(&self) -> impl Iterator<Item = &CountryRecord> {
        self.ranked.iter().map(|&idx| &self.rows[idx])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.country.as_str())
    }

    /// Mean latitude and mean longitude of the subset. `None` means there is
    /// nothing to put on a map.
    pub fn map_center(&self) -> Option<LatLon> {
        self.center
    }

    /// Sum of the non-null death counts.
    pub fn total_deaths(&self) -> i64 {
        self.rows.iter().filter_map(|row| row.total_deaths).sum()
    }
}

/// Filter the table down to the validated selection and derive the
/// dashboard columns.
pub fn build_subset(
    table: &Dataset,
    selection: &ValidatedSelection,
) -> Result<Subset, DashboardError> {
    let start = Instant::now();
    let countries = table
        .strings(COUNTRY)
        .ok_or_else(|| DashboardError::MissingColumn {
            column: COUNTRY.to_string(),
        })?;
    let height = countries.len();
    let confirmed = integer_column(table, TOTAL_CONFIRMED, height);
    let deaths = integer_column(table, TOTAL_DEATHS, height);
    let active = integer_column(table, ACTIVE_CASES, height);
    let latitude = float_column(table, LATITUDE, height);
    let longitude = float_column(table, LONGITUDE, height);

    let wanted: HashSet<&str> = selection.selection().iter().collect();
    let mut taken: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();
    for (idx, country) in countries.iter().enumerate() {
        let Some(country) = country.as_deref() else {
            continue;
        };
        if !wanted.contains(country) || !taken.insert(country) {
            continue;
        }
        rows.push(CountryRecord {
            source_index: idx,
            country: country.to_string(),
            total_confirmed: confirmed[idx],
            total_deaths: deaths[idx],
            active_cases: active[idx],
            latitude: latitude[idx],
            longitude: longitude[idx],
            death_proportion: None,
        });
    }
    assign_death_proportions(&mut rows);

    let subset = Subset::new(rows);
    if subset.len() < selection.selection().len() {
        debug!(
            requested = selection.selection().len(),
            matched = subset.len(),
            "some selected countries are not in the dataset"
        );
    }
    info!(
        rows = subset.len(),
        total_deaths = subset.total_deaths(),
        duration_ms = start.elapsed().as_millis(),
        "subset built"
    );
    Ok(subset)
}

/// Mean latitude and mean longitude, each over its own non-null values.
///
/// `None` when either coordinate has no values at all.
pub fn map_center(rows: &[CountryRecord]) -> Option<LatLon> {
    let lat = mean(rows.iter().filter_map(|row| row.latitude))?;
    let lon = mean(rows.iter().filter_map(|row| row.longitude))?;
    Some(LatLon { lat, lon })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

fn integer_column(table: &Dataset, name: &str, height: usize) -> Vec<Option<i64>> {
    table.integers(name).unwrap_or_else(|| vec![None; height])
}

fn float_column(table: &Dataset, name: &str, height: usize) -> Vec<Option<f64>> {
    table.floats(name).unwrap_or_else(|| vec![None; height])
}

fn assign_death_proportions(rows: &mut [CountryRecord]) {
    let total: i64 = rows.iter().filter_map(|row| row.total_deaths).sum();
    for row in rows.iter_mut() {
        row.death_proportion = row.total_deaths.map(|deaths| {
            if total == 0 {
                0.0
            } else {
                deaths as f64 / total as f64
            }
        });
    }
}

fn rank_by_confirmed(rows: &[CountryRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    // sort_by is stable, so equal counts stay in table order.
    order.sort_by(
        |&a, &b| match (rows[a].total_confirmed, rows[b].total_confirmed) {
            (Some(left), Some(right)) => right.cmp(&left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, confirmed: Option<i64>, deaths: Option<i64>) -> CountryRecord {
        CountryRecord {
            source_index: 0,
            country: country.to_string(),
            total_confirmed: confirmed,
            total_deaths: deaths,
            active_cases: None,
            latitude: None,
            longitude: None,
            death_proportion: None,
        }
    }

    #[test]
    fn ranking_puts_nulls_last_and_keeps_ties_stable() {
        let rows = vec![
            record("A", Some(10), None),
            record("B", None, None),
            record("C", Some(30), None),
            record("D", Some(10), None),
        ];
        assert_eq!(rank_by_confirmed(&rows), vec![2, 0, 3, 1]);
    }

    #[test]
    fn proportions_skip_null_deaths() {
        let mut rows = vec![
            record("A", None, Some(3)),
            record("B", None, None),
            record("C", None, Some(1)),
        ];
        assign_death_proportions(&mut rows);
        assert_eq!(rows[0].death_proportion, Some(0.75));
        assert_eq!(rows[1].death_proportion, None);
        assert_eq!(rows[2].death_proportion, Some(0.25));
    }

    #[test]
    fn center_averages_each_coordinate_on_its_own() {
        let mut a = record("A", None, None);
        a.latitude = Some(10.0);
        a.longitude = Some(20.0);
        let mut b = record("B", None, None);
        b.latitude = Some(30.0);
        b.longitude = Some(40.0);
        let mut c = record("C", None, None);
        c.latitude = Some(80.0);
        let center = map_center(&[a, b, c]).expect("center");
        assert_eq!(center, LatLon { lat: 40.0, lon: 30.0 });
        assert_eq!(map_center(&[]), None);
    }

    #[test]
    fn center_needs_values_in_both_columns() {
        let mut a = record("A", None, None);
        a.latitude = Some(10.0);
        assert_eq!(map_center(&[a]), None);
    }
}
