use serde::Serialize;

use crate::dataset::Dataset;

use super::frequency::{ValueCount, mode, value_counts};

/// Result for a column that some cities do not publish.
///
/// Serializes as `{"status": "available", "value": ...}` or `{"status": "not_available"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Availability<T> {
    #[must_use]
    pub const fn as_ref(&self) -> Availability<&T> {
        match self {
            Self::Available(value) => Availability::Available(value),
            Self::NotAvailable => Availability::NotAvailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Who rode: user types, genders and birth years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    pub genders: Availability<Vec<ValueCount<String>>>,
    /// `Available(None)` when the column exists but every cell is blank.
    pub birth_years: Availability<Option<BirthYearStats>>,
}

impl UserStats {
    /// `None` when the dataset is empty. Blank cells are not counted.
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let records = dataset.records();
        let schema = dataset.schema();

        let user_types = owned(value_counts(records.iter().filter_map(|r| r.user_type.as_deref())));

        let genders = if schema.has_gender {
            Availability::Available(owned(value_counts(
                records.iter().filter_map(|r| r.gender.as_deref()),
            )))
        } else {
            Availability::NotAvailable
        };

        let birth_years = if schema.has_birth_year {
            let years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
            Availability::Available(birth_year_stats(&years))
        } else {
            Availability::NotAvailable
        };

        Some(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

fn owned(counts: Vec<ValueCount<&str>>) -> Vec<ValueCount<String>> {
    counts
        .into_iter()
        .map(|c| ValueCount {
            value: c.value.to_string(),
            count: c.count,
        })
        .collect()
}
