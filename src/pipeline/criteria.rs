//! Search filters and their validation

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use super::error::CriteriaError;
use super::query::QueryConfig;

/// Field the remote API should sort results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Make,
    Model,
    Year,
    Cylinders,
}

impl SortField {
    /// All sort fields in prompt order
    pub const ALL: [SortField; 4] = [
        SortField::Make,
        SortField::Model,
        SortField::Year,
        SortField::Cylinders,
    ];

    /// Name used in the `sort=` clause
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Make => "make",
            SortField::Model => "model",
            SortField::Year => "year",
            SortField::Cylinders => "cylinders",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownSortField(s.to_string()))
    }
}

/// User-supplied search filters.
///
/// Numeric fields use `0` for "not set", matching how the prompts treat a
/// skipped answer. A `result_limit` of `0` means the configured default row
/// count is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub make: String,
    pub model: String,
    pub sort_field: Option<SortField>,
    pub year: u32,
    pub cylinders: u32,
    pub result_limit: u32,
}

impl FilterCriteria {
    /// Check every field against the limits in `config`.
    ///
    /// Returns the first violation found. Empty/zero fields are always valid.
    pub fn validate(&self, config: &QueryConfig) -> Result<(), CriteriaError> {
        validate_year(self.year, config)?;
        validate_cylinders(self.cylinders, config)?;
        validate_result_limit(self.result_limit, config)?;
        Ok(())
    }

    /// Whether any refinement clause would be emitted for these criteria
    pub fn has_refinements(&self) -> bool {
        !self.make.is_empty() || !self.model.is_empty() || self.year != 0 || self.cylinders != 0
    }
}

/// Validate a model year (0 = unset)
pub fn validate_year(year: u32, config: &QueryConfig) -> Result<(), CriteriaError> {
    if year == 0 || config.year_range.contains(&year) {
        Ok(())
    } else {
        Err(CriteriaError::YearOutOfRange {
            year,
            min: *config.year_range.start(),
            max: *config.year_range.end(),
        })
    }
}

/// Validate a cylinder count (0 = unset)
pub fn validate_cylinders(cylinders: u32, config: &QueryConfig) -> Result<(), CriteriaError> {
    if cylinders == 0 || config.cylinder_counts.contains(&cylinders) {
        Ok(())
    } else {
        Err(CriteriaError::UnsupportedCylinders(cylinders))
    }
}

/// Validate a requested result count (0 = default)
pub fn validate_result_limit(limit: u32, config: &QueryConfig) -> Result<(), CriteriaError> {
    if limit <= config.max_rows {
        Ok(())
    } else {
        Err(CriteriaError::LimitTooLarge {
            limit,
            max: config.max_rows,
        })
    }
}
