//! Traits for storage abstraction and extensibility

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Filter for searching readings; every field is optional and unset fields match all
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingQuery {
    /// Exact day
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to_date: Option<NaiveDate>,
    /// Only readings submitted by this staff member
    pub staff_id: Option<String>,
}

impl ReadingQuery {
    /// Query matching every reading
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for a single day
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Query for an inclusive date range
    pub fn between(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            from_date: Some(from_date),
            to_date: Some(to_date),
            ..Self::default()
        }
    }

    /// Restrict the query to one staff member
    pub fn for_staff(mut self, staff_id: impl Into<String>) -> Self {
        self.staff_id = Some(staff_id.into());
        self
    }

    /// Whether a reading satisfies every set filter
    pub fn matches(&self, reading: &ReadingRecord) -> bool {
        if self.date.is_some_and(|date| reading.date != date) {
            return false;
        }
        if self.from_date.is_some_and(|from| reading.date < from) {
            return false;
        }
        if self.to_date.is_some_and(|to| reading.date > to) {
            return false;
        }
        self.staff_id
            .as_deref()
            .is_none_or(|staff_id| reading.staff_id == staff_id)
    }
}

/// Storage abstraction for daily readings
///
/// Readings are always written whole: updates replace the stored record, there is
/// no field-level merge.
#[async_trait]
pub trait ReadingStorage: Send + Sync {
    /// Save a new reading
    async fn save_reading(&mut self, reading: &ReadingRecord) -> StationResult<()>;

    /// Get a reading by ID
    async fn get_reading(&self, reading_id: &str) -> StationResult<Option<ReadingRecord>>;

    /// Replace an existing reading
    async fn update_reading(&mut self, reading: &ReadingRecord) -> StationResult<()>;

    /// Delete a reading
    async fn delete_reading(&mut self, reading_id: &str) -> StationResult<()>;

    /// Find readings matching a query, newest date first
    async fn search_readings(&self, query: &ReadingQuery) -> StationResult<Vec<ReadingRecord>>;
}

/// Storage abstraction for the staff directory
#[async_trait]
pub trait StaffStorage: Send + Sync {
    /// Save a staff member
    async fn save_staff(&mut self, staff: &Staff) -> StationResult<()>;

    /// Get a staff member by ID
    async fn get_staff(&self, staff_id: &str) -> StationResult<Option<Staff>>;

    /// List all staff members
    async fn list_staff(&self) -> StationResult<Vec<Staff>>;

    /// Delete a staff member
    async fn delete_staff(&mut self, staff_id: &str) -> StationResult<()>;
}

/// Storage abstraction for the price registry
#[async_trait]
pub trait PriceStorage: Send + Sync {
    /// Current prices, if they were ever set
    async fn get_prices(&self) -> StationResult<Option<FuelPrices>>;

    /// Replace the current prices
    async fn save_prices(&mut self, prices: &FuelPrices) -> StationResult<()>;
}

/// Trait for implementing custom reading validation rules
pub trait ReadingValidator: Send + Sync {
    /// Validate a reading before it is saved or rewritten
    fn validate_reading(&self, reading: &ReadingRecord) -> StationResult<()>;
}

/// Trait for implementing custom staff validation rules
pub trait StaffValidator: Send + Sync {
    /// Validate a staff member before saving
    fn validate_staff(&self, staff: &Staff) -> StationResult<()>;
}

/// Default reading validator, only checks identifier presence
pub struct DefaultReadingValidator;

impl ReadingValidator for DefaultReadingValidator {
    fn validate_reading(&self, reading: &ReadingRecord) -> StationResult<()> {
        if reading.staff_id.trim().is_empty() {
            return Err(StationError::Validation(
                "Staff ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default staff validator with basic rules
pub struct DefaultStaffValidator;

impl StaffValidator for DefaultStaffValidator {
    fn validate_staff(&self, staff: &Staff) -> StationResult<()> {
        if staff.staff_id.trim().is_empty() {
            return Err(StationError::Validation(
                "Staff ID cannot be empty".to_string(),
            ));
        }

        if staff.name.trim().is_empty() {
            return Err(StationError::Validation(
                "Staff name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(date: NaiveDate, staff_id: &str) -> ReadingRecord {
        ReadingRecord::new(date, staff_id.to_string(), UnitPrices::default())
    }

    #[test]
    fn test_query_filters() {
        let d1 = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();

        assert!(ReadingQuery::all().matches(&reading(d1, "a")));
        assert!(ReadingQuery::on(d2).matches(&reading(d2, "a")));
        assert!(!ReadingQuery::on(d2).matches(&reading(d1, "a")));

        let range = ReadingQuery::between(d1, d2);
        assert!(range.matches(&reading(d1, "a")));
        assert!(range.matches(&reading(d2, "a")));
        assert!(!range.matches(&reading(d3, "a")));

        let staff = ReadingQuery::all().for_staff("b");
        assert!(staff.matches(&reading(d1, "b")));
        assert!(!staff.matches(&reading(d1, "a")));
    }

    #[test]
    fn test_default_validators() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(DefaultReadingValidator
            .validate_reading(&reading(date, "  "))
            .is_err());
        assert!(DefaultReadingValidator
            .validate_reading(&reading(date, "s1"))
            .is_ok());

        let nameless = Staff::new("s1".to_string(), "".to_string());
        assert!(DefaultStaffValidator.validate_staff(&nameless).is_err());
    }
}
