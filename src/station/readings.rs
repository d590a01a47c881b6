//! Reading submission, editing and search

use tracing::{debug, info, warn};

use crate::traits::*;
use crate::types::*;

/// Reading manager for handling reading store operations
pub struct ReadingManager<S: ReadingStorage> {
    storage: S,
    validator: Box<dyn ReadingValidator>,
}

impl<S: ReadingStorage> ReadingManager<S> {
    /// Create a new reading manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultReadingValidator),
        }
    }

    /// Create a new reading manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn ReadingValidator>) -> Self {
        Self { storage, validator }
    }

    /// Save a new reading, assigning its ID and timestamps
    pub async fn submit(&mut self, mut reading: ReadingRecord) -> StationResult<ReadingRecord> {
        if let Err(e) = self.validator.validate_reading(&reading) {
            warn!(staff_id = %reading.staff_id, error = %e, "Rejected reading");
            return Err(e);
        }

        let now = chrono::Utc::now().naive_utc();
        reading.id = uuid::Uuid::new_v4().to_string();
        reading.created_at = now;
        reading.updated_at = now;

        self.storage.save_reading(&reading).await?;

        info!(
            reading_id = %reading.id,
            staff_id = %reading.staff_id,
            date = %reading.date,
            "Reading submitted"
        );
        Ok(reading)
    }

    /// Get a reading by ID
    pub async fn get(&self, reading_id: &str) -> StationResult<Option<ReadingRecord>> {
        debug!(reading_id, "Fetching reading");
        self.storage.get_reading(reading_id).await
    }

    /// Get a reading by ID, returning an error if not found
    pub async fn get_required(&self, reading_id: &str) -> StationResult<ReadingRecord> {
        if reading_id.trim().is_empty() {
            return Err(StationError::Validation(
                "Reading ID cannot be empty".to_string(),
            ));
        }
        self.storage
            .get_reading(reading_id)
            .await?
            .ok_or_else(|| StationError::ReadingNotFound(reading_id.to_string()))
    }

    /// Replace a stored reading with a complete new version
    ///
    /// The creation time of the stored reading is kept; everything else is taken
    /// from `reading`.
    pub async fn update(&mut self, mut reading: ReadingRecord) -> StationResult<ReadingRecord> {
        let existing = self.get_required(&reading.id).await?;

        if let Err(e) = self.validator.validate_reading(&reading) {
            warn!(reading_id = %reading.id, error = %e, "Rejected reading update");
            return Err(e);
        }

        reading.created_at = existing.created_at;
        reading.updated_at = chrono::Utc::now().naive_utc();

        self.storage.update_reading(&reading).await?;

        info!(reading_id = %reading.id, staff_id = %reading.staff_id, "Reading updated");
        Ok(reading)
    }

    /// Delete a reading
    pub async fn delete(&mut self, reading_id: &str) -> StationResult<()> {
        self.get_required(reading_id).await?;
        self.storage.delete_reading(reading_id).await?;

        info!(reading_id, "Reading deleted");
        Ok(())
    }

    /// Find readings by date and staff member, newest first
    pub async fn search(&self, query: &ReadingQuery) -> StationResult<Vec<ReadingRecord>> {
        let readings = self.storage.search_readings(query).await?;
        debug!(
            date = ?query.date,
            from_date = ?query.from_date,
            to_date = ?query.to_date,
            staff_id = ?query.staff_id,
            found = readings.len(),
            "Searched readings"
        );
        Ok(readings)
    }
}
