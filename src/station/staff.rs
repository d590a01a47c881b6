//! Staff directory management

use tracing::{debug, info, warn};

use crate::traits::*;
use crate::types::*;

/// Staff manager for handling staff directory operations
pub struct StaffManager<S: StaffStorage> {
    pub(crate) storage: S,
    validator: Box<dyn StaffValidator>,
}

impl<S: StaffStorage> StaffManager<S> {
    /// Create a new staff manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultStaffValidator),
        }
    }

    /// Create a new staff manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn StaffValidator>) -> Self {
        Self { storage, validator }
    }

    /// Add a staff member
    pub async fn add(&mut self, staff_id: String, name: String) -> StationResult<Staff> {
        let staff = Staff::new(staff_id.trim().to_string(), name.trim().to_string());

        self.validator.validate_staff(&staff)?;

        // Check if staff member already exists
        if self.storage.get_staff(&staff.staff_id).await?.is_some() {
            warn!(staff_id = %staff.staff_id, "Duplicate staff ID");
            return Err(StationError::Validation(format!(
                "Staff with ID '{}' already exists",
                staff.staff_id
            )));
        }

        self.storage.save_staff(&staff).await?;

        info!(staff_id = %staff.staff_id, "Staff member added");
        Ok(staff)
    }

    /// Get a staff member by ID
    pub async fn get(&self, staff_id: &str) -> StationResult<Option<Staff>> {
        self.storage.get_staff(staff_id).await
    }

    /// Get a staff member by ID, returning an error if not found
    pub async fn get_required(&self, staff_id: &str) -> StationResult<Staff> {
        self.storage
            .get_staff(staff_id)
            .await?
            .ok_or_else(|| StationError::StaffNotFound(staff_id.to_string()))
    }

    /// List all staff members ordered by ID
    pub async fn list(&self) -> StationResult<Vec<Staff>> {
        let staff = self.storage.list_staff().await?;
        debug!(count = staff.len(), "Listed staff");
        Ok(staff)
    }

    /// Delete a staff member; their readings are kept
    pub async fn delete(&mut self, staff_id: &str) -> StationResult<()> {
        self.get_required(staff_id).await?;
        self.storage.delete_staff(staff_id).await?;

        info!(staff_id, "Staff member deleted");
        Ok(())
    }
}
