//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is not negative
pub fn validate_non_negative(field: &str, amount: &BigDecimal) -> StationResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(StationError::Validation(format!("{} cannot be negative", field)))
    } else {
        Ok(())
    }
}

/// Validate that a staff ID is valid
pub fn validate_staff_id(staff_id: &str) -> StationResult<()> {
    if staff_id.trim().is_empty() {
        return Err(StationError::Validation(
            "Staff ID cannot be empty".to_string(),
        ));
    }

    if staff_id.len() > 50 {
        return Err(StationError::Validation(
            "Staff ID cannot exceed 50 characters".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, dashes, underscores)
    if !staff_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StationError::Validation(
            "Staff ID can only contain alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate that a staff name is valid
pub fn validate_staff_name(name: &str) -> StationResult<()> {
    if name.trim().is_empty() {
        return Err(StationError::Validation(
            "Staff name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(StationError::Validation(
            "Staff name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that all prices are non-negative
pub fn validate_prices(
    petrol: &BigDecimal,
    diesel: &BigDecimal,
    oil: &BigDecimal,
) -> StationResult<()> {
    validate_non_negative("Petrol price", petrol)?;
    validate_non_negative("Diesel price", diesel)?;
    validate_non_negative("Oil price", oil)
}

/// Reading validator that also rejects negative readings, quantities and counts
///
/// Line item amounts are left alone: they are free-form adjustments.
pub struct EnhancedReadingValidator;

impl ReadingValidator for EnhancedReadingValidator {
    fn validate_reading(&self, reading: &ReadingRecord) -> StationResult<()> {
        DefaultReadingValidator.validate_reading(reading)?;

        let prices = &reading.unit_prices;
        validate_prices(&prices.petrol, &prices.diesel, &prices.oil)?;

        for fuel in FuelType::ALL {
            for (index, head) in reading.meter_readings.for_fuel(fuel).heads.iter().enumerate() {
                let label = format!("{} head {} reading", fuel.label(), index + 1);
                validate_non_negative(&label, &head.first)?;
                validate_non_negative(&label, &head.second)?;
            }
        }

        validate_non_negative("Petrol test quantity", &reading.test_quantities.petrol)?;
        validate_non_negative("Diesel test quantity", &reading.test_quantities.diesel)?;

        let water = &reading.battery_water;
        validate_non_negative("Battery water count", &water.count_30)?;
        validate_non_negative("Battery water count", &water.count_60)?;
        validate_non_negative("Battery water count", &water.count_150)?;
        validate_non_negative("Acid water", &reading.acid_water)?;

        for count in reading.denomination.note_counts() {
            validate_non_negative("Note count", count)?;
        }
        validate_non_negative("Coins", &reading.denomination.coins)?;

        Ok(())
    }
}

/// Staff validator with identifier format checks
pub struct EnhancedStaffValidator;

impl StaffValidator for EnhancedStaffValidator {
    fn validate_staff(&self, staff: &Staff) -> StationResult<()> {
        validate_staff_id(&staff.staff_id)?;
        validate_staff_name(&staff.name)?;
        Ok(())
    }
}
