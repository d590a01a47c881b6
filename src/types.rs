//! Core types and data structures for the fuel station readings system

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Price per unit for each battery water size, in the same order as the counts
pub const BATTERY_WATER_PRICES: [u32; 3] = [30, 60, 150];

/// Face values of the notes counted in the till, largest first
pub const NOTE_FACE_VALUES: [u32; 7] = [500, 200, 100, 50, 20, 10, 5];

/// Number of pump heads (nozzles) per fuel type
pub const HEADS_PER_FUEL: usize = 3;

/// Fuel types sold at the station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FuelType {
    /// Loose oil, dispensed from a countdown meter
    Oil,
    /// Petrol, dispensed from a totalizer that counts up
    Petrol,
    /// Diesel, dispensed from a totalizer that counts up
    Diesel,
}

impl FuelType {
    /// All fuel types in display order
    pub const ALL: [FuelType; 3] = [FuelType::Oil, FuelType::Petrol, FuelType::Diesel];

    /// Returns the direction the meter for this fuel moves as fuel is dispensed
    /// Oil meters count down, petrol and diesel totalizers count up
    pub fn meter_direction(&self) -> MeterDirection {
        match self {
            FuelType::Oil => MeterDirection::CountDown,
            FuelType::Petrol | FuelType::Diesel => MeterDirection::CountUp,
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Oil => "Oil",
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
        }
    }
}

/// Direction a pump meter moves while dispensing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterDirection {
    /// Dispensed volume is opening minus closing
    CountDown,
    /// Dispensed volume is closing minus opening
    CountUp,
}

/// Opening and closing reading of one pump head
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterHead {
    /// Opening reading
    pub first: BigDecimal,
    /// Closing reading
    pub second: BigDecimal,
}

impl MeterHead {
    /// Create a new head reading
    pub fn new(first: BigDecimal, second: BigDecimal) -> Self {
        Self { first, second }
    }

    /// Signed volume dispensed through this head for the given meter direction
    pub fn difference(&self, direction: MeterDirection) -> BigDecimal {
        match direction {
            MeterDirection::CountDown => &self.first - &self.second,
            MeterDirection::CountUp => &self.second - &self.first,
        }
    }
}

/// The three head readings of one fuel type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelHeads {
    pub heads: [MeterHead; HEADS_PER_FUEL],
}

impl FuelHeads {
    /// Create from three head readings
    pub fn new(heads: [MeterHead; HEADS_PER_FUEL]) -> Self {
        Self { heads }
    }
}

/// Meter readings for every fuel type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadings {
    pub oil: FuelHeads,
    pub petrol: FuelHeads,
    pub diesel: FuelHeads,
}

impl MeterReadings {
    /// Head readings for a fuel type
    pub fn for_fuel(&self, fuel: FuelType) -> &FuelHeads {
        match fuel {
            FuelType::Oil => &self.oil,
            FuelType::Petrol => &self.petrol,
            FuelType::Diesel => &self.diesel,
        }
    }

    /// Mutable head readings for a fuel type
    pub fn for_fuel_mut(&mut self, fuel: FuelType) -> &mut FuelHeads {
        match fuel {
            FuelType::Oil => &mut self.oil,
            FuelType::Petrol => &mut self.petrol,
            FuelType::Diesel => &mut self.diesel,
        }
    }
}

/// Unit prices copied onto a reading when it is saved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrices {
    pub petrol: BigDecimal,
    pub diesel: BigDecimal,
    pub oil: BigDecimal,
}

impl UnitPrices {
    /// Create a new price snapshot
    pub fn new(petrol: BigDecimal, diesel: BigDecimal, oil: BigDecimal) -> Self {
        Self {
            petrol,
            diesel,
            oil,
        }
    }

    /// Unit price of a fuel type
    pub fn for_fuel(&self, fuel: FuelType) -> &BigDecimal {
        match fuel {
            FuelType::Oil => &self.oil,
            FuelType::Petrol => &self.petrol,
            FuelType::Diesel => &self.diesel,
        }
    }
}

/// Liters test-dispensed and not sold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuantities {
    pub petrol: BigDecimal,
    pub diesel: BigDecimal,
}

impl TestQuantities {
    /// Test quantity for a fuel type; oil has none
    pub fn for_fuel(&self, fuel: FuelType) -> Option<&BigDecimal> {
        match fuel {
            FuelType::Oil => None,
            FuelType::Petrol => Some(&self.petrol),
            FuelType::Diesel => Some(&self.diesel),
        }
    }
}

/// Battery water units sold at each fixed price point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryWater {
    pub count_30: BigDecimal,
    pub count_60: BigDecimal,
    pub count_150: BigDecimal,
}

impl BatteryWater {
    /// Total battery water sales
    pub fn total(&self) -> BigDecimal {
        [&self.count_30, &self.count_60, &self.count_150]
            .into_iter()
            .zip(BATTERY_WATER_PRICES)
            .map(|(count, price)| count * BigDecimal::from(price))
            .sum()
    }
}

/// Named amount in an open-ended list (packed oil, credit, debit)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: BigDecimal,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Sum of the amounts of a list of line items
pub fn line_item_total(items: &[LineItem]) -> BigDecimal {
    items.iter().map(|item| &item.amount).sum()
}

/// Physical cash counted in the till
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    pub note_500: BigDecimal,
    pub note_200: BigDecimal,
    pub note_100: BigDecimal,
    pub note_50: BigDecimal,
    pub note_20: BigDecimal,
    pub note_10: BigDecimal,
    pub note_5: BigDecimal,
    /// Coins are counted by value, not by piece
    pub coins: BigDecimal,
}

impl Denomination {
    /// Note counts in the same order as [`NOTE_FACE_VALUES`]
    pub fn note_counts(&self) -> [&BigDecimal; 7] {
        [
            &self.note_500,
            &self.note_200,
            &self.note_100,
            &self.note_50,
            &self.note_20,
            &self.note_10,
            &self.note_5,
        ]
    }

    /// Total cash value of notes and coins
    pub fn total(&self) -> BigDecimal {
        let notes: BigDecimal = self
            .note_counts()
            .into_iter()
            .zip(NOTE_FACE_VALUES)
            .map(|(count, face)| count * BigDecimal::from(face))
            .sum();
        notes + &self.coins
    }
}

/// One staff member's shift-end submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    /// Identifier assigned by the store on creation
    pub id: String,
    /// Day the reading belongs to
    pub date: NaiveDate,
    /// Staff member who submitted the reading
    pub staff_id: String,
    /// Prices in force when the reading was saved
    pub unit_prices: UnitPrices,
    pub meter_readings: MeterReadings,
    pub test_quantities: TestQuantities,
    pub battery_water: BatteryWater,
    pub acid_water: BigDecimal,
    pub packed_oil_entries: Vec<LineItem>,
    pub credit_entries: Vec<LineItem>,
    pub debit_entries: Vec<LineItem>,
    pub denomination: Denomination,
    /// When the reading was created
    pub created_at: NaiveDateTime,
    /// When the reading was last rewritten
    pub updated_at: NaiveDateTime,
}

impl ReadingRecord {
    /// Create an empty reading with every numeric field at zero
    pub fn new(date: NaiveDate, staff_id: String, unit_prices: UnitPrices) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(),
            date,
            staff_id,
            unit_prices,
            meter_readings: MeterReadings::default(),
            test_quantities: TestQuantities::default(),
            battery_water: BatteryWater::default(),
            acid_water: BigDecimal::from(0),
            packed_oil_entries: Vec::new(),
            credit_entries: Vec::new(),
            debit_entries: Vec::new(),
            denomination: Denomination::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set one head reading of a fuel type
    pub fn set_head(&mut self, fuel: FuelType, index: usize, head: MeterHead) {
        if let Some(slot) = self.meter_readings.for_fuel_mut(fuel).heads.get_mut(index) {
            *slot = head;
        }
    }

    /// Total of the credit entries
    pub fn total_credit(&self) -> BigDecimal {
        line_item_total(&self.credit_entries)
    }

    /// Total of the debit entries
    pub fn total_debit(&self) -> BigDecimal {
        line_item_total(&self.debit_entries)
    }

    /// Total of the packed oil entries
    pub fn total_packed_oil(&self) -> BigDecimal {
        line_item_total(&self.packed_oil_entries)
    }
}

/// Staff member who can submit readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Identifier chosen by the admin
    pub staff_id: String,
    /// Display name
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Staff {
    /// Create a new staff record
    pub fn new(staff_id: String, name: String) -> Self {
        Self {
            staff_id,
            name,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Current fuel prices held by the price registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPrices {
    pub petrol: BigDecimal,
    pub diesel: BigDecimal,
    pub oil: BigDecimal,
    pub updated_at: NaiveDateTime,
}

impl FuelPrices {
    /// Create a new price set
    pub fn new(petrol: BigDecimal, diesel: BigDecimal, oil: BigDecimal) -> Self {
        Self {
            petrol,
            diesel,
            oil,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Copy of the prices to store on a reading
    pub fn snapshot(&self) -> UnitPrices {
        UnitPrices::new(self.petrol.clone(), self.diesel.clone(), self.oil.clone())
    }
}

/// Errors that can occur in the station system
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: String, value: String },
    #[error("Reading not found: {0}")]
    ReadingNotFound(String),
    #[error("Staff not found: {0}")]
    StaffNotFound(String),
    #[error("Fuel prices have not been set")]
    PricesNotSet,
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for station operations
pub type StationResult<T> = Result<T, StationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_difference_follows_meter_direction() {
        let head = MeterHead::new(BigDecimal::from(50), BigDecimal::from(30));
        assert_eq!(
            head.difference(FuelType::Oil.meter_direction()),
            BigDecimal::from(20)
        );
        assert_eq!(
            head.difference(FuelType::Petrol.meter_direction()),
            BigDecimal::from(-20)
        );
        assert_eq!(
            head.difference(FuelType::Diesel.meter_direction()),
            BigDecimal::from(-20)
        );
    }

    #[test]
    fn test_battery_water_total() {
        let water = BatteryWater {
            count_30: BigDecimal::from(2),
            count_60: BigDecimal::from(1),
            count_150: BigDecimal::from(3),
        };
        assert_eq!(water.total(), BigDecimal::from(570));
    }

    #[test]
    fn test_denomination_total() {
        let cash = Denomination {
            note_500: BigDecimal::from(2),
            note_200: BigDecimal::from(1),
            note_100: BigDecimal::from(3),
            note_50: BigDecimal::from(1),
            note_20: BigDecimal::from(2),
            note_10: BigDecimal::from(1),
            note_5: BigDecimal::from(1),
            coins: "7.5".parse().unwrap(),
        };
        assert_eq!(cash.total(), "1612.5".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_empty_line_items_total_zero() {
        assert_eq!(line_item_total(&[]), BigDecimal::from(0));
    }

    #[test]
    fn test_set_head_ignores_out_of_range_index() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut record = ReadingRecord::new(date, "s1".to_string(), UnitPrices::default());
        record.set_head(
            FuelType::Petrol,
            1,
            MeterHead::new(BigDecimal::from(1), BigDecimal::from(4)),
        );
        record.set_head(
            FuelType::Petrol,
            3,
            MeterHead::new(BigDecimal::from(9), BigDecimal::from(9)),
        );
        assert_eq!(
            record.meter_readings.petrol.heads[1].second,
            BigDecimal::from(4)
        );
        assert_eq!(record.meter_readings.petrol.heads[2], MeterHead::default());
    }
}
