//! Reconciliation engine for daily readings
//!
//! Turns a reading's meter values, price snapshot, side sales, credit/debit lines and
//! counted cash into the amount the till should hold and the resulting excess or
//! shortage. The calculation is pure: no I/O, no hidden state, no rounding. Every
//! intermediate figure is kept on the result so it can be displayed and checked.

pub mod fuel;

pub use fuel::*;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Outcome of comparing counted cash with the required amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashStatus {
    /// Till holds more than accounted for
    Excess,
    /// Till holds less than accounted for
    Shot,
    /// Till matches exactly
    Balanced,
}

impl CashStatus {
    /// Classify a signed excess/shortage amount
    pub fn from_amount(excess_shot: &BigDecimal) -> Self {
        let zero = BigDecimal::from(0);
        if *excess_shot > zero {
            CashStatus::Excess
        } else if *excess_shot < zero {
            CashStatus::Shot
        } else {
            CashStatus::Balanced
        }
    }

    /// Heading shown next to the excess/shortage figure
    pub fn label(&self) -> &'static str {
        match self {
            CashStatus::Excess => "Excess",
            CashStatus::Shot => "Shot",
            CashStatus::Balanced => "Excess/Shot",
        }
    }
}

/// Every derived figure of a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub oil: FuelReconciliation,
    pub petrol: FuelReconciliation,
    pub diesel: FuelReconciliation,
    pub total_battery_water: BigDecimal,
    pub acid_water: BigDecimal,
    pub total_packed_oil: BigDecimal,
    pub total_credit: BigDecimal,
    pub total_debit: BigDecimal,
    /// Fuel money, debits, battery water, acid water and packed oil
    pub positives: BigDecimal,
    /// Test fuel money and credits
    pub negatives: BigDecimal,
    /// Money the till should contain
    pub final_result: BigDecimal,
    /// Cash physically counted
    pub total_denomination: BigDecimal,
    /// Counted cash minus required money
    pub excess_shot: BigDecimal,
    pub status: CashStatus,
}

impl Reconciliation {
    /// Breakdown of one fuel type
    pub fn fuel(&self, fuel: FuelType) -> &FuelReconciliation {
        match fuel {
            FuelType::Oil => &self.oil,
            FuelType::Petrol => &self.petrol,
            FuelType::Diesel => &self.diesel,
        }
    }

    /// Required money summed over all fuels
    pub fn total_fuel_money(&self) -> BigDecimal {
        &self.oil.required_money + &self.petrol.required_money + &self.diesel.required_money
    }

    /// Test money summed over petrol and diesel
    pub fn total_test_money(&self) -> BigDecimal {
        self.petrol.test_money_or_zero() + self.diesel.test_money_or_zero()
    }
}

/// Reconciliation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute every derived figure of a reading
    pub fn reconcile(&self, reading: &ReadingRecord) -> Reconciliation {
        let oil = FuelReconciliation::calculate(FuelType::Oil, reading);
        let petrol = FuelReconciliation::calculate(FuelType::Petrol, reading);
        let diesel = FuelReconciliation::calculate(FuelType::Diesel, reading);

        let total_battery_water = reading.battery_water.total();
        let acid_water = reading.acid_water.clone();
        let total_packed_oil = reading.total_packed_oil();
        let total_credit = reading.total_credit();
        let total_debit = reading.total_debit();

        let positives = &oil.required_money
            + &petrol.required_money
            + &diesel.required_money
            + &total_debit
            + &total_battery_water
            + &acid_water
            + &total_packed_oil;
        let negatives =
            petrol.test_money_or_zero() + diesel.test_money_or_zero() + &total_credit;
        let final_result = &positives - &negatives;

        let total_denomination = reading.denomination.total();
        let excess_shot = &total_denomination - &final_result;
        let status = CashStatus::from_amount(&excess_shot);

        Reconciliation {
            oil,
            petrol,
            diesel,
            total_battery_water,
            acid_water,
            total_packed_oil,
            total_credit,
            total_debit,
            positives,
            negatives,
            final_result,
            total_denomination,
            excess_shot,
            status,
        }
    }
}

/// Compute every derived figure of a reading with the default engine
pub fn reconcile(reading: &ReadingRecord) -> Reconciliation {
    ReconciliationEngine::new().reconcile(reading)
}
