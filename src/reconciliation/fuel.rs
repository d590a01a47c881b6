//! Per-fuel volume and money calculation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Volume and money breakdown for one fuel type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelReconciliation {
    pub fuel: FuelType,
    /// Unit price taken from the reading's price snapshot
    pub unit_price: BigDecimal,
    /// Signed volume through each head
    pub head_differences: [BigDecimal; HEADS_PER_FUEL],
    /// Sum of the head differences
    pub total_difference: BigDecimal,
    /// Total difference times unit price
    pub required_money: BigDecimal,
    /// Liters test-dispensed, `None` for oil
    pub test_quantity: Option<BigDecimal>,
    /// Test quantity times unit price, `None` for oil
    pub test_money: Option<BigDecimal>,
}

impl FuelReconciliation {
    /// Compute the breakdown of one fuel type from a reading
    pub fn calculate(fuel: FuelType, reading: &ReadingRecord) -> Self {
        let direction = fuel.meter_direction();
        let unit_price = reading.unit_prices.for_fuel(fuel).clone();

        let heads = &reading.meter_readings.for_fuel(fuel).heads;
        let head_differences = [
            heads[0].difference(direction),
            heads[1].difference(direction),
            heads[2].difference(direction),
        ];

        let total_difference: BigDecimal = head_differences.iter().sum();
        let required_money = &total_difference * &unit_price;

        let test_quantity = reading.test_quantities.for_fuel(fuel).cloned();
        let test_money = test_quantity
            .as_ref()
            .map(|quantity| quantity * &unit_price);

        Self {
            fuel,
            unit_price,
            head_differences,
            total_difference,
            required_money,
            test_quantity,
            test_money,
        }
    }

    /// Test money, or zero for fuels without a test quantity
    pub fn test_money_or_zero(&self) -> BigDecimal {
        self.test_money
            .clone()
            .unwrap_or_else(|| BigDecimal::from(0))
    }
}
