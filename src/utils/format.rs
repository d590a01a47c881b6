//! Display formatting for amounts and reconciliation figures

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::reconciliation::{FuelReconciliation, Reconciliation};

/// Format an amount with exactly two fractional digits, rounding half up
///
/// Zero and amounts that round to zero print as `0.00`, never `-0.00`.
pub fn format_amount(amount: &BigDecimal) -> String {
    let rounded = amount.with_scale_round(2, RoundingMode::HalfUp).with_scale(2);
    let (mantissa, _) = rounded.as_bigint_and_exponent();

    let digits = format!("{:0>3}", mantissa.magnitude().to_string());
    let (whole, cents) = digits.split_at(digits.len() - 2);
    let sign = if rounded < BigDecimal::from(0) { "-" } else { "" };
    format!("{}{}.{}", sign, whole, cents)
}

/// Format an amount prefixed with a currency symbol
pub fn format_currency(symbol: &str, amount: &BigDecimal) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Per-fuel figures ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelReport {
    pub fuel: String,
    pub unit_price: String,
    pub head_differences: Vec<String>,
    pub total_difference: String,
    pub required_money: String,
    pub test_money: Option<String>,
}

impl From<&FuelReconciliation> for FuelReport {
    fn from(fuel: &FuelReconciliation) -> Self {
        Self {
            fuel: fuel.fuel.label().to_string(),
            unit_price: format_amount(&fuel.unit_price),
            head_differences: fuel.head_differences.iter().map(format_amount).collect(),
            total_difference: format_amount(&fuel.total_difference),
            required_money: format_amount(&fuel.required_money),
            test_money: fuel.test_money.as_ref().map(format_amount),
        }
    }
}

/// Every reconciliation figure formatted for the entry preview and the read-only view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    pub fuels: Vec<FuelReport>,
    pub total_battery_water: String,
    pub acid_water: String,
    pub total_packed_oil: String,
    pub total_credit: String,
    pub total_debit: String,
    pub final_result: String,
    pub total_denomination: String,
    pub excess_shot: String,
    /// "Excess", "Shot" or the neutral "Excess/Shot"
    pub status: String,
}

impl From<&Reconciliation> for ReconciliationReport {
    fn from(result: &Reconciliation) -> Self {
        Self {
            fuels: [&result.oil, &result.petrol, &result.diesel]
                .into_iter()
                .map(FuelReport::from)
                .collect(),
            total_battery_water: format_amount(&result.total_battery_water),
            acid_water: format_amount(&result.acid_water),
            total_packed_oil: format_amount(&result.total_packed_oil),
            total_credit: format_amount(&result.total_credit),
            total_debit: format_amount(&result.total_debit),
            final_result: format_amount(&result.final_result),
            total_denomination: format_amount(&result.total_denomination),
            excess_shot: format_amount(&result.excess_shot),
            status: result.status.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::reconcile;
    use crate::types::*;
    use chrono::NaiveDate;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_format_amount_two_places() {
        assert_eq!(format_amount(&dec("3350")), "3350.00");
        assert_eq!(format_amount(&dec("0.61407")), "0.61");
        assert_eq!(format_amount(&dec("2.005")), "2.01");
        assert_eq!(format_amount(&dec("-3350")), "-3350.00");
        assert_eq!(format_amount(&dec("12.5")), "12.50");
        assert_eq!(format_amount(&dec("0.05")), "0.05");
        assert_eq!(format_amount(&dec("-0.5")), "-0.50");
    }

    #[test]
    fn test_format_amount_zero_keeps_two_places() {
        assert_eq!(format_amount(&BigDecimal::from(0)), "0.00");
        assert_eq!(format_amount(&dec("0")), "0.00");
        assert_eq!(format_amount(&dec("0.001")), "0.00");
        assert_eq!(format_amount(&dec("-0.004")), "0.00");
        assert_eq!(format_amount(&dec("1e-7")), "0.00");
        assert_eq!(format_amount(&dec("5.001")), "5.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", &dec("95.25")), "₹95.25");
    }

    #[test]
    fn test_report_formats_every_figure() {
        let mut reading = ReadingRecord::new(
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            "s1".to_string(),
            UnitPrices::new(dec("104.5"), dec("95.25"), dec("120")),
        );
        reading.set_head(
            FuelType::Diesel,
            0,
            MeterHead::new(dec("10"), dec("12.333")),
        );

        let report = ReconciliationReport::from(&reconcile(&reading));
        assert_eq!(report.fuels.len(), 3);
        assert_eq!(report.fuels[0].fuel, "Oil");
        assert_eq!(report.fuels[0].test_money, None);
        assert_eq!(report.fuels[2].total_difference, "2.33");
        // 2.333 * 95.25 = 222.21825
        assert_eq!(report.fuels[2].required_money, "222.22");
        assert_eq!(report.fuels[2].test_money.as_deref(), Some("0.00"));
        assert_eq!(report.final_result, "222.22");
        assert_eq!(report.excess_shot, "-222.22");
        assert_eq!(report.status, "Shot");
    }

    #[test]
    fn test_report_for_balanced_and_blank_readings() {
        let mut reading = ReadingRecord::new(
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            "s1".to_string(),
            UnitPrices::new(dec("100"), dec("0"), dec("0")),
        );

        let blank = ReconciliationReport::from(&reconcile(&reading));
        assert_eq!(blank.acid_water, "0.00");
        assert_eq!(blank.total_credit, "0.00");
        assert_eq!(blank.total_debit, "0.00");
        assert_eq!(blank.total_denomination, "0.00");
        assert_eq!(blank.final_result, "0.00");

        reading.set_head(FuelType::Petrol, 0, MeterHead::new(dec("0"), dec("6")));
        reading.denomination.note_500 = dec("1");
        reading.denomination.note_100 = dec("1");

        let report = ReconciliationReport::from(&reconcile(&reading));
        assert_eq!(report.final_result, "600.00");
        assert_eq!(report.total_denomination, "600.00");
        assert_eq!(report.excess_shot, "0.00");
        assert_eq!(report.status, "Excess/Shot");
    }
}
