//! Credit and debit summaries across readings

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::*;

/// Credit and debit lines recorded on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCreditDebit {
    pub date: NaiveDate,
    pub credits: Vec<LineItem>,
    pub debits: Vec<LineItem>,
}

/// Credit and debit lines of a period, grouped by day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditDebitSummary {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub staff_id: Option<String>,
    /// Newest day first
    pub days: Vec<DailyCreditDebit>,
    pub total_credit: BigDecimal,
    pub total_debit: BigDecimal,
    /// Total credit minus total debit
    pub net_amount: BigDecimal,
}

impl CreditDebitSummary {
    /// Build a summary from readings already filtered to the period
    ///
    /// Zero-amount lines (untouched default names) are left out of the daily lists, and
    /// days left with no lines at all are dropped.
    pub fn from_readings(
        from_date: NaiveDate,
        to_date: NaiveDate,
        staff_id: Option<String>,
        readings: &[ReadingRecord],
    ) -> Self {
        let zero = BigDecimal::from(0);
        let mut by_date: BTreeMap<NaiveDate, DailyCreditDebit> = BTreeMap::new();

        for reading in readings {
            let day = by_date
                .entry(reading.date)
                .or_insert_with(|| DailyCreditDebit {
                    date: reading.date,
                    credits: Vec::new(),
                    debits: Vec::new(),
                });
            day.credits.extend(
                reading
                    .credit_entries
                    .iter()
                    .filter(|item| item.amount != zero)
                    .cloned(),
            );
            day.debits.extend(
                reading
                    .debit_entries
                    .iter()
                    .filter(|item| item.amount != zero)
                    .cloned(),
            );
        }

        let days: Vec<DailyCreditDebit> = by_date
            .into_values()
            .rev()
            .filter(|day| !day.credits.is_empty() || !day.debits.is_empty())
            .collect();
        let total_credit: BigDecimal = days
            .iter()
            .map(|day| line_item_total(&day.credits))
            .sum();
        let total_debit: BigDecimal = days.iter().map(|day| line_item_total(&day.debits)).sum();
        let net_amount = &total_credit - &total_debit;

        Self {
            from_date,
            to_date,
            staff_id,
            days,
            total_credit,
            total_debit,
            net_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(day: u32, credits: &[(&str, i64)], debits: &[(&str, i64)]) -> ReadingRecord {
        let mut reading = ReadingRecord::new(
            NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
            "s1".to_string(),
            UnitPrices::default(),
        );
        reading.credit_entries = credits
            .iter()
            .map(|(name, amount)| LineItem::new(*name, BigDecimal::from(*amount)))
            .collect();
        reading.debit_entries = debits
            .iter()
            .map(|(name, amount)| LineItem::new(*name, BigDecimal::from(*amount)))
            .collect();
        reading
    }

    #[test]
    fn test_groups_by_day_newest_first() {
        let readings = vec![
            reading(1, &[("GPAY", 200), ("CARD", 0)], &[("VIKASH", 50)]),
            reading(3, &[("CARD", 120)], &[]),
            reading(1, &[("UNISAT", 30)], &[]),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();

        let summary = CreditDebitSummary::from_readings(from, to, None, &readings);

        assert_eq!(summary.days.len(), 2);
        assert_eq!(summary.days[0].date, NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());
        assert_eq!(summary.days[1].credits.len(), 2);
        assert_eq!(summary.total_credit, BigDecimal::from(350));
        assert_eq!(summary.total_debit, BigDecimal::from(50));
        assert_eq!(summary.net_amount, BigDecimal::from(300));
    }

    #[test]
    fn test_days_with_only_zero_lines_are_dropped() {
        let readings = vec![
            reading(2, &[("GPAY", 0), ("CARD", 0)], &[("VIKASH", 0)]),
            reading(4, &[], &[("KAVALAKKAD", 75)]),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();

        let summary = CreditDebitSummary::from_readings(from, to, None, &readings);

        assert_eq!(summary.days.len(), 1);
        assert_eq!(summary.days[0].date, NaiveDate::from_ymd_opt(2024, 11, 4).unwrap());
        assert!(summary.days[0].credits.is_empty());
        assert_eq!(summary.total_debit, BigDecimal::from(75));
        assert_eq!(summary.net_amount, BigDecimal::from(-75));
    }

    #[test]
    fn test_empty_period() {
        let day = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let summary = CreditDebitSummary::from_readings(day, day, Some("s9".to_string()), &[]);
        assert!(summary.days.is_empty());
        assert_eq!(summary.net_amount, BigDecimal::from(0));
    }
}
