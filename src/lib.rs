//! # Fuel Station Core
//!
//! Daily reading reconciliation for a fuel station, with the staff directory and
//! price registry it depends on.
//!
//! ## Features
//!
//! - **Meter reconciliation**: Per-head meter differences turned into required money at
//!   the price snapshot stored with each reading
//! - **Cash counting**: Note and coin denominations compared with the required money to
//!   report an excess or shortage
//! - **Side sales and accounts**: Battery water, acid water, packed oil, credit and debit lines
//! - **Form entry**: Lenient normalization of raw form input into readings
//! - **Staff and prices**: Staff directory and the live fuel price registry
//! - **Storage abstraction**: Database-agnostic design with trait-based storage
//!
//! ## Quick Start
//!
//! ```rust
//! use fuel_station_core::{reconcile, FuelType, MeterHead, ReadingRecord, UnitPrices};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let prices = UnitPrices::new(BigDecimal::from(90), BigDecimal::from(80), BigDecimal::from(100));
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut reading = ReadingRecord::new(date, "EMP01".to_string(), prices);
//! reading.set_head(FuelType::Oil, 0, MeterHead::new(BigDecimal::from(50), BigDecimal::from(30)));
//!
//! let result = reconcile(&reading);
//! assert_eq!(result.final_result, BigDecimal::from(2000));
//! ```

pub mod config;
pub mod entry;
pub mod reconciliation;
pub mod station;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use entry::*;
pub use reconciliation::*;
pub use station::*;
pub use traits::*;
pub use types::*;
