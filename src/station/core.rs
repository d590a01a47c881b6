//! Main station orchestrator that coordinates readings, staff and prices

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::StationConfig;
use crate::entry::{PriceForm, ReadingForm};
use crate::reconciliation::{Reconciliation, ReconciliationEngine};
use crate::station::{CreditDebitSummary, PriceManager, ReadingManager, StaffManager};
use crate::traits::*;
use crate::types::*;
use crate::utils::format::{format_currency, ReconciliationReport};

/// Main station system that orchestrates all daily reading operations
pub struct Station<S: ReadingStorage + StaffStorage + PriceStorage> {
    reading_manager: ReadingManager<S>,
    staff_manager: StaffManager<S>,
    price_manager: PriceManager<S>,
    engine: ReconciliationEngine,
    config: StationConfig,
}

impl<S: ReadingStorage + StaffStorage + PriceStorage + Clone> Station<S> {
    /// Create a new station with the given storage backend
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StationConfig::default())
    }

    /// Create a new station with custom configuration
    pub fn with_config(storage: S, config: StationConfig) -> Self {
        Self {
            reading_manager: ReadingManager::new(storage.clone()),
            staff_manager: StaffManager::new(storage.clone()),
            price_manager: PriceManager::new(storage),
            engine: ReconciliationEngine::new(),
            config,
        }
    }

    /// Create a new station with custom validators
    pub fn with_validators(
        storage: S,
        config: StationConfig,
        reading_validator: Box<dyn ReadingValidator>,
        staff_validator: Box<dyn StaffValidator>,
    ) -> Self {
        Self {
            reading_manager: ReadingManager::with_validator(storage.clone(), reading_validator),
            staff_manager: StaffManager::with_validator(storage.clone(), staff_validator),
            price_manager: PriceManager::new(storage),
            engine: ReconciliationEngine::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    // Staff operations
    /// Add a staff member
    pub async fn add_staff(&mut self, staff_id: String, name: String) -> StationResult<Staff> {
        self.staff_manager.add(staff_id, name).await
    }

    /// Get a staff member by ID
    pub async fn get_staff(&self, staff_id: &str) -> StationResult<Option<Staff>> {
        self.staff_manager.get(staff_id).await
    }

    /// List all staff members
    pub async fn list_staff(&self) -> StationResult<Vec<Staff>> {
        self.staff_manager.list().await
    }

    /// Delete a staff member
    pub async fn delete_staff(&mut self, staff_id: &str) -> StationResult<()> {
        self.staff_manager.delete(staff_id).await
    }

    // Price operations
    /// Current fuel prices
    pub async fn current_prices(&self) -> StationResult<FuelPrices> {
        self.price_manager.current().await
    }

    /// Change the fuel prices
    pub async fn update_prices(
        &mut self,
        petrol: BigDecimal,
        diesel: BigDecimal,
        oil: BigDecimal,
    ) -> StationResult<FuelPrices> {
        self.price_manager
            .update(FuelPrices::new(petrol, diesel, oil))
            .await
    }

    /// Change the fuel prices from the price form
    pub async fn update_prices_from_form(&mut self, form: &PriceForm) -> StationResult<FuelPrices> {
        let prices = form.to_prices()?;
        self.price_manager.update(prices).await
    }

    // Reading operations
    /// Blank reading for a staff member, with the current price snapshot and the
    /// configured default credit and debit lines
    pub async fn new_reading(
        &self,
        date: NaiveDate,
        staff_id: String,
    ) -> StationResult<ReadingRecord> {
        let prices = self.price_manager.current().await?;
        let mut reading = ReadingRecord::new(date, staff_id, prices.snapshot());

        let zero_lines = |names: &[String]| -> Vec<LineItem> {
            names
                .iter()
                .map(|name| LineItem::new(name.clone(), BigDecimal::from(0)))
                .collect()
        };
        reading.credit_entries = zero_lines(&self.config.default_credit_names);
        reading.debit_entries = zero_lines(&self.config.default_debit_names);

        Ok(reading)
    }

    /// Submit a new reading for an existing staff member
    pub async fn submit_reading(&mut self, reading: ReadingRecord) -> StationResult<ReadingRecord> {
        self.ensure_staff(&reading.staff_id).await?;
        self.reading_manager.submit(reading).await
    }

    /// Save a reading form; a form carrying an ID replaces that reading
    pub async fn submit_form(&mut self, form: &ReadingForm) -> StationResult<ReadingRecord> {
        let reading = form.to_record()?;
        if reading.id.is_empty() {
            self.submit_reading(reading).await
        } else {
            self.update_reading(reading).await
        }
    }

    /// Get a reading by ID
    pub async fn get_reading(&self, reading_id: &str) -> StationResult<Option<ReadingRecord>> {
        self.reading_manager.get(reading_id).await
    }

    /// Rewrite a reading with a complete new version
    pub async fn update_reading(&mut self, reading: ReadingRecord) -> StationResult<ReadingRecord> {
        self.ensure_staff(&reading.staff_id).await?;
        self.reading_manager.update(reading).await
    }

    /// Delete a reading
    pub async fn delete_reading(&mut self, reading_id: &str) -> StationResult<()> {
        self.reading_manager.delete(reading_id).await
    }

    /// Search readings by date and staff member
    pub async fn search_readings(&self, query: &ReadingQuery) -> StationResult<Vec<ReadingRecord>> {
        self.reading_manager.search(query).await
    }

    // Reconciliation
    /// Reconcile a reading that has not been saved yet
    pub fn preview(&self, reading: &ReadingRecord) -> Reconciliation {
        self.engine.reconcile(reading)
    }

    /// Reconcile a stored reading using the prices saved with it
    pub async fn reconcile_reading(&self, reading_id: &str) -> StationResult<Reconciliation> {
        let reading = self.reading_manager.get_required(reading_id).await?;
        Ok(self.engine.reconcile(&reading))
    }

    /// Formatted reconciliation of a stored reading
    pub async fn reconciliation_report(
        &self,
        reading_id: &str,
    ) -> StationResult<ReconciliationReport> {
        let result = self.reconcile_reading(reading_id).await?;
        Ok(ReconciliationReport::from(&result))
    }

    /// Amount formatted with the configured currency symbol
    pub fn format_money(&self, amount: &BigDecimal) -> String {
        format_currency(&self.config.currency_symbol, amount)
    }

    /// Credit and debit lines of a period grouped by day, optionally for one staff member
    pub async fn credit_debit_summary(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
        staff_id: Option<String>,
    ) -> StationResult<CreditDebitSummary> {
        if from_date > to_date {
            return Err(StationError::Validation(format!(
                "From date {} is after to date {}",
                from_date, to_date
            )));
        }

        let mut query = ReadingQuery::between(from_date, to_date);
        query.staff_id = staff_id.clone();
        let readings = self.reading_manager.search(&query).await?;

        debug!(readings = readings.len(), "Building credit/debit summary");
        Ok(CreditDebitSummary::from_readings(
            from_date, to_date, staff_id, &readings,
        ))
    }

    async fn ensure_staff(&self, staff_id: &str) -> StationResult<()> {
        if self.staff_manager.get(staff_id).await?.is_none() {
            warn!(staff_id, "Reading refers to unknown staff");
            return Err(StationError::StaffNotFound(staff_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::CashStatus;
    use crate::utils::memory_storage::MemoryStorage;

    #[tokio::test]
    async fn test_station_basic_operations() {
        let storage = MemoryStorage::new();
        let mut station = Station::new(storage);

        station
            .add_staff("EMP01".to_string(), "Anu".to_string())
            .await
            .unwrap();
        station
            .update_prices(
                BigDecimal::from(90),
                BigDecimal::from(80),
                BigDecimal::from(100),
            )
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut reading = station
            .new_reading(date, "EMP01".to_string())
            .await
            .unwrap();
        assert_eq!(reading.credit_entries.len(), 7);
        assert_eq!(reading.unit_prices.oil, BigDecimal::from(100));

        reading.set_head(
            FuelType::Oil,
            0,
            MeterHead::new(BigDecimal::from(50), BigDecimal::from(30)),
        );
        reading.set_head(
            FuelType::Petrol,
            0,
            MeterHead::new(BigDecimal::from(10), BigDecimal::from(25)),
        );

        let preview = station.preview(&reading);
        let saved = station.submit_reading(reading).await.unwrap();
        assert!(!saved.id.is_empty());

        let result = station.reconcile_reading(&saved.id).await.unwrap();
        assert_eq!(result, preview);
        assert_eq!(result.final_result, BigDecimal::from(3350));
        assert_eq!(result.status, CashStatus::Shot);

        let report = station.reconciliation_report(&saved.id).await.unwrap();
        assert_eq!(report.excess_shot, "-3350.00");
        assert_eq!(station.format_money(&result.final_result), "₹3350.00");
    }

    #[tokio::test]
    async fn test_balanced_reading_report() {
        let mut station = Station::new(MemoryStorage::new());
        station
            .add_staff("EMP01".to_string(), "Anu".to_string())
            .await
            .unwrap();
        station
            .update_prices(
                BigDecimal::from(100),
                BigDecimal::from(0),
                BigDecimal::from(0),
            )
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut reading = station
            .new_reading(date, "EMP01".to_string())
            .await
            .unwrap();
        reading.set_head(
            FuelType::Petrol,
            0,
            MeterHead::new(BigDecimal::from(0), BigDecimal::from(6)),
        );
        reading.denomination.note_500 = BigDecimal::from(1);
        reading.denomination.note_100 = BigDecimal::from(1);
        let saved = station.submit_reading(reading).await.unwrap();

        let report = station.reconciliation_report(&saved.id).await.unwrap();
        assert_eq!(report.status, "Excess/Shot");
        assert_eq!(report.excess_shot, "0.00");
        assert_eq!(report.total_credit, "0.00");
        assert_eq!(
            station.format_money(&BigDecimal::from(0)),
            format!("{}0.00", station.config().currency_symbol)
        );
    }

    #[tokio::test]
    async fn test_new_reading_requires_prices() {
        let station = Station::new(MemoryStorage::new());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            station.new_reading(date, "EMP01".to_string()).await,
            Err(StationError::PricesNotSet)
        ));
    }
}
