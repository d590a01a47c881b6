//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    readings: Arc<RwLock<HashMap<String, ReadingRecord>>>,
    staff: Arc<RwLock<HashMap<String, Staff>>>,
    prices: Arc<RwLock<Option<FuelPrices>>>,
}

fn read<T>(lock: &Arc<RwLock<T>>) -> StationResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| StationError::Storage(format!("lock poisoned: {}", e)))
}

fn write<T>(lock: &Arc<RwLock<T>>) -> StationResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| StationError::Storage(format!("lock poisoned: {}", e)))
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            readings: Arc::new(RwLock::new(HashMap::new())),
            staff: Arc::new(RwLock::new(HashMap::new())),
            prices: Arc::new(RwLock::new(None)),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> StationResult<()> {
        write(&self.readings)?.clear();
        write(&self.staff)?.clear();
        *write(&self.prices)? = None;
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingStorage for MemoryStorage {
    async fn save_reading(&mut self, reading: &ReadingRecord) -> StationResult<()> {
        write(&self.readings)?.insert(reading.id.clone(), reading.clone());
        Ok(())
    }

    async fn get_reading(&self, reading_id: &str) -> StationResult<Option<ReadingRecord>> {
        Ok(read(&self.readings)?.get(reading_id).cloned())
    }

    async fn update_reading(&mut self, reading: &ReadingRecord) -> StationResult<()> {
        let mut readings = write(&self.readings)?;
        match readings.get_mut(&reading.id) {
            Some(stored) => {
                *stored = reading.clone();
                Ok(())
            }
            None => Err(StationError::ReadingNotFound(reading.id.clone())),
        }
    }

    async fn delete_reading(&mut self, reading_id: &str) -> StationResult<()> {
        if write(&self.readings)?.remove(reading_id).is_some() {
            Ok(())
        } else {
            Err(StationError::ReadingNotFound(reading_id.to_string()))
        }
    }

    async fn search_readings(&self, query: &ReadingQuery) -> StationResult<Vec<ReadingRecord>> {
        let readings = read(&self.readings)?;
        let mut found: Vec<ReadingRecord> = readings
            .values()
            .filter(|reading| query.matches(reading))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(found)
    }
}

#[async_trait]
impl StaffStorage for MemoryStorage {
    async fn save_staff(&mut self, staff: &Staff) -> StationResult<()> {
        write(&self.staff)?.insert(staff.staff_id.clone(), staff.clone());
        Ok(())
    }

    async fn get_staff(&self, staff_id: &str) -> StationResult<Option<Staff>> {
        Ok(read(&self.staff)?.get(staff_id).cloned())
    }

    async fn list_staff(&self) -> StationResult<Vec<Staff>> {
        let mut staff: Vec<Staff> = read(&self.staff)?.values().cloned().collect();
        staff.sort_by(|a, b| a.staff_id.cmp(&b.staff_id));
        Ok(staff)
    }

    async fn delete_staff(&mut self, staff_id: &str) -> StationResult<()> {
        if write(&self.staff)?.remove(staff_id).is_some() {
            Ok(())
        } else {
            Err(StationError::StaffNotFound(staff_id.to_string()))
        }
    }
}

#[async_trait]
impl PriceStorage for MemoryStorage {
    async fn get_prices(&self) -> StationResult<Option<FuelPrices>> {
        Ok(read(&self.prices)?.clone())
    }

    async fn save_prices(&mut self, prices: &FuelPrices) -> StationResult<()> {
        *write(&self.prices)? = Some(prices.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn reading(id: &str, day: u32, staff_id: &str) -> ReadingRecord {
        let mut reading = ReadingRecord::new(
            NaiveDate::from_ymd_opt(2024, 10, day).unwrap(),
            staff_id.to_string(),
            UnitPrices::default(),
        );
        reading.id = id.to_string();
        reading
    }

    #[tokio::test]
    async fn test_search_orders_newest_first() {
        let mut storage = MemoryStorage::new();
        storage.save_reading(&reading("a", 1, "s1")).await.unwrap();
        storage.save_reading(&reading("b", 3, "s2")).await.unwrap();
        storage.save_reading(&reading("c", 2, "s1")).await.unwrap();

        let all = storage.search_readings(&ReadingQuery::all()).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        let s1 = storage
            .search_readings(&ReadingQuery::all().for_staff("s1"))
            .await
            .unwrap();
        assert_eq!(s1.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_reading() {
        let mut storage = MemoryStorage::new();
        assert!(matches!(
            storage.update_reading(&reading("x", 1, "s1")).await,
            Err(StationError::ReadingNotFound(_))
        ));
        assert!(matches!(
            storage.delete_reading("x").await,
            Err(StationError::ReadingNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_prices_and_clear() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get_prices().await.unwrap().is_none());

        let prices = FuelPrices::new(
            BigDecimal::from(100),
            BigDecimal::from(90),
            BigDecimal::from(120),
        );
        storage.save_prices(&prices).await.unwrap();
        assert_eq!(storage.get_prices().await.unwrap(), Some(prices));

        storage
            .save_staff(&Staff::new("s1".to_string(), "Anu".to_string()))
            .await
            .unwrap();
        storage.clear().unwrap();
        assert!(storage.get_prices().await.unwrap().is_none());
        assert!(storage.list_staff().await.unwrap().is_empty());
    }
}
