//! Price registry management

use tracing::{info, warn};

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::validate_prices;

/// Price manager for reading and changing the live fuel prices
pub struct PriceManager<S: PriceStorage> {
    storage: S,
}

impl<S: PriceStorage> PriceManager<S> {
    /// Create a new price manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current prices, if ever set
    pub async fn get(&self) -> StationResult<Option<FuelPrices>> {
        self.storage.get_prices().await
    }

    /// Current prices, returning an error if never set
    pub async fn current(&self) -> StationResult<FuelPrices> {
        self.storage
            .get_prices()
            .await?
            .ok_or(StationError::PricesNotSet)
    }

    /// Replace the current prices
    ///
    /// Saved readings carry their own price snapshot and are not touched.
    pub async fn update(&mut self, mut prices: FuelPrices) -> StationResult<FuelPrices> {
        if let Err(e) = validate_prices(&prices.petrol, &prices.diesel, &prices.oil) {
            warn!(error = %e, "Rejected price update");
            return Err(e);
        }

        prices.updated_at = chrono::Utc::now().naive_utc();
        self.storage.save_prices(&prices).await?;

        info!(
            petrol = %prices.petrol,
            diesel = %prices.diesel,
            oil = %prices.oil,
            "Fuel prices updated"
        );
        Ok(prices)
    }
}
