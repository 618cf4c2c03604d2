use time::OffsetDateTime;
use tracing::{info, warn};

use super::model::{AlertConfig, ConditionType, NewAlert};
use crate::error::StoreError;
use crate::quote_source::QuoteSource;
use crate::store::JsonStore;
use crate::ValidationError;

/// Ordered alert collection, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBook {
    alerts: Vec<AlertConfig>,
}

impl AlertBook {
    pub fn new(alerts: Vec<AlertConfig>) -> Self {
        Self { alerts }
    }

    pub fn load(store: &JsonStore<AlertConfig>) -> Result<Self, StoreError> {
        store.load().map(Self::new)
    }

    pub fn save(&self, store: &JsonStore<AlertConfig>) -> Result<(), StoreError> {
        store.save(&self.alerts)
    }

    pub fn list(&self) -> &[AlertConfig] {
        &self.alerts
    }

    pub fn active(&self) -> impl Iterator<Item = &AlertConfig> {
        self.alerts.iter().filter(|alert| alert.is_active)
    }

    pub fn get(&self, id: &str) -> Result<&AlertConfig, ValidationError> {
        self.alerts
            .iter()
            .find(|alert| alert.id == id)
            .ok_or_else(|| unknown(id))
    }

    pub fn add(&mut self, alert: AlertConfig) {
        self.alerts.insert(0, alert);
    }

    /// Flip `is_active` and return the updated alert.
    pub fn toggle(&mut self, id: &str) -> Result<&AlertConfig, ValidationError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or_else(|| unknown(id))?;
        alert.is_active = !alert.is_active;
        Ok(alert)
    }

    pub fn remove(&mut self, id: &str) -> Result<AlertConfig, ValidationError> {
        let index = self
            .alerts
            .iter()
            .position(|alert| alert.id == id)
            .ok_or_else(|| unknown(id))?;
        Ok(self.alerts.remove(index))
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

fn unknown(id: &str) -> ValidationError {
    ValidationError::UnknownAlert { id: id.to_owned() }
}

/// Validate `new` and build the stored alert.
///
/// Price-target alerts record the asset's current price as a reference. A
/// failed lookup is logged and leaves `original_price` empty; it never
/// blocks alert creation.
pub async fn create_alert(
    source: &dyn QuoteSource,
    new: NewAlert,
) -> Result<AlertConfig, ValidationError> {
    new.validate()?;

    let original_price = if new.condition_type == ConditionType::PriceTarget {
        match source.fetch_quote(new.asset.trim()).await {
            Ok(fetched) => Some(fetched.quote.price),
            Err(error) => {
                warn!(
                    asset = %new.asset,
                    code = error.code(),
                    "could not fetch current price for alert: {error}"
                );
                None
            }
        }
    } else {
        None
    };

    let alert = AlertConfig::create(new, original_price, OffsetDateTime::now_utc())?;
    info!(id = %alert.id, asset = %alert.asset, "alert created");
    Ok(alert)
}
