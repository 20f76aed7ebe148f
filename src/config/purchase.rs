//! Purchase rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ticketing::{PurchaseRules, DEFAULT_MAX_TICKETS_PER_PURCHASE};

/// Upper bound accepted for the per-purchase ticket cap.
const MAX_CONFIGURABLE_TICKETS: u32 = 1000;

/// Purchase configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PurchaseConfig {
    /// Maximum number of tickets, across all categories, in one purchase
    #[serde(default = "default_max_tickets_per_purchase")]
    pub max_tickets_per_purchase: u32,
}

impl PurchaseConfig {
    /// Validate purchase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_tickets_per_purchase == 0
            || self.max_tickets_per_purchase > MAX_CONFIGURABLE_TICKETS
        {
            return Err(ValidationError::InvalidTicketCap(self.max_tickets_per_purchase));
        }
        Ok(())
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: default_max_tickets_per_purchase(),
        }
    }
}

impl From<&PurchaseConfig> for PurchaseRules {
    fn from(config: &PurchaseConfig) -> Self {
        PurchaseRules::new(config.max_tickets_per_purchase)
    }
}

fn default_max_tickets_per_purchase() -> u32 {
    DEFAULT_MAX_TICKETS_PER_PURCHASE
}
