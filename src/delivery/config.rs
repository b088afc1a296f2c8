//! Delivery configuration.
//!
//! Values are read from environment variables once, validated, and then
//! passed to the services that need them.
//!
//! # Example
//!
//! ```rust,ignore
//! use presence::delivery::{DeliveryConfig, DeliveryHandler};
//!
//! let config = DeliveryConfig::from_env()?;
//! let handler = DeliveryHandler::from_config(&config);
//! ```

use std::env;

use super::error::ConfigError;

/// Environment variable holding the courier weight limit in kilograms.
pub const COURIER_MAX_WEIGHT_KEY: &str = "PRESENCE_COURIER_MAX_WEIGHT_KG";

/// Environment variable holding the sender address for emailed products.
pub const EMAIL_SENDER_KEY: &str = "PRESENCE_EMAIL_SENDER";

const DEFAULT_COURIER_MAX_WEIGHT_KG: f64 = 30.0;
const DEFAULT_EMAIL_SENDER: &str = "deliveries@example.com";

/// Settings for the delivery services.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryConfig {
    /// Heaviest parcel the courier accepts, in kilograms.
    pub courier_max_weight_kg: f64,
    /// Address digital products are sent from.
    pub email_sender: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            courier_max_weight_kg: DEFAULT_COURIER_MAX_WEIGHT_KG,
            email_sender: DEFAULT_EMAIL_SENDER.to_string(),
        }
    }
}

impl DeliveryConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PRESENCE_COURIER_MAX_WEIGHT_KG`: Courier limit (optional, default: 30.0)
    /// - `PRESENCE_EMAIL_SENDER`: Sender address (optional, default: "deliveries@example.com")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the weight limit is not a
    /// positive number or the sender address is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let courier_max_weight_kg = lookup(COURIER_MAX_WEIGHT_KEY)
            .map(|raw| parse_weight_limit(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_COURIER_MAX_WEIGHT_KG);

        let email_sender = match lookup(EMAIL_SENDER_KEY) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: EMAIL_SENDER_KEY.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_EMAIL_SENDER.to_string(),
        };

        tracing::debug!(courier_max_weight_kg, %email_sender, "delivery configuration loaded");
        Ok(Self {
            courier_max_weight_kg,
            email_sender,
        })
    }
}

fn parse_weight_limit(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: COURIER_MAX_WEIGHT_KEY.to_string(),
        message,
    };

    let limit = raw
        .trim()
        .parse::<f64>()
        .map_err(|error| invalid(format!("{error}")))?;

    if limit.is_finite() && limit > 0.0 {
        Ok(limit)
    } else {
        Err(invalid(format!("{limit} is not a positive weight")))
    }
}
