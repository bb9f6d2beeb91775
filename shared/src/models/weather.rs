//! Weather snapshot model
//!
//! The provider gives no direct soil sensor readings, so soil temperature and
//! moisture are heuristic proxies derived from air temperature and humidity.

use serde::{Deserialize, Serialize};

/// Outcome of a weather fetch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherStatus {
    Ok,
    Error,
}

/// Normalized current conditions for a location, created fresh per request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub status: WeatherStatus,
    pub temperature: f64,
    /// Rainfall in the last hour (mm), 0 when the provider omits it
    pub rainfall: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub soil_temperature: f64,
    pub soil_moisture: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Soil temperature proxy, floored at a realistic 10°C
pub fn derive_soil_temperature(temperature: f64) -> f64 {
    (temperature - 2.0).max(10.0)
}

/// Soil moisture proxy, capped at 100%
pub fn derive_soil_moisture(humidity: f64) -> f64 {
    (humidity + 10.0).min(100.0)
}

impl WeatherSnapshot {
    /// Build an `ok` snapshot from provider observations, deriving the soil
    /// proxies
    pub fn from_observation(
        temperature: f64,
        rainfall: f64,
        humidity: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            status: WeatherStatus::Ok,
            temperature,
            rainfall,
            humidity,
            wind_speed,
            soil_temperature: derive_soil_temperature(temperature),
            soil_moisture: derive_soil_moisture(humidity),
            message: None,
        }
    }

    /// Snapshot encoding a provider-side failure; callers must check `status`
    /// before using the other fields
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: WeatherStatus::Error,
            temperature: 0.0,
            rainfall: 0.0,
            humidity: 0.0,
            wind_speed: 0.0,
            soil_temperature: 0.0,
            soil_moisture: 0.0,
            message: Some(message.into()),
        }
    }

    /// Fixed conditions used when live weather is disabled or no location is
    /// resolvable
    pub fn default_conditions() -> Self {
        Self {
            status: WeatherStatus::Ok,
            temperature: 25.0,
            rainfall: 0.0,
            humidity: 60.0,
            wind_speed: 2.0,
            soil_temperature: 23.0,
            soil_moisture: 50.0,
            message: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == WeatherStatus::Ok
    }
}
