//! Recommendation engine
//!
//! Combines the reference-table lookup and weather data into a
//! recommendation, then renders the advisory message. Assembly is
//! all-or-nothing: no partial recommendation is ever returned.

use std::sync::Arc;

use shared::{
    recommended_fertilizers, render_farmer_message, Recommendation, ReferenceTable,
    WeatherSnapshot,
};

use crate::error::{AppError, AppResult};
use crate::external::weather::{Location, WeatherClient};

/// Inputs to a recommendation request
#[derive(Debug, Clone)]
pub struct RecommendInput {
    pub soil_type: String,
    pub crop_type: String,
    pub land_size_m2: f64,
    pub fallow_years: u32,
    pub use_my_location: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub manual_location: Option<String>,
}

/// How weather is resolved for a request, decided once up front
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSelector {
    UseCoordinates { lat: f64, lon: f64 },
    UseNamedPlace(String),
    UseDefaults,
}

impl LocationSelector {
    /// Resolve the selector from the request inputs.
    ///
    /// Live weather requires a configured credential; coordinates take
    /// precedence over a manual place name when both are usable. Anything
    /// else falls back to the fixed default conditions.
    pub fn resolve(
        has_credential: bool,
        use_my_location: bool,
        lat: Option<f64>,
        lon: Option<f64>,
        manual_location: Option<&str>,
    ) -> Self {
        if !has_credential {
            return LocationSelector::UseDefaults;
        }

        if use_my_location {
            if let (Some(lat), Some(lon)) = (lat, lon) {
                return LocationSelector::UseCoordinates { lat, lon };
            }
        }

        if let Some(name) = manual_location {
            let name = name.trim();
            if !name.is_empty() {
                return LocationSelector::UseNamedPlace(name.to_string());
            }
        }

        LocationSelector::UseDefaults
    }
}

/// Recommendation service, constructed per request from shared state
#[derive(Clone)]
pub struct RecommendationService {
    reference: Arc<ReferenceTable>,
    weather_client: Option<WeatherClient>,
}

impl RecommendationService {
    /// Create a service without live weather; every request uses the fixed
    /// default conditions
    pub fn new(reference: Arc<ReferenceTable>) -> Self {
        Self {
            reference,
            weather_client: None,
        }
    }

    /// Create a service with a weather API client
    pub fn with_client(reference: Arc<ReferenceTable>, weather_client: WeatherClient) -> Self {
        Self {
            reference,
            weather_client: Some(weather_client),
        }
    }

    /// Produce a recommendation for the given inputs.
    ///
    /// Fails with [`AppError::NoData`] when no reference row matches and with
    /// [`AppError::WeatherUnavailable`] when a live fetch comes back with an
    /// error status.
    pub async fn recommend(&self, input: RecommendInput) -> AppResult<Recommendation> {
        let entry = self
            .reference
            .lookup(&input.soil_type, &input.crop_type)
            .ok_or(AppError::NoData)?;

        let selector = LocationSelector::resolve(
            self.weather_client.is_some(),
            input.use_my_location,
            input.lat,
            input.lon,
            input.manual_location.as_deref(),
        );

        let weather = match selector {
            LocationSelector::UseDefaults => WeatherSnapshot::default_conditions(),
            LocationSelector::UseCoordinates { lat, lon } => {
                self.weather_client()?
                    .fetch(&Location::Coordinates { lat, lon })
                    .await
            }
            LocationSelector::UseNamedPlace(name) => {
                self.weather_client()?
                    .fetch(&Location::NamedPlace(name))
                    .await
            }
        };

        if !weather.is_ok() {
            let message = weather
                .message
                .unwrap_or_else(|| "Weather data unavailable".to_string());
            return Err(AppError::WeatherUnavailable(message));
        }

        let mut recommendation = Recommendation {
            fertilizers: recommended_fertilizers(entry),
            land_size_m2: input.land_size_m2,
            fallow_years: input.fallow_years,
            weather,
            farmer_message: None,
        };
        recommendation.farmer_message = Some(render_farmer_message(&recommendation));

        Ok(recommendation)
    }

    fn weather_client(&self) -> AppResult<&WeatherClient> {
        self.weather_client
            .as_ref()
            .ok_or_else(|| AppError::Configuration("Weather API client not configured".to_string()))
    }
}
