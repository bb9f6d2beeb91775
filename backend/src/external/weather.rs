//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather API and normalizes the
//! response into a [`WeatherSnapshot`]. Provider-side failures never surface
//! as errors here; they are encoded in the snapshot's `status` and `message`
//! fields, and the recommendation engine decides how to fail the request.

use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use shared::WeatherSnapshot;

/// Distinct location keys kept in the memoization cache
const CACHE_CAPACITY: u64 = 100;

/// Location identifier for a weather fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinates { lat: f64, lon: f64 },
    NamedPlace(String),
}

impl Location {
    /// Memoization key; coordinate and place-name keys cannot collide
    fn cache_key(&self) -> String {
        match self {
            Location::Coordinates { lat, lon } => format!("{},{}", lat, lon),
            Location::NamedPlace(name) => format!("q:{}", name),
        }
    }
}

#[derive(Error, Debug)]
enum FetchError {
    #[error("Weather API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather API error: {status} - {body}")]
    Status { status: u16, body: String },
}

/// OpenWeatherMap current-weather response, reduced to the fields we use
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    wind: OwmWind,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

/// Weather API client with a bounded, process-wide memoization cache.
///
/// The cache holds up to [`CACHE_CAPACITY`] distinct location keys and has no
/// TTL; staleness is an accepted trade-off of the reference behavior. Only
/// successful snapshots are cached, so a transient provider failure does not
/// pin an error for the lifetime of the process.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Cache<String, WeatherSnapshot>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URL (configuration and
    /// tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            cache: Cache::new(CACHE_CAPACITY),
        }
    }

    /// Fetch current conditions for a location.
    ///
    /// Served from the memoization cache when the identical location key was
    /// fetched before; a duplicate fetch on a cache race is acceptable.
    pub async fn fetch(&self, location: &Location) -> WeatherSnapshot {
        let key = location.cache_key();

        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(location = %key, "weather cache hit");
            return hit;
        }

        match self.fetch_remote(location).await {
            Ok(snapshot) => {
                self.cache.insert(key, snapshot.clone()).await;
                snapshot
            }
            Err(err) => {
                tracing::warn!(location = %key, error = %err, "weather fetch failed");
                WeatherSnapshot::failed(err.to_string())
            }
        }
    }

    async fn fetch_remote(&self, location: &Location) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/weather", self.base_url);

        let mut query: Vec<(&str, String)> = match location {
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
            Location::NamedPlace(name) => vec![("q", name.clone())],
        };
        query.push(("appid", self.api_key.clone()));
        query.push(("units", "metric".to_string()));

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let data: OwmCurrentResponse = response.json().await?;

        let rainfall = data.rain.and_then(|r| r.one_hour).unwrap_or(0.0);
        Ok(WeatherSnapshot::from_observation(
            data.main.temp,
            rainfall,
            data.main.humidity,
            data.wind.speed,
        ))
    }
}
