//! HTTP handler for the fertilizer recommendation endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::{validate_coordinate_pair, Recommendation};

use crate::error::{AppError, AppResult};
use crate::services::recommendation::{RecommendInput, RecommendationService};
use crate::AppState;

/// Query parameters for `GET /api/recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Type of soil
    pub soil_type: String,
    /// Type of crop
    pub crop_type: String,
    /// Land size in square meters
    pub land_size: f64,
    /// Number of years the land has been fallow
    pub fallow_years: u32,
    /// Use location coordinates
    #[serde(default)]
    pub use_my_location: bool,
    /// Latitude (if use_my_location is true)
    pub lat: Option<f64>,
    /// Longitude (if use_my_location is true)
    pub lon: Option<f64>,
    /// Location name (if not using coordinates)
    pub manual_location: Option<String>,
}

/// Produce a fertilizer recommendation with an attached farmer advisory
pub async fn get_recommendation(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<Recommendation>> {
    validate_coordinate_pair(query.use_my_location, query.lat, query.lon)
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let service = match &state.weather_client {
        Some(client) => {
            RecommendationService::with_client(state.reference.clone(), client.clone())
        }
        None => RecommendationService::new(state.reference.clone()),
    };

    let recommendation = service
        .recommend(RecommendInput {
            soil_type: query.soil_type,
            crop_type: query.crop_type,
            land_size_m2: query.land_size,
            fallow_years: query.fallow_years,
            use_my_location: query.use_my_location,
            lat: query.lat,
            lon: query.lon,
            manual_location: query.manual_location,
        })
        .await?;

    Ok(Json(recommendation))
}
