//! Farmer advisory message renderer
//!
//! A pure function over the assembled recommendation; the HTTP layer is not
//! involved, so message content can be unit tested directly.

use crate::models::{Fertilizer, Recommendation};

/// Render the advisory message for a recommendation.
///
/// The template is fixed: field conditions header, then weather alerts, soil
/// care, fertilizer plan, and special notes, in that order. Each rule
/// category is evaluated independently against the embedded weather snapshot
/// and fertilizer list.
pub fn render_farmer_message(recommendation: &Recommendation) -> String {
    let weather = &recommendation.weather;

    // Weather alerts: exactly one rainfall line (first match wins), at most
    // one wind line
    let mut weather_advice = Vec::new();
    if weather.rainfall > 10.0 {
        weather_advice.push("🚨 **Heavy rain warning!** Avoid all field work today.".to_string());
    } else if weather.rainfall > 5.0 {
        weather_advice.push("🌧️ **Rain expected.** Delay fertilizer application.".to_string());
    } else {
        weather_advice.push("☀️ **Dry conditions.** Water crops if needed.".to_string());
    }

    if weather.wind_speed > 8.0 {
        weather_advice.push("💨 **Strong winds!** No spraying today.".to_string());
    } else if weather.wind_speed > 5.0 {
        weather_advice.push("🌬️ **Breezy conditions.** Spray carefully.".to_string());
    }

    // Soil care: temperature and moisture checks are independent
    let mut soil_advice = Vec::new();
    if weather.soil_temperature < 15.0 {
        soil_advice.push("❄️ **Cold soil.** Delay planting warm-season crops.".to_string());
    } else if weather.soil_temperature > 30.0 {
        soil_advice.push("🔥 **Hot soil.** Water deeply in early morning.".to_string());
    }

    if weather.soil_moisture > 85.0 {
        soil_advice.push("💧 **Waterlogged soil.** Improve drainage.".to_string());
    } else if weather.soil_moisture < 40.0 {
        soil_advice.push("🏜️ **Dry soil.** Irrigate soon.".to_string());
    }

    // Fertilizer plan: one line per fertilizer, in list order
    let fert_advice: Vec<String> = recommendation
        .fertilizers
        .iter()
        .map(|f| fertilizer_line(*f).to_string())
        .collect();

    let fallow_msg = if recommendation.fallow_years >= 2 {
        "⚠️ **Long fallow period!** Plant green manure crops."
    } else {
        "No critical issues detected"
    };

    format!(
        "🌱 **FARMER ADVISORY** 🌱\n\
         ========================\n\
         **FIELD CONDITIONS:**\n\
         - Land: {}m² | Fallow: {} year(s)\n\
         - Soil Temp: {}°C | Moisture: {}%\n\
         \n\
         **WEATHER ALERTS:**\n\
         {}\n\
         \n\
         **SOIL CARE:**\n\
         {}\n\
         \n\
         **FERTILIZER PLAN:**\n\
         {}\n\
         \n\
         **SPECIAL NOTES:**\n\
         {}",
        recommendation.land_size_m2,
        recommendation.fallow_years,
        weather.soil_temperature,
        weather.soil_moisture,
        weather_advice.join("\n"),
        join_or(&soil_advice, "✅ Soil conditions normal"),
        join_or(&fert_advice, "✅ No fertilizers needed now"),
        fallow_msg,
    )
}

fn fertilizer_line(fertilizer: Fertilizer) -> &'static str {
    match fertilizer {
        Fertilizer::Urea => "🔵 **Apply Urea** (140kg/acre for nitrogen)",
        Fertilizer::SingleSuperPhosphate => "🟢 **Apply SSP** (50kg/acre for phosphorus)",
        Fertilizer::MuriateOfPotash => "🟣 **Apply MOP** (40kg/acre for potassium)",
    }
}

fn join_or(lines: &[String], fallback: &str) -> String {
    if lines.is_empty() {
        fallback.to_string()
    } else {
        lines.join("\n")
    }
}
