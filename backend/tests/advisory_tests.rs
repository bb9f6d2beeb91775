//! Advisory message rendering tests
//!
//! The renderer is a pure function of the recommendation, so message content
//! is asserted directly without the server.

use proptest::prelude::*;

use shared::{
    render_farmer_message, Fertilizer, Recommendation, WeatherSnapshot,
};

fn recommendation(weather: WeatherSnapshot) -> Recommendation {
    Recommendation {
        fertilizers: vec![],
        land_size_m2: 500.0,
        fallow_years: 1,
        weather,
        farmer_message: None,
    }
}

fn weather(rainfall: f64, wind_speed: f64, soil_temperature: f64, soil_moisture: f64) -> WeatherSnapshot {
    let mut snap = WeatherSnapshot::default_conditions();
    snap.rainfall = rainfall;
    snap.wind_speed = wind_speed;
    snap.soil_temperature = soil_temperature;
    snap.soil_moisture = soil_moisture;
    snap
}

// ============================================================================
// Unit Tests
// ============================================================================

mod unit_tests {
    use super::*;

    #[test]
    fn heavy_rain_wins_over_other_rain_lines() {
        let msg = render_farmer_message(&recommendation(weather(12.0, 2.0, 23.0, 50.0)));
        assert!(msg.contains("Heavy rain warning!"));
        assert!(!msg.contains("Rain expected."));
        assert!(!msg.contains("Dry conditions."));
    }

    #[test]
    fn moderate_rain_delays_fertilizer() {
        let msg = render_farmer_message(&recommendation(weather(7.0, 2.0, 23.0, 50.0)));
        assert!(msg.contains("Rain expected.** Delay fertilizer application."));
    }

    #[test]
    fn low_rain_reports_dry_conditions() {
        let msg = render_farmer_message(&recommendation(weather(0.0, 2.0, 23.0, 50.0)));
        assert!(msg.contains("Dry conditions.** Water crops if needed."));
    }

    #[test]
    fn wind_lines_follow_thresholds() {
        let strong = render_farmer_message(&recommendation(weather(0.0, 9.0, 23.0, 50.0)));
        assert!(strong.contains("Strong winds!** No spraying today."));

        let breezy = render_farmer_message(&recommendation(weather(0.0, 6.0, 23.0, 50.0)));
        assert!(breezy.contains("Breezy conditions.** Spray carefully."));
        assert!(!breezy.contains("Strong winds!"));

        let calm = render_farmer_message(&recommendation(weather(0.0, 4.0, 23.0, 50.0)));
        assert!(!calm.contains("winds"));
        assert!(!calm.contains("Breezy"));
    }

    #[test]
    fn soil_temperature_notices() {
        let cold = render_farmer_message(&recommendation(weather(0.0, 2.0, 12.0, 50.0)));
        assert!(cold.contains("Cold soil.** Delay planting warm-season crops."));

        let hot = render_farmer_message(&recommendation(weather(0.0, 2.0, 32.0, 50.0)));
        assert!(hot.contains("Hot soil.** Water deeply in early morning."));

        let mild = render_farmer_message(&recommendation(weather(0.0, 2.0, 23.0, 50.0)));
        assert!(!mild.contains("Cold soil."));
        assert!(!mild.contains("Hot soil."));
    }

    #[test]
    fn soil_moisture_notices() {
        let wet = render_farmer_message(&recommendation(weather(0.0, 2.0, 23.0, 90.0)));
        assert!(wet.contains("Waterlogged soil.** Improve drainage."));

        let dry = render_farmer_message(&recommendation(weather(0.0, 2.0, 23.0, 30.0)));
        assert!(dry.contains("Dry soil.** Irrigate soon."));
    }

    #[test]
    fn normal_soil_substitutes_single_line() {
        let msg = render_farmer_message(&recommendation(weather(0.0, 2.0, 23.0, 50.0)));
        assert!(msg.contains("✅ Soil conditions normal"));
    }

    #[test]
    fn fertilizer_section_lists_each_in_order() {
        let mut rec = recommendation(WeatherSnapshot::default_conditions());
        rec.fertilizers = vec![
            Fertilizer::Urea,
            Fertilizer::SingleSuperPhosphate,
            Fertilizer::MuriateOfPotash,
        ];
        let msg = render_farmer_message(&rec);

        let urea = msg.find("Apply Urea").unwrap();
        let ssp = msg.find("Apply SSP").unwrap();
        let mop = msg.find("Apply MOP").unwrap();
        assert!(urea < ssp && ssp < mop);
        assert!(!msg.contains("No fertilizers needed now"));
    }

    #[test]
    fn empty_fertilizer_list_substitutes_line() {
        let msg = render_farmer_message(&recommendation(WeatherSnapshot::default_conditions()));
        assert!(msg.contains("✅ No fertilizers needed now"));
    }

    #[test]
    fn fallow_notice_threshold() {
        let mut rec = recommendation(WeatherSnapshot::default_conditions());

        rec.fallow_years = 2;
        let long = render_farmer_message(&rec);
        assert!(long.contains("Long fallow period!** Plant green manure crops."));

        rec.fallow_years = 1;
        let short = render_farmer_message(&rec);
        assert!(short.contains("No critical issues detected"));
        assert!(!short.contains("Long fallow period!"));
    }

    #[test]
    fn sections_appear_in_template_order() {
        let msg = render_farmer_message(&recommendation(WeatherSnapshot::default_conditions()));

        let field = msg.find("**FIELD CONDITIONS:**").unwrap();
        let alerts = msg.find("**WEATHER ALERTS:**").unwrap();
        let soil = msg.find("**SOIL CARE:**").unwrap();
        let plan = msg.find("**FERTILIZER PLAN:**").unwrap();
        let notes = msg.find("**SPECIAL NOTES:**").unwrap();

        assert!(field < alerts && alerts < soil && soil < plan && plan < notes);
    }

    #[test]
    fn field_conditions_echo_inputs() {
        let msg = render_farmer_message(&recommendation(WeatherSnapshot::default_conditions()));
        assert!(msg.contains("- Land: 500m² | Fallow: 1 year(s)"));
        assert!(msg.contains("- Soil Temp: 23°C | Moisture: 50%"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    fn rainfall_strategy() -> impl Strategy<Value = f64> {
        0.0..50.0f64
    }

    fn wind_strategy() -> impl Strategy<Value = f64> {
        0.0..30.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Exactly one rainfall line appears; heavy rain excludes the dry
        /// conditions line
        #[test]
        fn prop_one_rainfall_line(rainfall in rainfall_strategy()) {
            let msg = render_farmer_message(&recommendation(weather(rainfall, 2.0, 23.0, 50.0)));

            let lines = [
                "Heavy rain warning!",
                "Rain expected.",
                "Dry conditions.",
            ];
            let count = lines.iter().filter(|l| msg.contains(*l)).count();
            prop_assert_eq!(count, 1);

            if rainfall > 10.0 {
                prop_assert!(msg.contains("Heavy rain warning!"));
                prop_assert!(!msg.contains("Dry conditions."));
            }
        }

        /// At most one wind advisory line
        #[test]
        fn prop_at_most_one_wind_line(wind in wind_strategy()) {
            let msg = render_farmer_message(&recommendation(weather(0.0, wind, 23.0, 50.0)));

            let strong = msg.contains("Strong winds!");
            let breezy = msg.contains("Breezy conditions.");
            prop_assert!(!(strong && breezy));

            if wind <= 5.0 {
                prop_assert!(!strong && !breezy);
            }
        }

        /// The renderer is deterministic
        #[test]
        fn prop_render_is_deterministic(
            rainfall in rainfall_strategy(),
            wind in wind_strategy()
        ) {
            let rec = recommendation(weather(rainfall, wind, 23.0, 50.0));
            prop_assert_eq!(render_farmer_message(&rec), render_farmer_message(&rec));
        }
    }
}
