//! Request validation helpers for the Fertilizer Advisory Service

/// Validate the coordinate pair supplied with `use_my_location`.
///
/// Latitude and longitude are required together; supplying exactly one is a
/// client error. Supplying neither is allowed — the engine falls back to a
/// manual location or default conditions.
pub fn validate_coordinate_pair(
    use_my_location: bool,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<(), &'static str> {
    if use_my_location && lat.is_some() != lon.is_some() {
        return Err("lat and lon must be supplied together when use_my_location is set");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_pair_required_together() {
        assert!(validate_coordinate_pair(true, Some(18.79), Some(98.98)).is_ok());
        assert!(validate_coordinate_pair(true, None, None).is_ok());
        assert!(validate_coordinate_pair(true, Some(18.79), None).is_err());
        assert!(validate_coordinate_pair(true, None, Some(98.98)).is_err());
        // Without the flag the pair is ignored
        assert!(validate_coordinate_pair(false, Some(18.79), None).is_ok());
    }
}
