/// round `value` to `places` decimal places, half away from zero
///
/// every monetary and rate rounding in the crate goes through this helper so
/// intermediate precision stays identical across calculation stages.
pub fn round_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
