const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;

/// maps an arbitrary longitude/latitude pair into the `(-180, 180]` range.
///
/// both values are wrapped into `[0, 360)` (a floored modulus, so the result
/// is never negative) and then folded back across 180. latitude goes through
/// the same transform as longitude, so a latitude of 100 stays 100 and a
/// latitude of 190 becomes -170.
///
/// # Arguments
///
/// * `lon` - longitude in degrees, unbounded
/// * `lat` - latitude in degrees, unbounded
///
/// # Returns
///
/// * the normalized `(lon, lat)` pair
pub fn normalize_coordinate(lon: f64, lat: f64) -> (f64, f64) {
    (
        fold_degrees(lon.rem_euclid(FULL_TURN)),
        fold_degrees(lat.rem_euclid(FULL_TURN)),
    )
}

/// folds a value lying within one turn of the canonical range back into
/// `[-180, 180]`.
pub fn fold_degrees(value: f64) -> f64 {
    if value > HALF_TURN {
        -HALF_TURN + (value - HALF_TURN)
    } else if value < -HALF_TURN {
        HALF_TURN + (value + HALF_TURN)
    } else {
        value
    }
}
