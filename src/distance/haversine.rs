//! Great-circle distance via the haversine formula.
//!
//! # Algorithm
//!
//! For two points at latitudes φ1, φ2 and longitude difference Δλ:
//!
//! ```text
//! a = sin²(Δφ/2) + cos(φ1) · cos(φ2) · sin²(Δλ/2)
//! d = 2R · atan2(√a, √(1-a))
//! ```
//!
//! with R = 3959 miles (mean Earth radius). This is an idealized
//! great-circle model, not a substitute for road-network routing.

use crate::models::Coordinate;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two coordinates, in miles.
///
/// Pure and symmetric: `haversine(a, b) == haversine(b, a)`, and
/// `haversine(a, a) == 0`. Non-finite input propagates NaN rather than
/// failing; callers that need strict validation should check
/// [`Coordinate::is_finite`] first.
///
/// # Examples
///
/// ```
/// use dayroute::distance::haversine;
/// use dayroute::models::Coordinate;
///
/// let orlando = Coordinate::new(28.5383, -81.3792);
/// let winter_park = Coordinate::new(28.6000, -81.3392);
/// let d = haversine(orlando, winter_park);
/// assert!(d > 4.0 && d < 6.0);
/// assert_eq!(haversine(orlando, orlando), 0.0);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_MILES * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
