//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// Fallback location substituted when a job has missing or unparseable
/// geocoding (downtown Orlando).
pub const DEFAULT_COORDINATE: Coordinate = Coordinate {
    lat: 28.5383,
    lng: -81.3792,
};

/// A WGS84 coordinate in decimal degrees.
///
/// Construction performs no range validation; callers that need strict
/// input checking should use [`Coordinate::is_finite`] before feeding
/// coordinates into the distance model, since NaN propagates through
/// distance computations rather than failing.
///
/// # Examples
///
/// ```
/// use dayroute::models::Coordinate;
///
/// let c = Coordinate::new(28.5383, -81.3792);
/// assert!(c.is_finite());
/// assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
