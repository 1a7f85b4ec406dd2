//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Dataset coordinates are given
//! with seven decimal places and must come back out of a lookup unchanged,
//! so single precision is not an option here.

use crate::{CgError, CgResult};

/// Mean Earth radius in metres used by every great-circle computation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// `true` if `lat` is a finite latitude in `[-90, 90]`.
#[inline]
pub fn valid_lat(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// `true` if `lon` is a finite longitude in `[-180, 180]`.
#[inline]
pub fn valid_lon(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// Haversine great-circle distance in metres between two lat/lon pairs given
/// in degrees.
///
/// Inputs are not re-validated; out-of-range coordinates produce a number,
/// just not a meaningful one.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = deg_to_rad(lat1);
    let phi2 = deg_to_rad(lat2);
    let d_phi = deg_to_rad(lat2 - lat1);
    let d_lambda = deg_to_rad(lon2 - lon1);

    let a = (d_phi * 0.5).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting latitudes outside `[-90, 90]` and
    /// longitudes outside `[-180, 180]` (NaN included).
    pub fn checked(lat: f64, lon: f64) -> CgResult<Self> {
        if !valid_lat(lat) {
            return Err(CgError::InvalidLatitude(lat));
        }
        if !valid_lon(lon) {
            return Err(CgError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance to `other` in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        haversine_m(self.lat, self.lon, other.lat, other.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}
