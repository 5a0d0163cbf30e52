//! Geographic coordinate type.
//!
//! `GeoLocation` stores every coordinate twice, in radians and in degrees.
//! Both pairs are produced by a single conversion path (radians → degrees),
//! so two locations built from the same radians are equal field-for-field no
//! matter which factory built them.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::error::{GeoError, GeoResult};

/// A point on a sphere, in both radians and degrees.
///
/// Construct with [`GeoLocation::from_degrees`] or
/// [`GeoLocation::from_radians`]; both reject coordinates outside the closed
/// intervals `[MIN_LAT, MAX_LAT]` and `[MIN_LON, MAX_LON]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RadianPair", into = "RadianPair")
)]
pub struct GeoLocation {
    lat_rad: f64,
    lon_rad: f64,
    lat_deg: f64,
    lon_deg: f64,
}

impl GeoLocation {
    pub const MIN_LAT: f64 = -FRAC_PI_2;
    pub const MAX_LAT: f64 = FRAC_PI_2;
    pub const MIN_LON: f64 = -PI;
    pub const MAX_LON: f64 = PI;

    /// Mean Earth radius in kilometres; the default sphere for distance and
    /// bounding-box queries.
    pub const EARTH_RADIUS: f64 = 6378.1;

    /// Build a location from signed decimal degrees (north/east positive).
    ///
    /// The stored degrees are recomputed from the radians, so they can differ
    /// from the input by one ulp.
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> GeoResult<Self> {
        Self::from_radians(lat_deg.to_radians(), lon_deg.to_radians())
    }

    /// Build a location from radians.
    pub fn from_radians(lat_rad: f64, lon_rad: f64) -> GeoResult<Self> {
        // `contains` is false for NaN, so NaN coordinates are rejected too.
        if !(Self::MIN_LAT..=Self::MAX_LAT).contains(&lat_rad)
            || !(Self::MIN_LON..=Self::MAX_LON).contains(&lon_rad)
        {
            log::debug!("rejecting coordinate ({lat_rad}, {lon_rad}) rad");
            return Err(GeoError::OutOfRange { lat: lat_rad, lon: lon_rad });
        }

        Ok(Self {
            lat_rad,
            lon_rad,
            lat_deg: lat_rad.to_degrees(),
            lon_deg: lon_rad.to_degrees(),
        })
    }

    #[inline]
    pub fn latitude_radians(&self) -> f64 {
        self.lat_rad
    }

    #[inline]
    pub fn longitude_radians(&self) -> f64 {
        self.lon_rad
    }

    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.lat_deg
    }

    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.lon_deg
    }
}

impl TryFrom<(f64, f64)> for GeoLocation {
    type Error = GeoError;

    /// `(lat, lon)` in degrees.
    fn try_from((lat_deg, lon_deg): (f64, f64)) -> GeoResult<Self> {
        Self::from_degrees(lat_deg, lon_deg)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}deg, {:.4}deg) = ({:.6}rad, {:.6}rad)",
            self.lat_deg, self.lon_deg, self.lat_rad, self.lon_rad
        )
    }
}

// Wire form: radians only. Degrees are derived again on the way in, and the
// range check runs like any other construction.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RadianPair {
    lat_rad: f64,
    lon_rad: f64,
}

#[cfg(feature = "serde")]
impl From<GeoLocation> for RadianPair {
    fn from(loc: GeoLocation) -> Self {
        Self { lat_rad: loc.lat_rad, lon_rad: loc.lon_rad }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RadianPair> for GeoLocation {
    type Error = GeoError;

    fn try_from(pair: RadianPair) -> GeoResult<Self> {
        Self::from_radians(pair.lat_rad, pair.lon_rad)
    }
}
