//! Bounding coordinates of a great-circle disc.
//!
//! [`GeoLocation::bounding_locations`] returns the smallest latitude/longitude
//! rectangle containing every point within a given great-circle distance of
//! the centre. The rectangle is meant as a cheap pre-filter (e.g. an indexed
//! range query) before an exact [`GeoLocation::distance_to`] check.
//!
//! Two special cases:
//!
//! * **Pole inside the disc**: latitude is clamped to the pole and the
//!   longitude range becomes the whole `[-180°, 180°]`, because every
//!   meridian passes within the radius.
//! * **Antimeridian crossing**: the south-west corner's longitude is greater
//!   than the north-east corner's. This is a valid box, not an error; see
//!   [`BoundingBox::crosses_antimeridian`].

use std::f64::consts::PI;
use std::fmt;

use crate::error::{GeoError, GeoResult};
use crate::location::GeoLocation;

/// South-west and north-east corners of a bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub southwest: GeoLocation,
    pub northeast: GeoLocation,
}

impl BoundingBox {
    #[inline]
    pub fn new(southwest: GeoLocation, northeast: GeoLocation) -> Self {
        Self { southwest, northeast }
    }

    /// `(southwest, northeast)`.
    #[inline]
    pub fn into_corners(self) -> (GeoLocation, GeoLocation) {
        (self.southwest, self.northeast)
    }

    /// True when the longitude range wraps across ±180°, i.e. the south-west
    /// longitude is numerically greater than the north-east one.
    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.southwest.longitude_radians() > self.northeast.longitude_radians()
    }

    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: &GeoLocation) -> bool {
        let lat = point.latitude_radians();
        let lon = point.longitude_radians();

        let in_lat =
            lat >= self.southwest.latitude_radians() && lat <= self.northeast.latitude_radians();
        if !in_lat {
            return false;
        }

        let min_lon = self.southwest.longitude_radians();
        let max_lon = self.northeast.longitude_radians();
        if self.crosses_antimeridian() {
            lon >= min_lon || lon <= max_lon
        } else {
            lon >= min_lon && lon <= max_lon
        }
    }
}

impl From<BoundingBox> for (GeoLocation, GeoLocation) {
    #[inline]
    fn from(bbox: BoundingBox) -> Self {
        bbox.into_corners()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.southwest, self.northeast)
    }
}

impl GeoLocation {
    /// Bounding box of all points within `distance` kilometres on the Earth.
    #[inline]
    pub fn bounding_locations(&self, distance: f64) -> GeoResult<BoundingBox> {
        self.bounding_locations_on_sphere(distance, Self::EARTH_RADIUS)
    }

    /// Bounding box of all points within `distance` of `self` on a sphere of
    /// `radius`. `distance` and `radius` must share a unit.
    ///
    /// Returns [`GeoError::InvalidArgument`] if either is negative or NaN, or
    /// if both are zero (the angular radius `0 / 0` is undefined).
    pub fn bounding_locations_on_sphere(
        &self,
        distance: f64,
        radius: f64,
    ) -> GeoResult<BoundingBox> {
        // Angular radius, in radians.
        let ang = distance / radius;

        if !(radius >= 0.0) || !(distance >= 0.0) || ang.is_nan() {
            log::debug!("rejecting bounding box query: distance {distance}, radius {radius}");
            return Err(GeoError::InvalidArgument { distance, radius });
        }

        let lat = self.latitude_radians();
        let lon = self.longitude_radians();

        let mut min_lat = lat - ang;
        let mut max_lat = lat + ang;
        let min_lon;
        let max_lon;

        if min_lat > Self::MIN_LAT && max_lat < Self::MAX_LAT {
            let delta_lon = (ang.sin() / lat.cos()).asin();

            let mut lo = lon - delta_lon;
            if lo < Self::MIN_LON {
                lo += 2.0 * PI;
            }
            let mut hi = lon + delta_lon;
            if hi > Self::MAX_LON {
                hi -= 2.0 * PI;
            }
            if lo > hi {
                log::trace!("bounding box around {} crosses the antimeridian", self);
            }

            min_lon = lo;
            max_lon = hi;
        } else {
            log::trace!("bounding box around {} encloses a pole", self);
            min_lat = min_lat.max(Self::MIN_LAT);
            max_lat = max_lat.min(Self::MAX_LAT);
            min_lon = Self::MIN_LON;
            max_lon = Self::MAX_LON;
        }

        Ok(BoundingBox {
            southwest: GeoLocation::from_radians(min_lat, min_lon)?,
            northeast: GeoLocation::from_radians(max_lat, max_lon)?,
        })
    }
}
