//! Great-circle distance by the spherical law of cosines.

use crate::location::GeoLocation;

impl GeoLocation {
    /// Great-circle distance to `other` on the Earth, in kilometres.
    #[inline]
    pub fn distance_to(&self, other: &GeoLocation) -> f64 {
        self.distance_to_on_sphere(other, Self::EARTH_RADIUS)
    }

    /// Great-circle distance to `other` on a sphere of `radius`, in the unit
    /// of `radius`.
    ///
    /// `radius` is not validated. The `acos` argument is not clamped either:
    /// for identical or near-identical points rounding can push it just past
    /// 1.0, in which case the result is `NaN` rather than `0.0`.
    pub fn distance_to_on_sphere(&self, other: &GeoLocation, radius: f64) -> f64 {
        let (lat1, lon1) = (self.latitude_radians(), self.longitude_radians());
        let (lat2, lon2) = (other.latitude_radians(), other.longitude_radians());

        radius
            * (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos()).acos()
    }
}
