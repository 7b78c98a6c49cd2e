//! Great-circle distance on a spherical Earth.
//!
//! All distances produced here are in miles. Conversion to kilometres is a
//! display concern and goes through [`DistanceUnit::from_miles`].

use std::fmt;

pub const EARTH_RADIUS_MI: f64 = 3959.0;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true` when both components are finite and inside the valid
    /// latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine distance in miles to `other`.
    #[must_use]
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        haversine(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Distance in miles between two lat/lon pairs given in degrees, using the
/// haversine formula (<https://www.movable-type.co.uk/scripts/latlong.html>).
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lat_diff = lat2_rad - lat1_rad;
    let lon_diff = (lon2 - lon1).to_radians();

    // Rounding can push `a` just past 1 for antipodal points.
    let a = ((lat_diff / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (lon_diff / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    c * EARTH_RADIUS_MI
}

/// Unit used when displaying a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Short label printed after a distance: `mi` or `km`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }

    /// Converts a distance in miles into this unit.
    #[must_use]
    pub fn from_miles(self, miles: f64) -> f64 {
        match self {
            DistanceUnit::Miles => miles,
            DistanceUnit::Kilometers => miles * (EARTH_RADIUS_KM / EARTH_RADIUS_MI),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
