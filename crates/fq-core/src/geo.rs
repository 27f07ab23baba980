//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in signed decimal degrees
//! (WGS-84 approximate).  Facility networks are small (hundreds of nodes)
//! and distances are reported in kilometres, so there is no reason to trade
//! precision for memory here.
//!
//! Coordinates are **not validated**: out-of-range values are accepted and
//! propagate into nonsensical distances.  Range checking is a caller
//! responsibility at whatever boundary the coordinates enter the system.

/// A geographic coordinate in signed decimal degrees.
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

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, non-negative, and exactly zero for identical coordinates.
    /// Uses the 6371 km mean Earth radius; accuracy is well under 0.5 % for
    /// the regional scales this engine works at.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371.0; // mean Earth radius, kilometres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
