//! Great-circle distance and travel-time estimation.
//!
//! Distances use the haversine formula on a spherical Earth, which is
//! accurate to well under a percent at hangout scale. Travel times come
//! from a fixed per-mode speed table.

use geo::Coord;

use crate::TransportMode;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two WGS84 points, in km.
///
/// Inputs are in degrees (`x = longitude`, `y = latitude`). The function
/// is total: it never errors, and NaN inputs propagate to a NaN output.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hangspot_core::haversine_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(haversine_km(origin, origin), 0.0);
///
/// // One degree of latitude is roughly 111 km.
/// let north = Coord { x: 0.0, y: 1.0 };
/// assert!((haversine_km(origin, north) - 111.19).abs() < 0.1);
/// ```
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Per-mode travel speeds in km/h.
///
/// The table is an explicit configuration value passed into the ranking
/// engine rather than a literal inside the estimator, so deployments can
/// tune it. Modes missing from the table (`None`) use `fallback`.
///
/// # Examples
/// ```
/// use hangspot_core::{SpeedTable, TransportMode};
///
/// let speeds = SpeedTable::default();
/// assert_eq!(speeds.speed_kmh(Some(TransportMode::Walk)), 5.0);
/// assert_eq!(speeds.speed_kmh(None), 20.0);
/// assert_eq!(speeds.eta_minutes(2.5, Some(TransportMode::Walk)), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTable {
    /// Walking speed.
    pub walk: f64,
    /// Cycling speed.
    pub bike: f64,
    /// Driving speed.
    pub car: f64,
    /// Bus speed.
    pub bus: f64,
    /// Speed assumed when no known mode was supplied.
    pub fallback: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            walk: 5.0,
            bike: 15.0,
            car: 25.0,
            bus: 20.0,
            fallback: 20.0,
        }
    }
}

impl SpeedTable {
    /// Speed in km/h for the given mode, or the fallback when absent.
    pub fn speed_kmh(&self, mode: Option<TransportMode>) -> f64 {
        match mode {
            Some(TransportMode::Walk) => self.walk,
            Some(TransportMode::Bike) => self.bike,
            Some(TransportMode::Car) => self.car,
            Some(TransportMode::Bus) => self.bus,
            None => self.fallback,
        }
    }

    /// Estimated travel time in whole minutes, rounded half-up.
    pub fn eta_minutes(&self, distance_km: f64, mode: Option<TransportMode>) -> u32 {
        (distance_km / self.speed_kmh(mode) * 60.0).round() as u32
    }
}
