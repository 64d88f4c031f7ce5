//! Great-circle distance and travel-time estimate.

use sehati_contracts::hospital::GeoPoint;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough driving minutes per kilometre.
pub const MINUTES_PER_KM: f64 = 2.0;

/// Haversine distance between two points, in kilometres.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn eta_minutes(distance_km: f64) -> u32 {
    (distance_km * MINUTES_PER_KM).round() as u32
}
