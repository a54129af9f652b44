use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::location::Location;
use crate::entities::program::ProgramType;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minutes per kilometre at ~5 km/h walking speed
const WALKING_MINUTES_PER_KM: f64 = 12.0;
/// Minutes per kilometre at ~25 km/h average city driving speed
const DRIVING_MINUTES_PER_KM: f64 = 2.5;

/// Inner edge of the ring as a fraction of the radius
const RING_MIN_FRACTION: f64 = 0.3;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite and within [-90, 90] / [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Shift by a planar offset in degrees
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }
}

/// Distance between two coordinates with rough travel-time estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    /// Kilometres, rounded to 2 decimal places
    pub distance_km: f64,
    pub walking_minutes: i64,
    pub driving_minutes: i64,
}

impl DistanceResult {
    /// Kilometres formatted with exactly two decimals
    pub fn km_text(&self) -> String {
        format!("{:.2}", self.distance_km)
    }
}

/// Calculate distance between two coordinates using Haversine formula
/// Returns distance in kilometers
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between `a` and `b` plus walking/driving estimates.
///
/// The time multipliers are not calibrated against any routing data; they
/// are part of the observable output and must stay fixed.
pub fn haversine(a: Coordinate, b: Coordinate) -> DistanceResult {
    let km = haversine_distance(a.lat, a.lng, b.lat, b.lng);

    DistanceResult {
        distance_km: (km * 100.0).round() / 100.0,
        walking_minutes: (km * WALKING_MINUTES_PER_KM).round() as i64,
        driving_minutes: (km * DRIVING_MINUTES_PER_KM).round() as i64,
    }
}

/// Place `count` points on a ring around `center`.
///
/// Point `i` sits at angle `i * 360 / count` degrees, at a radial distance
/// drawn uniformly from `[0.3, 1.0] * radius_degrees`. Offsets are applied in
/// plain degree space (cos to latitude, sin to longitude), which is only
/// reasonable for city-scale radii.
pub fn generate_ring<R: Rng + ?Sized>(
    center: Coordinate,
    count: usize,
    radius_degrees: f64,
    rng: &mut R,
) -> Vec<Coordinate> {
    let step = 360.0 / count as f64;

    (0..count)
        .map(|i| {
            let angle = (i as f64 * step).to_radians();
            let u: f64 = rng.r#gen();
            let distance = radius_degrees * (RING_MIN_FRACTION + (1.0 - RING_MIN_FRACTION) * u);
            center.offset(distance * angle.cos(), distance * angle.sin())
        })
        .collect()
}

/// Candidate closest to `reference`, or `None` when there are no candidates.
///
/// Ties keep the earliest candidate.
pub fn nearest(reference: Coordinate, candidates: &[Location]) -> Option<&Location> {
    let (first, rest) = candidates.split_first()?;
    let mut best = first;
    let mut best_km = haversine(reference, first.coordinate).distance_km;

    for candidate in rest {
        let km = haversine(reference, candidate.coordinate).distance_km;
        if km < best_km {
            best = candidate;
            best_km = km;
        }
    }

    Some(best)
}

/// A connected program resolved to its closest concrete location
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedProgram<'a> {
    pub program_type: ProgramType,
    pub location: &'a Location,
}

/// Resolve each program id to its nearest location, keeping input order.
///
/// Ids missing from the catalog are skipped.
pub fn resolve_connections<'a, S: AsRef<str>>(
    reference: Coordinate,
    program_type_ids: &[S],
    catalog: &'a Catalog,
) -> Vec<ConnectedProgram<'a>> {
    program_type_ids
        .iter()
        .filter_map(|id| {
            let id = id.as_ref();
            let Some((program_type, locations)) = catalog.entry(id) else {
                tracing::debug!(program_id = %id, "Skipping unknown connected program");
                return None;
            };
            nearest(reference, locations).map(|location| ConnectedProgram {
                program_type,
                location,
            })
        })
        .collect()
}

/// Use the reported position when there is one, otherwise `fallback`
pub fn resolve_reference(position: Option<Coordinate>, fallback: Coordinate) -> Coordinate {
    match position {
        Some(coordinate) if coordinate.is_valid() => coordinate,
        _ => fallback,
    }
}
