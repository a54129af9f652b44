pub mod geo;
pub mod geocode;
