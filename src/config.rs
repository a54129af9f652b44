use std::env;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;

/// Cape Town city centre
pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(-33.9249, 18.4241);

pub const DEFAULT_GEOCODER_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Reference point used when a request carries no position
    pub default_location: Coordinate,
    pub locations_per_program: usize,
    pub ring_radius_degrees: f64,
    /// Fixed seed for the generated catalog; entropy when unset
    pub catalog_seed: Option<u64>,
    pub geocoder_url: String,
    pub geocoder_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            default_location: DEFAULT_LOCATION,
            locations_per_program: 5,
            ring_radius_degrees: 0.04,
            catalog_seed: None,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_timeout_secs: 5,
        }
    }
}

/// Parse `name` if set, otherwise fall back to `default`
fn var_or<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let catalog_seed = match env::var("CATALOG_SEED") {
            Ok(raw) => Some(raw.trim().parse().map_err(|_| {
                AppError::Config(format!("CATALOG_SEED must be a number: {}", raw))
            })?),
            Err(_) => None,
        };

        let config = Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: var_or("SERVER_PORT", defaults.server_port)?,
            default_location: Coordinate::new(
                var_or("DEFAULT_LAT", defaults.default_location.lat)?,
                var_or("DEFAULT_LNG", defaults.default_location.lng)?,
            ),
            locations_per_program: var_or("LOCATIONS_PER_PROGRAM", defaults.locations_per_program)?,
            ring_radius_degrees: var_or("RING_RADIUS_DEGREES", defaults.ring_radius_degrees)?,
            catalog_seed,
            geocoder_url: env::var("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            geocoder_timeout_secs: var_or("GEOCODER_TIMEOUT_SECS", defaults.geocoder_timeout_secs)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.default_location.is_valid() {
            return Err(AppError::Config(format!(
                "Default location out of range: {}, {}",
                self.default_location.lat, self.default_location.lng
            )));
        }
        if self.locations_per_program == 0 {
            return Err(AppError::Config(
                "LOCATIONS_PER_PROGRAM must be at least 1".to_string(),
            ));
        }
        if !(self.ring_radius_degrees.is_finite() && self.ring_radius_degrees > 0.0) {
            return Err(AppError::Config(
                "RING_RADIUS_DEGREES must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_rejects_bad_ring() {
        let config = Config {
            locations_per_program: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            ring_radius_degrees: -0.1,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_default_location() {
        let config = Config {
            default_location: Coordinate::new(95.0, 0.0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
