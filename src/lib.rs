pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
use utils::geocode::ReverseGeocoder;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
    pub geocoder: ReverseGeocoder,
}

impl AppState {
    /// Build the catalog and geocoder described by `config`
    pub fn from_config(config: Config) -> AppResult<Self> {
        let mut rng = match config.catalog_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = Catalog::build(
            config.default_location,
            config.locations_per_program,
            config.ring_radius_degrees,
            &mut rng,
        );
        let geocoder = ReverseGeocoder::new(
            config.geocoder_url.clone(),
            Duration::from_secs(config.geocoder_timeout_secs),
        )?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            geocoder,
        })
    }
}
