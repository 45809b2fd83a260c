use brreg_geocode::GeocodeError;
use brreg_registry::RegistryError;
use thiserror::Error;

/// Failures while wiring a [`crate::Control`] from configuration.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("registry client: {0}")]
    Registry(#[from] RegistryError),

    #[error("geocoding client: {0}")]
    Geocode(#[from] GeocodeError),
}
