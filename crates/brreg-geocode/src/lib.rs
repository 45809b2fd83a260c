//! Forward and reverse geocoding against a Nominatim-compatible service,
//! plus the slippy-map arithmetic the map review needs.

pub mod client;
pub mod error;
pub mod map;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use map::{MapView, TileCoord, ATTRIBUTION};
