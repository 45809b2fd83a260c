//! Client for the national business registry (`Enhetsregisteret`) REST API.

pub mod client;
pub mod error;
pub mod failure;
pub mod types;

pub use client::RegistryClient;
pub use error::RegistryError;
pub use failure::{SearchErrorKind, SearchFailure};
