//! Shared domain types for the registry search control.
//!
//! Everything here is synchronous and side-effect free apart from
//! [`load_app_config`], which reads the process environment. The HTTP
//! clients, the exporter and the control state machine live in their own
//! crates and depend on these types.

pub mod address;
pub mod app_config;
pub mod company;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod location;
pub mod notify;
pub mod output;

pub use address::{extract_address_components, format_address, geocode_query, AddressParts};
pub use app_config::{AppConfig, Features, PresentationMode};
pub use company::{Address, CodeDescription, CompanyRecord};
pub use config::{clamp_page_size, load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use form::{FormState, GeocodeRequest};
pub use format::{format_industry_code, format_org_number, is_valid_for_mode, SearchMode};
pub use location::{AddressData, Coordinates, PinnedAddress};
pub use notify::{Intent, Notification};
pub use output::OutputRecord;
