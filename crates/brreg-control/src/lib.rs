//! Search, selection and acceptance flow for the registry search control.
//!
//! [`SearchSession`] is the pure state machine; [`Control`] wires it to the
//! HTTP clients, the editable [`brreg_core::FormState`], the map review and
//! the exporter.

pub mod control;
pub mod error;
pub mod map_review;
pub mod session;

pub use control::{AcceptOutcome, Control, ControlSettings};
pub use error::ControlError;
pub use map_review::MapReview;
pub use session::{SearchSession, SearchTicket, SessionState};
