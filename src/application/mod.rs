//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the workout store and turning domain results into notices.

pub mod state;

pub use state::*;
