//! Infrastructure layer providing external service integrations.
//!
//! This module contains adapters for the system clipboard and for the
//! log file that receives tracing output while the terminal UI is active.

pub mod clipboard;
pub mod logging;

pub use clipboard::*;
pub use logging::*;
