//! acefit - Terminal Workout Tracker Library
//!
//! Log workouts by category, review a running summary and watch progress
//! charts, all from the terminal. Data lives in memory for the session only.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod config;

pub use domain::*;
pub use application::*;
