pub mod models;
pub mod validation;
pub mod services;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use services::*;
pub use errors::*;
