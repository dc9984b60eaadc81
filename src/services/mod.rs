//! Query and data-loading services.

pub mod reports;
pub mod seed;
