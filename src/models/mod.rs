//! Database models and response records for the reporting endpoints.

pub mod order;
pub mod report;
