//! Core data models for the step tracker.

mod activity;
mod ids;
mod person;
mod summary;

pub use activity::*;
pub use ids::*;
pub use person::*;
pub use summary::*;
