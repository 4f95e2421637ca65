//! # Step Tracker
//!
//! Parses fitness activity records and reports distance, speed and calories.
//!
//! ## Architecture
//!
//! - **duration**: Compound duration parsing ("1h30m", "1.5h")
//! - **calculate**: Distance, mean speed and calorie formulas
//! - **models**: Core data structures (person, activity kinds, summaries)
//! - **records**: Line parsers for day-steps and training records
//! - **ingest**: Batch processing with per-record failure isolation
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod duration;
pub mod ingest;
pub mod models;
pub mod records;

pub use duration::parse_duration;
pub use models::*;
pub use records::{ActivityParser, RecordError, StepsRecord, TrainingRecord};
