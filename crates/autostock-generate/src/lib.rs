//! Vehicle inventory synthesis for Autostock.
//!
//! Samples fake used-car stock from the static reference tables in
//! `autostock-core`, derives identifiers, and writes the result as a SQL
//! seed script (or CSV).

pub mod engine;
pub mod errors;
pub mod identifiers;
pub mod model;
pub mod output;
pub mod planner;
pub mod synth;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, OutputFormat};
pub use planner::{CityQuota, plan_city_quotas};
pub use synth::{FIRST_STOCK_ID, count_by_location, synthesize};
