//! # fuzzy-sheets-mutation
//!
//! Corrupts spreadsheet cells in controlled, reproducible ways so import
//! pipelines can be tested against malformed numbers, ambiguous dates, broken
//! encodings, lost precision and missing values.
//!
//! - [`MutationConfig`] - which [`Axis`] values are enabled, how much, on which [`ValueKind`]s
//! - [`Sampler`] - uniform selection without replacement, optionally seeded
//! - [`MutationRule`] / [`RuleRegistry`] - per-axis cell transformations
//! - [`MutationEngine`] - applies a configuration to a workbook in place

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod sampler;

pub use classify::{classify, classify_value, ValueKind};
pub use config::{Axis, MutationConfig, MutationDetail};
pub use engine::{MutationEngine, MutationStats};
pub use error::{MutationError, MutationResult};
pub use rules::{
    DateFormatRule, DecimalPrecisionRule, EmptyValuesRule, EncodingRule, MutationRule,
    NumberFormatRule, RuleRegistry,
};
pub use sampler::Sampler;
