//! Mutation configuration
//!
//! A [`MutationConfig`] holds one [`MutationDetail`] for each of the five
//! fixed [`Axis`] values. It deserializes from JSON with camelCase keys:
//!
//! ```json
//! {
//!   "encoding":    { "enabled": true, "strength": 0.5, "percentMutated": 0.2, "text": true },
//!   "emptyValues": { "enabled": true, "percentMutated": 0.05, "numeric": true, "text": true }
//! }
//! ```
//!
//! Missing axes and fields take their defaults (disabled, zero).

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::ValueKind;
use crate::error::{MutationError, MutationResult};

/// One of the five mutation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Numbers rewritten as locale-formatted text
    NumberFormat,
    /// Dates rewritten in alternate representations
    DateFormat,
    /// Text re-decoded with the wrong character set
    Encoding,
    /// Values replaced by blanks or null markers
    EmptyValues,
    /// Numbers rounded to fewer decimal places
    DecimalPrecision,
}

impl Axis {
    /// Order in which enabled axes are applied to each worksheet
    pub const APPLICATION_ORDER: [Axis; 5] = [
        Axis::Encoding,
        Axis::DateFormat,
        Axis::NumberFormat,
        Axis::DecimalPrecision,
        Axis::EmptyValues,
    ];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::NumberFormat => "NumberFormat",
            Axis::DateFormat => "DateFormat",
            Axis::Encoding => "Encoding",
            Axis::EmptyValues => "EmptyValues",
            Axis::DecimalPrecision => "DecimalPrecision",
        };
        f.write_str(name)
    }
}

/// Settings for a single axis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MutationDetail {
    /// Disabled axes never mutate anything
    #[serde(alias = "isEnabled")]
    pub enabled: bool,
    /// Severity in [0, 1], interpreted by the axis rule
    pub strength: f64,
    /// Fraction in [0, 1] of each candidate pool to mutate
    pub percent_mutated: f64,
    /// Target numeric cells
    #[serde(alias = "isNumeric")]
    pub numeric: bool,
    /// Target date cells
    #[serde(alias = "isDate")]
    pub date: bool,
    /// Target text cells
    #[serde(alias = "isString")]
    pub text: bool,
}

impl MutationDetail {
    /// An enabled detail with the given selection fraction and no filters
    pub fn enabled_for(percent_mutated: f64) -> Self {
        Self {
            enabled: true,
            percent_mutated,
            ..Self::default()
        }
    }

    /// Set strength
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Turn on the filter for `kind`; [`ValueKind::Other`] is ignored
    pub fn targeting(mut self, kind: ValueKind) -> Self {
        match kind {
            ValueKind::Numeric => self.numeric = true,
            ValueKind::Date => self.date = true,
            ValueKind::Text => self.text = true,
            ValueKind::Other => {}
        }
        self
    }

    /// Check whether the filter for `kind` is on
    pub fn targets(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Numeric => self.numeric,
            ValueKind::Date => self.date,
            ValueKind::Text => self.text,
            ValueKind::Other => false,
        }
    }

    /// Active filters in pool collection order (numeric, date, text)
    pub fn active_filters(&self) -> impl Iterator<Item = ValueKind> + '_ {
        ValueKind::TARGETABLE
            .into_iter()
            .filter(move |kind| self.targets(*kind))
    }

    /// Check `percent_mutated` and `strength` are finite and within [0, 1]
    pub fn validate(&self, axis: Axis) -> MutationResult<()> {
        if !is_unit_interval(self.percent_mutated) {
            return Err(MutationError::InvalidFraction {
                axis,
                value: self.percent_mutated,
            });
        }
        if !is_unit_interval(self.strength) {
            return Err(MutationError::InvalidStrength {
                axis,
                value: self.strength,
            });
        }
        Ok(())
    }
}

pub(crate) fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Per-axis mutation settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MutationConfig {
    pub number_format: MutationDetail,
    pub date_format: MutationDetail,
    pub encoding: MutationDetail,
    pub empty_values: MutationDetail,
    pub decimal_precision: MutationDetail,
}

impl MutationConfig {
    /// A configuration with every axis disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the detail for `axis`
    pub fn with_axis(mut self, axis: Axis, detail: MutationDetail) -> Self {
        *self.detail_mut(axis) = detail;
        self
    }

    /// Get the detail for an axis
    pub fn detail(&self, axis: Axis) -> &MutationDetail {
        match axis {
            Axis::NumberFormat => &self.number_format,
            Axis::DateFormat => &self.date_format,
            Axis::Encoding => &self.encoding,
            Axis::EmptyValues => &self.empty_values,
            Axis::DecimalPrecision => &self.decimal_precision,
        }
    }

    /// Get the mutable detail for an axis
    pub fn detail_mut(&mut self, axis: Axis) -> &mut MutationDetail {
        match axis {
            Axis::NumberFormat => &mut self.number_format,
            Axis::DateFormat => &mut self.date_format,
            Axis::Encoding => &mut self.encoding,
            Axis::EmptyValues => &mut self.empty_values,
            Axis::DecimalPrecision => &mut self.decimal_precision,
        }
    }

    /// Enabled axes in application order
    pub fn enabled_axes(&self) -> Vec<Axis> {
        Axis::APPLICATION_ORDER
            .into_iter()
            .filter(|axis| self.detail(*axis).enabled)
            .collect()
    }

    /// Validate every enabled axis
    ///
    /// Disabled axes are not checked; they never take part in a run.
    pub fn validate(&self) -> MutationResult<()> {
        for axis in self.enabled_axes() {
            self.detail(axis).validate(axis)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> MutationResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration from a reader
    pub fn from_reader<R: Read>(reader: R) -> MutationResult<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> MutationResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> MutationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
