//! Mutation rules
//!
//! A rule turns one cell into its corrupted counterpart. Rules are pure: they
//! read the input cell and build a new one; the engine copies the result onto
//! the live cell.
//!
//! Built-in rules, one per [`Axis`]:
//!
//! | Axis | Rule | Effect |
//! |------|------|--------|
//! | NumberFormat | [`NumberFormatRule`] | numbers become locale-formatted text |
//! | DateFormat | [`DateFormatRule`] | dates become ambiguous text or serial numbers |
//! | Encoding | [`EncodingRule`] | text is re-decoded as ISO-8859-1 |
//! | DecimalPrecision | [`DecimalPrecisionRule`] | numbers lose decimal places |
//! | EmptyValues | [`EmptyValuesRule`] | values become blanks or null markers |

mod date_format;
mod decimal_precision;
mod empty_values;
mod encoding;
mod number_format;

pub use date_format::DateFormatRule;
pub use decimal_precision::DecimalPrecisionRule;
pub use empty_values::EmptyValuesRule;
pub use encoding::EncodingRule;
pub use number_format::NumberFormatRule;

use std::collections::HashMap;

use fuzzy_sheets_core::Cell;

use crate::config::Axis;

/// Cell transformation for one axis
pub trait MutationRule: Send + Sync {
    /// Axis this rule serves
    fn axis(&self) -> Axis;

    /// Produce the mutated version of `cell`
    ///
    /// `strength` is the axis severity in [0, 1]. Cells whose value the rule
    /// has no corruption for come back unchanged.
    fn mutate(&self, cell: &Cell, strength: f64) -> Cell;
}

/// Map strength in [0, 1] onto one of `tiers` equal-width bands
pub(crate) fn tier(strength: f64, tiers: usize) -> usize {
    let band = (strength.clamp(0.0, 1.0) * tiers as f64).floor() as usize;
    band.min(tiers - 1)
}

/// Rule lookup by axis
pub struct RuleRegistry {
    rules: HashMap<Axis, Box<dyn MutationRule>>,
}

impl RuleRegistry {
    /// Create a registry with all built-in rules
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(NumberFormatRule));
        registry.register(Box::new(DateFormatRule));
        registry.register(Box::new(EncodingRule));
        registry.register(Box::new(DecimalPrecisionRule));
        registry.register(Box::new(EmptyValuesRule));

        registry
    }

    /// Create a registry with no rules
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Look up the rule for an axis
    pub fn get(&self, axis: Axis) -> Option<&dyn MutationRule> {
        self.rules.get(&axis).map(|rule| rule.as_ref())
    }

    /// Register a rule, replacing any previous rule for the same axis
    pub fn register(&mut self, rule: Box<dyn MutationRule>) {
        self.rules.insert(rule.axis(), rule);
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut axes: Vec<_> = self.rules.keys().collect();
        axes.sort();
        f.debug_struct("RuleRegistry").field("axes", &axes).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_sheets_core::CellValue;

    struct Blank;

    impl MutationRule for Blank {
        fn axis(&self) -> Axis {
            Axis::Encoding
        }

        fn mutate(&self, _cell: &Cell, _strength: f64) -> Cell {
            Cell::empty()
        }
    }

    #[test]
    fn test_builtin_registry_covers_every_axis() {
        let registry = RuleRegistry::new();
        assert_eq!(registry.len(), 5);
        for axis in Axis::APPLICATION_ORDER {
            assert_eq!(registry.get(axis).map(|r| r.axis()), Some(axis));
        }
    }

    #[test]
    fn test_register_replaces_rule() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Blank));
        assert_eq!(registry.len(), 5);

        let out = registry
            .get(Axis::Encoding)
            .unwrap()
            .mutate(&Cell::new("text"), 1.0);
        assert_eq!(out.value, CellValue::Empty);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get(Axis::NumberFormat).is_none());
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(tier(0.0, 3), 0);
        assert_eq!(tier(0.33, 3), 0);
        assert_eq!(tier(1.0 / 3.0, 3), 1);
        assert_eq!(tier(0.5, 3), 1);
        assert_eq!(tier(2.0 / 3.0, 3), 2);
        assert_eq!(tier(1.0, 3), 2);
        assert_eq!(tier(0.74, 4), 2);
        assert_eq!(tier(1.0, 4), 3);
    }
}
