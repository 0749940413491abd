//! Workbook-level mutation
//!
//! # Example
//!
//! ```rust
//! use fuzzy_sheets::prelude::*;
//!
//! let mut sheet = Worksheet::new("Sheet1");
//! sheet.push_row(vec![Cell::new("Café au lait")]);
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet(sheet).unwrap();
//!
//! let config = MutationConfig::new().with_axis(
//!     Axis::Encoding,
//!     MutationDetail::enabled_for(1.0).targeting(ValueKind::Text),
//! );
//! let stats = workbook.apply_mutations(&config).unwrap();
//! assert_eq!(stats.mutations_applied, 1);
//! ```

use fuzzy_sheets_core::Workbook;
use fuzzy_sheets_mutation::{MutationConfig, MutationEngine, MutationResult, MutationStats};

/// Extension trait for corrupting a workbook in place
pub trait WorkbookMutationExt {
    /// Apply a configuration with a randomly seeded engine
    fn apply_mutations(&mut self, config: &MutationConfig) -> MutationResult<MutationStats>;

    /// Apply a configuration reproducibly
    ///
    /// The same seed, configuration and workbook always give the same result.
    fn apply_mutations_seeded(
        &mut self,
        config: &MutationConfig,
        seed: u64,
    ) -> MutationResult<MutationStats>;
}

impl WorkbookMutationExt for Workbook {
    fn apply_mutations(&mut self, config: &MutationConfig) -> MutationResult<MutationStats> {
        MutationEngine::new().apply_mutations(self, config)
    }

    fn apply_mutations_seeded(
        &mut self,
        config: &MutationConfig,
        seed: u64,
    ) -> MutationResult<MutationStats> {
        MutationEngine::seeded(seed).apply_mutations(self, config)
    }
}
