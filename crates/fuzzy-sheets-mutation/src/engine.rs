//! The mutation engine
//!
//! For every worksheet with rows, and for every enabled axis in
//! [`Axis::APPLICATION_ORDER`]:
//!
//! 1. each active type filter collects its own pool of matching cells,
//!    classified from their *current* value;
//! 2. each pool is sampled independently at `percentMutated`;
//! 3. every selected cell is passed through the axis rule and overwritten.
//!
//! Because pools are rebuilt per axis, a cell corrupted by an earlier axis can
//! be picked up again by a later one (a date turned into a serial number by
//! DateFormat is numeric by the time NumberFormat runs).
//!
//! # Example
//!
//! ```rust
//! use fuzzy_sheets_core::{Cell, Workbook, Worksheet};
//! use fuzzy_sheets_mutation::{Axis, MutationConfig, MutationDetail, MutationEngine, ValueKind};
//!
//! let mut sheet = Worksheet::new("Prices");
//! sheet.push_row(vec![Cell::new(1.0), Cell::new(2.0), Cell::new(3.0)]);
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet(sheet).unwrap();
//!
//! let config = MutationConfig::new().with_axis(
//!     Axis::NumberFormat,
//!     MutationDetail::enabled_for(1.0).targeting(ValueKind::Numeric),
//! );
//!
//! let stats = MutationEngine::seeded(7)
//!     .apply_mutations(&mut workbook, &config)
//!     .unwrap();
//! assert_eq!(stats.mutations_for(Axis::NumberFormat), 3);
//! ```

use fuzzy_sheets_core::{Workbook, Worksheet};
use log::{debug, info, trace, warn};

use crate::classify::classify;
use crate::config::{Axis, MutationConfig, MutationDetail};
use crate::error::MutationResult;
use crate::rules::RuleRegistry;
use crate::sampler::Sampler;

/// Summary of a mutation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationStats {
    /// Worksheets with at least one row
    pub worksheets_visited: usize,
    /// Rule applications; a cell hit twice counts twice
    pub mutations_applied: usize,
    /// Rule applications per axis, in application order
    pub per_axis: Vec<(Axis, usize)>,
}

impl MutationStats {
    /// Rule applications for one axis
    pub fn mutations_for(&self, axis: Axis) -> usize {
        self.per_axis
            .iter()
            .find(|(a, _)| *a == axis)
            .map_or(0, |(_, count)| *count)
    }

    fn record(&mut self, axis: Axis, count: usize) {
        self.mutations_applied += count;
        match self.per_axis.iter_mut().find(|(a, _)| *a == axis) {
            Some((_, total)) => *total += count,
            None => self.per_axis.push((axis, count)),
        }
    }
}

/// Applies a [`MutationConfig`] to workbooks
///
/// The engine owns its [`Sampler`]; give each thread its own engine to mutate
/// independent workbooks in parallel.
#[derive(Debug)]
pub struct MutationEngine {
    sampler: Sampler,
    rules: RuleRegistry,
}

impl MutationEngine {
    /// Create an engine with the built-in rules and an entropy-seeded sampler
    pub fn new() -> Self {
        Self::with_sampler(Sampler::new())
    }

    /// Create a deterministic engine
    pub fn seeded(seed: u64) -> Self {
        Self::with_sampler(Sampler::seeded(seed))
    }

    /// Create an engine around an existing sampler
    pub fn with_sampler(sampler: Sampler) -> Self {
        Self {
            sampler,
            rules: RuleRegistry::new(),
        }
    }

    /// Replace the rule registry
    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    /// Mutate `workbook` in place according to `config`
    ///
    /// The configuration is validated before any cell is touched. Empty
    /// workbooks, worksheets without rows, empty pools and configurations
    /// with nothing enabled are no-ops.
    pub fn apply_mutations(
        &mut self,
        workbook: &mut Workbook,
        config: &MutationConfig,
    ) -> MutationResult<MutationStats> {
        config.validate()?;

        let mut stats = MutationStats::default();

        if workbook.is_empty() {
            debug!("Workbook has no worksheets, nothing to mutate");
            return Ok(stats);
        }

        let axes = config.enabled_axes();
        if axes.is_empty() {
            debug!("No mutation axis enabled");
            return Ok(stats);
        }

        for sheet in workbook.worksheets_mut() {
            if sheet.is_empty() {
                debug!("Skipping worksheet '{}': no rows", sheet.name());
                continue;
            }
            stats.worksheets_visited += 1;
            let sheet_name = sheet.name().to_string();

            for &axis in &axes {
                let Some(rule) = self.rules.get(axis) else {
                    warn!("No rule registered for {axis}, skipping");
                    continue;
                };
                let detail = config.detail(axis);

                let selected = select_cells(&mut self.sampler, sheet, axis, detail)?;
                for &(row, col) in &selected {
                    if let Some(cell) = sheet.cell_at_mut(row, col) {
                        let mutated = rule.mutate(cell, detail.strength);
                        trace!(
                            "{axis} {sheet_name}!R{}C{}: {:?} -> {:?}",
                            row + 1,
                            col + 1,
                            cell.value,
                            mutated.value
                        );
                        cell.overwrite_with(mutated);
                    }
                }

                stats.record(axis, selected.len());
            }
        }

        info!(
            "Applied {} mutations across {} worksheets",
            stats.mutations_applied, stats.worksheets_visited
        );
        Ok(stats)
    }
}

impl Default for MutationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one pool per active filter and sample each independently
///
/// Pools are sampled before any cell changes, so the whole axis pass sees the
/// values left by the previous axis.
fn select_cells(
    sampler: &mut Sampler,
    sheet: &Worksheet,
    axis: Axis,
    detail: &MutationDetail,
) -> MutationResult<Vec<(usize, usize)>> {
    let mut selected = Vec::new();

    for kind in detail.active_filters() {
        let pool: Vec<(usize, usize)> = sheet
            .cells()
            .filter(|(_, _, cell)| classify(cell) == kind)
            .map(|(row, col, _)| (row, col))
            .collect();
        let pool_size = pool.len();

        let picked = sampler.sample(pool, detail.percent_mutated)?;
        debug!(
            "{axis} on '{}': {} of {} {kind} cells selected",
            sheet.name(),
            picked.len(),
            pool_size
        );
        selected.extend(picked);
    }

    Ok(selected)
}
