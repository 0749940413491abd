//! Precision loss

use fuzzy_sheets_core::{Cell, CellValue, NumberFormat};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::MutationRule;
use crate::config::Axis;

/// Decimal places kept at strength 0
const MAX_PLACES: f64 = 4.0;

/// Rounds numbers to fewer decimal places
///
/// Keeps `round((1 - strength) * 4)` places, rounding half away from zero, and
/// sets a fixed format with that many places. Strength 1 leaves integers.
/// Values outside the range of [`Decimal`] (and NaN/infinity) are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalPrecisionRule;

impl DecimalPrecisionRule {
    /// Decimal places kept at `strength`
    pub fn places(strength: f64) -> u32 {
        ((1.0 - strength.clamp(0.0, 1.0)) * MAX_PLACES).round() as u32
    }
}

impl MutationRule for DecimalPrecisionRule {
    fn axis(&self) -> Axis {
        Axis::DecimalPrecision
    }

    fn mutate(&self, cell: &Cell, strength: f64) -> Cell {
        let CellValue::Number(n) = cell.value else {
            return cell.clone();
        };

        let places = Self::places(strength);
        let Some(rounded) = Decimal::from_f64(n)
            .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|d| d.to_f64())
        else {
            return cell.clone();
        };

        Cell {
            value: CellValue::Number(rounded),
            formula: String::new(),
            format: cell
                .format
                .clone()
                .with_number_format(NumberFormat::fixed_decimals(places)),
        }
    }
}
