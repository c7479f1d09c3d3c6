//! Wear-float math
//!
//! A trade-up result's float is deterministic: every input float is
//! normalized to its own item's wear range, the normalized positions are
//! averaged with equal weight, and the average is mapped onto the output
//! item's range and clamped into its hard caps.

use crate::catalog::Item;
use crate::outcome::InputSlot;

/// Errors from the trade-up engine
#[derive(Debug, thiserror::Error)]
pub enum TradeUpError {
    #[error("at least one input slot is required")]
    NoInputs,
}

/// Position of a float within the item's wear range, in `[0, 1]`.
/// Zero-width ranges normalize to 0.
pub fn normalize(item: &Item, float_value: f64) -> f64 {
    let range = item.max_float - item.min_float;
    if range == 0.0 {
        0.0
    } else {
        (float_value - item.min_float) / range
    }
}

/// Map a unit-interval position back onto the item's wear range, clamped
/// into its bounds.
pub fn denormalize(item: &Item, unit: f64) -> f64 {
    let range = item.max_float - item.min_float;
    item.clamp_float(unit * range + item.min_float)
}

/// Mean normalized wear across input slots. Callers guarantee `inputs` is
/// non-empty.
pub(crate) fn mean_normalized(inputs: &[InputSlot]) -> f64 {
    let sum: f64 = inputs
        .iter()
        .map(|slot| normalize(&slot.item, slot.float))
        .sum();
    sum / inputs.len() as f64
}

/// Deterministic result float for a prospective output item.
///
/// Every input contributes equally regardless of which origin group it
/// comes from. Fails on an empty input list.
pub fn outcome_float(inputs: &[InputSlot], output: &Item) -> Result<f64, TradeUpError> {
    if inputs.is_empty() {
        return Err(TradeUpError::NoInputs);
    }
    Ok(denormalize(output, mean_normalized(inputs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::InputSlot;

    fn item(min_float: f64, max_float: f64) -> Item {
        serde_json::from_str(&format!(
            r#"{{"id": "t", "name": "Test", "min_float": {min_float}, "max_float": {max_float}}}"#
        ))
        .unwrap()
    }

    fn slot(min_float: f64, max_float: f64, float: f64) -> InputSlot {
        InputSlot {
            item: item(min_float, max_float),
            float,
        }
    }

    #[test]
    fn test_normalize_round_trip() {
        let i = item(0.1, 0.5);
        assert_eq!(normalize(&i, 0.1), 0.0);
        assert_eq!(normalize(&i, 0.5), 1.0);
        assert_eq!(normalize(&i, 0.3), 0.5);
        assert_eq!(denormalize(&i, 0.5), 0.3);
    }

    #[test]
    fn test_zero_width_range_normalizes_to_zero() {
        let i = item(0.2, 0.2);
        assert_eq!(normalize(&i, 0.2), 0.0);
        assert_eq!(denormalize(&i, 0.7), 0.2);
    }

    #[test]
    fn test_denormalize_clamps_to_bounds() {
        let i = item(0.1, 0.5);
        assert_eq!(denormalize(&i, 1.5), 0.5);
        assert_eq!(denormalize(&i, -0.5), 0.1);
    }

    #[test]
    fn test_outcome_float_is_mean_of_normalized_positions() {
        // Two inputs at normalized 0.0 and 1.0 average to 0.5.
        let inputs = vec![slot(0.0, 1.0, 0.0), slot(0.1, 0.3, 0.3)];
        let output = item(0.2, 0.6);
        let result = outcome_float(&inputs, &output).unwrap();
        assert!((result - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_outcome_float_within_output_bounds() {
        let inputs = vec![slot(0.0, 1.0, 1.0), slot(0.0, 1.0, 0.95)];
        let output = item(0.06, 0.11);
        let result = outcome_float(&inputs, &output).unwrap();
        assert!(result >= output.min_float);
        assert!(result <= output.max_float);
    }

    #[test]
    fn test_empty_inputs_is_an_error() {
        let output = item(0.0, 1.0);
        assert!(matches!(
            outcome_float(&[], &output),
            Err(TradeUpError::NoInputs)
        ));
    }
}
