//! Grid snapping.

/// Snaps `value` to the nearest multiple of `step`.
///
/// ```text
/// r = value % step
/// r >= step/2  ->  value + step - r   (round up, ties up)
/// otherwise    ->  value - r          (round down)
/// ```
///
/// A non-positive `step` disables snapping and returns `value`
/// unchanged. Snapping an already snapped value is a no-op.
pub fn snap(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    let r = value % step;
    if r >= step / 2.0 {
        value + step - r
    } else {
        value - r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest_multiple() {
        assert_eq!(snap(17.0, 15.0), 15.0);
        assert_eq!(snap(23.0, 15.0), 30.0);
        assert_eq!(snap(0.0, 15.0), 0.0);
        assert_eq!(snap(30.0, 15.0), 30.0);
    }

    #[test]
    fn test_tie_rounds_up() {
        assert_eq!(snap(7.5, 15.0), 15.0);
        assert_eq!(snap(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_non_positive_step_is_passthrough() {
        assert_eq!(snap(12.34, 0.0), 12.34);
        assert_eq!(snap(12.34, -5.0), 12.34);
    }

    #[test]
    fn test_idempotent_on_exact_grid() {
        let snapped = snap(23.0, 4.0);
        assert_eq!(snap(snapped, 4.0), snapped);
    }
}
