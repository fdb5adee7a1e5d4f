//! # Cubic-Measure Resolver
//!
//! The carrier prices volume through a cube-equivalent edge length: the
//! shipment's total volume is treated as one cube, and its edge (rounded
//! up to a whole centimetre) is the "measure". Nothing is ever priced
//! below the minimum carton edge.

use crate::limits::MIN_EDGE_CM;

/// Equivalent cube edge for `total_volume_cm3`: `ceil(cbrt(v))`, never
/// below 16 cm.
///
/// Exact cubes resolve to their integer edge even when the floating-point
/// cube root lands a hair above it.
pub fn resolve_measure(total_volume_cm3: f64) -> f64 {
    if total_volume_cm3 <= 0.0 {
        return MIN_EDGE_CM;
    }

    let root = total_volume_cm3.cbrt();
    let nearest = root.round();
    let edge = if nearest * nearest * nearest == total_volume_cm3 {
        nearest
    } else {
        root.ceil()
    };

    edge.max(MIN_EDGE_CM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_volume_is_minimum_edge() {
        assert_eq!(resolve_measure(0.0), 16.0);
    }

    #[test]
    fn small_volume_is_minimum_edge() {
        // 2 x 11 x 16 floor parcel
        assert_eq!(resolve_measure(352.0), 16.0);
    }

    #[test]
    fn perfect_cubes_are_exact() {
        assert_eq!(resolve_measure(8_000.0), 20.0);
        assert_eq!(resolve_measure(27_000.0), 30.0);
        assert_eq!(resolve_measure(64_000.0), 40.0);
        assert_eq!(resolve_measure(287_496.0), 66.0);
        assert_eq!(resolve_measure(3_375_000.0), 150.0);
    }

    #[test]
    fn non_cubes_round_up() {
        assert_eq!(resolve_measure(8_001.0), 21.0);
        assert_eq!(resolve_measure(287_497.0), 67.0);
    }

    proptest! {
        #[test]
        fn never_below_minimum(v in 0.0f64..1e9) {
            prop_assert!(resolve_measure(v) >= 16.0);
        }

        #[test]
        fn monotone_non_decreasing(a in 0.0f64..1e9, b in 0.0f64..1e9) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(resolve_measure(lo) <= resolve_measure(hi));
        }

        #[test]
        fn edge_cube_covers_volume(v in 4_096.0f64..1e9) {
            let m = resolve_measure(v);
            prop_assert!(m * m * m >= v);
            prop_assert_eq!(m.fract(), 0.0);
        }
    }
}
