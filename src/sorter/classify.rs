//! Stack classification rules.
//!
//! A pure decision over four non-negative numbers. No I/O, no state, no
//! error path: every validated measurement maps to exactly one stack.

use super::{Measurement, Stack};

/// Volume at or above which a package is bulky, in cubic centimeters.
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// Single dimension at or above which a package is bulky, in centimeters.
pub const DIMENSION_THRESHOLD: f64 = 150.0;

/// Mass at or above which a package is heavy, in kilograms.
pub const MASS_THRESHOLD: f64 = 20.0;

/// A package is bulky if its volume reaches `VOLUME_THRESHOLD` or any
/// single dimension reaches `DIMENSION_THRESHOLD`. Both bounds inclusive.
pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    let volume = width * height * length;
    volume >= VOLUME_THRESHOLD
        || width >= DIMENSION_THRESHOLD
        || height >= DIMENSION_THRESHOLD
        || length >= DIMENSION_THRESHOLD
}

/// A package is heavy if its mass reaches `MASS_THRESHOLD`. Inclusive.
pub fn is_heavy(mass: f64) -> bool {
    mass >= MASS_THRESHOLD
}

/// Dispatch a measurement to its handling stack.
///
/// Both predicates are evaluated before the decision:
///
/// | bulky | heavy | stack    |
/// |-------|-------|----------|
/// | no    | no    | STANDARD |
/// | yes   | no    | SPECIAL  |
/// | no    | yes   | SPECIAL  |
/// | yes   | yes   | REJECTED |
pub fn classify(measurement: &Measurement) -> Stack {
    let bulky = is_bulky(measurement.width, measurement.height, measurement.length);
    let heavy = is_heavy(measurement.mass);

    match (bulky, heavy) {
        (true, true) => Stack::Rejected,
        (true, false) | (false, true) => Stack::Special,
        (false, false) => Stack::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(width: f64, height: f64, length: f64, mass: f64) -> Measurement {
        Measurement {
            width,
            height,
            length,
            mass,
        }
    }

    #[test]
    fn test_small_package_not_bulky() {
        assert!(!is_bulky(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_volume_exactly_at_threshold_is_bulky() {
        // 100 * 100 * 100 = 1,000,000
        assert!(is_bulky(100.0, 100.0, 100.0));
    }

    #[test]
    fn test_volume_just_below_threshold_not_bulky() {
        // 99.9999999 * 100 * 100 < 1,000,000, no dimension at 150
        assert!(!is_bulky(99.999_999_9, 100.0, 100.0));
    }

    #[test]
    fn test_each_dimension_at_threshold_is_bulky() {
        assert!(is_bulky(150.0, 1.0, 1.0));
        assert!(is_bulky(1.0, 150.0, 1.0));
        assert!(is_bulky(1.0, 1.0, 150.0));
    }

    #[test]
    fn test_dimension_just_below_threshold_not_bulky() {
        // Volume 149.999 * 1 * 1 is far below the volume threshold too
        assert!(!is_bulky(149.999, 1.0, 1.0));
    }

    #[test]
    fn test_mass_thresholds() {
        assert!(!is_heavy(0.0));
        assert!(!is_heavy(19.999));
        assert!(is_heavy(20.0));
        assert!(is_heavy(25.0));
    }

    #[test]
    fn test_standard_small_light() {
        assert_eq!(classify(&measure(10.0, 10.0, 10.0, 5.0)), Stack::Standard);
    }

    #[test]
    fn test_standard_zero_package() {
        // Degenerate but valid: neither bulky nor heavy
        assert_eq!(classify(&measure(0.0, 0.0, 0.0, 0.0)), Stack::Standard);
    }

    #[test]
    fn test_special_bulky_by_volume() {
        assert_eq!(
            classify(&measure(100.0, 100.0, 100.0, 5.0)),
            Stack::Special
        );
    }

    #[test]
    fn test_special_bulky_by_dimension_with_zero_mass() {
        assert_eq!(classify(&measure(150.0, 1.0, 1.0, 0.0)), Stack::Special);
    }

    #[test]
    fn test_special_heavy_only() {
        assert_eq!(classify(&measure(10.0, 10.0, 10.0, 25.0)), Stack::Special);
    }

    #[test]
    fn test_rejected_bulky_and_heavy() {
        assert_eq!(
            classify(&measure(100.0, 100.0, 100.0, 25.0)),
            Stack::Rejected
        );
        assert_eq!(classify(&measure(150.0, 1.0, 1.0, 20.0)), Stack::Rejected);
    }

    #[test]
    fn test_just_below_all_thresholds_is_standard() {
        assert_eq!(
            classify(&measure(99.0, 100.0, 100.0, 19.99)),
            Stack::Standard
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let m = measure(120.0, 80.0, 110.0, 19.0);
        assert_eq!(classify(&m), classify(&m));
    }

    #[test]
    fn test_growing_inputs_never_relax_the_stack() {
        // Strictness order: STANDARD < SPECIAL < REJECTED.
        // Walking one dimension upward must never move a package down.
        fn rank(stack: Stack) -> u8 {
            match stack {
                Stack::Standard => 0,
                Stack::Special => 1,
                Stack::Rejected => 2,
            }
        }

        let mut previous = rank(classify(&measure(0.0, 50.0, 50.0, 25.0)));
        for width in [1.0, 100.0, 149.0, 150.0, 400.0, 10_000.0] {
            let current = rank(classify(&measure(width, 50.0, 50.0, 25.0)));
            assert!(current >= previous, "stack relaxed at width {width}");
            previous = current;
        }

        let mut previous = rank(classify(&measure(150.0, 1.0, 1.0, 0.0)));
        for mass in [1.0, 19.999, 20.0, 500.0] {
            let current = rank(classify(&measure(150.0, 1.0, 1.0, mass)));
            assert!(current >= previous, "stack relaxed at mass {mass}");
            previous = current;
        }
    }

    #[test]
    fn test_arbitrarily_large_values_still_classify() {
        assert_eq!(
            classify(&measure(1.0e12, 1.0e12, 1.0e12, 1.0e12)),
            Stack::Rejected
        );
        assert_eq!(classify(&measure(1.0e12, 0.0, 0.0, 0.0)), Stack::Special);
    }
}
