//! Package measurement record and boundary validation.
//!
//! A `Measurement` is only ever constructed from four validated,
//! non-negative values. Validation reports every offending field rather
//! than stopping at the first, so a caller sees the full picture in one
//! response.

use serde::Serialize;

/// Four package measurements: dimensions in centimeters, mass in kilograms.
///
/// No identity, no mutation. Built per request and dropped with the response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

/// Raw per-field value as extracted from a request, before range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawField {
    /// Field absent from the request
    Missing,
    /// Field present but not parseable as a number
    NotNumeric,
    /// Parsed numeric value, sign not yet checked
    Value(f64),
}

/// A rejected input field and the constraint it violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl FieldError {
    const fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: "field is required",
        }
    }

    const fn not_numeric(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be a number",
        }
    }

    const fn negative(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be non-negative",
        }
    }
}

impl Measurement {
    /// Validate four raw fields into a measurement.
    ///
    /// Checks every field and returns all violations together. Zero is a
    /// valid value (degenerate package). Negative values are rejected,
    /// never clamped.
    pub fn validate(
        width: RawField,
        height: RawField,
        length: RawField,
        mass: RawField,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let width = check_field("width", width, &mut errors);
        let height = check_field("height", height, &mut errors);
        let length = check_field("length", length, &mut errors);
        let mass = check_field("mass", mass, &mut errors);

        if errors.is_empty() {
            Ok(Self {
                // All four are Some when no error was recorded
                width: width.unwrap_or_default(),
                height: height.unwrap_or_default(),
                length: length.unwrap_or_default(),
                mass: mass.unwrap_or_default(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Check a single field, recording a violation if any.
fn check_field(name: &'static str, raw: RawField, errors: &mut Vec<FieldError>) -> Option<f64> {
    match raw {
        RawField::Missing => {
            errors.push(FieldError::missing(name));
            None
        }
        RawField::NotNumeric => {
            errors.push(FieldError::not_numeric(name));
            None
        }
        RawField::Value(v) if v < 0.0 => {
            errors.push(FieldError::negative(name));
            None
        }
        RawField::Value(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: f64) -> RawField {
        RawField::Value(v)
    }

    #[test]
    fn test_valid_measurement() {
        let m = Measurement::validate(value(10.0), value(20.0), value(30.0), value(5.0)).unwrap();
        assert_eq!(m.width, 10.0);
        assert_eq!(m.height, 20.0);
        assert_eq!(m.length, 30.0);
        assert_eq!(m.mass, 5.0);
    }

    #[test]
    fn test_zero_values_are_valid() {
        let m = Measurement::validate(value(0.0), value(0.0), value(0.0), value(0.0)).unwrap();
        assert_eq!(m.width, 0.0);
        assert_eq!(m.mass, 0.0);
    }

    #[test]
    fn test_negative_width_rejected() {
        let errors =
            Measurement::validate(value(-10.0), value(10.0), value(10.0), value(5.0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "width");
        assert_eq!(errors[0].reason, "must be non-negative");
    }

    #[test]
    fn test_missing_field_rejected() {
        let errors =
            Measurement::validate(value(10.0), RawField::Missing, value(10.0), value(5.0))
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "height");
        assert_eq!(errors[0].reason, "field is required");
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let errors =
            Measurement::validate(value(10.0), value(10.0), value(10.0), RawField::NotNumeric)
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "mass");
        assert_eq!(errors[0].reason, "must be a number");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let errors = Measurement::validate(
            value(-1.0),
            RawField::Missing,
            RawField::NotNumeric,
            value(-2.0),
        )
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["width", "height", "length", "mass"]);
    }
}
