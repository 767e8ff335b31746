//! Shared validation helpers used by the domain validators.

/// Push an error if `value` is zero.
pub(crate) fn validate_nonzero(errors: &mut Vec<String>, name: &str, value: u32) {
    if value == 0 {
        errors.push(format!("{name} = {value} must be greater than 0"));
    }
}

/// Push an error if `value` is not strictly positive.
pub(crate) fn validate_positive_f32(errors: &mut Vec<String>, name: &str, value: f32) {
    if value <= 0.0 {
        errors.push(format!("{name} = {value} must be greater than 0"));
    }
}
