//! Animation sub-config validation.

use crate::schema::ContourConfig;

use super::helpers::validate_positive_f32;

/// Validate shader clock constraints.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &ContourConfig) {
    let anim = &config.animation;

    validate_positive_f32(errors, "animation.time_scale", anim.time_scale);

    if anim.time_offset < 0.0 {
        errors.push(format!(
            "animation.time_offset = {} must not be negative",
            anim.time_offset
        ));
    }

    if anim.time_max < anim.time_offset {
        errors.push(format!(
            "animation.time_max = {} is below animation.time_offset = {}",
            anim.time_max, anim.time_offset
        ));
    }
}
