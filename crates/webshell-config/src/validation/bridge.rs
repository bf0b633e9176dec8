//! Validation for the bridge message filter.

use crate::schema::WebshellConfig;
use webshell_common::MIN_MESSAGE_ID_LENGTH;

use super::helpers::validate_range;

/// Validate bridge constraints.
pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &WebshellConfig) {
    if config.bridge.enabled_types.is_empty() {
        errors.push("bridge.enabled_types is empty".into());
    }
    validate_range(
        errors,
        "bridge.min_id_length",
        config.bridge.min_id_length,
        MIN_MESSAGE_ID_LENGTH as u32,
        128,
    );
}
