//! Human-readable labels for input field names, used only in diagnostics.

/// Field name to label table.
pub const INPUT_VARIABLES: &[(&str, &str)] = &[
    ("event_key", "Event key"),
    ("experiment_key", "Experiment key"),
    ("feature_flag_key", "Feature flag key"),
    ("user_id", "User ID"),
    ("variable_key", "Variable key"),
    ("variable_type", "Variable type"),
    ("variation_key", "Variation key"),
];

/// Label for `key`, or `key` itself when it has no entry.
pub fn field_label(key: &str) -> &str {
    INPUT_VARIABLES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(key, |(_, label)| *label)
}
