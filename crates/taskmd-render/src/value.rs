//! Display form of parameter default values.

use taskmd_manifest::ParamValue;

/// Render a default value the way it appears after `Default:`.
///
/// Strings are verbatim, arrays are `[a, b, c]` and objects are always `{}`.
pub fn stringify(value: &ParamValue) -> String {
    match value {
        ParamValue::String(s) => s.clone(),
        ParamValue::Array(items) => format!("[{}]", items.join(", ")),
        ParamValue::Object(_) => "{}".to_string(),
    }
}
