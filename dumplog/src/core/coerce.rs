//! Value-to-text coercion.
//!
//! One rule per [`LoggableValue`] variant. The result never carries a trailing
//! line ending; the dumper appends exactly one after it.

use crate::core::export::render_record;
use crate::core::types::LineEnding;
use crate::core::value::LoggableValue;

/// Placeholder written when no value was supplied.
pub const DEFAULT_PLACEHOLDER: &str = "The data to be verified is not set.";

/// Coerce `value` to its dump text.
///
/// `placeholder` replaces [`LoggableValue::Unset`]; `line_ending` separates
/// sequence elements.
pub fn coerce(value: &LoggableValue, placeholder: &str, line_ending: LineEnding) -> String {
    match value {
        LoggableValue::Unset => placeholder.to_string(),
        LoggableValue::Null => "Null".to_string(),
        LoggableValue::Bool(true) => "True".to_string(),
        LoggableValue::Bool(false) => "False".to_string(),
        LoggableValue::Sequence(items) => items
            .iter()
            .map(|item| coerce(item, placeholder, line_ending))
            .collect::<Vec<_>>()
            .join(line_ending.as_str()),
        LoggableValue::Record(fields) => render_record(fields),
        LoggableValue::Text(text) => text.clone(),
        LoggableValue::Integer(i) => i.to_string(),
        LoggableValue::Unsigned(u) => u.to_string(),
        LoggableValue::Float(f) => format_float(*f),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        f.to_string()
    }
}
