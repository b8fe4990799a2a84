//! Bracketed dump notation for records.
//!
//! A flat record renders as
//!
//! ```text
//! (object) array(
//!    'name' => 'John',
//!    'age' => 31,
//! )
//! ```
//!
//! Lines inside a dump are always separated by `\n`; the configured line
//! ending is only appended after the whole dump. Line breaks inside quoted
//! text are escaped as `\n` / `\r` so every scalar field stays on one line.
//! Nested records and sequences open on their field line and indent three
//! more spaces:
//!
//! ```text
//! (object) array(
//!    'tags' => array (
//!       0 => 'a',
//!    ),
//!    'owner' => (object) array(
//!       'name' => 'x',
//!    ),
//! )
//! ```

use crate::core::value::LoggableValue;

const INDENT: &str = "   ";

/// Render a record's fields in dump notation, preserving field order.
pub fn render_record(fields: &[(String, LoggableValue)]) -> String {
    let mut out = String::new();
    write_record(&mut out, fields, 0);
    out
}

fn write_record(out: &mut String, fields: &[(String, LoggableValue)], depth: usize) {
    out.push_str("(object) array(\n");
    for (name, value) in fields {
        push_indent(out, depth + 1);
        push_quoted(out, name);
        out.push_str(" => ");
        write_value(out, value, depth + 1);
        out.push_str(",\n");
    }
    push_indent(out, depth);
    out.push(')');
}

fn write_sequence(out: &mut String, items: &[LoggableValue], depth: usize) {
    out.push_str("array (\n");
    for (index, item) in items.iter().enumerate() {
        push_indent(out, depth + 1);
        out.push_str(&index.to_string());
        out.push_str(" => ");
        write_value(out, item, depth + 1);
        out.push_str(",\n");
    }
    push_indent(out, depth);
    out.push(')');
}

fn write_value(out: &mut String, value: &LoggableValue, depth: usize) {
    match value {
        LoggableValue::Unset | LoggableValue::Null => out.push_str("NULL"),
        LoggableValue::Bool(true) => out.push_str("true"),
        LoggableValue::Bool(false) => out.push_str("false"),
        LoggableValue::Integer(i) => out.push_str(&i.to_string()),
        LoggableValue::Unsigned(u) => out.push_str(&u.to_string()),
        LoggableValue::Float(f) => out.push_str(&export_float(*f)),
        LoggableValue::Text(text) => push_quoted(out, text),
        LoggableValue::Sequence(items) => write_sequence(out, items, depth),
        LoggableValue::Record(fields) => write_record(out, fields, depth),
    }
}

// Floats keep a fractional part so they stay distinguishable from integers.
fn export_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{f:?}")
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' | '\'' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
