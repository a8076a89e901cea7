//! Rendering a value tree back to text.

use std::fmt::{self, Write};

use crate::value::Value;

/// Formatting options for [`dump_with`] and [`dump_to`].
///
/// The defaults produce pretty output indented by four spaces with
/// non-finite numbers rendered as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level when pretty-printing.
    pub indent: usize,
    /// Emit everything on a single line without padding.
    pub minify: bool,
    /// Render NaN and infinities with their float formatting instead of
    /// substituting `null`. The output is not valid JSON.
    pub allow_nan_inf: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            minify: false,
            allow_nan_inf: false,
        }
    }
}

impl FormatOptions {
    /// Options for the most compact output.
    #[must_use]
    pub fn minified() -> Self {
        Self {
            minify: true,
            ..Self::default()
        }
    }
}

/// Renders `value` with the default pretty formatting.
#[must_use]
pub fn dump(value: &Value) -> String {
    dump_with(value, &FormatOptions::default())
}

/// Renders `value` with the given options.
#[must_use]
pub fn dump_with(value: &Value, options: &FormatOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = dump_to(&mut out, value, options);
    out
}

/// Renders `value` into any [`fmt::Write`] sink, dispatching on the
/// active variant and passing the options through unchanged at every
/// recursive step.
pub fn dump_to<W: Write>(out: &mut W, value: &Value, options: &FormatOptions) -> fmt::Result {
    write_value(out, value, options, 0)
}

fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    options: &FormatOptions,
    depth: usize,
) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(out, *n, options),
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => write_array(out, elements, options, depth),
        Value::Object(entries) => write_object(out, entries, options, depth),
    }
}

fn write_number<W: Write>(out: &mut W, n: f64, options: &FormatOptions) -> fmt::Result {
    if !n.is_finite() && !options.allow_nan_inf {
        return out.write_str("null");
    }
    // Rust's float formatting prints the shortest representation that
    // round-trips, so no explicit precision is needed.
    write!(out, "{n}")
}

fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '/' => out.write_str("\\/")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c < '\u{20}' || c == '\u{7f}' => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn write_array<W: Write>(
    out: &mut W,
    elements: &[Value],
    options: &FormatOptions,
    depth: usize,
) -> fmt::Result {
    out.write_char('[')?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        if !options.minify {
            indent_by(out, options.indent, depth + 1)?;
        }
        write_value(out, element, options, depth + 1)?;
    }
    if !options.minify && !elements.is_empty() {
        indent_by(out, options.indent, depth)?;
    }
    out.write_char(']')
}

fn write_object<W: Write>(
    out: &mut W,
    entries: &crate::value::Object,
    options: &FormatOptions,
    depth: usize,
) -> fmt::Result {
    out.write_char('{')?;
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        if !options.minify {
            indent_by(out, options.indent, depth + 1)?;
        }
        write_string(out, key)?;
        out.write_char(':')?;
        if !options.minify {
            out.write_char(' ')?;
        }
        write_value(out, value, options, depth + 1)?;
    }
    if !options.minify && !entries.is_empty() {
        indent_by(out, options.indent, depth)?;
    }
    out.write_char('}')
}

fn indent_by<W: Write>(out: &mut W, indent: usize, depth: usize) -> fmt::Result {
    out.write_char('\n')?;
    for _ in 0..indent * depth {
        out.write_char(' ')?;
    }
    Ok(())
}
