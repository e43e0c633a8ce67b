// nml/src/value.rs

//! The namelist value model and its literal conversions.
//!
//! RAMSIN files only ever carry integers, reals, logicals, character strings
//! and flat arrays of those, so the value enum is restricted to exactly that
//! set. Formatting is the inverse of parsing: `parse_literal(v.to_literal())`
//! reproduces `v` for every supported value.

use crate::error::{NmlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value appearing in a namelist assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NmlValue {
    /// Integer value
    Integer(i64),

    /// Real (floating-point) value
    Real(f64),

    /// Logical (boolean) value
    Logical(bool),

    /// Character string (stored unquoted)
    Character(String),

    /// Flat array of scalar values
    Array(Vec<NmlValue>),
}

impl NmlValue {
    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            NmlValue::Integer(_) => "integer",
            NmlValue::Real(_) => "real",
            NmlValue::Logical(_) => "logical",
            NmlValue::Character(_) => "character",
            NmlValue::Array(_) => "array",
        }
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, NmlValue::Array(_))
    }

    /// Get the array length if this is an array.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            NmlValue::Array(arr) => Some(arr.len()),
            _ => None,
        }
    }

    /// Try to convert to an integer. Integral reals are accepted.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            NmlValue::Integer(i) => Ok(*i),
            NmlValue::Real(f) if f.fract() == 0.0 && f.is_finite() => {
                if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(self.conversion_error("integer"))
                }
            }
            _ => Err(self.conversion_error("integer")),
        }
    }

    /// Try to convert to a real number. Integers are promoted.
    pub fn as_real(&self) -> Result<f64> {
        match self {
            NmlValue::Real(f) => Ok(*f),
            NmlValue::Integer(i) => Ok(*i as f64),
            _ => Err(self.conversion_error("real")),
        }
    }

    /// Try to convert to a logical value.
    pub fn as_logical(&self) -> Result<bool> {
        match self {
            NmlValue::Logical(b) => Ok(*b),
            _ => Err(self.conversion_error("logical")),
        }
    }

    /// Try to convert to a string.
    pub fn as_character(&self) -> Result<&str> {
        match self {
            NmlValue::Character(s) => Ok(s),
            _ => Err(self.conversion_error("character")),
        }
    }

    /// Try to convert to an array slice.
    pub fn as_array(&self) -> Result<&[NmlValue]> {
        match self {
            NmlValue::Array(arr) => Ok(arr),
            _ => Err(self.conversion_error("array")),
        }
    }

    fn conversion_error(&self, to: &'static str) -> NmlError {
        NmlError::TypeMismatch {
            from: self.type_name(),
            to,
            value: self.to_literal(),
        }
    }

    /// Format this value as it would appear in a namelist assignment.
    ///
    /// Reals always carry a decimal point or exponent so that a re-read
    /// recovers the real type rather than an integer.
    pub fn to_literal(&self) -> String {
        match self {
            NmlValue::Integer(i) => i.to_string(),
            NmlValue::Real(f) => format_real(*f),
            NmlValue::Logical(b) => {
                if *b {
                    ".true.".to_string()
                } else {
                    ".false.".to_string()
                }
            }
            NmlValue::Character(s) => quote(s),
            NmlValue::Array(arr) => arr
                .iter()
                .map(|v| v.to_literal())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for NmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}

impl From<i64> for NmlValue {
    fn from(v: i64) -> Self {
        NmlValue::Integer(v)
    }
}

impl From<i32> for NmlValue {
    fn from(v: i32) -> Self {
        NmlValue::Integer(v as i64)
    }
}

impl From<f64> for NmlValue {
    fn from(v: f64) -> Self {
        NmlValue::Real(v)
    }
}

impl From<bool> for NmlValue {
    fn from(v: bool) -> Self {
        NmlValue::Logical(v)
    }
}

impl From<&str> for NmlValue {
    fn from(v: &str) -> Self {
        NmlValue::Character(v.to_string())
    }
}

impl From<String> for NmlValue {
    fn from(v: String) -> Self {
        NmlValue::Character(v)
    }
}

impl<T: Into<NmlValue>> From<Vec<T>> for NmlValue {
    fn from(v: Vec<T>) -> Self {
        NmlValue::Array(v.into_iter().map(Into::into).collect())
    }
}

fn format_real(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            "+inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else if value.is_nan() {
        "nan".to_string()
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            s
        } else {
            format!("{}.0", s)
        }
    }
}

/// Quote a character value, doubling internal quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Strip surrounding quotes from a character literal, undoubling internal
/// quotes. Unquoted input is returned trimmed and unchanged.
pub fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('\'') && trimmed.ends_with('\'') {
        trimmed[1..trimmed.len() - 1].replace("''", "'")
    } else if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}

/// Parse an integer literal, ignoring a Fortran kind suffix (`42_i8`).
pub fn parse_integer(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    let clean = match trimmed.find('_') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };
    clean
        .parse::<i64>()
        .map_err(|_| NmlError::invalid_literal(value, "integer"))
}

/// Parse a real literal, accepting Fortran `d`/`D` exponents (`1.0d0`,
/// `2.5D-3`), kind suffixes, and plain integer strings.
pub fn parse_real(value: &str) -> Result<f64> {
    let mut normalized = value.trim().to_string();

    if let Some(pos) = normalized.to_lowercase().find('d') {
        normalized.replace_range(pos..pos + 1, "e");
    }

    let clean = match normalized.find('_') {
        Some(pos) => &normalized[..pos],
        None => normalized.as_str(),
    };

    clean
        .parse::<f64>()
        .map_err(|_| NmlError::invalid_literal(value, "real"))
}

/// Parse a logical literal. Accepts the Fortran forms `.true.`, `.false.`,
/// `.t.`, `.f.` plus the bare `t`/`f`/`true`/`false` some writers emit.
pub fn parse_logical(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        ".true." | ".t." | "true" | "t" => Ok(true),
        ".false." | ".f." | "false" | "f" => Ok(false),
        _ => Err(NmlError::invalid_literal(value, "logical")),
    }
}

/// Check whether a string is a plain integer literal (optional sign, digits,
/// optional kind suffix).
pub fn looks_like_integer(value: &str) -> bool {
    let trimmed = value.trim();
    let clean = match trimmed.find('_') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };

    let mut chars = clean.chars();
    match chars.next() {
        Some(c) if c == '+' || c == '-' => {
            let rest: Vec<char> = chars.collect();
            !rest.is_empty() && rest.iter().all(|c| c.is_ascii_digit())
        }
        Some(c) if c.is_ascii_digit() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Parse a single scalar literal with auto-detection: logical, then integer,
/// then real, falling back to an (unquoted) character string.
pub fn parse_literal(value: &str) -> NmlValue {
    let trimmed = value.trim();

    if trimmed.starts_with('\'') || trimmed.starts_with('"') {
        return NmlValue::Character(unquote(trimmed));
    }

    if let Ok(b) = parse_logical(trimmed) {
        return NmlValue::Logical(b);
    }

    if looks_like_integer(trimmed) {
        if let Ok(i) = parse_integer(trimmed) {
            return NmlValue::Integer(i);
        }
    }

    if let Ok(f) = parse_real(trimmed) {
        return NmlValue::Real(f);
    }

    NmlValue::Character(trimmed.to_string())
}

/// Parse a repeat expression like `3*0.5`, returning `(count, value)`.
/// A token without `*` parses as a single value.
pub fn parse_repeat(value: &str) -> Result<(usize, NmlValue)> {
    match value.find('*') {
        Some(pos) if looks_like_integer(&value[..pos]) => {
            let count = value[..pos]
                .trim()
                .parse::<usize>()
                .map_err(|_| NmlError::invalid_literal(value, "repeat count"))?;
            Ok((count, parse_literal(&value[pos + 1..])))
        }
        _ => Ok((1, parse_literal(value))),
    }
}
