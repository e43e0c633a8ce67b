// ramsinrs/src/coerce.rs

//! The value coercer: raw environment strings into typed namelist values.
//!
//! Coercion is a pure function of the raw string and the field's declared
//! type and cardinality. Lists fail atomically: a single bad element rejects
//! the whole value.

use ramsinrs_nml::value::{parse_integer, parse_real, unquote};
use ramsinrs_nml::NmlValue;
use thiserror::Error;

/// Scalar type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    Real,
    Bool,
    Str,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Int => "integer",
            FieldType::Real => "real",
            FieldType::Bool => "logical",
            FieldType::Str => "character",
        }
    }
}

/// Whether a field holds one value or a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Scalar,
    List,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot coerce '{raw}' to {expected}")]
pub struct CoerceError {
    pub raw: String,
    pub expected: String,
}

impl CoerceError {
    fn new(raw: &str, expected: String) -> Self {
        Self {
            raw: raw.to_string(),
            expected,
        }
    }
}

/// Coerce a raw string into a typed value.
pub fn coerce(raw: &str, ftype: FieldType, card: Cardinality) -> Result<NmlValue, CoerceError> {
    match card {
        Cardinality::Scalar => coerce_scalar(raw.trim(), ftype)
            .ok_or_else(|| CoerceError::new(raw, ftype.name().to_string())),
        Cardinality::List => {
            let elements = split_list(raw);
            let mut values = Vec::with_capacity(elements.len());
            for element in &elements {
                match coerce_scalar(element.trim(), ftype) {
                    Some(v) => values.push(v),
                    None => {
                        return Err(CoerceError::new(raw, format!("list of {}", ftype.name())));
                    }
                }
            }
            if values.is_empty() {
                return Err(CoerceError::new(raw, format!("list of {}", ftype.name())));
            }
            Ok(NmlValue::Array(values))
        }
    }
}

fn coerce_scalar(raw: &str, ftype: FieldType) -> Option<NmlValue> {
    match ftype {
        FieldType::Int => parse_integer(raw).ok().map(NmlValue::Integer),
        FieldType::Real => parse_real(raw).ok().map(NmlValue::Real),
        FieldType::Bool => match raw {
            ".true." => Some(NmlValue::Logical(true)),
            ".false." => Some(NmlValue::Logical(false)),
            _ => None,
        },
        FieldType::Str => {
            if raw.is_empty() {
                None
            } else {
                Some(NmlValue::Character(unquote(raw)))
            }
        }
    }
}

/// Split a raw list on commas outside quoted sections, so character lists
/// like `'topo','precip'` keep their elements intact.
fn split_list(raw: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match c {
            '\'' | '"' => {
                match quote {
                    None => quote = Some(c),
                    Some(q) if q == c => quote = None,
                    Some(_) => {}
                }
                current.push(c);
            }
            ',' if quote.is_none() => {
                elements.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    elements.push(current.trim().to_string());
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_scalars() {
        assert_eq!(
            coerce("560", FieldType::Int, Cardinality::Scalar).unwrap(),
            NmlValue::Integer(560)
        );
        assert_eq!(
            coerce("15", FieldType::Real, Cardinality::Scalar).unwrap(),
            NmlValue::Real(15.0)
        );
        assert_eq!(
            coerce("1000.555", FieldType::Real, Cardinality::Scalar).unwrap(),
            NmlValue::Real(1000.555)
        );
        assert_eq!(
            coerce(".false.", FieldType::Bool, Cardinality::Scalar).unwrap(),
            NmlValue::Logical(false)
        );
        assert_eq!(
            coerce("'topo'", FieldType::Str, Cardinality::Scalar).unwrap(),
            NmlValue::Character("topo".to_string())
        );
        assert_eq!(
            coerce("topo", FieldType::Str, Cardinality::Scalar).unwrap(),
            NmlValue::Character("topo".to_string())
        );
    }

    #[test]
    fn test_coerce_bool_is_strict() {
        assert!(coerce("true", FieldType::Bool, Cardinality::Scalar).is_err());
        assert!(coerce(".TRUE.", FieldType::Bool, Cardinality::Scalar).is_err());
    }

    #[test]
    fn test_coerce_lists() {
        assert_eq!(
            coerce("500,400,300,200", FieldType::Int, Cardinality::List).unwrap(),
            NmlValue::from(vec![500i64, 400, 300, 200])
        );
        assert_eq!(
            coerce("1.0e10, 4.2", FieldType::Real, Cardinality::List).unwrap(),
            NmlValue::from(vec![1.0e10, 4.2])
        );
        assert_eq!(
            coerce("'topo','precip'", FieldType::Str, Cardinality::List).unwrap(),
            NmlValue::from(vec!["topo", "precip"])
        );
        assert_eq!(
            coerce(".false.,.true.", FieldType::Bool, Cardinality::List).unwrap(),
            NmlValue::from(vec![false, true])
        );
    }

    #[test]
    fn test_list_failure_is_atomic() {
        let err = coerce("1,2,abc", FieldType::Int, Cardinality::List).unwrap_err();
        assert_eq!(err.raw, "1,2,abc");
        assert_eq!(err.expected, "list of integer");
    }

    #[test]
    fn test_quoted_comma_stays_in_element() {
        assert_eq!(
            coerce("'a,b','c'", FieldType::Str, Cardinality::List).unwrap(),
            NmlValue::from(vec!["a,b", "c"])
        );
    }

    #[test]
    fn test_single_value_list_coerces() {
        assert_eq!(
            coerce("100.", FieldType::Real, Cardinality::List).unwrap(),
            NmlValue::from(vec![100.0])
        );
    }

    #[test]
    fn test_coercion_roundtrips_through_literals() {
        // Coercing the literal form of a value and re-serializing reproduces
        // the original literal.
        let cases = [
            ("15.0", FieldType::Real, Cardinality::Scalar),
            ("42", FieldType::Int, Cardinality::Scalar),
            (".true.", FieldType::Bool, Cardinality::Scalar),
            ("'topo'", FieldType::Str, Cardinality::Scalar),
            ("500, 400, 300", FieldType::Int, Cardinality::List),
            (".false., .true.", FieldType::Bool, Cardinality::List),
        ];
        for (literal, ftype, card) in cases {
            let value = coerce(literal, ftype, card).unwrap();
            assert_eq!(value.to_literal(), literal, "roundtrip for '{}'", literal);
        }
    }
}
