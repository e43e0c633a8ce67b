// ramsinrs/src/validate.rs

//! Whole-document validation against a schema registry.
//!
//! Every field with a schema entry is checked; fields without one pass
//! through untouched (the schema-less fallback path). Failures accumulate so
//! one run reports every violation at once. On success the returned document
//! is normalized: integer literals in real-typed fields become reals, and
//! integral reals in integer-typed fields become integers.

use crate::coerce::{Cardinality, FieldType};
use crate::error::{FieldError, ValidationErrors};
use crate::schema::{Constraint, FieldRef, Schema, SchemaField};
use ramsinrs_nml::{Namelist, NmlValue};
use std::collections::HashSet;

/// Validate `doc` against `schema`, returning the normalized document or the
/// full ordered list of failures. Never both.
pub fn validate(doc: &Namelist, schema: &Schema) -> Result<Namelist, ValidationErrors> {
    let mut normalized = doc.clone();
    let mut errors: Vec<FieldError> = Vec::new();
    let mut failed: HashSet<(String, String)> = HashSet::new();

    // First pass: type normalization per declared type.
    for (group_name, group) in doc.groups() {
        let Some(sgroup) = schema.group(group_name) else {
            continue;
        };
        for (field_name, value) in group.variables() {
            let Some(sfield) = sgroup.field(field_name) else {
                continue;
            };
            match normalize(value, sfield) {
                Ok(v) => {
                    normalized
                        .get_group_mut(group_name)
                        .unwrap()
                        .insert_value(field_name, v);
                }
                Err(reason) => {
                    errors.push(FieldError::new(
                        group_name,
                        field_name,
                        value.to_literal(),
                        reason,
                    ));
                    failed.insert((group_name.clone(), field_name.clone()));
                }
            }
        }
    }

    // Second pass: constraints over the normalized document. Cross-field
    // rules only see referenced fields that normalized cleanly.
    let snapshot = normalized.clone();
    for (group_name, group) in snapshot.groups() {
        let Some(sgroup) = schema.group(group_name) else {
            continue;
        };
        for (field_name, value) in group.variables() {
            let Some(sfield) = sgroup.field(field_name) else {
                continue;
            };
            if failed.contains(&(group_name.clone(), field_name.clone())) {
                continue;
            }
            for constraint in &sfield.constraints {
                if let Some(reason) = violation(constraint, value, &snapshot, &failed) {
                    errors.push(FieldError::new(
                        group_name,
                        field_name,
                        value.to_literal(),
                        reason,
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationErrors(errors))
    }
}

fn normalize(value: &NmlValue, sfield: &SchemaField) -> Result<NmlValue, String> {
    match sfield.card {
        Cardinality::Scalar => normalize_scalar(value, sfield.ftype),
        Cardinality::List => {
            // A one-element list reads back from a namelist as a scalar.
            let elements: Vec<&NmlValue> = match value {
                NmlValue::Array(arr) => arr.iter().collect(),
                scalar => vec![scalar],
            };
            let mut out = Vec::with_capacity(elements.len());
            for element in elements {
                out.push(normalize_scalar(element, sfield.ftype)?);
            }
            Ok(NmlValue::Array(out))
        }
    }
}

fn normalize_scalar(value: &NmlValue, ftype: FieldType) -> Result<NmlValue, String> {
    match (ftype, value) {
        (FieldType::Int, NmlValue::Integer(_)) => Ok(value.clone()),
        (FieldType::Int, NmlValue::Real(f)) if f.fract() == 0.0 && f.is_finite() => {
            Ok(NmlValue::Integer(*f as i64))
        }
        (FieldType::Real, NmlValue::Real(_)) => Ok(value.clone()),
        (FieldType::Real, NmlValue::Integer(i)) => Ok(NmlValue::Real(*i as f64)),
        (FieldType::Bool, NmlValue::Logical(_)) => Ok(value.clone()),
        (FieldType::Str, NmlValue::Character(_)) => Ok(value.clone()),
        _ => Err(format!(
            "expected {}, found {}",
            ftype.name(),
            value.type_name()
        )),
    }
}

/// Evaluate one constraint; Some(reason) on violation, None otherwise.
/// Cross-field constraints are vacuously satisfied when a referenced field is
/// absent or itself failed to normalize.
fn violation(
    constraint: &Constraint,
    value: &NmlValue,
    doc: &Namelist,
    failed: &HashSet<(String, String)>,
) -> Option<String> {
    match constraint {
        Constraint::IntChoice(choices) => {
            let v = value.as_integer().ok()?;
            if !choices.contains(&v) {
                return Some(format!("must be one of {:?}", choices));
            }
            None
        }
        Constraint::StrChoice(choices) => {
            let v = value.as_character().ok()?;
            if !choices.contains(&v) {
                return Some(format!("must be one of {:?}", choices));
            }
            None
        }
        Constraint::Positive => {
            let v = value.as_real().ok()?;
            if v <= 0.0 {
                return Some("must be positive".to_string());
            }
            None
        }
        Constraint::Range { min, max } => {
            let v = value.as_real().ok()?;
            match (min, max) {
                (Some(lo), Some(hi)) if v < *lo || v > *hi => {
                    Some(format!("must be between {} and {}", lo, hi))
                }
                (Some(lo), None) if v < *lo => {
                    Some(format!("must be greater or equal to {}", lo))
                }
                (None, Some(hi)) if v > *hi => {
                    Some(format!("must be lesser or equal to {}", hi))
                }
                _ => None,
            }
        }
        Constraint::IntElemChoice(choices) => {
            let elements = value.as_array().ok()?;
            for element in elements {
                let v = element.as_integer().ok()?;
                if !choices.contains(&v) {
                    return Some(format!("each value must be one of {:?}", choices));
                }
            }
            None
        }
        Constraint::StrElemChoice(choices) => {
            let elements = value.as_array().ok()?;
            for element in elements {
                let v = element.as_character().ok()?;
                if !choices.contains(&v) {
                    return Some(format!("each value must be one of {:?}", choices));
                }
            }
            None
        }
        Constraint::NonEmpty => {
            let v = value.as_character().ok()?;
            if v.is_empty() {
                return Some("length must be greater or equal to 1".to_string());
            }
            None
        }
        Constraint::SumEq(expected) => {
            let elements = value.as_array().ok()?;
            let mut sum = 0.0;
            for element in elements {
                sum += element.as_real().ok()?;
            }
            if sum != *expected {
                return Some(format!("elements must sum to {}", expected));
            }
            None
        }
        Constraint::LengthOf { count, when_zero } => {
            if let Some(gate) = when_zero {
                let gate_value = lookup(doc, failed, gate)?;
                if gate_value.as_real().ok()? != 0.0 {
                    return None;
                }
            }
            let expected = lookup(doc, failed, count)?.as_integer().ok()?;
            let len = value.array_len().unwrap_or(1) as i64;
            if len != expected {
                return Some(format!("length must be equal to {}", count.field));
            }
            None
        }
        Constraint::MultipleOf {
            of,
            max_ratio,
            when_eq,
        } => {
            if let Some((enable, expected)) = when_eq {
                let enable_value = lookup(doc, failed, enable)?;
                if enable_value.as_integer().ok()? != *expected {
                    return None;
                }
            }
            let divisor = lookup(doc, failed, of)?.as_real().ok()?;
            let v = value.as_real().ok()?;
            match max_ratio {
                Some(ratio) => {
                    if v <= 0.0 || v % divisor != 0.0 {
                        Some(format!(
                            "must be a positive multiple of {}.{}",
                            of.group, of.field
                        ))
                    } else if v / divisor > *ratio {
                        Some(format!(
                            "must not exceed {} times {}.{}",
                            ratio, of.group, of.field
                        ))
                    } else {
                        None
                    }
                }
                None => {
                    if v % divisor != 0.0 {
                        Some(format!("must be a multiple of {}.{}", of.group, of.field))
                    } else {
                        None
                    }
                }
            }
        }
        Constraint::LessThanField(other) => {
            let limit = lookup(doc, failed, other)?.as_real().ok()?;
            let v = value.as_real().ok()?;
            if v >= limit {
                return Some(format!("must be lesser than {}", other.field));
            }
            None
        }
    }
}

fn lookup<'a>(
    doc: &'a Namelist,
    failed: &HashSet<(String, String)>,
    fref: &FieldRef,
) -> Option<&'a NmlValue> {
    if failed.contains(&(fref.group.to_string(), fref.field.to_string())) {
        return None;
    }
    doc.get_group(fref.group)?.get(fref.field)
}
