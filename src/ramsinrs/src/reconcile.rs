// ramsinrs/src/reconcile.rs

//! The reconciliation engine: merge environment overrides into a namelist
//! document and validate the result.
//!
//! One document moves through Loaded -> Overridden -> Validated; a schema
//! violation is terminal for the run. Variables that do not resolve to a
//! known group, or name a field the group does not carry, are logged and
//! dropped — an operator's environment may hold variables irrelevant to this
//! model version.

use crate::coerce::{coerce, Cardinality, FieldType};
use crate::env::{resolve_key, RawOverride};
use crate::error::{FieldError, RamsinError, ValidationErrors};
use crate::schema::Schema;
use crate::validate::validate;
use log::{debug, warn};
use ramsinrs_nml::{Namelist, NmlValue};

/// Reconcile `base` with the captured overrides: resolve each variable,
/// coerce it against the field's declared (or inferred) type, merge the
/// resulting patch and validate the merged document against `schema`.
///
/// Returns the normalized merged document, or the full accumulated error
/// list. Fields untouched by any override keep their original value.
pub fn reconcile(
    base: &Namelist,
    schema: &Schema,
    overrides: &[RawOverride],
) -> Result<Namelist, RamsinError> {
    let groups: Vec<String> = base.group_names().to_vec();

    // The patch carries every group of the base document, even ones no
    // override touches, so the merge never drops a group.
    let mut patch = Namelist::new();
    for group in &groups {
        patch.insert_group(group);
    }

    let mut coercion_errors: Vec<FieldError> = Vec::new();

    for ov in overrides {
        for (group, field) in resolve_targets(ov, base, &groups) {
            let Some(existing) = base.get_group(&group).and_then(|g| g.get(&field)) else {
                warn!(
                    "{} does not have a variable named '{}'. Skipping it.",
                    group, field
                );
                continue;
            };

            let (ftype, card) = field_kind(schema, &group, &field, existing);
            match coerce(&ov.value, ftype, card) {
                Ok(value) => {
                    debug!("{} -> {}.{} = {}", ov.var, group, field, value);
                    patch.get_group_mut(&group).unwrap().insert_value(&field, value);
                }
                Err(err) => {
                    coercion_errors.push(FieldError::new(
                        &group,
                        &field,
                        ov.value.clone(),
                        err.to_string(),
                    ));
                }
            }
        }
    }

    let mut merged = base.clone();
    merged.apply_patch(&patch);

    match validate(&merged, schema) {
        Ok(normalized) if coercion_errors.is_empty() => Ok(normalized),
        Ok(_) => Err(ValidationErrors(coercion_errors).into()),
        Err(violations) => {
            coercion_errors.extend(violations.0);
            Err(ValidationErrors(coercion_errors).into())
        }
    }
}

/// Resolve one override against this document. The grouped form wins; when
/// no group prefix matches, the whole key is tried as a bare field name and
/// applies to every group carrying it. An empty result means the variable is
/// irrelevant to this document and has been logged.
fn resolve_targets(ov: &RawOverride, base: &Namelist, groups: &[String]) -> Vec<(String, String)> {
    if let Some(resolved) = resolve_key(&ov.key, groups) {
        return vec![(resolved.group, resolved.field)];
    }

    let flat: Vec<(String, String)> = groups
        .iter()
        .filter(|g| {
            base.get_group(g)
                .map_or(false, |group| group.has_variable(&ov.key))
        })
        .map(|g| (g.clone(), ov.key.clone()))
        .collect();

    if flat.is_empty() {
        warn!(
            "{} does not match any group or variable of this document. Skipping it.",
            ov.var
        );
    }
    flat
}

/// Declared type and cardinality of a field: from the schema when bound,
/// otherwise inferred from the existing value's representation (the explicit
/// secondary path for schema-less fields).
fn field_kind(
    schema: &Schema,
    group: &str,
    field: &str,
    existing: &NmlValue,
) -> (FieldType, Cardinality) {
    if let Some(sfield) = schema.field(group, field) {
        return (sfield.ftype, sfield.card);
    }
    infer_kind(existing)
}

fn infer_kind(value: &NmlValue) -> (FieldType, Cardinality) {
    match value {
        NmlValue::Integer(_) => (FieldType::Int, Cardinality::Scalar),
        NmlValue::Real(_) => (FieldType::Real, Cardinality::Scalar),
        NmlValue::Logical(_) => (FieldType::Bool, Cardinality::Scalar),
        NmlValue::Character(_) => (FieldType::Str, Cardinality::Scalar),
        NmlValue::Array(elements) => {
            let elem_type = elements
                .first()
                .map(|e| infer_kind(e).0)
                .unwrap_or(FieldType::Str);
            (elem_type, Cardinality::List)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use ramsinrs_nml::reads;

    fn ov(var: &str, value: &str) -> RawOverride {
        RawOverride::new(var, value).unwrap()
    }

    fn base_doc() -> Namelist {
        reads(
            "&model_grids\n    dtlong = 30.0\n    nnxp = 100\n/\n\
             &model_file_info\n    frqanl = 60.0\n/\n\
             &post\n    inplevs = 3\n    iplevs = 1, 2, 3\n/\n",
        )
        .unwrap()
    }

    #[test]
    fn test_override_merges_and_validates() {
        let base = base_doc();
        let overrides = vec![ov("RAMSIN_MODEL_GRIDS_DTLONG", "15")];
        let merged = reconcile(&base, schema::basic(), &overrides).unwrap();

        let grids = merged.get_group("model_grids").unwrap();
        assert_eq!(grids.get("dtlong"), Some(&NmlValue::Real(15.0)));
        // Untouched fields keep their value; untouched groups survive.
        assert_eq!(grids.get_i64("nnxp"), Some(100));
        assert!(merged.has_group("post"));
    }

    #[test]
    fn test_no_overrides_is_identity_modulo_normalization() {
        let base = base_doc();
        let merged = reconcile(&base, schema::basic(), &[]).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let base = base_doc();
        let overrides = vec![ov("RAMSIN_MODEL_GRIDS_DTLONG", "15")];
        let once = reconcile(&base, schema::basic(), &overrides).unwrap();
        let twice = reconcile(&once, schema::basic(), &overrides).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_group_is_skipped() {
        let base = base_doc();
        let overrides = vec![
            ov("RAMSIN_UNKNOWNGROUP_FOO", "1"),
            ov("RAMSIN_MODEL_GRIDS_DTLONG", "15"),
        ];
        let merged = reconcile(&base, schema::basic(), &overrides).unwrap();
        assert_eq!(
            merged.get_group("model_grids").unwrap().get_f64("dtlong"),
            Some(15.0)
        );
    }

    #[test]
    fn test_unknown_field_is_skipped() {
        let base = base_doc();
        let overrides = vec![ov("RAMSIN_MODEL_GRIDS_NOSUCH", "1")];
        let merged = reconcile(&base, schema::basic(), &overrides).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_flat_form_resolves_by_field_name() {
        let base = base_doc();
        let overrides = vec![ov("RAMSIN_DTLONG", "15")];
        let merged = reconcile(&base, schema::basic(), &overrides).unwrap();
        assert_eq!(
            merged.get_group("model_grids").unwrap().get_f64("dtlong"),
            Some(15.0)
        );
    }

    #[test]
    fn test_merged_constraint_violation_is_fatal() {
        let base = base_doc();
        // 7.0 divides nothing: frqanl = 60.0 is no longer a multiple.
        let overrides = vec![ov("RAMSIN_MODEL_GRIDS_DTLONG", "7")];
        let err = reconcile(&base, schema::basic(), &overrides).unwrap_err();
        match err {
            RamsinError::Validation(errors) => {
                assert_eq!(errors.0.len(), 1);
                assert_eq!(errors.0[0].field, "frqanl");
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_sum_constraint_on_override() {
        let base = base_doc();
        let ok = vec![ov("RAMSIN_POST_IPLEVS", "1,2,3")];
        assert!(reconcile(&base, schema::basic(), &ok).is_ok());

        let bad = vec![ov("RAMSIN_POST_IPLEVS", "1,2,4")];
        let err = reconcile(&base, schema::basic(), &bad).unwrap_err();
        match err {
            RamsinError::Validation(errors) => {
                assert!(errors.0[0].reason.contains("sum to 6"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_coercion_error_surfaces_at_validation() {
        let base = base_doc();
        let overrides = vec![
            ov("RAMSIN_MODEL_GRIDS_DTLONG", "abc"),
            ov("RAMSIN_POST_IPLEVS", "1,2,4"),
        ];
        let err = reconcile(&base, schema::basic(), &overrides).unwrap_err();
        match err {
            RamsinError::Validation(errors) => {
                // Both the bad coercion and the sum violation are reported.
                assert_eq!(errors.0.len(), 2);
                assert!(errors.0.iter().any(|e| e.field == "dtlong"));
                assert!(errors.0.iter().any(|e| e.field == "iplevs"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_schema_less_field_inferred_from_base() {
        let base = reads("&custom\n    knob = 2.5\n    tags = 'a', 'b'\n/\n").unwrap();
        let overrides = vec![
            ov("RAMSIN_CUSTOM_KNOB", "3.5"),
            ov("RAMSIN_CUSTOM_TAGS", "'x','y','z'"),
        ];
        let merged = reconcile(&base, schema::basic(), &overrides).unwrap();
        let group = merged.get_group("custom").unwrap();
        assert_eq!(group.get_f64("knob"), Some(3.5));
        assert_eq!(group.get("tags").unwrap(), &NmlValue::from(vec!["x", "y", "z"]));
    }
}
