// ramsinrs/src/schema/mod.rs

//! The declarative schema registry.
//!
//! Two versioned registries exist, one per RAMSIN document: [`basic()`] and
//! [`advanced()`]. Each is a plain data structure built once at first use and
//! shared read-only; adding a validation rule means adding a constraint
//! record here, not a new type. Lookups of unknown groups or fields return
//! `None` so callers can implement the lenient skip-with-warning policy.

mod advanced;
mod basic;

pub use advanced::advanced;
pub use basic::basic;

use crate::coerce::{Cardinality, FieldType};
use std::collections::HashMap;

/// Reference to a field elsewhere in the document, used by cross-field
/// constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub group: &'static str,
    pub field: &'static str,
}

impl FieldRef {
    pub const fn new(group: &'static str, field: &'static str) -> Self {
        Self { group, field }
    }
}

/// A declarative validation rule bound to one field.
///
/// Constraints are pure functions of the candidate document. Cross-field
/// kinds are vacuously satisfied when a referenced field is absent, since a
/// document needn't carry every optional group.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be one of a fixed set of integers.
    IntChoice(&'static [i64]),
    /// Value must be one of a fixed set of strings.
    StrChoice(&'static [&'static str]),
    /// Value must be strictly greater than zero.
    Positive,
    /// Inclusive numeric bounds; either side may be open.
    Range { min: Option<f64>, max: Option<f64> },
    /// Every list element must be one of a fixed set of integers.
    IntElemChoice(&'static [i64]),
    /// Every list element must be one of a fixed set of strings.
    StrElemChoice(&'static [&'static str]),
    /// String must be non-empty.
    NonEmpty,
    /// List elements must sum to a fixed constant.
    SumEq(f64),
    /// List length must equal the integer value of `count`. When `when_zero`
    /// is set, the check only fires while that companion real field equals
    /// exactly 0.0 (the sentinel for explicit values rather than a derived
    /// count).
    LengthOf {
        count: FieldRef,
        when_zero: Option<FieldRef>,
    },
    /// Value must be a numeric multiple of `of`. With `max_ratio`, the value
    /// must additionally be positive and no more than `max_ratio` times `of`.
    /// With `when_eq`, the check only fires while the named enable field
    /// holds the given integer.
    MultipleOf {
        of: FieldRef,
        max_ratio: Option<f64>,
        when_eq: Option<(FieldRef, i64)>,
    },
    /// Value must be strictly less than another field's value.
    LessThanField(FieldRef),
}

/// One field of a schema group: name, declared type and cardinality, and the
/// rules it must satisfy.
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: &'static str,
    pub ftype: FieldType,
    pub card: Cardinality,
    pub constraints: Vec<Constraint>,
}

impl SchemaField {
    fn new(name: &'static str, ftype: FieldType, card: Cardinality) -> Self {
        Self {
            name,
            ftype,
            card,
            constraints: Vec::new(),
        }
    }

    fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A named collection of schema fields.
#[derive(Debug)]
pub struct SchemaGroup {
    name: &'static str,
    fields: Vec<SchemaField>,
    index: HashMap<&'static str, usize>,
}

impl SchemaGroup {
    fn new(name: &'static str, fields: Vec<SchemaField>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name, i))
            .collect();
        Self {
            name,
            fields,
            index,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.index
            .get(name.to_lowercase().as_str())
            .map(|&i| &self.fields[i])
    }

    pub fn fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter()
    }
}

/// An immutable, versioned schema: the full set of recognized groups.
#[derive(Debug)]
pub struct Schema {
    version: &'static str,
    groups: Vec<SchemaGroup>,
    index: HashMap<&'static str, usize>,
}

impl Schema {
    fn new(version: &'static str, groups: Vec<SchemaGroup>) -> Self {
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.name, i))
            .collect();
        Self {
            version,
            groups,
            index,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn group(&self, name: &str) -> Option<&SchemaGroup> {
        self.index
            .get(name.to_lowercase().as_str())
            .map(|&i| &self.groups[i])
    }

    pub fn groups(&self) -> impl Iterator<Item = &SchemaGroup> {
        self.groups.iter()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().map(|g| g.name)
    }

    /// Look up one field's declaration, if any.
    pub fn field(&self, group: &str, field: &str) -> Option<&SchemaField> {
        self.group(group)?.field(field)
    }
}

// Declaration helpers: the registries read as tables, one line per field.

fn group(name: &'static str, fields: Vec<SchemaField>) -> SchemaGroup {
    SchemaGroup::new(name, fields)
}

fn int(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Int, Cardinality::Scalar)
}

fn real(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Real, Cardinality::Scalar)
}

fn logical(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Bool, Cardinality::Scalar)
}

fn string(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Str, Cardinality::Scalar)
}

fn int_list(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Int, Cardinality::List)
}

fn real_list(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Real, Cardinality::List)
}

fn str_list(name: &'static str) -> SchemaField {
    SchemaField::new(name, FieldType::Str, Cardinality::List)
}

/// Shorthand for the pervasive 0/1 switch fields.
fn on_off(name: &'static str) -> SchemaField {
    int(name).with(Constraint::IntChoice(&[0, 1]))
}

fn positive_int(name: &'static str) -> SchemaField {
    int(name).with(Constraint::Positive)
}

fn positive_real(name: &'static str) -> SchemaField {
    real(name).with(Constraint::Positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::{Cardinality, FieldType};

    #[test]
    fn test_unknown_lookups_return_none() {
        let schema = basic();
        assert!(schema.group("unknowngroup").is_none());
        assert!(schema.field("post", "no_such_field").is_none());
        assert!(schema.field("no_such_group", "nvp").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let schema = basic();
        assert!(schema.group("MODEL_GRIDS").is_some());
        assert!(schema.field("Post", "IPLEVS").is_some());
    }

    #[test]
    fn test_basic_field_declarations() {
        let schema = basic();
        let dtlong = schema.field("model_grids", "dtlong").unwrap();
        assert_eq!(dtlong.ftype, FieldType::Real);
        assert_eq!(dtlong.card, Cardinality::Scalar);

        let iplevs = schema.field("post", "iplevs").unwrap();
        assert_eq!(iplevs.ftype, FieldType::Int);
        assert_eq!(iplevs.card, Cardinality::List);
    }

    #[test]
    fn test_schemas_are_distinct_versions() {
        assert_eq!(basic().version(), "basic");
        assert_eq!(advanced().version(), "advanced");
        assert!(basic().group("model_grids2").is_none());
        assert!(advanced().group("model_grids").is_none());
    }
}
