// nml/src/namelist.rs

//! The namelist document model: an ordered two-level group/variable store.

use crate::value::NmlValue;
use crate::WriteOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The group sentinel style seen when a document was read. RAMSIN files use
/// the `$GROUP` / `$END` form; generic namelists use `&group` / `/`. The
/// style observed on read is reproduced on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupStyle {
    Ampersand,
    Dollar,
}

impl Default for GroupStyle {
    fn default() -> Self {
        GroupStyle::Ampersand
    }
}

/// A single namelist group containing variables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamelistGroup {
    /// Variables in the group
    variables: HashMap<String, NmlValue>,
    /// Order of variables (to preserve original order)
    variable_order: Vec<String>,
}

impl NamelistGroup {
    /// Create a new empty namelist group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable with automatic value conversion.
    pub fn insert<T: Into<NmlValue>>(&mut self, name: &str, value: T) -> &mut Self {
        self.insert_value(name, value.into())
    }

    /// Insert a variable with an explicit NmlValue.
    pub fn insert_value(&mut self, name: &str, value: NmlValue) -> &mut Self {
        let name = name.to_lowercase();
        if !self.variables.contains_key(&name) {
            self.variable_order.push(name.clone());
        }
        self.variables.insert(name, value);
        self
    }

    /// Get a variable by name.
    pub fn get(&self, name: &str) -> Option<&NmlValue> {
        self.variables.get(&name.to_lowercase())
    }

    /// Get a mutable reference to a variable by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut NmlValue> {
        self.variables.get_mut(&name.to_lowercase())
    }

    /// Check if a variable exists.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(&name.to_lowercase())
    }

    /// Get all variable names in order.
    pub fn variable_names(&self) -> &[String] {
        &self.variable_order
    }

    /// Get an iterator over all variables in order.
    pub fn variables(&self) -> impl Iterator<Item = (&String, &NmlValue)> {
        self.variable_order
            .iter()
            .filter_map(move |name| self.variables.get(name).map(|value| (name, value)))
    }

    /// Apply a patch to this group: fields present in the patch replace the
    /// existing value, everything else is untouched.
    pub fn apply_patch(&mut self, patch: &NamelistGroup) {
        for (name, value) in patch.variables() {
            self.insert_value(name, value.clone());
        }
    }

    /// Convenience typed getters.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_integer().ok()
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_real().ok()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_logical().ok()
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_character().ok()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub(crate) fn to_fortran_string(&self, options: &WriteOptions) -> String {
        let mut output = String::new();

        let variables: Vec<_> = if options.sort_variables {
            let mut sorted: Vec<_> = self.variables().collect();
            sorted.sort_by_key(|(name, _)| name.to_lowercase());
            sorted
        } else {
            self.variables().collect()
        };

        for (var_name, var_value) in variables {
            let name = if options.uppercase {
                var_name.to_uppercase()
            } else {
                var_name.clone()
            };

            output.push_str(&options.indent);
            output.push_str(&name);
            output.push_str(" = ");
            output.push_str(&var_value.to_literal());
            if options.end_comma {
                output.push(',');
            }
            output.push('\n');
        }

        output
    }
}

/// A complete namelist document containing multiple groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namelist {
    /// Groups in the namelist, keyed by group name
    groups: HashMap<String, NamelistGroup>,
    /// Order of groups (to preserve original order)
    group_order: Vec<String>,
    /// Group sentinel style to reproduce on write
    style: GroupStyle,
}

impl Namelist {
    /// Create a new empty namelist.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            group_order: Vec::new(),
            style: GroupStyle::default(),
        }
    }

    /// Get the group sentinel style of this document.
    pub fn style(&self) -> GroupStyle {
        self.style
    }

    /// Set the group sentinel style used on write.
    pub fn set_style(&mut self, style: GroupStyle) {
        self.style = style;
    }

    /// Insert a new group and return a mutable reference to it.
    pub fn insert_group(&mut self, name: &str) -> &mut NamelistGroup {
        let name = name.to_lowercase();
        if !self.groups.contains_key(&name) {
            self.group_order.push(name.clone());
            self.groups.insert(name.clone(), NamelistGroup::new());
        }
        self.groups.get_mut(&name).unwrap()
    }

    /// Get a group by name.
    pub fn get_group(&self, name: &str) -> Option<&NamelistGroup> {
        self.groups.get(&name.to_lowercase())
    }

    /// Get a mutable reference to a group by name.
    pub fn get_group_mut(&mut self, name: &str) -> Option<&mut NamelistGroup> {
        self.groups.get_mut(&name.to_lowercase())
    }

    /// Check if a group exists.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(&name.to_lowercase())
    }

    /// Get all group names in order.
    pub fn group_names(&self) -> &[String] {
        &self.group_order
    }

    /// Get an iterator over all groups in order.
    pub fn groups(&self) -> impl Iterator<Item = (&String, &NamelistGroup)> {
        self.group_order
            .iter()
            .filter_map(move |name| self.groups.get(name).map(|group| (name, group)))
    }

    /// Apply a patch to this namelist: for every patch group, fields present
    /// in the patch replace the existing value; fields and groups absent from
    /// the patch are untouched. Patch groups unknown to the base document are
    /// appended.
    pub fn apply_patch(&mut self, patch: &Namelist) {
        for (group_name, patch_group) in patch.groups() {
            if let Some(existing) = self.get_group_mut(group_name) {
                existing.apply_patch(patch_group);
            } else {
                self.group_order.push(group_name.clone());
                self.groups.insert(group_name.clone(), patch_group.clone());
            }
        }
    }

    /// Convert this namelist to its textual representation.
    pub fn to_fortran_string(&self, options: &WriteOptions) -> String {
        let mut output = String::new();
        let mut first_group = true;

        let groups: Vec<_> = if options.sort_groups {
            let mut sorted: Vec<_> = self.groups().collect();
            sorted.sort_by_key(|(name, _)| name.to_lowercase());
            sorted
        } else {
            self.groups().collect()
        };

        for (group_name, group) in groups {
            if !first_group {
                output.push('\n');
            }
            first_group = false;

            let name = if options.uppercase {
                group_name.to_uppercase()
            } else {
                group_name.clone()
            };

            match self.style {
                GroupStyle::Ampersand => {
                    output.push_str(&format!("&{}\n", name));
                    output.push_str(&group.to_fortran_string(options));
                    output.push_str("/\n");
                }
                GroupStyle::Dollar => {
                    output.push_str(&format!("${}\n", name));
                    output.push_str(&group.to_fortran_string(options));
                    output.push_str(if options.uppercase { "$END\n" } else { "$end\n" });
                }
            }
        }

        output
    }

    /// Check if the namelist is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

impl Default for Namelist {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Namelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fortran_string(&WriteOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_case_insensitive() {
        let mut nml = Namelist::new();
        nml.insert_group("MODEL_GRIDS").insert("DTLONG", 30.0);

        assert!(nml.has_group("model_grids"));
        let group = nml.get_group("Model_Grids").unwrap();
        assert_eq!(group.get_f64("dtlong"), Some(30.0));
        assert_eq!(nml.group_names(), &["model_grids".to_string()]);
    }

    #[test]
    fn test_apply_patch_replaces_only_patched_fields() {
        let mut base = Namelist::new();
        base.insert_group("model_grids")
            .insert("dtlong", 30.0)
            .insert("nnxp", 100i64);

        let mut patch = Namelist::new();
        patch.insert_group("model_grids").insert("dtlong", 15.0);

        base.apply_patch(&patch);
        let group = base.get_group("model_grids").unwrap();
        assert_eq!(group.get_f64("dtlong"), Some(15.0));
        assert_eq!(group.get_i64("nnxp"), Some(100));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut base = Namelist::new();
        base.insert_group("post").insert("nvp", 1i64);
        let snapshot = base.clone();

        let mut patch = Namelist::new();
        patch.insert_group("post");

        base.apply_patch(&patch);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut base = Namelist::new();
        base.insert_group("post").insert("nvp", 1i64);

        let mut patch = Namelist::new();
        patch.insert_group("post").insert("nvp", 4i64);

        base.apply_patch(&patch);
        let once = base.clone();
        base.apply_patch(&patch);
        assert_eq!(base, once);
    }

    #[test]
    fn test_dollar_style_output() {
        let mut nml = Namelist::new();
        nml.set_style(GroupStyle::Dollar);
        nml.insert_group("post").insert("nvp", 1i64);

        let text = nml.to_fortran_string(&WriteOptions::default());
        assert!(text.contains("$post"));
        assert!(text.contains("$end"));
    }
}
