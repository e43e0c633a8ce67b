// nml/src/lib.rs

//! A small Rust-native library for reading, patching and writing the Fortran
//! namelists used by RAMSIN configuration files.
//!
//! This library provides functionality to:
//! - Parse namelist files into an ordered group/variable document
//! - Patch a document in memory without disturbing untouched fields
//! - Write a document back out, preserving group and variable order
//! - Handle both the `&group ... /` and the RAMSIN `$GROUP ... $END` forms

pub mod error;
pub mod namelist;
mod parser;
pub mod value;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub use error::{NmlError, Result};
pub use namelist::{GroupStyle, Namelist, NamelistGroup};
pub use value::NmlValue;

/// Parse a namelist from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), ramsinrs_nml::NmlError> {
///     let nml = ramsinrs_nml::read("RAMSIN_BASIC")?;
///     println!("{:#?}", nml);
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Namelist> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    reads(&contents)
}

/// Parse a namelist from a string.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), ramsinrs_nml::NmlError> {
///     let nml = ramsinrs_nml::reads("&data_nml x=1 y=2.0 z=.true. /")?;
///     Ok(())
/// }
/// ```
pub fn reads(content: &str) -> Result<Namelist> {
    parser::parse_namelist(content)
}

/// Write a namelist to a file with default options.
pub fn write<P: AsRef<Path>>(nml: &Namelist, path: P) -> Result<()> {
    write_with_options(nml, path, &WriteOptions::default())
}

/// Write a namelist to a file with specific options.
///
/// Refuses to overwrite an existing file unless `options.force` is set, so a
/// caller can never clobber its own input by accident.
pub fn write_with_options<P: AsRef<Path>>(
    nml: &Namelist,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();

    if !options.force && path.exists() {
        return Err(NmlError::FileExists(path.to_path_buf()));
    }

    let mut file = File::create(path)?;
    write_to_writer(nml, &mut file, options)
}

/// Write a namelist to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(
    nml: &Namelist,
    writer: &mut W,
    options: &WriteOptions,
) -> Result<()> {
    let formatted = nml.to_fortran_string(options);
    writer.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Create a new namelist from an input namelist and a patch. Fields present
/// in the patch replace the original values, everything else is preserved.
///
/// # Examples
///
/// ```
/// # use ramsinrs_nml::{reads, Namelist, patch};
/// # fn main() -> Result<(), ramsinrs_nml::NmlError> {
/// let original = reads("&data_nml x=1 y=2.0 /")?;
///
/// let mut patch_nml = Namelist::new();
/// patch_nml.insert_group("data_nml").insert("x", 42i64);
///
/// let patched = patch(&original, &patch_nml);
/// # Ok(())
/// # }
/// ```
pub fn patch(original: &Namelist, patch: &Namelist) -> Namelist {
    let mut result = original.clone();
    result.apply_patch(patch);
    result
}

/// Options for controlling namelist output formatting.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Force overwrite existing files
    pub force: bool,
    /// Indentation string for variable assignments
    pub indent: String,
    /// Whether to add commas at the end of assignments
    pub end_comma: bool,
    /// Whether to use uppercase for group and variable names
    pub uppercase: bool,
    /// Whether to sort namelist groups alphabetically
    pub sort_groups: bool,
    /// Whether to sort variables within groups alphabetically
    pub sort_variables: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            force: false,
            indent: "    ".to_string(), // 4 spaces
            end_comma: false,
            uppercase: false,
            sort_groups: false,
            sort_variables: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_simple() {
        let nml = reads("&data_nml x=1 y=2.0 z=.true. /").unwrap();

        let group = nml.get_group("data_nml").unwrap();
        assert_eq!(group.get_i64("x"), Some(1));
        assert_eq!(group.get_f64("y"), Some(2.0));
        assert_eq!(group.get_bool("z"), Some(true));
    }

    #[test]
    fn test_write_simple() {
        let mut nml = Namelist::new();
        nml.insert_group("data_nml")
            .insert("x", 1i64)
            .insert("y", 2.0)
            .insert("enabled", true);

        let output = nml.to_fortran_string(&WriteOptions::default());
        assert!(output.contains("&data_nml"));
        assert!(output.contains("x = 1"));
        assert!(output.contains("y = 2.0"));
        assert!(output.contains("enabled = .true."));
        assert!(output.contains("/"));
    }

    #[test]
    fn test_patch() {
        let original = reads("&data_nml x=1 y=2.0 /").unwrap();

        let mut patch_nml = Namelist::new();
        patch_nml.insert_group("data_nml").insert("x", 42i64);

        let patched = patch(&original, &patch_nml);
        let group = patched.get_group("data_nml").unwrap();

        assert_eq!(group.get_i64("x"), Some(42)); // Updated
        assert_eq!(group.get_f64("y"), Some(2.0)); // Preserved
    }

    #[test]
    fn test_string_roundtrip() {
        let text = "&post\n    iplevs = 500, 400, 300\n    vp = 'topo', 'precip'\n/\n";
        let nml = reads(text).unwrap();
        let regenerated = nml.to_fortran_string(&WriteOptions::default());
        let reparsed = reads(&regenerated).unwrap();
        assert_eq!(nml, reparsed);
    }

    #[test]
    fn test_dollar_style_preserved_on_write() {
        let nml = reads("$POST\n  nvp = 2\n$END\n").unwrap();
        let out = nml.to_fortran_string(&WriteOptions::default());
        assert!(out.starts_with("$post"));
        let reparsed = reads(&out).unwrap();
        assert_eq!(nml, reparsed);
    }
}
