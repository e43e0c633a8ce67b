// ramsinrs/src/cli.rs

//! Orchestration of one full run: the basic document first, then the
//! advanced document whose input path lives inside the merged basic one.

use crate::env::{collect_overrides, RawOverride};
use crate::error::RamsinError;
use crate::reconcile::reconcile;
use crate::schema;
use anyhow::{Context, Result};
use log::info;
use ramsinrs_nml::{Namelist, WriteOptions};
use std::path::{Path, PathBuf};

/// Group and field of the basic document that point at the advanced one.
pub const ADVANCED_PATH_GROUP: &str = "model_adv_ramsin";
pub const ADVANCED_PATH_FIELD: &str = "advanced_ramsin";

/// Resolved command-line arguments for one run.
#[derive(Debug, Clone)]
pub struct PatchArgs {
    pub ramsin_basic: PathBuf,
    pub ramsin_advanced: Option<PathBuf>,
    pub output_basic: PathBuf,
    pub output_advanced: PathBuf,
}

/// Run the full basic + advanced reconciliation using the process
/// environment. Exits cleanly without touching any file when no `RAMSIN_*`
/// variables are set.
pub fn patch_ramsin(args: &PatchArgs) -> Result<()> {
    let overrides = collect_overrides();
    if overrides.is_empty() {
        println!("There are no environment variables set up for RAMSIN.\nNothing to be done.");
        return Ok(());
    }
    run_with_overrides(args, &overrides)
}

/// Same as [`patch_ramsin`], with the override snapshot supplied by the
/// caller.
pub fn run_with_overrides(args: &PatchArgs, overrides: &[RawOverride]) -> Result<()> {
    info!("Updating RAMSIN_BASIC from {}", args.ramsin_basic.display());
    let basic = read_document(&args.ramsin_basic)?;
    let merged_basic = reconcile(&basic, schema::basic(), overrides)?;
    write_document(&merged_basic, &args.output_basic)?;

    // The advanced input path comes from the merged in-memory basic document
    // unless it was given on the command line.
    let advanced_path = match &args.ramsin_advanced {
        Some(path) => path.clone(),
        None => advanced_path_from(&merged_basic)?,
    };

    info!("Updating RAMSIN_ADVANCED from {}", advanced_path.display());
    let advanced = read_document(&advanced_path)?;
    let merged_advanced = reconcile(&advanced, schema::advanced(), overrides)?;
    write_document(&merged_advanced, &args.output_advanced)?;

    Ok(())
}

fn advanced_path_from(basic: &Namelist) -> Result<PathBuf> {
    basic
        .get_group(ADVANCED_PATH_GROUP)
        .and_then(|group| group.get_string(ADVANCED_PATH_FIELD))
        .map(PathBuf::from)
        .ok_or_else(|| {
            RamsinError::MissingAdvancedPath {
                group: ADVANCED_PATH_GROUP,
                field: ADVANCED_PATH_FIELD,
            }
            .into()
        })
}

fn read_document(path: &Path) -> Result<Namelist> {
    // fs_err reports the offending path in the error itself.
    let content = fs_err::read_to_string(path)?;
    ramsinrs_nml::reads(&content)
        .with_context(|| format!("error parsing namelist file: {}", path.display()))
}

fn write_document(doc: &Namelist, path: &Path) -> Result<()> {
    let options = WriteOptions {
        force: true,
        ..Default::default()
    };
    ramsinrs_nml::write_with_options(doc, path, &options)
        .with_context(|| format!("error writing namelist file: {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
