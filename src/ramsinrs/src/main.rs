// ramsinrs/src/main.rs

use anyhow::Result;
use clap::Parser;
use ramsinrs::cli::{patch_ramsin, PatchArgs};
use std::path::PathBuf;
use std::process::ExitCode;

const LONG_ABOUT: &str = "\
A program for modifying and creating RAMSIN files based on environment variables.
The convention is RAMSIN_{GROUP}_{VARIABLE}={VALUE} (or RAMSIN_{VARIABLE} for
basic top-level variables). Examples of supported values:

    RAMSIN_POST_NVP=\"1\"                              ( Integer )
    RAMSIN_POST_IPLEVS=\"500,400,300,200\"             ( Integer array )
    RAMSIN_MODEL_GRIDS_DELTAX=\"1000.\"                ( Real )
    RAMSIN_ISAN_ISENTROPIC_SCALE_FACTOR=\"1.0e10,4.2\" ( Real array )
    RAMSIN_POST_VP=\"'topo'\"                          ( Character )
    RAMSIN_POST_VP=\"'topo','precip'\"                 ( Character array )
    RAMSIN_METEOGRAM_APPLYMETEOGRAM=\".false.\"        ( Logical )";

#[derive(Parser)]
#[command(name = "ramsinrs")]
#[command(about = "Patches RAMSIN namelist files from environment variables")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
struct Cli {
    /// the RAMSIN_BASIC file
    #[arg(short = 'b', long, value_name = "FILE", default_value = "RAMSIN_BASIC")]
    ramsin_basic: PathBuf,

    /// the RAMSIN_ADVANCED file (defaults to the path the basic file carries)
    #[arg(short = 'a', long, value_name = "FILE")]
    ramsin_advanced: Option<PathBuf>,

    /// the filename to write the modified RAMSIN_BASIC
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = "RAMSIN_BASIC_MODIFIED"
    )]
    output_basic: PathBuf,

    /// the filename to write the modified RAMSIN_ADVANCED
    #[arg(
        short = 'O',
        long,
        value_name = "FILE",
        default_value = "RAMSIN_ADVANCED_MODIFIED"
    )]
    output_advanced: PathBuf,
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    patch_ramsin(&PatchArgs {
        ramsin_basic: cli.ramsin_basic,
        ramsin_advanced: cli.ramsin_advanced,
        output_basic: cli.output_basic,
        output_advanced: cli.output_advanced,
    })
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
