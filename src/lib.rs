//! Bulk version updater for Harcourts.Core NuGet references.
//!
//! Scans a solution folder for `packages.config` and `*.csproj` files and
//! rewrites every Harcourts.Core version reference in place: manifest
//! entries and hint-path fragments get the caller's version string
//! verbatim, assembly references get the normalized 4-part numeric form.

pub mod arguments;
pub mod error;
pub mod report;
pub mod rewriters;
pub mod version;

pub use error::{Result, UpdateError};

use arguments::Arguments;
use rewriters::{Rewriter, csproj::CsprojRewriter, packages_config::PackagesConfigRewriter};
use std::path::Path;
use version::Versions;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the whole update pipeline: normalize the version, locate both file
/// categories, then rewrite each category in sequence.
///
/// Both categories are located before any file is touched, so a run that
/// fails pre-flight leaves the tree unmodified. A mid-batch I/O error
/// aborts the run with already-rewritten files left in place.
pub fn run(args: &Arguments) -> Result<()> {
    let versions = Versions::parse(&args.version)?;

    let root = Path::new(&args.path);
    if !root.is_dir() {
        return Err(UpdateError::FolderNotFound(root.to_path_buf()));
    }

    let config_files = PackagesConfigRewriter::find_files(root)?;
    if config_files.is_empty() {
        return Err(UpdateError::NoPackagesConfig(root.to_path_buf()));
    }

    let project_files = CsprojRewriter::find_files(root)?;
    if project_files.is_empty() {
        return Err(UpdateError::NoProjectFiles(root.to_path_buf()));
    }

    println!(
        "Updating Harcourts.Core to version {} ({})...",
        versions.target, versions.numeric
    );

    println!("\nUpdating packages.config for {}:", root.display());
    let substitutions = PackagesConfigRewriter::substitutions(&versions)?;
    for file in &config_files {
        PackagesConfigRewriter::rewrite_file(file, &substitutions)?;
        report::processed(root, file);
    }

    println!("\nUpdating *.csproj files for {}:", root.display());
    let substitutions = CsprojRewriter::substitutions(&versions)?;
    for file in &project_files {
        CsprojRewriter::rewrite_file(file, &substitutions)?;
        report::processed(root, file);
    }

    Ok(())
}
