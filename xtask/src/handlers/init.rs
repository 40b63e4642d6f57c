use crate::models::args::InitArgs;
use crate::models::manifest::ScaffoldManifest;
use anyhow::{Context, Result};
use cnn_common::create_directories;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a scaffold run created or left alone, as paths relative to the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
}

/// Creates the project skeleton described by the arguments.
///
/// # Result
/// Returns `Ok(())` after creating the skeleton (or printing the plan for `--dry-run`).
///
/// # Errors
/// Returns an error if the manifest cannot be loaded or resolved, or if a directory or file
/// cannot be created.
pub fn init_project(args: &InitArgs) -> Result<()> {
    let mut manifest = match &args.manifest {
        Some(path) => ScaffoldManifest::load(path)?,
        None => ScaffoldManifest::default(),
    };
    if let Some(project) = &args.project {
        manifest.project_name.clone_from(project);
    }

    let report = scaffold(&args.root, &manifest, args.dry_run)?;

    if args.dry_run {
        println!("📝 Dry run for '{}' in {}:", manifest.project_name, args.root.display());
        for file in &report.created_files {
            println!("   + {}", file.display());
        }
        for file in &report.skipped_files {
            println!("   = {} (kept)", file.display());
        }
    } else {
        println!(
            "✅ Scaffolded '{}' in {}: {} directories and {} files created, {} kept",
            manifest.project_name,
            args.root.display(),
            report.created_dirs.len(),
            report.created_files.len(),
            report.skipped_files.len()
        );
    }

    Ok(())
}

/// Creates every manifest entry under `root`.
///
/// Parent directories are created as needed. A file is (re)created empty when it is missing
/// or has zero length; any other existing file is left untouched. With `dry_run` the report
/// is computed without writing anything.
///
/// # Errors
/// Returns an error if an entry is invalid (before anything is written) or if a directory or
/// file cannot be created.
pub fn scaffold(
    root: &Path,
    manifest: &ScaffoldManifest,
    dry_run: bool,
) -> Result<ScaffoldReport> {
    let entries = manifest.entries()?;
    let mut report = ScaffoldReport::default();

    for entry in entries {
        let target = root.join(&entry);
        let file_name =
            entry.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

        if let Some(dir) = entry.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !root.join(dir).is_dir() && !report.created_dirs.iter().any(|d| d == dir) {
                report.created_dirs.push(dir.to_path_buf());
            }
            if !dry_run {
                create_directories([root.join(dir)], false)?;
            }
            info!(dir = %dir.display(), file = %file_name, "Creating directory");
        }

        let needs_file = match fs::metadata(&target) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        if needs_file {
            if !dry_run {
                fs::File::create(&target)
                    .with_context(|| format!("Failed to create {}", target.display()))?;
            }
            info!(path = %entry.display(), "Creating empty file");
            report.created_files.push(entry);
        } else {
            info!(file = %file_name, "File already exists");
            report.skipped_files.push(entry);
        }
    }

    Ok(report)
}
