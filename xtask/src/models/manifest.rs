use anyhow::{Context, Result, bail};
use cnn_common::read_yaml;
use cnn_domain::constants::{CONFIG_FILE_PATH, DEFAULT_PROJECT_NAME, PARAMS_FILE_PATH};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Placeholder replaced by the project name in every manifest entry.
pub const PROJECT_PLACEHOLDER: &str = "{project}";

/// The skeleton of a classifier project.
const DEFAULT_FILES: &[&str] = &[
    ".github/workflows/.gitkeep",
    "src/{project}/__init__.py",
    "src/{project}/components/__init__.py",
    "src/{project}/utils/__init__.py",
    "src/{project}/config/__init__.py",
    "src/{project}/config/configuration.py",
    "src/{project}/pipeline/__init__.py",
    "src/{project}/entity/__init__.py",
    "src/{project}/constants/__init__.py",
    CONFIG_FILE_PATH,
    "dvc.yaml",
    PARAMS_FILE_PATH,
    "requirements.txt",
    "setup.py",
    "research/trials.ipynb",
    "templates/index.html",
];

/// List of files the scaffold generator creates, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScaffoldManifest {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    pub files: Vec<String>,
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_owned()
}

impl Default for ScaffoldManifest {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            files: DEFAULT_FILES.iter().copied().map(str::to_owned).collect(),
        }
    }
}

impl ScaffoldManifest {
    /// Reads a manifest from a YAML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is empty, or does not have a `files` list.
    pub fn load(path: &Path) -> Result<Self> {
        read_yaml(path)?
            .deserialize()
            .with_context(|| format!("Invalid scaffold manifest {}", path.display()))
    }

    /// Resolves every entry to a relative path with the project name substituted.
    ///
    /// # Errors
    /// Returns an error for an unusable project name or for any entry that is empty, absolute
    /// or climbs out of the root with `..`. Nothing is resolved partially.
    pub fn entries(&self) -> Result<Vec<PathBuf>> {
        let project = self.project_name.trim();
        if project.is_empty() || project.contains(['/', '\\']) || project == "." || project == ".."
        {
            bail!("Invalid project name '{}'", self.project_name);
        }

        self.files
            .iter()
            .map(|file| resolve_entry(&file.replace(PROJECT_PLACEHOLDER, project)))
            .collect()
    }
}

fn resolve_entry(entry: &str) -> Result<PathBuf> {
    let path = PathBuf::from(entry.trim());
    if path.as_os_str().is_empty() {
        bail!("Manifest contains an empty entry");
    }
    if path.is_absolute()
        || path.components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        bail!("Manifest entry '{entry}' must be a relative path without '..'");
    }
    Ok(path)
}
