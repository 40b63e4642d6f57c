//! Packaging metadata baked in from the workspace manifest.

/// Name, version and links of this distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
    pub repository: &'static str,
}

impl PackageInfo {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            authors: env!("CARGO_PKG_AUTHORS"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
        }
    }

    /// Issue tracker of the repository.
    #[must_use]
    pub fn bug_tracker(&self) -> String {
        format!("{}/issues", self.repository.trim_end_matches('/'))
    }
}

impl std::fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.name, self.version)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Author: {}", self.authors)?;
        writeln!(f, "Repository: {}", self.repository)?;
        write!(f, "Bug Tracker: {}", self.bug_tracker())
    }
}
