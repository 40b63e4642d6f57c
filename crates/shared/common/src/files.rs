use crate::error::{CommonError, CommonErrorExt};
use std::fs;
use std::path::Path;
use tracing::info;

const KIB: u64 = 1024;

/// Creates each directory (and its parents) in order. Existing directories are left as is.
///
/// # Errors
/// Returns [`CommonError::Io`] for the first directory that cannot be created; directories
/// earlier in the list stay created.
pub fn create_directories<I>(paths: I, verbose: bool) -> Result<(), CommonError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).context(format!("Failed to create {}", path.display()))?;
        if verbose {
            info!(path = %path.display(), "Created directory");
        }
    }
    Ok(())
}

/// Returns the file size in kibibytes as `"~ {n} KB"`.
///
/// `n` is rounded to the nearest integer, ties to even: 512 B is `~ 0 KB`,
/// 1536 B is `~ 2 KB`.
///
/// # Errors
/// Returns [`CommonError::Io`] if the file metadata cannot be read.
pub fn get_size(path: impl AsRef<Path>) -> Result<String, CommonError> {
    let path = path.as_ref();
    let bytes = fs::metadata(path).context(format!("Failed to stat {}", path.display()))?.len();
    Ok(format!("~ {} KB", round_kib(bytes)))
}

const fn round_kib(bytes: u64) -> u64 {
    let (whole, rest) = (bytes / KIB, bytes % KIB);
    match rest * 2 {
        r if r < KIB => whole,
        r if r > KIB => whole + 1,
        _ => whole + whole % 2,
    }
}
