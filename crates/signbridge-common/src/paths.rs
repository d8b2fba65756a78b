//! Path confinement for client-supplied asset paths.
//!
//! Clients name videos with a relative path taken straight from the URL. The
//! helpers here normalize that string lexically and refuse anything that
//! would land outside the configured video root.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Normalize a client-supplied relative path.
///
/// Backslashes are treated as separators, `.` and empty segments are dropped
/// and `..` pops the previous segment. The result uses `/` separators.
///
/// Fails with [`Error::PathTraversal`] when the path is absolute, carries a
/// drive prefix or NUL byte, pops past the root, or normalizes to nothing.
///
/// # Examples
///
/// ```
/// use signbridge_common::paths::normalize_relative;
///
/// assert_eq!(normalize_relative("words\\hello.mp4").unwrap(), "words/hello.mp4");
/// assert_eq!(normalize_relative("words/x/../hello.mp4").unwrap(), "words/hello.mp4");
/// assert!(normalize_relative("/etc/passwd").is_err());
/// ```
pub fn normalize_relative(input: &str) -> Result<String> {
    let reject = || Error::PathTraversal(input.to_string());

    if input.contains('\0') {
        return Err(reject());
    }

    let unified = input.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(reject());
    }

    let mut segments: Vec<&str> = Vec::new();
    for (idx, segment) in unified.split('/').enumerate() {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(reject());
                }
            }
            // `C:` style prefixes would make `Path::join` discard the root on Windows.
            s if idx == 0 && s.contains(':') => return Err(reject()),
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(reject());
    }

    Ok(segments.join("/"))
}

/// Resolve a client path to an absolute location under `root`.
///
/// This is a purely lexical check; use [`confine_canonical`] once the file is
/// known to exist to also rule out symlinks pointing elsewhere.
pub fn resolve_under_root(root: &Path, input: &str) -> Result<PathBuf> {
    let normalized = normalize_relative(input)?;
    let mut resolved = root.to_path_buf();
    for segment in normalized.split('/') {
        resolved.push(segment);
    }
    Ok(resolved)
}

/// Verify that an already-canonicalized path still lives under the
/// canonicalized root.
pub fn confine_canonical(canonical_root: &Path, canonical_path: &Path) -> Result<()> {
    if canonical_path.starts_with(canonical_root) && canonical_path != canonical_root {
        Ok(())
    } else {
        Err(Error::PathTraversal(canonical_path.display().to_string()))
    }
}
