//! Path normalization for descriptor output.
//!
//! All resolution here is lexical: the reload agent consumes paths that may
//! not exist yet (output directories are created by later build steps), so
//! nothing in this module touches the filesystem.

use crate::error::ResolveError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Resolve a configured path string against a base directory into an
/// absolute, schema-ready path.
///
/// This function:
/// 1. Normalizes Unicode to NFC and separators to `/` (backslashes converted,
///    duplicates collapsed)
/// 2. Returns already-absolute input as-is apart from that normalization
/// 3. Joins relative input onto `base` and collapses `.`/`..` segments
///    lexically (`..` never climbs above the root)
/// 4. Strips trailing separators (the root itself survives)
///
/// Empty input is rejected with [`ResolveError::EmptyPath`] carrying the
/// field name it was handed; callers substitute a convention default before
/// resolving.
pub fn fix_path(raw: &str, base: &Path, field: &str) -> Result<PathBuf, ResolveError> {
    if raw.is_empty() {
        return Err(ResolveError::EmptyPath {
            field: field.to_string(),
        });
    }

    let normalized = normalize_separators(raw);

    if is_absolute(&normalized) {
        return Ok(PathBuf::from(strip_trailing(&normalized)));
    }

    let base_str = normalize_separators(&base.to_string_lossy());
    let joined = format!("{}/{}", strip_trailing(&base_str), normalized);

    Ok(PathBuf::from(strip_trailing(&collapse_dots(&joined))))
}

/// Normalize a web-resource target string: a single leading `/`, no duplicate
/// separators, and no trailing separator except for the root target `/`.
///
/// An empty target maps to the root.
pub fn normalize_target(raw: &str) -> String {
    let normalized = normalize_separators(raw);
    let trimmed = normalized.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }

    format!("/{}", trimmed)
}

/// Normalize Unicode to NFC, convert backslashes to `/`, and collapse
/// duplicate separators.
fn normalize_separators(raw: &str) -> String {
    let nfc: String = raw.nfc().collect();

    let mut result = String::with_capacity(nfc.len());
    let mut last_was_sep = false;
    for c in nfc.chars() {
        let is_sep = c == '/' || c == '\\';
        if is_sep {
            if !last_was_sep {
                result.push('/');
            }
        } else {
            result.push(c);
        }
        last_was_sep = is_sep;
    }
    result
}

/// Remove trailing separators, preserving a bare root (`/` or `C:/`).
fn strip_trailing(path: &str) -> String {
    let mut result = path.to_string();
    while result.len() > 1 && result.ends_with('/') && !ends_at_drive_root(&result) {
        result.pop();
    }
    result
}

fn ends_at_drive_root(path: &str) -> bool {
    path.len() == 3 && has_drive_prefix(path)
}

/// Absolute under either separator convention: a leading `/` or a Windows
/// drive prefix.
fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || has_drive_prefix(path)
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Collapse `.` and `..` segments in an already-absolute, `/`-separated path.
fn collapse_dots(path: &str) -> String {
    // A drive prefix ("C:") or the empty segment before a leading "/" anchors
    // the stack; ".." cannot pop past it.
    let mut segments: Vec<&str> = Vec::new();
    let mut anchor: Option<&str> = None;

    for (i, segment) in path.split('/').enumerate() {
        if i == 0 {
            anchor = Some(segment);
            continue;
        }
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut result = anchor.unwrap_or("").to_string();
    for segment in segments {
        result.push('/');
        result.push_str(segment);
    }
    if result.is_empty() {
        result.push('/');
    }
    result
}
