//! Glob expansion of upload file patterns against the workspace root.
//!
//! `*` and `?` never cross a `/`; `**` matches any number of directories.
//! A pattern that names an existing file is taken literally, even if it
//! contains glob characters (`app[1].jar`). A pattern without glob
//! characters is otherwise dropped. Results follow pattern order, then file-name
//! order within each directory walk. Duplicates across patterns are kept.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use artipub_util::errors::ArtipubError;

const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

/// Expand `patterns` relative to `workspace_root`.
///
/// Patterns that match nothing contribute nothing; an empty pattern list
/// yields an empty result.
pub fn expand(workspace_root: &Path, patterns: &[String]) -> miette::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for pattern in patterns {
        let matched = expand_one(workspace_root, pattern)?;
        if matched.is_empty() {
            tracing::warn!("File pattern `{pattern}` matched nothing");
        } else {
            tracing::debug!("File pattern `{pattern}` matched {} file(s)", matched.len());
        }
        out.extend(matched);
    }
    Ok(out)
}

fn expand_one(workspace_root: &Path, pattern: &str) -> miette::Result<Vec<PathBuf>> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let candidate = workspace_root.join(pattern);
    if candidate.is_file() {
        return Ok(vec![candidate]);
    }

    let (base, glob) = split_base(pattern);
    let Some(glob) = glob else {
        return Ok(Vec::new());
    };

    let base_dir = workspace_root.join(&base);
    if !base_dir.is_dir() {
        return Ok(Vec::new());
    }

    let matcher = compile(&glob, pattern)?;
    let mut matched = Vec::new();
    for entry in WalkDir::new(&base_dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {e}", base_dir.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(&base_dir) else {
            continue;
        };
        if matcher.is_match(slash_path(rel)) {
            matched.push(entry.path().to_path_buf());
        }
    }
    Ok(matched)
}

/// Split a pattern into its literal leading directories and the glob part.
///
/// `dist/libs/*.jar` becomes (`dist/libs`, `*.jar`); a pattern with no
/// glob characters yields `None` for the glob part.
fn split_base(pattern: &str) -> (PathBuf, Option<String>) {
    let normalized = pattern.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').collect();
    let Some(first_glob) = segments.iter().position(|s| s.contains(GLOB_CHARS)) else {
        return (PathBuf::from(pattern), None);
    };

    let base = segments[..first_glob].join("/");
    let base = if base.is_empty() && normalized.starts_with('/') {
        PathBuf::from("/")
    } else {
        PathBuf::from(base)
    };
    (base, Some(segments[first_glob..].join("/")))
}

fn compile(glob: &str, pattern: &str) -> miette::Result<GlobMatcher> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| {
            ArtipubError::Configuration {
                message: format!("Invalid file pattern `{pattern}`: {e}"),
            }
            .into()
        })
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_base_literal_prefix() {
        let (base, glob) = split_base("dist/libs/*.jar");
        assert_eq!(base, PathBuf::from("dist/libs"));
        assert_eq!(glob.as_deref(), Some("*.jar"));
    }

    #[test]
    fn split_base_recursive_from_root() {
        let (base, glob) = split_base("**/*.jar");
        assert_eq!(base, PathBuf::from(""));
        assert_eq!(glob.as_deref(), Some("**/*.jar"));
    }

    #[test]
    fn split_base_literal_file() {
        let (base, glob) = split_base("target/app.jar");
        assert_eq!(base, PathBuf::from("target/app.jar"));
        assert!(glob.is_none());
    }

    #[test]
    fn split_base_absolute_glob() {
        let (base, glob) = split_base("/opt/out/*.zip");
        assert_eq!(base, PathBuf::from("/opt/out"));
        assert_eq!(glob.as_deref(), Some("*.zip"));
    }

    #[test]
    fn invalid_glob_is_configuration_error() {
        let err = compile("[a-", "[a-").unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
