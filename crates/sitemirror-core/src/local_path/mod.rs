//! Maps a link, interpreted relative to the page that referenced it, onto a
//! directory and filename under the output root.
//!
//! Resolution cases, in priority order:
//!
//! - absolute with empty path: the root index file;
//! - absolute: the URL path mirrored under the root;
//! - relative starting with `/`: the separator is dropped and the remainder is
//!   placed under the referencing page's directory;
//! - relative without `..`: appended to the referencing page's directory;
//! - relative with `..`: each `..` climbs one directory of the referencing
//!   page, never above the root.
//!
//! A path with an inferred filename contributes that filename to the last
//! segment; directories never include it. Paths without filename get the
//! implicit `index.html`.

use std::path::{Component, Path, PathBuf};

use crate::url_model::{directory_of, SiteUrl};

/// Filename used when a URL path names a directory.
pub const INDEX_FILENAME: &str = "index.html";

const PARENT_SEGMENT: &str = "..";

/// Destination of one mirrored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPath {
    pub directory: PathBuf,
    pub filename: String,
}

impl LocalPath {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// `directory/filename`.
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Lexically normalized full path, used as the dedupe key.
    pub fn canonical(&self) -> PathBuf {
        normalize_lexically(&self.full_path())
    }

    /// Lowercased extension of the filename.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }

    /// Whether the filename's extension is one of `markup_extensions`
    /// (compared case-insensitively, without the leading dot).
    pub fn is_markup(&self, markup_extensions: &[String]) -> bool {
        match self.extension() {
            Some(ext) => markup_extensions
                .iter()
                .any(|m| m.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }
}

/// Destination of the page a crawl starts from.
pub fn root_index(root_path: &Path) -> LocalPath {
    LocalPath::new(root_path, INDEX_FILENAME)
}

/// Resolves `url`, referenced from the page at `base_url`, under `root_path`.
pub fn resolve(url: &SiteUrl, base_url: &SiteUrl, root_path: &Path) -> LocalPath {
    let filename = url.filename().unwrap_or(INDEX_FILENAME).to_string();

    if url.is_absolute() {
        if url.path().is_empty() {
            return root_index(root_path);
        }
        let directory = join_segments(root_path, segments(url.directory_path()));
        return LocalPath::new(directory, filename);
    }

    // Site-rooted references lose their leading separator and are then
    // handled like document-relative ones.
    let own_path = url.path().strip_prefix('/').unwrap_or(url.path());
    let own_dir = directory_of(own_path);
    let mut dirs: Vec<&str> = segments(base_url.directory_path()).collect();

    if !segments(own_dir).any(|s| s == PARENT_SEGMENT) {
        dirs.extend(segments(own_dir));
    } else {
        for segment in segments(own_dir) {
            if segment == PARENT_SEGMENT {
                dirs.pop();
            } else {
                dirs.push(segment);
            }
        }
    }

    LocalPath::new(join_segments(root_path, dirs.into_iter()), filename)
}

/// Non-empty path segments, skipping `.`.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

fn join_segments<'a>(root: &Path, segments: impl Iterator<Item = &'a str>) -> PathBuf {
    let mut out = root.to_path_buf();
    for segment in segments {
        out.push(segment);
    }
    out
}

/// Resolves `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
