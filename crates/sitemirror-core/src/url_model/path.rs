//! Path segment helpers: filename inference and reference joining.

/// Last segment of `path` if it carries an extension (`name.ext`).
///
/// Returns `None` for an empty path, a trailing-separator path, or a last
/// segment without extension (such a path names a directory).
pub fn filename_from_path(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next()?;
    if segment.is_empty() || !has_extension(segment) {
        return None;
    }
    Some(segment)
}

/// Path minus its filename when it has one, otherwise the full path.
pub fn directory_of(path: &str) -> &str {
    match filename_from_path(path) {
        Some(name) => path[..path.len() - name.len()].trim_end_matches('/'),
        None => path,
    }
}

fn has_extension(segment: &str) -> bool {
    match segment.rfind('.') {
        Some(i) => i > 0 && i + 1 < segment.len(),
        None => false,
    }
}

/// Resolves `reference` against the page at `page_url`, returning an absolute
/// URL without fragment.
///
/// A page path without filename is treated as a directory, so `about.html`
/// from `http://example.com/docs` resolves under `/docs/`.
pub fn join_reference(page_url: &str, reference: &str) -> Option<String> {
    let mut base = url::Url::parse(page_url).ok()?;
    if !base.path().ends_with('/') && filename_from_path(base.path()).is_none() {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    let mut joined = base.join(reference.trim()).ok()?;
    joined.set_fragment(None);
    Some(joined.into())
}
