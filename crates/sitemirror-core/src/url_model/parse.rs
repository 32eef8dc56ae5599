//! Splitting raw link text into scheme, host, path, params, query and fragment.

/// Unnormalized components of a link.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct RawParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits `raw` into its components. Never fails: input that is neither a
/// valid absolute URL nor a relative reference yields empty parts.
pub(super) fn split(raw: &str) -> RawParts {
    let raw = raw.trim();

    // Scheme-relative reference: parse with a placeholder scheme, then drop it.
    if let Some(rest) = raw.strip_prefix("//") {
        return match url::Url::parse(&format!("http://{}", rest)) {
            Ok(parsed) => RawParts {
                scheme: String::new(),
                ..from_url(&parsed)
            },
            Err(e) => {
                tracing::debug!(link = raw, error = %e, "unparseable scheme-relative link");
                RawParts::default()
            }
        };
    }

    match url::Url::parse(raw) {
        Ok(parsed) => from_url(&parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => split_relative(raw),
        Err(e) => {
            tracing::debug!(link = raw, error = %e, "unparseable link");
            RawParts::default()
        }
    }
}

fn from_url(parsed: &url::Url) -> RawParts {
    let host = parsed.host_str().unwrap_or("");
    let netloc = match parsed.port() {
        Some(port) if !host.is_empty() => format!("{}:{}", host, port),
        _ => host.to_string(),
    };
    let (path, params) = split_params(parsed.path());
    RawParts {
        scheme: parsed.scheme().to_string(),
        netloc,
        path: path.to_string(),
        params: params.to_string(),
        query: parsed.query().map(str::to_string),
        fragment: parsed.fragment().map(str::to_string),
    }
}

fn split_relative(raw: &str) -> RawParts {
    let (rest, fragment) = match raw.split_once('#') {
        Some((r, f)) => (r, Some(f.to_string())),
        None => (raw, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((r, q)) => (r, Some(q.to_string())),
        None => (rest, None),
    };
    let (path, params) = split_params(rest);
    RawParts {
        scheme: String::new(),
        netloc: String::new(),
        path: path.to_string(),
        params: params.to_string(),
        query,
        fragment,
    }
}

/// Separates `;params` from the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let last_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[last_start..].find(';') {
        Some(i) => (&path[..last_start + i], &path[last_start + i + 1..]),
        None => (path, ""),
    }
}
