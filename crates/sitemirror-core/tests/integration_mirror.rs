//! Integration test: local HTTP server, real curl fetcher, full mirror run.

mod common;

use std::fs;

use sitemirror_core::fetch::{CurlFetcher, HttpOptions};
use sitemirror_core::{Mirror, MirrorError, MirrorOptions};
use tempfile::tempdir;

fn fetcher() -> Box<CurlFetcher> {
    Box::new(CurlFetcher::new(HttpOptions::default()))
}

#[test]
fn mirrors_local_site_over_http() {
    let root_page = r#"<!DOCTYPE html>
<html><head><link rel="stylesheet" href="/site.css"></head>
<body>
<a href="about.html">About</a>
<a href="docs/guide.html">Guide</a>
<a href="https://example.org/elsewhere">Elsewhere</a>
</body></html>"#;
    let server = common::site_server::start(&[
        ("/", 200, root_page),
        ("/about.html", 200, r#"<a href="index.html">home</a><a href="docs/guide.html">guide</a>"#),
        ("/docs/guide.html", 200, r#"<a href="../about.html">about</a>"#),
        ("/site.css", 200, "body { color: black; }"),
    ]);

    let out = tempdir().unwrap();
    let summary = Mirror::new(&server.base_url, out.path(), fetcher(), MirrorOptions::default())
        .run()
        .expect("mirror run");

    assert_eq!(summary.saved, 4);
    assert_eq!(summary.failures(), 0);
    assert_eq!(server.hits("/about.html"), 1);
    assert_eq!(server.hits("/docs/guide.html"), 1);
    assert_eq!(server.total_hits(), 4);

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    let about_ref = out.path().join("about.html").to_string_lossy().into_owned();
    assert!(index.contains(&format!(r#"href="{}""#, about_ref)));
    assert!(index.contains(r#"href="https://example.org/elsewhere""#));
    assert!(index.starts_with("<!DOCTYPE html>\n<html><head>"));

    assert_eq!(
        fs::read_to_string(out.path().join("site.css")).unwrap(),
        "body { color: black; }"
    );
    let guide = fs::read_to_string(out.path().join("docs/guide.html")).unwrap();
    assert!(guide.contains(&format!(r#"href="{}""#, about_ref)));
}

#[test]
fn missing_pages_do_not_stop_the_crawl() {
    let server = common::site_server::start(&[
        ("/", 200, r#"<a href="missing.html">x</a><a href="broken.html">y</a><a href="ok.html">z</a>"#),
        ("/broken.html", 500, ""),
        ("/ok.html", 200, "fine"),
    ]);

    let out = tempdir().unwrap();
    let summary = Mirror::new(&server.base_url, out.path(), fetcher(), MirrorOptions::default())
        .run()
        .expect("mirror run");

    assert_eq!(summary.saved, 2);
    assert_eq!(summary.http_errors, 2);
    assert!(!out.path().join("missing.html").exists());
    assert_eq!(fs::read_to_string(out.path().join("ok.html")).unwrap(), "fine");
}

#[test]
fn root_page_error_fails_the_run() {
    let server = common::site_server::start(&[("/", 500, "")]);
    let out = tempdir().unwrap();

    let err = Mirror::new(&server.base_url, out.path(), fetcher(), MirrorOptions::default())
        .run()
        .unwrap_err();

    assert!(matches!(err, MirrorError::RootStatus { status: 500, .. }));
}
