//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of request path -> (status, body) with
//! `Connection: close`; unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A running server: base URL plus the request paths it has seen.
pub struct SiteServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SiteServer {
    /// Number of GETs received for `path` (e.g. "/about.html").
    pub fn hits(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }

    pub fn total_hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Starts a server in a background thread. The base URL has no trailing
/// slash (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(pages: &[(&str, u16, &str)]) -> SiteServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, (u16, Vec<u8>)>> = Arc::new(
        pages
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.as_bytes().to_vec())))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &pages, &seen));
        }
    });
    SiteServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    pages: &HashMap<String, (u16, Vec<u8>)>,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }
    seen.lock().unwrap().push(path.clone());

    let (status, body) = pages
        .get(&path)
        .map(|(s, b)| (*s, b.as_slice()))
        .unwrap_or((404, b"not found".as_slice()));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: text/html; charset=utf-8\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
