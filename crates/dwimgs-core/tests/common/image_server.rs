//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses per request path (query string included). Unknown
//! paths get `404 Not Found` with a `text/plain` body.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Route {
            status: "200 OK",
            content_type: Some(content_type),
            location: None,
            body: body.to_vec(),
        }
    }

    pub fn status(status: &'static str) -> Self {
        Route {
            status,
            content_type: Some("text/plain"),
            location: None,
            body: status.as_bytes().to_vec(),
        }
    }

    /// 200 without any Content-Type header.
    pub fn untyped(body: &[u8]) -> Self {
        Route {
            status: "200 OK",
            content_type: None,
            location: None,
            body: body.to_vec(),
        }
    }

    pub fn redirect(to: &str) -> Self {
        Route {
            status: "302 Found",
            content_type: None,
            location: Some(to.to_string()),
            body: Vec::new(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let not_found = Route::status("404 Not Found");
    let route = routes.get(path).unwrap_or(&not_found);

    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(loc) = &route.location {
        head.push_str(&format!("Location: {}\r\n", loc));
    }
    head.push_str("\r\n");

    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
