//! Minimal HTTP/1.1 server serving a fixed JSON route table for integration tests.
//!
//! Records request paths in arrival order and tracks how many requests were
//! ever open at the same time so tests can assert strictly sequential
//! fetching. Unrouted paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Canned response for one route.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    /// 200 response with the given JSON body.
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// Empty-bodied response with the given status (e.g. 404, 500).
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Handle to a running test server.
pub struct JsonServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    max_in_flight: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Base URL of the server, e.g. `http://127.0.0.1:39123/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request paths in the order they arrived.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Largest number of requests that were ever open simultaneously.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. `routes` receives the base URL
/// (so bodies can embed absolute URLs back into the server) and returns the
/// path -> response table. The server runs until the process exits.
pub fn start<F>(routes: F) -> JsonServer
where
    F: FnOnce(&str) -> Vec<(String, Route)>,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}/", port);

    let routes: Arc<HashMap<String, Route>> = Arc::new(routes(&base_url).into_iter().collect());
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));

    let server = JsonServer {
        base_url,
        requests: Arc::clone(&requests),
        max_in_flight: Arc::clone(&max_in_flight),
    };

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            let in_flight = Arc::clone(&in_flight);
            let max_in_flight = Arc::clone(&max_in_flight);
            thread::spawn(move || handle(stream, &routes, &requests, &in_flight, &max_in_flight));
        }
    });

    server
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    requests: &Mutex<Vec<String>>,
    in_flight: &AtomicUsize,
    max_in_flight: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };
    requests.lock().unwrap().push(path.to_string());

    // A request counts as in flight from arrival until its response is sent.
    // The sleep widens the window so overlapping fetches would be observed.
    let open = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    max_in_flight.fetch_max(open, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(25));
    in_flight.fetch_sub(1, Ordering::SeqCst);

    let (status_line, body) = match routes.get(path) {
        Some(route) => (status_text(route.status), route.body.as_str()),
        None => (status_text(404), ""),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

/// Returns the request-target path of the first request line.
fn request_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    line.split_whitespace().nth(1)
}

fn status_text(status: u16) -> String {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    format!("{} {}", status, reason)
}
