//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use carfinder::pipeline::VehicleRecord;

/// Path the local test server pretends to serve the search API on
pub const SEARCH_PATH: &str = "/api/records/1.0/search/";

/// Envelope with two complete records and one wrapper without `fields`
///
/// Mirrors what the live API returns: `year` is a string, `cylinders` a float.
pub fn sample_envelope() -> String {
    r#"{
        "nhits": 3,
        "parameters": {"dataset": "all-vehicles-model", "rows": 10},
        "records": [
            {"datasetid": "all-vehicles-model", "recordid": "a1",
             "fields": {"make": "Toyota", "model": "Corolla", "year": "2020", "cylinders": 4.0}},
            {"datasetid": "all-vehicles-model", "recordid": "a2"},
            {"datasetid": "all-vehicles-model", "recordid": "a3",
             "fields": {"make": "Ford", "model": "Mustang", "year": "2018", "cylinders": 8.0}}
        ]
    }"#
    .to_string()
}

/// Records decoded from [`sample_envelope`], in order
pub fn sample_records() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord::new("Toyota", "Corolla", "2020", 4),
        VehicleRecord::new("Ford", "Mustang", "2018", 8),
    ]
}

/// Records whose text needs CSV quoting
pub fn awkward_records() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord::new("Mercedes-Benz", "E350, 4Matic", "2012", 6),
        VehicleRecord::new("Ram", "1500 \"Classic\"", "2019", 8),
        VehicleRecord::new("", "", "", 0),
    ]
}

/// A one-shot HTTP server on localhost
pub struct TestServer {
    /// Base search URL pointing at the server
    pub base_url: String,
    /// Receives the request line (e.g. `GET /path?x=1 HTTP/1.1`)
    pub requests: Receiver<String>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn join(self) {
        self.handle.join().unwrap();
    }
}

/// Serve exactly one request with the given status and body
pub fn serve_once(status: u16, body: &str) -> TestServer {
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    serve_response(response, Duration::ZERO)
}

/// Serve exactly one request with a verbatim response, then close
///
/// Lets tests send bodies shorter than their `Content-Length`.
pub fn serve_raw(response: &'static str) -> TestServer {
    serve_response(response.to_string(), Duration::ZERO)
}

/// Serve exactly one request, waiting `delay` before answering
pub fn serve_delayed(delay: Duration, body: &str) -> TestServer {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    serve_response(response, delay)
}

fn serve_response(response: String, delay: Duration) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }
        let _ = tx.send(request_line.trim_end().to_string());

        thread::sleep(delay);
        // The client may already have given up on a delayed response
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}{}", port, SEARCH_PATH),
        requests: rx,
        handle,
    }
}

/// A localhost URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, SEARCH_PATH)
}
