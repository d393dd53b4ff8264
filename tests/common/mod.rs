#![allow(dead_code)]

//! Minimal canned-response HTTP server for integration tests

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub struct StubServer {
    pub base_url: String,
    requests: Receiver<String>,
}

impl StubServer {
    /// Serve `status` + `body` to every request until the test ends.
    pub fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = channel();
        let body = body.to_string();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let request_line = serve(stream, status, &body);
                if tx.send(request_line).is_err() {
                    break;
                }
            }
        });

        Self {
            base_url,
            requests: rx,
        }
    }

    /// Request lines received so far, waiting briefly for stragglers.
    pub fn requests(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let deadline = Instant::now() + Duration::from_millis(300);
        while Instant::now() < deadline {
            match self.requests.recv_timeout(Duration::from_millis(50)) {
                Ok(line) => seen.push(line),
                Err(_) if !seen.is_empty() => break,
                Err(_) => {}
            }
        }
        seen
    }
}

fn serve(stream: TcpStream, status: u16, body: &str) -> String {
    let mut reader = BufReader::new(&stream);
    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);

    // Drain headers
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => break,
        }
    }

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let mut writer = &stream;
    let _ = writer.write_all(response.as_bytes());
    let _ = writer.flush();

    request_line.trim_end().to_string()
}

/// Decode the `keyword` query parameter out of an HTTP request line.
pub fn keyword_of(request_line: &str) -> Option<String> {
    let target = request_line.split_whitespace().nth(1)?;
    let url = reqwest::Url::parse(&format!("http://stub{}", target)).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "keyword")
        .map(|(_, v)| v.into_owned())
}

/// Base URL of a port nothing listens on.
pub fn dead_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
