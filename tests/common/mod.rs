//! Shared test fixtures for the seller statistics SDK integration tests.
//!
//! Provides [`serve`], a minimal canned-response HTTP listener on an
//! ephemeral local port. Each scripted `(status, body)` pair answers one
//! connection in order, and every received request target (path + query) is
//! recorded so tests can assert exactly what went over the wire.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use sellerstats_sdk::SellerStatsSdk;

pub const TEST_KEY: &str = "test-key";

pub struct FixtureServer {
    base_url: String,
    targets: Receiver<String>,
}

/// Start a listener that answers one connection per scripted response, in
/// order, then stops accepting.
pub fn serve(responses: Vec<(u16, String)>) -> FixtureServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let stream = match listener.accept() {
                Ok((stream, _)) => stream,
                Err(_) => return,
            };
            answer(stream, status, &body, &tx);
        }
    });

    FixtureServer {
        base_url,
        targets: rx,
    }
}

impl FixtureServer {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// An SDK pointed at this fixture, keyed with [`TEST_KEY`].
    pub fn sdk(&self) -> SellerStatsSdk {
        SellerStatsSdk::builder()
            .base_url(self.base_url())
            .api_key(TEST_KEY)
            .build()
            .unwrap()
    }

    /// Next recorded request target, e.g. `/stocks?key=test-key&page=1&limit=10`.
    pub fn next_target(&self) -> String {
        self.targets
            .recv_timeout(Duration::from_secs(5))
            .expect("no request received by fixture server")
    }
}

fn answer(mut stream: TcpStream, status: u16, body: &str, tx: &Sender<String>) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(clone) => clone,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // "GET /stocks?key=... HTTP/1.1"
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("")
        .to_string();
    let _ = tx.send(target);

    // Drain request headers up to the blank line.
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => break,
        }
    }

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
