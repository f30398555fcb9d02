//! Minimal HTTP/1.1 servers that misbehave in controlled ways for retry tests.
//!
//! Each server counts accepted connections so tests can assert how many
//! attempts the client made.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Close the first `n` connections without replying, then answer 200.
    DropFirst(usize),
    /// Always answer with this status.
    Status(u32),
    /// Read the request and never answer.
    Stall,
    /// Answer 200 and send the body one byte per `interval`.
    Trickle { interval: Duration },
}

pub struct TestServer {
    pub url: String,
    connections: Arc<AtomicUsize>,
}

impl TestServer {
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

/// URL of a local port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(behavior: Behavior, body: &'static [u8]) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&connections);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            thread::spawn(move || handle(stream, n, behavior, body));
        }
    });
    TestServer {
        url: format!("http://127.0.0.1:{}/", port),
        connections,
    }
}

fn handle(mut stream: TcpStream, n: usize, behavior: Behavior, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if !matches!(stream.read(&mut buf), Ok(len) if len > 0) {
        return;
    }
    match behavior {
        Behavior::DropFirst(k) if n <= k => {}
        Behavior::DropFirst(_) => respond(&mut stream, 200, body),
        Behavior::Status(code) => respond(&mut stream, code, body),
        Behavior::Stall => thread::sleep(Duration::from_secs(10)),
        Behavior::Trickle { interval } => trickle(&mut stream, body, interval),
    }
}

fn trickle(stream: &mut TcpStream, body: &[u8], interval: Duration) {
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    for b in body {
        thread::sleep(interval);
        if stream.write_all(&[*b]).and_then(|_| stream.flush()).is_err() {
            return;
        }
    }
}

fn respond(stream: &mut TcpStream, code: u32, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
