//! One-shot HTTP/1.1 responders for transfer tests.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub(crate) const OK: &str = "200 OK";
pub(crate) const NOT_FOUND: &str = "404 Not Found";

/// Reads until the end of the request headers, returning what was read.
async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let Ok(n) = socket.read(&mut buf).await else {
            return request;
        };
        if n == 0 {
            return request;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            return request;
        }
    }
}

/// Serves a single response, writing the body in `chunk_size` pieces.
///
/// Returns the URL to request.
pub(crate) async fn serve_once(status: &'static str, body: Vec<u8>, chunk_size: usize) -> String {
    serve(status, body, chunk_size, Duration::ZERO).await
}

/// Serves a `200 OK` body slowly, pausing `pause` before each chunk.
pub(crate) async fn serve_paced(body: Vec<u8>, chunk_size: usize, pause: Duration) -> String {
    serve(OK, body, chunk_size, pause).await
}

async fn serve(status: &'static str, body: Vec<u8>, chunk_size: usize, pause: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        read_request(&mut socket).await;

        let head = format!(
            "HTTP/1.1 {status}\r\n\
             content-type: application/vnd.apache.arrow.stream\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n",
            body.len()
        );
        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }
        for chunk in body.chunks(chunk_size.max(1)) {
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            if socket.write_all(chunk).await.is_err() || socket.flush().await.is_err() {
                return;
            }
        }
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/")
}

/// Answers one request with an empty `200 OK` and hands back the request
/// head, lowercased.
pub(crate) async fn serve_recording() -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };
        let request = read_request(&mut socket).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            .await;
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).to_lowercase()
    });

    (format!("http://{addr}/"), handle)
}

/// Accepts a connection and never answers.
pub(crate) async fn serve_stalled() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        read_request(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    format!("http://{addr}/")
}

/// Returns a URL on a port nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
