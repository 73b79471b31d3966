//! One-shot HTTP responder for client tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A listener that answers exactly one request with a canned response.
pub struct CannedServer {
    /// `http://127.0.0.1:{port}`
    pub origin: String,
    handle: JoinHandle<String>,
}

impl CannedServer {
    /// Start serving `status` with `body` on an ephemeral port.
    pub async fn start(status: u16, reason: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to port 0");
        let origin = format!("http://{}", listener.local_addr().unwrap());

        let response = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept failed");
            let request = read_head(&mut socket).await;
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write failed");
            socket.shutdown().await.ok();
            request
        });

        Self { origin, handle }
    }

    /// Collection URL on this server.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/server", self.origin)
    }

    /// Raw request head that was received.
    pub async fn request(self) -> String {
        self.handle.await.expect("responder task panicked")
    }
}

/// Read until the blank line that ends the request head.
async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// An origin nothing is listening on.
pub async fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port 0");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
