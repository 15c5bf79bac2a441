use realticker_rs::RealtickerClient;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned route served by the fixture server: method, path, status, body.
pub type Route = (&'static str, &'static str, u16, &'static str);

/// Serve a fixed set of JSON routes on a loopback port and return a client
/// pointed at it. Unmatched requests get a 404 with a FastAPI-style body.
/// Connections are closed per request, so the client never reuses a socket
/// the server has already dropped.
pub async fn setup_client(routes: Vec<Route>) -> RealtickerClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let Ok((mut sock, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut data = Vec::new();
                let mut buf = [0u8; 1024];
                // Only the request line matters; read until the header block
                // is complete (none of these endpoints take a request body).
                loop {
                    match sock.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            data.extend_from_slice(&buf[..n]);
                            if data.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let request = String::from_utf8_lossy(&data);
                let mut parts = request.lines().next().unwrap_or("").split_whitespace();
                let method = parts.next().unwrap_or("");
                let target = parts.next().unwrap_or("");
                let path = target.split('?').next().unwrap_or("");

                let (status, body) = routes
                    .iter()
                    .find(|(m, p, _, _)| *m == method && *p == path)
                    .map(|(_, _, s, b)| (*s, *b))
                    .unwrap_or((404, r#"{"detail":"Stock not found"}"#));
                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = sock.write_all(response.as_bytes()).await;
                let _ = sock.shutdown().await;
            });
        }
    });

    RealtickerClient::new_with_config(Some(format!("http://{addr}/")))
}
