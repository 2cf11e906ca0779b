//! Liveness probe transport

use crate::error::ProbeError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// One liveness check against one endpoint.
///
/// Implementations perform a single lightweight request and report a
/// boolean outcome through `Result`. Timeout behavior is applied by the
/// caller, not the prober.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, endpoint: &str) -> std::result::Result<(), ProbeError>;
}

/// JSON-RPC liveness prober.
///
/// Sends `eth_chainId` and requires an HTTP success status plus a JSON
/// body carrying a `result` field. A JSON-RPC error object counts as
/// unreachable.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> std::result::Result<Self, ProbeError> {
        // Generous backstop; per-probe deadlines come from the engine.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, endpoint: &str) -> std::result::Result<(), ProbeError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_chainId",
            "params": []
        });

        let response = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProbeError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::BadStatus(status.as_u16()));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;

        if value.get("result").is_none() {
            return Err(ProbeError::InvalidResponse(
                "missing result field".to_string(),
            ));
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP server that answers every connection with the given
    /// status line and body.
    async fn spawn_stub_server(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 2048];
                    let _ = socket.read(&mut buf).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_probe_success() {
        let url = spawn_stub_server("200 OK", r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#).await;
        let prober = HttpProber::new().unwrap();

        assert!(prober.probe(&url).await.is_ok());
    }

    #[tokio::test]
    async fn test_probe_http_error_status() {
        let url = spawn_stub_server("503 Service Unavailable", "{}").await;
        let prober = HttpProber::new().unwrap();

        match prober.probe(&url).await {
            Err(ProbeError::BadStatus(503)) => {}
            other => panic!("expected BadStatus(503), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_json_rpc_error_object() {
        let url = spawn_stub_server(
            "200 OK",
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .await;
        let prober = HttpProber::new().unwrap();

        match prober.probe(&url).await {
            Err(ProbeError::InvalidResponse(_)) => {}
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_malformed_body() {
        let url = spawn_stub_server("200 OK", "not json").await;
        let prober = HttpProber::new().unwrap();

        assert!(matches!(
            prober.probe(&url).await,
            Err(ProbeError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_connection_refused() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let prober = HttpProber::new().unwrap();
        assert!(matches!(
            prober.probe(&format!("http://{}", addr)).await,
            Err(ProbeError::ConnectionFailed(_))
        ));
    }
}
