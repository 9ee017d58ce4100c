//! reqwest-backed [`AnalysisGateway`]

use std::time::Duration;

use rlens_core::prelude::*;
use url::Url;

use crate::classify::classify_response;
use crate::error::GatewayError;
use crate::gateway::{AnalysisGateway, RequestInputs};
use crate::RawPayload;

/// Maximum number of characters of a body that end up in a log line.
const LOG_TRUNCATE_LIMIT: usize = 500;

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGatewayConfig {
    /// Service address, e.g. `https://analyzer.example.com`. A path prefix is kept.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Talks to the analysis service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &HttpGatewayConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("reddit-lens/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        info!("Analysis service: {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `endpoint_path` below the base address, keeping any base path
    fn endpoint_url(&self, endpoint_path: &str) -> std::result::Result<Url, GatewayError> {
        self.base_url
            .join(endpoint_path.trim_start_matches('/'))
            .map_err(|e| GatewayError::unexpected(0, format!("bad endpoint {endpoint_path}: {e}")))
    }
}

impl AnalysisGateway for HttpGateway {
    async fn invoke(
        &self,
        endpoint_path: &str,
        inputs: &RequestInputs,
    ) -> std::result::Result<RawPayload, GatewayError> {
        let url = self.endpoint_url(endpoint_path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(inputs)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("POST {} timed out: {}", url, e);
                } else {
                    warn!("POST {} failed: {}", url, e);
                }
                GatewayError::network(e.to_string())
            })?;

        let status = response.status().as_u16();
        debug!("POST {} -> HTTP {}", url, status);

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            GatewayError::network(format!("Failed to read response body: {e}"))
        })?;
        debug!("Response body: {}", truncate_for_log(&body));

        classify_response(status, &body)
            .inspect_err(|e| debug!("POST {} classified as {} error: {}", url, e.kind(), e))
    }
}

fn parse_base_url(address: &str) -> Result<Url> {
    let mut url = Url::parse(address.trim())
        .map_err(|e| Error::invalid_base_url(address, e.to_string()))?;
    // `join` replaces the last segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_base_url(
            address,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_TRUNCATE_LIMIT) {
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NETWORK_ERROR_MESSAGE;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn config(base_url: &str) -> HttpGatewayConfig {
        HttpGatewayConfig {
            base_url: base_url.to_string(),
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(2)),
        }
    }

    fn inputs(pairs: &[(&str, &str)]) -> RequestInputs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Serve one canned response and hand back the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(request);
        });

        (format!("http://{addr}"), rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_invoke_posts_json_to_endpoint() {
        let (base, request_rx) = serve_once("200 OK", r#"{"advice":"Hydrate."}"#).await;
        let gateway = HttpGateway::new(&config(&base)).unwrap();

        let payload = gateway
            .invoke("/reddit-therapist", &inputs(&[("username", "spez")]))
            .await
            .unwrap();
        assert_eq!(payload, json!({"advice": "Hydrate."}));

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /reddit-therapist HTTP/1.1"));
        assert!(request.contains(r#"{"username":"spez"}"#));
    }

    #[tokio::test]
    async fn test_invoke_keeps_base_path_prefix() {
        let (base, request_rx) = serve_once("200 OK", r#"{"roast":"ok"}"#).await;
        let gateway = HttpGateway::new(&config(&format!("{base}/api/"))).unwrap();

        gateway
            .invoke("/roast-user", &inputs(&[("username", "a")]))
            .await
            .unwrap();
        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /api/roast-user HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_invoke_passes_server_detail_through() {
        let (base, _rx) = serve_once("400 Bad Request", r#"{"detail":"user not found"}"#).await;
        let gateway = HttpGateway::new(&config(&base)).unwrap();

        let err = gateway
            .invoke("/toxicity-score", &inputs(&[("username", "ghost")]))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::server(400, "user not found"));
        assert_eq!(err.user_message(), "user not found");
    }

    #[tokio::test]
    async fn test_invoke_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpGateway::new(&config(&format!("http://{addr}"))).unwrap();
        let err = gateway
            .invoke("/insights", &inputs(&[("username", "a")]))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Network { .. }));
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_invoke_timeout_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let gateway = HttpGateway::new(&HttpGatewayConfig {
            base_url: format!("http://{addr}"),
            timeout: Some(Duration::from_millis(200)),
            connect_timeout: None,
        })
        .unwrap();
        let err = gateway
            .invoke("/time-machine", &inputs(&[("username", "a")]))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Network { .. }));
    }

    #[tokio::test]
    async fn test_invoke_non_json_success_is_unexpected() {
        let (base, _rx) = serve_once("200 OK", "<html>maintenance</html>").await;
        let gateway = HttpGateway::new(&config(&base)).unwrap();
        let err = gateway
            .invoke("/insights", &inputs(&[("username", "a")]))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected { status: 200, .. }));
    }

    #[test]
    fn test_rejects_invalid_base_urls() {
        assert!(matches!(
            HttpGateway::new(&config("not a url")),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            HttpGateway::new(&config("ftp://example.com")),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let gateway = HttpGateway::new(&config("https://example.com/")).unwrap();
        assert_eq!(
            gateway.endpoint_url("/insights").unwrap().as_str(),
            "https://example.com/insights"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let gateway = HttpGateway::new(&config("http://localhost:8000/api")).unwrap();
        assert_eq!(gateway.base_url().as_str(), "http://localhost:8000/api/");
        assert_eq!(
            gateway.endpoint_url("/predict-viral-post").unwrap().as_str(),
            "http://localhost:8000/api/predict-viral-post"
        );
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short"), "short");
        let long = "é".repeat(600);
        let out = truncate_for_log(&long);
        assert!(out.contains("[truncated, total 1200 bytes]"));
    }
}
