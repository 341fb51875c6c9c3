//! Where prices come from.
//!
//! `PriceSource` is the seam between the refresher and the network. The HTTP
//! implementation issues one blocking GET per call:
//!
//! `{endpoint}?ids={gold},{silver}&vs_currencies={currency}`
//!
//! Non-2xx statuses, transport failures and undecodable bodies are returned as
//! `BoardError`; per-asset gaps are not errors (see [`crate::reading`]).
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::config::{AssetIds, BoardConfig};
use crate::error::BoardError;
use crate::reading::PriceResponse;
use crate::result::Result;

/// Source of current prices for both assets.
pub trait PriceSource: Send + Sync {
    /// Performs one fetch and decodes it.
    fn fetch(&self) -> Result<PriceResponse>;
}

/// Price source backed by the HTTP price API.
pub struct HttpPriceSource {
    client: Client,
    url: Url,
    ids: AssetIds,
    currency: String,
}

impl HttpPriceSource {
    /// Validates `config` and builds the client and the request URL.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        let ids = AssetIds {
            gold: config.ids.gold.trim().to_string(),
            silver: config.ids.silver.trim().to_string(),
        };
        let currency = config.currency.trim().to_ascii_lowercase();
        let endpoint = config.endpoint.trim().trim_end_matches('/');
        let url = Url::parse_with_params(
            endpoint,
            &[
                ("ids", format!("{},{}", ids.gold, ids.silver)),
                ("vs_currencies", currency.clone()),
            ],
        )
        .map_err(|e| BoardError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;

        // The blocking client defaults to a 30s timeout; an explicit `None` disables it.
        let client = Client::builder().timeout(config.timeout).build()?;

        info!("Price source ready: url={}, timeout={:?}", url, config.timeout);

        Ok(Self {
            client,
            url,
            ids,
            currency,
        })
    }

    /// Full request URL including the query string.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl PriceSource for HttpPriceSource {
    fn fetch(&self) -> Result<PriceResponse> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status(status));
        }

        let body = response.text()?;
        debug!("Received {} bytes", body.len());
        PriceResponse::from_json(&body, &self.ids, &self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::str::FromStr;
    use std::thread;
    use std::time::Duration;

    /// Serves a single canned HTTP response and hands back the request line.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buf = [0u8; 4096];
            let size = stream.read(&mut buf).expect("read request");
            let request = String::from_utf8_lossy(&buf[..size]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write response");
            request.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}/api/v3/simple/price", addr), handle)
    }

    fn source_for(endpoint: String) -> HttpPriceSource {
        let config = BoardConfig {
            endpoint,
            timeout: Some(Duration::from_secs(5)),
            ..BoardConfig::default()
        };
        HttpPriceSource::new(&config).expect("build source")
    }

    #[test]
    fn builds_query_with_both_ids_and_currency() {
        let source = source_for("https://prices.example/simple/price/".to_string());
        assert_eq!(
            source.url(),
            "https://prices.example/simple/price?ids=pax-gold%2Ckinesis-silver&vs_currencies=usd"
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BoardConfig {
            endpoint: "prices.example".to_string(),
            ..BoardConfig::default()
        };
        assert!(matches!(HttpPriceSource::new(&config), Err(BoardError::Config(_))));
    }

    #[test]
    fn fetches_and_decodes_prices() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"pax-gold":{"usd":2345.67},"kinesis-silver":{"usd":29.5}}"#,
        );
        let response = source_for(endpoint).fetch().expect("fetch");
        assert_eq!(response.gold, Some(Decimal::from_str("2345.67").unwrap()));
        assert_eq!(response.silver, Some(Decimal::from_str("29.5").unwrap()));

        let request_line = server.join().expect("server thread");
        assert!(request_line.starts_with("GET /api/v3/simple/price?ids=pax-gold%2Ckinesis-silver&vs_currencies=usd"));
    }

    #[test]
    fn server_error_is_status_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let result = source_for(endpoint).fetch();
        match result {
            Err(BoardError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {:?}", other),
        }
        server.join().expect("server thread");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let (endpoint, server) = serve_once("200 OK", "not json");
        assert!(matches!(source_for(endpoint).fetch(), Err(BoardError::SerdeJson(_))));
        server.join().expect("server thread");
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let source = source_for(format!("http://{}/price", addr));
        assert!(matches!(source.fetch(), Err(BoardError::Http(_))));
    }
}
