//! Shared test helpers: an in-memory pricing stub and a tiny HTTP backend.

#![allow(dead_code)]

use async_trait::async_trait;
use collarboard::domain::entities::collar_request::CollarRequest;
use collarboard::domain::entities::collar_result::CollarResult;
use collarboard::domain::entities::premium_result::PremiumResult;
use collarboard::domain::error::DomainError;
use collarboard::domain::ports::pricing_service::PricingService;
use collarboard::domain::values::expiration_list::ExpirationList;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub fn aapl_request() -> CollarRequest {
    CollarRequest::new("AAPL", 100, 220.0, 180.0, 250.0, "2025-10-17")
}

pub fn aapl_result_json() -> Value {
    json!({
        "ticker": "AAPL",
        "net_premium": 5.20,
        "max_gain": 3005.20,
        "max_loss": -1994.80,
        "selected_put_strike": 180,
        "selected_call_strike": 250,
        "put_premium_paid": 2.10,
        "call_premium_received": 7.30,
        "breakeven_estimate": 217.90,
        "spot_price": 222.15,
        "spot_policy": "delayed",
        "payoff_prices": [150, 200, 250, 300],
        "payoff_values": [-2000, -2000, 3000, 3000]
    })
}

// ---------------------------------------------------------------------------
// In-memory service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Expirations(String),
    Collar(CollarRequest),
    Premium(CollarRequest, String),
}

pub struct StubPricingService {
    expirations: Mutex<Reply>,
    collar: Mutex<Reply>,
    premium: Mutex<Reply>,
    calls: Mutex<Vec<Call>>,
}

impl StubPricingService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            expirations: Mutex::new(Reply::Json(json!(["2025-10-17", "2025-11-21", "2025-12-19"]))),
            collar: Mutex::new(Reply::Json(aapl_result_json())),
            premium: Mutex::new(Reply::Json(json!({}))),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_expirations(&self, reply: Reply) {
        *self.expirations.lock().unwrap() = reply;
    }

    pub fn set_collar(&self, reply: Reply) {
        *self.collar.lock().unwrap() = reply;
    }

    pub fn set_premium(&self, reply: Reply) {
        *self.premium.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn premium_calls(&self) -> Vec<(CollarRequest, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Premium(req, key) => Some((req, key)),
                _ => None,
            })
            .collect()
    }

    fn reply(slot: &Mutex<Reply>) -> Result<Value, DomainError> {
        match slot.lock().unwrap().clone() {
            Reply::Json(v) => Ok(v),
            Reply::Status(status) => Err(DomainError::HttpStatus {
                status,
                body: "stub failure".into(),
            }),
        }
    }
}

#[async_trait]
impl PricingService for StubPricingService {
    async fn get_expirations(&self, ticker: &str) -> Result<ExpirationList, DomainError> {
        self.calls.lock().unwrap().push(Call::Expirations(ticker.to_string()));
        ExpirationList::from_json(&Self::reply(&self.expirations)?)
    }

    async fn calculate_collar(&self, request: &CollarRequest) -> Result<CollarResult, DomainError> {
        self.calls.lock().unwrap().push(Call::Collar(request.clone()));
        serde_json::from_value(Self::reply(&self.collar)?)
            .map_err(|e| DomainError::ShapeMismatch(e.to_string()))
    }

    async fn calculate_premium(
        &self,
        request: &CollarRequest,
        credential: &str,
    ) -> Result<PremiumResult, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Premium(request.clone(), credential.to_string()));
        Self::reply(&self.premium).map(PremiumResult::new)
    }
}

// ---------------------------------------------------------------------------
// HTTP stub backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as sent.
    pub target: String,
    /// Lower-cased header names.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub target: String,
    pub status: u16,
    pub body: String,
}

pub fn route(method: &'static str, target: &str, status: u16, body: impl Into<String>) -> Route {
    Route { method, target: target.to_string(), status, body: body.into() }
}

/// Serves canned responses keyed by method and exact target; anything else
/// gets a 404. Every request is recorded.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            while let Ok((mut sock, _)) = listener.accept().await {
                let Some(req) = read_request(&mut sock).await else {
                    continue;
                };
                let (status, body) = routes
                    .iter()
                    .find(|r| r.method == req.method && r.target == req.target)
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));
                recorded.lock().unwrap().push(req);
                let resp = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    if status < 400 { "OK" } else { "Error" },
                    body.len()
                );
                let _ = sock.write_all(resp.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });

        Self { base_url, requests }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }
}

async fn read_request(sock: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();
    let len: usize = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + len {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = buf.len().min(header_end + len);
    let body = String::from_utf8_lossy(&buf[header_end..end]).to_string();

    Some(RecordedRequest { method, target, headers, body })
}
