//! Delta Exchange REST client.

use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::{DeltaEnvelope, DeltaOrder, DeltaTicker, NewOrder};
use super::settings::{DeltaCredentials, DeltaSettings, API_KEY_ENV};
use crate::adapter::outbound::http::read_json;
use crate::adapter::outbound::signing::hmac_sha256_hex;
use crate::error::{ExchangeError, Result};

const VENUE: &str = "delta";
const USER_AGENT: &str = "rust-rest-client";

/// Canonical string signed for a private request.
#[must_use]
pub fn signature_payload(
    method: &Method,
    timestamp: &str,
    path: &str,
    query_string: &str,
    payload: &str,
) -> String {
    format!("{}{timestamp}{path}{query_string}{payload}", method.as_str())
}

/// Encode `query` as `?k=v&...`, or an empty string when there is none.
#[must_use]
pub fn query_string(query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("?{encoded}")
}

/// Authentication headers for one private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub timestamp: String,
    pub signature: String,
}

impl SignedHeaders {
    /// Sign a request at `timestamp` (Unix seconds).
    pub fn sign(
        credentials: &DeltaCredentials,
        method: &Method,
        timestamp: i64,
        path: &str,
        query_string: &str,
        payload: &str,
    ) -> Result<Self> {
        let timestamp = timestamp.to_string();
        let data = signature_payload(method, &timestamp, path, query_string, payload);
        let signature = hmac_sha256_hex(&credentials.api_secret, &data)?;
        Ok(Self {
            api_key: credentials.api_key.clone(),
            timestamp,
            signature,
        })
    }

    fn apply(self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("api-key", self.api_key)
            .header("timestamp", self.timestamp)
            .header("signature", self.signature)
    }
}

/// HTTP client for the Delta Exchange v2 API.
pub struct DeltaClient {
    http: HttpClient,
    base_url: String,
    credentials: Option<DeltaCredentials>,
}

impl DeltaClient {
    #[must_use]
    pub fn new(settings: &DeltaSettings, credentials: Option<DeltaCredentials>) -> Self {
        Self {
            http: settings.http.build_client(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> Result<&DeltaCredentials> {
        self.credentials.as_ref().ok_or_else(|| {
            ExchangeError::MissingCredentials {
                venue: VENUE,
                env: API_KEY_ENV,
            }
            .into()
        })
    }

    /// Fetch all tickers. See [`tickers_from_envelope`] for empty replies.
    pub async fn tickers(&self) -> Result<Vec<DeltaTicker>> {
        let url = format!("{}/v2/tickers", self.base_url);
        info!(url = %url, "Fetching tickers");

        let mut request = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "application/json");
        if let Some(credentials) = &self.credentials {
            request = request.header("api-key", credentials.api_key.as_str());
        }

        let envelope: DeltaEnvelope<Vec<DeltaTicker>> =
            read_json(VENUE, request.send().await?).await?;
        let tickers = tickers_from_envelope(envelope);
        debug!(count = tickers.len(), "Fetched tickers");
        Ok(tickers)
    }

    /// List orders for a product filtered by state (e.g. `open`).
    pub async fn open_orders(&self, product_id: u64, state: &str) -> Result<Vec<DeltaOrder>> {
        let query = [
            ("product_id", product_id.to_string()),
            ("state", state.to_string()),
        ];
        self.signed(Method::GET, "/v2/orders", &query, String::new())
            .await
    }

    /// Submit an order. The signed payload is exactly the body sent.
    pub async fn place_order(&self, order: &NewOrder) -> Result<DeltaOrder> {
        let payload = serde_json::to_string(order)?;
        info!(
            product_id = order.product_id,
            side = %order.side,
            size = order.size,
            "Placing order"
        );
        self.signed(Method::POST, "/v2/orders", &[], payload).await
    }

    async fn signed<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: String,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let credentials = self.credentials()?;
        let query_string = query_string(query);
        let headers = SignedHeaders::sign(
            credentials,
            &method,
            chrono::Utc::now().timestamp(),
            path,
            &query_string,
            &payload,
        )?;

        let url = format!("{}{path}{query_string}", self.base_url);
        debug!(method = %method, url = %url, "Sending signed request");

        let request = self
            .http
            .request(method, &url)
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "application/json")
            .body(payload);
        let response = headers.apply(request).send().await?;

        let envelope: DeltaEnvelope<T> = read_json(VENUE, response).await?;
        unwrap_envelope(envelope)
    }
}

/// Rows of a ticker envelope. `success: false` and a missing `result` both
/// count as no rows.
pub(crate) fn tickers_from_envelope(envelope: DeltaEnvelope<Vec<DeltaTicker>>) -> Vec<DeltaTicker> {
    if envelope.success == Some(false) {
        warn!(error = ?envelope.error, "Ticker request unsuccessful");
        return Vec::new();
    }
    envelope.result.unwrap_or_default()
}

fn unwrap_envelope<T>(envelope: DeltaEnvelope<T>) -> Result<T> {
    if envelope.success == Some(false) {
        let detail = envelope
            .error
            .map_or_else(|| "unknown error".to_string(), |e| e.to_string());
        return Err(ExchangeError::Rejected {
            venue: VENUE,
            detail,
        }
        .into());
    }
    envelope.result.ok_or_else(|| {
        ExchangeError::MissingField {
            venue: VENUE,
            field: "result",
        }
        .into()
    })
}
