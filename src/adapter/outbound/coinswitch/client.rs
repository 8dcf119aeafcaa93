//! CoinSwitch REST client.

use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info};

use super::settings::{CoinswitchCredentials, CoinswitchSettings};
use crate::adapter::outbound::http::read_json;
use crate::error::Result;

const VENUE: &str = "coinswitch";

/// All-pairs futures ticker endpoint.
pub const TICKER_ENDPOINT: &str = "/trade/api/v2/futures/all-pairs/ticker";

/// Path and query exactly as signed.
///
/// GET parameters are form-encoded and appended with `?`, or `&` when the
/// endpoint already carries a query. Other methods sign the bare endpoint.
#[must_use]
pub fn endpoint_with_params(method: &Method, endpoint: &str, params: &[(&str, String)]) -> String {
    if *method != Method::GET || params.is_empty() {
        return endpoint.to_string();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{encoded}")
}

/// Canonical string signed for a request.
#[must_use]
pub fn signature_message(method: &Method, endpoint_with_params: &str, epoch_ms: &str) -> String {
    format!("{}{endpoint_with_params}{epoch_ms}", method.as_str())
}

/// `X-AUTH-*` headers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub signature: String,
    pub api_key: String,
    pub epoch: String,
}

impl AuthHeaders {
    /// Sign `endpoint_with_params` at `epoch_ms` (Unix milliseconds).
    #[must_use]
    pub fn sign(
        credentials: &CoinswitchCredentials,
        method: &Method,
        endpoint_with_params: &str,
        epoch_ms: i64,
    ) -> Self {
        let epoch = epoch_ms.to_string();
        let message = signature_message(method, endpoint_with_params, &epoch);
        Self {
            signature: credentials.signer.sign_hex(&message),
            api_key: credentials.api_key.clone(),
            epoch,
        }
    }

    fn apply(self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Content-Type", "application/json")
            .header("X-AUTH-SIGNATURE", self.signature)
            .header("X-AUTH-APIKEY", self.api_key)
            .header("X-AUTH-EPOCH", self.epoch)
    }
}

/// HTTP client for the CoinSwitch trade API.
pub struct CoinswitchClient {
    http: HttpClient,
    base_url: String,
    credentials: CoinswitchCredentials,
}

impl CoinswitchClient {
    #[must_use]
    pub fn new(settings: &CoinswitchSettings, credentials: CoinswitchCredentials) -> Self {
        Self {
            http: settings.http.build_client(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Fetch the futures ticker for every pair on `exchange`.
    ///
    /// The document is returned as-is; see
    /// [`build_entries`](super::build_entries) for flattening.
    pub async fn all_pairs_ticker(&self, exchange: &str) -> Result<Value> {
        let params = [("exchange", exchange.to_string())];
        let path = endpoint_with_params(&Method::GET, TICKER_ENDPOINT, &params);
        let headers = AuthHeaders::sign(
            &self.credentials,
            &Method::GET,
            &path,
            chrono::Utc::now().timestamp_millis(),
        );

        let url = format!("{}{path}", self.base_url);
        info!(url = %url, "Fetching all-pairs ticker");

        let response = headers.apply(self.http.get(&url)).send().await?;
        let document: Value = read_json(VENUE, response).await?;
        debug!(%document, "Response JSON");
        Ok(document)
    }
}
