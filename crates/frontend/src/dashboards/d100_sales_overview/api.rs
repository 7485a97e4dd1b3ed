use crate::shared::api_utils::api_url;
use crate::shared::config::GENERIC_FETCH_ERROR;
use contracts::dashboards::d100_sales_overview::{
    ApiErrorBody, OverviewQuery, OverviewResponse, OVERVIEW_PATH,
};
use gloo_net::http::Request;
use thiserror::Error;

/// Failure of an overview request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the server's `error` field if present
    #[error("HTTP error {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// 2xx response whose body is not an overview
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to encode query: {0}")]
    Query(String),
}

impl FetchError {
    /// Build a server error from a non-2xx status and its raw body
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        FetchError::Server { status, message }
    }

    /// Text shown to the user: the server's own message verbatim, otherwise
    /// the generic fallback
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

/// Form-urlencode the query; absent bounds and products are omitted
pub fn encode_query(query: &OverviewQuery) -> Result<String, FetchError> {
    serde_qs::to_string(query).map_err(|e| FetchError::Query(e.to_string()))
}

/// Fetch the overview for the given filters
pub async fn fetch_overview(query: &OverviewQuery) -> Result<OverviewResponse, FetchError> {
    let url = api_url(OVERVIEW_PATH, &encode_query(query)?);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = FetchError::from_error_body(status, &body);
        log::warn!("Overview request failed: {} ({})", err, err.user_message());
        return Err(err);
    }

    response
        .json::<OverviewResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
