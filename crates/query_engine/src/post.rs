use query_logging::{query_debug, query_warn};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::{EngineError, FailureKind, QueryError, QueryReply};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Shown in place of the result when a 200 reply carries no `message`.
pub const MISSING_MESSAGE: &str = "(no message)";

#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub base_url: Url,
}

impl QuerySettings {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

/// Parses a backend base address. Opaque urls such as `mailto:` are rejected
/// because the option id has to be appended as a path segment.
pub fn parse_base_url(raw: &str) -> Result<Url, QueryError> {
    let url = Url::parse(raw)
        .map_err(|err| QueryError::new(FailureKind::InvalidUrl, format!("`{raw}`: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(QueryError::new(
            FailureKind::InvalidUrl,
            format!("`{raw}` cannot carry a path"),
        ));
    }
    Ok(url)
}

/// Appends `option_id` as one path segment of `base`.
///
/// A trailing slash on the base is tolerated and any base path is kept, so
/// `http://host/api/` and `http://host/api` both resolve to `http://host/api/<id>`.
pub fn endpoint_url(base: &Url, option_id: &str) -> Result<Url, QueryError> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            QueryError::new(
                FailureKind::InvalidUrl,
                format!("base url {base} cannot carry a path"),
            )
        })?;
        segments.pop_if_empty().push(option_id);
    }
    Ok(url)
}

#[async_trait::async_trait]
pub trait QueryPoster: Send + Sync {
    /// Issues one POST with no body to the endpoint named `option_id`.
    async fn post(&self, option_id: &str) -> Result<QueryReply, QueryError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    settings: QuerySettings,
    client: reqwest::Client,
}

impl ReqwestPoster {
    /// No timeouts are configured; a hung backend keeps the query in flight.
    pub fn new(settings: QuerySettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    message: Option<serde_json::Value>,
}

#[async_trait::async_trait]
impl QueryPoster for ReqwestPoster {
    async fn post(&self, option_id: &str) -> Result<QueryReply, QueryError> {
        let url = endpoint_url(&self.settings.base_url, option_id)?;
        query_debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QueryError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(parse_reply(&body))
    }
}

/// A 200 always counts as completed; an unreadable body only loses the text.
fn parse_reply(body: &[u8]) -> QueryReply {
    let message = match serde_json::from_slice::<ReplyBody>(body) {
        Ok(ReplyBody {
            message: Some(serde_json::Value::String(text)),
        }) => text,
        Ok(ReplyBody {
            message: Some(serde_json::Value::Null) | None,
        }) => {
            query_warn!("Reply has no `message` field");
            MISSING_MESSAGE.to_string()
        }
        Ok(ReplyBody {
            message: Some(other),
        }) => other.to_string(),
        Err(err) => {
            query_warn!("Reply body is not JSON: {}", err);
            MISSING_MESSAGE.to_string()
        }
    };

    QueryReply { message }
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    QueryError::new(FailureKind::Network, err.to_string())
}
