//! Query engine: endpoint resolution, HTTP execution and result classification.
mod engine;
mod post;
mod types;

pub use engine::EngineHandle;
pub use post::{
    endpoint_url, parse_base_url, QueryPoster, QuerySettings, ReqwestPoster, DEFAULT_BASE_URL,
    MISSING_MESSAGE,
};
pub use types::{EngineError, EngineEvent, FailureKind, QueryError, QueryId, QueryReply};
