use crate::{QueryId, QueryOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST to the endpoint named after `option`, with no body.
    PostQuery { query_id: QueryId, option: QueryOption },
}
