use std::collections::VecDeque;

use query_core::{Effect, Msg, QueryOutcome};
use query_engine::{
    EngineError, EngineEvent, EngineHandle, FailureKind, QueryError, QueryReply, QuerySettings,
};
use query_logging::query_info;

pub struct EffectRunner {
    engine: EngineHandle,
    /// Queries the engine refused; they finish as unreachable on the next poll.
    refused: VecDeque<Msg>,
}

impl EffectRunner {
    pub fn new(settings: QuerySettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
            refused: VecDeque::new(),
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostQuery { query_id, option } => {
                    query_info!("PostQuery query_id={} option={}", query_id, option.id());
                    if self.engine.enqueue(query_id, option.id()).is_err() {
                        self.refused.push_back(refused_query(query_id));
                    }
                }
            }
        }
    }

    /// Drains finished queries without blocking.
    pub fn poll(&mut self) -> Vec<Msg> {
        let mut finished: Vec<Msg> = self.refused.drain(..).collect();
        finished.extend(std::iter::from_fn(|| self.engine.try_recv()).map(map_event));
        finished
    }

    /// Blocks until the next query finishes.
    pub fn wait(&mut self) -> Option<Msg> {
        match self.refused.pop_front() {
            Some(msg) => Some(msg),
            None => self.engine.recv().map(map_event),
        }
    }
}

fn refused_query(query_id: query_engine::QueryId) -> Msg {
    Msg::QueryFinished {
        query_id,
        outcome: QueryOutcome::Unreachable,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QueryCompleted {
            query_id, result, ..
        } => Msg::QueryFinished {
            query_id,
            outcome: map_result(result),
        },
    }
}

fn map_result(result: Result<QueryReply, QueryError>) -> QueryOutcome {
    match result {
        Ok(reply) => QueryOutcome::Completed {
            message: reply.message,
        },
        Err(err) => match err.kind {
            FailureKind::HttpStatus(status) => QueryOutcome::Rejected { status },
            FailureKind::InvalidUrl | FailureKind::Network => QueryOutcome::Unreachable,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: FailureKind) -> Result<QueryReply, QueryError> {
        Err(QueryError {
            kind,
            message: String::new(),
        })
    }

    #[test]
    fn reply_becomes_completed_outcome() {
        let outcome = map_result(Ok(QueryReply {
            message: "done".to_string(),
        }));
        assert_eq!(
            outcome,
            QueryOutcome::Completed {
                message: "done".to_string()
            }
        );
    }

    #[test]
    fn non_200_statuses_are_rejected() {
        assert_eq!(
            map_result(failure(FailureKind::HttpStatus(500))),
            QueryOutcome::Rejected { status: 500 }
        );
        assert_eq!(
            map_result(failure(FailureKind::HttpStatus(204))),
            QueryOutcome::Rejected { status: 204 }
        );
    }

    #[test]
    fn reply_with_placeholder_still_completes() {
        let outcome = map_result(Ok(QueryReply {
            message: query_engine::MISSING_MESSAGE.to_string(),
        }));
        assert_eq!(
            outcome,
            QueryOutcome::Completed {
                message: query_engine::MISSING_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn refused_query_finishes_unreachable() {
        assert_eq!(
            refused_query(9),
            Msg::QueryFinished {
                query_id: 9,
                outcome: QueryOutcome::Unreachable,
            }
        );
    }

    #[test]
    fn transport_failures_are_unreachable() {
        assert_eq!(
            map_result(failure(FailureKind::Network)),
            QueryOutcome::Unreachable
        );
        assert_eq!(
            map_result(failure(FailureKind::InvalidUrl)),
            QueryOutcome::Unreachable
        );
    }

    #[test]
    fn completion_event_keeps_query_id() {
        let msg = map_event(EngineEvent::QueryCompleted {
            query_id: 3,
            option_id: "riesgos".to_string(),
            result: failure(FailureKind::Network),
        });
        assert_eq!(
            msg,
            Msg::QueryFinished {
                query_id: 3,
                outcome: QueryOutcome::Unreachable,
            }
        );
    }
}
