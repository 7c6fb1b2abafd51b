use std::sync::{mpsc, Arc};
use std::thread;

use query_logging::{query_error, query_info, query_warn};

use crate::post::{QueryPoster, QuerySettings, ReqwestPoster};
use crate::{EngineError, EngineEvent, FailureKind, QueryId};

enum EngineCommand {
    Post { query_id: QueryId, option_id: String },
}

/// Owns the IO thread. Dropping the handle shuts the thread down and abandons
/// any query still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: QuerySettings) -> Result<Self, EngineError> {
        query_info!("Query engine targeting {}", settings.base_url);
        let poster = ReqwestPoster::new(settings)?;
        Self::with_poster(Arc::new(poster))
    }

    pub fn with_poster(poster: Arc<dyn QueryPoster>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let poster = poster.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(poster.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Fails with [`EngineError::Stopped`] when the engine thread is gone; the
    /// query is then never answered.
    pub fn enqueue(
        &self,
        query_id: QueryId,
        option_id: impl Into<String>,
    ) -> Result<(), EngineError> {
        let command = EngineCommand::Post {
            query_id,
            option_id: option_id.into(),
        };
        self.cmd_tx.send(command).map_err(|_| {
            query_error!("Query {} dropped: engine thread has stopped", query_id);
            EngineError::Stopped
        })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    poster: &dyn QueryPoster,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Post {
            query_id,
            option_id,
        } => {
            query_info!("Query {} started option={}", query_id, option_id);
            let result = poster.post(&option_id).await;
            match &result {
                Ok(_) => query_info!("Query {} completed", query_id),
                Err(err) if matches!(err.kind, FailureKind::Network | FailureKind::InvalidUrl) => {
                    query_error!("Query {} could not reach the API: {}", query_id, err);
                }
                Err(err) => query_warn!("Query {} rejected: {}", query_id, err),
            }
            let _ = event_tx.send(EngineEvent::QueryCompleted {
                query_id,
                option_id,
                result,
            });
        }
    }
}
