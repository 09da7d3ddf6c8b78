use kanban_domain::Board;
use kanban_persistence::BoardPersistence;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Ordered, fire-and-forget board saves.
///
/// Snapshots are pushed onto an unbounded channel and written by a single
/// worker task, one at a time and in the order they were queued. Each write
/// is a full overwrite, so this ordering is what keeps a stale snapshot from
/// landing after a newer one.
pub struct SaveQueue {
    save_tx: Option<mpsc::UnboundedSender<Arc<Board>>>,
    worker: Option<JoinHandle<()>>,
}

impl SaveQueue {
    /// Spawn the save worker on the current tokio runtime.
    pub fn spawn(persistence: BoardPersistence) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(persistence, rx));
        Self {
            save_tx: Some(tx),
            worker: Some(worker),
        }
    }

    pub fn queue(&self, board: Arc<Board>) {
        if let Some(ref tx) = self.save_tx {
            tracing::debug!("Queueing snapshot for async save");
            if let Err(e) = tx.send(board) {
                tracing::error!("Failed to queue save: channel closed: {:?}", e);
            }
        } else {
            tracing::debug!("Save queue closed - skipping save");
        }
    }

    pub fn is_open(&self) -> bool {
        self.save_tx.is_some()
    }

    /// Close the channel and wait until every queued snapshot is written.
    pub async fn close(&mut self) {
        self.save_tx = None;
        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.await {
                tracing::error!("Save worker terminated abnormally: {}", e);
            }
        }
    }
}

async fn run_worker(persistence: BoardPersistence, mut rx: mpsc::UnboundedReceiver<Arc<Board>>) {
    tracing::debug!("Save worker started");
    while let Some(board) = rx.recv().await {
        persistence.save(&board).await;
    }
    tracing::debug!("Save worker finished");
}
