//! Realtime change feed backed by Postgres LISTEN/NOTIFY
//!
//! Insert and update triggers on the access tables call `pg_notify`
//! with a small JSON payload; one listener task parses payloads and
//! fans them out over a broadcast channel.

use sqlx::postgres::PgListener;
use sqlx::PgPool;
use std::time::Duration;
use tokio::sync::broadcast;

use petshop_core_db::change_feed::{ChangeFeed, TableChange};

/// The channel the database triggers notify on
pub const CHANNEL: &str = "access_changes";

const BROADCAST_CAPACITY: usize = 64;
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// [`ChangeFeed`] implementation over a Postgres listener connection
///
/// Dropping the feed stops the listener task; outstanding receivers
/// then observe a closed channel.
pub struct PgChangeFeed {
    tx: broadcast::Sender<TableChange>,
    task: tokio::task::JoinHandle<()>,
}

impl PgChangeFeed {
    /// Start listening on [`CHANNEL`] using a connection from `pool`
    pub async fn connect(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let mut listener = PgListener::connect_with(pool).await?;
        listener.listen(CHANNEL).await?;

        let (tx, _rx) = broadcast::channel(BROADCAST_CAPACITY);
        let fanout = tx.clone();
        let task = tokio::spawn(async move {
            loop {
                match listener.recv().await {
                    Ok(notification) => {
                        match serde_json::from_str::<TableChange>(notification.payload()) {
                            Ok(change) => {
                                // No receivers is fine; events are
                                // recomputed from scratch anyway
                                let _ = fanout.send(change);
                            }
                            Err(err) => tracing::warn!(
                                payload = notification.payload(),
                                error = %err,
                                "unparseable change notification dropped"
                            ),
                        }
                    }
                    Err(err) => {
                        // recv re-establishes the connection itself;
                        // back off so a dead database does not spin
                        tracing::warn!(error = %err, "change listener connection lost");
                        tokio::time::sleep(RECONNECT_DELAY).await;
                    }
                }
            }
        });

        Ok(Self { tx, task })
    }
}

impl ChangeFeed for PgChangeFeed {
    fn subscribe(&self) -> broadcast::Receiver<TableChange> {
        self.tx.subscribe()
    }
}

impl Drop for PgChangeFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}
