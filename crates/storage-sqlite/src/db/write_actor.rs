use std::any::Any;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use costmanager_core::errors::{DatabaseError, Error, Result};

use super::DbPool;
use crate::errors::StorageError;

type BoxedReply = Box<dyn Any + Send + 'static>;
type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) -> Result<BoxedReply> + Send + 'static>;

/// Handle for submitting write jobs to the single-writer actor.
///
/// The actor owns one dedicated connection and applies jobs serially, so
/// concurrent writers never contend on the SQLite write lock.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(WriteJob, oneshot::Sender<Result<BoxedReply>>)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection inside an immediate transaction
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + Any + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let erased: WriteJob = Box::new(move |conn| job(conn).map(|v| Box::new(v) as BoxedReply));

        self.tx.send((erased, reply_tx)).await.map_err(|_| {
            Error::Database(DatabaseError::TransactionFailed(
                "writer actor is not running".to_string(),
            ))
        })?;

        let result = reply_rx.await.map_err(|_| {
            Error::Database(DatabaseError::TransactionFailed(
                "writer actor dropped the reply".to_string(),
            ))
        })?;

        // The reply was boxed from a T by the closure above.
        result.map(|boxed| {
            *boxed
                .downcast::<T>()
                .expect("write job reply had an unexpected type")
        })
    }
}

/// Spawns the background task that owns one connection from the pool and
/// processes write jobs serially. The actor terminates once every
/// `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(WriteJob, oneshot::Sender<Result<BoxedReply>>)>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(Error::from);

            // Receiver may have been dropped if the request was cancelled.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
