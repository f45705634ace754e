use log::error;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

use super::{JsonCollection, WireRecord};
use crate::errors::StorageError;
use glampsite_core::errors::{Error, Result};

// A job receives the freshly loaded collection and may mutate it. Its
// return value is type-erased so one channel serves every job.
type Job<T> = Box<dyn FnOnce(&mut Vec<T>) -> Result<Box<dyn Any + Send>> + Send + 'static>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send>>>;

/// Handle for sending jobs to a collection's writer actor.
pub struct WriteHandle<T> {
    tx: mpsc::Sender<(Job<T>, Reply)>,
}

impl<T> Clone for WriteHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send + 'static> WriteHandle<T> {
    /// Runs `job` against the current contents of the collection.
    ///
    /// Jobs run one at a time in submission order. The collection is
    /// reloaded before each job and written back only when the job succeeds,
    /// so a failed job leaves the file untouched.
    pub async fn exec<F, R>(&self, job: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |records| job(records).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| Error::from(StorageError::WriterStopped))?;

        let boxed = ret_rx
            .await
            .map_err(|_| Error::from(StorageError::WriterStopped))??;

        boxed
            .downcast::<R>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("Writer returned an unexpected result type".to_string()))
    }
}

/// Spawns a background Tokio task that is the single writer of `collection`.
///
/// Every id assignment and replace-or-append happens inside this task, so
/// concurrent creations against the same collection cannot compute the same
/// next id.
pub fn spawn_writer<W: WireRecord>(collection: JsonCollection<W>) -> WriteHandle<W::Domain> {
    // The channel is bounded; 1024 is an arbitrary size.
    let (tx, mut rx) = mpsc::channel::<(Job<W::Domain>, Reply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = collection.load().and_then(|mut records| {
                let value = job(&mut records)?;
                collection.persist(&records)?;
                Ok(value)
            });

            if let Err(e) = &result {
                error!("Write to {} failed: {}", collection.path().display(), e);
            }

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        // All handles dropped: the actor terminates.
    });

    WriteHandle { tx }
}
