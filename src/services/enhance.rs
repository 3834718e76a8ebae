//! Enhancement worker: runs the AI collaborator off the interactive thread.
//!
//! DESIGN
//! ======
//! One request at a time. `start` spawns the call on the tokio runtime and
//! keeps only the receiving half of a oneshot channel; the spawned task never
//! sees the graph. The owner collects the result with `poll` (from an event
//! loop tick) or `wait` (from async code). There is no cancel: dropping the
//! worker discards the result when it arrives.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{info, warn};

use crate::llm::types::{Enhancer, LlmError};

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("please enter some text to enhance")]
    InputRequired,
    #[error("an enhancement is already in progress")]
    Busy,
    #[error("the enhancement worker stopped before replying")]
    WorkerDropped,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

type Reply = Result<String, LlmError>;

pub struct EnhanceWorker {
    enhancer: Arc<dyn Enhancer>,
    pending: Option<oneshot::Receiver<Reply>>,
}

impl EnhanceWorker {
    #[must_use]
    pub fn new(enhancer: Arc<dyn Enhancer>) -> Self {
        Self { enhancer, pending: None }
    }

    /// True while a request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Send `raw_text`, unmodified, to the collaborator in the background.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`EnhanceError::InputRequired`] for blank text, [`EnhanceError::Busy`]
    /// while a previous request is outstanding.
    pub fn start(&mut self, raw_text: &str) -> Result<(), EnhanceError> {
        if raw_text.trim().is_empty() {
            return Err(EnhanceError::InputRequired);
        }
        if self.is_busy() {
            return Err(EnhanceError::Busy);
        }

        let (tx, rx) = oneshot::channel();
        let enhancer = Arc::clone(&self.enhancer);
        let text = raw_text.to_owned();
        info!(model = enhancer.model(), input_len = text.len(), "enhance: started");

        tokio::spawn(async move {
            let reply = enhancer.enhance(&text).await;
            if tx.send(reply).is_err() {
                warn!("enhance: reply arrived after the editor went away");
            }
        });
        self.pending = Some(rx);
        Ok(())
    }

    /// Collect a finished result without blocking. `None` while idle or still running.
    pub fn poll(&mut self) -> Option<Result<String, EnhanceError>> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Err(TryRecvError::Empty) => return None,
            Ok(reply) => reply.map_err(EnhanceError::from),
            Err(TryRecvError::Closed) => Err(EnhanceError::WorkerDropped),
        };
        self.pending = None;
        Some(log_outcome(outcome))
    }

    /// Wait for the outstanding request. `None` when nothing is outstanding.
    pub async fn wait(&mut self) -> Option<Result<String, EnhanceError>> {
        let rx = self.pending.take()?;
        let outcome = match rx.await {
            Ok(reply) => reply.map_err(EnhanceError::from),
            Err(_) => Err(EnhanceError::WorkerDropped),
        };
        Some(log_outcome(outcome))
    }
}

fn log_outcome(outcome: Result<String, EnhanceError>) -> Result<String, EnhanceError> {
    match &outcome {
        Ok(text) => info!(output_len = text.len(), "enhance: complete"),
        Err(EnhanceError::Llm(e)) => warn!(error = %e, retryable = e.retryable(), "enhance: failed"),
        Err(e) => warn!(error = %e, "enhance: failed"),
    }
    outcome
}

#[cfg(test)]
#[path = "enhance_test.rs"]
mod tests;
