//! Fetch worker thread
//!
//! Runs suggestion fetches on a background thread so the UI never blocks.
//! The thread owns a current-thread tokio runtime; every request becomes its
//! own task, so a slow request does not hold back a later one and responses
//! may arrive out of order. Ordering is the receiver's job (see
//! `AutocompleteState::apply_response`).

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::SuggestionFetcher;
use super::{FetchRequest, FetchResponse};
use crate::error::AppError;

/// Handle to the worker: request sender, response receiver, and shutdown
///
/// Dropping the handle stops the worker thread.
pub struct FetchWorker {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl FetchWorker {
    /// Spawn the worker thread around `fetcher`
    pub fn spawn<F: SuggestionFetcher>(fetcher: F) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Runtime(e.to_string()))?;

        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let thread = std::thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || {
                runtime.block_on(worker_loop(
                    Arc::new(fetcher),
                    request_rx,
                    response_tx,
                    worker_cancel,
                ));
                log::debug!("Fetch worker thread shutting down");
            })?;

        Ok(Self {
            request_tx,
            response_rx,
            cancel,
            thread: Some(thread),
        })
    }

    /// Queue a request; silently dropped if the worker is gone
    pub fn send(&self, request: FetchRequest) {
        log::debug!(
            "Dispatching request {} ({:?})",
            request.request_id,
            request.query
        );
        if self.request_tx.send(request).is_err() {
            log::warn!("Fetch worker is not running; request dropped");
        }
    }

    /// Next finished response, if any
    pub fn try_recv(&self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// A handle with no thread behind it; the caller plays the worker
    #[cfg(test)]
    pub(crate) fn loopback() -> (Self, UnboundedReceiver<FetchRequest>, Sender<FetchResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let worker = Self {
            request_tx,
            response_rx,
            cancel: CancellationToken::new(),
            thread: None,
        };
        (worker, request_rx, response_tx)
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Receive requests until cancelled or the UI side hangs up
async fn worker_loop<F: SuggestionFetcher>(
    fetcher: Arc<F>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                let fetcher = Arc::clone(&fetcher);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = fetcher.fetch(&request.query).await;
                    if let Err(e) = &result {
                        log::warn!("Request {} failed: {}", request.request_id, e);
                    }
                    let response = FetchResponse {
                        request_id: request.request_id,
                        query: request.query,
                        result,
                    };
                    // UI gone means nobody cares about the answer
                    let _ = response_tx.send(response);
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
