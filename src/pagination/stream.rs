//! Paginated-to-stream adapter
//!
//! A `PagedStream` owns one background worker running a single loop:
//! hand each item of the current page to the consumer through a one-slot
//! channel, wait until the consumer has taken the last one, then fetch the
//! next page with `since` moved to the page's watermark. At most one fetch is
//! in flight and at most one page is held in memory.
//!
//! The worker stops on exhaustion, on a fetch error (delivered to the
//! consumer as the final item), on cancellation, or when the consumer goes
//! away. Dropping the stream aborts the worker.

use super::types::{Page, PageFetcher, StreamState};
use crate::error::{Error, Result};
use crate::types::Params;
use futures::Stream;
use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Items are handed over one at a time
const HANDOFF_CAPACITY: usize = 1;

/// Stops a running stream from anywhere.
///
/// Cloneable and cheap; every clone controls the same stream.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx: Arc::new(tx) }, rx)
    }

    /// Ask the worker to stop at its next suspension point
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// How the worker finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Last page had no continuation
    Exhausted,
    /// A fetch failed and the error was handed to the consumer
    Failed,
    /// Stopped by a `CancelHandle`
    Cancelled,
    /// The consumer dropped its end
    Abandoned,
}

/// Why a suspension point was left early
enum Interrupt {
    Cancelled,
    Abandoned,
}

impl From<Interrupt> for Outcome {
    fn from(interrupt: Interrupt) -> Self {
        match interrupt {
            Interrupt::Cancelled => Outcome::Cancelled,
            Interrupt::Abandoned => Outcome::Abandoned,
        }
    }
}

/// Lazy, single-pass sequence of items spanning every page of a resource.
///
/// Yields `Ok(item)` in server order. A failed mid-stream fetch is yielded
/// once as `Err(_)`, after which the stream ends; a plain `None` means every
/// page was drained.
///
/// [`cancel`](Self::cancel) stops a worker that is still running: an item
/// already in the hand-off slot is delivered, then `Err(Error::Cancelled)`,
/// then `None`. Once the worker has finished on its own (last page drained
/// or a failure delivered) cancelling changes nothing and the stream ends
/// with `None` as before.
pub struct PagedStream<T> {
    rx: mpsc::Receiver<Result<T>>,
    worker: Option<JoinHandle<Outcome>>,
    cancel: CancelHandle,
    done: bool,
}

impl<T: Send + 'static> PagedStream<T> {
    /// Fetch the first page and start streaming.
    ///
    /// A failure of the first fetch is returned here rather than through the
    /// stream.
    pub async fn open<F>(fetcher: F, resource_id: Option<&str>, params: Params) -> Result<Self>
    where
        F: PageFetcher<T> + 'static,
    {
        let state = StreamState::new(fetcher, resource_id, params);
        let first = state.fetch().await?;
        debug!(
            resource = state.resource_id().unwrap_or("-"),
            items = first.len(),
            has_more = first.has_more(),
            cursor = first.cursor(),
            "opened paged stream"
        );
        Ok(Self::spawn(state, first))
    }

    /// Start streaming from an already fetched first page
    pub fn spawn<F>(state: StreamState<F>, first: Page<T>) -> Self
    where
        F: PageFetcher<T> + 'static,
    {
        let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
        let (cancel, cancel_rx) = CancelHandle::new();
        let worker = Worker {
            state,
            tx,
            cancel: cancel_rx,
        };
        let handle = tokio::spawn(worker.run(first));

        Self {
            rx,
            worker: Some(handle),
            cancel,
            done: false,
        }
    }
}

impl<T> PagedStream<T> {
    /// Next item, `None` once the stream has ended
    pub async fn next(&mut self) -> Option<Result<T>> {
        poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }

    /// Stop the stream; a running worker exits at its next suspension point
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Handle that can stop this stream from another task
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Whether the stream has yielded its final outcome
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<T> Stream for PagedStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        if let Some(item) = ready!(this.rx.poll_recv(cx)) {
            return Poll::Ready(Some(item));
        }

        // Channel closed: the worker has returned or is about to.
        let Some(worker) = this.worker.as_mut() else {
            this.done = true;
            return Poll::Ready(None);
        };
        let joined = ready!(Pin::new(worker).poll(cx));
        this.worker = None;
        this.done = true;

        match joined {
            Ok(Outcome::Cancelled) => Poll::Ready(Some(Err(Error::Cancelled))),
            Ok(Outcome::Exhausted | Outcome::Failed | Outcome::Abandoned) => Poll::Ready(None),
            Err(e) => {
                warn!(error = %e, "paged stream worker did not finish cleanly");
                Poll::Ready(Some(Err(Error::StreamClosed)))
            }
        }
    }
}

impl<T> Drop for PagedStream<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

impl<T> std::fmt::Debug for PagedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedStream")
            .field("done", &self.done)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// The background half of a `PagedStream`
struct Worker<T, F> {
    state: StreamState<F>,
    tx: mpsc::Sender<Result<T>>,
    cancel: watch::Receiver<bool>,
}

impl<T, F> Worker<T, F>
where
    T: Send + 'static,
    F: PageFetcher<T>,
{
    async fn run(mut self, first: Page<T>) -> Outcome {
        let outcome = self.drive(first).await;
        debug!(
            resource = self.state.resource_id().unwrap_or("-"),
            ?outcome,
            "paged stream finished"
        );
        outcome
    }

    async fn drive(&mut self, first: Page<T>) -> Outcome {
        let mut page = first;

        loop {
            let (items, has_more, cursor) = page.into_parts();

            for item in items {
                if let Err(interrupt) = self.hand_off(Ok(item)).await {
                    return interrupt.into();
                }
            }

            if !has_more {
                return Outcome::Exhausted;
            }

            // The watermark may only move once the consumer holds every item.
            if let Err(interrupt) = self.wait_drained().await {
                return interrupt.into();
            }

            if self.state.cursor() == Some(cursor) {
                warn!(
                    resource = self.state.resource_id().unwrap_or("-"),
                    cursor, "watermark did not advance, requesting the same page again"
                );
            }
            self.state.advance(cursor);

            page = match self.fetch().await {
                Ok(Ok(next)) => next,
                Ok(Err(e)) => {
                    warn!(
                        resource = self.state.resource_id().unwrap_or("-"),
                        since = cursor,
                        error = %e,
                        fetch_error = e.is_fetch_error(),
                        "page fetch failed, ending stream"
                    );
                    return match self.hand_off(Err(e)).await {
                        Ok(()) => Outcome::Failed,
                        Err(interrupt) => interrupt.into(),
                    };
                }
                Err(interrupt) => return interrupt.into(),
            };

            debug!(
                resource = self.state.resource_id().unwrap_or("-"),
                since = cursor,
                items = page.len(),
                has_more = page.has_more(),
                cursor = page.cursor(),
                "fetched page"
            );
        }
    }

    /// Block until the consumer takes `item`
    async fn hand_off(&mut self, item: Result<T>) -> std::result::Result<(), Interrupt> {
        tokio::select! {
            biased;
            () = cancelled(&mut self.cancel) => Err(Interrupt::Cancelled),
            sent = self.tx.send(item) => sent.map_err(|_| Interrupt::Abandoned),
        }
    }

    /// Block until the hand-off slot is empty again
    async fn wait_drained(&mut self) -> std::result::Result<(), Interrupt> {
        tokio::select! {
            biased;
            () = cancelled(&mut self.cancel) => Err(Interrupt::Cancelled),
            permit = self.tx.reserve() => permit.map(drop).map_err(|_| Interrupt::Abandoned),
        }
    }

    /// Fetch the next page unless the stream is stopped first
    async fn fetch(&mut self) -> std::result::Result<Result<Page<T>>, Interrupt> {
        tokio::select! {
            biased;
            () = cancelled(&mut self.cancel) => Err(Interrupt::Cancelled),
            () = self.tx.closed() => Err(Interrupt::Abandoned),
            page = self.state.fetch() => Ok(page),
        }
    }
}

/// Resolves once cancellation is requested or every handle is gone
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    // An error means the sender was dropped along with the stream.
    let _ = rx.wait_for(|cancelled| *cancelled).await;
}
