use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aptwire_proto::{Catalog, Message};
use tokio::sync::Notify;

use crate::assembler::{decode_message, FrameAssembler, UnpackState};
use crate::config::UnpackerConfig;
use crate::error::{Result, UnpackError};

/// Unpacker shared between a producer that feeds bytes and a consumer that
/// awaits messages.
///
/// A pull with no complete frame buffered suspends until the next
/// [`feed`](Self::feed) or [`close`](Self::close). Dropping the pending
/// future cancels the pull without losing buffered bytes.
pub struct SharedUnpacker {
    inner: Mutex<Inner>,
    ready: Notify,
    catalog: Arc<Catalog>,
}

struct Inner {
    assembler: FrameAssembler,
    closed: bool,
}

impl SharedUnpacker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, UnpackerConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: UnpackerConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                assembler: FrameAssembler::with_capacity(config.initial_capacity),
                closed: false,
            }),
            ready: Notify::new(),
            catalog,
        }
    }

    /// Append bytes and wake waiting consumers. Bytes fed after
    /// [`close`](Self::close) are discarded.
    pub fn feed(&self, bytes: &[u8]) {
        {
            let mut inner = self.lock();
            if inner.closed {
                tracing::debug!(len = bytes.len(), "feed after close ignored");
                return;
            }
            inner.assembler.extend(bytes);
        }
        self.ready.notify_waiters();
    }

    /// End the stream. Frames already buffered are still delivered; after
    /// that every pull returns `Ok(None)`.
    pub fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_waiters();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Await the next message.
    pub async fn next_message(&self) -> Result<Option<Message>> {
        loop {
            // Registered before the buffer check so a feed in between is not missed.
            let notified = self.ready.notified();
            {
                let mut inner = self.lock();
                if let Some(frame) = inner.assembler.next_frame() {
                    drop(inner);
                    return decode_message(&self.catalog, &frame)
                        .map(Some)
                        .map_err(UnpackError::Decode);
                }
                if inner.closed {
                    return Ok(None);
                }
            }
            notified.await;
        }
    }

    /// Return a message if one is buffered, without waiting.
    pub fn try_next_message(&self) -> Result<Option<Message>> {
        let frame = self.lock().assembler.next_frame();
        match frame {
            Some(frame) => decode_message(&self.catalog, &frame)
                .map(Some)
                .map_err(UnpackError::Decode),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> UnpackState {
        self.lock().assembler.state()
    }

    pub fn buffered(&self) -> usize {
        self.lock().assembler.buffered()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
