//! Pull-mode consumption: consumer-driven reads with explicit demand.
//!
//! Pull mode mirrors the readable/read discipline: `ready().await` signals
//! demand and suspends until chunks are buffered (or the source ends), then
//! `read()` drains the buffer synchronously until it reports
//! [`Pull::Pending`] or [`Pull::Exhausted`].

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::traits::Source;

/// Outcome of a single non-suspending [`read`](PullHandle::read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pull<T> {
    /// A chunk was buffered and is now consumed.
    Chunk(T),
    /// Nothing is buffered right now; more may arrive after further demand
    /// via [`ready`](PullHandle::ready).
    Pending,
    /// The source is fully drained. Terminal: every later read reports
    /// `Exhausted` again.
    Exhausted,
}

const DEFAULT_BUFFER: usize = 16;

/// A pull-mode handle over a source.
///
/// Created by [`SourceExt::into_pull`](crate::traits::SourceExt::into_pull),
/// which takes the source by value - the handle is the only remaining way to
/// drain it.
///
/// # Examples
///
/// ```rust
/// use wellspring::prelude::*;
///
/// # tokio_test::block_on(async {
/// let mut handle = IterSource::new(0..3).into_pull();
/// let mut out = Vec::new();
/// while handle.ready().await? {
///     while let Pull::Chunk(n) = handle.read()? {
///         out.push(n);
///     }
/// }
/// assert_eq!(out, vec![0, 1, 2]);
/// # Ok::<(), Error>(())
/// # }).unwrap();
/// ```
pub struct PullHandle<S: Source> {
    source: S,
    buffer: VecDeque<S::Chunk>,
    buffer_size: usize,
    done: bool,
    closed: bool,
}

impl<S: Source> PullHandle<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            buffer: VecDeque::new(),
            buffer_size: DEFAULT_BUFFER,
            done: false,
            closed: false,
        }
    }

    /// Set how many chunks each [`ready`](Self::ready) call buffers at most.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Signal demand: suspend until at least one chunk is buffered or the
    /// source is exhausted.
    ///
    /// Returns `false` once no chunk will ever be available again.
    pub async fn ready(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::misuse("ready() called on a closed pull handle"));
        }

        while !self.done && self.buffer.len() < self.buffer_size {
            match self.source.next_chunk().await? {
                Some(chunk) => self.buffer.push_back(chunk),
                None => self.done = true,
            }
        }
        tracing::trace!(
            buffered = self.buffer.len(),
            done = self.done,
            "pull buffer filled"
        );

        Ok(!self.buffer.is_empty())
    }

    /// Take the next buffered chunk without suspending.
    ///
    /// Reports [`Pull::Pending`] when the buffer is empty but the source may
    /// still produce, and [`Pull::Exhausted`] once it never will.
    pub fn read(&mut self) -> Result<Pull<S::Chunk>> {
        if self.closed {
            return Err(Error::misuse("read() called on a closed pull handle"));
        }

        if let Some(chunk) = self.buffer.pop_front() {
            return Ok(Pull::Chunk(chunk));
        }
        if self.done {
            Ok(Pull::Exhausted)
        } else {
            Ok(Pull::Pending)
        }
    }

    /// Pull the next chunk, suspending for demand as needed.
    ///
    /// `None` means the source is exhausted.
    pub async fn next(&mut self) -> Result<Option<S::Chunk>> {
        loop {
            match self.read()? {
                Pull::Chunk(chunk) => return Ok(Some(chunk)),
                Pull::Exhausted => return Ok(None),
                Pull::Pending => {
                    self.ready().await?;
                }
            }
        }
    }

    /// Stop consuming before exhaustion.
    ///
    /// Buffered chunks are discarded. Any later `ready` or `read` is a
    /// [`Error::Misuse`].
    pub fn close(&mut self) {
        self.closed = true;
        self.buffer.clear();
    }
}
