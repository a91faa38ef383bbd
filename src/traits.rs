//! Core traits for the chunk source system.
//!
//! A [`Source`] produces an ordered, finite-or-infinite sequence of chunks on
//! demand. [`SourceExt`] adds combinators and the three consumption
//! strategies: push-mode draining, pull-mode reading, and async iteration.
//! Every strategy takes the source by value, so exactly one strategy can ever
//! drain a given source.

use async_trait::async_trait;

use crate::combinators::{Chain, Filter, Map, Take};
use crate::error::Result;
use crate::pull::PullHandle;
use crate::stream::SourceStream;

/// A source produces chunks on demand.
///
/// Sources are demand-driven: a chunk is only produced when explicitly
/// requested, so the consumer controls the pace. Exhaustion is terminal -
/// implementations keep returning `None` once they have returned it.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use wellspring::error::Result;
/// use wellspring::traits::Source;
///
/// struct CounterSource {
///     current: u64,
///     max: u64,
/// }
///
/// #[async_trait]
/// impl Source for CounterSource {
///     type Chunk = u64;
///
///     async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
///         if self.current <= self.max {
///             let chunk = self.current;
///             self.current += 1;
///             Ok(Some(chunk))
///         } else {
///             Ok(None) // Signal exhaustion
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Source {
    /// The type of chunks this source produces
    type Chunk: Send + 'static;

    /// Produce the next chunk, or `None` once the source is exhausted.
    ///
    /// This method should be cheap to call repeatedly; a demand-driven
    /// consumer calls it exactly once per chunk it is ready to handle.
    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>>;
}

/// A sink receives the chunks drained from a source.
///
/// Sinks are the injectable output seam: the same drain runs against stdout,
/// a file, or an in-memory collector, which keeps consumption logic testable
/// without capturing process-wide standard output.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use wellspring::error::Result;
/// use wellspring::traits::Sink;
///
/// struct LogSink;
///
/// #[async_trait]
/// impl Sink for LogSink {
///     type Chunk = String;
///
///     async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()> {
///         println!("delivered: {}", chunk);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Sink {
    /// The type of chunks this sink accepts
    type Chunk: Send + 'static;

    /// Handle a single chunk.
    ///
    /// If this returns `Ok(())` the chunk counts as delivered.
    async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()>;

    /// Called once when the upstream source is exhausted.
    ///
    /// This allows sinks to flush buffered state.
    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Combinators and consumption strategies for sources.
///
/// The strategy methods ([`drain_push`], [`into_pull`], [`into_stream`],
/// [`drain_into`]) all consume `self`. A source handed to one strategy cannot
/// be handed to another; mixing strategies on one source is a compile error
/// rather than a runtime convention.
///
/// [`drain_push`]: SourceExt::drain_push
/// [`into_pull`]: SourceExt::into_pull
/// [`into_stream`]: SourceExt::into_stream
/// [`drain_into`]: SourceExt::drain_into
#[async_trait]
pub trait SourceExt: Source {
    /// Map chunks through a function
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Chunk) -> U + Send,
        U: Send + 'static,
    {
        Map { source: self, f }
    }

    /// Filter chunks with a predicate
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Chunk) -> bool + Send,
    {
        Filter {
            source: self,
            predicate,
        }
    }

    /// Take only the first `n` chunks
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take {
            source: self,
            remaining: n,
        }
    }

    /// Continue with another source once this one is exhausted
    fn chain<S2>(self, other: S2) -> Chain<Self, S2>
    where
        Self: Sized,
        S2: Source<Chunk = Self::Chunk>,
    {
        Chain {
            first: Some(self),
            second: other,
        }
    }

    /// Switch to pull mode: consumer-driven reads with explicit demand.
    ///
    /// See [`PullHandle`] for the ready/read discipline.
    fn into_pull(self) -> PullHandle<Self>
    where
        Self: Sized,
    {
        PullHandle::new(self)
    }

    /// Switch to async iteration: the source projected as a
    /// [`Stream`](futures_core::Stream) of `Result<Chunk>`.
    fn into_stream(self) -> SourceStream<Self>
    where
        Self: Sized + Send + 'static,
    {
        SourceStream::new(self)
    }

    /// Push mode: drive the source to exhaustion, invoking `handler` once
    /// per chunk, in production order.
    ///
    /// The handler is a synchronous closure. Suspending inside a push
    /// handler is disallowed, and the signature makes that a type error;
    /// callers that need to await per chunk should use pull mode or async
    /// iteration instead.
    async fn drain_push<F>(mut self, mut handler: F) -> Result<()>
    where
        Self: Sized + Send,
        F: FnMut(Self::Chunk) -> Result<()> + Send,
    {
        let mut delivered = 0u64;
        while let Some(chunk) = self.next_chunk().await? {
            handler(chunk)?;
            delivered += 1;
        }
        tracing::debug!(delivered, "push drain complete");
        Ok(())
    }

    /// Drain every chunk into `sink`, then call [`Sink::finish`].
    async fn drain_into<K>(mut self, sink: &mut K) -> Result<()>
    where
        Self: Sized + Send,
        K: Sink<Chunk = Self::Chunk> + Send,
    {
        while let Some(chunk) = self.next_chunk().await? {
            sink.deliver(chunk).await?;
        }
        sink.finish().await
    }
}

impl<S: Source> SourceExt for S {}
