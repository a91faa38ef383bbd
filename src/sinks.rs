//! Concrete sink implementations.
//!
//! Sinks are the injectable output side of a drain: [`PrintSink`] for the
//! demos, [`WriteSink`] for any `AsyncWrite` destination, and
//! [`CollectSink`]/[`CountSink`] for tests and aggregation.

use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex as TokioMutex;

use crate::error::Result;
use crate::traits::Sink;

/// A sink that prints chunks to stdout, one record per chunk.
pub struct PrintSink<T> {
    prefix: Option<String>,
    _phantom: PhantomData<T>,
}

impl<T> PrintSink<T> {
    /// Create a sink printing bare records to stdout.
    pub fn new() -> Self {
        Self {
            prefix: None,
            _phantom: PhantomData,
        }
    }

    /// Label every printed record with `prefix`.
    pub fn with_prefix(prefix: String) -> Self {
        Self {
            prefix: Some(prefix),
            _phantom: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Send + 'static + Display> Sink for PrintSink<T> {
    type Chunk = T;

    async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()> {
        match &self.prefix {
            Some(prefix) => println!("{}: {}", prefix, chunk),
            None => println!("{}", chunk),
        }
        Ok(())
    }
}

impl<T> Default for PrintSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sink that writes chunks to any async writer, one record per line.
///
/// This is the testable replacement for printing to the process-wide
/// standard output: inject a `Vec<u8>` in tests, `tokio::io::stdout()` or a
/// file in programs.
pub struct WriteSink<W, T> {
    writer: W,
    _phantom: PhantomData<T>,
}

impl<W: AsyncWrite + Unpin, T> WriteSink<W, T> {
    /// Create a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            _phantom: PhantomData,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W, T> Sink for WriteSink<W, T>
where
    W: AsyncWrite + Unpin + Send,
    T: Send + 'static + Display,
{
    type Chunk = T;

    async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()> {
        self.writer
            .write_all(format!("{}\n", chunk).as_bytes())
            .await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }
}

/// A sink that accumulates every delivered chunk in memory.
///
/// Clones share one backing vector, so a drain can own the sink while the
/// test keeps a handle to inspect what arrived.
pub struct CollectSink<T> {
    chunks: Arc<TokioMutex<Vec<T>>>,
}

impl<T: Send + 'static + Clone> CollectSink<T> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            chunks: Arc::new(TokioMutex::new(Vec::new())),
        }
    }

    /// Consume the handle and return everything delivered so far.
    pub async fn into_chunks(self) -> Vec<T> {
        self.chunks.lock().await.clone()
    }

    /// The shared backing storage, for inspection while a drain still owns
    /// a sink handle.
    pub fn chunks(&self) -> Arc<TokioMutex<Vec<T>>> {
        self.chunks.clone()
    }
}

#[async_trait]
impl<T: Send + 'static + Clone> Sink for CollectSink<T> {
    type Chunk = T;

    async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()> {
        let mut chunks = self.chunks.lock().await;
        chunks.push(chunk);
        Ok(())
    }
}

impl<T: Send + 'static + Clone> Default for CollectSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CollectSink<T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
        }
    }
}

/// A sink that discards chunks and only tallies how many were delivered.
pub struct CountSink<T> {
    count: Arc<TokioMutex<usize>>,
    _phantom: PhantomData<T>,
}

impl<T> CountSink<T> {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            count: Arc::new(TokioMutex::new(0)),
            _phantom: PhantomData,
        }
    }

    /// Number of chunks delivered so far. Clones share the tally.
    pub async fn count(&self) -> usize {
        *self.count.lock().await
    }
}

#[async_trait]
impl<T: Send + 'static> Sink for CountSink<T> {
    type Chunk = T;

    async fn deliver(&mut self, _chunk: Self::Chunk) -> Result<()> {
        let mut count = self.count.lock().await;
        *count += 1;
        Ok(())
    }
}

impl<T> Default for CountSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CountSink<T> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            _phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collect_sink_shares_chunks_across_clones() {
        let sink = CollectSink::new();
        let mut writer = sink.clone();

        writer.deliver(1).await.unwrap();
        writer.deliver(2).await.unwrap();

        assert_eq!(sink.into_chunks().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn collect_sink_backing_storage_tracks_deliveries() {
        let mut sink = CollectSink::new();
        let shared = sink.chunks();

        sink.deliver(1).await.unwrap();
        sink.deliver(2).await.unwrap();
        assert_eq!(*shared.lock().await, vec![1, 2]);

        sink.deliver(3).await.unwrap();
        assert_eq!(*shared.lock().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn count_sink_counts_deliveries() {
        let sink = CountSink::new();
        let mut writer = sink.clone();

        for word in ["a", "b", "c"] {
            writer.deliver(word).await.unwrap();
        }

        assert_eq!(sink.count().await, 3);
    }
}
