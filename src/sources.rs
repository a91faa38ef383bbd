//! Source implementations: the sequence-to-source bridges and the
//! file-backed source.
//!
//! [`IterSource`] and [`StreamSource`] turn any lazy sequence - synchronous
//! or asynchronous, finite or infinite - into a [`Source`], so the same
//! consumption strategies apply whether chunks come from a generator or from
//! an external resource like a file.

use std::iter::Fuse;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tokio_stream::StreamExt;

use crate::error::{Error, Result};
use crate::traits::Source;

/// Bridge from any synchronous lazy sequence to a source.
///
/// Chunks are emitted in the sequence's natural production order; the
/// underlying iterator is only advanced when a chunk is demanded, so
/// infinite sequences work (bound them with
/// [`take`](crate::traits::SourceExt::take)).
pub struct IterSource<I: Iterator> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Create a source from anything iterable.
    pub fn new<T>(sequence: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            // Fused so that exhaustion stays terminal
            iter: sequence.into_iter().fuse(),
        }
    }
}

#[async_trait]
impl<I> Source for IterSource<I>
where
    I: Iterator + Send,
    I::Item: Send + 'static,
{
    type Chunk = I::Item;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        Ok(self.iter.next())
    }
}

/// Bridge from any asynchronous sequence to a source.
///
/// Works with any [`Stream`], e.g. `futures::stream::iter` or a channel
/// receiver stream.
pub struct StreamSource<S> {
    stream: Pin<Box<S>>,
    done: bool,
}

impl<S: Stream> StreamSource<S> {
    /// Create a source from an async sequence.
    pub fn new(stream: S) -> Self {
        Self {
            stream: Box::pin(stream),
            done: false,
        }
    }
}

#[async_trait]
impl<S> Source for StreamSource<S>
where
    S: Stream + Send,
    S::Item: Send + 'static,
{
    type Chunk = S::Item;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        if self.done {
            return Ok(None);
        }
        match self.stream.next().await {
            Some(chunk) => Ok(Some(chunk)),
            None => {
                // Streams are not required to be fused; latch the end state
                self.done = true;
                Ok(None)
            }
        }
    }
}

/// A source that reads a file as a sequence of byte chunks.
///
/// Opening a missing or unreadable path fails with [`Error::Resource`]
/// before any chunk is emitted; there is no retry logic.
pub struct FileSource {
    reader: BufReader<File>,
    path: PathBuf,
    chunk_size: usize,
    done: bool,
}

impl FileSource {
    /// Default maximum chunk size in bytes.
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Open a file source with the default chunk size.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_chunk_size(path, Self::DEFAULT_CHUNK_SIZE).await
    }

    /// Open a file source that emits chunks of at most `chunk_size` bytes.
    pub async fn with_chunk_size<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|e| Error::resource(&path, e))?;
        tracing::debug!(path = %path.display(), chunk_size, "opened file source");

        Ok(Self {
            reader: BufReader::new(file),
            path,
            chunk_size: chunk_size.max(1),
            done: false,
        })
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Source for FileSource {
    type Chunk = Vec<u8>;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        if self.done {
            return Ok(None);
        }

        let mut buf = vec![0u8; self.chunk_size];
        let n = self
            .reader
            .read(&mut buf)
            .await
            .map_err(|e| Error::resource(&self.path, e))?;

        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        buf.truncate(n);
        Ok(Some(buf))
    }
}
