//! Source combinators constructed by [`SourceExt`](crate::traits::SourceExt).
//!
//! Each combinator is itself a [`Source`], so any consumption strategy
//! applies to the combined source exactly as it would to the original.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Source;

/// Source returned by [`SourceExt::map`](crate::traits::SourceExt::map).
pub struct Map<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

/// Source returned by [`SourceExt::filter`](crate::traits::SourceExt::filter).
pub struct Filter<S, F> {
    pub(crate) source: S,
    pub(crate) predicate: F,
}

/// Source returned by [`SourceExt::take`](crate::traits::SourceExt::take).
pub struct Take<S> {
    pub(crate) source: S,
    pub(crate) remaining: usize,
}

/// Source returned by [`SourceExt::chain`](crate::traits::SourceExt::chain).
pub struct Chain<S1, S2> {
    pub(crate) first: Option<S1>,
    pub(crate) second: S2,
}

#[async_trait]
impl<S, F, U> Source for Map<S, F>
where
    S: Source + Send,
    F: FnMut(S::Chunk) -> U + Send,
    U: Send + 'static,
{
    type Chunk = U;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        match self.source.next_chunk().await? {
            Some(chunk) => Ok(Some((self.f)(chunk))),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<S, F> Source for Filter<S, F>
where
    S: Source + Send,
    F: FnMut(&S::Chunk) -> bool + Send,
{
    type Chunk = S::Chunk;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        loop {
            match self.source.next_chunk().await? {
                Some(chunk) => {
                    if (self.predicate)(&chunk) {
                        return Ok(Some(chunk));
                    }
                    // Skip and demand the next chunk
                }
                None => return Ok(None),
            }
        }
    }
}

#[async_trait]
impl<S> Source for Take<S>
where
    S: Source + Send,
{
    type Chunk = S::Chunk;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        match self.source.next_chunk().await? {
            Some(chunk) => {
                self.remaining -= 1;
                Ok(Some(chunk))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<S1, S2> Source for Chain<S1, S2>
where
    S1: Source + Send,
    S2: Source<Chunk = S1::Chunk> + Send,
{
    type Chunk = S1::Chunk;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        if let Some(ref mut first) = self.first {
            match first.next_chunk().await? {
                Some(chunk) => return Ok(Some(chunk)),
                None => {
                    // First source exhausted, switch to the second
                    self.first = None;
                }
            }
        }
        self.second.next_chunk().await
    }
}
