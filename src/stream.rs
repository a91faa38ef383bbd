//! Async sequential iteration over a source.
//!
//! [`SourceStream`] projects a source as a [`Stream`], so the caller can use
//! the familiar `while let Some(chunk) = stream.next().await` loop. Each
//! iteration step suspends until the next chunk is available; iteration
//! terminates normally on exhaustion, or after yielding an error.

use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::error::Result;
use crate::traits::Source;

type PullFuture<S> =
    Pin<Box<dyn Future<Output = (S, Result<Option<<S as Source>::Chunk>>)> + Send>>;

enum State<S: Source> {
    Idle(S),
    Pulling(PullFuture<S>),
    Done,
}

/// A source projected as a `Stream` of `Result<Chunk>`.
///
/// Created by
/// [`SourceExt::into_stream`](crate::traits::SourceExt::into_stream). The
/// source moves into the stream, so no other strategy can touch it while
/// iteration runs.
pub struct SourceStream<S: Source> {
    state: State<S>,
}

impl<S> SourceStream<S>
where
    S: Source + Send + 'static,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            state: State::Idle(source),
        }
    }
}

// The source is only ever moved whole between states, never pinned through.
impl<S: Source> Unpin for SourceStream<S> {}

impl<S> Stream for SourceStream<S>
where
    S: Source + Send + 'static,
{
    type Item = Result<S::Chunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match mem::replace(&mut this.state, State::Done) {
                State::Idle(mut source) => {
                    this.state = State::Pulling(Box::pin(async move {
                        let result = source.next_chunk().await;
                        (source, result)
                    }));
                }
                State::Pulling(mut fut) => match fut.as_mut().poll(cx) {
                    Poll::Ready((source, Ok(Some(chunk)))) => {
                        this.state = State::Idle(source);
                        return Poll::Ready(Some(Ok(chunk)));
                    }
                    Poll::Ready((_, Ok(None))) => return Poll::Ready(None),
                    Poll::Ready((_, Err(e))) => return Poll::Ready(Some(Err(e))),
                    Poll::Pending => {
                        this.state = State::Pulling(fut);
                        return Poll::Pending;
                    }
                },
                State::Done => return Poll::Ready(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio_stream::StreamExt;

    use crate::error::{Error, Result};
    use crate::sources::IterSource;
    use crate::traits::SourceExt;
    use crate::util::from_fn;

    #[tokio::test]
    async fn iterates_all_chunks_in_order() {
        let mut stream = IterSource::new(0..=10).into_stream();

        let mut out = Vec::new();
        while let Some(chunk) = stream.next().await {
            out.push(chunk.unwrap());
        }

        assert_eq!(out, (0..=10).collect::<Vec<_>>());
        assert_eq!(out.len(), 11);
    }

    #[tokio::test]
    async fn terminates_after_yielding_an_error() {
        let mut calls = 0;
        let source = from_fn(move || {
            calls += 1;
            let call = calls;
            async move {
                match call {
                    1 => Ok(Some(1)),
                    _ => Err(Error::custom("generator failed")),
                }
            }
        });

        let mut stream = source.into_stream();
        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert!(matches!(stream.next().await, Some(Err(_))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn empty_source_ends_immediately() -> Result<()> {
        let mut stream = IterSource::new(std::iter::empty::<i32>()).into_stream();
        assert!(stream.next().await.is_none());
        Ok(())
    }
}
