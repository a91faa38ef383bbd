//! Function adapters for building sources and sinks from closures.

use std::future::Future;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{Sink, Source};

/// Create a source from a producer function.
///
/// The function is invoked once per demanded chunk; returning `Ok(None)`
/// signals exhaustion (and the function should keep returning it afterward).
pub fn from_fn<F, Fut, T>(f: F) -> FnSource<F, Fut, T>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<Option<T>>> + Send,
    T: Send + 'static,
{
    FnSource {
        f,
        _phantom: std::marker::PhantomData,
    }
}

/// A source whose chunks come from a closure.
pub struct FnSource<F, Fut, T>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<Option<T>>> + Send,
    T: Send + 'static,
{
    f: F,
    _phantom: std::marker::PhantomData<(Fut, T)>,
}

#[async_trait]
impl<F, Fut, T> Source for FnSource<F, Fut, T>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<Option<T>>> + Send,
    T: Send + 'static,
{
    type Chunk = T;

    async fn next_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        (self.f)().await
    }
}

/// Create a sink from a delivery function.
///
/// Every drained chunk is handed to `f`; handy for ad-hoc sinks in tests
/// and demos without writing a [`Sink`] impl.
pub fn sink_from_fn<F, Fut, T>(f: F) -> FnSink<F, Fut, T>
where
    F: FnMut(T) -> Fut + Send,
    Fut: Future<Output = Result<()>> + Send,
    T: Send + 'static,
{
    FnSink {
        f,
        _phantom: std::marker::PhantomData,
    }
}

/// A sink whose delivery logic is a closure.
pub struct FnSink<F, Fut, T>
where
    F: FnMut(T) -> Fut + Send,
    Fut: Future<Output = Result<()>> + Send,
    T: Send + 'static,
{
    f: F,
    _phantom: std::marker::PhantomData<(Fut, T)>,
}

#[async_trait]
impl<F, Fut, T> Sink for FnSink<F, Fut, T>
where
    F: FnMut(T) -> Fut + Send,
    Fut: Future<Output = Result<()>> + Send,
    T: Send + 'static,
{
    type Chunk = T;

    async fn deliver(&mut self, chunk: Self::Chunk) -> Result<()> {
        (self.f)(chunk).await
    }
}
