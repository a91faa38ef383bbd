//! # Chunk sources and the strategies for draining them
//!
//! This crate models a readable data stream as a demand-driven **source** of
//! chunks and provides the three standard ways to consume one:
//!
//! - **Push mode**: the source drives the loop and a synchronous handler is
//!   invoked once per chunk ([`SourceExt::drain_push`](traits::SourceExt::drain_push))
//! - **Pull mode**: the consumer demands chunks explicitly and reads them
//!   without suspending ([`SourceExt::into_pull`](traits::SourceExt::into_pull))
//! - **Async iteration**: the source projected as a `Stream`, one suspension
//!   point per chunk ([`SourceExt::into_stream`](traits::SourceExt::into_stream))
//!
//! Any lazy sequence bridges into the same abstraction: a synchronous
//! iterator ([`IterSource`](sources::IterSource)), an async stream
//! ([`StreamSource`](sources::StreamSource)), or a file
//! ([`FileSource`](sources::FileSource)). Every strategy takes the source by
//! value, so a source is only ever drained by one strategy.
//!
//! ## Example
//!
//! ```rust
//! use wellspring::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = IterSource::new(0..=4).map(|n| n * 2);
//!     let mut sink = CollectSink::new();
//!     let chunks = sink.clone();
//!
//!     source.drain_into(&mut sink).await?;
//!     assert_eq!(chunks.into_chunks().await, vec![0, 2, 4, 6, 8]);
//!     Ok(())
//! }
//! ```

pub mod combinators;
pub mod error;
pub mod pull;
pub mod sinks;
pub mod sources;
pub mod stream;
pub mod traits;
pub mod util;

// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pull::{Pull, PullHandle};
    pub use crate::sinks::{CollectSink, CountSink, PrintSink, WriteSink};
    pub use crate::sources::{FileSource, IterSource, StreamSource};
    pub use crate::stream::SourceStream;
    pub use crate::traits::{Sink, Source, SourceExt};
}

// Re-export main error type
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
