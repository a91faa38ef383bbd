//! Bridges generator sequences into sources and drains them with every
//! strategy: push, pull, and async iteration.

use tokio_stream::StreamExt;
use wellspring::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // A bridged synchronous generator, consumed in push mode.
    println!("=== Generator, push mode ===");
    IterSource::new(0..=30)
        .drain_push(|n| {
            println!("{}", n);
            Ok(())
        })
        .await?;

    // The same generator, consumed in pull mode.
    println!("=== Generator, pull mode ===");
    let mut handle = IterSource::new(0..=30).into_pull();
    while handle.ready().await? {
        while let Pull::Chunk(n) = handle.read()? {
            println!("{}", n);
        }
    }

    // The same generator, consumed via async iteration.
    println!("=== Generator, async iteration ===");
    let mut stream = IterSource::new(0..=30).into_stream();
    while let Some(n) = stream.next().await {
        println!("{}", n?);
    }

    // An async sequence needs no extra bridging step beyond StreamSource.
    println!("=== Async sequence, async iteration ===");
    let mut stream = StreamSource::new(futures::stream::iter(0..=10)).into_stream();
    while let Some(n) = stream.next().await {
        println!("{}", n?);
    }

    // The injectable sink variant of push-style draining.
    println!("=== Generator, sink delivery ===");
    let mut sink = PrintSink::with_prefix("chunk".to_string());
    IterSource::new(0..=10).drain_into(&mut sink).await?;

    Ok(())
}
