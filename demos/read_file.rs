//! Reads a file with each of the three consumption strategies.
//!
//! Pass a path as the first argument; defaults to this crate's Cargo.toml.

use tokio_stream::StreamExt;
use wellspring::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    // Push mode: the adapter drives the loop, the handler just receives
    // chunks. Least control over pacing.
    println!("=== Push mode ===");
    FileSource::open(&path)
        .await?
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .drain_push(|text| {
            println!("{}", text);
            Ok(())
        })
        .await?;

    // Pull mode: chunks are only taken when the consumer asks. ready()
    // registers demand, read() drains what is buffered.
    println!("=== Pull mode ===");
    let mut handle = FileSource::open(&path).await?.into_pull();
    while handle.ready().await? {
        while let Pull::Chunk(bytes) = handle.read()? {
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }

    // Async iteration: one suspension point per chunk.
    println!("=== Async iteration ===");
    let mut stream = FileSource::open(&path).await?.into_stream();
    while let Some(chunk) = stream.next().await {
        println!("{}", String::from_utf8_lossy(&chunk?));
    }

    Ok(())
}
