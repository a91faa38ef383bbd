//! Integration tests for the chunk source consumption strategies.

use tokio_stream::StreamExt;
use wellspring::prelude::*;

#[tokio::test]
async fn push_mode_delivers_generator_in_order() -> Result<()> {
    let mut records = Vec::new();
    IterSource::new(0..=30)
        .drain_push(|n| {
            records.push(n);
            Ok(())
        })
        .await?;

    assert_eq!(records.len(), 31);
    assert_eq!(records, (0..=30).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn async_iteration_delivers_generator_in_order() -> Result<()> {
    let mut stream = IterSource::new(0..=10).into_stream();

    let mut records = Vec::new();
    while let Some(chunk) = stream.next().await {
        records.push(chunk?);
    }

    assert_eq!(records.len(), 11);
    assert_eq!(records, (0..=10).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn pull_mode_drains_and_stays_exhausted() -> Result<()> {
    let mut handle = IterSource::new(0..5).into_pull().buffer_size(2);

    let mut records = Vec::new();
    while handle.ready().await? {
        while let Pull::Chunk(n) = handle.read()? {
            records.push(n);
        }
    }

    assert_eq!(records, vec![0, 1, 2, 3, 4]);
    assert_eq!(handle.read()?, Pull::Exhausted);
    assert_eq!(handle.read()?, Pull::Exhausted);
    Ok(())
}

#[tokio::test]
async fn bridging_preserves_sequence_order() -> Result<()> {
    let direct: Vec<i32> = (0..50).filter(|n| n % 3 == 0).collect();

    let mut sink = CollectSink::new();
    let chunks = sink.clone();
    IterSource::new((0..50).filter(|n| n % 3 == 0))
        .drain_into(&mut sink)
        .await?;

    assert_eq!(chunks.into_chunks().await, direct);
    Ok(())
}

#[tokio::test]
async fn async_sequence_bridges_like_a_sync_one() -> Result<()> {
    let mut stream = StreamSource::new(futures::stream::iter(0..=10)).into_stream();

    let mut records = Vec::new();
    while let Some(chunk) = stream.next().await {
        records.push(chunk?);
    }

    assert_eq!(records, (0..=10).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn every_strategy_yields_the_same_values() -> Result<()> {
    let expected: Vec<i64> = (0..=30).collect();

    let mut pushed = Vec::new();
    IterSource::new(0..=30i64)
        .drain_push(|n| {
            pushed.push(n);
            Ok(())
        })
        .await?;

    let mut pulled = Vec::new();
    let mut handle = IterSource::new(0..=30i64).into_pull();
    while let Some(n) = handle.next().await? {
        pulled.push(n);
    }

    let mut iterated = Vec::new();
    let mut stream = IterSource::new(0..=30i64).into_stream();
    while let Some(n) = stream.next().await {
        iterated.push(n?);
    }

    assert_eq!(pushed, expected);
    assert_eq!(pulled, expected);
    assert_eq!(iterated, expected);
    Ok(())
}

#[tokio::test]
async fn missing_file_surfaces_resource_error_before_any_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let result = FileSource::open(&missing).await;
    assert!(matches!(result, Err(Error::Resource { .. })));
}

#[tokio::test]
async fn file_source_roundtrips_through_push_mode() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    let content = b"sequence of bytes long enough to span several chunks";
    tokio::fs::write(&path, content).await.unwrap();

    let mut bytes = Vec::new();
    FileSource::with_chunk_size(&path, 8)
        .await?
        .drain_push(|chunk| {
            bytes.extend_from_slice(&chunk);
            Ok(())
        })
        .await?;

    assert_eq!(bytes, content);
    Ok(())
}

#[tokio::test]
async fn write_sink_emits_one_record_per_chunk() -> Result<()> {
    let mut sink = WriteSink::new(Vec::new());
    IterSource::new(0..3).drain_into(&mut sink).await?;

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out, "0\n1\n2\n");
    Ok(())
}

#[tokio::test]
async fn count_sink_sees_every_chunk() -> Result<()> {
    let mut sink = CountSink::new();
    let counter = sink.clone();

    IterSource::new(0..=30).drain_into(&mut sink).await?;

    assert_eq!(counter.count().await, 31);
    Ok(())
}

#[tokio::test]
async fn fn_source_drains_like_any_other() -> Result<()> {
    let mut current = 0;
    let source = wellspring::util::from_fn(move || {
        current += 1;
        let value = current;
        async move {
            if value <= 5 {
                Ok(Some(value))
            } else {
                Ok(None)
            }
        }
    });

    let mut records = Vec::new();
    source
        .drain_push(|n| {
            records.push(n);
            Ok(())
        })
        .await?;

    assert_eq!(records, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn sink_from_fn_receives_each_chunk_in_order() -> Result<()> {
    let mut records = Vec::new();
    {
        let mut sink = wellspring::util::sink_from_fn(|n: i32| {
            records.push(n);
            async { Ok(()) }
        });
        IterSource::new(0..=4).drain_into(&mut sink).await?;
    }

    assert_eq!(records, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn source_errors_propagate_through_push_mode() {
    let mut calls = 0;
    let source = wellspring::util::from_fn(move || {
        calls += 1;
        let call = calls;
        async move {
            if call < 3 {
                Ok(Some(call))
            } else {
                Err(Error::custom("producer failed"))
            }
        }
    });

    let mut delivered = Vec::new();
    let result = source
        .drain_push(|n| {
            delivered.push(n);
            Ok(())
        })
        .await;

    assert_eq!(delivered, vec![1, 2]);
    assert!(matches!(result, Err(Error::Custom(_))));
}
