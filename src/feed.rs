use std::time::Duration;

use anyhow::{Context, Result};
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::cli::{FileArgs, PublishArgs};
use crate::error::Error;
use crate::event::Record;
use crate::generator;
use crate::logging;
use crate::shutdown::{self, ShutdownSignal};
use crate::sink::{FileSink, Sink, StreamSink};

#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    /// Records per batch.
    pub count: usize,
    /// Pause between batches.
    pub interval: Duration,
}

/// Drive the feed: produce a batch, hand it to the sink, sleep, repeat. The
/// shutdown channel is read once per iteration, before generation starts, so
/// an in-flight batch always completes and a request arriving mid-sleep takes
/// effect after the sleep finishes. Sink failures are fatal.
pub async fn run<R, G, S>(
    config: FeedConfig,
    mut generate: G,
    sink: &mut S,
    shutdown: watch::Receiver<ShutdownSignal>,
) -> Result<(), Error>
where
    R: Record,
    G: FnMut() -> R,
    S: Sink<R> + ?Sized,
{
    logging::info(
        "feed.start",
        "Feed started",
        json!({
            "count": config.count,
            "interval_secs": config.interval.as_secs(),
        }),
    );

    loop {
        if *shutdown.borrow() != ShutdownSignal::None {
            break;
        }

        let started = Instant::now();
        let batch: Vec<R> = (0..config.count).map(|_| generate()).collect();
        sink.accept(&batch).await?;

        let elapsed = started.elapsed();
        if elapsed > config.interval {
            logging::warn(
                "feed.lagging",
                "Batch took longer than the configured interval",
                json!({
                    "elapsed_ms": elapsed.as_millis() as u64,
                    "interval_secs": config.interval.as_secs(),
                }),
            );
        }

        tokio::time::sleep(config.interval).await;
    }

    logging::info_simple("feed.stop", "Feed stopped");
    Ok(())
}

/// `sensors` subcommand: sensor readings appended to time-partitioned files.
pub async fn sensors_to_files(args: FileArgs) -> Result<()> {
    let mut sink = FileSink::new(&args.path, &args.prefix, &args.id_format, &args.suffix)?;
    let shutdown = shutdown::listen().context("failed to install signal handlers")?;
    let mut rng = StdRng::from_entropy();

    run(
        feed_config(args.count, args.wait),
        move || generator::sensor_reading(&mut rng),
        &mut sink,
        shutdown,
    )
    .await?;
    Ok(())
}

/// `stocks` subcommand: stock ticks appended to time-partitioned files.
pub async fn stocks_to_files(args: FileArgs) -> Result<()> {
    let mut sink = FileSink::new(&args.path, &args.prefix, &args.id_format, &args.suffix)?;
    let shutdown = shutdown::listen().context("failed to install signal handlers")?;
    let mut rng = StdRng::from_entropy();

    run(
        feed_config(args.count, args.wait),
        move || generator::stock_tick(&mut rng),
        &mut sink,
        shutdown,
    )
    .await?;
    Ok(())
}

/// `publish` subcommand: sensor readings to a Kinesis stream, partitioned by
/// sensor id. Credentials, region and retry policy belong to the client built
/// here at the process boundary, not to the sink.
pub async fn sensors_to_stream(args: PublishArgs) -> Result<()> {
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(args.region.clone()))
        .retry_config(RetryConfig::standard().with_max_attempts(10))
        .load()
        .await;
    let client = aws_sdk_kinesis::Client::new(&aws_config);

    let mut sink = StreamSink::new(client, &args.stream);
    let shutdown = shutdown::listen().context("failed to install signal handlers")?;
    let mut rng = StdRng::from_entropy();

    run(
        feed_config(args.count, args.wait),
        move || generator::sensor_reading(&mut rng),
        &mut sink,
        shutdown,
    )
    .await?;
    Ok(())
}

fn feed_config(count: usize, wait_secs: u64) -> FeedConfig {
    FeedConfig {
        count,
        interval: Duration::from_secs(wait_secs),
    }
}
