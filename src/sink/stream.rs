use async_trait::async_trait;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::Client;

use crate::error::Error;
use crate::event::Record;
use crate::sink::Sink;

/// Publishes one message per record to a named Kinesis data stream, routed by
/// the record's partition key. Retry and backoff live in the SDK client the
/// caller configures; a failure surfacing here has already exhausted them.
#[derive(Debug, Clone)]
pub struct StreamSink {
    client: Client,
    stream: String,
}

impl StreamSink {
    pub fn new(client: Client, stream: impl Into<String>) -> Self {
        Self {
            client,
            stream: stream.into(),
        }
    }
}

#[async_trait]
impl<R: Record> Sink<R> for StreamSink {
    async fn accept(&mut self, batch: &[R]) -> Result<(), Error> {
        for record in batch {
            let payload = serde_json::to_vec(record)?;
            self.client
                .put_record()
                .stream_name(&self.stream)
                .data(Blob::new(payload))
                .partition_key(record.partition_key())
                .send()
                .await
                .map_err(|err| Error::Transport {
                    stream: self.stream.clone(),
                    err: Box::new(err),
                })?;
        }
        Ok(())
    }
}
