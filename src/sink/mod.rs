mod file;
mod stream;

pub use file::{resolve_path, FileSink};
pub use stream::StreamSink;

use async_trait::async_trait;

use crate::error::Error;
use crate::event::Record;

/// Destination for generated batches. Implementations consume the whole
/// batch or fail it; there is no partial-batch recovery.
#[async_trait]
pub trait Sink<R: Record> {
    async fn accept(&mut self, batch: &[R]) -> Result<(), Error>;
}
