use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::Error;
use crate::event::Record;
use crate::sink::Sink;

/// Appends batches as newline-delimited JSON to a time-partitioned file. The
/// destination path is recomputed per batch, so a changing file id rotates
/// output naturally (e.g. one file per hour).
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    prefix: String,
    pattern: String,
    suffix: String,
}

impl FileSink {
    /// Build a sink writing `dir/{prefix}_{pattern}{suffix}`. The strftime
    /// pattern is validated eagerly so a bad one fails before the first batch.
    pub fn new(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        pattern: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, Error> {
        let sink = Self {
            dir: dir.into(),
            prefix: prefix.into(),
            pattern: pattern.into(),
            suffix: suffix.into(),
        };
        // Probe with the current clock; validity does not depend on the value.
        resolve_path(
            &sink.dir,
            &sink.prefix,
            &sink.pattern,
            &sink.suffix,
            Local::now().naive_local(),
        )?;
        Ok(sink)
    }
}

#[async_trait]
impl<R: Record> Sink<R> for FileSink {
    async fn accept(&mut self, batch: &[R]) -> Result<(), Error> {
        let path = resolve_path(
            &self.dir,
            &self.prefix,
            &self.pattern,
            &self.suffix,
            Local::now().naive_local(),
        )?;

        let file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await
            .map_err(|err| Error::Io {
                path: path.clone(),
                err,
            })?;
        let mut writer = BufWriter::new(file);

        for record in batch {
            let mut line = serde_json::to_vec(record)?;
            line.push(b'\n');
            writer.write_all(&line).await.map_err(|err| Error::Io {
                path: path.clone(),
                err,
            })?;
        }

        writer.flush().await.map_err(|err| Error::Io { path, err })
    }
}

/// Resolve the destination path for a batch generated at `now`. Pure so the
/// naming scheme is testable without touching the filesystem.
pub fn resolve_path(
    dir: &Path,
    prefix: &str,
    pattern: &str,
    suffix: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, Error> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::Config(format!(
            "invalid time format pattern {pattern:?}"
        )));
    }

    let file_id = now.format_with_items(items.into_iter()).to_string();
    Ok(dir.join(format!("{prefix}_{file_id}{suffix}")))
}
