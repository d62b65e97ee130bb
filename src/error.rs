use std::path::PathBuf;

/// Errors produced while feeding records to a sink. Transport and I/O
/// failures stay distinguishable so callers can tell a rejected publish from
/// an unwritable directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrapper around [`std::io::Error`] with the path being operated on.
    #[error("I/O error [{path}]: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    /// The stream rejected a record after the client's own retries.
    #[error("transport error [{stream}]: {err}")]
    Transport {
        stream: String,
        #[source]
        err: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Missing or invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A record could not be encoded as JSON.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_render_their_context() {
        let err = Error::Io {
            path: PathBuf::from("/data/out.json"),
            err: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/out.json"));

        let err = Error::Transport {
            stream: "sensor-events".into(),
            err: "throughput exceeded".into(),
        };
        assert!(err.to_string().contains("sensor-events"));
    }
}
