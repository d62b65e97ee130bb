use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Synthetic sensor and stock tick feed generator")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Append randomized sensor readings to time-partitioned files
    Sensors(FileArgs),
    /// Append randomized stock ticks to time-partitioned files
    Stocks(FileArgs),
    /// Publish randomized sensor readings to a Kinesis data stream
    Publish(PublishArgs),
}

#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Directory receiving the generated files
    #[arg(env = "DATA_PATH")]
    pub path: PathBuf,

    /// Prefix of the generated file names
    #[arg(short, long, default_value = "events")]
    pub prefix: String,

    /// strftime pattern for the time-based file id
    #[arg(long = "id-format", env = "FILEID_FORMAT", default_value = "%Y%m%d-%H")]
    pub id_format: String,

    /// Suffix of the generated file names
    #[arg(short, long, env = "FNAME_SUFFIX", default_value = ".json")]
    pub suffix: String,

    /// Records appended per batch
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// Seconds to wait between batches
    #[arg(short, long, env = "WAIT4GEN", default_value_t = 1)]
    pub wait: u64,
}

#[derive(Debug, Args, Clone)]
pub struct PublishArgs {
    /// Output data stream
    pub stream: String,

    /// AWS region for the Kinesis client
    #[arg(long, env = "AWS_REGION")]
    pub region: String,

    /// Records published per batch
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seconds to wait between batches
    #[arg(short, long, env = "WAIT4GEN", default_value_t = 1)]
    pub wait: u64,
}
