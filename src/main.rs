use anyhow::Result;
use clap::Parser;
use feedgen::cli::{Cli, Command};
use feedgen::feed;

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command() {
        Command::Sensors(args) => feed::sensors_to_files(args).await,
        Command::Stocks(args) => feed::stocks_to_files(args).await,
        Command::Publish(args) => feed::sensors_to_stream(args).await,
    }
}
