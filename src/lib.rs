pub mod cli;
pub mod error;
pub mod event;
pub mod feed;
pub mod generator;
pub mod logging;
pub mod shutdown;
pub mod sink;

pub use error::Error;
