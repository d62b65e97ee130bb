//! Process-boundary adapter between POSIX signals and the run loop. The loop
//! never touches signal handling; it only reads the watch channel once per
//! iteration.

use std::io;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;

use crate::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutdownSignal {
    #[default]
    None,
    Requested,
}

/// Install SIGINT/SIGTERM handlers and return the receiving half of the
/// shutdown channel. The first signal flips the channel to
/// [`ShutdownSignal::Requested`]; the in-flight batch still completes.
pub fn listen() -> io::Result<watch::Receiver<ShutdownSignal>> {
    let (sender, receiver) = watch::channel(ShutdownSignal::None);
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => {}
            _ = terminate.recv() => {}
        }
        logging::info_simple("shutdown.request", "Request to shutdown received, stopping");
        let _ = sender.send(ShutdownSignal::Requested);
    });

    Ok(receiver)
}
