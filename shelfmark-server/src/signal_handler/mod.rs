//! Shutting down on signals
//!
//! The http server is served with graceful shutdown; it stops accepting requests once the
//! shared [`tokio::sync::watch`] flips to [`InShutdown::Yes`].

/// Is the entire app currently trying to shut down?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InShutdown {
    Yes,
    No,
}

/// Wait for SIGTERM, SIGHUP, SIGINT or ctrl-c and then announce the shutdown
///
/// Also returns when someone else announced a shutdown on `watcher` first.
pub async fn signal_handler(
    mut watcher: tokio::sync::watch::Receiver<InShutdown>,
    shutdown_tx: tokio::sync::watch::Sender<InShutdown>,
) -> Result<(), std::io::Error> {
    use tokio::signal::unix::SignalKind;

    let mut sigterm = install_listener(SignalKind::terminate(), "SIGTERM", &shutdown_tx)?;
    let mut sighup = install_listener(SignalKind::hangup(), "SIGHUP", &shutdown_tx)?;
    let mut sigint = install_listener(SignalKind::interrupt(), "SIGINT", &shutdown_tx)?;

    // wait for a shutdown signal
    tokio::select! {
        // shutdown the signal handler when some other task signals a shutdown
        _ = watcher.changed() => {}
        _ = sigterm.recv() => {
            tracing::info!("Got SIGTERM. Shutting down.");
            shutdown_tx.send_replace(InShutdown::Yes);
        }
        _ = sighup.recv() => {
            tracing::info!("Got SIGHUP. Shutting down.");
            shutdown_tx.send_replace(InShutdown::Yes);
        }
        _ = sigint.recv() => {
            tracing::info!("Got SIGINT. Shutting down.");
            shutdown_tx.send_replace(InShutdown::Yes);
        }
        x = tokio::signal::ctrl_c() => {
            match x {
                Ok(()) => {
                    tracing::info!("Received Ctrl-c. Shutting down.");
                }
                Err(err) => {
                    // we also shut down in case of error
                    tracing::error!("Unable to listen for shutdown signal: {err}");
                }
            }
            shutdown_tx.send_replace(InShutdown::Yes);
        }
    };

    Ok(())
}

fn install_listener(
    kind: tokio::signal::unix::SignalKind,
    name: &str,
    shutdown_tx: &tokio::sync::watch::Sender<InShutdown>,
) -> Result<tokio::signal::unix::Signal, std::io::Error> {
    tokio::signal::unix::signal(kind).map_err(|e| {
        tracing::error!("Failed to install {name} listener: {e} Aborting.");
        shutdown_tx.send_replace(InShutdown::Yes);
        e
    })
}

/// Resolves once a shutdown was announced
pub async fn wait_for_shutdown(mut watcher: tokio::sync::watch::Receiver<InShutdown>) {
    while *watcher.borrow_and_update() == InShutdown::No {
        if watcher.changed().await.is_err() {
            // the sender is gone, nobody can announce a shutdown anymore
            return;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn shutdown_is_seen_by_waiters() {
        let (tx, rx) = tokio::sync::watch::channel(InShutdown::No);
        let waiter = tokio::spawn(wait_for_shutdown(rx));
        tx.send_replace(InShutdown::Yes);
        waiter.await.expect("waiter does not panic");
    }

    #[tokio::test]
    async fn already_shut_down_returns_immediately() {
        let (_tx, rx) = tokio::sync::watch::channel(InShutdown::Yes);
        wait_for_shutdown(rx).await;
    }
}
