//! Stop switch for the digest server.
//!
//! A `watch` flag rather than a one-shot message: a trigger that happens
//! before the server starts waiting is still observed.

use std::future::Future;

use tokio::sync::watch;

use crate::lifecycle::signals;

/// Stops the server from inside the process, alongside SIGINT/SIGTERM.
pub struct Shutdown {
    stopped: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self { stopped }
    }

    /// Flip the switch. Idempotent.
    pub fn trigger(&self) {
        self.stopped.send_replace(true);
    }

    /// Future for `axum::serve(..).with_graceful_shutdown`: resolves on
    /// [`Shutdown::trigger`] or on an OS termination signal.
    ///
    /// Dropping the `Shutdown` without triggering it leaves only the OS
    /// signals able to stop the server.
    pub fn signal(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut stopped = self.stopped.subscribe();

        async move {
            let triggered = async {
                let closed = stopped.wait_for(|&flag| flag).await.is_err();
                if closed {
                    std::future::pending::<()>().await;
                }
            };

            tokio::select! {
                _ = triggered => tracing::info!("Shutdown triggered"),
                name = signals::os_signal() => tracing::info!(signal = name, "Shutdown signal received"),
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn signal_waits_for_trigger() {
        let shutdown = Shutdown::new();
        let waiter = tokio::spawn(shutdown.signal());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("signal should resolve after trigger")
            .unwrap();
    }

    #[tokio::test]
    async fn trigger_before_waiting_is_not_lost() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), shutdown.signal())
            .await
            .expect("earlier trigger should be observed");
    }

    #[tokio::test]
    async fn trigger_survives_dropping_the_switch() {
        let shutdown = Shutdown::default();
        let signal = shutdown.signal();
        shutdown.trigger();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), signal)
            .await
            .expect("trigger sent before drop should be observed");
    }

    #[tokio::test]
    async fn untriggered_drop_keeps_waiting() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signal();
        drop(shutdown);

        let outcome = tokio::time::timeout(Duration::from_millis(50), signal).await;
        assert!(outcome.is_err());
    }
}
