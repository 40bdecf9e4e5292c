//! SOL balance poller: one immediate fetch when the wallet connects, then one
//! every five seconds until the task is aborted at disconnect.

use anyhow::Result;
use std::future::Future;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceEvent {
    /// Fresh lamport balance.
    Updated(u64),
    /// Fetch failed; the display keeps its previous value.
    FetchFailed(String),
}

pub struct BalancePoller {
    handle: JoinHandle<()>,
}

impl BalancePoller {
    /// Spawn the polling task. The first tick fires immediately; events flow
    /// to the dashboard over `events` and are applied last-write-wins.
    pub fn spawn<F, Fut>(fetch: F, events: UnboundedSender<BalanceEvent>) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<u64>> + Send,
    {
        tracing::debug!("balance poller started");
        let handle = tokio::spawn(async move {
            let mut ticker = interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let event = match fetch().await {
                    Ok(lamports) => BalanceEvent::Updated(lamports),
                    Err(err) => {
                        tracing::warn!("balance fetch failed: {err:#}");
                        BalanceEvent::FetchFailed(format!("{err:#}"))
                    }
                };
                if events.send(event).is_err() {
                    // dashboard side went away
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Cancel polling. Dropping the poller has the same effect.
    pub fn stop(&self) {
        tracing::debug!("balance poller stopped");
        self.handle.abort();
    }
}

impl Drop for BalancePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    /// Let the spawned poller task run up to its next await point.
    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn counting_fetch(
        calls: Arc<AtomicU64>,
    ) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<u64>> + Send>> {
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Ok(n * 10)
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_immediately_then_every_interval() {
        let calls = Arc::new(AtomicU64::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = BalancePoller::spawn(counting_fetch(calls.clone()), tx);

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(rx.try_recv().unwrap(), BalanceEvent::Updated(0));

        tokio::time::advance(POLL_INTERVAL).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(rx.try_recv().unwrap(), BalanceEvent::Updated(10));

        tokio::time::advance(POLL_INTERVAL).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_fetch_between_ticks() {
        let calls = Arc::new(AtomicU64::new(0));
        let (tx, _rx) = mpsc::unbounded_channel();
        let _poller = BalancePoller::spawn(counting_fetch(calls.clone()), tx);

        settle().await;
        tokio::time::advance(POLL_INTERVAL / 2).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_within_one_interval_of_disconnect() {
        let calls = Arc::new(AtomicU64::new(0));
        let (tx, _rx) = mpsc::unbounded_channel();
        let poller = BalancePoller::spawn(counting_fetch(calls.clone()), tx);

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(poller);
        settle().await;
        tokio::time::advance(POLL_INTERVAL).await;
        settle().await;
        tokio::time::advance(POLL_INTERVAL).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reports_failures_as_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = BalancePoller::spawn(
            || Box::pin(async { anyhow::bail!("rpc unreachable") }),
            tx,
        );

        settle().await;
        match rx.try_recv().unwrap() {
            BalanceEvent::FetchFailed(message) => assert!(message.contains("rpc unreachable")),
            other => panic!("expected a fetch failure, got {other:?}"),
        }
    }
}
