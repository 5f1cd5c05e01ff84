pub mod indexer;

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::core::{LeaderboardSnapshot, StatsSnapshot};

/// Anything that can hand over the current stats and leaderboard snapshots.
pub trait StatsSource {
    type Error: std::fmt::Display;

    fn fetch_stats(&self) -> impl Future<Output = Result<StatsSnapshot, Self::Error>> + Send;

    fn fetch_leaderboard(
        &self,
    ) -> impl Future<Output = Result<LeaderboardSnapshot, Self::Error>> + Send;
}

/// Messages from UI to the provider loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCommand {
    /// Wallet connected: fetch now and start polling.
    Start,
    /// Wallet disconnected: stop polling.
    Pause,
    /// Manual refresh or retry of the global stats.
    RefetchStats,
}

/// Messages from the provider loop to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutput {
    StatsLoading,
    Stats(Result<StatsSnapshot, String>),
    LeaderboardLoading,
    Leaderboard(Result<LeaderboardSnapshot, String>),
}

/// UI side of the output channel is gone.
struct UiClosed;

/// Run the provider: idle until `Start`, then poll both endpoints every
/// `poll_interval` and serve `RefetchStats` on demand.
///
/// Returns when either channel closes.
pub async fn run_provider<S: StatsSource>(
    source: S,
    mut cmd_rx: mpsc::UnboundedReceiver<ProviderCommand>,
    ui_tx: mpsc::UnboundedSender<ProviderOutput>,
    poll_interval: Duration,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut active = false;
    let mut rounds: u64 = 0;

    info!("Provider started, waiting for wallet connection...");

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else {
                    info!("Command channel closed, stopping provider");
                    break;
                };
                let result = match cmd {
                    ProviderCommand::Start if active => Ok(()),
                    ProviderCommand::Start => {
                        active = true;
                        info!("Polling every {}s", poll_interval.as_secs());
                        let r = refresh_all(&source, &ui_tx).await;
                        ticker.reset();
                        r
                    }
                    ProviderCommand::Pause => {
                        if active {
                            info!("Polling paused");
                        }
                        active = false;
                        Ok(())
                    }
                    ProviderCommand::RefetchStats if active => refresh_stats(&source, &ui_tx).await,
                    ProviderCommand::RefetchStats => {
                        debug!("Refetch ignored while paused");
                        Ok(())
                    }
                };
                if result.is_err() {
                    info!("UI channel closed, stopping provider");
                    break;
                }
            }
            _ = ticker.tick(), if active => {
                rounds += 1;
                if rounds % 100 == 0 {
                    info!("Provider completed {rounds} poll rounds");
                }
                if refresh_all(&source, &ui_tx).await.is_err() {
                    info!("UI channel closed, stopping provider");
                    break;
                }
            }
        }
    }

    info!("Provider shutting down after {rounds} poll rounds");
}

async fn refresh_all<S: StatsSource>(
    source: &S,
    ui_tx: &mpsc::UnboundedSender<ProviderOutput>,
) -> Result<(), UiClosed> {
    refresh_stats(source, ui_tx).await?;
    refresh_leaderboard(source, ui_tx).await
}

async fn refresh_stats<S: StatsSource>(
    source: &S,
    ui_tx: &mpsc::UnboundedSender<ProviderOutput>,
) -> Result<(), UiClosed> {
    send(ui_tx, ProviderOutput::StatsLoading)?;
    let started = Instant::now();
    let result = source.fetch_stats().await.map_err(|e| {
        warn!("Stats fetch failed: {e}");
        e.to_string()
    });
    debug!("Stats fetch took {:?}", started.elapsed());
    send(ui_tx, ProviderOutput::Stats(result))
}

async fn refresh_leaderboard<S: StatsSource>(
    source: &S,
    ui_tx: &mpsc::UnboundedSender<ProviderOutput>,
) -> Result<(), UiClosed> {
    send(ui_tx, ProviderOutput::LeaderboardLoading)?;
    let started = Instant::now();
    let result = source.fetch_leaderboard().await.map_err(|e| {
        warn!("Leaderboard fetch failed: {e}");
        e.to_string()
    });
    debug!("Leaderboard fetch took {:?}", started.elapsed());
    send(ui_tx, ProviderOutput::Leaderboard(result))
}

fn send(ui_tx: &mpsc::UnboundedSender<ProviderOutput>, out: ProviderOutput) -> Result<(), UiClosed> {
    ui_tx.send(out).map_err(|_| UiClosed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LeaderboardEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const IDLE: Duration = Duration::from_secs(3600);

    #[derive(Clone, Default)]
    struct FakeSource {
        stats_calls: Arc<AtomicUsize>,
        leaderboard_calls: Arc<AtomicUsize>,
        fail_stats: bool,
    }

    impl StatsSource for FakeSource {
        type Error = String;

        async fn fetch_stats(&self) -> Result<StatsSnapshot, String> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stats {
                return Err("indexer unreachable".to_string());
            }
            Ok(StatsSnapshot {
                total_players_count: 42,
                ..Default::default()
            })
        }

        async fn fetch_leaderboard(&self) -> Result<LeaderboardSnapshot, String> {
            self.leaderboard_calls.fetch_add(1, Ordering::SeqCst);
            Ok(LeaderboardSnapshot {
                harvest_leaderboard: vec![LeaderboardEntry {
                    address: "0xaaa".into(),
                    harvest_count: 3,
                    steal_count: 0,
                    help_count: 1,
                    display_kind_balance: 0.0,
                }],
                ..Default::default()
            })
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ProviderOutput>) -> Vec<ProviderOutput> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    #[tokio::test]
    async fn nothing_fetched_before_start() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::RefetchStats).unwrap();
        drop(cmd_tx);
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 0);
        assert_eq!(source.leaderboard_calls.load(Ordering::SeqCst), 0);
        assert!(drain(&mut ui_rx).is_empty());
    }

    #[tokio::test]
    async fn start_fetches_both_in_order() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        drop(cmd_tx);
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        let out = drain(&mut ui_rx);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], ProviderOutput::StatsLoading);
        assert!(matches!(&out[1], ProviderOutput::Stats(Ok(s)) if s.total_players_count == 42));
        assert_eq!(out[2], ProviderOutput::LeaderboardLoading);
        assert!(matches!(&out[3], ProviderOutput::Leaderboard(Ok(l)) if l.harvest_leaderboard.len() == 1));
    }

    #[tokio::test]
    async fn refetch_hits_stats_only() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        cmd_tx.send(ProviderCommand::RefetchStats).unwrap();
        drop(cmd_tx);
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.leaderboard_calls.load(Ordering::SeqCst), 1);
        assert_eq!(drain(&mut ui_rx).len(), 6);
    }

    #[tokio::test]
    async fn repeated_start_does_not_refetch() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, _ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        cmd_tx.send(ProviderCommand::Start).unwrap();
        drop(cmd_tx);
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pause_stops_refetch() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, _ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        cmd_tx.send(ProviderCommand::Pause).unwrap();
        cmd_tx.send(ProviderCommand::RefetchStats).unwrap();
        drop(cmd_tx);
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stats_error_is_forwarded() {
        let source = FakeSource {
            fail_stats: true,
            ..Default::default()
        };
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        drop(cmd_tx);
        run_provider(source, cmd_rx, ui_tx, IDLE).await;

        let out = drain(&mut ui_rx);
        assert_eq!(
            out[1],
            ProviderOutput::Stats(Err("indexer unreachable".to_string()))
        );
        // leaderboard still fetched
        assert!(matches!(out[3], ProviderOutput::Leaderboard(Ok(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_refetch_both_until_paused() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, _ui_rx) = mpsc::unbounded_channel();

        cmd_tx.send(ProviderCommand::Start).unwrap();
        let provider = tokio::spawn(run_provider(
            source.clone(),
            cmd_rx,
            ui_tx,
            Duration::from_secs(30),
        ));

        // start + ticks at 30s, 60s, 90s
        tokio::time::sleep(Duration::from_secs(95)).await;
        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 4);
        assert_eq!(source.leaderboard_calls.load(Ordering::SeqCst), 4);

        cmd_tx.send(ProviderCommand::Pause).unwrap();
        tokio::time::sleep(Duration::from_secs(95)).await;
        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 4);
        assert_eq!(source.leaderboard_calls.load(Ordering::SeqCst), 4);

        drop(cmd_tx);
        provider.await.unwrap();
    }

    #[tokio::test]
    async fn stops_when_ui_goes_away() {
        let source = FakeSource::default();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        drop(ui_rx);

        cmd_tx.send(ProviderCommand::Start).unwrap();
        // cmd_tx stays alive: the loop must exit on the closed UI side
        run_provider(source.clone(), cmd_rx, ui_tx, IDLE).await;

        assert_eq!(source.stats_calls.load(Ordering::SeqCst), 0);
        drop(cmd_tx);
    }
}
