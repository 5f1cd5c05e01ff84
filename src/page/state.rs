use chrono::{DateTime, Local};

use crate::core::{LeaderboardSnapshot, StatsSnapshot};
use crate::provider::ProviderOutput;

/// Latest provider snapshots and flags as seen by the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub stats: StatsSnapshot,
    /// `None` until the first leaderboard arrives.
    pub leaderboard: Option<LeaderboardSnapshot>,
    pub stats_loading: bool,
    pub leaderboard_loading: bool,
    pub stats_error: Option<String>,
    /// Kept apart from `stats_error`: shown as a notice, never blocks the page.
    pub leaderboard_error: Option<String>,
    pub last_refresh: Option<DateTime<Local>>,
}

impl DashboardState {
    /// Combined flag: either provider still in flight.
    pub fn is_loading(&self) -> bool {
        self.stats_loading || self.leaderboard_loading
    }

    /// Both fetches were just requested; show loading until their results land.
    pub fn mark_fetching(&mut self) {
        self.stats_loading = true;
        self.leaderboard_loading = true;
    }

    pub fn apply(&mut self, output: ProviderOutput) {
        self.apply_at(output, Local::now());
    }

    /// Fold one provider message in. Later results overwrite earlier ones.
    pub fn apply_at(&mut self, output: ProviderOutput, now: DateTime<Local>) {
        match output {
            ProviderOutput::StatsLoading => self.stats_loading = true,
            ProviderOutput::Stats(Ok(snapshot)) => {
                self.stats_loading = false;
                self.stats = snapshot;
                self.stats_error = None;
                self.last_refresh = Some(now);
            }
            ProviderOutput::Stats(Err(e)) => {
                self.stats_loading = false;
                self.stats_error = Some(e);
            }
            ProviderOutput::LeaderboardLoading => self.leaderboard_loading = true,
            ProviderOutput::Leaderboard(Ok(snapshot)) => {
                self.leaderboard_loading = false;
                self.leaderboard = Some(snapshot);
                self.leaderboard_error = None;
            }
            ProviderOutput::Leaderboard(Err(e)) => {
                self.leaderboard_loading = false;
                self.leaderboard_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn loading_is_either_flag() {
        let mut state = DashboardState::default();
        assert!(!state.is_loading());

        state.apply(ProviderOutput::LeaderboardLoading);
        assert!(state.is_loading());

        state.apply(ProviderOutput::Leaderboard(Ok(LeaderboardSnapshot::default())));
        assert!(!state.is_loading());

        state.apply(ProviderOutput::StatsLoading);
        assert!(state.is_loading());
    }

    #[test]
    fn fetching_lasts_until_both_results_arrive() {
        let mut state = DashboardState::default();
        state.mark_fetching();
        assert!(state.is_loading());

        state.apply(ProviderOutput::StatsLoading);
        state.apply(ProviderOutput::Stats(Ok(StatsSnapshot::default())));
        assert!(state.is_loading());

        state.apply(ProviderOutput::LeaderboardLoading);
        state.apply(ProviderOutput::Leaderboard(Ok(LeaderboardSnapshot::default())));
        assert!(!state.is_loading());
    }

    #[test]
    fn stats_success_stamps_refresh_and_clears_error() {
        let mut state = DashboardState::default();
        state.apply_at(ProviderOutput::Stats(Err("boom".into())), at(9, 0, 0));
        assert!(state.stats_error.is_some());
        assert!(state.last_refresh.is_none());

        let snap = StatsSnapshot {
            total_players_count: 7,
            ..Default::default()
        };
        state.apply_at(ProviderOutput::Stats(Ok(snap)), at(9, 0, 30));
        assert!(state.stats_error.is_none());
        assert_eq!(state.stats.total_players_count, 7);
        assert_eq!(state.last_refresh, Some(at(9, 0, 30)));
    }

    #[test]
    fn stats_error_keeps_last_snapshot() {
        let mut state = DashboardState::default();
        let snap = StatsSnapshot {
            total_players_count: 3,
            ..Default::default()
        };
        state.apply_at(ProviderOutput::Stats(Ok(snap)), at(8, 0, 0));
        state.apply_at(ProviderOutput::Stats(Err("timeout".into())), at(8, 1, 0));
        assert_eq!(state.stats.total_players_count, 3);
        assert_eq!(state.last_refresh, Some(at(8, 0, 0)));
        assert_eq!(state.stats_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn leaderboard_error_does_not_block() {
        let mut state = DashboardState::default();
        state.apply(ProviderOutput::Leaderboard(Ok(LeaderboardSnapshot::default())));
        state.apply(ProviderOutput::Leaderboard(Err("503".into())));
        assert!(state.stats_error.is_none());
        assert!(state.leaderboard.is_some());
        assert_eq!(state.leaderboard_error.as_deref(), Some("503"));
    }
}
