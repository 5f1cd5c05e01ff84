pub mod breakdown;
pub mod community;
pub mod format;
pub mod wallet;

use serde::{Deserialize, Serialize};

/// Global counters and derived rates across the whole player base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStats {
    pub total_harvests: u64,
    pub total_helps: u64,
    pub total_events: u64,
    pub total_steals: u64,
    pub average_harvest_per_player: f64,
    pub average_help_per_player: f64,
    pub help_rate: f64,  // %
    pub steal_rate: f64, // %
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameActivity {
    pub activity_level: ActivityLevel,
    /// Period-over-period growth in percent; negative when shrinking.
    pub growth_rate: f64,
    /// Positive-vs-negative interaction balance, 0-100.
    pub community_health: f64,
}

/// One player row as ranked by the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub address: String,
    #[serde(default)]
    pub harvest_count: u64,
    #[serde(default)]
    pub steal_count: u64,
    #[serde(default)]
    pub help_count: u64,
    #[serde(default)]
    pub display_kind_balance: f64,
}

/// Summary picks; `None` means no player qualifies yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardStats {
    pub top_harvester: Option<LeaderboardEntry>,
    pub top_helper: Option<LeaderboardEntry>,
}

/// Everything the stats endpoint returns in one read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    pub global_stats: GlobalStats,
    pub total_players_count: u64,
    pub game_activity: GameActivity,
}

/// Both ranked lists and the summary picks, fetched together so the list
/// views and the contributors card never disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardSnapshot {
    pub harvest_leaderboard: Vec<LeaderboardEntry>,
    pub kindness_leaderboard: Vec<LeaderboardEntry>,
    pub stats: LeaderboardStats,
}
