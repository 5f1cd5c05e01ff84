use crate::core::breakdown::{BehaviorShare, breakdown_of};
use crate::core::community::HealthBucket;
use crate::core::format::{format_address, format_last_refresh, format_rate};
use crate::core::{ActivityLevel, LeaderboardEntry};

use super::state::DashboardState;
use super::tab::StatTab;

/// Rows shown per leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;

/// What the page body shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Connect,
    Loading,
    Failed { message: String },
    Tab(TabView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    Overview(OverviewView),
    Activity(ActivityView),
    Rankings(RankingsView),
    Community(CommunityView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub icon: &'static str,
    pub value: String,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub cards: Vec<StatCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityView {
    pub level: ActivityLevel,
    pub growth_rate: String,
    pub community_health: String,
    pub avg_harvest_per_player: String,
    pub avg_help_per_player: String,
    pub steal_rate: String,
    pub breakdown: [BehaviorShare; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Harvest,
    Kindness,
}

impl Board {
    pub fn title(&self) -> &'static str {
        match self {
            Board::Harvest => "Harvest leaderboard TOP 5",
            Board::Kindness => "Kindness leaderboard TOP 5",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Board::Harvest => "🏆",
            Board::Kindness => "💜",
        }
    }
}

/// Podium badge, decided by position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Plain,
}

impl RankBadge {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => RankBadge::Gold,
            1 => RankBadge::Silver,
            2 => RankBadge::Bronze,
            _ => RankBadge::Plain,
        }
    }

    /// (background, foreground) for the given board's palette.
    pub fn colors(&self, board: Board) -> (&'static str, &'static str) {
        match (board, self) {
            (_, RankBadge::Plain) => ("#e5e7eb", "#374151"),
            (Board::Harvest, RankBadge::Gold) => ("#eab308", "#ffffff"),
            (Board::Harvest, RankBadge::Silver) => ("#9ca3af", "#ffffff"),
            (Board::Harvest, RankBadge::Bronze) => ("#d97706", "#ffffff"),
            (Board::Kindness, RankBadge::Gold) => ("#a855f7", "#ffffff"),
            (Board::Kindness, RankBadge::Silver) => ("#f472b6", "#ffffff"),
            (Board::Kindness, RankBadge::Bronze) => ("#4f46e5", "#ffffff"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// Raw address, unique per board.
    pub key: String,
    pub rank: usize,
    pub badge: RankBadge,
    pub address: String,
    pub headline: String,
    pub details: [String; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardPanel {
    NoData,
    Rows(Vec<RankedRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingsView {
    pub harvest: LeaderboardPanel,
    pub kindness: LeaderboardPanel,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contributor {
    pub address: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityView {
    pub health: String,
    pub bucket: HealthBucket,
    pub help_rate: String,
    pub total_helps: u64,
    pub steal_rate: String,
    pub total_steals: u64,
    pub top_harvester: Option<Contributor>,
    pub top_helper: Option<Contributor>,
    pub notice: Option<String>,
}

/// Decide what the page body shows.
///
/// Disconnected beats everything, then loading, then a stats error. Only a
/// connected, idle, error-free page reaches the active tab.
pub fn resolve(connected: bool, tab: StatTab, state: &DashboardState) -> PageView {
    if !connected {
        return PageView::Connect;
    }
    if state.is_loading() {
        return PageView::Loading;
    }
    if let Some(message) = &state.stats_error {
        return PageView::Failed {
            message: message.clone(),
        };
    }
    PageView::Tab(match tab {
        StatTab::Overview => TabView::Overview(overview(state)),
        StatTab::Activity => TabView::Activity(activity(state)),
        StatTab::Rankings => TabView::Rankings(rankings(state)),
        StatTab::Community => TabView::Community(community(state)),
    })
}

fn overview(state: &DashboardState) -> OverviewView {
    let s = &state.stats.global_stats;
    let card = |icon: &'static str, value: String, label: &'static str, color: &'static str| StatCard {
        icon,
        value,
        label,
        color,
    };
    OverviewView {
        cards: vec![
            card("👥", state.stats.total_players_count.to_string(), "Total players", "#111827"),
            card("🌾", s.total_harvests.to_string(), "Total harvests", "#16a34a"),
            card("🤝", s.total_helps.to_string(), "Total helps", "#9333ea"),
            card("📊", s.total_events.to_string(), "Total events", "#2563eb"),
            card("🥷", s.total_steals.to_string(), "Total steals", "#dc2626"),
            card("📈", format_rate(s.average_harvest_per_player), "Avg harvests per player", "#4f46e5"),
            card("💝", format!("{}%", format_rate(s.help_rate)), "Help rate", "#db2777"),
            card("🔄", format_last_refresh(state.last_refresh), "Last updated", "#0d9488"),
        ],
    }
}

fn activity(state: &DashboardState) -> ActivityView {
    let s = &state.stats.global_stats;
    let a = &state.stats.game_activity;
    ActivityView {
        level: a.activity_level,
        growth_rate: format!("{}%", format_rate(a.growth_rate)),
        community_health: format!("{}%", format_rate(a.community_health)),
        avg_harvest_per_player: format_rate(s.average_harvest_per_player),
        avg_help_per_player: format_rate(s.average_help_per_player),
        steal_rate: format!("{}%", format_rate(s.steal_rate)),
        breakdown: breakdown_of(s),
    }
}

fn rankings(state: &DashboardState) -> RankingsView {
    let board = state.leaderboard.as_ref();
    RankingsView {
        harvest: leaderboard_panel(
            board.map(|b| b.harvest_leaderboard.as_slice()),
            Board::Harvest,
        ),
        kindness: leaderboard_panel(
            board.map(|b| b.kindness_leaderboard.as_slice()),
            Board::Kindness,
        ),
        notice: leaderboard_notice(state),
    }
}

fn community(state: &DashboardState) -> CommunityView {
    let s = &state.stats.global_stats;
    let health = state.stats.game_activity.community_health;
    let picks = state.leaderboard.as_ref().map(|b| &b.stats);
    CommunityView {
        health: format!("{}%", format_rate(health)),
        bucket: HealthBucket::from_health(health),
        help_rate: format!("{}%", format_rate(s.help_rate)),
        total_helps: s.total_helps,
        steal_rate: format!("{}%", format_rate(s.steal_rate)),
        total_steals: s.total_steals,
        top_harvester: picks
            .and_then(|p| p.top_harvester.as_ref())
            .map(|e| Contributor {
                address: format_address(&e.address),
                detail: format!("{} harvests", e.harvest_count),
            }),
        top_helper: picks.and_then(|p| p.top_helper.as_ref()).map(|e| Contributor {
            address: format_address(&e.address),
            detail: format!("{} helps", e.help_count),
        }),
        notice: leaderboard_notice(state),
    }
}

/// Top rows of a pre-ranked list, in the order given.
pub fn leaderboard_panel(entries: Option<&[LeaderboardEntry]>, board: Board) -> LeaderboardPanel {
    let entries = entries.unwrap_or_default();
    if entries.is_empty() {
        return LeaderboardPanel::NoData;
    }
    LeaderboardPanel::Rows(
        entries
            .iter()
            .take(LEADERBOARD_SIZE)
            .enumerate()
            .map(|(i, e)| ranked_row(i, e, board))
            .collect(),
    )
}

fn ranked_row(index: usize, entry: &LeaderboardEntry, board: Board) -> RankedRow {
    let (headline, details) = match board {
        Board::Harvest => (
            format!("{} harvests", entry.harvest_count),
            [
                format!("Steals: {}", entry.steal_count),
                format!("Helps: {}", entry.help_count),
            ],
        ),
        Board::Kindness => (
            format!("KIND {}", format_rate(entry.display_kind_balance)),
            [
                format!("Helps: {}", entry.help_count),
                format!("Harvests: {}", entry.harvest_count),
            ],
        ),
    };
    RankedRow {
        key: entry.address.clone(),
        rank: index + 1,
        badge: RankBadge::from_index(index),
        address: format_address(&entry.address),
        headline,
        details,
    }
}

fn leaderboard_notice(state: &DashboardState) -> Option<String> {
    state
        .leaderboard_error
        .as_ref()
        .map(|e| format!("Leaderboard could not be refreshed: {e}"))
}
