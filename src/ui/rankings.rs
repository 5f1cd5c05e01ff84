use dioxus::prelude::*;

use super::{ACCENT, CARD_STYLE};
use crate::page::view::{Board, LeaderboardPanel, RankedRow, RankingsView};

#[component]
pub fn RankingsTab(view: RankingsView) -> Element {
    rsx! {
        if let Some(notice) = view.notice {
            p { style: "color: #f59e0b; font-size: 13px; text-align: center;", "⚠ {notice}" }
        }
        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            LeaderboardCard { board: Board::Harvest, panel: view.harvest }
            LeaderboardCard { board: Board::Kindness, panel: view.kindness }
        }
    }
}

#[component]
fn LeaderboardCard(board: Board, panel: LeaderboardPanel) -> Element {
    rsx! {
        div { style: CARD_STYLE,
            h2 { style: "color: {ACCENT}; margin-top: 0;", "{board.icon()} {board.title()}" }
            {match panel {
                LeaderboardPanel::NoData => rsx! {
                    p { style: "color: #666; text-align: center; padding: 24px 0;", "No leaderboard data yet." }
                },
                LeaderboardPanel::Rows(rows) => rsx! {
                    for row in rows {
                        PlayerRow { key: "{row.key}", board, row: row.clone() }
                    }
                },
            }}
        }
    }
}

#[component]
fn PlayerRow(board: Board, row: RankedRow) -> Element {
    let (bg, fg) = row.badge.colors(board);
    let [left, right] = row.details.clone();

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; background: #1a1a2e; padding: 10px; margin: 6px 0; border-radius: 6px;",
            div { style: "display: flex; align-items: center; gap: 12px;",
                div { style: "width: 32px; height: 32px; border-radius: 50%; background: {bg}; color: {fg}; display: flex; align-items: center; justify-content: center; font-weight: bold; font-size: 13px;",
                    "{row.rank}"
                }
                div {
                    div { style: "font-family: monospace;", title: "{row.key}", "{row.address}" }
                    div { style: "font-size: 12px; color: #888;", "{row.headline}" }
                }
            }
            div { style: "text-align: right; font-size: 12px; color: #888;",
                div { "{left}" }
                div { "{right}" }
            }
        }
    }
}
