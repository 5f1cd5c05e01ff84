use dioxus::prelude::*;

use super::{ACCENT, CARD_STYLE};
use crate::page::view::{CommunityView, Contributor};

#[component]
pub fn CommunityTab(view: CommunityView) -> Element {
    let (bucket_bg, bucket_fg) = view.bucket.colors();

    rsx! {
        if let Some(notice) = view.notice {
            p { style: "color: #f59e0b; font-size: 13px; text-align: center;", "⚠ {notice}" }
        }
        div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 16px;",
            div { style: "{CARD_STYLE} text-align: center;",
                div { style: "font-size: 28px;", "🤝" }
                div { style: "font-size: 22px; font-weight: bold; color: #a855f7;", "{view.health}" }
                div { style: "font-size: 13px; color: #888;", "Community health index" }
                span { style: "display: inline-block; margin-top: 8px; background: {bucket_bg}; color: {bucket_fg}; padding: 2px 12px; border-radius: 999px; font-size: 12px;",
                    "{view.bucket.label()}"
                }
            }
            div { style: "{CARD_STYLE} text-align: center;",
                div { style: "font-size: 28px;", "💝" }
                div { style: "font-size: 22px; font-weight: bold; color: #db2777;", "{view.help_rate}" }
                div { style: "font-size: 13px; color: #888;", "Help participation" }
                div { style: "font-size: 12px; color: #666; margin-top: 4px;", "({view.total_helps} helps)" }
            }
            div { style: "{CARD_STYLE} text-align: center;",
                div { style: "font-size: 28px;", "⚖️" }
                div { style: "font-size: 22px; font-weight: bold; color: #ea580c;", "{view.steal_rate}" }
                div { style: "font-size: 13px; color: #888;", "Steal rate" }
                div { style: "font-size: 12px; color: #666; margin-top: 4px;", "({view.total_steals} steals)" }
            }
        }

        div { style: CARD_STYLE,
            h2 { style: "color: {ACCENT}; margin-top: 0;", "Community contributors" }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                ContributorSlot { title: "🌾 Top harvester", tint: "#14532d", contributor: view.top_harvester }
                ContributorSlot { title: "💝 Top helper", tint: "#3b0764", contributor: view.top_helper }
            }
        }
    }
}

#[component]
fn ContributorSlot(title: &'static str, tint: &'static str, contributor: Option<Contributor>) -> Element {
    rsx! {
        div {
            h4 { style: "margin: 0 0 12px 0;", "{title}" }
            if let Some(c) = contributor {
                div { style: "background: {tint}; padding: 12px; border-radius: 6px;",
                    div { style: "font-family: monospace;", "{c.address}" }
                    div { style: "font-size: 13px; color: #aaa;", "{c.detail}" }
                }
            } else {
                div { style: "color: #666;", "No data yet" }
            }
        }
    }
}
