use dioxus::prelude::*;

use super::{ACCENT, CARD_STYLE};
use crate::core::breakdown::BehaviorShare;
use crate::page::view::ActivityView;

#[component]
pub fn ActivityTab(view: ActivityView) -> Element {
    let (badge_bg, badge_fg) = view.level.colors();

    rsx! {
        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            div { style: CARD_STYLE,
                h2 { style: "color: {ACCENT}; margin-top: 0;", "📈 Activity analysis" }
                Row { label: "Activity level",
                    span { style: "background: {badge_bg}; color: {badge_fg}; padding: 2px 12px; border-radius: 999px; font-size: 13px;",
                        "{view.level.label()}"
                    }
                }
                Row { label: "Growth rate",
                    span { style: "font-weight: bold; color: #16a34a;", "{view.growth_rate}" }
                }
                Row { label: "Community health",
                    span { style: "font-weight: bold; color: #a855f7;", "{view.community_health}" }
                }
                div { style: "border-top: 1px solid #2a2a4e; margin-top: 12px; padding-top: 12px; font-size: 13px; color: #aaa;",
                    p { "• Harvests per player: {view.avg_harvest_per_player}" }
                    p { "• Helps per player: {view.avg_help_per_player}" }
                    p { "• Steal rate: {view.steal_rate}" }
                }
            }

            div { style: CARD_STYLE,
                h2 { style: "color: {ACCENT}; margin-top: 0;", "🧊 Behaviour breakdown" }
                for share in view.breakdown {
                    BreakdownBar { key: "{share.behavior.label()}", share }
                }
            }
        }
    }
}

#[component]
fn Row(label: &'static str, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; margin: 8px 0;",
            span { style: "color: #888;", "{label}" }
            {children}
        }
    }
}

#[component]
fn BreakdownBar(share: BehaviorShare) -> Element {
    let color = share.behavior.color();

    rsx! {
        div { style: "margin-bottom: 12px;",
            div { style: "display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 4px;",
                span { style: "color: #888;", "{share.behavior.label()}" }
                span { "{share.count} ({share.percent}%)" }
            }
            div { style: "background: #2a2a4e; border-radius: 999px; height: 8px;",
                div { style: "background: {color}; border-radius: 999px; height: 8px; width: {share.percent}%;" }
            }
        }
    }
}
