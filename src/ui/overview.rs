use dioxus::prelude::*;

use super::CARD_STYLE;
use crate::page::view::OverviewView;

#[component]
pub fn OverviewTab(view: OverviewView) -> Element {
    rsx! {
        div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
            for card in view.cards.iter() {
                div { key: "{card.label}", style: "{CARD_STYLE} text-align: center;",
                    div { style: "font-size: 28px; margin-bottom: 8px;", "{card.icon}" }
                    div { style: "font-size: 22px; font-weight: bold; color: {card.color};", "{card.value}" }
                    div { style: "font-size: 13px; color: #888;", "{card.label}" }
                }
            }
        }
    }
}
