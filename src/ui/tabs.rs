use dioxus::prelude::*;

use super::ACCENT;
use crate::page::tab::StatTab;

fn tab_style(selected: bool) -> String {
    if selected {
        format!("background: #2a2a4e; color: {ACCENT}; border: none; padding: 8px 16px; border-radius: 6px; cursor: pointer; font-weight: bold;")
    } else {
        "background: none; color: #888; border: none; padding: 8px 16px; border-radius: 6px; cursor: pointer;".to_string()
    }
}

#[component]
pub fn TabBar(active: StatTab, on_select: EventHandler<StatTab>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: center; margin: 16px 0;",
            div { style: "background: #16213e; border-radius: 8px; padding: 4px; display: flex; flex-wrap: wrap;",
                for tab in StatTab::ALL {
                    button {
                        key: "{tab.key()}",
                        style: tab_style(tab == active),
                        onclick: move |_| on_select.call(tab),
                        "{tab.icon()} {tab.label()}"
                    }
                }
            }
        }
    }
}

/// Manual refresh of the global stats, disabled while anything is loading.
#[component]
pub fn RefreshButton(loading: bool, on_refresh: EventHandler<()>) -> Element {
    let opacity = if loading { "0.5" } else { "1" };

    rsx! {
        div { style: "display: flex; justify-content: center; margin-bottom: 16px;",
            button {
                style: "background: {ACCENT}; color: #1a1a2e; border: none; padding: 8px 16px; border-radius: 6px; cursor: pointer; font-size: 13px; opacity: {opacity};",
                disabled: loading,
                onclick: move |_| on_refresh.call(()),
                if loading { "Refreshing..." } else { "🔄 Refresh data" }
            }
        }
    }
}
