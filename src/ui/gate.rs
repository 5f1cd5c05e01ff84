use dioxus::prelude::*;

use super::{ACCENT, CARD_STYLE};

/// Call-to-action shown while no wallet is connected. Nothing else renders.
#[component]
pub fn ConnectGate(error: Option<String>, on_connect: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 500px;",
            div { style: "{CARD_STYLE} text-align: center; max-width: 440px;",
                div { style: "font-size: 48px; margin-bottom: 8px;", "📊" }
                h1 { style: "color: {ACCENT}; margin: 0 0 8px 0;", "Farm statistics" }
                p { style: "color: #aaa; margin-bottom: 24px;",
                    "Connect your wallet to see game-wide statistics and community analysis."
                }
                div { style: "display: flex; gap: 8px;",
                    input {
                        style: "flex: 1; background: #1a1a2e; border: 1px solid #555; color: #e0e0e0; padding: 8px; border-radius: 4px; font-family: monospace;",
                        placeholder: "0x...",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    button {
                        style: "background: {ACCENT}; color: #1a1a2e; border: none; padding: 8px 16px; border-radius: 4px; font-weight: bold; cursor: pointer;",
                        onclick: move |_| on_connect.call(input.read().clone()),
                        "Connect wallet"
                    }
                }
                if let Some(err) = error {
                    p { style: "color: #ef4444; font-size: 12px; margin-top: 8px;", "{err}" }
                }
            }
        }
    }
}
