pub mod activity;
pub mod community;
pub mod gate;
pub mod overview;
pub mod rankings;
pub mod tabs;

use dioxus::prelude::*;

use crate::core::wallet::WalletSession;
use crate::page::refresh::RefreshHandle;
use crate::page::state::DashboardState;
use crate::page::tab::{StatTab, TabState};
use crate::page::view::{PageView, TabView, resolve};

const PAGE_STYLE: &str = "font-family: system-ui, sans-serif; background: #1a1a2e; color: #e0e0e0; min-height: 100vh; padding: 16px;";
pub(crate) const CARD_STYLE: &str = "background: #16213e; padding: 16px; border-radius: 8px;";
pub(crate) const ACCENT: &str = "#4ade80";

/// Root UI component.
#[component]
pub fn App() -> Element {
    let mut wallet = use_signal(|| {
        WalletSession::from_config(crate::get_config().wallet.address.as_deref())
    });
    let mut tab_state = use_signal(TabState::default);
    let mut dashboard = use_signal(|| {
        let mut state = DashboardState::default();
        if wallet.peek().is_connected() {
            state.mark_fetching();
        }
        state
    });
    let mut connect_error = use_signal(|| None::<String>);

    let refresh = use_hook(|| {
        let handle = crate::take_ui_cmd()
            .map(RefreshHandle::new)
            .unwrap_or_else(RefreshHandle::detached);
        // Pre-connected from config: start polling right away
        if wallet.peek().is_connected() {
            handle.start();
        }
        handle
    });

    // Fold provider output into the dashboard state
    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let Some(mut rx) = crate::take_ui_rx() else {
            tracing::error!("Failed to take UI receiver");
            return;
        };

        tracing::info!("UI coroutine started, listening for provider output");

        while let Some(output) = rx.recv().await {
            dashboard.write().apply(output);
        }

        tracing::info!("Provider channel closed");
    });

    let connected = wallet.read().is_connected();
    let active = tab_state.read().active();
    let loading = dashboard.read().is_loading();
    let view = resolve(connected, active, &dashboard.read());

    if view == PageView::Connect {
        let refresh = refresh.clone();
        return rsx! {
            div { style: PAGE_STYLE,
                gate::ConnectGate {
                    error: connect_error(),
                    on_connect: move |input: String| {
                        match wallet.write().connect(&input) {
                            Ok(()) => {
                                connect_error.set(None);
                                if refresh.start() {
                                    dashboard.write().mark_fetching();
                                }
                            }
                            Err(e) => connect_error.set(Some(e.to_string())),
                        }
                    },
                }
            }
        };
    }

    let address = wallet.read().address().map(crate::core::format::format_address).unwrap_or_default();
    let on_disconnect = {
        let refresh = refresh.clone();
        move |_: MouseEvent| {
            wallet.write().disconnect();
            refresh.pause();
        }
    };
    let on_refresh = {
        let refresh = refresh.clone();
        move |_: ()| {
            refresh.refresh(dashboard.read().is_loading());
        }
    };
    let on_retry = {
        let refresh = refresh.clone();
        move |_: ()| {
            refresh.retry();
        }
    };

    rsx! {
        div { class: "app", style: PAGE_STYLE,

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                div {
                    h1 { style: "color: {ACCENT}; margin: 0;", "🌾 Game statistics" }
                    p { style: "color: #888; margin: 4px 0 0 0;",
                        "A community-wide look at the farm"
                    }
                }
                div { style: "display: flex; align-items: center; gap: 8px; font-size: 13px;",
                    span { style: "color: #888; font-family: monospace;", "{address}" }
                    button {
                        style: "background: none; border: 1px solid #555; color: #aaa; padding: 4px 8px; border-radius: 4px; cursor: pointer;",
                        onclick: on_disconnect,
                        "Disconnect"
                    }
                }
            }

            tabs::TabBar {
                active,
                on_select: move |tab: StatTab| {
                    tab_state.write().select(tab);
                },
            }

            tabs::RefreshButton { loading, on_refresh }

            {match view {
                PageView::Connect => rsx! {},
                PageView::Loading => rsx! { LoadingPanel {} },
                PageView::Failed { message } => rsx! { ErrorPanel { message, on_retry } },
                PageView::Tab(TabView::Overview(view)) => rsx! { overview::OverviewTab { view } },
                PageView::Tab(TabView::Activity(view)) => rsx! { activity::ActivityTab { view } },
                PageView::Tab(TabView::Rankings(view)) => rsx! { rankings::RankingsTab { view } },
                PageView::Tab(TabView::Community(view)) => rsx! { community::CommunityTab { view } },
            }}
        }
    }
}

#[component]
fn LoadingPanel() -> Element {
    rsx! {
        div { style: "{CARD_STYLE} text-align: center; padding: 48px 16px;",
            p { style: "color: #888;", "⏳ Loading statistics..." }
        }
    }
}

#[component]
fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { style: "{CARD_STYLE} text-align: center; padding: 48px 16px;",
            div { style: "color: #ef4444; font-size: 18px; font-weight: bold; margin-bottom: 8px;",
                "Failed to load statistics"
            }
            p { style: "color: #888; font-size: 12px;", "{message}" }
            button {
                style: "background: #ef4444; color: white; border: none; padding: 8px 16px; border-radius: 6px; cursor: pointer;",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
