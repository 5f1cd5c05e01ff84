#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatTab {
    #[default]
    Overview,
    Activity,
    Rankings,
    Community,
}

impl StatTab {
    pub const ALL: [StatTab; 4] = [
        StatTab::Overview,
        StatTab::Activity,
        StatTab::Rankings,
        StatTab::Community,
    ];

    /// Stable key.
    pub fn key(&self) -> &'static str {
        match self {
            StatTab::Overview => "overview",
            StatTab::Activity => "activity",
            StatTab::Rankings => "rankings",
            StatTab::Community => "community",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatTab::Overview => "Overview",
            StatTab::Activity => "Activity",
            StatTab::Rankings => "Rankings",
            StatTab::Community => "Community health",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatTab::Overview => "📊",
            StatTab::Activity => "📈",
            StatTab::Rankings => "🏆",
            StatTab::Community => "💜",
        }
    }
}

/// Which tab is showing. Selection never triggers a fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: StatTab,
}

impl TabState {
    pub fn active(&self) -> StatTab {
        self.active
    }

    /// Returns whether the active tab changed.
    pub fn select(&mut self, tab: StatTab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = self.active.key(), to = tab.key(), "Tab selected");
        self.active = tab;
        true
    }
}
