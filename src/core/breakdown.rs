use super::GlobalStats;

/// Player behaviour categories shown as proportional bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Harvest,
    Help,
    Steal,
}

impl Behavior {
    pub const ALL: [Behavior; 3] = [Behavior::Harvest, Behavior::Help, Behavior::Steal];

    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Harvest => "Harvesting",
            Behavior::Help => "Helping",
            Behavior::Steal => "Stealing",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Behavior::Harvest => "#22c55e",
            Behavior::Help => "#a855f7",
            Behavior::Steal => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorShare {
    pub behavior: Behavior,
    pub count: u64,
    /// Whole percent of the combined total, 0-100.
    pub percent: u32,
}

/// Split harvest/help/steal counts into rounded percentages of their sum.
///
/// Rounds half away from zero. Every share is 0 when all counts are 0.
pub fn compute_breakdown(harvest: u64, help: u64, steal: u64) -> [BehaviorShare; 3] {
    let total = harvest as u128 + help as u128 + steal as u128;
    let counts = [harvest, help, steal];
    let mut shares = [BehaviorShare {
        behavior: Behavior::Harvest,
        count: 0,
        percent: 0,
    }; 3];
    for (i, behavior) in Behavior::ALL.into_iter().enumerate() {
        shares[i] = BehaviorShare {
            behavior,
            count: counts[i],
            percent: round_percent(counts[i], total),
        };
    }
    shares
}

/// Breakdown of the global counters.
pub fn breakdown_of(stats: &GlobalStats) -> [BehaviorShare; 3] {
    compute_breakdown(stats.total_harvests, stats.total_helps, stats.total_steals)
}

fn round_percent(value: u64, total: u128) -> u32 {
    if total == 0 {
        return 0;
    }
    // (value * 100 / total) rounded half-up, in integers
    ((value as u128 * 200 + total) / (2 * total)) as u32
}
