use super::ActivityLevel;

pub const HEALTHY_THRESHOLD: f64 = 70.0;
pub const FAIR_THRESHOLD: f64 = 40.0;

/// Display bucket for the community-health index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBucket {
    Healthy,          // ≥70
    Fair,             // ≥40
    NeedsImprovement, // <40
}

impl HealthBucket {
    pub fn from_health(health: f64) -> Self {
        if health >= HEALTHY_THRESHOLD {
            HealthBucket::Healthy
        } else if health >= FAIR_THRESHOLD {
            HealthBucket::Fair
        } else {
            HealthBucket::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBucket::Healthy => "Healthy",
            HealthBucket::Fair => "Fair",
            HealthBucket::NeedsImprovement => "Needs improvement",
        }
    }

    /// (background, foreground)
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            HealthBucket::Healthy => ("#dcfce7", "#15803d"),
            HealthBucket::Fair => ("#fef9c3", "#a16207"),
            HealthBucket::NeedsImprovement => ("#fee2e2", "#b91c1c"),
        }
    }
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::High => "Highly active",
            ActivityLevel::Medium => "Moderately active",
            ActivityLevel::Low => "Low activity",
        }
    }

    /// (background, foreground)
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            ActivityLevel::High => ("#dcfce7", "#15803d"),
            ActivityLevel::Medium => ("#fef9c3", "#a16207"),
            ActivityLevel::Low => ("#f3f4f6", "#374151"),
        }
    }
}
