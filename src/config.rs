//! Scheduling configuration.
//!
//! This module centralizes the Leitner policy values used by the scheduler:
//! box bounds, the per-box review intervals, and the lapse policy applied
//! when a card is answered incorrectly.

use serde::{Deserialize, Serialize};
use std::path::Path;

// ==================== Leitner Boxes ====================

/// Lowest box; freshly created cards start here
pub const MIN_BOX: u8 = 1;

/// Highest box; cards in this box count as mastered
pub const MAX_BOX: u8 = 5;

/// Days until the next review per box: same day, 1d, 3d, 7d, 14d
/// Index 0 corresponds to box 1.
pub const BOX_INTERVAL_DAYS: [i64; 5] = [0, 1, 3, 7, 14];

/// Interval applied when a stored box value is outside the table
pub const FALLBACK_INTERVAL_DAYS: i64 = 1;

/// Get the review interval in days for a box.
///
/// Out-of-range box values (e.g. from old exported data) fall back to a
/// 1-day interval instead of panicking.
pub fn interval_days(box_level: u8) -> i64 {
    if (MIN_BOX..=MAX_BOX).contains(&box_level) {
        BOX_INTERVAL_DAYS[(box_level - MIN_BOX) as usize]
    } else {
        FALLBACK_INTERVAL_DAYS
    }
}

// ==================== Lapse Policy ====================

/// How a wrong answer moves a card between boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LapsePolicy {
    /// Demote the card by one box, with a floor at box 1
    #[default]
    StepDown,
    /// Send the card straight back to box 1 so it repeats more often
    Restart,
}

impl LapsePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "step_down" => Some(Self::StepDown),
            "restart" => Some(Self::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StepDown => "step_down",
            Self::Restart => "restart",
        }
    }

    /// Apply the policy to a card's current box
    pub fn demote(&self, box_level: u8) -> u8 {
        match self {
            Self::StepDown => box_level.saturating_sub(1).max(MIN_BOX),
            Self::Restart => MIN_BOX,
        }
    }
}

// ==================== Config Loading ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    scheduler: Option<SchedulerConfig>,
}

#[derive(Debug, Deserialize)]
struct SchedulerConfig {
    lapse_policy: Option<String>,
}

/// Load the lapse policy with priority: config.toml > .env > default
pub fn load_lapse_policy() -> LapsePolicy {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Some(policy) = load_lapse_policy_from(Path::new("config.toml")) {
        tracing::info!("Using lapse policy from config.toml: {}", policy.as_str());
        return policy;
    }

    // Priority 2: .env LAPSE_POLICY
    if let Ok(value) = std::env::var("LAPSE_POLICY") {
        if let Some(policy) = LapsePolicy::from_str(&value) {
            tracing::info!("Using lapse policy from LAPSE_POLICY env: {}", policy.as_str());
            return policy;
        }
        tracing::warn!("Ignoring unknown LAPSE_POLICY value: {}", value);
    }

    // Default
    LapsePolicy::default()
}

/// Read and parse the lapse policy from a config file, if it has one
fn load_lapse_policy_from(path: &Path) -> Option<LapsePolicy> {
    let contents = std::fs::read_to_string(path).ok()?;
    let config: AppConfig = toml::from_str(&contents).ok()?;
    let value = config.scheduler?.lapse_policy?;
    match LapsePolicy::from_str(&value) {
        Some(policy) => Some(policy),
        None => {
            tracing::warn!("Ignoring unknown lapse_policy in {}: {}", path.display(), value);
            None
        }
    }
}
