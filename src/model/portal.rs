use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::faction::Faction;
use super::resonator::Resonator;

/// How `normalize` picks the resonators that contribute to a portal's
/// derived level and health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Only resonators with non-zero health count; the rest are dropped
    /// from the normalized status as not yet deployed.
    #[default]
    Deployed,
    /// Every present resonator counts, whatever its health.
    AllPresent,
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deployed" => Ok(Aggregation::Deployed),
            "all-present" | "all" => Ok(Aggregation::AllPresent),
            other => Err(format!("unknown aggregation mode: {other}")),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Deployed => f.write_str("deployed"),
            Aggregation::AllPresent => f.write_str("all-present"),
        }
    }
}

/// Aggregate state of one portal as written to every snapshot.
///
/// `level` and `health` are derived: they only hold meaningful values after
/// [`PortalStatus::normalize`]. Field order here is the persisted field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalStatus {
    pub title: String,
    pub owner: String,
    pub level: i32,
    pub health: i32,
    pub controlling_faction: Faction,
    pub mods: Vec<String>,
    pub resonators: Vec<Resonator>,
}

/// Single-key wrapper (`{"status": ...}`) the downstream consumer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub status: PortalStatus,
}

impl PortalStatus {
    /// An unowned portal with no resonators.
    pub fn neutral(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner: String::new(),
            level: 0,
            health: 0,
            controlling_faction: Faction::Neutral,
            mods: Vec::new(),
            resonators: Vec::new(),
        }
    }

    /// Recompute the derived fields from the resonators.
    ///
    /// Level and health are floor means over the contributing resonators.
    /// Contributing resonators are stamped with the controlling side's agent.
    /// With nothing contributing, the portal resets to neutral.
    pub fn normalize(&self, aggregation: Aggregation) -> PortalStatus {
        let agent = self.controlling_faction.agent();
        let resonators: Vec<Resonator> = self
            .resonators
            .iter()
            .filter(|r| aggregation == Aggregation::AllPresent || r.health != 0)
            .map(|r| {
                let mut r = r.clone();
                if let Some(agent) = agent {
                    r.owner = agent.to_string();
                }
                r
            })
            .collect();

        if resonators.is_empty() {
            return PortalStatus::neutral(self.title.clone());
        }

        let count = resonators.len() as i32;
        let health = resonators.iter().map(|r| r.health).sum::<i32>() / count;
        let level = resonators.iter().map(|r| r.level).sum::<i32>() / count;

        PortalStatus {
            title: self.title.clone(),
            owner: self.owner.clone(),
            level,
            health,
            controlling_faction: self.controlling_faction,
            mods: Vec::new(),
            resonators,
        }
    }

    pub fn into_envelope(self) -> StatusEnvelope {
        StatusEnvelope { status: self }
    }
}
