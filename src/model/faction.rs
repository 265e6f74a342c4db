use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Controlling side of a portal, persisted as a small numeric string code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Faction {
    #[default]
    Neutral,
    Enlightened,
    Resistance,
}

impl Faction {
    pub fn code(self) -> &'static str {
        match self {
            Faction::Neutral => "0",
            Faction::Enlightened => "1",
            Faction::Resistance => "2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Faction::Neutral),
            "1" => Some(Faction::Enlightened),
            "2" => Some(Faction::Resistance),
            _ => None,
        }
    }

    /// The opposing side. A neutral portal has no opponent and stays neutral.
    pub fn opponent(self) -> Self {
        match self {
            Faction::Neutral => Faction::Neutral,
            Faction::Enlightened => Faction::Resistance,
            Faction::Resistance => Faction::Enlightened,
        }
    }

    /// Agent name stamped onto deployed resonators owned by this side.
    pub fn agent(self) -> Option<&'static str> {
        match self {
            Faction::Neutral => None,
            Faction::Enlightened => Some("Morty"),
            Faction::Resistance => Some("Rick"),
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Faction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Faction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Faction::from_code(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown faction code: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_toggles_between_sides() {
        assert_eq!(Faction::Enlightened.opponent(), Faction::Resistance);
        assert_eq!(Faction::Resistance.opponent(), Faction::Enlightened);
        assert_eq!(Faction::Neutral.opponent(), Faction::Neutral);
    }

    #[test]
    fn serializes_as_numeric_string() {
        assert_eq!(serde_json::to_string(&Faction::Resistance).unwrap(), "\"2\"");
        let f: Faction = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(f, Faction::Enlightened);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(serde_json::from_str::<Faction>("\"3\"").is_err());
    }
}
