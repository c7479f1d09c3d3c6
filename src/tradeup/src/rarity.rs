//! Rarity tier progression
//!
//! Trade-ups consume items of one rarity tier and produce an item one tier
//! higher. The six standard tiers are ordered; Covert has a single terminal
//! successor, Gold (knives and gloves), which cannot be traded up further.
//! Gold-tier items usually carry no standard rarity field in the catalog and
//! are identified by category instead.

use serde::{Deserialize, Serialize};

/// Rarity tier of a tradable item, in trade-up order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    ConsumerGrade,
    IndustrialGrade,
    MilSpecGrade,
    Restricted,
    Classified,
    Covert,
    /// Terminal tier for knives and gloves. Reachable only from Covert.
    Gold,
}

impl Rarity {
    /// The tier a trade-up at this tier produces, or `None` for the
    /// terminal Gold tier.
    pub fn next_tier(self) -> Option<Self> {
        match self {
            Self::ConsumerGrade => Some(Self::IndustrialGrade),
            Self::IndustrialGrade => Some(Self::MilSpecGrade),
            Self::MilSpecGrade => Some(Self::Restricted),
            Self::Restricted => Some(Self::Classified),
            Self::Classified => Some(Self::Covert),
            Self::Covert => Some(Self::Gold),
            Self::Gold => None,
        }
    }

    /// Parse a catalog rarity name (e.g. "Mil-Spec Grade").
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        match name {
            "Consumer Grade" => Some(Self::ConsumerGrade),
            "Industrial Grade" => Some(Self::IndustrialGrade),
            "Mil-Spec Grade" => Some(Self::MilSpecGrade),
            "Restricted" => Some(Self::Restricted),
            "Classified" => Some(Self::Classified),
            "Covert" => Some(Self::Covert),
            _ => None,
        }
    }

    /// Display name as it appears in the catalog.
    pub fn name(self) -> &'static str {
        match self {
            Self::ConsumerGrade => "Consumer Grade",
            Self::IndustrialGrade => "Industrial Grade",
            Self::MilSpecGrade => "Mil-Spec Grade",
            Self::Restricted => "Restricted",
            Self::Classified => "Classified",
            Self::Covert => "Covert",
            Self::Gold => "Gold",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rarity tier information for display purposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityInfo {
    pub rarity: Rarity,
    pub name: &'static str,
    pub color: &'static str,
}

/// All rarity tiers in trade-up order
pub const RARITY_TABLE: &[RarityInfo] = &[
    RarityInfo {
        rarity: Rarity::ConsumerGrade,
        name: "Consumer Grade",
        color: "#B0C3D9",
    },
    RarityInfo {
        rarity: Rarity::IndustrialGrade,
        name: "Industrial Grade",
        color: "#5E98D9",
    },
    RarityInfo {
        rarity: Rarity::MilSpecGrade,
        name: "Mil-Spec Grade",
        color: "#4B69FF",
    },
    RarityInfo {
        rarity: Rarity::Restricted,
        name: "Restricted",
        color: "#8847FF",
    },
    RarityInfo {
        rarity: Rarity::Classified,
        name: "Classified",
        color: "#D32CE6",
    },
    RarityInfo {
        rarity: Rarity::Covert,
        name: "Covert",
        color: "#EB4B4B",
    },
    RarityInfo {
        rarity: Rarity::Gold,
        name: "Gold",
        color: "#FFD700",
    },
];

/// Get display info for a rarity tier
pub fn rarity_info(rarity: Rarity) -> Option<&'static RarityInfo> {
    RARITY_TABLE.iter().find(|r| r.rarity == rarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_progression() {
        assert_eq!(
            Rarity::ConsumerGrade.next_tier(),
            Some(Rarity::IndustrialGrade)
        );
        assert_eq!(Rarity::MilSpecGrade.next_tier(), Some(Rarity::Restricted));
        assert_eq!(Rarity::Classified.next_tier(), Some(Rarity::Covert));
    }

    #[test]
    fn test_covert_produces_gold() {
        assert_eq!(Rarity::Covert.next_tier(), Some(Rarity::Gold));
    }

    #[test]
    fn test_gold_is_terminal() {
        assert_eq!(Rarity::Gold.next_tier(), None);
    }

    #[test]
    fn test_catalog_name_parsing() {
        assert_eq!(
            Rarity::from_catalog_name("Mil-Spec Grade"),
            Some(Rarity::MilSpecGrade)
        );
        assert_eq!(Rarity::from_catalog_name("Covert"), Some(Rarity::Covert));
        assert_eq!(Rarity::from_catalog_name("Contraband"), None);
        assert_eq!(Rarity::from_catalog_name(""), None);
    }

    #[test]
    fn test_rarity_info_lookup() {
        assert_eq!(
            rarity_info(Rarity::Covert).map(|r| r.color),
            Some("#EB4B4B")
        );
        assert_eq!(rarity_info(Rarity::Gold).map(|r| r.name), Some("Gold"));
    }
}
