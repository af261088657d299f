//! Spawn templates
//!
//! Blueprints for the hostile entities the controller may create. These are
//! loaded from RON files and tagged with the period they spawn in.

use serde::{Deserialize, Serialize};

/// Period tag value for daytime spawns
const DAY_TAG: &str = "DAY";
/// Period tag value for nighttime spawns
const NIGHT_TAG: &str = "NIGHT";

/// Which half of the day a template spawns in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnPeriod {
    Day,
    Night,
}

impl SpawnPeriod {
    /// Parse a raw period tag. Whitespace and case are ignored; anything
    /// other than DAY or NIGHT yields None.
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        let normalized = tag?.trim().to_uppercase();
        match normalized.as_str() {
            DAY_TAG => Some(SpawnPeriod::Day),
            NIGHT_TAG => Some(SpawnPeriod::Night),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SpawnPeriod::Day => DAY_TAG,
            SpawnPeriod::Night => NIGHT_TAG,
        }
    }
}

impl std::fmt::Display for SpawnPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A blueprint for a spawnable enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Raw period tag, as authored
    #[serde(default)]
    pub period: Option<String>,
    /// Base HP
    pub health: i32,
    /// Optional description/lore
    #[serde(default)]
    pub description: Option<String>,
}

impl SpawnTemplate {
    pub fn new(id: &str, name: &str, period: Option<&str>, health: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            period: period.map(str::to_string),
            health,
            description: None,
        }
    }

    /// The normalized period, if the tag is recognised
    pub fn spawn_period(&self) -> Option<SpawnPeriod> {
        SpawnPeriod::from_tag(self.period.as_deref())
    }
}

/// Create default spawn templates (hardcoded fallback)
pub fn default_spawn_templates() -> Vec<SpawnTemplate> {
    vec![
        // === DAY ===
        SpawnTemplate {
            id: "bandit".to_string(),
            name: "Bandit".to_string(),
            period: Some("DAY".to_string()),
            health: 30,
            description: Some("Roams the open plains looking for easy marks.".to_string()),
        },
        SpawnTemplate {
            id: "wild_boar".to_string(),
            name: "Wild Boar".to_string(),
            period: Some("day".to_string()),
            health: 25,
            description: Some("Charges anything that wanders too close.".to_string()),
        },

        // === NIGHT ===
        SpawnTemplate {
            id: "ghoul".to_string(),
            name: "Ghoul".to_string(),
            period: Some("NIGHT".to_string()),
            health: 40,
            description: Some("Crawls out of the soil once the sun sets.".to_string()),
        },
        SpawnTemplate {
            id: "shade".to_string(),
            name: "Shade".to_string(),
            period: Some(" Night ".to_string()),
            health: 20,
            description: Some("A shadow that hungers for warmth.".to_string()),
        },
        SpawnTemplate {
            id: "gravewalker".to_string(),
            name: "Gravewalker".to_string(),
            period: Some("NIGHT".to_string()),
            health: 60,
            description: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_tag_normalization() {
        assert_eq!(SpawnPeriod::from_tag(Some("DAY")), Some(SpawnPeriod::Day));
        assert_eq!(SpawnPeriod::from_tag(Some("  day\t")), Some(SpawnPeriod::Day));
        assert_eq!(SpawnPeriod::from_tag(Some("Night")), Some(SpawnPeriod::Night));
        assert_eq!(SpawnPeriod::from_tag(Some("")), None);
        assert_eq!(SpawnPeriod::from_tag(Some("dusk")), None);
        assert_eq!(SpawnPeriod::from_tag(None), None);
    }

    #[test]
    fn test_default_templates_cover_both_periods() {
        let templates = default_spawn_templates();
        assert!(templates.iter().any(|t| t.spawn_period() == Some(SpawnPeriod::Day)));
        assert!(templates.iter().any(|t| t.spawn_period() == Some(SpawnPeriod::Night)));
    }
}
