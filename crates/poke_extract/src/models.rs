//! Output records, one struct per domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LineError;
use crate::names::CanonicalKey;

/// Records of one domain keyed by species.
pub type SpeciesMap<R> = BTreeMap<CanonicalKey, R>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub description: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub pp: u32,
    pub power: u32,
    pub category: String,
    pub accuracy: u32,
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self {
            description: String::new(),
            move_type: "Normal".to_string(),
            pp: 0,
            power: 0,
            category: "Physical".to_string(),
            accuracy: 0,
        }
    }
}

/// `evo_data` parameter: a level or count when numeric, otherwise the raw
/// token (item, move, map, time of day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvoParameter {
    Number(i64),
    Token(String),
}

impl EvoParameter {
    pub fn parse(operand: &str) -> Self {
        let operand = operand.trim();
        match operand.parse() {
            Ok(number) => EvoParameter::Number(number),
            Err(_) => EvoParameter::Token(operand.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionMethod {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<EvoParameter>,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRecord {
    pub methods: Vec<EvolutionMethod>,
    pub chain: Vec<CanonicalKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildEncounter {
    pub area: String,
    pub method: String,
    pub time: String,
    pub level: String,
    /// Area encounter rate for the time of day.
    pub chance: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rare_item: Option<String>,
    /// Share of this slot within its (area, method, time) group.
    #[serde(default)]
    pub slot_chance: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub description: String,
    pub species: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseDataRecord {
    pub name: String,
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_dex: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub johto_dex: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub total: u32,
}

impl BaseStats {
    /// From the six stats in `hp, atk, def, spd, sat, sdf` order. Fails
    /// when the total does not fit in a `u32`.
    pub fn from_values(values: [u32; 6]) -> Result<Self, LineError> {
        let total = values
            .iter()
            .try_fold(0u32, |sum, &value| sum.checked_add(value))
            .ok_or_else(|| LineError::Overflow(format!("{values:?}")))?;
        let [hp, attack, defense, speed, special_attack, special_defense] = values;
        Ok(Self {
            hp,
            attack,
            defense,
            speed,
            special_attack,
            special_defense,
            total,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStats {
    pub base_stats: BaseStats,
    pub catch_rate: u32,
    pub base_exp: u32,
    pub held_items: Vec<String>,
    pub gender_ratio: String,
    pub hatch_rate: String,
    pub abilities: Vec<String>,
    pub growth_rate: String,
    pub egg_groups: Vec<String>,
    pub ev_yield: String,
}

impl Default for DetailedStats {
    fn default() -> Self {
        Self {
            base_stats: BaseStats::default(),
            catch_rate: 0,
            base_exp: 0,
            held_items: Vec::new(),
            gender_ratio: "Unknown".to_string(),
            hatch_rate: "Unknown".to_string(),
            abilities: Vec::new(),
            growth_rate: "Medium Fast".to_string(),
            egg_groups: Vec::new(),
            ev_yield: "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evo_parameter_parse() {
        assert_eq!(EvoParameter::parse("20"), EvoParameter::Number(20));
        assert_eq!(
            EvoParameter::parse(" MOON_STONE "),
            EvoParameter::Token("MOON_STONE".to_string())
        );
    }

    #[test]
    fn test_evolution_method_json() {
        let method = EvolutionMethod {
            method: "Level".to_string(),
            parameter: Some(EvoParameter::Number(20)),
            target: "RATICATE".to_string(),
            form: None,
        };
        assert_eq!(
            serde_json::to_string(&method).unwrap(),
            r#"{"method":"Level","parameter":20,"target":"RATICATE"}"#
        );
    }

    #[test]
    fn test_wild_encounter_camel_case() {
        let encounter = WildEncounter {
            area: "Route 29".to_string(),
            method: "Walking in grass".to_string(),
            time: "morn".to_string(),
            level: "2".to_string(),
            chance: 20,
            rare_item: None,
            slot_chance: 30,
        };
        let json = serde_json::to_value(&encounter).unwrap();
        assert_eq!(json["slotChance"], 30);
        assert!(json.get("rareItem").is_none());
    }

    #[test]
    fn test_base_stats_total() {
        let stats = BaseStats::from_values([45, 49, 49, 45, 65, 65]).unwrap();
        assert_eq!(stats.total, 318);
        assert_eq!(stats.special_defense, 65);
    }

    #[test]
    fn test_base_stats_total_overflow() {
        let err = BaseStats::from_values([u32::MAX, 1, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, LineError::Overflow(_)));
    }
}
