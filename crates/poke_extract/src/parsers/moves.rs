//! Move names, descriptions and battle stats.
//!
//! Stat lines read
//! `move NAME, EFFECT, POWER, TYPE, ACCURACY, PP, PRIORITY, CATEGORY`.

use std::collections::{BTreeMap, HashMap};

use crate::error::{parse_int, LineError};
use crate::models::MoveRecord;
use crate::names::compact_key;
use crate::scan::{scan, Grammar, Line};
use crate::tables::{CATEGORY_NAMES, SHARED_MOVE_DESCRIPTIONS, TYPE_NAMES};

use super::Parsed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveStats {
    pub move_type: String,
    pub power: u32,
    pub accuracy: u32,
    pub pp: u32,
    pub category: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StatsKind<'a> {
    Move(&'a str, MoveStats),
    Other,
}

/// Stats keyed by compact move constant.
#[derive(Default)]
pub struct StatsTable {
    stats: HashMap<String, MoveStats>,
}

impl Grammar for StatsTable {
    type Mode = ();
    type Kind<'a> = StatsKind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<StatsKind<'a>, LineError> {
        let Some(directive) = line.directive("move") else {
            return Ok(StatsKind::Other);
        };
        let operands = directive.operands();
        let [name, _effect, power, move_type, accuracy, pp, _priority, category] =
            operands.as_slice()
        else {
            return Err(LineError::Arity {
                keyword: "move".to_string(),
                expected: "8",
                found: operands.len(),
            });
        };
        let stats = MoveStats {
            move_type: TYPE_NAMES.get(*move_type).copied().unwrap_or("None").to_string(),
            power: parse_int(power)?,
            accuracy: parse_int(accuracy)?,
            pp: parse_int(pp)?,
            category: CATEGORY_NAMES
                .get(*category)
                .copied()
                .unwrap_or("Unknown")
                .to_string(),
        };
        Ok(StatsKind::Move(*name, stats))
    }

    fn transition(&mut self, _mode: (), kind: StatsKind<'_>) -> Result<(), LineError> {
        if let StatsKind::Move(name, stats) = kind {
            self.stats.insert(compact_key(name), stats);
        }
        Ok(())
    }
}

pub fn parse_stats(origin: &str, text: &str) -> Parsed<HashMap<String, MoveStats>> {
    let mut grammar = StatsTable::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.stats,
        report,
    }
}

/// Join names, descriptions and stats. Names missing either part get an
/// empty description or default stats.
pub fn build_moves(
    names: &[String],
    descriptions: &BTreeMap<String, String>,
    stats: &HashMap<String, MoveStats>,
) -> BTreeMap<String, MoveRecord> {
    let mut moves: BTreeMap<String, MoveRecord> = names
        .iter()
        .map(|name| {
            let compact = compact_key(name);
            let mut record = MoveRecord {
                description: descriptions.get(&compact).cloned().unwrap_or_default(),
                ..MoveRecord::default()
            };
            if let Some(stats) = stats.get(&compact) {
                record.move_type = stats.move_type.clone();
                record.power = stats.power;
                record.accuracy = stats.accuracy;
                record.pp = stats.pp;
                record.category = stats.category.clone();
            }
            (name.clone(), record)
        })
        .collect();
    apply_shared_descriptions(&mut moves);
    moves
}

/// The first member of each group lends its description to the other
/// members that exist. Stats are untouched and no records are created.
pub fn apply_shared_descriptions(moves: &mut BTreeMap<String, MoveRecord>) {
    let by_compact: HashMap<String, String> = moves
        .keys()
        .map(|name| (compact_key(name), name.clone()))
        .collect();

    for group in SHARED_MOVE_DESCRIPTIONS {
        let Some((primary, members)) = group.split_first() else {
            continue;
        };
        let Some(description) = by_compact
            .get(&compact_key(primary))
            .and_then(|name| moves.get(name))
            .map(|record| record.description.clone())
        else {
            continue;
        };
        for member in members {
            if let Some(record) = by_compact
                .get(&compact_key(member))
                .and_then(|name| moves.get_mut(name))
            {
                record.description = description.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::abilities::parse_names;
    use crate::parsers::descriptions::parse_descriptions;

    const STATS: &str = "\
Moves:
\tmove BODY_SLAM,     EFFECT_PARALYZE_HIT, 85, NORMAL,   100, 15,  0, PHYSICAL
\tmove THUNDERBOLT,   EFFECT_PARALYZE_HIT, 90, ELECTRIC, 100, 15,  0, SPECIAL
\tmove GROWL,         EFFECT_ATTACK_DOWN,   0, NORMAL,   100, 40,  0, STATUS
";

    #[test]
    fn test_stats_line() {
        let parsed = parse_stats("moves.asm", STATS);
        assert!(parsed.report.is_clean());
        let bolt = &parsed.records["THUNDERBOLT"];
        assert_eq!(bolt.move_type, "Electric");
        assert_eq!(bolt.power, 90);
        assert_eq!(bolt.category, "Special");
    }

    #[test]
    fn test_bad_stats_line_is_reported() {
        let parsed = parse_stats("moves.asm", "\tmove TACKLE, EFFECT_NORMAL_HIT, 40\n");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.report.issues.len(), 1);
    }

    #[test]
    fn test_shared_description_copies_onto_existing_members() {
        let names = parse_names(
            "names.asm",
            "\tli \"BODY SLAM\"\n\tli \"THUNDERBOLT\"\n\tli \"GROWL\"\n",
        )
        .records;
        let descriptions = parse_descriptions(
            "descriptions.asm",
            "BodySlamDescription:\n\ttext \"May cause\"\n\tnext \"paralysis.\"\n\tdone\nThunderboltDescription:\n\ttext \"Zap.\"\n\tdone\n",
        )
        .records;
        let stats = parse_stats("moves.asm", STATS).records;
        let moves = build_moves(&names, &descriptions, &stats);

        assert_eq!(moves["THUNDERBOLT"].description, "May cause paralysis.");
        assert_eq!(moves["THUNDERBOLT"].power, 90);
        assert_eq!(moves["BODY SLAM"].power, 85);
        assert!(!moves.contains_key("SPARK"));
        assert_eq!(moves["GROWL"].description, "");
    }

    #[test]
    fn test_missing_stats_use_defaults() {
        let moves = build_moves(&["SPLASH".to_string()], &BTreeMap::new(), &HashMap::new());
        assert_eq!(moves["SPLASH"], MoveRecord::default());
    }
}
