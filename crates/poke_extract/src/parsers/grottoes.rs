//! Hidden Grotto slots.
//!
//! ```text
//! ; HIDDENGROTTO_ROUTE_32
//!     db 1, SUN_STONE, LEVEL_FROM_BADGES + 2
//!     dp PIDGEY
//!     dp SENTRET
//!     dp HOPPIP
//!     dp MAREEP
//! ```
//!
//! The four `dp` slots after a data line are common, common, uncommon
//! and rare.

use crate::error::{parse_int, LineError};
use crate::models::{SpeciesMap, WildEncounter};
use crate::names::{title_case, CanonicalKey};
use crate::scan::{scan, Grammar, Line};
use crate::tables::ENCOUNTER_METHOD_NAMES;

use super::Parsed;

const HEADER_PREFIX: &str = "HIDDENGROTTO_";
const BADGE_LEVEL: &str = "LEVEL_FROM_BADGES";

/// Rarity and chance of each grotto slot, in slot order.
pub const GROTTO_SLOTS: [(&str, u8); 4] = [
    ("common", 40),
    ("common", 40),
    ("uncommon", 15),
    ("rare", 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Outside,
    /// Header seen, waiting for the data line.
    Header,
    /// Filling slots; the index of the next one.
    Slots(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Header(&'a str),
    Data { item: &'a str, level: String },
    Slot { species: &'a str, form: Option<&'a str> },
    Other,
}

/// `LEVEL_FROM_BADGES + 2` -> `Badge Level + 2`; anything else verbatim.
pub fn grotto_level(raw: &str) -> String {
    let raw = raw.trim();
    match raw.strip_prefix(BADGE_LEVEL) {
        Some(modifier) => {
            let modifier = modifier.split_whitespace().collect::<Vec<_>>().join(" ");
            if modifier.is_empty() {
                "Badge Level".to_string()
            } else {
                format!("Badge Level {modifier}")
            }
        }
        None => raw.to_string(),
    }
}

#[derive(Default)]
pub struct Grottoes {
    area: Option<String>,
    rare_item: Option<String>,
    level: String,
    encounters: SpeciesMap<Vec<WildEncounter>>,
}

impl Grammar for Grottoes {
    type Mode = Mode;
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(comment) = line.comment_only() {
            return Ok(match comment.trim().strip_prefix(HEADER_PREFIX) {
                Some(area) if !area.is_empty() => Kind::Header(area),
                _ => Kind::Other,
            });
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        match directive.keyword {
            "db" => match directive.operands().as_slice() {
                [warp, item, level @ ..] if !level.is_empty() => {
                    parse_int::<u32>(warp)?;
                    Ok(Kind::Data {
                        item: *item,
                        level: grotto_level(&level.join(", ")),
                    })
                }
                _ => Ok(Kind::Other),
            },
            "dp" => match directive.operands().as_slice() {
                [species] => Ok(Kind::Slot { species: *species, form: None }),
                [species, form, ..] => Ok(Kind::Slot {
                    species: *species,
                    form: Some(*form).filter(|f| !f.is_empty()),
                }),
                [] => Err(LineError::Arity {
                    keyword: "dp".to_string(),
                    expected: "1 or 2",
                    found: 0,
                }),
            },
            _ => Ok(Kind::Other),
        }
    }

    fn transition(&mut self, mode: Mode, kind: Kind<'_>) -> Result<Mode, LineError> {
        Ok(match (mode, kind) {
            (_, Kind::Header(area)) => {
                self.area = Some(title_case(area));
                self.rare_item = None;
                Mode::Header
            }
            (Mode::Header | Mode::Slots(_), Kind::Data { item, level }) => {
                self.rare_item = Some(title_case(item));
                self.level = level;
                Mode::Slots(0)
            }
            (Mode::Slots(index), Kind::Slot { species, form }) => {
                let Some(&(rarity, chance)) = GROTTO_SLOTS.get(index) else {
                    return Ok(mode);
                };
                let Some(area) = &self.area else {
                    return Ok(Mode::Outside);
                };
                let encounter = WildEncounter {
                    area: area.clone(),
                    method: ENCOUNTER_METHOD_NAMES
                        .get("hidden_grotto")
                        .copied()
                        .unwrap_or("Hidden Grotto")
                        .to_string(),
                    time: rarity.to_string(),
                    level: self.level.clone(),
                    chance,
                    rare_item: self.rare_item.clone(),
                    slot_chance: chance,
                };
                self.encounters
                    .entry(CanonicalKey::new(species, form))
                    .or_default()
                    .push(encounter);
                Mode::Slots(index + 1)
            }
            (Mode::Outside, Kind::Slot { .. }) => {
                return Err(LineError::Orphan("dp".to_string()))
            }
            (mode, _) => mode,
        })
    }
}

pub fn parse_grottoes(origin: &str, text: &str) -> Parsed<SpeciesMap<Vec<WildEncounter>>> {
    let mut grammar = Grottoes::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.encounters,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROTTOES: &str = "\
HiddenGrottoData:
\ttable_width GROTTO_DATA_SIZE, HiddenGrottoData
; HIDDENGROTTO_ROUTE_32
\tdb 1, SUN_STONE, LEVEL_FROM_BADGES + 2
\tdp PIDGEY
\tdp SENTRET
\tdp HOPPIP
\tdp MAREEP
\tdp EXTRA
; HIDDENGROTTO_ILEX_FOREST
\tdb 2, EVERSTONE, 25
\tdp PARAS
\tdp MEOWTH, GALARIAN
";

    fn key(species: &str, form: Option<&str>) -> CanonicalKey {
        CanonicalKey::new(species, form)
    }

    #[test]
    fn test_slot_rarities() {
        let parsed = parse_grottoes("grottoes.asm", GROTTOES);
        assert!(parsed.report.is_clean());
        let hoppip = &parsed.records[&key("HOPPIP", None)][0];
        assert_eq!(hoppip.area, "Route 32");
        assert_eq!(hoppip.method, "Hidden Grotto");
        assert_eq!(hoppip.time, "uncommon");
        assert_eq!(hoppip.chance, 15);
        assert_eq!(hoppip.level, "Badge Level + 2");
        assert_eq!(hoppip.rare_item.as_deref(), Some("Sun Stone"));
        assert_eq!(parsed.records[&key("MAREEP", None)][0].chance, 5);
        assert!(!parsed.records.contains_key(&key("EXTRA", None)));
    }

    #[test]
    fn test_slots_reset_per_grotto() {
        let parsed = parse_grottoes("grottoes.asm", GROTTOES);
        let paras = &parsed.records[&key("PARAS", None)][0];
        assert_eq!(paras.time, "common");
        assert_eq!(paras.level, "25");
        assert_eq!(paras.area, "Ilex Forest");
        let meowth = &parsed.records[&key("MEOWTH", Some("GALARIAN"))][0];
        assert_eq!(meowth.rare_item.as_deref(), Some("Everstone"));
    }

    #[test]
    fn test_grotto_level() {
        assert_eq!(grotto_level("LEVEL_FROM_BADGES"), "Badge Level");
        assert_eq!(grotto_level("LEVEL_FROM_BADGES  -   1"), "Badge Level - 1");
        assert_eq!(grotto_level("LEVEL_FROM_BADGES +3"), "Badge Level +3");
        assert_eq!(grotto_level("30"), "30");
    }

    #[test]
    fn test_slot_outside_grotto() {
        let parsed = parse_grottoes("grottoes.asm", "\tdp PIDGEY\n");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.report.issues.len(), 1);
    }
}
