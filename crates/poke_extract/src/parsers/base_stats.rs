//! Detailed battle and breeding stats, one species per file.
//!
//! Fields are recognised by their trailing comment (`; hp, atk, def, ...`,
//! `; catch rate`) or by code-prefixed operands (`GENDER_*`, `HATCH_*`,
//! `GROWTH_*`, `EGG_*`).

use crate::error::{parse_int, LineError};
use crate::models::{BaseStats, DetailedStats};
use crate::scan::{scan, Grammar, Line};
use crate::tables::{EGG_GROUP_CODES, GENDER_CODES, GROWTH_RATE_CODES, HATCH_CODES};

use super::abilities::ability_key;
use super::Parsed;

const NO_ITEM: &str = "NO_ITEM";

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Stats(BaseStats),
    CatchRate(u32),
    BaseExp(u32),
    HeldItems(Vec<&'a str>),
    Abilities(Vec<&'a str>),
    EvYield(String),
    /// Operands carrying gender, hatch, growth or egg-group codes.
    Codes(Vec<&'a str>),
    Other,
}

fn first_int(operands: &[&str]) -> Result<u32, LineError> {
    match operands.first() {
        Some(operand) => parse_int(operand),
        None => Err(LineError::Arity {
            keyword: "db".to_string(),
            expected: "1",
            found: 0,
        }),
    }
}

#[derive(Default)]
pub struct StatsFile {
    stats: DetailedStats,
}

impl Grammar for StatsFile {
    type Mode = ();
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        let operands = directive.operands();
        let comment = line.comment.unwrap_or_default().to_ascii_lowercase();

        if directive.keyword == "ev_yield" {
            return Ok(Kind::EvYield(
                directive.operands.split_whitespace().collect::<Vec<_>>().join(" "),
            ));
        }
        if directive.keyword == "abilities_for" {
            return Ok(Kind::Abilities(operands.iter().skip(1).copied().collect()));
        }
        if comment.starts_with("hp, atk") {
            let values = operands
                .iter()
                .map(|operand| parse_int(operand))
                .collect::<Result<Vec<u32>, _>>()?;
            let stats: [u32; 6] = values.as_slice().try_into().map_err(|_| LineError::Arity {
                keyword: directive.keyword.to_string(),
                expected: "6",
                found: values.len(),
            })?;
            return BaseStats::from_values(stats).map(Kind::Stats);
        }
        if comment.contains("catch rate") {
            return first_int(&operands).map(Kind::CatchRate);
        }
        if comment.contains("base exp") {
            return first_int(&operands).map(Kind::BaseExp);
        }
        if comment.contains("held item") {
            return Ok(Kind::HeldItems(operands));
        }
        if comment.contains("abilit") {
            return Ok(Kind::Abilities(operands));
        }
        let codes: Vec<&str> = operands
            .into_iter()
            .filter(|o| ["GENDER_", "HATCH_", "GROWTH_", "EGG_"].iter().any(|p| o.starts_with(p)))
            .collect();
        Ok(if codes.is_empty() { Kind::Other } else { Kind::Codes(codes) })
    }

    fn transition(&mut self, _mode: (), kind: Kind<'_>) -> Result<(), LineError> {
        let stats = &mut self.stats;
        match kind {
            Kind::Stats(base_stats) => stats.base_stats = base_stats,
            Kind::CatchRate(rate) => stats.catch_rate = rate,
            Kind::BaseExp(exp) => stats.base_exp = exp,
            Kind::HeldItems(items) => stats.held_items.extend(
                items
                    .into_iter()
                    .filter(|item| !item.is_empty() && *item != NO_ITEM)
                    .map(|item| item.replace('_', " ")),
            ),
            Kind::Abilities(abilities) => stats
                .abilities
                .extend(abilities.into_iter().filter(|a| !a.is_empty()).map(ability_key)),
            Kind::EvYield(text) => stats.ev_yield = text,
            Kind::Codes(codes) => {
                for code in codes {
                    if code.starts_with("GENDER_") {
                        stats.gender_ratio =
                            GENDER_CODES.get(code).copied().unwrap_or("Unknown").to_string();
                    } else if code.starts_with("HATCH_") {
                        stats.hatch_rate =
                            HATCH_CODES.get(code).copied().unwrap_or("Unknown").to_string();
                    } else if code.starts_with("GROWTH_") {
                        stats.growth_rate = GROWTH_RATE_CODES
                            .get(code)
                            .copied()
                            .unwrap_or("Medium Fast")
                            .to_string();
                    } else {
                        stats.egg_groups.push(
                            EGG_GROUP_CODES.get(code).copied().unwrap_or("Undiscovered").to_string(),
                        );
                    }
                }
            }
            Kind::Other => {}
        }
        Ok(())
    }
}

pub fn parse_base_stats(origin: &str, text: &str) -> Parsed<DetailedStats> {
    let mut grammar = StatsFile::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.stats,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = "\
\tdb  45,  49,  49,  45,  65,  65 ; hp, atk, def, spd, sat, sdf
\tdb GRASS, POISON ; type
\tdb 45 ; catch rate
\tdb 64 ; base exp
\tdb NO_ITEM, BIG_ROOT ; held items
\tdn GENDER_F12_5, HATCH_FAST ; gender ratio, step cycles to hatch
\tabilities_for BULBASAUR, OVERGROW, OVERGROW, CHLOROPHYLL
\tdb GROWTH_MEDIUM_SLOW ; growth rate
\tdn EGG_MONSTER, EGG_PLANT ; egg groups
\tev_yield 1 SAt
";

    #[test]
    fn test_full_file() {
        let parsed = parse_base_stats("bulbasaur.asm", BULBASAUR);
        assert!(parsed.report.is_clean());
        let stats = parsed.records;
        assert_eq!(stats.base_stats.total, 318);
        assert_eq!(stats.base_stats.special_attack, 65);
        assert_eq!(stats.catch_rate, 45);
        assert_eq!(stats.base_exp, 64);
        assert_eq!(stats.held_items, vec!["BIG ROOT"]);
        assert_eq!(stats.gender_ratio, "12.5% ♀, 87.5% ♂");
        assert_eq!(stats.hatch_rate, "Medium-Fast (5,120 steps)");
        assert_eq!(stats.abilities, vec!["Overgrow", "Overgrow", "Chlorophyll"]);
        assert_eq!(stats.growth_rate, "Medium Slow");
        assert_eq!(stats.egg_groups, vec!["Monster", "Grass"]);
        assert_eq!(stats.ev_yield, "1 SAt");
    }

    #[test]
    fn test_defaults_when_absent() {
        let stats = parse_base_stats("empty.asm", "").records;
        assert_eq!(stats, DetailedStats::default());
        assert_eq!(stats.growth_rate, "Medium Fast");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let stats = parse_base_stats("odd.asm", "\tdn GENDER_WEIRD, EGG_SPACE\n").records;
        assert_eq!(stats.gender_ratio, "Unknown");
        assert_eq!(stats.egg_groups, vec!["Undiscovered"]);
    }

    #[test]
    fn test_short_stats_line_is_reported() {
        let parsed = parse_base_stats("bad.asm", "\tdb 1, 2, 3 ; hp, atk, def, spd, sat, sdf\n\tdb 3 ; catch rate\n");
        assert_eq!(parsed.report.issues.len(), 1);
        assert_eq!(parsed.records.catch_rate, 3);
    }

    #[test]
    fn test_overflowing_stats_line_is_reported() {
        let parsed = parse_base_stats(
            "bad.asm",
            "\tdb 4000000000, 4000000000, 1, 1, 1, 1 ; hp, atk, def, spd, sat, sdf\n\tdb 3 ; catch rate\n",
        );
        assert_eq!(parsed.report.issues.len(), 1);
        assert_eq!(parsed.report.issues[0].line, 1);
        assert_eq!(parsed.records.base_stats, BaseStats::default());
        assert_eq!(parsed.records.catch_rate, 3);
    }
}
