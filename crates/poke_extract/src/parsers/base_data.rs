//! Types and dex numbers, one species per file.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::LineError;
use crate::models::BaseDataRecord;
use crate::names::CanonicalKey;
use crate::scan::{scan, Grammar, Line};

use super::Parsed;

const TYPE_PREFIX: &str = "TYPE_";
const MAX_TYPES: usize = 2;

static DEX_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(national|johto)\s+dex\b(?:\s+number)?\s*(?:#\s*(\d+))?")
        .expect("static regex must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dex {
    National,
    Johto,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Types(Vec<&'a str>),
    DexNumber(Dex, u32),
    Measure(&'a str),
    Other,
}

#[derive(Default)]
pub struct BaseData {
    types: Vec<String>,
    national_dex: Option<u32>,
    johto_dex: Option<u32>,
}

impl BaseData {
    pub fn into_record(self, key: &CanonicalKey) -> BaseDataRecord {
        let types = if self.types.is_empty() {
            vec!["NORMAL".to_string()]
        } else {
            self.types
        };
        BaseDataRecord {
            name: key.to_string(),
            types,
            national_dex: self.national_dex,
            johto_dex: self.johto_dex,
        }
    }
}

/// `; national dex #25` or `db 25 ; national dex number`.
fn dex_number(line: &Line<'_>) -> Result<Option<(Dex, u32)>, LineError> {
    let Some(captures) = line.comment.and_then(|c| DEX_NUMBER.captures(c)) else {
        return Ok(None);
    };
    let dex = if captures[1].eq_ignore_ascii_case("national") {
        Dex::National
    } else {
        Dex::Johto
    };
    let number = match captures.get(2) {
        Some(number) => crate::error::parse_int(number.as_str())?,
        None => match line.directive.map(|d| d.operands()).as_deref() {
            Some([operand, ..]) => crate::error::parse_int(operand)?,
            _ => return Ok(None),
        },
    };
    Ok(Some((dex, number)))
}

impl Grammar for BaseData {
    type Mode = ();
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some((dex, number)) = dex_number(line)? {
            return Ok(Kind::DexNumber(dex, number));
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        let comment = line.comment.unwrap_or_default().to_ascii_lowercase();
        if directive.keyword == "dw" && (comment.contains("height") || comment.contains("weight")) {
            return Ok(Kind::Measure(directive.operands));
        }
        let types: Vec<&str> = directive
            .operands()
            .into_iter()
            .filter_map(|operand| operand.strip_prefix(TYPE_PREFIX))
            .filter(|t| !t.is_empty())
            .collect();
        Ok(if types.is_empty() { Kind::Other } else { Kind::Types(types) })
    }

    fn transition(&mut self, _mode: (), kind: Kind<'_>) -> Result<(), LineError> {
        match kind {
            Kind::Types(types) => {
                for t in types {
                    if self.types.len() < MAX_TYPES && !self.types.iter().any(|seen| seen == t) {
                        self.types.push(t.to_string());
                    }
                }
            }
            Kind::DexNumber(Dex::National, number) => self.national_dex = Some(number),
            Kind::DexNumber(Dex::Johto, number) => self.johto_dex = Some(number),
            Kind::Measure(values) => debug!("Discarding height/weight `{values}`"),
            Kind::Other => {}
        }
        Ok(())
    }
}

pub fn parse_base_data(origin: &str, key: &CanonicalKey, text: &str) -> Parsed<BaseDataRecord> {
    let mut grammar = BaseData::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.into_record(key),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Parsed<BaseDataRecord> {
        parse_base_data("pikachu.asm", &CanonicalKey::new("PIKACHU", None), text)
    }

    #[test]
    fn test_types_and_dex_numbers() {
        let parsed = parse(
            "\tdb TYPE_ELECTRIC, TYPE_ELECTRIC ; type\n\tdw 4, 60 ; height, weight\n\t; national dex #25\n\t; johto dex #22\n",
        );
        assert!(parsed.report.is_clean());
        assert_eq!(
            parsed.records,
            BaseDataRecord {
                name: "Pikachu".to_string(),
                types: vec!["ELECTRIC".to_string()],
                national_dex: Some(25),
                johto_dex: Some(22),
            }
        );
    }

    #[test]
    fn test_dex_number_from_operand() {
        let parsed = parse("\tdb 25 ; national dex number\n");
        assert_eq!(parsed.records.national_dex, Some(25));
        assert_eq!(parsed.records.johto_dex, None);
    }

    #[test]
    fn test_types_capped_and_defaulted() {
        let parsed = parse("\tdb TYPE_FIRE, TYPE_FLYING\n\tdb TYPE_DRAGON\n");
        assert_eq!(parsed.records.types, vec!["FIRE", "FLYING"]);
        assert_eq!(parse("\tdb 0\n").records.types, vec!["NORMAL"]);
    }

    #[test]
    fn test_bad_dex_number_is_reported() {
        let parsed = parse("\tdb x ; johto dex number\n\tdb TYPE_ICE\n");
        assert_eq!(parsed.report.issues.len(), 1);
        assert_eq!(parsed.records.types, vec!["ICE"]);
    }

    #[test]
    fn test_form_key_name() {
        let key = CanonicalKey::new("TAUROS", Some("PALDEAN_FIRE"));
        let parsed = parse_base_data("tauros_paldean_fire.asm", &key, "\tdb TYPE_FIGHTING, TYPE_FIRE\n");
        assert_eq!(parsed.records.name, "Tauros-paldean_fire");
    }
}
