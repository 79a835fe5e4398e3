//! Ability names and descriptions.
//!
//! The names file lists identifiers in order (`dw StenchName`) and defines
//! each one (`StenchName: rawchar "Stench@"`), or lists the names directly
//! (`li "STENCH"`). Descriptions come from [`super::descriptions`].

use std::collections::{BTreeMap, HashMap};

use heck::ToTitleCase;

use crate::error::LineError;
use crate::models::AbilityRecord;
use crate::names::{compact_key, title_case};
use crate::scan::{scan, Grammar, Line};
use crate::tables::SHARED_ABILITY_DESCRIPTIONS;

use super::Parsed;

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    /// `dw StenchName`
    Entry(&'a str),
    /// `li "STENCH"`
    Literal(&'a str),
    /// `Label:` with nothing after it.
    Label(&'a str),
    /// `rawchar "Stench@"` / `db "Stench@"`, optionally on a label line.
    Definition {
        label: Option<&'a str>,
        text: &'a str,
    },
    Other,
}

enum Name {
    Id(String),
    Literal(String),
}

/// Ordered identifier table with its string definitions.
#[derive(Default)]
pub struct NameTable {
    order: Vec<Name>,
    definitions: HashMap<String, String>,
    pending: Option<String>,
}

impl NameTable {
    /// Display names in table order.
    pub fn names(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|name| match name {
                Name::Literal(text) => text.clone(),
                Name::Id(id) => self
                    .definitions
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| fallback_name(id)),
            })
            .collect()
    }
}

/// `BattleArmorName` -> `Battle Armor`.
fn fallback_name(id: &str) -> String {
    let stem = id.strip_suffix("Name").filter(|s| !s.is_empty()).unwrap_or(id);
    stem.to_title_case()
}

impl Grammar for NameTable {
    type Mode = ();
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        let label = line.label.map(|l| l.name);
        let Some(directive) = line.directive else {
            return Ok(label.map_or(Kind::Other, Kind::Label));
        };
        Ok(match directive.keyword {
            "dw" if label.is_none() => match directive.operands().as_slice() {
                [id] if !id.is_empty() => Kind::Entry(*id),
                operands => {
                    return Err(LineError::Arity {
                        keyword: "dw".to_string(),
                        expected: "1",
                        found: operands.len(),
                    })
                }
            },
            "li" => match directive.string() {
                Some(text) => Kind::Literal(text),
                None => Kind::Other,
            },
            "rawchar" | "db" => match directive.string() {
                Some(text) => Kind::Definition { label, text },
                None => Kind::Other,
            },
            _ => Kind::Other,
        })
    }

    fn transition(&mut self, _mode: (), kind: Kind<'_>) -> Result<(), LineError> {
        match kind {
            Kind::Entry(id) => self.order.push(Name::Id(id.to_string())),
            Kind::Literal(text) => self.order.push(Name::Literal(text.to_string())),
            Kind::Label(name) => self.pending = Some(name.to_string()),
            Kind::Definition { label, text } => {
                let owner = label.map(str::to_string).or_else(|| self.pending.take());
                if let Some(owner) = owner {
                    self.definitions.insert(owner, text.to_string());
                }
            }
            Kind::Other => {}
        }
        Ok(())
    }
}

pub fn parse_names(origin: &str, text: &str) -> Parsed<Vec<String>> {
    let mut grammar = NameTable::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.names(),
        report,
    }
}

/// Key an ability display name the way every domain refers to it:
/// `BATTLE ARMOR`, `Battle Armor` and `BATTLE_ARMOR` all give `Battle Armor`.
pub fn ability_key(name: &str) -> String {
    let shouty: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    title_case(&shouty).trim().to_string()
}

/// Join ordered names with description blocks, then copy each alias
/// group's description onto its members.
pub fn build_abilities(
    names: &[String],
    descriptions: &BTreeMap<String, String>,
) -> BTreeMap<String, AbilityRecord> {
    let mut abilities: BTreeMap<String, AbilityRecord> = names
        .iter()
        .map(|name| {
            let description = descriptions
                .get(&compact_key(name))
                .cloned()
                .unwrap_or_default();
            (ability_key(name), AbilityRecord { description })
        })
        .collect();
    apply_aliases(&mut abilities);
    abilities
}

/// Aliases of a missing canonical entry are left alone.
pub fn apply_aliases(abilities: &mut BTreeMap<String, AbilityRecord>) {
    for (canonical, aliases) in SHARED_ABILITY_DESCRIPTIONS {
        let Some(record) = abilities.get(*canonical).cloned() else {
            continue;
        };
        for alias in *aliases {
            abilities.insert((*alias).to_string(), record.clone());
        }
    }
}
