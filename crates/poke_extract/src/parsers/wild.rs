//! Wild encounter tables.
//!
//! ```text
//! def_grass_wildmons ROUTE_29
//!     db 10 percent, 10 percent, 10 percent ; encounter rates: morn/day/nite
//!     ; morn
//!     wildmon 2, PIDGEY
//!     ...
//! end_grass_wildmons
//! ```
//!
//! Entries are grouped by (area, method, time) so each one can also carry
//! its slot share from [`crate::rates`].

use log::debug;

use crate::error::{parse_int, LineError};
use crate::models::{SpeciesMap, WildEncounter};
use crate::names::{title_case, CanonicalKey};
use crate::rates::map_encounter_rates;
use crate::scan::{scan, Grammar, Line};
use crate::tables::{ENCOUNTER_METHOD_NAMES, TIMES_OF_DAY};

use super::Parsed;

/// Time recorded for entries not preceded by a time-of-day marker.
pub const ANY_TIME: &str = "any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Outside,
    InTable,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Open { method: &'a str, area: &'a str },
    Close(&'a str),
    Rates(Vec<u8>),
    Time(&'a str),
    Wildmon {
        level: u32,
        species: &'a str,
        form: Option<&'a str>,
    },
    Other,
}

/// Encounter rates of the open table, one per time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaRates(Vec<u8>);

impl AreaRates {
    /// `morn`, `day`, `nite` from the first three rates; `eve` only when a
    /// fourth is given. A single rate applies to every time.
    pub fn for_time(&self, time: &str) -> u8 {
        let rates = &self.0;
        if let [rate] = rates.as_slice() {
            return *rate;
        }
        let index = match time {
            "morn" | ANY_TIME => 0,
            "day" => 1,
            "nite" => 2,
            "eve" => 3,
            _ => return 0,
        };
        rates.get(index).copied().unwrap_or(0)
    }
}

fn parse_rates(operands: &[&str]) -> Result<Vec<u8>, LineError> {
    let rates = operands
        .iter()
        .map(|operand| {
            operand
                .strip_suffix("percent")
                .and_then(|n| n.trim().parse().ok())
                .filter(|rate: &u8| *rate <= 100)
                .ok_or_else(|| LineError::Rate(operand.to_string()))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    match rates.len() {
        1 | 3 | 4 => Ok(rates),
        found => Err(LineError::Arity {
            keyword: "db".to_string(),
            expected: "1, 3 or 4",
            found,
        }),
    }
}

fn table_method<'a>(keyword: &'a str, prefix: &str) -> Option<&'a str> {
    keyword
        .strip_prefix(prefix)?
        .strip_suffix("_wildmons")
        .filter(|method| !method.is_empty())
}

struct Table {
    area: String,
    method: String,
}

#[derive(Default)]
pub struct WildTables {
    table: Option<Table>,
    rates: AreaRates,
    time: Option<String>,
    /// Entries of the current (area, method, time) slot group.
    group: Vec<(CanonicalKey, WildEncounter)>,
    encounters: SpeciesMap<Vec<WildEncounter>>,
}

impl WildTables {
    fn flush_group(&mut self) {
        let Some(table) = &self.table else {
            self.group.clear();
            return;
        };
        let species: Vec<String> = self.group.iter().map(|(key, _)| key.to_string()).collect();
        let shares = map_encounter_rates(&species, &table.method);
        for ((key, mut encounter), share) in self.group.drain(..).zip(shares) {
            encounter.slot_chance = share;
            self.encounters.entry(key).or_default().push(encounter);
        }
    }

    fn open(&mut self, method: &str, area: &str) {
        self.table = Some(Table {
            area: area.to_string(),
            method: method.to_string(),
        });
        self.rates = AreaRates::default();
        self.time = None;
    }

    pub fn into_encounters(self) -> SpeciesMap<Vec<WildEncounter>> {
        self.encounters
    }
}

impl Grammar for WildTables {
    type Mode = Mode;
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(comment) = line.comment_only() {
            let marker = comment.trim();
            let time = TIMES_OF_DAY
                .iter()
                .copied()
                .find(|t| marker.eq_ignore_ascii_case(t));
            return Ok(match time {
                Some(time) => Kind::Time(time),
                None => Kind::Other,
            });
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        if let Some(method) = table_method(directive.keyword, "def_") {
            return match directive.operands().as_slice() {
                [area] if !area.is_empty() => Ok(Kind::Open { method, area: *area }),
                operands => Err(LineError::Arity {
                    keyword: directive.keyword.to_string(),
                    expected: "1",
                    found: operands.len(),
                }),
            };
        }
        if let Some(method) = table_method(directive.keyword, "end_") {
            return Ok(Kind::Close(method));
        }
        match directive.keyword {
            "db" if directive.operands.contains("percent") => {
                parse_rates(&directive.operands()).map(Kind::Rates)
            }
            "wildmon" => match directive.operands().as_slice() {
                [level, species] => Ok(Kind::Wildmon {
                    level: parse_int(level)?,
                    species: *species,
                    form: None,
                }),
                [level, species, form, ..] => Ok(Kind::Wildmon {
                    level: parse_int(level)?,
                    species: *species,
                    form: Some(*form).filter(|f| !f.is_empty()),
                }),
                operands => Err(LineError::Arity {
                    keyword: "wildmon".to_string(),
                    expected: "2 or 3",
                    found: operands.len(),
                }),
            },
            _ => Ok(Kind::Other),
        }
    }

    fn transition(&mut self, mode: Mode, kind: Kind<'_>) -> Result<Mode, LineError> {
        Ok(match (mode, kind) {
            (Mode::InTable, Kind::Open { method, area }) => {
                debug!("`def_{method}_wildmons {area}` opened before the previous table closed");
                self.flush_group();
                self.open(method, area);
                Mode::InTable
            }
            (Mode::Outside, Kind::Open { method, area }) => {
                self.open(method, area);
                Mode::InTable
            }
            (Mode::InTable, Kind::Close(method)) => {
                let open = self.table.as_ref().map(|t| t.method.as_str()).unwrap_or_default();
                if open != method {
                    return Err(LineError::MismatchedTable {
                        open: open.to_string(),
                        close: method.to_string(),
                    });
                }
                self.flush_group();
                self.table = None;
                Mode::Outside
            }
            (Mode::Outside, Kind::Close(method)) => {
                return Err(LineError::Orphan(format!("end_{method}_wildmons")))
            }
            (Mode::InTable, Kind::Rates(rates)) => {
                self.rates = AreaRates(rates);
                Mode::InTable
            }
            (Mode::InTable, Kind::Time(time)) => {
                if self.time.as_deref() != Some(time) {
                    self.flush_group();
                    self.time = Some(time.to_string());
                }
                Mode::InTable
            }
            (Mode::InTable, Kind::Wildmon { level, species, form }) => {
                let Some(table) = &self.table else {
                    return Ok(Mode::Outside);
                };
                let time = self.time.as_deref().unwrap_or(ANY_TIME);
                let encounter = WildEncounter {
                    area: title_case(&table.area),
                    method: ENCOUNTER_METHOD_NAMES
                        .get(table.method.as_str())
                        .map_or_else(|| table.method.clone(), |name| (*name).to_string()),
                    time: time.to_string(),
                    level: level.to_string(),
                    chance: self.rates.for_time(time),
                    rare_item: None,
                    slot_chance: 0,
                };
                self.group.push((CanonicalKey::new(species, form), encounter));
                Mode::InTable
            }
            (Mode::Outside, Kind::Wildmon { .. }) => {
                return Err(LineError::Orphan("wildmon".to_string()))
            }
            (mode, _) => mode,
        })
    }

    fn finish(&mut self, _mode: Mode) {
        self.flush_group();
    }
}

pub fn parse_wild(origin: &str, text: &str) -> Parsed<SpeciesMap<Vec<WildEncounter>>> {
    let mut grammar = WildTables::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.into_encounters(),
        report,
    }
}
