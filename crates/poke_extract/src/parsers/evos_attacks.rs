//! Evolutions and level-up moves from `evos_attacks` blocks.
//!
//! ```text
//! RattataEvosAttacks:
//!     evo_data EVOLVE_LEVEL, 20, RATICATE
//!     db 0 ; no more evolutions
//!     db 1, TACKLE
//!     db 4, TAIL_WHIP
//!     db 0 ; no more level-up moves
//! ```
//!
//! One scan yields both views. Level-up move lines are only recognised
//! after the evolution terminator of the current block.

use crate::error::{parse_int, LineError};
use crate::models::{EvoParameter, EvolutionMethod, EvolutionRecord, LevelUpMove, SpeciesMap};
use crate::names::CanonicalKey;
use crate::scan::{scan, Grammar, Line};
use crate::tables::EVOLUTION_METHODS;

use super::{move_name, owner_from_label, Parsed};

const LABEL_SUFFIX: &str = "EvosAttacks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Evolutions,
    Moves,
    Done,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Header(&'a str),
    Evolution(EvolutionMethod),
    /// `db 0`
    Terminator,
    /// `db 0 ; no more level-up moves`
    EndMoves,
    LevelMove(u32, &'a str),
    Other,
}

/// Display string for an `EVOLVE_*` token.
pub fn evolution_method(token: &str) -> String {
    match EVOLUTION_METHODS.get(token) {
        Some(name) => (*name).to_string(),
        None => token.strip_prefix("EVOLVE_").unwrap_or(token).to_string(),
    }
}

/// `evo_data METHOD, TARGET`, `evo_data METHOD, PARAM, TARGET[, FORM]`.
pub fn parse_evo_data(operands: &[&str]) -> Result<EvolutionMethod, LineError> {
    let (method, parameter, target, form) = match operands {
        [method, target] => (method, None, target, None),
        [method, parameter, target] => (method, Some(parameter), target, None),
        [method, parameter, target, form, ..] => (method, Some(parameter), target, Some(form)),
        _ => {
            return Err(LineError::Arity {
                keyword: "evo_data".to_string(),
                expected: "2 to 4",
                found: operands.len(),
            })
        }
    };
    if method.is_empty() || target.is_empty() {
        return Err(LineError::Arity {
            keyword: "evo_data".to_string(),
            expected: "2 to 4",
            found: operands.iter().filter(|o| !o.is_empty()).count(),
        });
    }
    Ok(EvolutionMethod {
        method: evolution_method(method),
        parameter: parameter.map(|p| EvoParameter::parse(p)),
        target: target.to_string(),
        form: form.filter(|f| !f.is_empty()).map(|f| f.to_string()),
    })
}

#[derive(Debug, Default)]
pub struct EvosAttacks {
    current: Option<CanonicalKey>,
    evolutions: SpeciesMap<Vec<EvolutionRecord>>,
    moves: SpeciesMap<Vec<LevelUpMove>>,
}

impl EvosAttacks {
    pub fn into_parts(self) -> (SpeciesMap<Vec<EvolutionRecord>>, SpeciesMap<Vec<LevelUpMove>>) {
        (self.evolutions, self.moves)
    }
}

impl Grammar for EvosAttacks {
    type Mode = Mode;
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(label) = line.label {
            if let Some(stem) = label.name.strip_suffix(LABEL_SUFFIX) {
                if !stem.is_empty() {
                    return Ok(Kind::Header(stem));
                }
            }
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        match directive.keyword {
            "evo_data" => parse_evo_data(&directive.operands()).map(Kind::Evolution),
            "db" if directive.is_terminator() => {
                let ends_moves = line
                    .comment
                    .is_some_and(|c| c.to_ascii_lowercase().contains("level-up moves"));
                Ok(if ends_moves { Kind::EndMoves } else { Kind::Terminator })
            }
            "db" => match directive.operands().as_slice() {
                [level, token] => Ok(Kind::LevelMove(parse_int(level)?, *token)),
                _ => Ok(Kind::Other),
            },
            _ => Ok(Kind::Other),
        }
    }

    fn transition(&mut self, mode: Mode, kind: Kind<'_>) -> Result<Mode, LineError> {
        Ok(match (mode, kind) {
            (_, Kind::Header(stem)) => {
                self.current = Some(owner_from_label(stem));
                Mode::Evolutions
            }
            (Mode::Evolutions, Kind::Evolution(method)) => {
                if let Some(key) = &self.current {
                    let chain = vec![CanonicalKey::new(&method.target, method.form.as_deref())];
                    self.evolutions
                        .entry(key.clone())
                        .or_default()
                        .push(EvolutionRecord {
                            methods: vec![method],
                            chain,
                        });
                }
                Mode::Evolutions
            }
            (Mode::Evolutions, Kind::Terminator | Kind::EndMoves) => {
                if let Some(key) = &self.current {
                    self.moves.entry(key.clone()).or_default();
                }
                Mode::Moves
            }
            (Mode::Moves, Kind::LevelMove(level, token)) => {
                if let Some(key) = &self.current {
                    self.moves.entry(key.clone()).or_default().push(LevelUpMove {
                        name: move_name(token),
                        level,
                    });
                }
                Mode::Moves
            }
            (Mode::Moves, Kind::Terminator | Kind::EndMoves) => Mode::Done,
            (Mode::Idle, Kind::Evolution(_)) => {
                return Err(LineError::Orphan("evo_data".to_string()))
            }
            (mode, _) => mode,
        })
    }
}

pub struct EvosAttacksData {
    pub evolutions: SpeciesMap<Vec<EvolutionRecord>>,
    pub moves: SpeciesMap<Vec<LevelUpMove>>,
}

pub fn parse_evos_attacks(origin: &str, text: &str) -> Parsed<EvosAttacksData> {
    let mut grammar = EvosAttacks::default();
    let report = scan(&mut grammar, origin, text);
    let (evolutions, moves) = grammar.into_parts();
    Parsed {
        records: EvosAttacksData { evolutions, moves },
        report,
    }
}
