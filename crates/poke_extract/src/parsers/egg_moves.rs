//! Egg move lists, one species per file.
//!
//! The owner comes from the file stem, or from an `XEggMoves:` label when
//! the stem is not a plain identifier. Files with neither are skipped.

use log::warn;

use crate::error::LineError;
use crate::names::CanonicalKey;
use crate::scan::{scan, Grammar, Line};

use super::{move_name, owner_from_label, owner_from_stem, Parsed};

const LABEL_SUFFIX: &str = "EggMoves";

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Header(&'a str),
    Move(&'a str),
    Other,
}

fn is_move_token(token: &str) -> bool {
    !token.is_empty()
        && !token.starts_with('$')
        && !token.starts_with('"')
        && token.parse::<i64>().is_err()
}

#[derive(Default)]
pub struct EggMoves {
    label_owner: Option<CanonicalKey>,
    moves: Vec<String>,
}

impl Grammar for EggMoves {
    type Mode = ();
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(stem) = line.label.and_then(|l| l.name.strip_suffix(LABEL_SUFFIX)) {
            if !stem.is_empty() {
                return Ok(Kind::Header(stem));
            }
        }
        Ok(match line.directive("db").map(|d| d.operands()).as_deref() {
            Some([token]) if is_move_token(token) => Kind::Move(*token),
            _ => Kind::Other,
        })
    }

    fn transition(&mut self, _mode: (), kind: Kind<'_>) -> Result<(), LineError> {
        match kind {
            Kind::Header(stem) => {
                if self.label_owner.is_none() {
                    self.label_owner = Some(owner_from_label(stem));
                }
            }
            Kind::Move(token) => self.moves.push(move_name(token)),
            Kind::Other => {}
        }
        Ok(())
    }
}

/// Owner and moves of one file. `None` when the owner cannot be
/// determined or the list is empty.
pub fn parse_egg_moves(
    origin: &str,
    stem: &str,
    text: &str,
) -> Parsed<Option<(CanonicalKey, Vec<String>)>> {
    let mut grammar = EggMoves::default();
    let report = scan(&mut grammar, origin, text);

    let owner = owner_from_stem(stem).or(grammar.label_owner);
    let records = match owner {
        None => {
            warn!("{origin}: cannot determine the owning species, skipping");
            None
        }
        Some(_) if grammar.moves.is_empty() => None,
        Some(owner) => Some((owner, grammar.moves)),
    };
    Parsed { records, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_from_stem() {
        let parsed = parse_egg_moves(
            "rattata_alolan.asm",
            "rattata_alolan",
            "\tdb COUNTER\n\tdb FINAL_GAMBIT\n\tdb $ff\n\tdb -1\n",
        );
        let (owner, moves) = parsed.records.unwrap();
        assert_eq!(owner.to_string(), "Rattata (Alolan)");
        assert_eq!(moves, vec!["COUNTER", "FINAL GAMBIT"]);
    }

    #[test]
    fn test_owner_from_label() {
        let parsed = parse_egg_moves(
            "mr. mime.asm",
            "mr. mime",
            "MrMimeEggMoves:\n\tdb FUTURE_SIGHT\n\tdb HYPNOSIS\n\tdb FUTURE_SIGHT\n",
        );
        let (owner, moves) = parsed.records.unwrap();
        assert_eq!(owner, CanonicalKey::new("MR__MIME", None));
        assert_eq!(owner.to_string(), "Mr. Mime");
        assert_eq!(moves, vec!["FUTURE SIGHT", "HYPNOSIS", "FUTURE SIGHT"]);
    }

    #[test]
    fn test_unresolved_owner_skips_file() {
        let parsed = parse_egg_moves("weird file.asm", "weird file", "\tdb TACKLE\n");
        assert!(parsed.records.is_none());
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let parsed = parse_egg_moves("ditto.asm", "ditto", "\tdb -1 ; end\n");
        assert!(parsed.records.is_none());
    }
}
