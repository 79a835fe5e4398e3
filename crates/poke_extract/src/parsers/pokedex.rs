//! Pokédex entries.
//!
//! ```text
//! BulbasaurPokedexEntry::
//!     db "SEED@" ; species
//!     dw 204, 150 ; height, weight
//!     db   "While it is"
//!     next "young, it uses"
//!     page "the nutrients..."
//!     db 0
//! ```

use log::debug;

use crate::error::LineError;
use crate::models::{PokedexEntry, SpeciesMap};
use crate::names::CanonicalKey;
use crate::scan::{scan, Grammar, Line, TextBuffer};

use super::{owner_from_label, Parsed};

const LABEL_SUFFIX: &str = "PokedexEntry";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Entry,
    Text,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Header(&'a str),
    Species(&'a str),
    /// Height and weight; recognised and discarded.
    Measure(&'a str),
    Begin(&'a str),
    Continue(&'a str),
    End,
    Other,
}

#[derive(Default)]
pub struct PokedexEntries {
    current: Option<CanonicalKey>,
    species: String,
    text: TextBuffer,
    entries: SpeciesMap<PokedexEntry>,
}

impl PokedexEntries {
    /// Later entries for the same key replace earlier ones.
    fn emit(&mut self) {
        let description = self.text.take();
        let species = std::mem::take(&mut self.species);
        let Some(key) = self.current.take() else {
            return;
        };
        if description.is_empty() {
            return;
        }
        self.entries.insert(key, PokedexEntry { description, species });
    }
}

impl Grammar for PokedexEntries {
    type Mode = Mode;
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(stem) = line.label.and_then(|l| l.name.strip_suffix(LABEL_SUFFIX)) {
            if !stem.is_empty() {
                return Ok(Kind::Header(stem));
            }
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        let comment = line.comment.unwrap_or_default().to_ascii_lowercase();
        Ok(match directive.keyword {
            "db" | "dw" if directive.is_terminator() => Kind::End,
            "dw" if comment.contains("height") || comment.contains("weight") => {
                Kind::Measure(directive.operands)
            }
            "db" => match directive.string() {
                Some(text) if comment.contains("species") => Kind::Species(text),
                Some(text) => Kind::Begin(text),
                None => Kind::Other,
            },
            "next" | "page" => match directive.string() {
                Some(text) => Kind::Continue(text),
                None => Kind::Other,
            },
            "done" => Kind::End,
            _ => Kind::Other,
        })
    }

    fn transition(&mut self, mode: Mode, kind: Kind<'_>) -> Result<Mode, LineError> {
        Ok(match (mode, kind) {
            (_, Kind::Header(stem)) => {
                self.emit();
                self.current = Some(owner_from_label(stem));
                Mode::Entry
            }
            (Mode::Idle, Kind::Begin(_) | Kind::Species(_)) => {
                return Err(LineError::Orphan("db".to_string()))
            }
            (mode, Kind::Species(species)) => {
                self.species = species.to_string();
                mode
            }
            (mode, Kind::Measure(values)) => {
                debug!("Discarding height/weight `{values}`");
                mode
            }
            (Mode::Entry | Mode::Text, Kind::Begin(text)) => {
                self.text.begin(text);
                Mode::Text
            }
            (Mode::Text, Kind::Continue(text)) => {
                self.text.push(text);
                Mode::Text
            }
            (Mode::Text, Kind::End) => {
                self.text.close();
                Mode::Entry
            }
            (mode, _) => mode,
        })
    }

    fn finish(&mut self, _mode: Mode) {
        self.emit();
    }
}

pub fn parse_pokedex(origin: &str, text: &str) -> Parsed<SpeciesMap<PokedexEntry>> {
    let mut grammar = PokedexEntries::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.entries,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIO: &str = "\
BulbasaurPokedexEntry::
\tdb \"SEED@\" ; species name
\tdw 204, 150 ; height, weight
\tdb   \"While it is\"
\tnext \"young, it uses\"
\tpage \"the nutrients.@\"
\tdb 0

RattataAlolanPokedexEntry::
\tdb \"MOUSE@\" ; species name
\tdb \"Its whiskers\"
\tnext \"sense danger.\"
";

    #[test]
    fn test_entries() {
        let parsed = parse_pokedex("bio.asm", BIO);
        assert!(parsed.report.is_clean());
        let bulbasaur = &parsed.records[&CanonicalKey::new("BULBASAUR", None)];
        assert_eq!(bulbasaur.species, "SEED");
        assert_eq!(bulbasaur.description, "While it is young, it uses the nutrients.");

        let rattata = &parsed.records[&CanonicalKey::new("RATTATA", Some("ALOLAN"))];
        assert_eq!(rattata.species, "MOUSE");
        assert_eq!(rattata.description, "Its whiskers sense danger.");
    }

    #[test]
    fn test_newest_entry_wins() {
        let parsed = parse_pokedex(
            "bio.asm",
            "PikachuPokedexEntry::\n\tdb \"OLD\"\n\tdb 0\nPikachuPokedexEntry::\n\tdb \"MOUSE@\" ; species\n\tdb \"New text.\"\n\tdb 0\n",
        );
        let pikachu = &parsed.records[&CanonicalKey::new("PIKACHU", None)];
        assert_eq!(pikachu.description, "New text.");
        assert_eq!(pikachu.species, "MOUSE");
    }

    #[test]
    fn test_entry_without_text_is_dropped() {
        let parsed = parse_pokedex("bio.asm", "MissingnoPokedexEntry::\n\tdb \"???@\" ; species\n");
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_text_after_terminator_is_ignored() {
        let parsed = parse_pokedex(
            "bio.asm",
            "AbraPokedexEntry::\n\tdb \"Sleeps.\"\n\tdb 0\n\tnext \"stray\"\n",
        );
        assert_eq!(parsed.records[&CanonicalKey::new("ABRA", None)].description, "Sleeps.");
    }
}
