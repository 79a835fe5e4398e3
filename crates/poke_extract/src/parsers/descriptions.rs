//! Labeled text blocks shared by ability and move descriptions.
//!
//! ```text
//! BattleArmorDescription:
//! ShellArmorDescription:
//!     text "Blocks critical"
//!     next "hits."
//!     done
//! ```
//!
//! Every label gathered before the first `text` line names the same
//! block. Output is keyed by the compact form of the label without its
//! `Description` suffix.

use std::collections::BTreeMap;

use crate::error::LineError;
use crate::names::compact_key;
use crate::scan::{scan, Grammar, Line, TextBuffer};

use super::Parsed;

const LABEL_SUFFIX: &str = "Description";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Labels gathered, no text yet.
    Labels,
    Text,
    /// After `done`; the next label starts a new group.
    Closed,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Kind<'a> {
    Label(&'a str),
    Begin(&'a str),
    Continue(&'a str),
    End,
    Other,
}

#[derive(Debug, Default)]
pub struct DescriptionBlocks {
    labels: Vec<String>,
    buffer: TextBuffer,
    blocks: BTreeMap<String, String>,
}

impl DescriptionBlocks {
    fn emit(&mut self) {
        let text = self.buffer.take();
        for label in &self.labels {
            self.blocks.insert(label.clone(), text.clone());
        }
    }

    fn start_group(&mut self, label: &str) {
        self.labels.clear();
        self.labels.push(compact_key(label));
    }

    pub fn into_blocks(self) -> BTreeMap<String, String> {
        self.blocks
    }
}

impl Grammar for DescriptionBlocks {
    type Mode = Mode;
    type Kind<'a> = Kind<'a>;

    fn classify<'a>(&self, line: &Line<'a>) -> Result<Kind<'a>, LineError> {
        if let Some(label) = line.label {
            return Ok(match label.name.strip_suffix(LABEL_SUFFIX) {
                Some(name) if !name.is_empty() => Kind::Label(name),
                _ => Kind::Other,
            });
        }
        let Some(directive) = line.directive else {
            return Ok(Kind::Other);
        };
        Ok(match directive.keyword {
            "text" => Kind::Begin(directive.string().unwrap_or_default()),
            "next" | "line" | "cont" => Kind::Continue(directive.string().unwrap_or_default()),
            "done" | "text_end" => Kind::End,
            _ => Kind::Other,
        })
    }

    fn transition(&mut self, mode: Mode, kind: Kind<'_>) -> Result<Mode, LineError> {
        Ok(match (mode, kind) {
            (Mode::Labels, Kind::Label(name)) => {
                self.labels.push(compact_key(name));
                Mode::Labels
            }
            (Mode::Text, Kind::Label(name)) => {
                self.emit();
                self.start_group(name);
                Mode::Labels
            }
            (_, Kind::Label(name)) => {
                self.start_group(name);
                Mode::Labels
            }
            (Mode::Labels, Kind::Begin(text)) => {
                self.buffer.begin(text);
                Mode::Text
            }
            (Mode::Text, Kind::Begin(text)) => {
                self.emit();
                self.buffer.begin(text);
                Mode::Text
            }
            (Mode::Idle | Mode::Closed, Kind::Begin(_)) => {
                return Err(LineError::Orphan("text".to_string()))
            }
            (Mode::Text, Kind::Continue(text)) => {
                self.buffer.push(text);
                Mode::Text
            }
            (Mode::Text, Kind::End) => {
                self.emit();
                Mode::Closed
            }
            (mode, _) => mode,
        })
    }

    fn finish(&mut self, mode: Mode) {
        if mode == Mode::Text {
            self.emit();
        }
    }
}

/// Description text per compact label.
pub fn parse_descriptions(origin: &str, text: &str) -> Parsed<BTreeMap<String, String>> {
    let mut grammar = DescriptionBlocks::default();
    let report = scan(&mut grammar, origin, text);
    Parsed {
        records: grammar.into_blocks(),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(text: &str) -> BTreeMap<String, String> {
        parse_descriptions("descriptions.asm", text).records
    }

    #[test]
    fn test_single_block() {
        let parsed = blocks("SHELLARMORDescription:\n\ttext \"foo\"\n\tnext \"bar\"\n\tdone\n");
        assert_eq!(parsed.get("SHELLARMOR").map(String::as_str), Some("foo bar"));
    }

    #[test]
    fn test_multi_label_block() {
        let parsed = blocks(
            "BattleArmorDescription:\nShellArmorDescription:\n\ttext \"Blocks critical\"\n\tnext \"hits.\"\n\tdone\n",
        );
        assert_eq!(parsed["BATTLEARMOR"], "Blocks critical hits.");
        assert_eq!(parsed["SHELLARMOR"], "Blocks critical hits.");
    }

    #[test]
    fn test_label_while_collecting_flushes() {
        let parsed = blocks("StenchDescription:\n\ttext \"May cause\"\n\tnext \"flinching.\"\nDrizzleDescription:\n\ttext \"Summons rain.\"\n");
        assert_eq!(parsed["STENCH"], "May cause flinching.");
        assert_eq!(parsed["DRIZZLE"], "Summons rain.");
    }

    #[test]
    fn test_groups_do_not_leak() {
        let parsed = blocks(
            "ADescription:\n\ttext \"a\"\n\tdone\nBDescription:\n\ttext \"b\"\n\tdone\n",
        );
        assert_eq!(parsed["A"], "a");
        assert_eq!(parsed["B"], "b");
    }

    #[test]
    fn test_text_without_label_is_reported() {
        let parsed = parse_descriptions("descriptions.asm", "\ttext \"stray\"\n\tdone\n");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.report.issues.len(), 1);
    }

    #[test]
    fn test_text_after_done_keeps_previous_block() {
        let parsed = parse_descriptions(
            "descriptions.asm",
            "PoundDescription:\n\ttext \"Pounds the foe.\"\n\tdone\n\ttext \"stray\"\n\tdone\n",
        );
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records["POUND"], "Pounds the foe.");
        let lines: Vec<usize> = parsed.report.issues.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![4]);
    }

    #[test]
    fn test_transitions() {
        let mut grammar = DescriptionBlocks::default();
        assert_eq!(grammar.transition(Mode::Idle, Kind::Label("X")), Ok(Mode::Labels));
        assert_eq!(grammar.transition(Mode::Labels, Kind::Label("Y")), Ok(Mode::Labels));
        assert_eq!(grammar.transition(Mode::Labels, Kind::Continue("z")), Ok(Mode::Labels));
        assert_eq!(grammar.transition(Mode::Labels, Kind::Begin("t")), Ok(Mode::Text));
        assert_eq!(grammar.transition(Mode::Text, Kind::End), Ok(Mode::Closed));
        assert_eq!(grammar.transition(Mode::Closed, Kind::End), Ok(Mode::Closed));
        assert!(grammar.transition(Mode::Closed, Kind::Begin("u")).is_err());
        assert_eq!(grammar.into_blocks().len(), 2);
    }
}
