//! poke_extract - Species data extraction from disassembly sources
//!
//! Reads pokecrystal-style `.asm` data files (name tables, description
//! blocks, evolution and move lists, wild encounter tables, dex text and
//! per-species stat files) and produces JSON-ready records keyed by
//! display name.
//!
//! Every parser is a line-oriented [`scan::Grammar`]; malformed lines are
//! reported and skipped without losing the rest of the file.

/// Name normalization and canonical species keys
pub mod names;

/// Static lookup tables
pub mod tables;

/// Encounter slot percentages
pub mod rates;

/// Output record types
pub mod models;

/// Line lexer and scanning state machine
pub mod scan;

/// Per-domain source parsers
pub mod parsers;

/// Source and output paths
pub mod config;

/// Source file access
pub mod source;

/// Whole-tree extraction and output
pub mod aggregate;

pub mod error;

pub use aggregate::{extract_all, write_outputs, Domain, Extraction, Style};
pub use config::{Layout, OutputLayout, SourceLayout};
pub use error::{ExtractError, LineError, Result};
pub use names::{normalize_name, CanonicalKey, Form};
pub use rates::map_encounter_rates;
