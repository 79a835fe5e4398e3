//! Runs the domain parsers over a source tree and persists their output.
//!
//! Each `extract_*` function is independent: a missing or unreadable
//! source yields an empty map for that domain and the run continues.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{Layout, OutputLayout, SourceLayout};
use crate::error::{ExtractError, Result};
use crate::models::{
    AbilityRecord, BaseDataRecord, DetailedStats, EvolutionRecord, LevelUpMove, MoveRecord,
    PokedexEntry, SpeciesMap, WildEncounter,
};
use crate::parsers::evos_attacks::EvosAttacksData;
use crate::parsers::{
    abilities, base_data, base_stats, descriptions, egg_moves, evos_attacks, grottoes, moves,
    owner_from_stem, pokedex, wild, Parsed,
};
use crate::source::{asm_files_or_warn, file_stem, origin, read_or_warn};

/// Pointer table living next to the per-species evos/attacks files.
const EVOS_ATTACKS_TABLE: &str = "evos_attacks.asm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    Abilities,
    Moves,
    Evolutions,
    LevelMoves,
    EggMoves,
    Locations,
    Pokedex,
    BaseData,
    DetailedStats,
}

impl Domain {
    /// Extraction order.
    pub const ALL: [Domain; 9] = [
        Domain::Abilities,
        Domain::Moves,
        Domain::Evolutions,
        Domain::LevelMoves,
        Domain::EggMoves,
        Domain::Locations,
        Domain::Pokedex,
        Domain::BaseData,
        Domain::DetailedStats,
    ];

    /// Key in the combined output.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Abilities => "abilities",
            Domain::Moves => "moves",
            Domain::Evolutions => "evolutions",
            Domain::LevelMoves => "levelMoves",
            Domain::EggMoves => "eggMoves",
            Domain::Locations => "locations",
            Domain::Pokedex => "pokedexEntries",
            Domain::BaseData => "baseData",
            Domain::DetailedStats => "detailedStats",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = String;

    /// Accepts the combined-output name in any case, with or without
    /// separators (`levelMoves`, `level_moves`, `level-moves`).
    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let wanted: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Domain::ALL
            .into_iter()
            .find(|domain| domain.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Domain::ALL.iter().map(|d| d.name()).collect();
                format!("unknown domain `{raw}` (expected one of: {})", names.join(", "))
            })
    }
}

fn take_records<T>(parsed: Parsed<T>, issues: &mut usize) -> T {
    *issues += parsed.report.issues.len();
    parsed.records
}

pub fn extract_abilities(root: &Path, layout: &SourceLayout) -> BTreeMap<String, AbilityRecord> {
    let names_path = root.join(&layout.ability_names);
    let Some(names) = read_or_warn(&names_path) else {
        return BTreeMap::new();
    };
    let names = abilities::parse_names(&origin(&names_path), &names).records;

    let descriptions_path = root.join(&layout.ability_descriptions);
    let descriptions = read_or_warn(&descriptions_path)
        .map(|text| descriptions::parse_descriptions(&origin(&descriptions_path), &text).records)
        .unwrap_or_default();

    let records = abilities::build_abilities(&names, &descriptions);
    info!("Extracted {} ability descriptions", records.len());
    records
}

pub fn extract_moves(root: &Path, layout: &SourceLayout) -> BTreeMap<String, MoveRecord> {
    let names_path = root.join(&layout.move_names);
    let Some(names) = read_or_warn(&names_path) else {
        return BTreeMap::new();
    };
    let names = abilities::parse_names(&origin(&names_path), &names).records;

    let descriptions_path = root.join(&layout.move_descriptions);
    let descriptions = read_or_warn(&descriptions_path)
        .map(|text| descriptions::parse_descriptions(&origin(&descriptions_path), &text).records)
        .unwrap_or_default();

    let stats_path = root.join(&layout.move_stats);
    let stats = read_or_warn(&stats_path)
        .map(|text| moves::parse_stats(&origin(&stats_path), &text).records)
        .unwrap_or_default();

    let records = moves::build_moves(&names, &descriptions, &stats);
    info!("Extracted {} move descriptions", records.len());
    records
}

/// Evolutions and level-up moves from one pass over the evos/attacks files.
pub fn extract_evos_attacks(root: &Path, layout: &SourceLayout) -> EvosAttacksData {
    let mut data = EvosAttacksData {
        evolutions: SpeciesMap::new(),
        moves: SpeciesMap::new(),
    };
    let mut issues = 0;
    for path in asm_files_or_warn(&root.join(&layout.evos_attacks)) {
        if path.file_name().is_some_and(|name| name == EVOS_ATTACKS_TABLE) {
            continue;
        }
        let Some(text) = read_or_warn(&path) else {
            continue;
        };
        let parsed = evos_attacks::parse_evos_attacks(&origin(&path), &text);
        let parsed = take_records(parsed, &mut issues);
        for (key, records) in parsed.evolutions {
            data.evolutions.entry(key).or_default().extend(records);
        }
        for (key, records) in parsed.moves {
            data.moves.entry(key).or_default().extend(records);
        }
    }
    info!(
        "Extracted evolutions for {} species and level-up moves for {} species ({issues} lines skipped)",
        data.evolutions.len(),
        data.moves.len()
    );
    data
}

pub fn extract_evolutions(root: &Path, layout: &SourceLayout) -> SpeciesMap<Vec<EvolutionRecord>> {
    extract_evos_attacks(root, layout).evolutions
}

pub fn extract_level_moves(root: &Path, layout: &SourceLayout) -> SpeciesMap<Vec<LevelUpMove>> {
    extract_evos_attacks(root, layout).moves
}

pub fn extract_egg_moves(root: &Path, layout: &SourceLayout) -> SpeciesMap<Vec<String>> {
    let mut records = SpeciesMap::new();
    let mut issues = 0;
    for path in asm_files_or_warn(&root.join(&layout.egg_moves)) {
        let Some(text) = read_or_warn(&path) else {
            continue;
        };
        let parsed = egg_moves::parse_egg_moves(&origin(&path), file_stem(&path), &text);
        if let Some((owner, moves)) = take_records(parsed, &mut issues) {
            records.insert(owner, moves);
        }
    }
    info!("Extracted egg moves for {} species", records.len());
    records
}

/// Wild tables followed by Hidden Grotto slots.
pub fn extract_locations(root: &Path, layout: &SourceLayout) -> SpeciesMap<Vec<WildEncounter>> {
    let mut records: SpeciesMap<Vec<WildEncounter>> = SpeciesMap::new();
    let mut issues = 0;
    for path in asm_files_or_warn(&root.join(&layout.wild)) {
        let Some(text) = read_or_warn(&path) else {
            continue;
        };
        let parsed = wild::parse_wild(&origin(&path), &text);
        for (key, encounters) in take_records(parsed, &mut issues) {
            records.entry(key).or_default().extend(encounters);
        }
    }

    let grottoes_path = root.join(&layout.grottoes);
    if let Some(text) = read_or_warn(&grottoes_path) {
        let parsed = grottoes::parse_grottoes(&origin(&grottoes_path), &text);
        for (key, encounters) in take_records(parsed, &mut issues) {
            records.entry(key).or_default().extend(encounters);
        }
    }

    info!("Extracted locations for {} species ({issues} lines skipped)", records.len());
    records
}

pub fn extract_pokedex(root: &Path, layout: &SourceLayout) -> SpeciesMap<PokedexEntry> {
    let path = root.join(&layout.pokedex);
    let records = read_or_warn(&path)
        .map(|text| pokedex::parse_pokedex(&origin(&path), &text).records)
        .unwrap_or_default();
    info!("Extracted {} Pokédex entries", records.len());
    records
}

pub fn extract_base_data(root: &Path, layout: &SourceLayout) -> SpeciesMap<BaseDataRecord> {
    let mut records = SpeciesMap::new();
    for path in asm_files_or_warn(&root.join(&layout.base_data)) {
        let Some(key) = owner_from_stem(file_stem(&path)) else {
            warn!("{}: cannot determine the owning species, skipping", path.display());
            continue;
        };
        let Some(text) = read_or_warn(&path) else {
            continue;
        };
        let record = base_data::parse_base_data(&origin(&path), &key, &text).records;
        records.insert(key, record);
    }
    info!("Extracted base data for {} species", records.len());
    records
}

pub fn extract_detailed_stats(root: &Path, layout: &SourceLayout) -> SpeciesMap<DetailedStats> {
    let mut records = SpeciesMap::new();
    for path in asm_files_or_warn(&root.join(&layout.base_stats)) {
        let Some(key) = owner_from_stem(file_stem(&path)) else {
            warn!("{}: cannot determine the owning species, skipping", path.display());
            continue;
        };
        let Some(text) = read_or_warn(&path) else {
            continue;
        };
        records.insert(key, base_stats::parse_base_stats(&origin(&path), &text).records);
    }
    info!("Extracted detailed stats for {} species", records.len());
    records
}

/// Every domain's records from one run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub abilities: BTreeMap<String, AbilityRecord>,
    pub moves: BTreeMap<String, MoveRecord>,
    pub evolutions: SpeciesMap<Vec<EvolutionRecord>>,
    pub level_moves: SpeciesMap<Vec<LevelUpMove>>,
    pub egg_moves: SpeciesMap<Vec<String>>,
    pub locations: SpeciesMap<Vec<WildEncounter>>,
    pub pokedex: SpeciesMap<PokedexEntry>,
    pub base_data: SpeciesMap<BaseDataRecord>,
    pub detailed_stats: SpeciesMap<DetailedStats>,
}

impl Extraction {
    /// Run the parsers for `domains` in [`Domain::ALL`] order.
    pub fn run(root: &Path, layout: &SourceLayout, domains: &[Domain]) -> Self {
        let wanted = |domain: Domain| domains.contains(&domain);
        let mut extraction = Extraction::default();

        if wanted(Domain::Abilities) {
            extraction.abilities = extract_abilities(root, layout);
        }
        if wanted(Domain::Moves) {
            extraction.moves = extract_moves(root, layout);
        }
        if wanted(Domain::Evolutions) || wanted(Domain::LevelMoves) {
            let data = extract_evos_attacks(root, layout);
            if wanted(Domain::Evolutions) {
                extraction.evolutions = data.evolutions;
            }
            if wanted(Domain::LevelMoves) {
                extraction.level_moves = data.moves;
            }
        }
        if wanted(Domain::EggMoves) {
            extraction.egg_moves = extract_egg_moves(root, layout);
        }
        if wanted(Domain::Locations) {
            extraction.locations = extract_locations(root, layout);
        }
        if wanted(Domain::Pokedex) {
            extraction.pokedex = extract_pokedex(root, layout);
        }
        if wanted(Domain::BaseData) {
            extraction.base_data = extract_base_data(root, layout);
        }
        if wanted(Domain::DetailedStats) {
            extraction.detailed_stats = extract_detailed_stats(root, layout);
        }
        extraction
    }

    /// Number of keys per domain.
    pub fn count(&self, domain: Domain) -> usize {
        match domain {
            Domain::Abilities => self.abilities.len(),
            Domain::Moves => self.moves.len(),
            Domain::Evolutions => self.evolutions.len(),
            Domain::LevelMoves => self.level_moves.len(),
            Domain::EggMoves => self.egg_moves.len(),
            Domain::Locations => self.locations.len(),
            Domain::Pokedex => self.pokedex.len(),
            Domain::BaseData => self.base_data.len(),
            Domain::DetailedStats => self.detailed_stats.len(),
        }
    }

    /// One domain's map as JSON.
    pub fn domain_value(&self, domain: Domain) -> Result<Value> {
        let value = match domain {
            Domain::Abilities => serde_json::to_value(&self.abilities),
            Domain::Moves => serde_json::to_value(&self.moves),
            Domain::Evolutions => serde_json::to_value(&self.evolutions),
            Domain::LevelMoves => serde_json::to_value(&self.level_moves),
            Domain::EggMoves => serde_json::to_value(&self.egg_moves),
            Domain::Locations => serde_json::to_value(&self.locations),
            Domain::Pokedex => serde_json::to_value(&self.pokedex),
            Domain::BaseData => serde_json::to_value(&self.base_data),
            Domain::DetailedStats => serde_json::to_value(&self.detailed_stats),
        };
        value.map_err(|source| ExtractError::Encode {
            domain: domain.name(),
            source,
        })
    }

    /// `{ domainName: { key: record } }` over `domains`.
    pub fn combine(&self, domains: &[Domain]) -> Result<BTreeMap<&'static str, Value>> {
        domains
            .iter()
            .map(|&domain| Ok((domain.name(), self.domain_value(domain)?)))
            .collect()
    }
}

/// JSON encoding of the written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Pretty,
    Compact,
}

fn encode<T: Serialize>(value: &T, style: Style, domain: &'static str) -> Result<String> {
    let encoded = match style {
        Style::Pretty => serde_json::to_string_pretty(value),
        Style::Compact => serde_json::to_string(value),
    };
    encoded
        .map(|mut text| {
            text.push('\n');
            text
        })
        .map_err(|source| ExtractError::Encode { domain, source })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one file per domain plus the combined file. Returns the paths
/// written, combined file last.
pub fn write_outputs(
    extraction: &Extraction,
    out_dir: &Path,
    layout: &OutputLayout,
    domains: &[Domain],
    style: Style,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(domains.len() + 1);
    for &domain in domains {
        let path = out_dir.join(layout.file_for(domain));
        let value = extraction.domain_value(domain)?;
        write_file(&path, &encode(&value, style, domain.name())?)?;
        info!("Wrote {} {} records to {}", extraction.count(domain), domain, path.display());
        written.push(path);
    }

    let combined = extraction.combine(domains)?;
    let path = out_dir.join(&layout.combined);
    write_file(&path, &encode(&combined, style, "combined")?)?;
    info!("Wrote combined data to {}", path.display());
    written.push(path);
    Ok(written)
}

/// Extract every requested domain under `root` and persist the results.
pub fn extract_all(
    root: &Path,
    out_dir: &Path,
    layout: &Layout,
    domains: &[Domain],
    style: Style,
) -> Result<(Extraction, Vec<PathBuf>)> {
    let extraction = Extraction::run(root, &layout.source, domains);
    let written = write_outputs(&extraction, out_dir, &layout.output, domains, style)?;
    Ok((extraction, written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_str() {
        assert_eq!("levelMoves".parse::<Domain>(), Ok(Domain::LevelMoves));
        assert_eq!("level_moves".parse::<Domain>(), Ok(Domain::LevelMoves));
        assert_eq!("POKEDEX-ENTRIES".parse::<Domain>(), Ok(Domain::Pokedex));
        assert!("sprites".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_names_unique() {
        let mut names: Vec<&str> = Domain::ALL.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Domain::ALL.len());
    }

    #[test]
    fn test_missing_root_gives_empty_maps() {
        let root = Path::new("/definitely/not/a/source/tree");
        let extraction = Extraction::run(root, &SourceLayout::default(), &Domain::ALL);
        for domain in Domain::ALL {
            assert_eq!(extraction.count(domain), 0, "{domain}");
        }
    }

    #[test]
    fn test_combine_shape() {
        let mut extraction = Extraction::default();
        extraction.abilities.insert(
            "Stench".to_string(),
            AbilityRecord {
                description: "May cause flinching.".to_string(),
            },
        );
        let combined = extraction.combine(&[Domain::Abilities, Domain::Pokedex]).unwrap();
        assert_eq!(combined["abilities"]["Stench"]["description"], "May cause flinching.");
        assert_eq!(combined["pokedexEntries"], serde_json::json!({}));
    }

    #[test]
    fn test_encode_styles() {
        let value = serde_json::json!({ "a": 1 });
        assert_eq!(encode(&value, Style::Compact, "test").unwrap(), "{\"a\":1}\n");
        assert!(encode(&value, Style::Pretty, "test").unwrap().contains("\n  \"a\": 1\n"));
    }
}
