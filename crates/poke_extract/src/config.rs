//! Where sources are read from and outputs are written to.
//!
//! Every path has a default matching the usual disassembly layout. A JSON
//! layout file may override any subset:
//!
//! ```json
//! { "source": { "wild": "maps/wild" }, "output": { "combined": "all.json" } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::aggregate::Domain;
use crate::error::{ExtractError, Result};

/// Source paths, relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceLayout {
    pub ability_names: PathBuf,
    pub ability_descriptions: PathBuf,
    pub move_names: PathBuf,
    pub move_descriptions: PathBuf,
    pub move_stats: PathBuf,
    /// Directory of per-species evolution and level-up move files.
    pub evos_attacks: PathBuf,
    pub wild: PathBuf,
    pub grottoes: PathBuf,
    pub egg_moves: PathBuf,
    pub pokedex: PathBuf,
    pub base_data: PathBuf,
    pub base_stats: PathBuf,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            ability_names: "data/abilities/names.asm".into(),
            ability_descriptions: "data/abilities/descriptions.asm".into(),
            move_names: "data/moves/names.asm".into(),
            move_descriptions: "data/moves/descriptions.asm".into(),
            move_stats: "data/moves/moves.asm".into(),
            evos_attacks: "data/pokemon/evos_attacks".into(),
            wild: "data/wild".into(),
            grottoes: "data/events/hidden_grottoes/grottoes.asm".into(),
            egg_moves: "data/pokemon/egg_moves".into(),
            pokedex: "data/pokedex/bio.asm".into(),
            base_data: "data/pokemon/base_data".into(),
            base_stats: "data/pokemon/base_stats".into(),
        }
    }
}

/// Output file names, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputLayout {
    pub abilities: PathBuf,
    pub moves: PathBuf,
    pub evolutions: PathBuf,
    pub level_moves: PathBuf,
    pub egg_moves: PathBuf,
    pub locations: PathBuf,
    pub pokedex: PathBuf,
    pub base_data: PathBuf,
    pub detailed_stats: PathBuf,
    pub combined: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            abilities: "pokemon_ability_descriptions.json".into(),
            moves: "pokemon_move_descriptions.json".into(),
            evolutions: "pokemon_evolution_data.json".into(),
            level_moves: "pokemon_level_moves.json".into(),
            egg_moves: "pokemon_egg_moves.json".into(),
            locations: "pokemon_locations.json".into(),
            pokedex: "pokemon_pokedex_entries.json".into(),
            base_data: "pokemon_base_data.json".into(),
            detailed_stats: "pokemon_detailed_stats.json".into(),
            combined: "pokemon_combined_data.json".into(),
        }
    }
}

impl OutputLayout {
    pub fn file_for(&self, domain: Domain) -> &Path {
        match domain {
            Domain::Abilities => &self.abilities,
            Domain::Moves => &self.moves,
            Domain::Evolutions => &self.evolutions,
            Domain::LevelMoves => &self.level_moves,
            Domain::EggMoves => &self.egg_moves,
            Domain::Locations => &self.locations,
            Domain::Pokedex => &self.pokedex,
            Domain::BaseData => &self.base_data,
            Domain::DetailedStats => &self.detailed_stats,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub source: SourceLayout,
    pub output: OutputLayout,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| ExtractError::Layout {
            path: path.to_path_buf(),
            source,
        })
    }
}
