//! Domain parsers. Each one is a [`Grammar`](crate::scan::Grammar) over
//! one source-file family and returns its records with the scan report.

pub mod abilities;
pub mod base_data;
pub mod base_stats;
pub mod descriptions;
pub mod egg_moves;
pub mod evos_attacks;
pub mod grottoes;
pub mod moves;
pub mod pokedex;
pub mod wild;

use std::collections::HashMap;
use std::sync::LazyLock;

use heck::ToShoutySnakeCase;
use regex::Regex;

use crate::names::{compact_key, split_form, CanonicalKey};
use crate::tables::IRREGULAR_NAMES;
use crate::scan::ScanReport;

/// Records from one source file plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct Parsed<T> {
    pub records: T,
    pub report: ScanReport,
}

static FILE_OWNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("static regex must compile")
});

/// Irregular species tokens keyed by their alphanumerics (`MRMIME`).
static IRREGULAR_BY_COMPACT: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    IRREGULAR_NAMES
        .keys()
        .map(|token| (compact_key(token), *token))
        .collect()
});

/// Key for a `SPECIES_FORM` token whose species part may have lost the
/// punctuation of an irregular name (`MR_MIME`, `FARFETCHD`).
fn owner_key(token: &str) -> CanonicalKey {
    let (species, form) = split_form(token);
    let species = IRREGULAR_BY_COMPACT
        .get(&compact_key(species))
        .copied()
        .unwrap_or(species);
    CanonicalKey::new(species, form)
}

/// Species owning a per-species file, from its stem (`rattata_alolan`).
/// `None` when the stem is not a plain identifier.
pub fn owner_from_stem(stem: &str) -> Option<CanonicalKey> {
    FILE_OWNER
        .is_match(stem)
        .then(|| owner_key(&stem.to_ascii_uppercase()))
}

/// Species named by a block label stem (`RattataAlolan`, `RATTATA_ALOLAN`).
pub fn owner_from_label(stem: &str) -> CanonicalKey {
    owner_key(&stem.to_shouty_snake_case())
}

/// Move token as written in level-up and egg move lists: underscores
/// become spaces, case is kept.
pub fn move_name(token: &str) -> String {
    token.trim().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use heck::ToUpperCamelCase;

    use super::*;

    #[test]
    fn test_owner_from_stem() {
        assert_eq!(
            owner_from_stem("rattata_alolan").map(|k| k.to_string()),
            Some("Rattata (Alolan)".to_string())
        );
        assert_eq!(
            owner_from_stem("nidoran_f").map(|k| k.to_string()),
            Some("Nidoran♀".to_string())
        );
        assert!(owner_from_stem("mr. mime").is_none());
        assert!(owner_from_stem("").is_none());
    }

    #[test]
    fn test_owner_from_label() {
        for stem in ["RattataAlolan", "RATTATA_ALOLAN", "Rattata_Alolan"] {
            assert_eq!(owner_from_label(stem).to_string(), "Rattata (Alolan)", "{stem}");
        }
        assert_eq!(owner_from_label("NidoranF").to_string(), "Nidoran♀");
        assert_eq!(owner_from_label("TaurosPaldeanFire").to_string(), "Tauros-paldean_fire");
        assert_eq!(owner_from_label("RATTATA").to_string(), "Rattata");
        assert_eq!(owner_from_label("MrMimeGalarian").to_string(), "Mr. Mime (Galarian)");
    }

    #[test]
    fn test_irregular_labels_match_raw_tokens() {
        for token in IRREGULAR_NAMES.keys() {
            let raw = CanonicalKey::new(token, None);
            let label = token.to_lowercase().to_upper_camel_case();
            assert_eq!(owner_from_label(&label), raw, "{label}");
            assert_eq!(owner_from_label(&compact_key(token)), raw, "{token}");
            assert_eq!(owner_from_stem(&token.to_lowercase()), Some(raw), "{token}");
        }
        assert_eq!(owner_from_label("MrMime").to_string(), "Mr. Mime");
        assert_eq!(owner_from_label("Farfetchd").to_string(), "Farfetch'd");
    }

    #[test]
    fn test_move_name() {
        assert_eq!(move_name("THUNDER_SHOCK"), "THUNDER SHOCK");
        assert_eq!(move_name(" Tackle "), "Tackle");
    }
}
