//! Static lookup tables shared by the parsers.
//!
//! Every table here is fixed at compile time. Parsers fall back to a
//! generic rendering when a token is missing from its table, so nothing
//! in this module is allowed to fail a lookup loudly.

use phf::phf_map;

/// Species tokens whose display name cannot be derived by title-casing.
pub static IRREGULAR_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "NIDORAN_F" => "Nidoran♀",
    "NIDORAN_M" => "Nidoran♂",
    "FARFETCH_D" => "Farfetch'd",
    "SIRFETCH_D" => "Sirfetch'd",
    "HO_OH" => "Ho-Oh",
    "MR__MIME" => "Mr. Mime",
    "MIME_JR" => "Mime Jr.",
    "MR__RIME" => "Mr. Rime",
    "FLABEBE" => "Flabébé",
    "TYPE_NULL" => "Type: Null",
    "JANGMO_O" => "Jangmo-o",
    "HAKAMO_O" => "Hakamo-o",
    "KOMMO_O" => "Kommo-o",
    "PORYGON_Z" => "Porygon-Z",
};

/// Regional forms rendered as a fixed parenthetical.
pub static REGIONAL_FORMS: phf::Map<&'static str, &'static str> = phf_map! {
    "alolan" => "Alolan",
    "galarian" => "Galarian",
    "hisuian" => "Hisuian",
};

/// Forms appended to the base name with a hyphen instead of a parenthetical,
/// so the composite string can be split again unambiguously.
pub const COMPOUND_FORMS: &[&str] = &["paldean_fire", "paldean_water"];

/// Form suffixes recognised when splitting a combined `SPECIES_FORM` token.
/// Longest first so `PALDEAN_FIRE` wins over `PALDEAN`.
pub const FORM_SUFFIXES: &[&str] = &[
    "paldean_water",
    "paldean_fire",
    "bloodmoon",
    "galarian",
    "hisuian",
    "armored",
    "paldean",
    "alolan",
    "galar",
    "hisui",
    "plain",
    "red",
];

/// Display names for `evo_data` method tokens.
pub static EVOLUTION_METHODS: phf::Map<&'static str, &'static str> = phf_map! {
    "EVOLVE_LEVEL" => "Level",
    "EVOLVE_ITEM" => "Item",
    "EVOLVE_TRADE" => "Trade",
    "EVOLVE_HAPPINESS" => "Happiness",
    "EVOLVE_STAT" => "Stats",
    "EVOLVE_MOVE" => "Move",
    "EVOLVE_MAP" => "Location",
    "EVOLVE_ITEM_MALE" => "Item (Male)",
    "EVOLVE_ITEM_FEMALE" => "Item (Female)",
    "EVOLVE_HOLD" => "Hold Item",
    "EVOLVE_TIME" => "Time of Day",
    "EVOLVE_MOVE_TYPE" => "Move Type",
    "EVOLVE_PARTY" => "With Pokémon in Party",
    "EVOLVE_LEVEL_REGION" => "Level Up in Region",
    "EVOLVE_HAPPINESS_REGION" => "Happiness in Region",
};

/// Display names for wild encounter methods, keyed by the table suffix
/// of `def_<method>_wildmons`.
pub static ENCOUNTER_METHOD_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "grass" => "Walking in grass",
    "water" => "Surfing",
    "fishing" => "Fishing",
    "headbutt" => "Headbutt trees",
    "hidden_grotto" => "Hidden Grotto",
};

/// Rate-table key for each raw encounter method.
pub static ENCOUNTER_RATE_KEYS: phf::Map<&'static str, &'static str> = phf_map! {
    "grass" => "grass",
    "water" => "surfing",
    "surfing" => "surfing",
    "fish" => "fishing",
    "fishing" => "fishing",
    "tree" => "headbutt",
    "headbutt" => "headbutt",
};

/// Cumulative slot thresholds per encounter method.
pub static ENCOUNTER_PROBABILITIES: phf::Map<&'static str, &'static [u8]> = phf_map! {
    "grass" => &[30, 60, 80, 90, 95, 98, 100],
    "surfing" => &[60, 90, 100],
    "fishing" => &[70, 90, 98, 100],
    "headbutt" => &[50, 85, 95, 100],
};

/// Times of day recognised in `; <time>` marker comments.
pub const TIMES_OF_DAY: &[&str] = &["morn", "day", "nite", "eve"];

pub static TYPE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "NORMAL" => "Normal",
    "FIGHTING" => "Fighting",
    "FLYING" => "Flying",
    "POISON" => "Poison",
    "GROUND" => "Ground",
    "ROCK" => "Rock",
    "BUG" => "Bug",
    "GHOST" => "Ghost",
    "STEEL" => "Steel",
    "FIRE" => "Fire",
    "WATER" => "Water",
    "GRASS" => "Grass",
    "ELECTRIC" => "Electric",
    "PSYCHIC" => "Psychic",
    "ICE" => "Ice",
    "DRAGON" => "Dragon",
    "DARK" => "Dark",
    "FAIRY" => "Fairy",
    "SHADOW" => "Shadow",
    "NONE" => "None",
    "UNKNOWN_T" => "Unknown",
};

pub static CATEGORY_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "PHYSICAL" => "Physical",
    "SPECIAL" => "Special",
    "STATUS" => "Status",
};

pub static GENDER_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "GENDER_F0" => "0% ♀ (Male only)",
    "GENDER_F12_5" => "12.5% ♀, 87.5% ♂",
    "GENDER_F25" => "25% ♀, 75% ♂",
    "GENDER_F50" => "50% ♀, 50% ♂",
    "GENDER_F75" => "75% ♀, 25% ♂",
    "GENDER_F100" => "100% ♀ (Female only)",
    "GENDER_UNKNOWN" => "Genderless",
};

pub static HATCH_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "HATCH_FASTEST" => "Very Fast (1,280 steps)",
    "HATCH_FASTER" => "Fast (2,560 steps)",
    "HATCH_FAST" => "Medium-Fast (5,120 steps)",
    "HATCH_MEDIUM_FAST" => "Medium-Fast (5,120 steps)",
    "HATCH_MEDIUM_SLOW" => "Medium-Slow (6,400 steps)",
    "HATCH_SLOW" => "Slow (8,960 steps)",
    "HATCH_SLOWER" => "Very Slow (10,240 steps)",
    "HATCH_SLOWEST" => "Extremely Slow (20,480 steps)",
};

pub static GROWTH_RATE_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "GROWTH_MEDIUM_FAST" => "Medium Fast",
    "GROWTH_SLIGHTLY_FAST" => "Slightly Fast",
    "GROWTH_SLIGHTLY_SLOW" => "Slightly Slow",
    "GROWTH_MEDIUM_SLOW" => "Medium Slow",
    "GROWTH_FAST" => "Fast",
    "GROWTH_SLOW" => "Slow",
    "GROWTH_ERRATIC" => "Erratic",
    "GROWTH_FLUCTUATING" => "Fluctuating",
};

pub static EGG_GROUP_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "EGG_MONSTER" => "Monster",
    "EGG_WATER_1" => "Water 1",
    "EGG_BUG" => "Bug",
    "EGG_FLYING" => "Flying",
    "EGG_GROUND" => "Field",
    "EGG_FAIRY" => "Fairy",
    "EGG_PLANT" => "Grass",
    "EGG_HUMANSHAPE" => "Human-Like",
    "EGG_WATER_3" => "Water 3",
    "EGG_MINERAL" => "Mineral",
    "EGG_INDETERMINATE" => "Amorphous",
    "EGG_WATER_2" => "Water 2",
    "EGG_DITTO" => "Ditto",
    "EGG_DRAGON" => "Dragon",
    "EGG_NONE" => "Undiscovered",
};

/// Abilities whose description is copied verbatim onto their aliases.
/// Order is significant: later groups may overwrite earlier ones.
pub const SHARED_ABILITY_DESCRIPTIONS: &[(&str, &[&str])] = &[
    ("Battle Armor", &["Shell Armor"]),
    ("Cloud Nine", &["Air Lock"]),
    ("Insomnia", &["Vital Spirit"]),
    ("Immunity", &["Pastel Veil"]),
    ("Clear Body", &["White Smoke"]),
    ("Filter", &["Solid Rock"]),
];

/// Moves sharing one effect text. The first member of each group provides
/// the description; the others keep their own stats.
pub const SHARED_MOVE_DESCRIPTIONS: &[&[&str]] = &[
    &["BODY_SLAM", "THUNDER_SHOCK", "THUNDERBOLT", "THUNDER", "LICK", "SPARK"],
    &["ICE_BEAM", "BLIZZARD"],
    &["PSYBEAM", "CONFUSION", "DIZZY_PUNCH", "WATER_PULSE", "HURRICANE"],
    &[
        "STOMP",
        "HEADBUTT",
        "BITE",
        "WATERFALL",
        "ROCK_SLIDE",
        "HYPER_FANG",
        "AIR_SLASH",
        "IRON_HEAD",
        "ZEN_HEADBUTT",
        "EXTRA_SENSORY",
        "DARK_PULSE",
        "ASTONISH",
        "ICICLE_CRASH",
    ],
    &["POISON_STING", "SLUDGE_BOMB", "POISON_JAB", "GUNK_SHOT"],
    &["EMBER", "FLAME_THROWER", "FIRE_BLAST", "SACRED_FIRE", "SCALD"],
    &[
        "ACID",
        "PSYCHIC_M",
        "SHADOW_BALL",
        "BUG_BUZZ",
        "EARTH_POWER",
        "ENERGY_BALL",
        "FLASH_CANNON",
        "FOCUS_BLAST",
    ],
    &["CRUNCH", "IRON_TAIL"],
    &["AURORA_BEAM", "PLAY_ROUGH"],
    &["BUBBLE_BEAM", "BULLDOZE", "ICY_WIND"],
    &["MUD_SLAP", "OCTAZOOKA", "SMOKESCREEN", "FLASH"],
    &["CONFUSE_RAY", "SUPERSONIC", "SWEET_KISS"],
    &["SLEEP_POWDER", "HYPNOSIS", "LOVELY_KISS", "SING", "SPORE", "YAWN"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_tables_end_at_100() {
        for (method, table) in ENCOUNTER_PROBABILITIES.entries() {
            assert_eq!(table.last(), Some(&100), "{method} table must end at 100");
            assert!(
                table.windows(2).all(|w| w[0] < w[1]),
                "{method} table must be strictly increasing"
            );
        }
    }

    #[test]
    fn test_form_suffixes_longest_first() {
        let fire = FORM_SUFFIXES.iter().position(|f| *f == "paldean_fire");
        let paldean = FORM_SUFFIXES.iter().position(|f| *f == "paldean");
        assert!(fire < paldean);
    }

    #[test]
    fn test_rate_keys_resolve_to_tables() {
        for key in ENCOUNTER_RATE_KEYS.values() {
            assert!(ENCOUNTER_PROBABILITIES.contains_key(*key));
        }
    }
}
