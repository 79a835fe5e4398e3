//! Canonical species naming.
//!
//! Every parser resolves `(SPECIES, FORM)` token pairs through
//! [`CanonicalKey::new`], so records produced from unrelated files join
//! on the same key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::tables::{COMPOUND_FORMS, FORM_SUFFIXES, IRREGULAR_NAMES, REGIONAL_FORMS};

/// Lowercase, turn underscores into spaces and capitalise every word.
///
/// Only the first character of each space-separated word is touched, so
/// punctuation inside a word (`farfetch'd`, `jangmo-o`) is left alone. That
/// character keeps a single-character uppercase (`ß` gives `S`, not `SS`)
/// so the function is idempotent.
pub fn title_case(raw: &str) -> String {
    raw.to_lowercase()
        .replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .next()
            .into_iter()
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}

/// Display name for a raw species token such as `NIDORAN_F` or `RATTATA`.
///
/// Total: unknown tokens use [`title_case`], trimmed. Already-normalized display
/// names map to themselves.
pub fn normalize_name(token: &str) -> String {
    let token = token.trim();
    if let Some(name) = IRREGULAR_NAMES.get(token) {
        return (*name).to_string();
    }
    if IRREGULAR_NAMES.values().any(|name| *name == token) {
        return token.to_string();
    }
    generic(token)
}

fn generic(token: &str) -> String {
    title_case(token).trim().to_string()
}

/// Uppercase alphanumerics only. Used to match labels such as
/// `BattleArmorDescription` against names such as `Battle Armor`.
pub fn compact_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Split a combined `SPECIES_FORM` token on a known form suffix.
///
/// `RATTATA_ALOLAN` gives `("RATTATA", Some("ALOLAN"))`; `NIDORAN_F` and
/// `MR__MIME` are returned whole.
pub fn split_form(token: &str) -> (&str, Option<&str>) {
    let lower = token.to_ascii_lowercase();
    for form in FORM_SUFFIXES {
        let Some(prefix) = lower.strip_suffix(form).and_then(|rest| rest.strip_suffix('_')) else {
            continue;
        };
        if prefix.is_empty() || prefix.ends_with('_') {
            continue;
        }
        let cut = prefix.len();
        return (&token[..cut], Some(&token[cut + 1..]));
    }
    (token, None)
}

/// How a form is attached to its base name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Form {
    /// ` (Alolan)`, ` (Plain)`, ...
    Parenthesized(String),
    /// `-paldean_fire`. Kept lowercase with its underscore.
    Compound(String),
}

impl Form {
    /// Classify a raw form token. Tokens that normalize to nothing mean
    /// "no form".
    pub fn normalize(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        let lower = token.to_lowercase();
        if COMPOUND_FORMS.contains(&lower.as_str()) {
            return Some(Form::Compound(lower));
        }
        if let Some(name) = REGIONAL_FORMS.get(lower.as_str()) {
            return Some(Form::Parenthesized((*name).to_string()));
        }
        let name = generic(token);
        (!name.is_empty()).then_some(Form::Parenthesized(name))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Form::Parenthesized(name) | Form::Compound(name) => name,
        }
    }
}

/// Stable `(base name, form)` identity shared by every domain map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey {
    base_name: String,
    form: Option<Form>,
}

impl CanonicalKey {
    pub fn new(species: &str, form: Option<&str>) -> Self {
        Self {
            base_name: normalize_name(species),
            form: form.and_then(Form::normalize),
        }
    }

    /// Key for a combined `SPECIES_FORM` token (file stems, labels).
    pub fn from_combined(token: &str) -> Self {
        let (species, form) = split_form(token);
        Self::new(species, form)
    }

    /// Re-read a serialized key. `parse(&key.to_string()) == key` holds for
    /// every key built by [`CanonicalKey::new`].
    pub fn parse(serialized: &str) -> Self {
        let serialized = serialized.trim();
        if let Some((base, form)) = serialized
            .strip_suffix(')')
            .and_then(|rest| rest.rsplit_once(" ("))
        {
            return Self::new(base, Some(form));
        }
        if let Some((base, form)) = serialized.rsplit_once('-') {
            if !base.is_empty() && COMPOUND_FORMS.contains(&form.to_lowercase().as_str()) {
                return Self::new(base, Some(form));
            }
        }
        Self::new(serialized, None)
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            None => f.write_str(&self.base_name),
            Some(Form::Parenthesized(form)) => write!(f, "{} ({})", self.base_name, form),
            Some(Form::Compound(form)) => write!(f, "{}-{}", self.base_name, form),
        }
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|raw| CanonicalKey::parse(&raw))
    }
}
