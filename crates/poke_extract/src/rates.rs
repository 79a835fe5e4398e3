//! Per-slot encounter percentages from cumulative probability tables.

use log::warn;

use crate::tables::{ENCOUNTER_PROBABILITIES, ENCOUNTER_RATE_KEYS};

/// Probability-table key for a raw encounter method (`grass`, `water`,
/// `fish`, ...). Case-insensitive.
pub fn rate_key(method: &str) -> Option<&'static str> {
    ENCOUNTER_RATE_KEYS
        .get(method.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Individual slot percentages for a method, in slot order.
pub fn slot_percentages(method: &str) -> Option<Vec<u8>> {
    let table = ENCOUNTER_PROBABILITIES.get(rate_key(method)?)?;
    let mut previous = 0;
    Some(
        table
            .iter()
            .map(|&cumulative| {
                let share = cumulative - previous;
                previous = cumulative;
                share
            })
            .collect(),
    )
}

/// Percentage for each species of one (area, method, time) slot group, in
/// source order.
///
/// Species past the method's slot count get 0. Unknown methods split 100
/// evenly (rounded down).
pub fn map_encounter_rates<S: AsRef<str>>(species: &[S], method: &str) -> Vec<u8> {
    if species.is_empty() {
        return Vec::new();
    }
    match slot_percentages(method) {
        Some(slots) => (0..species.len())
            .map(|index| slots.get(index).copied().unwrap_or(0))
            .collect(),
        None => {
            warn!(
                "No encounter table for method `{method}`; splitting evenly across {} species",
                species.len()
            );
            let share = u8::try_from(100 / species.len()).unwrap_or(0);
            vec![share; species.len()]
        }
    }
}
