//! CSV pattern loader.
//!
//! # CSV format
//!
//! One row per action.  Rows sharing a `name` form one pattern, in file
//! order; patterns are returned in order of their first row.
//!
//! ```csv
//! name,kind,duration_ticks
//! SlowTap,release,90
//! SlowTap,hold,4
//! Stutter,hold,1
//! Stutter,release,1
//! ```
//!
//! `kind` is `hold` or `release`; `duration_ticks` must be ≥ 1.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ActionKind, InputAction, NamedPattern, Pattern, PatternError, PatternResult};

#[derive(Deserialize)]
struct PatternRecord {
    name:           String,
    kind:           String,
    duration_ticks: u32,
}

/// Load named patterns from a CSV file.
pub fn load_patterns_csv(path: &Path) -> PatternResult<Vec<NamedPattern>> {
    let file = std::fs::File::open(path)?;
    load_patterns_reader(file)
}

/// Like [`load_patterns_csv`] but accepts any `Read` source.
pub fn load_patterns_reader<R: Read>(reader: R) -> PatternResult<Vec<NamedPattern>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<InputAction>> = HashMap::new();

    for (line, result) in csv_reader.deserialize::<PatternRecord>().enumerate() {
        let row = result.map_err(|e| PatternError::Parse(e.to_string()))?;
        let kind: ActionKind = row.kind.parse()?;
        let action = InputAction::new(kind, row.duration_ticks).map_err(|_| {
            PatternError::Parse(format!(
                "row {}: pattern {:?} has a zero-tick action",
                line + 1,
                row.name
            ))
        })?;

        let name = row.name.trim().to_owned();
        by_name
            .entry(name.clone())
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(action);
    }

    Ok(order
        .into_iter()
        .filter_map(|name| {
            let actions = by_name.remove(&name)?;
            Some(NamedPattern::new(name, Pattern::new(actions)))
        })
        .collect())
}
