//! JSON level loader.
//!
//! # Format
//!
//! ```json
//! {
//!     "name": "Paris",
//!     "bridges": [],
//!     "locations": [
//!         { "name": "Louvre", "x": 512, "y": 230, "color": "deep_blue" },
//!         { "name": "Bastille", "x": 640, "y": 260, "color": "red" }
//!     ]
//! }
//! ```
//!
//! Coordinates are board coordinates.  Hosts that draw a header above the
//! board shift every location down by the header height when converting to
//! engine [`Location`]s.  `bridges` is carried through untouched; nothing in
//! the engine reads it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use rp_core::ColorTag;
use rp_network::Location;

use crate::{LevelError, LevelResult};

/// Height of the KPI header drawn above the board.
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name:  String,
    pub x:     f64,
    pub y:     f64,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(default)]
    pub bridges: Vec<serde_json::Value>,
    pub locations: Vec<LocationRecord>,
}

impl Level {
    /// Reject coordinates that cannot be placed on a board.
    pub fn validate(&self) -> LevelResult<()> {
        for rec in &self.locations {
            if !rec.x.is_finite() || !rec.y.is_finite() {
                return Err(LevelError::Invalid(format!(
                    "location {:?} has non-finite coordinates ({}, {})",
                    rec.name, rec.x, rec.y
                )));
            }
        }
        Ok(())
    }

    /// Engine locations in file order, shifted down by `y_offset`.
    pub fn to_locations(&self, y_offset: f64) -> Vec<Location> {
        self.locations
            .iter()
            .map(|rec| Location::new(rec.x, rec.y + y_offset, rec.name.clone(), rec.color))
            .collect()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a level from a JSON file.
pub fn load_level_json(path: &Path) -> LevelResult<Level> {
    let file = File::open(path)?;
    let level = load_level_reader(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        name = %level.name,
        locations = level.locations.len(),
        "level loaded"
    );
    Ok(level)
}

/// Like [`load_level_json`] but accepts any `Read` source.
pub fn load_level_reader<R: Read>(reader: R) -> LevelResult<Level> {
    let level: Level = serde_json::from_reader(reader)?;
    level.validate()?;
    Ok(level)
}
