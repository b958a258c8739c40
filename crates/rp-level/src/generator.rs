//! Random level authoring.
//!
//! Places each named location uniformly at random on the board, keeping a
//! margin from the edges, and gives it a random color tag.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rp_core::{ColorTag, SimRng};

use crate::{Level, LevelResult, LocationRecord};

/// Drawable board area, excluding the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width:       u32,
    pub height:      u32,
    /// Locations stay at least this far from every edge.
    pub edge_offset: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self { width: 1080, height: 540, edge_offset: 20 }
    }
}

impl Board {
    fn coord(&self, rng: &mut SimRng, max: u32) -> f64 {
        let lo = self.edge_offset;
        let hi = max.saturating_sub(self.edge_offset).max(lo);
        rng.gen_range(lo..=hi) as f64
    }
}

/// Build a level named `name` with one randomly placed location per name.
pub fn generate_level<I, S>(name: &str, names: I, board: Board, rng: &mut SimRng) -> Level
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let locations = names
        .into_iter()
        .map(|n| LocationRecord {
            name:  n.into(),
            x:     board.coord(rng, board.width),
            y:     board.coord(rng, board.height),
            color: rng.choose(&ColorTag::ALL).copied().unwrap_or(ColorTag::Grey),
        })
        .collect();

    Level { name: name.to_owned(), bridges: Vec::new(), locations }
}

/// Write `level` as pretty-printed JSON.
pub fn write_level_json(path: &Path, level: &Level) -> LevelResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, level)?;
    out.write_all(b"\n")?;
    out.flush()?;
    tracing::info!(path = %path.display(), locations = level.locations.len(), "level written");
    Ok(())
}
