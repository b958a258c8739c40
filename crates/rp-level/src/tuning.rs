//! TOML tuning file.
//!
//! ```toml
//! [costs]
//! railway_unit_cost = 0.01
//! connection_cost = 0.1
//! railway_unit_travel_time = 0.02
//! change_train_time = 2.0
//!
//! [pacing]
//! start_delay_ticks = 100
//! build_interval_ticks = 20
//! evaluate_interval_ticks = 25
//! ```
//!
//! Both tables and every key are optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rp_core::{SimConfig, UnitCosts};

use crate::LevelResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub costs:  UnitCosts,
    pub pacing: SimConfig,
}

impl Tuning {
    pub fn from_toml_str(s: &str) -> LevelResult<Self> {
        let tuning: Tuning = toml::from_str(s)?;
        tuning.pacing.validate()?;
        Ok(tuning)
    }
}

/// Load a tuning file.
pub fn load_tuning_toml(path: &Path) -> LevelResult<Tuning> {
    let contents = fs::read_to_string(path)?;
    let tuning = Tuning::from_toml_str(&contents)?;
    tracing::info!(path = %path.display(), ?tuning, "tuning loaded");
    Ok(tuning)
}
