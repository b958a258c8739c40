//! `rp-level` — everything the engine is fed from disk.
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`level`]     | `Level`, `LocationRecord`, JSON loading                  |
//! | [`tuning`]    | `Tuning` (unit costs + pacing), TOML loading             |
//! | [`generator`] | `Board`, `generate_level`, `write_level_json`            |
//! | [`error`]     | `LevelError`, `LevelResult<T>`                           |

pub mod error;
pub mod generator;
pub mod level;
pub mod tuning;


pub use error::{LevelError, LevelResult};
pub use generator::{Board, generate_level, write_level_json};
pub use level::{DEFAULT_HEADER_HEIGHT, Level, LocationRecord, load_level_json, load_level_reader};
pub use tuning::{Tuning, load_tuning_toml};
