//! Location color tags.
//!
//! Level files name one of a fixed palette of colors per location.  The tag
//! is part of a location's identity tuple; `rgb()` is only for renderers.

use std::fmt;
use std::str::FromStr;

use crate::RpError;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorTag {
    Orange,
    Black,
    Blue,
    DeepBlue,
    Purple,
    Violet,
    Pink,
    Pinkeye,
    Red,
    Green,
    Grey,
}

impl ColorTag {
    pub const ALL: [ColorTag; 11] = [
        ColorTag::Orange,
        ColorTag::Black,
        ColorTag::Blue,
        ColorTag::DeepBlue,
        ColorTag::Purple,
        ColorTag::Violet,
        ColorTag::Pink,
        ColorTag::Pinkeye,
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Grey,
    ];

    /// Name as written in level files.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Orange   => "orange",
            ColorTag::Black    => "black",
            ColorTag::Blue     => "blue",
            ColorTag::DeepBlue => "deep_blue",
            ColorTag::Purple   => "purple",
            ColorTag::Violet   => "violet",
            ColorTag::Pink     => "pink",
            ColorTag::Pinkeye  => "pinkeye",
            ColorTag::Red      => "red",
            ColorTag::Green    => "green",
            ColorTag::Grey     => "grey",
        }
    }

    /// Display color as `[r, g, b]`.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorTag::Orange   => [255, 144, 51],
            ColorTag::Black    => [0, 0, 0],
            ColorTag::Blue     => [51, 131, 255],
            ColorTag::DeepBlue => [51, 66, 255],
            ColorTag::Purple   => [162, 51, 255],
            ColorTag::Violet   => [119, 51, 255],
            ColorTag::Pink     => [215, 51, 255],
            ColorTag::Pinkeye  => [255, 51, 141],
            ColorTag::Red      => [255, 51, 94],
            ColorTag::Green    => [46, 176, 14],
            ColorTag::Grey     => [100, 100, 100],
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = RpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorTag::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RpError::Parse(format!("unknown color tag {s:?}")))
    }
}
