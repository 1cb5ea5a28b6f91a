//! Player positions.

use std::fmt;
use std::str::FromStr;

/// Position of a player in the lineup.
///
/// The set is closed: per-position data throughout the crate lives in
/// `[T; Category::COUNT]` arrays indexed by [`Category::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Primary category; a complete roster always has exactly one.
    Goalkeeper,
    Defender,
    Midfielder,
    Striker,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 4;

    /// Fixed processing order used by both search engines and by output.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Goalkeeper,
        Category::Defender,
        Category::Midfielder,
        Category::Striker,
    ];

    /// Position of this category in [`Category::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Category::Goalkeeper => 0,
            Category::Defender => 1,
            Category::Midfielder => 2,
            Category::Striker => 3,
        }
    }

    /// Three-letter code used by the player database (`por`, `def`, `mig`, `dav`).
    pub const fn code(self) -> &'static str {
        match self {
            Category::Goalkeeper => "por",
            Category::Defender => "def",
            Category::Midfielder => "mig",
            Category::Striker => "dav",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a position code is not one of the four known codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position code {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "por" => Ok(Category::Goalkeeper),
            "def" => Ok(Category::Defender),
            "mig" => Ok(Category::Midfielder),
            "dav" => Ok(Category::Striker),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
