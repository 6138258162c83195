use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed, finite set of genres that partitions a library into independent pools.
///
/// Every genre maps to one pool slot: its position in [`Catalog::ALL`]. An
/// overridden [`Catalog::index`] must agree with that position. A genre whose
/// index does not lead back to itself in `ALL` is rejected with
/// [`LibraryError::InvalidGenre`](crate::LibraryError::InvalidGenre).
pub trait Catalog: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every genre in the catalog, in slot order
    const ALL: &'static [Self];

    /// Stable name used in errors and log fields
    fn name(self) -> &'static str;

    /// Pool slot for this genre, its position in [`Catalog::ALL`]
    #[must_use]
    fn index(self) -> Option<usize> {
        Self::ALL.iter().position(|genre| *genre == self)
    }
}

/// Genres to which books can belong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    /// Non-fiction
    NonFiction,
    /// General fiction
    GeneralFiction,
    /// Science fiction
    ScienceFiction,
    /// Westerns
    Western,
}

impl Catalog for Genre {
    const ALL: &'static [Self] =
        &[Self::NonFiction, Self::GeneralFiction, Self::ScienceFiction, Self::Western];

    fn name(self) -> &'static str {
        match self {
            Self::NonFiction => "NON_FICTION",
            Self::GeneralFiction => "GENERAL_FICTION",
            Self::ScienceFiction => "SCIENCE_FICTION",
            Self::Western => "WESTERN",
        }
    }

    fn index(self) -> Option<usize> {
        Some(match self {
            Self::NonFiction => 0,
            Self::GeneralFiction => 1,
            Self::ScienceFiction => 2,
            Self::Western => 3,
        })
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
