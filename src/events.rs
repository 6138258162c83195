use std::fmt;

use crate::{book::Book, genre::Catalog, genre::Genre};

/// A successful change in a book's availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryEvent<'a, G: Catalog = Genre> {
    /// The book left its pool and now belongs to the caller
    CheckedOut(&'a Book<G>),
    /// The book was rated and became the newest entry of its pool
    CheckedIn(&'a Book<G>),
}

impl<G: Catalog> LibraryEvent<'_, G> {
    /// The book the event is about
    #[must_use]
    pub fn book(&self) -> &Book<G> {
        match self {
            Self::CheckedOut(book) | Self::CheckedIn(book) => book,
        }
    }

    /// Genre whose pool changed
    #[must_use]
    pub fn genre(&self) -> G {
        self.book().genre()
    }
}

impl<G: Catalog> fmt::Display for LibraryEvent<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckedOut(book) => write!(f, "checked out {book}"),
            Self::CheckedIn(book) => write!(f, "checked in {book}"),
        }
    }
}
