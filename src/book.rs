use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::LibraryError, genre::Catalog, genre::Genre};

/// Lowest rating accepted on check-in
pub const MIN_RATING: i32 = 1;

/// Highest rating accepted on check-in
pub const MAX_RATING: i32 = 100;

/// Check that a rating lies within `MIN_RATING..=MAX_RATING`
///
/// # Errors
///
/// Returns `LibraryError::IllegalRating` if the rating is out of range
pub fn validate_rating(rating: i32) -> Result<i32, LibraryError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(LibraryError::IllegalRating { rating })
    }
}

/// An immutable library book
///
/// The rating only carries meaning once the book has been checked in; before
/// that it is whatever the caller constructed it with. Rerating produces a new
/// value through [`Book::with_rating`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Book<G = Genre> {
    /// Genre whose pool this book belongs to
    genre: G,
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// Most recent rating
    rating: i32,
}

impl<G: Catalog> Book<G> {
    /// Create a new book
    #[must_use]
    pub fn new(genre: G, title: impl Into<String>, author: impl Into<String>, rating: i32) -> Self {
        Self { genre, title: title.into(), author: author.into(), rating }
    }

    /// Copy of this book carrying a different rating
    #[must_use]
    pub fn with_rating(&self, rating: i32) -> Self {
        Self { rating, ..self.clone() }
    }

    /// Genre the book belongs to
    #[must_use]
    pub fn genre(&self) -> G {
        self.genre
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Rating of the book
    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }
}

impl<G: Catalog> fmt::Display for Book<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({}, rated {})",
            self.title,
            self.author,
            self.genre.name(),
            self.rating
        )
    }
}
