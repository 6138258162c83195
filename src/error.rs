use thiserror::Error;

/// Errors reported by library operations
///
/// None of these are fatal: the library is left exactly as it was before the
/// failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The genre's pool had no available books
    #[error("no books available in genre {genre}")]
    OutOfBooks {
        /// Name of the empty genre
        genre: &'static str,
    },
    /// A check-in rating fell outside `1..=100`
    #[error("rating {rating} is outside the allowed range 1..=100")]
    IllegalRating {
        /// The rejected rating
        rating: i32,
    },
    /// The genre maps to no pool of this library
    #[error("genre {genre} has no pool in this library")]
    InvalidGenre {
        /// Name of the unmapped genre
        genre: &'static str,
    },
}
