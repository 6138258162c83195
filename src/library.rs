use crate::{book::Book, error::LibraryError, genre::Catalog, genre::Genre};

/// The operations every lending library supports
///
/// Each genre keeps its own last-in-first-out pool of available books.
/// Implementations differ only in how they share that state.
pub trait Library<G: Catalog = Genre> {
    /// Remove and return the book most recently checked in to `genre`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::OutOfBooks` if no book of that genre is available
    fn checkout(&mut self, genre: G) -> Result<Book<G>, LibraryError>;

    /// Return a book to its genre's pool with a fresh rating
    ///
    /// The stored book is a new value equal to `book` except for its rating.
    /// It becomes the next one handed out by [`Library::checkout`]. The last
    /// rating given overwrites any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::IllegalRating` if the rating is outside
    /// `1..=100`; the library is not modified in that case
    fn check_in(&mut self, book: &Book<G>, rating: i32) -> Result<(), LibraryError>;

    /// The highest-rated available book of `genre`, left in place
    ///
    /// On a tie the most recently checked-in book wins. This takes time
    /// linear in the number of available books of that genre.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::OutOfBooks` if no book of that genre is available
    fn peek_highest_rated(&self, genre: G) -> Result<Book<G>, LibraryError>;

    /// Number of books of `genre` currently available
    fn available(&self, genre: G) -> usize;
}

/// Resolve the pool slot of a genre
///
/// A slot belongs to the catalog entry at that position, so a genre whose
/// index is out of range or points at another genre's slot has no pool.
pub(crate) fn slot<G: Catalog>(genre: G) -> Result<usize, LibraryError> {
    genre
        .index()
        .filter(|idx| G::ALL.get(*idx) == Some(&genre))
        .ok_or(LibraryError::InvalidGenre { genre: genre.name() })
}

/// Highest-rated book of a pool stored oldest-first
///
/// Scans from the newest entry and only replaces the current best on a
/// strictly greater rating, so ties resolve to the most recent check-in.
pub(crate) fn highest_rated<G: Catalog>(pool: &[Book<G>]) -> Option<&Book<G>> {
    pool.iter()
        .rev()
        .reduce(|best, book| if book.rating() > best.rating() { book } else { best })
}
