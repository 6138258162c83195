use std::fmt;

use crate::{
    book::{Book, validate_rating},
    error::LibraryError,
    events::LibraryEvent,
    genre::{Catalog, Genre},
    library::{Library, highest_rated, slot},
    observers::LibraryObserver,
};

/// Single-threaded library keeping one last-in-first-out pool per genre
///
/// Checkout and check-in are amortized O(1); finding the highest-rated book
/// scans the genre's pool. A book lives in at most one pool, and each pool is
/// ordered purely by check-in recency.
pub struct AvailabilityStore<G: Catalog = Genre> {
    /// One pool per catalog slot, each stored oldest-first
    pools: Vec<Vec<Book<G>>>,
    /// Registered availability observers
    observers: Vec<Box<dyn LibraryObserver<G> + Send>>,
}

// Observers are trait objects, so Debug is written out by hand
impl<G: Catalog> fmt::Debug for AvailabilityStore<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityStore")
            .field("pools", &self.pools)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl<G: Catalog> Default for AvailabilityStore<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Catalog> AvailabilityStore<G> {
    /// Create a store with an empty pool for every genre of the catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` books per genre
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pools: G::ALL.iter().map(|_| Vec::with_capacity(capacity)).collect(),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of availability changes
    ///
    /// Observers must be `Send` so the store can move between threads or sit
    /// behind an outer lock.
    pub fn register_observer(&mut self, observer: Box<dyn LibraryObserver<G> + Send>) {
        self.observers.push(observer);
    }

    /// Borrowing form of [`Library::peek_highest_rated`]
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::OutOfBooks` if no book of that genre is available
    pub fn highest_rated(&self, genre: G) -> Result<&Book<G>, LibraryError> {
        highest_rated(self.pool(genre)?).ok_or(LibraryError::OutOfBooks { genre: genre.name() })
    }

    /// Available books of `genre`, most recently checked in first
    pub fn books(&self, genre: G) -> impl DoubleEndedIterator<Item = &Book<G>> + '_ {
        self.pool(genre).ok().into_iter().flat_map(|pool| pool.iter().rev())
    }

    /// Number of available books across all genres
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Whether no book of any genre is available
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(Vec::is_empty)
    }

    /// Pool for a genre
    fn pool(&self, genre: G) -> Result<&Vec<Book<G>>, LibraryError> {
        self.pools.get(slot(genre)?).ok_or(LibraryError::InvalidGenre { genre: genre.name() })
    }

    /// Mutable pool for a genre
    fn pool_mut(&mut self, genre: G) -> Result<&mut Vec<Book<G>>, LibraryError> {
        self.pools.get_mut(slot(genre)?).ok_or(LibraryError::InvalidGenre { genre: genre.name() })
    }

    /// Tell every observer about an applied change
    fn notify(&self, event: &LibraryEvent<'_, G>) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

impl<G: Catalog> Library<G> for AvailabilityStore<G> {
    fn checkout(&mut self, genre: G) -> Result<Book<G>, LibraryError> {
        let book =
            self.pool_mut(genre)?.pop().ok_or(LibraryError::OutOfBooks { genre: genre.name() })?;
        self.notify(&LibraryEvent::CheckedOut(&book));
        Ok(book)
    }

    fn check_in(&mut self, book: &Book<G>, rating: i32) -> Result<(), LibraryError> {
        let rating = validate_rating(rating)?;
        let pool = self.pool_mut(book.genre())?;
        pool.push(book.with_rating(rating));
        if let Some(stored) = self.pool(book.genre())?.last() {
            self.notify(&LibraryEvent::CheckedIn(stored));
        }
        Ok(())
    }

    fn peek_highest_rated(&self, genre: G) -> Result<Book<G>, LibraryError> {
        self.highest_rated(genre).cloned()
    }

    fn available(&self, genre: G) -> usize {
        self.pool(genre).map_or(0, Vec::len)
    }
}

impl<G: Catalog> fmt::Display for AvailabilityStore<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for genre in G::ALL {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {}", genre.name(), self.available(*genre))?;
        }
        Ok(())
    }
}
