use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crossbeam_utils::CachePadded;

use crate::{
    book::{Book, validate_rating},
    error::LibraryError,
    events::LibraryEvent,
    genre::{Catalog, Genre},
    library::{Library, highest_rated, slot},
    observers::LibraryObserver,
};

/// Observer that can be notified from any thread
pub type SharedObserver<G = Genre> = Box<dyn LibraryObserver<G> + Send + Sync>;

/// Thread-safe library with an independent lock per genre pool
///
/// Operations on one genre are linearizable; operations on different genres
/// never contend. There is no atomicity across genres.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use genre_library::{Book, Genre, SharedLibrary};
///
/// let library: Arc<SharedLibrary> = Arc::new(SharedLibrary::new());
/// let returns = Arc::clone(&library);
/// thread::spawn(move || {
///     let book = Book::new(Genre::Western, "Shane", "Jack Schaefer", 0);
///     returns.check_in(&book, 80)
/// })
/// .join()
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(library.checkout(Genre::Western).unwrap().rating(), 80);
/// ```
pub struct SharedLibrary<G: Catalog = Genre> {
    /// One padded lock per catalog slot, each pool stored oldest-first
    pools: Box<[CachePadded<Mutex<Vec<Book<G>>>>]>,
    /// Registered availability observers
    observers: Vec<SharedObserver<G>>,
}

// Observers are trait objects, so Debug is written out by hand
impl<G: Catalog> fmt::Debug for SharedLibrary<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLibrary")
            .field("pools", &self.pools)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl<G: Catalog> Default for SharedLibrary<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Catalog> SharedLibrary<G> {
    /// Create a library with an empty pool for every genre of the catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty library with room for `capacity` books per genre
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pools: G::ALL
                .iter()
                .map(|_| CachePadded::new(Mutex::new(Vec::with_capacity(capacity))))
                .collect(),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of availability changes
    ///
    /// Observers run while the affected genre is locked, so they see the
    /// changes of one genre in the order they were applied. An observer must
    /// not call back into this library for the same genre: the lock is not
    /// reentrant and the call deadlocks.
    pub fn register_observer(&mut self, observer: SharedObserver<G>) {
        self.observers.push(observer);
    }

    /// Remove and return the book most recently checked in to `genre`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::OutOfBooks` if no book of that genre is available
    pub fn checkout(&self, genre: G) -> Result<Book<G>, LibraryError> {
        let mut pool = self.lock(genre)?;
        let book = pool.pop().ok_or(LibraryError::OutOfBooks { genre: genre.name() })?;
        self.notify(&LibraryEvent::CheckedOut(&book));
        Ok(book)
    }

    /// Return a book to its genre's pool with a fresh rating
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::IllegalRating` if the rating is outside
    /// `1..=100`; the library is not modified in that case
    pub fn check_in(&self, book: &Book<G>, rating: i32) -> Result<(), LibraryError> {
        let rated = book.with_rating(validate_rating(rating)?);
        let mut pool = self.lock(book.genre())?;
        pool.push(rated);
        if let Some(stored) = pool.last() {
            self.notify(&LibraryEvent::CheckedIn(stored));
        }
        Ok(())
    }

    /// Clone of the highest-rated available book of `genre`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::OutOfBooks` if no book of that genre is available
    pub fn peek_highest_rated(&self, genre: G) -> Result<Book<G>, LibraryError> {
        let pool = self.lock(genre)?;
        highest_rated(&pool).cloned().ok_or(LibraryError::OutOfBooks { genre: genre.name() })
    }

    /// Number of books of `genre` currently available
    #[must_use]
    pub fn available(&self, genre: G) -> usize {
        self.lock(genre).map_or(0, |pool| pool.len())
    }

    /// Number of available books across all genres
    ///
    /// Each genre is counted under its own lock, so the total is not a
    /// consistent snapshot while other threads are active.
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.pools.iter().map(|pool| lock_pool(pool).len()).sum()
    }

    /// Lock the pool of a genre
    fn lock(&self, genre: G) -> Result<MutexGuard<'_, Vec<Book<G>>>, LibraryError> {
        self.pools
            .get(slot(genre)?)
            .map(lock_pool)
            .ok_or(LibraryError::InvalidGenre { genre: genre.name() })
    }

    /// Tell every observer about an applied change
    fn notify(&self, event: &LibraryEvent<'_, G>) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

/// Acquire a pool lock, recovering from poisoning
///
/// Every critical section is a single push or pop, so a panicking observer
/// cannot leave the pool half-updated.
fn lock_pool<G: Catalog>(
    pool: &CachePadded<Mutex<Vec<Book<G>>>>,
) -> MutexGuard<'_, Vec<Book<G>>> {
    pool.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<G: Catalog> Library<G> for SharedLibrary<G> {
    fn checkout(&mut self, genre: G) -> Result<Book<G>, LibraryError> {
        Self::checkout(self, genre)
    }

    fn check_in(&mut self, book: &Book<G>, rating: i32) -> Result<(), LibraryError> {
        Self::check_in(self, book, rating)
    }

    fn peek_highest_rated(&self, genre: G) -> Result<Book<G>, LibraryError> {
        Self::peek_highest_rated(self, genre)
    }

    fn available(&self, genre: G) -> usize {
        Self::available(self, genre)
    }
}
