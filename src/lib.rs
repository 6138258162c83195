//! In-memory lending library that keeps its available books in one
//! last-in-first-out pool per genre.
//!
//! Checking a book out hands back the book of that genre that was most
//! recently checked in. Checking a book in stores a fresh copy carrying the
//! new rating. The highest-rated book of a genre can be looked up without
//! taking it off the shelf.
//!
//! ```
//! use genre_library::{AvailabilityStore, Book, Genre, Library, LibraryError};
//!
//! let mut library: AvailabilityStore = AvailabilityStore::new();
//! let book = Book::new(Genre::Western, "T", "A", 0);
//!
//! library.check_in(&book, 55)?;
//! assert_eq!(library.peek_highest_rated(Genre::Western)?.rating(), 55);
//! assert_eq!(library.checkout(Genre::Western)?, book.with_rating(55));
//! assert_eq!(
//!     library.peek_highest_rated(Genre::Western),
//!     Err(LibraryError::OutOfBooks { genre: "WESTERN" })
//! );
//! # Ok::<(), LibraryError>(())
//! ```

pub mod book;
pub mod error;
pub mod events;
pub mod genre;
pub mod library;
pub mod observers;
pub mod shared;
pub mod store;

pub use book::{Book, MAX_RATING, MIN_RATING, validate_rating};
pub use error::LibraryError;
pub use events::LibraryEvent;
pub use genre::{Catalog, Genre};
pub use library::Library;
pub use observers::{ActivityLogger, HighRatingNotifier, LibraryObserver};
pub use shared::{SharedLibrary, SharedObserver};
pub use store::AvailabilityStore;
