//! Lending behavior shared by every `Library` implementation.

#![allow(clippy::expect_used)]

use genre_library::{
    AvailabilityStore, Book, Catalog, Genre, Library, LibraryError, MAX_RATING, MIN_RATING,
    SharedLibrary,
};

/// Run a check against both library implementations
fn for_each_library(check: fn(&mut dyn Library)) {
    let mut store: AvailabilityStore = AvailabilityStore::new();
    check(&mut store);

    let mut shared: SharedLibrary = SharedLibrary::new();
    check(&mut shared);
}

/// Helper function to build an unrated book
fn unrated(genre: Genre, title: &str) -> Book {
    Book::new(genre, title, "Test Author", 1)
}

/// Snapshot of every genre's pool size
fn pool_sizes(library: &dyn Library) -> Vec<usize> {
    Genre::ALL.iter().map(|genre| library.available(*genre)).collect()
}

#[test]
fn test_empty_genres_are_out_of_books() {
    for_each_library(|library| {
        for genre in Genre::ALL {
            let expected = Err(LibraryError::OutOfBooks { genre: genre.name() });
            assert_eq!(library.peek_highest_rated(*genre), expected);
            assert_eq!(library.checkout(*genre), expected);
        }
    });
}

#[test]
fn test_illegal_ratings_leave_pools_unchanged() {
    for_each_library(|library| {
        library.check_in(&unrated(Genre::GeneralFiction, "Kept"), 42).expect("valid rating");
        let before = pool_sizes(library);

        for rating in [i32::MIN, -1, 0, 101, 1_000, i32::MAX] {
            for genre in Genre::ALL {
                let result = library.check_in(&unrated(*genre, "Rejected"), rating);
                assert_eq!(result, Err(LibraryError::IllegalRating { rating }));
            }
        }

        assert_eq!(pool_sizes(library), before);
        let kept = library.peek_highest_rated(Genre::GeneralFiction).expect("one book kept");
        assert_eq!(kept.title(), "Kept");
    });
}

#[test]
fn test_boundary_ratings_are_accepted() {
    for_each_library(|library| {
        library.check_in(&unrated(Genre::NonFiction, "Low"), MIN_RATING).expect("lowest rating");
        library.check_in(&unrated(Genre::NonFiction, "High"), MAX_RATING).expect("highest rating");
        assert_eq!(library.available(Genre::NonFiction), 2);
    });
}

#[test]
fn test_check_in_then_checkout_returns_rerated_book() {
    for_each_library(|library| {
        let returned = Book::new(Genre::ScienceFiction, "Hyperion", "Dan Simmons", 3);
        library.check_in(&returned, 88).expect("valid rating");

        let out = library.checkout(Genre::ScienceFiction).expect("book was checked in");
        assert_eq!(out.genre(), Genre::ScienceFiction);
        assert_eq!(out.title(), "Hyperion");
        assert_eq!(out.author(), "Dan Simmons");
        assert_eq!(out.rating(), 88);
    });
}

#[test]
fn test_checkout_order_is_last_in_first_out() {
    for_each_library(|library| {
        library.check_in(&unrated(Genre::Western, "A"), 50).expect("valid rating");
        library.check_in(&unrated(Genre::Western, "B"), 50).expect("valid rating");

        let first = library.checkout(Genre::Western).expect("two books available");
        let second = library.checkout(Genre::Western).expect("one book available");
        assert_eq!((first.title(), second.title()), ("B", "A"));
    });
}

#[test]
fn test_highest_rated_is_non_destructive() {
    for_each_library(|library| {
        for genre in Genre::ALL {
            for rating in 1..=3 {
                let book = unrated(*genre, &format!("Book {rating}"));
                library.check_in(&book, rating).expect("valid rating");
            }
            library.check_in(&unrated(*genre, "Book 4"), 1).expect("valid rating");
        }

        for genre in Genre::ALL {
            let best = library.peek_highest_rated(*genre).expect("four books available");
            assert_eq!(best.title(), "Book 3");
            assert_eq!(best.rating(), 3);
            assert_eq!(library.available(*genre), 4);
        }

        let out = library.checkout(Genre::NonFiction).expect("four books available");
        assert_eq!(out.title(), "Book 4");
        assert_eq!(out.rating(), 1);
        assert_eq!(library.available(Genre::NonFiction), 3);
    });
}

#[test]
fn test_single_western_round_trip() {
    for_each_library(|library| {
        let book = Book::new(Genre::Western, "T", "A", 0);
        library.check_in(&book, 55).expect("valid rating");

        let peeked = library.peek_highest_rated(Genre::Western).expect("one western");
        assert_eq!((peeked.title(), peeked.author(), peeked.rating()), ("T", "A", 55));

        assert_eq!(library.checkout(Genre::Western), Ok(peeked));
        assert_eq!(
            library.peek_highest_rated(Genre::Western),
            Err(LibraryError::OutOfBooks { genre: "WESTERN" })
        );
    });
}

#[test]
fn test_failures_leave_library_usable() {
    for_each_library(|library| {
        assert!(library.checkout(Genre::Western).is_err());
        assert!(library.check_in(&unrated(Genre::Western, "Bad"), 0).is_err());

        library.check_in(&unrated(Genre::Western, "Good"), 9).expect("valid rating");
        assert_eq!(library.available(Genre::Western), 1);
        assert!(library.checkout(Genre::Western).is_ok());
    });
}
