use crate::{events::LibraryEvent, genre::Catalog, genre::Genre};

/// Trait for availability change observation
pub trait LibraryObserver<G: Catalog = Genre> {
    /// Called after a checkout or check-in has been applied
    fn on_event(&self, event: &LibraryEvent<'_, G>);
}

/// Logs every availability change through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLogger;

impl<G: Catalog> LibraryObserver<G> for ActivityLogger {
    fn on_event(&self, event: &LibraryEvent<'_, G>) {
        let book = event.book();
        match event {
            LibraryEvent::CheckedOut(_) => tracing::info!(
                genre = book.genre().name(),
                title = book.title(),
                author = book.author(),
                rating = book.rating(),
                "book checked out"
            ),
            LibraryEvent::CheckedIn(_) => tracing::info!(
                genre = book.genre().name(),
                title = book.title(),
                author = book.author(),
                rating = book.rating(),
                "book checked in"
            ),
        }
    }
}

/// Announces check-ins rated at or above a threshold
#[derive(Debug, Clone)]
pub struct HighRatingNotifier {
    /// Minimum rating that triggers a notification
    pub threshold: i32,
}

impl HighRatingNotifier {
    /// Create a notifier for ratings of at least `threshold`
    #[must_use]
    pub const fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    /// Whether an event warrants a notification
    #[must_use]
    pub fn should_notify<G: Catalog>(&self, event: &LibraryEvent<'_, G>) -> bool {
        matches!(event, LibraryEvent::CheckedIn(book) if book.rating() >= self.threshold)
    }
}

impl<G: Catalog> LibraryObserver<G> for HighRatingNotifier {
    fn on_event(&self, event: &LibraryEvent<'_, G>) {
        if self.should_notify(event) {
            let book = event.book();
            tracing::info!(
                target: "genre_library::notifications",
                genre = book.genre().name(),
                title = book.title(),
                rating = book.rating(),
                "highly rated book is available"
            );
        }
    }
}
