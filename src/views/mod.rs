// src/views/mod.rs
//
// Per-page view state. Pure data: nothing in here touches the network.
// Front-ends start a load (getting a Ticket), run the request somewhere else,
// then hand the result back through the view's `apply_*` method.
//
// - LoadSlot: generation counter; results from an outdated load are dropped.
// - PendingDelete: the explicit confirmation step in front of every delete.

pub mod comparisons;
pub mod models;
pub mod scraper;

pub use comparisons::{ComparisonsView, DetailState};
pub use models::ModelsView;
pub use scraper::{ScrapeDraft, ScrapeOutcome, ScraperView};

/// Identifies one load. Only the newest ticket of a slot is honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct LoadSlot {
    generation: u64,
    loading: bool,
}

impl LoadSlot {
    /// Start a new load; any ticket handed out before is now stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    /// True if `ticket` is current. Consumes the loading flag.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            logd!("dropping stale result (ticket {}, current {})", ticket.0, self.generation);
            return false;
        }
        self.loading = false;
        true
    }

    /// Forget whatever is in flight (navigated away, target deleted).
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// A delete waiting for the user to say yes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete<T> {
    target: Option<T>,
}

impl<T> Default for PendingDelete<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T> PendingDelete<T> {
    pub fn request(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn pending(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// The confirmed target; the caller issues the delete.
    pub fn confirm(&mut self) -> Option<T> {
        self.target.take()
    }
}

/// Case-insensitive substring match. `needle` must already be lowercase.
#[inline]
pub(crate) fn contains_ci(hay: &str, needle: &str) -> bool {
    needle.is_empty() || hay.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_accepted() {
        let mut slot = LoadSlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert!(!slot.accept(first));
        assert!(slot.is_loading());
        assert!(slot.accept(second));
        assert!(!slot.is_loading());
    }

    #[test]
    fn invalidate_drops_in_flight_load() {
        let mut slot = LoadSlot::default();
        let t = slot.begin();
        slot.invalidate();
        assert!(!slot.accept(t));
    }

    #[test]
    fn pending_delete_needs_confirm() {
        let mut d = PendingDelete::default();
        d.request(4);
        d.cancel();
        assert_eq!(d.confirm(), None);
        d.request(5);
        assert_eq!(d.confirm(), Some(5));
        assert!(d.pending().is_none());
    }
}
