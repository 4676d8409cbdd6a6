// web_app/catalog/mod.rs - Fetch/pagination state machine for the catalog view
//
// The page holds one `CatalogState` in a signal. A fetch is started with
// `begin_fetch`, which hands out a `FetchTicket`; the result is applied with
// `complete`. Only the ticket of the current generation may change state, so a
// late or duplicated completion can never overwrite newer data.

use crate::web_app::error::{CatalogError, FetchFailure};
use crate::web_app::model::{Product, SKELETON_ROWS};
use crate::web_app::notify::Notification;

/// Identifies the single fetch allowed in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Nothing requested yet
    Idle,
    Loading(FetchTicket),
    Loaded,
    /// Last fetch failed; the previously displayed data is kept
    Error,
}

/// What applying a fetch result did
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Loaded { page: u32, count: usize, has_more: bool },
    /// The one notification to surface for this failure
    Failed(Notification),
    /// Ticket did not match the in-flight fetch; nothing changed
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    status: CatalogStatus,
    products: Vec<Product>,
    last_loaded_page: Option<u32>,
    has_more: bool,
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            status: CatalogStatus::Idle,
            products: Vec::new(),
            last_loaded_page: None,
            has_more: true,
            generation: 0,
        }
    }

    /// Enter `Loading` for `page`. Rejected while another fetch is in flight.
    pub fn begin_fetch(&mut self, page: u32) -> Result<FetchTicket, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage);
        }
        if let CatalogStatus::Loading(ticket) = self.status {
            tracing::debug!(page, in_flight = ticket.page, "fetch rejected, one already in flight");
            return Err(CatalogError::FetchInFlight(ticket.page));
        }

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            page,
        };
        self.status = CatalogStatus::Loading(ticket);
        tracing::debug!(page, generation = self.generation, "fetch started");
        Ok(ticket)
    }

    /// Apply the result of the fetch identified by `ticket`
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, FetchFailure>,
    ) -> FetchOutcome {
        if self.status != CatalogStatus::Loading(ticket) {
            tracing::debug!(page = ticket.page, generation = ticket.generation, "stale fetch result dropped");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.has_more = count > 0;
                self.last_loaded_page = Some(ticket.page);
                self.status = CatalogStatus::Loaded;
                tracing::info!(page = ticket.page, count, has_more = self.has_more, "page loaded");
                FetchOutcome::Loaded {
                    page: ticket.page,
                    count,
                    has_more: self.has_more,
                }
            }
            Err(failure) => {
                self.status = CatalogStatus::Error;
                tracing::warn!(page = ticket.page, error = %failure, "failed to fetch products");
                FetchOutcome::Failed(Notification::error(failure.user_message()))
            }
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last successfully loaded page, 1 before anything has loaded
    pub fn current_page(&self) -> u32 {
        self.last_loaded_page.unwrap_or(1)
    }

    /// Page requested by "Load More". Until a page has loaded this retries page 1.
    pub fn next_page(&self) -> u32 {
        match self.last_loaded_page {
            Some(page) => page.saturating_add(1),
            None => 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, CatalogStatus::Loading(_))
    }

    pub fn show_skeleton(&self) -> bool {
        matches!(self.status, CatalogStatus::Idle | CatalogStatus::Loading(_))
    }

    pub fn skeleton_rows(&self) -> usize {
        if self.show_skeleton() {
            SKELETON_ROWS
        } else {
            0
        }
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more && matches!(self.status, CatalogStatus::Loaded | CatalogStatus::Error)
    }

    pub fn show_end_of_list(&self) -> bool {
        !self.has_more && !self.is_loading()
    }

    /// A successful fetch came back with nothing to show
    pub fn show_empty_state(&self) -> bool {
        self.status == CatalogStatus::Loaded && self.products.is_empty()
    }

    /// The very first fetch failed, so there is nothing to fall back to
    pub fn show_load_error(&self) -> bool {
        self.status == CatalogStatus::Error && self.last_loaded_page.is_none()
    }

    pub fn shown_count(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::products::sample_page;

    #[test]
    fn test_new_state_is_idle() {
        let state = CatalogState::new();
        assert_eq!(state.status(), CatalogStatus::Idle);
        assert_eq!(state.current_page(), 1);
        assert!(state.has_more());
        assert!(!state.is_loading());
        assert!(state.show_skeleton());
        assert!(!state.can_load_more());
        assert!(!state.show_end_of_list());
    }

    #[test]
    fn test_begin_fetch_rejects_page_zero() {
        let mut state = CatalogState::new();
        assert_eq!(state.begin_fetch(0), Err(CatalogError::InvalidPage));
        assert_eq!(state.status(), CatalogStatus::Idle);
    }

    #[test]
    fn test_second_begin_is_rejected_while_loading() {
        let mut state = CatalogState::new();
        let ticket = state.begin_fetch(1).unwrap();
        assert_eq!(state.begin_fetch(2), Err(CatalogError::FetchInFlight(1)));
        assert_eq!(state.status(), CatalogStatus::Loading(ticket));
    }

    #[test]
    fn test_success_replaces_products() {
        let mut state = CatalogState::new();
        let ticket = state.begin_fetch(1).unwrap();
        state.complete(ticket, Ok(sample_page(1, 10)));

        let ticket = state.begin_fetch(2).unwrap();
        let page_two = sample_page(2, 10);
        let outcome = state.complete(ticket, Ok(page_two.clone()));

        assert_eq!(
            outcome,
            FetchOutcome::Loaded {
                page: 2,
                count: 10,
                has_more: true
            }
        );
        assert_eq!(state.products(), page_two.as_slice());
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.next_page(), 3);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = CatalogState::new();
        let first = state.begin_fetch(1).unwrap();
        state.complete(first, Ok(sample_page(1, 10)));
        let second = state.begin_fetch(2).unwrap();

        assert_eq!(state.complete(first, Ok(Vec::new())), FetchOutcome::Stale);
        assert!(state.is_loading());
        assert!(state.has_more());

        state.complete(second, Ok(sample_page(2, 3)));
        assert_eq!(state.complete(second, Ok(Vec::new())), FetchOutcome::Stale);
        assert_eq!(state.shown_count(), 3);
    }

    #[test]
    fn test_failure_before_first_load_retries_page_one() {
        let mut state = CatalogState::new();
        let ticket = state.begin_fetch(1).unwrap();
        let outcome = state.complete(ticket, Err(FetchFailure::Status(500)));

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(state.status(), CatalogStatus::Error);
        assert!(state.show_load_error());
        assert!(state.can_load_more());
        assert_eq!(state.next_page(), 1);
    }

    #[test]
    fn test_skeleton_rows_only_while_loading() {
        let mut state = CatalogState::new();
        let ticket = state.begin_fetch(1).unwrap();
        assert_eq!(state.skeleton_rows(), SKELETON_ROWS);
        state.complete(ticket, Ok(sample_page(1, 4)));
        assert_eq!(state.skeleton_rows(), 0);
    }

    #[test]
    fn test_empty_page_shows_empty_and_end_states() {
        let mut state = CatalogState::new();
        let ticket = state.begin_fetch(1).unwrap();
        state.complete(ticket, Ok(Vec::new()));

        assert!(state.show_empty_state());
        assert!(state.show_end_of_list());
        assert!(!state.can_load_more());
    }
}
