//! State machine behind the location list.
//!
//! ```text
//! Loading --first page--> Ready(Listing) <--query cleared-- Ready(Searching)
//!                           |  ^                               ^
//!              sentinel --> paginating            query typed -+
//! ```
//!
//! Every request the UI issues is described by a ticket handed out here.
//! Responses are applied only when their ticket is still current, so a slow
//! reply that was superseded by newer input, or that arrives after a reset,
//! is dropped instead of clobbering the visible list.

use super::cache::LocationCache;
use crate::model::location::Location;
use crate::responses::LocationPage;
use crate::slug::name_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Listing,
    Searching,
}

/// Ticket for one listing page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    epoch: u64,
    removed: u32,
}

/// Ticket for one search fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    seq: u64,
}

/// What the UI should do after the search input changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Query is blank: cancel any pending timer and show the listing again.
    Clear,
    /// Schedule this request after the debounce delay, replacing any pending one.
    Debounce(SearchRequest),
}

#[derive(Debug, Clone)]
pub struct ListState {
    cache: LocationCache,
    results: Vec<Location>,
    query: String,
    limit: u32,
    loaded_pages: u32,
    /// Loaded records deleted since the last page was applied. Each one
    /// shifts the server's later rows up by one offset.
    removed: u32,
    pending_page: Option<u32>,
    has_more: bool,
    phase: Phase,
    paginating: bool,
    search_pending: bool,
    epoch: u64,
    search_seq: u64,
    error: Option<String>,
}

impl ListState {
    pub fn new(limit: u32) -> Self {
        Self {
            cache: LocationCache::new(),
            results: Vec::new(),
            query: String::new(),
            limit: limit.max(1),
            loaded_pages: 0,
            removed: 0,
            pending_page: None,
            has_more: true,
            phase: Phase::Loading,
            paginating: false,
            search_pending: false,
            epoch: 0,
            search_seq: 0,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        if self.query.trim().is_empty() {
            Mode::Listing
        } else {
            Mode::Searching
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_paginating(&self) -> bool {
        self.paginating
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn cache(&self) -> &LocationCache {
        &self.cache
    }

    /// The records the list should render right now.
    pub fn visible(&self) -> Vec<&Location> {
        match self.mode() {
            Mode::Listing => self.cache.ordered(),
            Mode::Searching => self.results.iter().collect(),
        }
    }

    /// Resets the listing and returns the ticket for page 1. Any page
    /// request still in flight becomes stale.
    pub fn start(&mut self) -> PageRequest {
        self.epoch += 1;
        self.cache.clear();
        self.loaded_pages = 0;
        self.removed = 0;
        self.pending_page = Some(1);
        self.has_more = true;
        self.phase = Phase::Loading;
        self.paginating = false;
        self.error = None;
        PageRequest {
            page: 1,
            limit: self.limit,
            epoch: self.epoch,
            removed: 0,
        }
    }

    /// Called when the end-of-list sentinel scrolls into view. Yields a
    /// ticket only when idle, more pages remain and no search is active.
    ///
    /// After deletes the first unseen server row sits `removed` offsets
    /// earlier than the loaded window suggests, so the ticket points at the
    /// page holding that row and the overlap is merged away by id.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Ready
            || self.paginating
            || !self.has_more
            || self.mode() == Mode::Searching
        {
            return None;
        }
        let seen = self
            .loaded_pages
            .saturating_mul(self.limit)
            .saturating_sub(self.removed);
        let page = seen / self.limit + 1;
        self.paginating = true;
        self.pending_page = Some(page);
        Some(PageRequest {
            page,
            limit: self.limit,
            epoch: self.epoch,
            removed: self.removed,
        })
    }

    /// Applies a fetched page. Returns `false` when the ticket is stale.
    ///
    /// Records created locally shift the server's offsets, so a later page
    /// may repeat an id already cached; merging by id absorbs that.
    pub fn apply_page(&mut self, request: &PageRequest, page: LocationPage) -> bool {
        if request.epoch != self.epoch || self.pending_page != Some(request.page) {
            return false;
        }
        self.cache.merge_all(page.locations);
        self.loaded_pages = request.page;
        self.removed = self.removed.saturating_sub(request.removed);
        self.pending_page = None;
        self.has_more = page.has_more;
        self.phase = Phase::Ready;
        self.paginating = false;
        true
    }

    pub fn page_failed(&mut self, request: &PageRequest, message: impl Into<String>) -> bool {
        if request.epoch != self.epoch {
            return false;
        }
        self.phase = Phase::Ready;
        self.paginating = false;
        self.pending_page = None;
        self.error = Some(message.into());
        true
    }

    /// Records new search input. Every call invalidates earlier search
    /// tickets, whether or not their timer already fired.
    pub fn set_query(&mut self, input: &str) -> SearchIntent {
        self.query = input.to_string();
        self.search_seq += 1;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.results.clear();
            self.search_pending = false;
            return SearchIntent::Clear;
        }
        self.search_pending = true;
        SearchIntent::Debounce(SearchRequest {
            query: trimmed.to_string(),
            seq: self.search_seq,
        })
    }

    pub fn is_current(&self, request: &SearchRequest) -> bool {
        request.seq == self.search_seq
    }

    pub fn apply_search(&mut self, request: &SearchRequest, locations: Vec<Location>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.results = locations;
        self.search_pending = false;
        self.error = None;
        true
    }

    pub fn search_failed(&mut self, request: &SearchRequest, message: impl Into<String>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.search_pending = false;
        self.error = Some(message.into());
        true
    }

    /// Splices a freshly created record into the list, and into the search
    /// results when it matches the active query.
    pub fn location_created(&mut self, location: Location) {
        if self.mode() == Mode::Searching && self.matches_query(&location) {
            self.results.retain(|l| l.id != location.id);
            self.results.insert(0, location.clone());
        }
        self.cache.merge(location);
    }

    pub fn location_updated(&mut self, location: Location) {
        if let Some(slot) = self.results.iter_mut().find(|l| l.id == location.id) {
            *slot = location.clone();
            self.results
                .sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        }
        self.cache.merge(location);
    }

    pub fn location_deleted(&mut self, id: &str) {
        self.results.retain(|l| l.id != id);
        if self.cache.remove(id).is_some() {
            self.removed += 1;
        }
    }

    fn matches_query(&self, location: &Location) -> bool {
        name_key(&location.name).contains(&self.query.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::cache::tests::location;

    fn page(locations: Vec<Location>, has_more: bool) -> LocationPage {
        LocationPage { locations, has_more }
    }

    fn ready_state() -> ListState {
        let mut state = ListState::new(2);
        let first = state.start();
        assert!(state.apply_page(
            &first,
            page(vec![location("a", "Alpha", 9), location("b", "Beta", 8)], true)
        ));
        state
    }

    fn visible_ids(state: &ListState) -> Vec<String> {
        state.visible().iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn starts_loading_then_ready_after_first_page() {
        let mut state = ListState::new(2);
        assert_eq!(state.phase(), Phase::Loading);
        let first = state.start();
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 2);
        assert_eq!(state.next_page(), None);
        state.apply_page(&first, page(vec![location("a", "Alpha", 9)], false));
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.mode(), Mode::Listing);
        assert!(!state.has_more());
    }

    #[test]
    fn sentinel_fetches_next_page_once() {
        let mut state = ready_state();
        let second = state.next_page().unwrap();
        assert_eq!(second.page, 2);
        assert!(state.is_paginating());
        assert_eq!(state.next_page(), None);
        assert!(state.apply_page(&second, page(vec![location("c", "Gamma", 7)], false)));
        assert_eq!(visible_ids(&state), ["a", "b", "c"]);
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn duplicate_page_responses_are_ignored() {
        let mut state = ready_state();
        let second = state.next_page().unwrap();
        assert!(state.apply_page(&second, page(vec![location("c", "Gamma", 7)], true)));
        assert!(!state.apply_page(&second, page(vec![location("x", "Other", 1)], true)));
        assert!(state.cache().get("x").is_none());
    }

    #[test]
    fn restart_invalidates_in_flight_pages() {
        let mut state = ready_state();
        let second = state.next_page().unwrap();
        let fresh = state.start();
        assert!(!state.apply_page(&second, page(vec![location("c", "Gamma", 7)], false)));
        assert!(!state.page_failed(&second, "boom"));
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.apply_page(&fresh, page(vec![], false)));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn search_suppresses_pagination() {
        let mut state = ready_state();
        let SearchIntent::Debounce(request) = state.set_query("gam") else {
            panic!("expected debounce");
        };
        assert_eq!(state.mode(), Mode::Searching);
        assert_eq!(state.next_page(), None);
        assert!(state.apply_search(&request, vec![location("c", "Gamma", 7)]));
        assert_eq!(visible_ids(&state), ["c"]);

        assert_eq!(state.set_query("  "), SearchIntent::Clear);
        assert_eq!(state.mode(), Mode::Listing);
        assert_eq!(visible_ids(&state), ["a", "b"]);
        assert!(state.next_page().is_some());
    }

    #[test]
    fn stale_search_responses_are_dropped() {
        let mut state = ready_state();
        let SearchIntent::Debounce(old) = state.set_query("al") else {
            panic!("expected debounce");
        };
        let SearchIntent::Debounce(new) = state.set_query("alp") else {
            panic!("expected debounce");
        };
        assert_eq!(new.query, "alp");
        assert!(!state.is_current(&old));
        assert!(!state.apply_search(&old, vec![location("z", "Alzheimer Hall", 1)]));
        assert!(state.is_search_pending());
        assert!(state.apply_search(&new, vec![location("a", "Alpha", 9)]));
        assert!(!state.is_search_pending());
        assert_eq!(visible_ids(&state), ["a"]);
    }

    #[test]
    fn clearing_query_cancels_pending_search() {
        let mut state = ready_state();
        let SearchIntent::Debounce(request) = state.set_query("beta") else {
            panic!("expected debounce");
        };
        state.set_query("");
        assert!(!state.apply_search(&request, vec![location("b", "Beta", 8)]));
        assert!(!state.search_failed(&request, "late failure"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failures_surface_as_errors() {
        let mut state = ListState::new(10);
        let first = state.start();
        assert!(state.page_failed(&first, "Failed to fetch locations"));
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.error(), Some("Failed to fetch locations"));
        state.clear_error();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn optimistic_mutations_splice_the_list() {
        let mut state = ready_state();
        state.location_created(location("n", "New Place", 30));
        assert_eq!(visible_ids(&state), ["n", "a", "b"]);

        let mut edited = location("b", "Beta", 40);
        edited.jam_link = "https://example.com/edited".to_string();
        state.location_updated(edited);
        assert_eq!(visible_ids(&state), ["b", "n", "a"]);
        assert_eq!(state.cache().get("b").unwrap().jam_link, "https://example.com/edited");

        state.location_deleted("n");
        assert_eq!(visible_ids(&state), ["b", "a"]);
    }

    /// Serves `records` newest first with the backend's page arithmetic.
    fn serve(records: &[Location], request: &PageRequest) -> LocationPage {
        let start = ((request.page - 1) * request.limit) as usize;
        let end = (start + request.limit as usize).min(records.len());
        page(
            records.get(start..end).unwrap_or_default().to_vec(),
            (request.page * request.limit) < records.len() as u32,
        )
    }

    fn page_to_end(state: &mut ListState, server: &[Location]) {
        while let Some(request) = state.next_page() {
            assert!(state.apply_page(&request, serve(server, &request)));
        }
    }

    #[test]
    fn paging_after_delete_reaches_every_record() {
        let mut server: Vec<Location> = (0..4)
            .map(|i| location(&format!("r{i}"), &format!("Room {i}"), 50 - i))
            .collect();
        let mut state = ListState::new(2);
        let first = state.start();
        assert!(state.apply_page(&first, serve(&server, &first)));

        state.location_deleted("r0");
        server.remove(0);
        page_to_end(&mut state, &server);

        assert_eq!(visible_ids(&state), ["r1", "r2", "r3"]);
        assert!(!state.has_more());
    }

    #[test]
    fn paging_after_deleting_a_whole_page() {
        let mut server: Vec<Location> = (0..7)
            .map(|i| location(&format!("r{i}"), &format!("Room {i}"), 50 - i))
            .collect();
        let mut state = ListState::new(2);
        let first = state.start();
        assert!(state.apply_page(&first, serve(&server, &first)));
        let second = state.next_page().unwrap();
        assert!(state.apply_page(&second, serve(&server, &second)));

        for id in ["r0", "r1", "r3"] {
            state.location_deleted(id);
            server.retain(|l| l.id != id);
        }
        page_to_end(&mut state, &server);

        assert_eq!(visible_ids(&state), ["r2", "r4", "r5", "r6"]);
    }

    #[test]
    fn deleting_an_unloaded_search_hit_keeps_offsets() {
        let mut state = ready_state();
        state.location_deleted("elsewhere");
        assert_eq!(state.next_page().unwrap().page, 2);
    }

    #[test]
    fn mutations_reach_search_results() {
        let mut state = ready_state();
        let SearchIntent::Debounce(request) = state.set_query("place") else {
            panic!("expected debounce");
        };
        state.apply_search(&request, vec![location("p", "Old Place", 1)]);
        state.location_created(location("q", "Quiet Place", 20));
        state.location_created(location("r", "Rooftop", 21));
        assert_eq!(visible_ids(&state), ["q", "p"]);

        state.location_updated(location("p", "Old Place", 25));
        assert_eq!(visible_ids(&state), ["p", "q"]);

        state.location_deleted("q");
        assert_eq!(visible_ids(&state), ["p"]);
        assert!(state.cache().get("r").is_some());
    }
}
