//! Browser-side list state, kept free of any DOM or network types so it can
//! be driven from tests with literal fixtures.
//!
//! - [`cache::LocationCache`] is the optimistic id -> record map.
//! - [`list_state::ListState`] tracks loading, pagination and search, and
//!   hands out tickets that let the UI drop stale responses.

pub mod cache;
pub mod list_state;

/// Delay between the last keystroke and the search request, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Page size the list view asks for.
pub const PAGE_LIMIT: u32 = 10;
