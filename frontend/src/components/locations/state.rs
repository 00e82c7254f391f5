//! Runtime state of the location list.

use common::client::list_state::ListState;
use common::client::PAGE_LIMIT;
use common::model::location::Location;
use common::model::session::SessionUser;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use web_sys::IntersectionObserver;
use yew::prelude::*;

/// Inline editor for one record's jam link.
pub struct EditState {
    pub id: String,
    pub draft: String,
    pub saving: bool,
}

pub struct LocationsComponent {
    /// Listing, search results and request tickets.
    pub list: ListState,

    /// Pending debounced search. Replacing or dropping it cancels the timer.
    pub search_timer: Option<Timeout>,

    /// Empty element after the last card, watched by `observer`.
    pub sentinel_ref: NodeRef,
    pub observer: Option<IntersectionObserver>,
    /// Keeps the JS callback alive for as long as `observer` is.
    pub observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    /// Set after a page lands; `rendered` then re-arms the observer so a
    /// sentinel that never left the viewport fires again.
    pub reobserve: bool,
    /// Shows a "Load more" button instead of relying on the sentinel.
    pub manual_paging: bool,

    pub editing: Option<EditState>,
    pub add_open: bool,
}

impl LocationsComponent {
    pub fn new() -> Self {
        Self {
            list: ListState::new(PAGE_LIMIT),
            search_timer: None,
            sentinel_ref: NodeRef::default(),
            observer: None,
            observer_callback: None,
            reobserve: false,
            manual_paging: false,
            editing: None,
            add_open: false,
        }
    }
}

/// Creator or admin; mirrors the server's rule for edits and deletes.
pub fn can_modify(user: Option<&SessionUser>, is_admin: bool, location: &Location) -> bool {
    user.is_some_and(|user| is_admin || location.is_owned_by(&user.email))
}
