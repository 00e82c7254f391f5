use common::client::list_state::{PageRequest, SearchRequest};
use common::model::location::Location;
use common::responses::LocationPage;

pub enum Msg {
    PageLoaded(PageRequest, Result<LocationPage, String>),
    /// The end-of-list sentinel scrolled into view.
    SentinelVisible,
    /// No `IntersectionObserver`; paging falls back to a button.
    ObserverUnavailable,
    SearchInput(String),
    /// Debounce timer fired.
    RunSearch(SearchRequest),
    SearchLoaded(SearchRequest, Result<Vec<Location>, String>),
    OpenAdd,
    CloseAdd,
    Created(Location),
    StartEdit(String),
    EditDraft(String),
    CancelEdit,
    SaveEdit,
    Saved(Result<Location, String>),
    Delete(String),
    /// Server answer for an optimistic delete; carries the removed record so
    /// it can be put back.
    Deleted(Location, Result<(), String>),
    DismissError,
}
