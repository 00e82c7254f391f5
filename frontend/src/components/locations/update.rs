//! Message handling for the location list.
//!
//! Network calls are spawned with the ticket from `ListState`; the reply is
//! routed back as a message and applied only if that ticket is still current.

use common::client::list_state::{PageRequest, SearchIntent, SearchRequest};
use common::client::SEARCH_DEBOUNCE_MS;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{confirm, show_toast};

use super::messages::Msg;
use super::state::{can_modify, EditState, LocationsComponent};

pub fn update(component: &mut LocationsComponent, ctx: &Context<LocationsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::PageLoaded(request, Ok(page)) => {
            let applied = component.list.apply_page(&request, page);
            component.reobserve |= applied;
            applied
        }
        Msg::PageLoaded(request, Err(e)) => {
            gloo_console::error!("failed to fetch locations:", e.clone());
            component.list.page_failed(&request, e)
        }
        Msg::SentinelVisible => match component.list.next_page() {
            Some(request) => {
                fetch_page(ctx, request);
                true
            }
            None => false,
        },
        Msg::ObserverUnavailable => {
            component.manual_paging = true;
            true
        }
        Msg::SearchInput(input) => {
            match component.list.set_query(&input) {
                SearchIntent::Clear => component.search_timer = None,
                SearchIntent::Debounce(request) => {
                    let link = ctx.link().clone();
                    component.search_timer = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                        link.send_message(Msg::RunSearch(request));
                    }));
                }
            }
            true
        }
        Msg::RunSearch(request) => {
            component.search_timer = None;
            if component.list.is_current(&request) {
                run_search(ctx, request);
            }
            false
        }
        Msg::SearchLoaded(request, Ok(locations)) => component.list.apply_search(&request, locations),
        Msg::SearchLoaded(request, Err(e)) => {
            gloo_console::error!("search failed:", e.clone());
            component.list.search_failed(&request, e)
        }
        Msg::OpenAdd => {
            component.add_open = true;
            true
        }
        Msg::CloseAdd => {
            component.add_open = false;
            true
        }
        Msg::Created(location) => {
            show_toast(&format!("Added {}", location.name));
            component.list.location_created(location);
            true
        }
        Msg::StartEdit(id) => {
            let draft = find_visible(component, &id)
                .map(|l| l.jam_link)
                .unwrap_or_default();
            component.editing = Some(EditState { id, draft, saving: false });
            true
        }
        Msg::EditDraft(draft) => {
            if let Some(edit) = component.editing.as_mut() {
                edit.draft = draft;
            }
            false
        }
        Msg::CancelEdit => {
            component.editing = None;
            true
        }
        Msg::SaveEdit => {
            let Some(edit) = component.editing.as_mut() else {
                return false;
            };
            if edit.saving {
                return false;
            }
            edit.saving = true;
            let id = edit.id.clone();
            let draft = edit.draft.trim().to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Saved(api::update_link(&id, &draft).await));
            });
            true
        }
        Msg::Saved(Ok(location)) => {
            component.editing = None;
            component.list.location_updated(location);
            true
        }
        Msg::Saved(Err(e)) => {
            if let Some(edit) = component.editing.as_mut() {
                edit.saving = false;
            }
            component.list.set_error(e);
            true
        }
        Msg::Delete(id) => {
            let props = ctx.props();
            let Some(location) = find_visible(component, &id) else {
                return false;
            };
            if !can_modify(props.user.as_ref(), props.is_admin, &location)
                || !confirm("Are you sure you want to delete this location?")
            {
                return false;
            }
            component.list.location_deleted(&id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete(&location.id).await;
                link.send_message(Msg::Deleted(location, result));
            });
            true
        }
        Msg::Deleted(location, Ok(())) => {
            show_toast(&format!("Deleted {}", location.name));
            false
        }
        Msg::Deleted(location, Err(e)) => {
            component.list.location_created(location);
            component.list.set_error(e);
            true
        }
        Msg::DismissError => {
            component.list.clear_error();
            true
        }
    }
}

fn find_visible(component: &LocationsComponent, id: &str) -> Option<common::model::location::Location> {
    component
        .list
        .visible()
        .into_iter()
        .find(|l| l.id == id)
        .cloned()
}

pub fn fetch_page(ctx: &Context<LocationsComponent>, request: PageRequest) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::fetch_page(request.page, request.limit).await;
        link.send_message(Msg::PageLoaded(request, result));
    });
}

fn run_search(ctx: &Context<LocationsComponent>, request: SearchRequest) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::search(&request.query).await;
        link.send_message(Msg::SearchLoaded(request, result));
    });
}
