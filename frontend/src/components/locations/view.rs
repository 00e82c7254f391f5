//! Rendering for the location list: search box, add button, cards and the
//! scroll sentinel.

use common::client::list_state::{Mode, Phase};
use common::model::location::Location;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::add_location_modal::AddLocationModal;
use crate::helpers::{format_timestamp, short_link};

use super::messages::Msg;
use super::state::{can_modify, LocationsComponent};

pub fn view(component: &LocationsComponent, ctx: &Context<LocationsComponent>) -> Html {
    let link = ctx.link();
    let signed_in = ctx.props().user.is_some();

    html! {
        <div class="locations">
            { build_search_box(component, link) }

            if let Some(error) = component.list.error() {
                <div class="error-banner" onclick={link.callback(|_| Msg::DismissError)}>
                    { error }
                </div>
            }

            if signed_in {
                <button class="button add-location" onclick={link.callback(|_| Msg::OpenAdd)}>
                    { "+ Add Location" }
                </button>
            }

            { build_list(component, ctx) }

            <div class="sentinel" ref={component.sentinel_ref.clone()}></div>
            { build_footer(component, link) }

            <AddLocationModal
                open={component.add_open}
                on_close={link.callback(|_| Msg::CloseAdd)}
                on_created={link.callback(Msg::Created)}
            />
        </div>
    }
}

fn build_search_box(component: &LocationsComponent, link: &Scope<LocationsComponent>) -> Html {
    let on_input = link.callback(|e: InputEvent| {
        Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    html! {
        <div class="search">
            <input
                type="search"
                class="text-input"
                placeholder="Search locations"
                value={component.list.query().to_string()}
                oninput={on_input}
            />
            if component.list.is_search_pending() {
                <span class="spinner small"></span>
            }
        </div>
    }
}

fn build_list(component: &LocationsComponent, ctx: &Context<LocationsComponent>) -> Html {
    if component.list.phase() == Phase::Loading {
        return html! { <div class="centered"><span class="spinner"></span></div> };
    }
    let visible = component.list.visible();
    if visible.is_empty() && !component.list.is_search_pending() {
        let text = match component.list.mode() {
            Mode::Searching => "No locations match your search.",
            Mode::Listing => "No locations yet.",
        };
        return html! { <p class="muted centered">{ text }</p> };
    }
    html! {
        <div class="location-cards">
            { for visible.into_iter().map(|location| build_card(component, ctx, location)) }
        </div>
    }
}

fn build_card(
    component: &LocationsComponent,
    ctx: &Context<LocationsComponent>,
    location: &Location,
) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let editable = can_modify(props.user.as_ref(), props.is_admin, location);
    let editing = component.editing.as_ref().filter(|edit| edit.id == location.id);

    let link_row = match editing {
        Some(edit) => {
            let on_draft = link.callback(|e: InputEvent| {
                Msg::EditDraft(e.target_unchecked_into::<HtmlInputElement>().value())
            });
            html! {
                <div class="edit-row">
                    <input
                        type="url"
                        class="text-input"
                        value={edit.draft.clone()}
                        oninput={on_draft}
                        disabled={edit.saving}
                    />
                    <button class="icon-button save" title="Save" onclick={link.callback(|_| Msg::SaveEdit)} disabled={edit.saving}>
                        <span class="material-icons">{ "save" }</span>
                    </button>
                    <button class="icon-button cancel" title="Cancel" onclick={link.callback(|_| Msg::CancelEdit)} disabled={edit.saving}>
                        <span class="material-icons">{ "close" }</span>
                    </button>
                </div>
            }
        }
        None => {
            let id = location.id.clone();
            let delete_id = location.id.clone();
            html! {
                <div class="link-row">
                    if location.has_jam_link() {
                        <a class="jam-link" href={location.jam_link.clone()} target="_blank" rel="noopener noreferrer">
                            { short_link(&location.jam_link) }
                            <span class="material-icons">{ "open_in_new" }</span>
                        </a>
                    } else {
                        <span class="muted">{ "No jam link yet" }</span>
                    }
                    if editable {
                        <div class="card-actions">
                            <button class="icon-button edit" title="Edit jam link" onclick={link.callback(move |_| Msg::StartEdit(id.clone()))}>
                                <span class="material-icons">{ "edit" }</span>
                            </button>
                            <button class="icon-button delete" title="Delete location" onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                                <span class="material-icons">{ "delete" }</span>
                            </button>
                        </div>
                    }
                </div>
            }
        }
    };

    html! {
        <div class="location-card" key={location.id.clone()}>
            <a class="location-name" href={format!("/locations/{}", location.slug())}>
                <h3>{ &location.name }</h3>
            </a>
            { link_row }
            <p class="muted small">
                { format!(
                    "Last updated by {} on {}",
                    location.updated_by_name,
                    format_timestamp(location.updated_at.timestamp_millis())
                ) }
            </p>
        </div>
    }
}

/// Spinner while a page is in flight; a manual button when the browser has
/// no `IntersectionObserver`.
fn build_footer(component: &LocationsComponent, link: &Scope<LocationsComponent>) -> Html {
    if component.list.is_paginating() {
        return html! { <div class="centered"><span class="spinner"></span></div> };
    }
    let can_load = component.list.phase() == Phase::Ready
        && component.list.has_more()
        && component.list.mode() == Mode::Listing;
    if can_load && component.manual_paging {
        return html! {
            <button class="button" onclick={link.callback(|_| Msg::SentinelVisible)}>{ "Load more" }</button>
        };
    }
    html! {}
}
