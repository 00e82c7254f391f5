//! `/locations/{slug}` page: name, jam link, QR code and the last-updated
//! line, with an inline link editor for the creator or the admin.

use crate::api;
use crate::components::info_tooltip::InfoTooltip;
use crate::components::locations::can_modify;
use crate::helpers::{format_timestamp, show_toast};
use common::model::session::SessionUser;
use common::responses::LocationDetail;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationDetailProps {
    pub slug: String,
    #[prop_or_default]
    pub user: Option<SessionUser>,
    #[prop_or_default]
    pub is_admin: bool,
}

enum Page {
    Loading,
    NotFound,
    Failed(String),
    Loaded(LocationDetail),
}

pub enum Msg {
    Loaded(Result<Option<LocationDetail>, String>),
    StartEdit,
    EditDraft(String),
    CancelEdit,
    SaveEdit,
    Saved(Result<(), String>),
}

pub struct LocationDetailPage {
    page: Page,
    draft: Option<String>,
    saving: bool,
}

fn load(ctx: &Context<LocationDetailPage>) {
    let slug = ctx.props().slug.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(api::by_slug(&slug).await));
    });
}

impl Component for LocationDetailPage {
    type Message = Msg;
    type Properties = LocationDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            page: Page::Loading,
            draft: None,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(Some(detail))) => self.page = Page::Loaded(detail),
            Msg::Loaded(Ok(None)) => self.page = Page::NotFound,
            Msg::Loaded(Err(e)) => self.page = Page::Failed(e),
            Msg::StartEdit => {
                if let Page::Loaded(detail) = &self.page {
                    self.draft = Some(detail.location.jam_link.clone());
                }
            }
            Msg::EditDraft(value) => {
                self.draft = Some(value);
                return false;
            }
            Msg::CancelEdit => self.draft = None,
            Msg::SaveEdit => {
                let (Page::Loaded(detail), Some(draft)) = (&self.page, &self.draft) else {
                    return false;
                };
                if self.saving {
                    return false;
                }
                self.saving = true;
                let id = detail.location.id.clone();
                let draft = draft.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::update_link(&id, &draft).await.map(|_| ());
                    link.send_message(Msg::Saved(result));
                });
            }
            Msg::Saved(Ok(())) => {
                self.saving = false;
                self.draft = None;
                show_toast("Jam link updated");
                // Reload so the QR code matches the new link.
                load(ctx);
            }
            Msg::Saved(Err(e)) => {
                self.saving = false;
                show_toast(&e);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.page {
            Page::Loading => html! { <div class="centered"><span class="spinner"></span></div> },
            Page::NotFound => html! {
                <div class="not-found">
                    <h2>{ "Location Not Found" }</h2>
                    <p class="muted">{ "The location you are looking for does not exist or was deleted." }</p>
                </div>
            },
            Page::Failed(e) => html! { <div class="error-banner">{ e }</div> },
            Page::Loaded(detail) => self.view_detail(ctx, detail),
        };
        html! {
            <div class="location-detail">
                <a class="back-link" href="/">{ "← All locations" }</a>
                { body }
            </div>
        }
    }
}

impl LocationDetailPage {
    fn view_detail(&self, ctx: &Context<Self>, detail: &LocationDetail) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let location = &detail.location;
        let editable = can_modify(props.user.as_ref(), props.is_admin, location);

        let link_block = match &self.draft {
            Some(draft) => {
                let on_draft = link.callback(|e: InputEvent| {
                    Msg::EditDraft(e.target_unchecked_into::<HtmlInputElement>().value())
                });
                html! {
                    <div class="edit-row">
                        <input type="url" class="text-input" value={draft.clone()} oninput={on_draft} disabled={self.saving} />
                        <button class="button primary" onclick={link.callback(|_| Msg::SaveEdit)} disabled={self.saving}>
                            { if self.saving { "Saving..." } else { "Save" } }
                        </button>
                        <button class="button" onclick={link.callback(|_| Msg::CancelEdit)} disabled={self.saving}>{ "Cancel" }</button>
                    </div>
                }
            }
            None => html! {
                <div class="link-row">
                    if location.has_jam_link() {
                        <a class="button primary" href={location.jam_link.clone()} target="_blank" rel="noopener noreferrer">
                            { "Join the Jam" }
                        </a>
                    } else {
                        <span class="muted">{ "No jam link yet" }</span>
                    }
                    if editable {
                        <button class="button" onclick={link.callback(|_| Msg::StartEdit)}>{ "Edit link" }</button>
                    }
                </div>
            },
        };

        html! {
            <div class="location-card detail">
                <div class="detail-header">
                    <h1>{ &location.name }</h1>
                    <InfoTooltip />
                </div>
                { link_block }
                if let Some(qr) = &detail.qr_code {
                    <div class="qr">
                        <img src={qr.clone()} alt={format!("QR code for {}", location.name)} width="192" height="192" />
                        <p class="muted small">{ "Scan to join the jam" }</p>
                    </div>
                }
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
}
