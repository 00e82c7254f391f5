//! "Add New Location" sheet.
//!
//! Cleans the name as it is typed, runs the naming rules and the content
//! filter locally, asks the server whether the name is taken, then creates
//! the record. The server repeats every check; the local ones only save a
//! round trip and give earlier feedback.

use crate::api;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};
use gloo_timers::callback::Timeout;
use common::filter::contains_inappropriate_content;
use common::model::location::Location;
use common::slug::{validate_name, NameError};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddLocationProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_created: Callback<Location>,
}

pub enum Msg {
    SetName(String),
    SetJamLink(String),
    Submit,
    DuplicateChecked(Result<bool, String>),
    Created(Result<Location, String>),
    Close,
}

pub struct AddLocationModal {
    name: String,
    jam_link: String,
    error: Option<String>,
    submitting: bool,
    sheet_ref: NodeRef,
    opening: Option<Timeout>,
    shown: bool,
}

/// Collapses whitespace runs while typing. Trailing space is kept so the
/// user can keep typing the next word.
fn clean_name_input(value: &str) -> String {
    let mut cleaned = String::with_capacity(value.len());
    let mut last_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !last_space {
                cleaned.push(' ');
            }
            last_space = true;
        } else {
            cleaned.push(c);
            last_space = false;
        }
    }
    cleaned
}

impl Component for AddLocationModal {
    type Message = Msg;
    type Properties = AddLocationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            jam_link: String::new(),
            error: None,
            submitting: false,
            sheet_ref: NodeRef::default(),
            opening: None,
            shown: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(value) => {
                self.name = clean_name_input(&value);
                self.error = match validate_name(&self.name) {
                    Err(e @ NameError::InvalidCharacters) | Err(e @ NameError::TooLong) => {
                        Some(e.to_string())
                    }
                    _ => None,
                };
                true
            }
            Msg::SetJamLink(value) => {
                self.jam_link = value;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let name = match validate_name(&self.name) {
                    Ok(name) => name,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return true;
                    }
                };
                if contains_inappropriate_content(&name) {
                    self.error = Some("Please choose an appropriate name".to_string());
                    return true;
                }
                self.error = None;
                self.submitting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::DuplicateChecked(api::check_duplicate(&name).await));
                });
                true
            }
            Msg::DuplicateChecked(Ok(true)) => {
                self.submitting = false;
                self.error = Some("A location with this name already exists".to_string());
                true
            }
            Msg::DuplicateChecked(Ok(false)) => {
                let name = self.name.trim().to_string();
                let jam_link = self.jam_link.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Created(api::create(&name, &jam_link).await));
                });
                false
            }
            Msg::DuplicateChecked(Err(e)) | Msg::Created(Err(e)) => {
                self.submitting = false;
                self.error = Some(format!("Failed to add location. {e}"));
                true
            }
            Msg::Created(Ok(location)) => {
                self.submitting = false;
                self.name.clear();
                self.jam_link.clear();
                ctx.props().on_created.emit(location);
                ctx.props().on_close.emit(());
                true
            }
            Msg::Close => {
                if !self.submitting {
                    self.error = None;
                    ctx.props().on_close.emit(());
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let open = ctx.props().open;
        if open != self.shown {
            self.shown = open;
            if open {
                self.opening = Some(open_top_sheet(self.sheet_ref.clone()));
            } else {
                close_top_sheet(self.sheet_ref.clone(), self.opening.take());
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_name = link.callback(|e: InputEvent| {
            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_link = link.callback(|e: InputEvent| {
            Msg::SetJamLink(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <YwMaterialTopSheet node_ref={self.sheet_ref.clone()}>
                <div class="modal">
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>
                    <h2>{ "Add New Location" }</h2>
                    <form onsubmit={on_submit}>
                        if let Some(error) = &self.error {
                            <div class="error-banner">{ error }</div>
                        }
                        <input
                            type="text"
                            class={classes!("text-input", self.error.is_some().then_some("invalid"))}
                            placeholder="Location name"
                            value={self.name.clone()}
                            oninput={on_name}
                            required=true
                            disabled={self.submitting}
                        />
                        <input
                            type="url"
                            class="text-input"
                            placeholder="Spotify Jam link"
                            value={self.jam_link.clone()}
                            oninput={on_link}
                            required=true
                            disabled={self.submitting}
                        />
                        <div class="modal-actions">
                            <button type="button" class="button" onclick={link.callback(|_| Msg::Close)} disabled={self.submitting}>
                                { "Cancel" }
                            </button>
                            <button type="submit" class="button primary" disabled={self.submitting}>
                                { if self.submitting { "Adding..." } else { "Add Location" } }
                            </button>
                        </div>
                    </form>
                </div>
            </YwMaterialTopSheet>
        }
    }
}
