//! "Contact Admin" sheet: one free-text message relayed by the server.

use crate::api;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};
use gloo_timers::callback::Timeout;
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactAdminProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub enum Msg {
    SetMessage(String),
    Send,
    Done(Result<(), String>),
    Close,
}

pub struct ContactAdminModal {
    message: String,
    status: Status,
    sheet_ref: NodeRef,
    opening: Option<Timeout>,
    shown: bool,
}

impl Component for ContactAdminModal {
    type Message = Msg;
    type Properties = ContactAdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            message: String::new(),
            status: Status::Idle,
            sheet_ref: NodeRef::default(),
            opening: None,
            shown: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMessage(message) => {
                self.message = message;
                if matches!(self.status, Status::Failed(_) | Status::Sent) {
                    self.status = Status::Idle;
                }
                true
            }
            Msg::Send => {
                let message = self.message.trim().to_string();
                if message.is_empty() || self.status == Status::Sending {
                    return false;
                }
                self.status = Status::Sending;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Done(api::contact_admin(&message).await));
                });
                true
            }
            Msg::Done(Ok(())) => {
                self.status = Status::Sent;
                self.message.clear();
                true
            }
            Msg::Done(Err(e)) => {
                gloo_console::error!("contact admin failed:", e.clone());
                self.status = Status::Failed(e);
                true
            }
            Msg::Close => {
                if self.status != Status::Sending {
                    self.status = Status::Idle;
                    ctx.props().on_close.emit(());
                }
                true
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
        let sending = self.status == Status::Sending;
        let on_input = link.callback(|e: InputEvent| {
            Msg::SetMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Send
        });

        html! {
            <YwMaterialTopSheet node_ref={self.sheet_ref.clone()}>
                <div class="modal">
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>
                    <h2>{ "Contact Admin" }</h2>
                    {
                        match &self.status {
                            Status::Sent => html! { <div class="success-banner">{ "Message sent. Thanks!" }</div> },
                            Status::Failed(e) => html! { <div class="error-banner">{ e }</div> },
                            _ => html! {},
                        }
                    }
                    <form onsubmit={on_submit}>
                        <textarea
                            class="text-input"
                            rows="5"
                            placeholder="What would you like to tell the admin?"
                            value={self.message.clone()}
                            oninput={on_input}
                            disabled={sending}
                        />
                        <div class="modal-actions">
                            <button type="button" class="button" onclick={link.callback(|_| Msg::Close)} disabled={sending}>
                                { "Close" }
                            </button>
                            <button type="submit" class="button primary" disabled={sending || self.message.trim().is_empty()}>
                                { if sending { "Sending..." } else { "Send" } }
                            </button>
                        </div>
                    </form>
                </div>
            </YwMaterialTopSheet>
        }
    }
}
