//! Root component: loads the session once, then renders the page matching
//! `window.location.pathname`.
//!
//! - `/` is the searchable location list.
//! - `/locations/{slug}` is the detail page.

use crate::api;
use crate::components::contact_admin_modal::ContactAdminModal;
use crate::components::location_detail::LocationDetailPage;
use crate::components::locations::LocationsComponent;
use crate::components::user_profile::UserProfile;
use crate::helpers::current_path;
use common::model::session::SessionUser;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Route {
    Home,
    Detail(String),
}

impl Route {
    fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed.strip_prefix("/locations/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Detail(slug.to_string()),
            _ => Route::Home,
        }
    }
}

pub enum Msg {
    Session(Option<SessionUser>),
    Admin(bool),
    OpenContact,
    CloseContact,
}

pub struct App {
    route: Route,
    user: Option<SessionUser>,
    is_admin: bool,
    session_loaded: bool,
    contact_open: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::session().await {
                Ok(info) => {
                    let signed_in = info.user.is_some();
                    link.send_message(Msg::Session(info.user));
                    if signed_in {
                        match api::check_admin().await {
                            Ok(is_admin) => link.send_message(Msg::Admin(is_admin)),
                            Err(e) => gloo_console::warn!("admin check failed:", e),
                        }
                    }
                }
                Err(e) => {
                    gloo_console::warn!("session lookup failed:", e);
                    link.send_message(Msg::Session(None));
                }
            }
        });

        Self {
            route: Route::from_path(&current_path()),
            user: None,
            is_admin: false,
            session_loaded: false,
            contact_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Session(user) => {
                self.user = user;
                self.session_loaded = true;
            }
            Msg::Admin(is_admin) => self.is_admin = is_admin,
            Msg::OpenContact => self.contact_open = true,
            Msg::CloseContact => self.contact_open = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = match &self.route {
            Route::Home => html! {
                <LocationsComponent user={self.user.clone()} is_admin={self.is_admin} />
            },
            Route::Detail(slug) => html! {
                <LocationDetailPage slug={slug.clone()} user={self.user.clone()} is_admin={self.is_admin} />
            },
        };

        html! {
            <main class="app">
                <header>
                    <a href="/" class="title"><h1>{ "JamSpots" }</h1></a>
                    <p class="muted">{ "Find the jam session playing near you." }</p>
                </header>
                { page }
                <footer>
                    if self.session_loaded {
                        <UserProfile user={self.user.clone()} />
                    }
                    if self.user.is_some() {
                        <button class="button link" onclick={link.callback(|_| Msg::OpenContact)}>
                            { "Contact Admin" }
                        </button>
                        <ContactAdminModal open={self.contact_open} on_close={link.callback(|_| Msg::CloseContact)} />
                    }
                </footer>
            </main>
        }
    }
}
