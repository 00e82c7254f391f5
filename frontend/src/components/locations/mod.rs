//! Home page location list: paginated, searchable, with inline editing for
//! records the signed-in user may modify.
//!
//! Responsibilities
//! - Issue the first page fetch on mount.
//! - Watch the end-of-list sentinel with an `IntersectionObserver` and
//!   request the next page when it comes into view.
//! - Tear down the observer and any pending search timer on unmount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LocationsProps;
pub use state::{can_modify, LocationsComponent};

impl Component for LocationsComponent {
    type Message = Msg;
    type Properties = LocationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = LocationsComponent::new();
        let first = component.list.start();
        update::fetch_page(ctx, first);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.attach_observer(ctx);
        } else if self.reobserve {
            self.reobserve = false;
            if let (Some(observer), Some(sentinel)) =
                (&self.observer, self.sentinel_ref.cast::<web_sys::Element>())
            {
                observer.unobserve(&sentinel);
                observer.observe(&sentinel);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.search_timer = None;
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_callback = None;
    }
}

impl LocationsComponent {
    fn attach_observer(&mut self, ctx: &Context<Self>) {
        let Some(sentinel) = self.sentinel_ref.cast::<web_sys::Element>() else {
            return;
        };
        let link = ctx.link().clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    link.send_message(Msg::SentinelVisible);
                }
            },
        );
        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&sentinel);
                self.observer = Some(observer);
                self.observer_callback = Some(callback);
            }
            Err(e) => {
                gloo_console::warn!("IntersectionObserver unavailable, falling back to a button:", e);
                ctx.link().send_message(Msg::ObserverUnavailable);
            }
        }
    }
}
