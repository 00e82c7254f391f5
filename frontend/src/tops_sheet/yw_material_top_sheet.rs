use gloo_timers::callback::Timeout;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Slide-down sheet used for the modals. The sheet is always mounted; the
/// `show` class drives the CSS transition.
pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet-backdrop">
                <div class="top-sheet" ref={ctx.props().node_ref.clone()}>
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

const SHOW_CLASS: &str = "show";

/// Adds `show` after a short delay so the transition runs from the hidden
/// state even when the sheet was just mounted. Keep the returned timer until
/// the sheet closes; dropping it cancels the pending open.
pub fn open_top_sheet(top_sheet_ref: NodeRef) -> Timeout {
    Timeout::new(50, move || set_shown(&top_sheet_ref, true))
}

/// Cancels an open that has not fired yet, then hides the sheet.
pub fn close_top_sheet(top_sheet_ref: NodeRef, pending_open: Option<Timeout>) {
    if let Some(timer) = pending_open {
        timer.cancel();
    }
    set_shown(&top_sheet_ref, false);
}

fn set_shown(top_sheet_ref: &NodeRef, shown: bool) {
    let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() else {
        return;
    };
    toggle(&sheet, shown, "top sheet toggle failed:");
    if let Some(backdrop) = sheet.parent_element() {
        toggle(&backdrop, shown, "top sheet backdrop toggle failed:");
    }
}

fn toggle(element: &web_sys::Element, shown: bool, context: &str) {
    let classes = element.class_list();
    let result = if shown {
        classes.add_1(SHOW_CLASS)
    } else {
        classes.remove_1(SHOW_CLASS)
    };
    if let Err(e) = result {
        gloo_console::error!(context, e);
    }
}
