//! Info button on the detail page that toggles a short help card.

use yew::{function_component, html, use_state, Callback, Html, MouseEvent, Properties};

const DEFAULT_TEXT: &[&str] = &[
    "Welcome to JamSpots!",
    "",
    "This is where you can:",
    "• Save and share your Spotify Jam sessions",
    "• Let anyone join your queue and add songs",
    "• Keep jam links up-to-date when one breaks",
    "",
    "Jam etiquette:",
    "• Take turns adding songs",
    "• Respect others' music choices",
    "• Keep the vibe going!",
];

#[derive(Properties, PartialEq)]
pub struct InfoTooltipProps {
    #[prop_or_default]
    pub content: Option<String>,
}

fn tooltip_text(content: Option<&str>) -> String {
    match content {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => DEFAULT_TEXT.join("\n"),
    }
}

#[function_component(InfoTooltip)]
pub fn info_tooltip(props: &InfoTooltipProps) -> Html {
    let visible = use_state(|| false);
    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };
    let hide = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div class="tooltip">
            <button class="icon-button" type="button" aria-label="Show information" onclick={toggle}>
                <span class="material-icons">{ "info" }</span>
            </button>
            if *visible {
                <div class="tooltip-dismiss" onclick={hide}></div>
                <div class="tooltip-card">{ tooltip_text(props.content.as_deref()) }</div>
            }
        </div>
    }
}
