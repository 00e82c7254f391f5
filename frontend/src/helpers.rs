//! Small DOM and formatting utilities shared by the components.

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Shows a transient notification pinned to the bottom of the page. The
/// element removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

fn options(pairs: &[(&str, &str)]) -> JsValue {
    let options = Object::new();
    for (key, value) in pairs {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    options.into()
}

/// `May 1 at 12:30 PM` for a UTC millisecond timestamp, in the browser's
/// time zone.
pub fn format_timestamp(millis: i64) -> String {
    let date = Date::new(&JsValue::from_f64(millis as f64));
    let day = date.to_locale_date_string("en-US", &options(&[("month", "short"), ("day", "numeric")]));
    let time = date.to_locale_string(
        "en-US",
        &options(&[("hour", "2-digit"), ("minute", "2-digit")]),
    );
    format!("{} at {}", String::from(day), String::from(time))
}

/// Display form of a jam link: scheme dropped, cut to 25 characters.
pub fn short_link(link: &str) -> String {
    let bare = link
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    if bare.chars().count() > 25 {
        format!("{}...", bare.chars().take(25).collect::<String>())
    } else {
        bare.to_string()
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::short_link;

    #[test]
    fn shortens_long_links() {
        assert_eq!(short_link("https://example.com/jam"), "example.com/jam");
        assert_eq!(
            short_link("https://open.spotify.com/socialsession/abcdef"),
            "open.spotify.com/socialse..."
        );
    }
}
