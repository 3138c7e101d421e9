use leptos::ev;
use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::window;
use leptos_use::{use_event_listener, use_window};

/// Reports the window's vertical scroll offset on every scroll event.
///
/// The listener belongs to the calling component's owner and is removed
/// when that component unmounts.
pub fn watch_window_scroll<F>(on_offset: F)
where
    F: Fn(f64) + 'static,
{
    let _stop = use_event_listener(use_window(), ev::scroll, move |_| {
        match window().scroll_y() {
            Ok(y) => on_offset(y),
            Err(err) => console_warn(&format!("scroll offset unavailable: {err:?}")),
        }
    });
}
